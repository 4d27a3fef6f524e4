//! Deterministic rendering of news items into the prompt's news block.

use intelbrief_core::NewsItem;

/// Render news items as a numbered text block, one paragraph per item.
///
/// Pure and deterministic: the same input sequence always yields
/// byte-identical output. A missing region renders as `Global`. Empty input
/// yields an empty string — deciding whether to proceed on an empty window
/// is the caller's job.
#[must_use]
pub fn format_news(items: &[NewsItem]) -> String {
    let blocks: Vec<String> = items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            format!(
                "{index}. [{name}] {title}\n   \
                 Date: {date}\n   \
                 Threat Level: {threat}/5\n   \
                 Type: {event_type}\n   \
                 Region: {region}\n   \
                 Summary: {summary}\n   \
                 Source: {source}\n",
                index = i + 1,
                name = item.competitor_name,
                title = item.title,
                date = item.date,
                threat = item.threat_level,
                event_type = item.event_type,
                region = item.region.as_deref().unwrap_or("Global"),
                summary = item.summary,
                source = item.source_url,
            )
        })
        .collect();

    blocks.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn item(name: &str, title: &str, threat: i32, region: Option<&str>) -> NewsItem {
        NewsItem {
            id: format!("cnews-{name}"),
            competitor_id: format!("ccomp-{name}"),
            competitor_name: name.to_string(),
            title: title.to_string(),
            summary: format!("{name} did something notable."),
            date: Utc.with_ymd_and_hms(2025, 6, 10, 9, 0, 0).unwrap(),
            threat_level: threat,
            event_type: "expansion".to_string(),
            region: region.map(str::to_string),
            source_url: "https://example.com/news".to_string(),
        }
    }

    #[test]
    fn empty_input_yields_empty_string() {
        assert_eq!(format_news(&[]), "");
    }

    #[test]
    fn renders_one_indexed_paragraphs_in_input_order() {
        let items = vec![
            item("Mappedin", "Airport deal", 5, Some("MENA")),
            item("Pointr", "New funding round", 4, None),
        ];
        let block = format_news(&items);

        assert!(block.starts_with("1. [Mappedin] Airport deal\n"));
        assert!(block.contains("\n2. [Pointr] New funding round\n"));
        // Blocks are separated by a blank line.
        assert!(block.contains("\n\n2. "));
    }

    #[test]
    fn renders_threat_level_out_of_five() {
        let block = format_news(&[item("22Miles", "Kiosk launch", 3, Some("North America"))]);
        assert!(block.contains("Threat Level: 3/5"));
    }

    #[test]
    fn missing_region_renders_as_global() {
        let block = format_news(&[item("ViaDirect", "Mall signage rollout", 2, None)]);
        assert!(block.contains("Region: Global"));
    }

    #[test]
    fn present_region_renders_verbatim() {
        let block = format_news(&[item("MapsPeople", "Hospital contract", 4, Some("Europe"))]);
        assert!(block.contains("Region: Europe"));
    }

    #[test]
    fn output_is_deterministic() {
        let items = vec![
            item("Mappedin", "Airport deal", 5, Some("MENA")),
            item("Pointr", "New funding round", 4, None),
            item("22Miles", "Kiosk launch", 3, Some("APAC")),
        ];
        assert_eq!(format_news(&items), format_news(&items));
    }

    #[test]
    fn includes_all_fixed_fields_per_item() {
        let block = format_news(&[item("Mappedin", "Airport deal", 5, Some("MENA"))]);
        for label in ["Date:", "Threat Level:", "Type:", "Region:", "Summary:", "Source:"] {
            assert!(block.contains(label), "missing label {label} in:\n{block}");
        }
    }
}
