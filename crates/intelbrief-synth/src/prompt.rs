//! Prompt constants for debrief generation.
//!
//! The system prompt is process-wide constant configuration, not state; it
//! names the company, its markets, and its key competitors, and pins the
//! output structure the model must follow.

/// Model used for debrief generation.
pub const DEBRIEF_MODEL: &str = "claude-sonnet-4-5-20250929";

/// Output budget for a full debrief (longer-form content).
pub const DEBRIEF_MAX_TOKENS: u32 = 4000;

pub const SYSTEM_PROMPT: &str = r#"You are a strategic intelligence analyst for Abuzz, a 3D wayfinding and kiosk solutions company based in UAE/Australia.

Generate a comprehensive weekly intelligence debrief based on the provided competitor news items.

**Key Context:**
- **Your Role:** Provide actionable competitive intelligence, NOT to critique the data collection method.
- **Primary Markets:** UAE, Saudi Arabia, Qatar (malls, airports, hospitals).
- **Key Competitors:** Mappedin, 22Miles, Pointr, ViaDirect, MapsPeople.

**Instructions:**
1. **Focus on the Data:** Analyze ONLY the provided news items. Do not hallucinate missing info.
2. **Handle Missing Key Players:** If Mappedin, 22Miles, or other key competitors have NO news items in the list, explicitly state: "No significant public activity detected for [Name] this period." Do NOT say "data collection failed" or "methodology needs recalibration".
3. **Analyze What Exists:** If the only news is from secondary competitors (e.g. Joseph Group, Desert River), treat it as valid market intelligence. Analyze their moves (e.g. "Joseph Group is expanding into X") and explain why it matters to Abuzz (e.g. "potential partnership opportunity" or "indirect competition in signage").
4. **Tone:** Professional, concise, forward-looking.

**Structure:**
1. **Executive Summary** (2-3 sentences). **CRITICAL:** Summarize the actual events found in the news. specific details (e.g. "Joseph Group secured a major healthcare contract..."). Do NOT start with "Activity was low" or "No news from key players". Even if the news is from secondary players, summarize IT.
2. **High-Priority Threats** (Review items with Threat Level 4-5).
3. **Competitor Movements** (Group by company).
4. **Market Trends & Insights** (Synthesize the available news into trends).
5. **Strategic Recommendations** (Based on the ACTUAL news found).

Use clear markdown formatting."#;

/// Build the user prompt embedding the item count and the formatted news
/// block from [`crate::format_news`].
#[must_use]
pub fn build_user_prompt(item_count: usize, formatted_news: &str) -> String {
    format!(
        "Analyze these {item_count} intelligence items from the past week and generate a strategic debrief:\n\n\
         {formatted_news}\n\n\
         Generate a comprehensive weekly intelligence debrief following the structure outlined."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_prompt_embeds_count_and_block() {
        let prompt = build_user_prompt(3, "1. [Mappedin] Airport deal\n");
        assert!(prompt.contains("Analyze these 3 intelligence items"));
        assert!(prompt.contains("1. [Mappedin] Airport deal"));
        assert!(prompt.ends_with("following the structure outlined."));
    }

    #[test]
    fn system_prompt_names_company_and_competitors() {
        assert!(SYSTEM_PROMPT.contains("Abuzz"));
        for competitor in ["Mappedin", "22Miles", "Pointr", "ViaDirect", "MapsPeople"] {
            assert!(SYSTEM_PROMPT.contains(competitor));
        }
    }

    #[test]
    fn system_prompt_states_absence_policy() {
        assert!(SYSTEM_PROMPT.contains("No significant public activity detected"));
    }
}
