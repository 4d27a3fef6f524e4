//! Read-side queries for the Prisma-managed `"CompetitorNews"` table.
//!
//! The table and its schema are owned by the collecting application; this
//! crate only reads from it. Prisma identifiers are mixed-case and must be
//! quoted exactly in SQL.

use chrono::{DateTime, Duration, Utc};
use intelbrief_core::NewsItem;
use sqlx::PgPool;

use crate::DbError;

/// Cap on how many items feed a single debrief, to bound prompt size.
const NEWS_WINDOW_LIMIT: i64 = 50;

// ---------------------------------------------------------------------------
// Row type
// ---------------------------------------------------------------------------

/// A row from `"CompetitorNews"` joined to `"Competitor"` for the display name.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct CompetitorNewsRow {
    pub id: String,
    pub competitor_id: String,
    pub competitor_name: String,
    pub title: String,
    pub summary: String,
    pub date: DateTime<Utc>,
    pub threat_level: i32,
    pub event_type: String,
    pub region: Option<String>,
    pub source_url: String,
}

impl From<CompetitorNewsRow> for NewsItem {
    fn from(row: CompetitorNewsRow) -> Self {
        NewsItem {
            id: row.id,
            competitor_id: row.competitor_id,
            competitor_name: row.competitor_name,
            title: row.title,
            summary: row.summary,
            date: row.date,
            threat_level: row.threat_level,
            event_type: row.event_type,
            region: row.region,
            source_url: row.source_url,
        }
    }
}

/// The ranked news slice for one debrief run, with the window bounds that
/// selected it. Bounds are carried even when `items` is empty — they are
/// persisted with the debrief downstream.
#[derive(Debug, Clone)]
pub struct NewsWindow {
    pub items: Vec<NewsItem>,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Queries
// ---------------------------------------------------------------------------

/// Compute the closed lookback interval `[end - days, end]`.
#[must_use]
pub fn compute_window(end: DateTime<Utc>, days: i64) -> (DateTime<Utc>, DateTime<Utc>) {
    (end - Duration::days(days), end)
}

/// Fetch competitor news from the last `days` days, most severe first.
///
/// Joins each item to its competitor for the display name; items whose
/// competitor no longer exists are excluded by the inner join. Both window
/// endpoints are inclusive, matching the collecting application's query.
/// At most 50 items are returned, ordered by `"threatLevel"` descending
/// (no secondary sort — ties land in storage order).
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails. Failures are fatal to the
/// run; there are no partial results.
pub async fn fetch_recent_news(pool: &PgPool, days: i64) -> Result<NewsWindow, DbError> {
    let (start, end) = compute_window(Utc::now(), days);

    let rows = sqlx::query_as::<_, CompetitorNewsRow>(
        "SELECT cn.id, cn.\"competitorId\" AS competitor_id, c.name AS competitor_name, \
                cn.title, cn.summary, cn.date, cn.\"threatLevel\" AS threat_level, \
                cn.\"eventType\" AS event_type, cn.region, cn.\"sourceUrl\" AS source_url \
         FROM \"CompetitorNews\" cn \
         JOIN \"Competitor\" c ON cn.\"competitorId\" = c.id \
         WHERE cn.date >= $1 AND cn.date <= $2 \
         ORDER BY cn.\"threatLevel\" DESC \
         LIMIT $3",
    )
    .bind(start)
    .bind(end)
    .bind(NEWS_WINDOW_LIMIT)
    .fetch_all(pool)
    .await?;

    tracing::debug!(count = rows.len(), %start, %end, "fetched news window");

    Ok(NewsWindow {
        items: rows.into_iter().map(NewsItem::from).collect(),
        start,
        end,
    })
}
