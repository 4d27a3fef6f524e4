//! Database operations for the `"Debrief"` table.

use chrono::{DateTime, Utc};
use intelbrief_core::generate_cuid;
use sqlx::PgPool;

use crate::DbError;

// ---------------------------------------------------------------------------
// Row type
// ---------------------------------------------------------------------------

/// A row from the `"Debrief"` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct DebriefRow {
    pub id: String,
    pub content: String,
    pub period_start: DateTime<Utc>,
    pub period_end: DateTime<Utc>,
    pub item_count: i32,
    pub generated_at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Timestamp wire format
// ---------------------------------------------------------------------------

/// Render a timestamp as UTC with a literal `.000Z` suffix, regardless of
/// actual sub-second precision.
///
/// This is the exact shape the store's `timestamp(3)` columns were written
/// with by the collecting application; keeping it identical preserves
/// interoperability.
#[must_use]
pub fn fmt_timestamp_utc_ms(ts: DateTime<Utc>) -> String {
    ts.format("%Y-%m-%dT%H:%M:%S.000Z").to_string()
}

// ---------------------------------------------------------------------------
// Queries
// ---------------------------------------------------------------------------

/// Insert a new debrief and return its application-generated id.
///
/// The id comes from [`generate_cuid`] so it is known before the insert;
/// `generatedAt` is captured at call time. The write is a single atomic
/// INSERT — there is nothing to roll back on failure.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the insert fails.
pub async fn insert_debrief(
    pool: &PgPool,
    content: &str,
    period_start: DateTime<Utc>,
    period_end: DateTime<Utc>,
    item_count: i32,
) -> Result<String, DbError> {
    let debrief_id = generate_cuid();
    let generated_at = Utc::now();

    sqlx::query(
        "INSERT INTO \"Debrief\" \
             (id, content, \"periodStart\", \"periodEnd\", \"itemCount\", \"generatedAt\") \
         VALUES ($1, $2, $3::timestamptz, $4::timestamptz, $5, $6::timestamptz)",
    )
    .bind(&debrief_id)
    .bind(content)
    .bind(fmt_timestamp_utc_ms(period_start))
    .bind(fmt_timestamp_utc_ms(period_end))
    .bind(item_count)
    .bind(fmt_timestamp_utc_ms(generated_at))
    .execute(pool)
    .await?;

    tracing::info!(id = %debrief_id, item_count, "inserted debrief");

    Ok(debrief_id)
}

/// List recent debriefs, newest first.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn list_debriefs(pool: &PgPool, limit: i64) -> Result<Vec<DebriefRow>, DbError> {
    let rows = sqlx::query_as::<_, DebriefRow>(
        "SELECT id, content, \"periodStart\" AS period_start, \"periodEnd\" AS period_end, \
                \"itemCount\" AS item_count, \"generatedAt\" AS generated_at \
         FROM \"Debrief\" \
         ORDER BY \"generatedAt\" DESC \
         LIMIT $1",
    )
    .bind(limit)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

/// Return the most recently generated debrief, or `None` if none exists.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn get_latest_debrief(pool: &PgPool) -> Result<Option<DebriefRow>, DbError> {
    let row = sqlx::query_as::<_, DebriefRow>(
        "SELECT id, content, \"periodStart\" AS period_start, \"periodEnd\" AS period_end, \
                \"itemCount\" AS item_count, \"generatedAt\" AS generated_at \
         FROM \"Debrief\" \
         ORDER BY \"generatedAt\" DESC \
         LIMIT 1",
    )
    .fetch_optional(pool)
    .await?;

    Ok(row)
}
