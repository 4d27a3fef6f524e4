//! Offline unit tests for intelbrief-db pool configuration and row types.
//! These tests do not require a live database connection.

use chrono::{TimeZone, Utc};
use intelbrief_core::{AppConfig, Environment, NewsItem};
use intelbrief_db::{
    compute_window, fmt_timestamp_utc_ms, CompetitorNewsRow, DebriefRow, NewsWindow, PoolConfig,
};

#[test]
fn pool_config_from_app_config_uses_core_values() {
    let app_config = AppConfig {
        database_url: "postgres://example".to_string(),
        anthropic_api_key: "sk-ant-test".to_string(),
        env: Environment::Test,
        log_level: "info".to_string(),
        db_max_connections: 42,
        db_min_connections: 7,
        db_acquire_timeout_secs: 9,
        anthropic_timeout_secs: 120,
    };

    let pool_config = PoolConfig::from_app_config(&app_config);
    assert_eq!(pool_config.max_connections, 42);
    assert_eq!(pool_config.min_connections, 7);
    assert_eq!(pool_config.acquire_timeout_secs, 9);
}

/// Compile-time smoke test: confirm that [`CompetitorNewsRow`] has all
/// expected fields with the correct types and converts cleanly into the
/// core domain type. No database required.
#[test]
fn competitor_news_row_converts_to_news_item() {
    let row = CompetitorNewsRow {
        id: "cnews0001".to_string(),
        competitor_id: "ccomp0001".to_string(),
        competitor_name: "Mappedin".to_string(),
        title: "Mappedin partners with a major airport group".to_string(),
        summary: "Indoor mapping rollout across three terminals.".to_string(),
        date: Utc.with_ymd_and_hms(2025, 6, 10, 9, 0, 0).unwrap(),
        threat_level: 5,
        event_type: "partnership".to_string(),
        region: None,
        source_url: "https://example.com/news/1".to_string(),
    };

    let item = NewsItem::from(row);
    assert_eq!(item.competitor_name, "Mappedin");
    assert_eq!(item.threat_level, 5);
    assert!(item.region.is_none());
}

/// Compile-time smoke test for [`DebriefRow`].
#[test]
fn debrief_row_has_expected_fields() {
    let row = DebriefRow {
        id: "cabc123abc123abc123abc123".to_string(),
        content: "## Executive Summary\n...".to_string(),
        period_start: Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap(),
        period_end: Utc.with_ymd_and_hms(2025, 6, 15, 0, 0, 0).unwrap(),
        item_count: 3,
        generated_at: Utc::now(),
    };

    assert_eq!(row.id.len(), 25);
    assert_eq!(row.item_count, 3);
    assert!(row.period_start < row.period_end);
}

#[test]
fn news_window_carries_bounds_even_when_empty() {
    let end = Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap();
    let (start, end) = compute_window(end, 14);
    let window = NewsWindow {
        items: Vec::new(),
        start,
        end,
    };

    assert!(window.items.is_empty());
    assert_eq!(window.end - window.start, chrono::Duration::days(14));
}

#[test]
fn wire_timestamps_round_trip_shape() {
    let ts = Utc.with_ymd_and_hms(2025, 12, 31, 23, 59, 59).unwrap();
    let rendered = fmt_timestamp_utc_ms(ts);
    assert!(rendered.ends_with(".000Z"));
    assert_eq!(rendered.len(), "2025-12-31T23:59:59.000Z".len());
}
