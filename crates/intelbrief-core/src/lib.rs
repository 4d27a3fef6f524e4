use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

mod app_config;
mod config;
mod ids;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use ids::generate_cuid;

/// A competitor news item as consumed by the debrief pipeline.
///
/// `competitor_name` is denormalized via the join at the repository layer;
/// rows without a matching competitor never reach this type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsItem {
    pub id: String,
    pub competitor_id: String,
    pub competitor_name: String,
    pub title: String,
    pub summary: String,
    pub date: DateTime<Utc>,
    pub threat_level: i32,
    pub event_type: String,
    /// `None` means the item is not tied to a region and renders as "Global".
    pub region: Option<String>,
    pub source_url: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),
    #[error("invalid value for environment variable {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
