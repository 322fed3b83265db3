use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};

fn default_timezone() -> String {
    "UTC".to_string()
}

/// One entry of the wedding schedule (ceremony, reception, haldi, ...).
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct WeddingEvent {
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: String,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    #[serde(default = "default_timezone")]
    pub timezone: String,
}
