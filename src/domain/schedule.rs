use chrono::{DateTime, Utc};
use crate::domain::models::event::WeddingEvent;
use crate::error::AppError;

/// The wedding's events, ordered by start time.
#[derive(Debug, Clone, Default)]
pub struct Schedule {
    events: Vec<WeddingEvent>,
}

impl Schedule {
    pub fn new(mut events: Vec<WeddingEvent>) -> Self {
        events.sort_by_key(|e| e.starts_at);
        Self { events }
    }

    pub fn from_json(raw: &str) -> Result<Self, AppError> {
        let events: Vec<WeddingEvent> = serde_json::from_str(raw)
            .map_err(|e| AppError::Config(format!("Invalid schedule file: {}", e)))?;

        if let Some(bad) = events.iter().find(|e| e.ends_at < e.starts_at) {
            return Err(AppError::Config(format!("Schedule event '{}' ends before it starts", bad.slug)));
        }
        Ok(Self::new(events))
    }

    pub async fn load(path: &str) -> Result<Self, AppError> {
        let raw = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| AppError::Config(format!("Cannot read schedule file {}: {}", path, e)))?;
        Self::from_json(&raw)
    }

    pub fn events(&self) -> &[WeddingEvent] {
        &self.events
    }

    pub fn find(&self, slug: &str) -> Option<&WeddingEvent> {
        self.events.iter().find(|e| e.slug == slug)
    }

    pub fn first_start(&self) -> Option<DateTime<Utc>> {
        self.events.first().map(|e| e.starts_at)
    }
}
