use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use serde::Serialize;
use crate::domain::models::event::WeddingEvent;

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Countdown {
    pub target: DateTime<Utc>,
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
    pub is_past: bool,
}

pub fn countdown(now: DateTime<Utc>, target: DateTime<Utc>) -> Countdown {
    let remaining = target - now;
    if remaining.num_seconds() <= 0 {
        return Countdown { target, days: 0, hours: 0, minutes: 0, seconds: 0, is_past: true };
    }

    let total = remaining.num_seconds();
    Countdown {
        target,
        days: total / 86_400,
        hours: (total % 86_400) / 3_600,
        minutes: (total % 3_600) / 60,
        seconds: total % 60,
        is_past: false,
    }
}

/// Start time in the event's own timezone, e.g. "Saturday, June 14, 2025 at 4:00 PM".
pub fn format_event_time(event: &WeddingEvent) -> String {
    let tz: Tz = event.timezone.parse().unwrap_or(chrono_tz::UTC);
    event.starts_at
        .with_timezone(&tz)
        .format("%A, %B %-d, %Y at %-I:%M %p")
        .to_string()
}
