use std::env;
use std::str::FromStr;
use std::time::Duration;
use chrono::{DateTime, Utc};
use crate::error::AppError;

#[derive(Clone, Debug)]
pub struct RateLimitConfig {
    pub max_requests: usize,
    pub window: Duration,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            max_requests: 3,
            window: Duration::from_millis(60_000),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub port: u16,
    pub rsvp_rate_limit: RateLimitConfig,
    pub guestbook_rate_limit: RateLimitConfig,
    pub sweep_interval: Duration,
    pub admin_token: Option<String>,
    pub schedule_file: Option<String>,
    pub wedding_date: Option<DateTime<Utc>>,
    pub log_dir: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 3000,
            rsvp_rate_limit: RateLimitConfig::default(),
            guestbook_rate_limit: RateLimitConfig::default(),
            sweep_interval: Duration::from_secs(300),
            admin_token: None,
            schedule_file: None,
            wedding_date: None,
            log_dir: "./logs".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let defaults = Config::default();

        let wedding_date = match optional("WEDDING_DATE") {
            Some(raw) => Some(
                DateTime::parse_from_rfc3339(&raw)
                    .map_err(|e| AppError::Config(format!("WEDDING_DATE must be RFC 3339: {}", e)))?
                    .with_timezone(&Utc),
            ),
            None => None,
        };

        Ok(Self {
            port: parsed("PORT", defaults.port)?,
            rsvp_rate_limit: RateLimitConfig {
                max_requests: parsed("RSVP_RATE_LIMIT_MAX", defaults.rsvp_rate_limit.max_requests)?,
                window: Duration::from_millis(parsed("RSVP_RATE_LIMIT_WINDOW_MS", 60_000u64)?),
            },
            guestbook_rate_limit: RateLimitConfig {
                max_requests: parsed("GUESTBOOK_RATE_LIMIT_MAX", defaults.guestbook_rate_limit.max_requests)?,
                window: Duration::from_millis(parsed("GUESTBOOK_RATE_LIMIT_WINDOW_MS", 60_000u64)?),
            },
            sweep_interval: Duration::from_secs(parsed("RATE_LIMIT_SWEEP_SECS", 300u64)?),
            admin_token: optional("ADMIN_TOKEN").map(|t| t.trim().to_string()),
            schedule_file: optional("SCHEDULE_FILE"),
            wedding_date,
            log_dir: optional("LOG_DIR").unwrap_or(defaults.log_dir),
        })
    }
}

fn optional(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parsed<T>(key: &str, default: T) -> Result<T, AppError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match optional(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e| AppError::Config(format!("{} is invalid: {}", key, e))),
        None => Ok(default),
    }
}
