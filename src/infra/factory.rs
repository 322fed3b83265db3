use std::sync::Arc;
use tracing::info;

use crate::config::Config;
use crate::state::AppState;
use crate::error::AppError;
use crate::domain::ports::{Clock, SystemClock};
use crate::domain::schedule::Schedule;
use crate::domain::services::{
    guestbook_service::GuestbookService,
    rate_limiter::SlidingWindowRateLimiter,
    rsvp_service::RsvpService,
};
use crate::infra::repositories::{
    memory_guestbook_repo::InMemoryGuestbookRepo,
    memory_rsvp_repo::InMemoryRsvpRepo,
};

pub async fn bootstrap_state(config: &Config) -> Result<AppState, AppError> {
    let schedule = match &config.schedule_file {
        Some(path) => {
            let schedule = Schedule::load(path).await?;
            info!("Loaded {} schedule events from {}", schedule.events().len(), path);
            schedule
        }
        None => {
            info!("No SCHEDULE_FILE set, serving an empty schedule");
            Schedule::default()
        }
    };

    Ok(build_state(config.clone(), Arc::new(SystemClock), schedule))
}

/// Wires the in-memory adapters around `clock`. Stores live as long as the
/// returned state.
pub fn build_state(config: Config, clock: Arc<dyn Clock>, schedule: Schedule) -> AppState {
    info!("Initializing in-memory RSVP and guestbook stores...");

    let rsvp_limiter = Arc::new(SlidingWindowRateLimiter::new(
        config.rsvp_rate_limit.max_requests,
        config.rsvp_rate_limit.window,
        clock.clone(),
    ));
    let guestbook_limiter = Arc::new(SlidingWindowRateLimiter::new(
        config.guestbook_rate_limit.max_requests,
        config.guestbook_rate_limit.window,
        clock.clone(),
    ));

    let rsvp_service = Arc::new(RsvpService::new(
        Arc::new(InMemoryRsvpRepo::new(clock.clone())),
        rsvp_limiter.clone(),
    ));
    let guestbook_service = Arc::new(GuestbookService::new(
        Arc::new(InMemoryGuestbookRepo::new(clock.clone())),
        guestbook_limiter.clone(),
        clock.clone(),
    ));

    AppState {
        config,
        clock,
        rsvp_limiter,
        guestbook_limiter,
        rsvp_service,
        guestbook_service,
        schedule: Arc::new(schedule),
    }
}
