use std::sync::Arc;
use crate::domain::ports::Clock;
use crate::domain::schedule::Schedule;
use crate::domain::services::{
    guestbook_service::GuestbookService,
    rate_limiter::SlidingWindowRateLimiter,
    rsvp_service::RsvpService,
};
use crate::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub clock: Arc<dyn Clock>,
    pub rsvp_limiter: Arc<SlidingWindowRateLimiter>,
    pub guestbook_limiter: Arc<SlidingWindowRateLimiter>,
    pub rsvp_service: Arc<RsvpService>,
    pub guestbook_service: Arc<GuestbookService>,
    pub schedule: Arc<Schedule>,
}
