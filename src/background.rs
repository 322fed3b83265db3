use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, info, info_span};
use crate::state::AppState;

/// Periodically forgets identifiers whose rate-limit windows have emptied,
/// so the limiter maps do not grow with every client ever seen.
pub async fn start_rate_limit_sweeper(state: Arc<AppState>) {
    info!("Starting rate-limit sweeper (every {:?})...", state.config.sweep_interval);

    loop {
        sleep(state.config.sweep_interval.max(Duration::from_secs(1))).await;
        sweep_once(&state);
    }
}

pub fn sweep_once(state: &AppState) -> usize {
    let _span = info_span!("rate_limit_sweep").entered();

    let rsvp = state.rsvp_limiter.prune_idle();
    let guestbook = state.guestbook_limiter.prune_idle();

    if rsvp + guestbook > 0 {
        info!(rsvp, guestbook, "Evicted idle rate-limit windows");
    } else {
        debug!(
            rsvp_tracked = state.rsvp_limiter.tracked_identifiers(),
            guestbook_tracked = state.guestbook_limiter.tracked_identifiers(),
            "Nothing to evict"
        );
    }
    rsvp + guestbook
}
