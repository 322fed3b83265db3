use axum::{
    body::Body,
    extract::Request,
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use crate::state::AppState;
use crate::api::handlers::{health, rsvp, guestbook, schedule};
use tower_http::{
    trace::TraceLayer,
    classify::ServerErrorsFailureClass,
};
use tracing::{info_span, Span, error, info};
use uuid::Uuid;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health::health_check))

        // RSVP
        .route("/api/v1/rsvp", post(rsvp::submit_rsvp))
        .route("/api/v1/admin/rsvps", get(rsvp::list_rsvps))
        .route("/api/v1/admin/rsvps/summary", get(rsvp::rsvp_summary))

        // Guestbook
        .route("/api/v1/guestbook", get(guestbook::list_approved).post(guestbook::sign_guestbook))
        .route("/api/v1/admin/guestbook", get(guestbook::list_all_entries))
        .route("/api/v1/admin/guestbook/{entry_id}", put(guestbook::moderate_entry))

        // Schedule
        .route("/api/v1/schedule", get(schedule::list_schedule))
        .route("/api/v1/schedule/calendar.ics", get(schedule::schedule_calendar))
        .route("/api/v1/schedule/{slug}/calendar.ics", get(schedule::event_calendar))
        .route("/api/v1/countdown", get(schedule::get_countdown))

        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id = Uuid::new_v4().to_string();
                    info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = ?request.method(),
                        uri = ?request.uri(),
                        version = ?request.version(),
                        client_id = tracing::field::Empty,
                    )
                })
                .on_request(|request: &Request<Body>, _span: &Span| {
                    info!("started processing request: {} {}", request.method(), request.uri().path());
                })
                .on_response(|response: &axum::http::Response<Body>, latency: Duration, _span: &Span| {
                    info!(
                        status = response.status().as_u16(),
                        latency_ms = latency.as_millis(),
                        "finished processing request"
                    );
                })
                .on_failure(|error: ServerErrorsFailureClass, _latency: Duration, _span: &Span| {
                    error!("request failed: {:?}", error);
                })
        )
        .with_state(state)
}
