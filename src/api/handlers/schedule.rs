use axum::{
    extract::{Path, State},
    http::header,
    response::IntoResponse,
    Json,
};
use crate::state::AppState;
use crate::api::dtos::responses::ScheduleEventResponse;
use crate::domain::services::{
    calendar::{generate_ics, generate_schedule_ics},
    countdown::{countdown, format_event_time},
};
use crate::error::AppError;
use std::sync::Arc;

pub async fn list_schedule(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let events: Vec<ScheduleEventResponse> = state.schedule.events()
        .iter()
        .map(|e| ScheduleEventResponse {
            display_time: format_event_time(e),
            event: e.clone(),
        })
        .collect();
    Ok(Json(events))
}

pub async fn schedule_calendar(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let ics = generate_schedule_ics(state.schedule.events());
    Ok(calendar_response("wedding.ics".to_string(), ics))
}

pub async fn event_calendar(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let event = state.schedule.find(&slug)
        .ok_or_else(|| AppError::NotFound("Event not found".into()))?;

    let ics = generate_ics(event);
    Ok(calendar_response(format!("{}.ics", event.slug), ics))
}

pub async fn get_countdown(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let target = state.config.wedding_date
        .or_else(|| state.schedule.first_start())
        .ok_or_else(|| AppError::NotFound("No wedding date configured".into()))?;

    Ok(Json(countdown(state.clock.now(), target)))
}

fn calendar_response(filename: String, ics: String) -> impl IntoResponse {
    (
        [
            (header::CONTENT_TYPE, "text/calendar; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, format!("attachment; filename=\"{}\"", filename)),
        ],
        ics,
    )
}
