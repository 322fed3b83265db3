use axum::{extract::State, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::extractors::{admin::AdminUser, client::ClientId, json::ApiJson};
use crate::api::dtos::responses::SubmitResponse;
use crate::domain::models::rsvp::RsvpForm;
use crate::error::AppError;
use std::sync::Arc;

pub async fn submit_rsvp(
    State(state): State<Arc<AppState>>,
    ClientId(client_id): ClientId,
    ApiJson(form): ApiJson<RsvpForm>,
) -> Result<impl IntoResponse, AppError> {
    let receipt = state.rsvp_service.submit(&client_id, form).await?;
    Ok(Json(SubmitResponse::accepted(receipt.id)))
}

pub async fn list_rsvps(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
) -> Result<impl IntoResponse, AppError> {
    let rsvps = state.rsvp_service.all().await?;
    Ok(Json(rsvps))
}

pub async fn rsvp_summary(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
) -> Result<impl IntoResponse, AppError> {
    let summary = state.rsvp_service.summary().await?;
    Ok(Json(summary))
}
