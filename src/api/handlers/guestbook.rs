use axum::{extract::{Path, State}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::extractors::{admin::AdminUser, client::ClientId, json::ApiJson};
use crate::api::dtos::{requests::ModerateEntryRequest, responses::SubmitResponse};
use crate::domain::models::guestbook::{EntryStatus, GuestbookForm};
use crate::error::AppError;
use std::sync::Arc;
use tracing::info;

pub async fn sign_guestbook(
    State(state): State<Arc<AppState>>,
    ClientId(client_id): ClientId,
    ApiJson(form): ApiJson<GuestbookForm>,
) -> Result<impl IntoResponse, AppError> {
    let entry = state.guestbook_service.sign(&client_id, form).await?;
    Ok(Json(SubmitResponse::accepted(entry.id)))
}

pub async fn list_approved(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let entries = state.guestbook_service.approved().await?;
    Ok(Json(entries))
}

pub async fn list_all_entries(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
) -> Result<impl IntoResponse, AppError> {
    let entries = state.guestbook_service.all().await?;
    Ok(Json(entries))
}

pub async fn moderate_entry(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
    Path(entry_id): Path<String>,
    ApiJson(payload): ApiJson<ModerateEntryRequest>,
) -> Result<impl IntoResponse, AppError> {
    let status = EntryStatus::parse(&payload.status)
        .ok_or_else(|| AppError::Validation("Status must be approved or rejected".into()))?;

    let entry = state.guestbook_service.moderate(&entry_id, status).await?;
    info!("Moderated guestbook entry: {}", entry_id);
    Ok(Json(entry))
}
