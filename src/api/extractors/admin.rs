use axum::{
    extract::{FromRequestParts, FromRef},
    http::{header, request::Parts},
};
use crate::state::AppState;
use crate::error::AppError;
use std::sync::Arc;
use tracing::warn;

/// Grants access to admin routes when `Authorization: Bearer <ADMIN_TOKEN>`
/// matches the configured token. With no token configured every request is
/// refused.
pub struct AdminUser;

impl<S> FromRequestParts<S> for AdminUser
where
    S: Send + Sync,
    Arc<AppState>: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = <Arc<AppState> as FromRef<S>>::from_ref(state);

        let expected = app_state.config.admin_token.as_deref()
            .ok_or(AppError::Unauthorized)?;

        let presented = parts.headers.get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.strip_prefix("Bearer "))
            .ok_or(AppError::Unauthorized)?;

        if !constant_time_eq(presented.trim().as_bytes(), expected.trim().as_bytes()) {
            warn!("Rejected admin request with invalid token");
            return Err(AppError::Unauthorized);
        }
        Ok(AdminUser)
    }
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    a.len() == b.len() && a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}
