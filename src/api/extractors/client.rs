use axum::{
    extract::{ConnectInfo, FromRequestParts},
    http::request::Parts,
};
use std::convert::Infallible;
use std::net::SocketAddr;
use tracing::Span;

/// Key used for per-client rate limiting: the first `X-Forwarded-For` hop,
/// then `X-Real-IP`, then the socket peer address.
///
/// Forwarding headers are taken at face value, so this is only as
/// trustworthy as the proxy in front of the service.
pub struct ClientId(pub String);

impl<S> FromRequestParts<S> for ClientId
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let forwarded = parts.headers.get("X-Forwarded-For")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(',').next())
            .map(str::trim)
            .filter(|v| !v.is_empty());

        let real_ip = parts.headers.get("X-Real-IP")
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|v| !v.is_empty());

        let id = match forwarded.or(real_ip) {
            Some(ip) => ip.to_string(),
            None => parts.extensions.get::<ConnectInfo<SocketAddr>>()
                .map(|ConnectInfo(addr)| addr.ip().to_string())
                .unwrap_or_else(|| "unknown".to_string()),
        };

        Span::current().record("client_id", id.as_str());
        Ok(ClientId(id))
    }
}
