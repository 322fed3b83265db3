use rsvp_backend::{
    api::router::create_router,
    state::AppState,
    config::Config,
    domain::schedule::Schedule,
    infra::{clock::ManualClock, factory::build_state},
};
use std::sync::Arc;
use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use tower::ServiceExt;
use serde_json::Value;

pub const ADMIN_TOKEN: &str = "test-admin-token";

pub const SCHEDULE_JSON: &str = r#"[
    {"slug": "lagan", "title": "Lagan", "description": "The ceremony", "location": "Rose Garden",
     "startsAt": "2025-06-14T20:00:00Z", "endsAt": "2025-06-14T22:00:00Z", "timezone": "America/New_York"},
    {"slug": "haldi", "title": "Haldi", "location": "Courtyard",
     "startsAt": "2025-06-13T15:00:00Z", "endsAt": "2025-06-13T17:00:00Z"}
]"#;

#[allow(dead_code)]
pub struct TestApp {
    pub router: Router,
    pub clock: Arc<ManualClock>,
    pub state: Arc<AppState>,
}

#[allow(dead_code)]
impl TestApp {
    pub async fn new() -> Self {
        Self::with_config(Config {
            admin_token: Some(ADMIN_TOKEN.to_string()),
            ..Config::default()
        })
    }

    pub fn with_config(config: Config) -> Self {
        let clock = Arc::new(ManualClock::default());
        let schedule = Schedule::from_json(SCHEDULE_JSON).expect("Failed to parse test schedule");
        let state = Arc::new(build_state(config, clock.clone(), schedule));
        let router = create_router(state.clone());

        Self { router, clock, state }
    }

    pub async fn post_json(&self, uri: &str, client_ip: &str, body: Value) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .header("X-Forwarded-For", client_ip)
                .body(Body::from(body.to_string()))
                .unwrap()
        ).await.unwrap();

        let status = response.status();
        (status, parse_body(response).await)
    }

    pub async fn post_raw(&self, uri: &str, content_type: Option<&str>, body: &str) -> (StatusCode, Value) {
        let mut builder = Request::builder()
            .method("POST")
            .uri(uri)
            .header("X-Forwarded-For", "203.0.113.99");
        if let Some(ct) = content_type {
            builder = builder.header(header::CONTENT_TYPE, ct);
        }
        let response = self.router.clone().oneshot(
            builder.body(Body::from(body.to_string())).unwrap()
        ).await.unwrap();

        let status = response.status();
        (status, parse_body(response).await)
    }

    pub async fn get(&self, uri: &str, bearer: Option<&str>) -> axum::response::Response {
        let mut builder = Request::builder().method("GET").uri(uri);
        if let Some(token) = bearer {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        self.router.clone().oneshot(builder.body(Body::empty()).unwrap()).await.unwrap()
    }

    pub async fn get_json(&self, uri: &str, bearer: Option<&str>) -> (StatusCode, Value) {
        let response = self.get(uri, bearer).await;
        let status = response.status();
        (status, parse_body(response).await)
    }

    pub async fn put_json(&self, uri: &str, bearer: &str, body: Value) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(
            Request::builder()
                .method("PUT")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .header(header::AUTHORIZATION, format!("Bearer {}", bearer))
                .body(Body::from(body.to_string()))
                .unwrap()
        ).await.unwrap();

        let status = response.status();
        (status, parse_body(response).await)
    }
}

#[allow(dead_code)]
pub async fn parse_body(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap_or(Value::Null)
}

#[allow(dead_code)]
pub async fn body_text(response: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}
