use serde::Serialize;
use crate::domain::models::event::WeddingEvent;

#[derive(Serialize)]
pub struct SubmitResponse {
    pub ok: bool,
    pub id: String,
}

impl SubmitResponse {
    pub fn accepted(id: String) -> Self {
        Self { ok: true, id }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleEventResponse {
    #[serde(flatten)]
    pub event: WeddingEvent,
    pub display_time: String,
}
