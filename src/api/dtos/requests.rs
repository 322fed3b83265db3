use serde::Deserialize;

#[derive(Deserialize)]
pub struct ModerateEntryRequest {
    pub status: String,
}
