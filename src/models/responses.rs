use crate::models::Restaurant;
use serde::{Deserialize, Serialize};

/// Response for the chat endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    pub reply: String,
    pub restaurants: Vec<Restaurant>,
    #[serde(rename = "totalResults")]
    pub total_results: usize,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

/// Deep-link bundle for a restaurant
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkBundle {
    #[serde(rename = "appUrl")]
    pub app_url: String,
    #[serde(rename = "webUrl")]
    pub web_url: String,
    #[serde(rename = "placeUrl")]
    pub place_url: String,
    #[serde(rename = "phoneUrl")]
    pub phone_url: String,
    #[serde(rename = "shareText")]
    pub share_text: String,
}
