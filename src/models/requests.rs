use crate::models::Coordinate;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request body for the chat endpoint
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ChatRequest {
    #[validate(length(min = 1))]
    pub message: String,
}

/// Request body for a single route lookup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteRequest {
    pub origin: Coordinate,
    pub destination: Coordinate,
}

/// Query parameters for the deep-link bundle endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkQuery {
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lng: Option<f64>,
}
