//! Mat.zip core - recommendation and map-coordination service for the Mat.zip
//! restaurant discovery app
//!
//! This library carries the app's headless logic: the keyword search rules,
//! the draggable-panel and keyboard state machines, the typed map-bridge
//! protocol, the directions client with its degrade-to-unknown fallback, and
//! deep-link construction.

pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{
    ChatLog, KeyboardCoordinator, MapBridge, MapCommand, MapEvent, PanelConfig, PanelController,
    PanelUpdate,
};
pub use crate::error::AppError;
pub use crate::models::{ChatMessage, Coordinate, DistanceInfo, Restaurant, UserLocation};
pub use crate::services::{DirectionsClient, RouteEnricher};
