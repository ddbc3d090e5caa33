// Model exports
pub mod catalog;
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    ChatMessage, Coordinate, DistanceInfo, MessageRole, Restaurant, UserLocation,
    DEFAULT_LOCATION,
};
pub use requests::{ChatRequest, LinkQuery, RouteRequest};
pub use responses::{ChatResponse, ErrorResponse, HealthResponse, LinkBundle};
