// Service exports
pub mod deeplink;
pub mod directions;
pub mod enrichment;
pub mod location;

pub use directions::{DirectionsClient, DirectionsError};
pub use enrichment::RouteEnricher;
pub use location::{resolve_location, LocationProvider};
