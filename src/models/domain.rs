use serde::{Deserialize, Serialize};

/// A latitude/longitude pair as consumed by the map layer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

/// The user's current position
///
/// Never absent downstream of the location boundary: resolution falls back to
/// [`DEFAULT_LOCATION`] when permission is denied or no fix is available.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UserLocation {
    pub latitude: f64,
    pub longitude: f64,
}

/// Fallback position when location permission is denied (Gangnam Station)
pub const DEFAULT_LOCATION: UserLocation = UserLocation {
    latitude: 37.4979,
    longitude: 127.0276,
};

impl UserLocation {
    pub fn as_coordinate(&self) -> Coordinate {
        Coordinate {
            lat: self.latitude,
            lng: self.longitude,
        }
    }
}

/// Distance/duration annotation attached to a restaurant after route lookup
///
/// `meters == 0` with an empty path means "unknown" (lookup failed or still
/// pending), not a zero-length route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistanceInfo {
    pub meters: u32,
    #[serde(rename = "walkTime", skip_serializing_if = "Option::is_none")]
    pub walk_time: Option<u32>,
    #[serde(rename = "carTime", skip_serializing_if = "Option::is_none")]
    pub car_time: Option<u32>,
    #[serde(rename = "transitTime", skip_serializing_if = "Option::is_none")]
    pub transit_time: Option<u32>,
    #[serde(rename = "pathCoordinates", default)]
    pub path_coordinates: Vec<Coordinate>,
}

impl DistanceInfo {
    /// Degraded result used when the directions lookup fails
    pub fn unavailable() -> Self {
        Self {
            meters: 0,
            walk_time: None,
            car_time: None,
            transit_time: None,
            path_coordinates: Vec::new(),
        }
    }

    /// True when this annotation carries no usable route data
    pub fn is_unavailable(&self) -> bool {
        self.meters == 0 && self.path_coordinates.is_empty()
    }
}

/// A restaurant entry from the catalog
///
/// Immutable except for `distance`, which is attached once route enrichment
/// completes. Owning lists are replaced wholesale, never mutated in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: String,
    pub name: String,
    pub category: String,
    pub rating: f64,
    pub address: String,
    pub phone: String,
    pub hours: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub features: Vec<String>,
    pub summary: String,
    #[serde(rename = "reviewCount")]
    pub review_count: u32,
    #[serde(rename = "priceRange", default)]
    pub price_range: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<DistanceInfo>,
}

impl Restaurant {
    pub fn coordinate(&self) -> Coordinate {
        Coordinate {
            lat: self.latitude,
            lng: self.longitude,
        }
    }

    pub fn has_feature(&self, feature: &str) -> bool {
        self.features.iter().any(|f| f == feature)
    }
}

/// Role of a chat message author
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
    Assistant,
}

/// A single chat message
///
/// Messages are append-only; the log is only ever emptied by a full reset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: uuid::Uuid,
    pub role: MessageRole,
    pub content: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restaurants: Option<Vec<Restaurant>>,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4(),
            role: MessageRole::User,
            content: content.into(),
            timestamp: chrono::Utc::now(),
            restaurants: None,
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4(),
            role: MessageRole::Assistant,
            content: content.into(),
            timestamp: chrono::Utc::now(),
            restaurants: None,
        }
    }

    pub fn with_restaurants(mut self, restaurants: Vec<Restaurant>) -> Self {
        if !restaurants.is_empty() {
            self.restaurants = Some(restaurants);
        }
        self
    }
}
