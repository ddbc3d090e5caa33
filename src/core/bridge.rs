use crate::core::heading::HeadingTracker;
use crate::models::Restaurant;
use serde::{Deserialize, Serialize};

/// Zoom level applied when focusing a single restaurant
pub const FOCUS_ZOOM_LEVEL: u8 = 3;

/// Vertical offset (px) so the focused marker sits above the bottom panel
pub const FOCUS_CENTER_OFFSET_PX: i32 = 100;

/// Delay before drawing the route polyline, letting the camera move first
pub const ROUTE_DRAW_DELAY_MS: u64 = 100;

/// Two-layer polyline style: wide white outline under a narrower accent line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteStyle {
    #[serde(rename = "outlineColor")]
    pub outline_color: String,
    #[serde(rename = "outlineWeight")]
    pub outline_weight: u8,
    #[serde(rename = "accentColor")]
    pub accent_color: String,
    #[serde(rename = "accentWeight")]
    pub accent_weight: u8,
}

impl Default for RouteStyle {
    fn default() -> Self {
        Self {
            outline_color: "#FFFFFF".to_string(),
            outline_weight: 12,
            accent_color: "#369667".to_string(),
            accent_weight: 8,
        }
    }
}

/// Commands sent from the host into the embedded map context
///
/// The map runtime is loosely typed, so everything crossing the boundary is a
/// tagged JSON envelope rather than direct function injection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum MapCommand {
    ShowRestaurants {
        restaurants: Vec<Restaurant>,
    },
    ClearRestaurants,
    FocusRestaurant {
        restaurant: Box<Restaurant>,
        zoom: u8,
        #[serde(rename = "centerOffsetPx")]
        center_offset_px: i32,
        /// Present only when the restaurant carries a non-empty route path
        #[serde(rename = "route", skip_serializing_if = "Option::is_none")]
        route: Option<RouteOverlay>,
    },
    MoveToUserLocation {
        lat: f64,
        lng: f64,
    },
    UpdateUserHeading {
        /// Running absolute rotation; may exceed 360 degrees
        rotation: f64,
    },
}

/// Route overlay parameters attached to a focus command
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteOverlay {
    #[serde(rename = "drawDelayMs")]
    pub draw_delay_ms: u64,
    pub style: RouteStyle,
}

/// Events posted back from the embedded map context
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum MapEvent {
    MarkerClick { index: usize },
}

/// Host-side half of the map scripting boundary
///
/// Owns the marker change-detection signature and the heading rotation state.
/// Commands are returned to the caller for delivery; inbound messages are
/// parsed leniently, with malformed payloads silently dropped.
#[derive(Debug, Default)]
pub struct MapBridge {
    shown_count: Option<usize>,
    heading: HeadingTracker,
}

impl MapBridge {
    pub fn new() -> Self {
        Self {
            shown_count: None,
            heading: HeadingTracker::new(),
        }
    }

    /// Render markers for a restaurant list
    ///
    /// Re-renders only when the list *length* changes from the previous call:
    /// a distance-only update on a same-length list must not retrigger marker
    /// redraw. This is deliberately a count comparison, not a diff.
    pub fn show_markers(&mut self, restaurants: &[Restaurant]) -> Option<MapCommand> {
        if self.shown_count == Some(restaurants.len()) {
            tracing::trace!(count = restaurants.len(), "marker redraw skipped");
            return None;
        }

        self.shown_count = Some(restaurants.len());
        Some(MapCommand::ShowRestaurants {
            restaurants: restaurants.to_vec(),
        })
    }

    /// Remove all markers and reset the change-detection signature
    pub fn clear_markers(&mut self) -> MapCommand {
        self.shown_count = Some(0);
        MapCommand::ClearRestaurants
    }

    /// Center the view on a restaurant, offset above the bottom panel
    pub fn focus_on(&self, restaurant: &Restaurant) -> MapCommand {
        let route = restaurant
            .distance
            .as_ref()
            .filter(|d| !d.path_coordinates.is_empty())
            .map(|_| RouteOverlay {
                draw_delay_ms: ROUTE_DRAW_DELAY_MS,
                style: RouteStyle::default(),
            });

        MapCommand::FocusRestaurant {
            restaurant: Box::new(restaurant.clone()),
            zoom: FOCUS_ZOOM_LEVEL,
            center_offset_px: FOCUS_CENTER_OFFSET_PX,
            route,
        }
    }

    pub fn update_user_position(&self, lat: f64, lng: f64) -> MapCommand {
        MapCommand::MoveToUserLocation { lat, lng }
    }

    /// Rotate the direction indicator along the shortest angular path
    pub fn update_user_heading(&mut self, heading_deg: f64) -> MapCommand {
        MapCommand::UpdateUserHeading {
            rotation: self.heading.update(heading_deg),
        }
    }

    /// Parse an inbound message from the map context
    ///
    /// Malformed payloads are ignored by design; the embedded runtime is not
    /// trusted to always produce well-formed envelopes.
    pub fn handle_message(&self, raw: &str) -> Option<MapEvent> {
        match serde_json::from_str(raw) {
            Ok(event) => Some(event),
            Err(e) => {
                tracing::debug!(error = %e, "ignoring malformed map message");
                None
            }
        }
    }
}
