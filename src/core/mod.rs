// Core state machine and protocol exports
pub mod bridge;
pub mod chat;
pub mod distance;
pub mod format;
pub mod heading;
pub mod keyboard;
pub mod panel;
pub mod search;

pub use bridge::{MapBridge, MapCommand, MapEvent, RouteOverlay, RouteStyle};
pub use chat::ChatLog;
pub use distance::straight_line_distance;
pub use format::{format_distance, format_phone_number, format_price_range, format_time};
pub use heading::HeadingTracker;
pub use keyboard::{KeyboardCoordinator, KeyboardState, RestoreDirective};
pub use panel::{PanelConfig, PanelController, PanelUpdate, SpringConfig, SubscriberId};
pub use search::{generate_reply, search_restaurants};
