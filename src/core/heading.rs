/// Smoothed rotation state for the user's direction indicator
///
/// Keeps a running absolute rotation so consecutive updates always rotate
/// along the shortest angular path, even across the 0/360 boundary. The
/// absolute value may grow beyond 360 degrees; snapping it back would make the
/// indicator spin the long way round.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeadingTracker {
    rotation: f64,
}

impl HeadingTracker {
    pub fn new() -> Self {
        Self { rotation: 0.0 }
    }

    /// Current absolute rotation in degrees (unbounded)
    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    /// Apply a new compass heading and return the updated absolute rotation
    pub fn update(&mut self, heading_deg: f64) -> f64 {
        let target = normalize_degrees(heading_deg);
        let current = normalize_degrees(self.rotation);

        let mut diff = target - current;
        if diff > 180.0 {
            diff -= 360.0;
        } else if diff < -180.0 {
            diff += 360.0;
        }

        self.rotation += diff;
        self.rotation
    }
}

/// Normalize an angle into [0, 360)
fn normalize_degrees(deg: f64) -> f64 {
    ((deg % 360.0) + 360.0) % 360.0
}
