/// Spring parameters used for snap animations
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringConfig {
    pub damping: f64,
    pub stiffness: f64,
}

/// Critically-damped feel; reaches the target within ~150-300ms on device
pub const DEFAULT_SPRING: SpringConfig = SpringConfig {
    damping: 20.0,
    stiffness: 150.0,
};

/// Size bounds and snap targets for a draggable panel
#[derive(Debug, Clone)]
pub struct PanelConfig {
    pub min_height: f64,
    pub max_height: f64,
    pub default_height: f64,
    /// Ascending list of snap targets; `None` falls back to `[min, default, max]`
    pub snap_points: Option<Vec<f64>>,
}

impl PanelConfig {
    pub fn new(min_height: f64, default_height: f64, max_height: f64) -> Self {
        // Reversed bounds are normalized rather than trusted; clamping against
        // an inverted range would panic
        let (min_height, max_height) = if min_height <= max_height {
            (min_height, max_height)
        } else {
            (max_height, min_height)
        };
        Self {
            min_height,
            max_height,
            default_height,
            snap_points: None,
        }
    }

    pub fn with_snap_points(mut self, snap_points: Vec<f64>) -> Self {
        self.snap_points = Some(snap_points);
        self
    }

    fn effective_snap_points(&self) -> Vec<f64> {
        match &self.snap_points {
            Some(points) if !points.is_empty() => points.clone(),
            _ => vec![self.min_height, self.default_height, self.max_height],
        }
    }
}

/// Outcome of feeding a gesture event into the controller
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PanelUpdate {
    /// Live 1:1 tracking during a drag; no animation
    Tracked(f64),
    /// Proposed height fell outside the bounds; height holds where it was
    Held,
    /// Release resolved to a snap target; host should spring-animate to it
    Snapped { target: f64, spring: SpringConfig },
    /// Gesture handling is currently switched off (keyboard visible)
    Disabled,
}

/// Handle for a registered height observer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriberId(u64);

type HeightObserver = Box<dyn FnMut(f64)>;

/// Gesture-driven panel sizing controller
///
/// Owns the continuous height of a draggable panel (chat box or results
/// sheet). Drag deltas are cumulative from the start of the gesture, so every
/// proposal is computed against the height committed before the drag began.
/// The committed height moves to the snap target at release time, not when the
/// animation lands, so a drag started mid-animation uses the right baseline.
pub struct PanelController {
    config: PanelConfig,
    snap_points: Vec<f64>,
    committed: f64,
    live: f64,
    drag_enabled: bool,
    next_subscriber: u64,
    subscribers: Vec<(SubscriberId, HeightObserver)>,
}

impl PanelController {
    pub fn new(config: PanelConfig) -> Self {
        let snap_points = config.effective_snap_points();
        let start = config.default_height.clamp(config.min_height, config.max_height);
        Self {
            config,
            snap_points,
            committed: start,
            live: start,
            drag_enabled: true,
            next_subscriber: 0,
            subscribers: Vec::new(),
        }
    }

    /// Height the next drag will be measured against
    pub fn committed_height(&self) -> f64 {
        self.committed
    }

    /// Height currently on screen (tracks the finger during a drag)
    pub fn live_height(&self) -> f64 {
        self.live
    }

    pub fn min_height(&self) -> f64 {
        self.config.min_height
    }

    pub fn max_height(&self) -> f64 {
        self.config.max_height
    }

    pub fn default_height(&self) -> f64 {
        self.config.default_height
    }

    pub fn drag_enabled(&self) -> bool {
        self.drag_enabled
    }

    pub fn set_drag_enabled(&mut self, enabled: bool) {
        self.drag_enabled = enabled;
    }

    /// Register a height observer; called synchronously for every committed value
    pub fn subscribe(&mut self, observer: impl FnMut(f64) + 'static) -> SubscriberId {
        let id = SubscriberId(self.next_subscriber);
        self.next_subscriber += 1;
        self.subscribers.push((id, Box::new(observer)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriberId) {
        self.subscribers.retain(|(sid, _)| *sid != id);
    }

    fn notify(&mut self, height: f64) {
        for (_, observer) in &mut self.subscribers {
            observer(height);
        }
    }

    /// Live drag tracking; `delta_y` is cumulative since the drag started
    /// (positive = finger moved down = panel shrinks)
    pub fn on_drag_move(&mut self, delta_y: f64) -> PanelUpdate {
        if !self.drag_enabled {
            return PanelUpdate::Disabled;
        }

        let proposed = self.committed - delta_y;
        if proposed < self.config.min_height || proposed > self.config.max_height {
            // Out-of-bounds deltas are ignored; no rubber-banding
            return PanelUpdate::Held;
        }

        self.live = proposed;
        self.notify(proposed);
        PanelUpdate::Tracked(proposed)
    }

    /// Resolve a drag release to the nearest snap point
    pub fn on_drag_end(&mut self, delta_y: f64) -> PanelUpdate {
        if !self.drag_enabled {
            return PanelUpdate::Disabled;
        }

        let proposed = self.committed - delta_y;
        let target = self.nearest_snap_point(proposed);

        self.committed = target;
        self.live = target;
        self.notify(target);

        PanelUpdate::Snapped {
            target,
            spring: DEFAULT_SPRING,
        }
    }

    /// Set the height directly with no animation
    pub fn set_height(&mut self, height: f64) -> f64 {
        let clamped = height.clamp(self.config.min_height, self.config.max_height);
        self.committed = clamped;
        self.live = clamped;
        self.notify(clamped);
        clamped
    }

    /// Commit a height and return a spring directive toward it
    pub fn animate_to(&mut self, height: f64) -> PanelUpdate {
        let clamped = height.clamp(self.config.min_height, self.config.max_height);
        self.committed = clamped;
        self.live = clamped;
        self.notify(clamped);
        PanelUpdate::Snapped {
            target: clamped,
            spring: DEFAULT_SPRING,
        }
    }

    /// Snap point with the smallest absolute distance to `height`; ties go to
    /// the earlier entry in the (ascending) list
    fn nearest_snap_point(&self, height: f64) -> f64 {
        let mut best = self.snap_points[0];
        for &point in &self.snap_points[1..] {
            if (point - height).abs() < (best - height).abs() {
                best = point;
            }
        }
        best
    }
}

impl std::fmt::Debug for PanelController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PanelController")
            .field("committed", &self.committed)
            .field("live", &self.live)
            .field("drag_enabled", &self.drag_enabled)
            .field("snap_points", &self.snap_points)
            .finish()
    }
}
