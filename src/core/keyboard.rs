use crate::core::panel::{PanelController, PanelUpdate};

/// Delay before restoring the panel after keyboard dismissal, so the resize
/// does not fight the keyboard-close animation
pub const RESTORE_DELAY_MS: u64 = 300;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyboardState {
    Hidden,
    Visible,
}

/// Deferred panel restore issued after a successful search
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RestoreDirective {
    pub target: f64,
    pub delay_ms: u64,
}

/// Coordinates the panel with system keyboard show/hide notifications
///
/// While the keyboard is visible the panel is pinned to its max height and
/// drag handling is switched off. Hiding the keyboard only re-enables the
/// gesture; the pre-keyboard height is restored separately, as a side effect
/// of a search completing.
#[derive(Debug)]
pub struct KeyboardCoordinator {
    state: KeyboardState,
    height_before_keyboard: Option<f64>,
}

impl KeyboardCoordinator {
    pub fn new() -> Self {
        Self {
            state: KeyboardState::Hidden,
            height_before_keyboard: None,
        }
    }

    pub fn state(&self) -> KeyboardState {
        self.state
    }

    pub fn height_before_keyboard(&self) -> Option<f64> {
        self.height_before_keyboard
    }

    /// Keyboard-will-show notification
    ///
    /// Captures the panel's committed height exactly once per show event;
    /// duplicate notifications while already visible are ignored.
    pub fn on_keyboard_will_show(&mut self, panel: &mut PanelController) -> Option<PanelUpdate> {
        if self.state == KeyboardState::Visible {
            return None;
        }

        self.state = KeyboardState::Visible;
        self.height_before_keyboard = Some(panel.committed_height());
        panel.set_drag_enabled(false);
        let update = panel.animate_to(panel.max_height());
        tracing::debug!(
            stored = self.height_before_keyboard.unwrap_or_default(),
            "keyboard shown, panel pinned to max"
        );
        Some(update)
    }

    /// Keyboard-will-hide notification; re-enables dragging only
    pub fn on_keyboard_will_hide(&mut self, panel: &mut PanelController) {
        if self.state == KeyboardState::Hidden {
            return;
        }
        self.state = KeyboardState::Hidden;
        panel.set_drag_enabled(true);
    }

    /// Consume the stored height after a search completes
    ///
    /// Returns the deferred restore the host should schedule, or `None` when
    /// no height was captured (keyboard never shown since the last restore).
    pub fn restore_after_search(&mut self) -> Option<RestoreDirective> {
        self.height_before_keyboard.take().map(|target| RestoreDirective {
            target,
            delay_ms: RESTORE_DELAY_MS,
        })
    }
}

impl Default for KeyboardCoordinator {
    fn default() -> Self {
        Self::new()
    }
}
