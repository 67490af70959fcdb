//! One-shot visibility trigger.

/// Latches the first time the terminal container becomes visible.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VisibilityTrigger {
    fired: bool,
}

impl VisibilityTrigger {
    /// Create an unfired trigger.
    #[must_use]
    pub const fn new() -> Self {
        Self { fired: false }
    }

    /// Report the container's current visibility.
    ///
    /// Returns `true` exactly once: on the first call with `visible` set.
    pub fn observe(&mut self, visible: bool) -> bool {
        if visible && !self.fired {
            self.fired = true;
            tracing::debug!("terminal container entered view");
            return true;
        }
        false
    }

    /// Whether the trigger has already fired.
    #[must_use]
    pub const fn has_fired(&self) -> bool {
        self.fired
    }
}
