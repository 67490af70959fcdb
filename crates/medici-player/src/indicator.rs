//! Selection indicator - the tab row above the terminal.

/// Highlights the control for the chosen scenario.
pub trait SelectionIndicator {
    /// Mark `index` active and every other control inactive.
    fn select(&mut self, index: usize);
}

/// In-memory tab strip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabStrip {
    labels: Vec<String>,
    active: Option<usize>,
}

impl TabStrip {
    /// Create a strip with one tab per label and none active.
    #[must_use]
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            labels: labels.into_iter().map(Into::into).collect(),
            active: None,
        }
    }

    /// Tab captions in order.
    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Index of the active tab.
    #[must_use]
    pub fn active(&self) -> Option<usize> {
        self.active
    }

    /// Whether tab `index` is the active one.
    #[must_use]
    pub fn is_active(&self, index: usize) -> bool {
        self.active == Some(index)
    }
}

impl SelectionIndicator for TabStrip {
    fn select(&mut self, index: usize) {
        if index < self.labels.len() {
            self.active = Some(index);
        }
    }
}
