/// Scroll offset (px) past which the filter panel folds away
pub const DEFAULT_SCROLL_THRESHOLD: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelState {
    Expanded,
    Collapsed,
}

/// Visibility of the filter panel
///
/// Only a change in "scrolled past the threshold" moves the panel on its own:
/// scrolling down collapses it, returning to the top expands it. In between,
/// `show` and `hide` let the citizen override it. The panel knows nothing about
/// the profile or the catalog.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilterPanel {
    threshold: f64,
    scrolled: bool,
    state: PanelState,
}

impl FilterPanel {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            scrolled: false,
            state: PanelState::Expanded,
        }
    }

    pub fn on_scroll(&mut self, offset: f64) -> PanelState {
        let scrolled = offset > self.threshold;
        if scrolled != self.scrolled {
            self.scrolled = scrolled;
            self.state = if scrolled {
                PanelState::Collapsed
            } else {
                PanelState::Expanded
            };
            tracing::trace!("Filter panel {:?} at offset {}", self.state, offset);
        }
        self.state
    }

    pub fn show(&mut self) {
        self.state = PanelState::Expanded;
    }

    /// Has no effect at the top of the page, where the panel is always shown
    pub fn hide(&mut self) {
        if self.scrolled {
            self.state = PanelState::Collapsed;
        }
    }

    pub fn state(&self) -> PanelState {
        self.state
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn is_visible(&self) -> bool {
        !self.scrolled || self.state == PanelState::Expanded
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }
}

impl Default for FilterPanel {
    fn default() -> Self {
        Self::new(DEFAULT_SCROLL_THRESHOLD)
    }
}
