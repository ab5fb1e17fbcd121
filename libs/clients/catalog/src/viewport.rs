/// How close to the end of the list the sentinel counts as visible.
pub const DEFAULT_SENTINEL_MARGIN: f64 = 200.0;

/// Scroll position of a list view, in whatever unit the view measures
/// (pixels for a browser, rows for a terminal).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub scroll_top: f64,
    pub height: f64,
    pub content_height: f64,
}

impl Viewport {
    pub fn new(scroll_top: f64, height: f64, content_height: f64) -> Self {
        Self {
            scroll_top,
            height,
            content_height,
        }
    }

    /// View scrolled so the last row is showing.
    pub fn at_bottom(height: f64, content_height: f64) -> Self {
        Self::new((content_height - height).max(0.0), height, content_height)
    }

    /// Whether the sentinel after the last item is within `margin` of the
    /// visible area.
    pub fn sentinel_visible(&self, margin: f64) -> bool {
        self.scroll_top + self.height + margin >= self.content_height
    }
}
