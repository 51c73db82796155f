/// Fraction of the scrollable extent a region must pass before it counts as tested.
pub const SCROLL_THRESHOLD: f64 = 0.30;

/// A scrollable viewport over content longer than itself, along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollRegion {
    offset: u16,
    content_len: u16,
    viewport_len: u16,
}

impl ScrollRegion {
    /// Creates a region scrolled to the start.
    pub fn new(content_len: u16, viewport_len: u16) -> Self {
        Self {
            offset: 0,
            content_len,
            viewport_len,
        }
    }

    /// Current scroll offset.
    pub fn offset(&self) -> u16 {
        self.offset
    }

    /// Total content length along the scroll axis.
    pub fn content_len(&self) -> u16 {
        self.content_len
    }

    /// Visible length along the scroll axis.
    pub fn viewport_len(&self) -> u16 {
        self.viewport_len
    }

    /// Maximum offset: content length minus viewport length.
    pub fn extent(&self) -> u16 {
        self.content_len.saturating_sub(self.viewport_len)
    }

    /// Updates the viewport length after a resize, re-clamping the offset.
    pub fn set_viewport_len(&mut self, viewport_len: u16) {
        self.viewport_len = viewport_len;
        self.offset = self.offset.min(self.extent());
    }

    /// Scrolls by `delta`, clamped to `0..=extent`. Returns the new offset.
    pub fn scroll_by(&mut self, delta: i32) -> u16 {
        let target = (i32::from(self.offset) + delta).clamp(0, i32::from(self.extent()));
        self.offset = u16::try_from(target).unwrap_or(0);
        self.offset
    }

    /// Current scrolled fraction, or `None` when there is nothing to scroll.
    pub fn fraction(&self) -> Option<f64> {
        scrolled_fraction(self.offset, self.extent())
    }

    /// Progress message if the region is past the threshold.
    pub fn progress(&self) -> Option<String> {
        self.fraction().and_then(progress_message)
    }
}

/// `offset / extent`, or `None` for a zero extent.
pub fn scrolled_fraction(offset: u16, extent: u16) -> Option<f64> {
    (extent > 0).then(|| f64::from(offset) / f64::from(extent))
}

/// Returns `Scrolled {percent}%` when `fraction` exceeds [`SCROLL_THRESHOLD`].
pub fn progress_message(fraction: f64) -> Option<String> {
    (fraction > SCROLL_THRESHOLD).then(|| format!("Scrolled {}%", (fraction * 100.0).round()))
}
