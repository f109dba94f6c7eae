//! Render target dimension tracking
//!
//! The resize callback and the frame loop both need the current target
//! dimensions (the blit region is derived from them), so they live in one
//! small state struct owned by the renderer instead of module-level
//! globals.

/// Tracked render target dimensions in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    width: i32,
    height: i32,
}

impl Viewport {
    /// Create a viewport at the initial framebuffer size
    #[must_use]
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Record a framebuffer size change
    ///
    /// Returns `false` for zero-sized updates (a minimized window), which
    /// are recorded nowhere: the previous dimensions stay active so the
    /// offscreen target is not recreated at size zero.
    pub fn resize(&mut self, width: i32, height: i32) -> bool {
        if width <= 0 || height <= 0 {
            return false;
        }
        self.width = width;
        self.height = height;
        true
    }

    /// Current width in pixels
    #[must_use]
    pub const fn width(&self) -> i32 {
        self.width
    }

    /// Current height in pixels
    #[must_use]
    pub const fn height(&self) -> i32 {
        self.height
    }

    /// Source/destination rectangle for the offscreen blit
    ///
    /// Both rectangles cover (0, 0) to (width, height).
    #[must_use]
    pub const fn blit_region(&self) -> (i32, i32, i32, i32) {
        (0, 0, self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resize_updates_dimensions() {
        let mut viewport = Viewport::new(800, 600);
        assert!(viewport.resize(1024, 768));
        assert_eq!(viewport.width(), 1024);
        assert_eq!(viewport.height(), 768);
    }

    #[test]
    fn test_zero_sized_resize_is_ignored() {
        let mut viewport = Viewport::new(800, 600);
        assert!(!viewport.resize(0, 0));
        assert!(!viewport.resize(1024, 0));
        assert!(!viewport.resize(0, 768));
        assert_eq!(viewport, Viewport::new(800, 600));
    }

    #[test]
    fn test_blit_region_tracks_resize() {
        let mut viewport = Viewport::new(800, 600);
        viewport.resize(640, 480);
        assert_eq!(viewport.blit_region(), (0, 0, 640, 480));
    }
}
