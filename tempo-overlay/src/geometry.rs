//! Content-region geometry and the placement derived from it.
//!
//! The settings panel re-reads its content region once per frame, after
//! child layout, and recomputes where the key binding overlay and the back
//! button sit. Doing this from the current (possibly mid-animation) geometry
//! is what keeps the back button's hit region exactly covering the visible
//! sliver of the content while a slide is in flight.

/// Snapshot of the content region's laid-out geometry for one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ContentGeometry {
    /// Left margin of the content region within the panel.
    pub margin_left: f64,
    /// Laid-out width of the content region.
    pub width: f64,
    /// Current horizontal slide offset (0 at rest, negative mid-slide).
    pub offset_x: f64,
}

impl ContentGeometry {
    /// Left edge for the key binding overlay: immediately to the right of
    /// the content region's current on-screen right edge.
    pub fn overlay_left(&self) -> f64 {
        self.margin_left + self.width + self.offset_x
    }

    /// Left edge for the back button.
    pub fn back_button_left(&self) -> f64 {
        self.margin_left
    }

    /// Width for the back button: the currently visible sliver of the
    /// content region.
    pub fn back_button_width(&self) -> f64 {
        self.width + self.offset_x
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_at_rest() {
        let geom = ContentGeometry {
            margin_left: 40.0,
            width: 400.0,
            offset_x: 0.0,
        };
        assert_eq!(geom.overlay_left(), 440.0);
        assert_eq!(geom.back_button_left(), 40.0);
        assert_eq!(geom.back_button_width(), 400.0);
    }

    #[test]
    fn test_mid_slide_tracks_sliver() {
        // Content width 300, slid 180 to the left: a 120-unit sliver stays
        // visible and the button must cover exactly that.
        let geom = ContentGeometry {
            margin_left: 0.0,
            width: 300.0,
            offset_x: -180.0,
        };
        assert_eq!(geom.back_button_width(), 120.0);
        assert_eq!(geom.overlay_left(), 120.0);
    }

    #[test]
    fn test_margin_carries_into_overlay_left() {
        let geom = ContentGeometry {
            margin_left: 25.0,
            width: 500.0,
            offset_x: -380.0,
        };
        assert_eq!(geom.overlay_left(), 145.0);
        assert_eq!(geom.back_button_left(), 25.0);
        assert_eq!(geom.back_button_width(), 120.0);
    }
}
