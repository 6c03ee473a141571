//! Pointer to canvas coordinate mapping
//!
//! The canvas backing store (its `width`/`height` attributes) can differ from
//! the size it is displayed at, so client coordinates are scaled by the ratio
//! of the two.

use glam::Vec2;

/// Maps a pointer position in client (viewport) space to canvas space
pub trait PointerMapping {
    fn to_canvas(&self, client: Vec2) -> Vec2;
}

/// Snapshot of the canvas element geometry at the time of a pointer event
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasRect {
    /// Top-left of the displayed element in client space
    pub origin: Vec2,
    /// Displayed (CSS) size
    pub displayed: Vec2,
    /// Backing store size in canvas pixels
    pub backing: Vec2,
}

impl CanvasRect {
    pub fn new(origin: Vec2, displayed: Vec2, backing: Vec2) -> Self {
        Self {
            origin,
            displayed,
            backing,
        }
    }

    /// A canvas displayed 1:1 at the client origin
    pub fn identity(size: Vec2) -> Self {
        Self::new(Vec2::ZERO, size, size)
    }

    fn scale(&self) -> Vec2 {
        // A zero-sized element (display: none) maps everything to the origin
        Vec2::new(
            if self.displayed.x > 0.0 { self.backing.x / self.displayed.x } else { 0.0 },
            if self.displayed.y > 0.0 { self.backing.y / self.displayed.y } else { 0.0 },
        )
    }
}

impl PointerMapping for CanvasRect {
    fn to_canvas(&self, client: Vec2) -> Vec2 {
        (client - self.origin) * self.scale()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_mapping() {
        let rect = CanvasRect::identity(Vec2::splat(400.0));
        assert_eq!(rect.to_canvas(Vec2::new(12.0, 34.0)), Vec2::new(12.0, 34.0));
    }

    #[test]
    fn test_offset_and_scaled_mapping() {
        // 400px backing store shown at 200px, 10px from the left, 20px from the top
        let rect = CanvasRect::new(
            Vec2::new(10.0, 20.0),
            Vec2::splat(200.0),
            Vec2::splat(400.0),
        );
        assert_eq!(rect.to_canvas(Vec2::new(10.0, 20.0)), Vec2::ZERO);
        assert_eq!(rect.to_canvas(Vec2::new(110.0, 70.0)), Vec2::new(200.0, 100.0));
    }

    #[test]
    fn test_hidden_canvas_maps_to_origin() {
        let rect = CanvasRect::new(Vec2::ZERO, Vec2::ZERO, Vec2::splat(400.0));
        assert_eq!(rect.to_canvas(Vec2::new(50.0, 50.0)), Vec2::ZERO);
    }
}
