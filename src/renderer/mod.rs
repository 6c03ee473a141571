//! Toy rendering
//!
//! The game only ever paints one glyph, so the surface interface is tiny:
//! clear everything, then draw text anchored at its top-left corner.

pub mod headless;
#[cfg(target_arch = "wasm32")]
pub mod canvas;

pub use headless::{DrawCall, HeadlessSurface};
#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;

use glam::Vec2;

use crate::sim::Toy;

/// Coloured shadow painted behind a glyph
#[derive(Debug, Clone, PartialEq)]
pub struct Glow {
    pub color: String,
    pub blur: f32,
}

impl Glow {
    pub fn new(color: impl Into<String>, blur: f32) -> Self {
        Self {
            color: color.into(),
            blur,
        }
    }
}

impl Default for Glow {
    fn default() -> Self {
        Self::new(crate::consts::GLOW_COLOR, crate::consts::GLOW_BLUR)
    }
}

/// Minimal drawing surface
pub trait Surface {
    /// Clear the whole surface
    fn clear(&mut self);

    /// Draw `glyph` with its top-left corner at `top_left`, `font_px` tall,
    /// optionally with a glow behind it
    fn draw_glyph(&mut self, glyph: &str, top_left: Vec2, font_px: f32, glow: Option<&Glow>);
}

/// Paint one frame: a glow pass, then a crisp pass on top
pub fn draw_toy<S: Surface + ?Sized>(surface: &mut S, toy: &Toy, glyph: &str, glow: &Glow) {
    surface.clear();
    surface.draw_glyph(glyph, toy.pos, toy.size, Some(glow));
    surface.draw_glyph(glyph, toy.pos, toy.size, None);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draw_toy_clears_then_glows_then_crisp() {
        let mut surface = HeadlessSurface::default();
        let toy = Toy::new(Vec2::new(30.0, 40.0), Vec2::new(1.0, 1.0), 48.0);
        draw_toy(&mut surface, &toy, "⚽", &Glow::default());

        assert_eq!(
            surface.calls,
            vec![
                DrawCall::Clear,
                DrawCall::Glyph {
                    glyph: "⚽".to_string(),
                    top_left: Vec2::new(30.0, 40.0),
                    font_px: 48.0,
                    glow: Some(Glow::new("rgba(255,255,0,0.7)", 25.0)),
                },
                DrawCall::Glyph {
                    glyph: "⚽".to_string(),
                    top_left: Vec2::new(30.0, 40.0),
                    font_px: 48.0,
                    glow: None,
                },
            ]
        );
    }
}
