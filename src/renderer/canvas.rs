//! Canvas 2D surface

use glam::Vec2;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::{Glow, Surface};

pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: HtmlCanvasElement, ctx: CanvasRenderingContext2d) -> Self {
        Self { canvas, ctx }
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    /// Resize the backing store to a `side` x `side` square
    pub fn set_side(&self, side: f32) {
        let side = side.max(0.0) as u32;
        self.canvas.set_width(side);
        self.canvas.set_height(side);
    }

    /// Backing store size in canvas pixels
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.canvas.width() as f32, self.canvas.height() as f32)
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self) {
        let size = self.size();
        self.ctx.clear_rect(0.0, 0.0, size.x as f64, size.y as f64);
    }

    fn draw_glyph(&mut self, glyph: &str, top_left: Vec2, font_px: f32, glow: Option<&Glow>) {
        self.ctx.save();
        if let Some(glow) = glow {
            self.ctx.set_shadow_color(&glow.color);
            self.ctx.set_shadow_blur(glow.blur as f64);
        }
        self.ctx.set_font(&format!("{}px serif", font_px));
        self.ctx.set_text_align("left");
        self.ctx.set_text_baseline("top");
        self.ctx
            .fill_text(glyph, top_left.x as f64, top_left.y as f64)
            .ok();
        self.ctx.restore();
    }
}
