//! In-memory surface for tests and the native build

use glam::Vec2;

use super::{Glow, Surface};

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Clear,
    Glyph {
        glyph: String,
        top_left: Vec2,
        font_px: f32,
        glow: Option<Glow>,
    },
}

/// Records the draw calls of the most recent frame
#[derive(Debug, Default)]
pub struct HeadlessSurface {
    /// Calls since the last `clear`
    pub calls: Vec<DrawCall>,
    /// Number of times the surface was cleared
    pub frames: u64,
}

impl HeadlessSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Position of the last glyph drawn this frame
    pub fn last_glyph_pos(&self) -> Option<Vec2> {
        self.calls.iter().rev().find_map(|c| match c {
            DrawCall::Glyph { top_left, .. } => Some(*top_left),
            DrawCall::Clear => None,
        })
    }
}

impl Surface for HeadlessSurface {
    fn clear(&mut self) {
        self.calls.clear();
        self.calls.push(DrawCall::Clear);
        self.frames += 1;
    }

    fn draw_glyph(&mut self, glyph: &str, top_left: Vec2, font_px: f32, glow: Option<&Glow>) {
        self.calls.push(DrawCall::Glyph {
            glyph: glyph.to_string(),
            top_left,
            font_px,
            glow: glow.cloned(),
        });
    }
}
