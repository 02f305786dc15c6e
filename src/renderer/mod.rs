//! Rendering
//!
//! The game only ever asks a `Renderer` to draw a sprite in a rectangle,
//! draw a line of text, and present the frame. Implementations own images,
//! fonts and surfaces, and fall back to flat colors when an image is
//! missing.

pub mod pipeline;
pub mod recorder;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use recorder::{DrawCommand, FrameRecorder};
pub use scene::{Backdrop, draw_frame};
pub use shapes::ShapeBatch;

use glam::Vec2;

use crate::sim::Rect;

/// Everything the game draws
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sprite {
    Player,
    Enemy,
    Grass,
    Road,
    LaneMarking,
}

impl Sprite {
    /// Solid color used when no image is loaded for this sprite
    pub fn fallback_color(&self) -> [f32; 4] {
        match self {
            Sprite::Player => vertex::colors::PLAYER,
            Sprite::Enemy => vertex::colors::ENEMY,
            Sprite::Grass => vertex::colors::GRASS,
            Sprite::Road => vertex::colors::ROAD,
            Sprite::LaneMarking => vertex::colors::LANE_MARKING,
        }
    }
}

/// Text size tiers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextSize {
    Small,
    Large,
}

/// Drawing backend used by the frame loop
pub trait Renderer {
    /// Draw `sprite` stretched over `rect` (logical screen space)
    fn draw_sprite(&mut self, sprite: Sprite, rect: Rect);

    /// Draw a line of text anchored at its top-left corner, or at its
    /// center when `centered` is set
    fn draw_text(&mut self, text: &str, size: TextSize, pos: Vec2, centered: bool);

    /// Finish the frame
    fn present(&mut self);
}
