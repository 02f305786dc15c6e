//! Shape generation for 2D primitives

use glam::Vec2;

use super::vertex::Vertex;
use super::{Renderer, Sprite, TextSize};
use crate::sim::Rect;

/// Generate vertices for a filled axis-aligned rectangle (two triangles)
pub fn rect(rect: &Rect, color: [f32; 4]) -> [Vertex; 6] {
    let (l, t, r, b) = (rect.left(), rect.top(), rect.right(), rect.bottom());
    [
        Vertex::new(l, t, color),
        Vertex::new(l, b, color),
        Vertex::new(r, t, color),
        Vertex::new(r, t, color),
        Vertex::new(l, b, color),
        Vertex::new(r, b, color),
    ]
}

/// A queued line of text; the GPU path has no font, so text is handed to
/// whatever overlay the platform provides
#[derive(Debug, Clone, PartialEq)]
pub struct TextItem {
    pub text: String,
    pub size: TextSize,
    pub pos: Vec2,
    pub centered: bool,
}

/// Collects one frame of sprites as flat-colored triangles
#[derive(Debug, Default)]
pub struct ShapeBatch {
    vertices: Vec<Vertex>,
    texts: Vec<TextItem>,
    /// Vertices and text of the last presented frame
    presented: (Vec<Vertex>, Vec<TextItem>),
}

impl ShapeBatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Vertices of the last presented frame
    pub fn vertices(&self) -> &[Vertex] {
        &self.presented.0
    }

    /// Text of the last presented frame
    pub fn texts(&self) -> &[TextItem] {
        &self.presented.1
    }
}

impl Renderer for ShapeBatch {
    fn draw_sprite(&mut self, sprite: Sprite, area: Rect) {
        // Partially off-screen sprites are left for the GPU to clip
        self.vertices
            .extend_from_slice(&rect(&area, sprite.fallback_color()));
    }

    fn draw_text(&mut self, text: &str, size: TextSize, pos: Vec2, centered: bool) {
        self.texts.push(TextItem {
            text: text.to_string(),
            size,
            pos,
            centered,
        });
    }

    fn present(&mut self) {
        self.presented = (
            std::mem::take(&mut self.vertices),
            std::mem::take(&mut self.texts),
        );
    }
}
