//! Headless renderer that records draw calls
//!
//! Used by the native build, which has no window, and by tests that check
//! what a frame would show.

use glam::Vec2;

use super::{Renderer, Sprite, TextSize};
use crate::sim::Rect;

/// One recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Sprite {
        sprite: Sprite,
        rect: Rect,
    },
    Text {
        text: String,
        size: TextSize,
        pos: Vec2,
        centered: bool,
    },
}

/// Keeps the commands of the last presented frame
#[derive(Debug, Default)]
pub struct FrameRecorder {
    pending: Vec<DrawCommand>,
    last_frame: Vec<DrawCommand>,
    frames_presented: u64,
}

impl FrameRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_frame(&self) -> &[DrawCommand] {
        &self.last_frame
    }

    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }

    /// Rectangles drawn for `sprite` in the last frame, in draw order
    pub fn sprites(&self, sprite: Sprite) -> Vec<Rect> {
        self.last_frame
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::Sprite { sprite: s, rect } if *s == sprite => Some(*rect),
                _ => None,
            })
            .collect()
    }

    /// Text lines drawn in the last frame, in draw order
    pub fn texts(&self) -> Vec<&str> {
        self.last_frame
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Renderer for FrameRecorder {
    fn draw_sprite(&mut self, sprite: Sprite, rect: Rect) {
        self.pending.push(DrawCommand::Sprite { sprite, rect });
    }

    fn draw_text(&mut self, text: &str, size: TextSize, pos: Vec2, centered: bool) {
        self.pending.push(DrawCommand::Text {
            text: text.to_string(),
            size,
            pos,
            centered,
        });
    }

    fn present(&mut self) {
        self.last_frame = std::mem::take(&mut self.pending);
        self.frames_presented += 1;
    }
}
