//! Frame composition
//!
//! Turns a `GameState` into renderer calls: scrolling road, cars, score HUD
//! and, after a crash, the game-over overlay.

use glam::Vec2;

use super::{Renderer, Sprite, TextSize};
use crate::consts::*;
use crate::sim::{GameState, Rect};

pub const GAME_OVER_TITLE: &str = "GAME OVER";
pub const GAME_OVER_PROMPT: &str = "Press R to restart or ESC to quit";

/// Scroll position of the road markings. Purely visual, so it lives
/// outside the simulation and keeps moving after a crash.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Backdrop {
    pub offset: f32,
}

impl Backdrop {
    /// Scroll one frame's worth, wrapping at the dash period
    pub fn advance(&mut self) {
        self.offset += ROAD_SCROLL_SPEED;
        if self.offset >= LANE_DASH_PERIOD {
            self.offset = 0.0;
        }
    }

    fn draw<R: Renderer + ?Sized>(&self, renderer: &mut R) {
        renderer.draw_sprite(Sprite::Grass, Rect::new(0.0, 0.0, SCREEN_WIDTH, SCREEN_HEIGHT));
        renderer.draw_sprite(
            Sprite::Road,
            Rect::new(
                ROAD_MARGIN,
                0.0,
                SCREEN_WIDTH - 2.0 * ROAD_MARGIN,
                SCREEN_HEIGHT,
            ),
        );

        let x = SCREEN_WIDTH / 2.0 - LANE_DASH_WIDTH / 2.0;
        let mut y = -LANE_DASH_PERIOD;
        while y < SCREEN_HEIGHT {
            renderer.draw_sprite(
                Sprite::LaneMarking,
                Rect::new(x, y + self.offset, LANE_DASH_WIDTH, LANE_DASH_LENGTH),
            );
            y += LANE_DASH_PERIOD;
        }
    }
}

/// Draw and present one frame. `fps` adds a frame-rate readout when set.
pub fn draw_frame<R: Renderer + ?Sized>(
    renderer: &mut R,
    state: &GameState,
    backdrop: &Backdrop,
    fps: Option<u32>,
) {
    backdrop.draw(renderer);

    renderer.draw_sprite(Sprite::Player, state.player.rect());
    for enemy in &state.enemies {
        renderer.draw_sprite(Sprite::Enemy, enemy.rect());
    }

    renderer.draw_text(
        &format!("Score: {}", state.score),
        TextSize::Small,
        Vec2::new(10.0, 10.0),
        false,
    );
    if let Some(fps) = fps {
        renderer.draw_text(
            &format!("FPS: {fps}"),
            TextSize::Small,
            Vec2::new(SCREEN_WIDTH - 90.0, 10.0),
            false,
        );
    }

    if state.is_game_over() {
        let center_x = SCREEN_WIDTH / 2.0;
        let center_y = SCREEN_HEIGHT / 2.0;
        renderer.draw_text(
            GAME_OVER_TITLE,
            TextSize::Large,
            Vec2::new(center_x, center_y - 30.0),
            true,
        );
        renderer.draw_text(
            GAME_OVER_PROMPT,
            TextSize::Small,
            Vec2::new(center_x, center_y + 30.0),
            true,
        );
    }

    renderer.present();
}
