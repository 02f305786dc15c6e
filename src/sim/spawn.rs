//! Enemy spawning
//!
//! The spawn cadence is a logical repeating timer: the frame loop feeds it
//! elapsed milliseconds and it reports how many spawns came due. Nothing
//! runs off-thread, so a seeded run is fully reproducible.

use std::ops::RangeInclusive;

use rand::Rng;

use super::entity::Enemy;

/// Repeating spawn timer driven by accumulated frame time
#[derive(Debug, Clone, PartialEq)]
pub struct SpawnController {
    interval_ms: u32,
    elapsed_ms: f32,
}

impl SpawnController {
    pub fn new(interval_ms: u32) -> Self {
        Self {
            interval_ms: interval_ms.max(1),
            elapsed_ms: 0.0,
        }
    }

    /// Current period between spawns
    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    /// Time accumulated toward the next spawn
    pub fn elapsed_ms(&self) -> f32 {
        self.elapsed_ms
    }

    /// Reprogram the timer; the countdown restarts from zero
    pub fn set_interval(&mut self, interval_ms: u32) {
        self.interval_ms = interval_ms.max(1);
        self.elapsed_ms = 0.0;
    }

    /// Accumulate frame time and return the number of spawns now due.
    /// A frame longer than the interval can fire more than once.
    pub fn advance(&mut self, frame_ms: f32) -> u32 {
        self.elapsed_ms += frame_ms.max(0.0);
        let period = self.interval_ms as f32;
        let mut due = 0;
        while self.elapsed_ms >= period {
            self.elapsed_ms -= period;
            due += 1;
        }
        due
    }
}

/// Create an enemy at a uniformly random whole-pixel column in
/// `[0, screen_width - enemy_width]` with a uniformly random speed.
pub fn spawn_enemy<R: Rng + ?Sized>(
    rng: &mut R,
    id: u32,
    screen_width: f32,
    enemy_width: f32,
    speed_range: RangeInclusive<f32>,
) -> Enemy {
    let max_x = (screen_width - enemy_width).max(0.0) as u32;
    let x = rng.random_range(0..=max_x) as f32;
    let speed = if speed_range.start() < speed_range.end() {
        rng.random_range(speed_range)
    } else {
        *speed_range.start()
    };
    Enemy::new(id, x, speed)
}
