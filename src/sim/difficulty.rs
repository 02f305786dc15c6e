//! Difficulty ramp
//!
//! A periodic step function: every `RAMP_PERIOD_SECS` of active play the
//! enemy speed range shifts up and the spawn interval shrinks toward its
//! floor.

use std::ops::RangeInclusive;

use crate::consts::*;

/// Ramp state for one session
#[derive(Debug, Clone, PartialEq)]
pub struct DifficultyRamp {
    /// Seconds since the last step
    pub timer_secs: f32,
    /// Additive boost applied to both ends of the enemy speed range
    pub speed_boost: f32,
    pub spawn_interval_ms: u32,
    /// Number of steps taken so far
    pub level: u32,
}

impl Default for DifficultyRamp {
    fn default() -> Self {
        Self {
            timer_secs: 0.0,
            speed_boost: INITIAL_SPEED_BOOST,
            spawn_interval_ms: SPAWN_INTERVAL_MS,
            level: 0,
        }
    }
}

impl DifficultyRamp {
    /// Current enemy speed range
    pub fn speed_range(&self) -> RangeInclusive<f32> {
        (ENEMY_MIN_SPEED + self.speed_boost)..=(ENEMY_MAX_SPEED + self.speed_boost)
    }

    /// Accumulate active play time. Returns the new spawn interval when a
    /// step was taken so the caller can reprogram its spawn timer.
    pub fn advance(&mut self, frame_secs: f32) -> Option<u32> {
        self.timer_secs += frame_secs;
        if self.timer_secs <= RAMP_PERIOD_SECS {
            return None;
        }

        self.speed_boost += SPEED_BOOST_STEP;
        self.timer_secs = 0.0;
        self.spawn_interval_ms = next_spawn_interval(self.spawn_interval_ms);
        self.level += 1;
        Some(self.spawn_interval_ms)
    }
}

/// `max(floor, round(interval * decay))`
pub fn next_spawn_interval(interval_ms: u32) -> u32 {
    let scaled = (interval_ms as f32 * SPAWN_INTERVAL_DECAY).round() as u32;
    scaled.max(MIN_SPAWN_INTERVAL_MS)
}
