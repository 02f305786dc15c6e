//! Idle/demo mode steering
//!
//! Picks the column with the most horizontal clearance from cars that are
//! about to reach the player's row, then steers toward it one step at a time.

use super::state::GameState;
use crate::consts::*;

/// How far above the player's roof a car counts as a threat
const LOOKAHEAD: f32 = 260.0;
/// Column sampling step when searching for a safe spot
const SAMPLE_STEP: f32 = 5.0;

/// Direction (-1, 0, +1) the autopilot would hold this frame
pub fn steer(state: &GameState) -> i8 {
    let player = &state.player;
    let band_top = player.pos.y - LOOKAHEAD;
    let band_bottom = player.pos.y + player.size.y;

    let threats: Vec<(f32, f32)> = state
        .enemies
        .iter()
        .filter(|e| e.pos.y + e.size.y > band_top && e.pos.y < band_bottom)
        .map(|e| (e.pos.x, e.pos.x + e.size.x))
        .collect();

    if threats.is_empty() {
        return 0;
    }

    let clearance = |x: f32| -> f32 {
        threats
            .iter()
            .map(|&(left, right)| {
                if x + player.size.x <= left {
                    left - (x + player.size.x)
                } else if x >= right {
                    x - right
                } else {
                    0.0
                }
            })
            .fold(f32::INFINITY, f32::min)
    };

    let current = clearance(player.pos.x);
    let max_x = SCREEN_WIDTH - player.size.x;
    let mut best_x = player.pos.x;
    let mut best_clearance = current;
    let mut x = 0.0;
    while x <= max_x {
        let c = clearance(x);
        let closer = (x - player.pos.x).abs() < (best_x - player.pos.x).abs();
        if c > best_clearance || (c == best_clearance && closer) {
            best_clearance = c;
            best_x = x;
        }
        x += SAMPLE_STEP;
    }

    // Already as safe as anywhere else
    if best_clearance <= current {
        return 0;
    }

    let delta = best_x - player.pos.x;
    if delta.abs() < player.speed / 2.0 {
        0
    } else {
        delta.signum() as i8
    }
}
