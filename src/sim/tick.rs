//! Per-frame simulation step
//!
//! Runs the ordered frame sequence: inputs and timers, player movement,
//! spawning and enemy motion, culling and scoring, collision, then the
//! difficulty ramp. Rendering happens after this, outside the simulation.

use super::collision::check_collisions;
use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::*;
use crate::normalized_dt;

/// Input commands for a single frame (deterministic)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Resolved horizontal direction: -1 left, 0 none, +1 right
    pub direction: i8,
    /// Restart pressed this frame (honored in GameOver)
    pub restart: bool,
    /// Quit pressed this frame (honored in GameOver)
    pub quit: bool,
    /// Window or page closed (honored in any phase)
    pub close: bool,
}

/// Whether the frame loop should keep going
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Continue,
    Terminate,
}

/// Advance the game state by one frame of `frame_ms` milliseconds
pub fn tick(state: &mut GameState, input: &TickInput, frame_ms: f32) -> TickOutcome {
    state.events.clear();
    let frame_ms = if frame_ms.is_finite() {
        frame_ms.clamp(0.0, MAX_FRAME_MS)
    } else {
        0.0
    };

    // 1. Drain inputs and timer triggers
    if input.close {
        return TickOutcome::Terminate;
    }
    if state.phase == GamePhase::GameOver {
        if input.quit {
            return TickOutcome::Terminate;
        }
        if input.restart {
            state.reset();
        }
    }

    let playing = state.phase == GamePhase::Playing;
    let due_spawns = if playing {
        state.spawner.advance(frame_ms)
    } else {
        0
    };

    if playing {
        state.frame += 1;
        state.play_time_secs += frame_ms / 1000.0;

        // 2. Player movement
        state.player.move_by(input.direction);

        // 3. Spawn and move enemies
        for _ in 0..due_spawns {
            state.spawn_enemy();
        }
        let dt = normalized_dt(frame_ms);
        for enemy in &mut state.enemies {
            enemy.update(dt);
        }
    }

    // 4. Cull and score, regardless of phase
    cull_off_screen(state);

    if state.phase != GamePhase::Playing {
        return TickOutcome::Continue;
    }

    // 5. Collision
    if let Some(hit) = check_collisions(&state.player, &state.enemies) {
        state.phase = GamePhase::GameOver;
        state.events.push(GameEvent::Crash {
            enemy_id: hit.enemy_id,
            score: state.score,
        });
        return TickOutcome::Continue;
    }

    // 6. Difficulty ramp
    if let Some(interval) = state.ramp.advance(frame_ms / 1000.0) {
        state.spawner.set_interval(interval);
        log::debug!(
            "Difficulty level {}: boost {:.1}, spawn every {} ms",
            state.ramp.level,
            state.ramp.speed_boost,
            interval
        );
        state.events.push(GameEvent::DifficultyUp {
            level: state.ramp.level,
            speed_boost: state.ramp.speed_boost,
            spawn_interval_ms: interval,
        });
    }

    TickOutcome::Continue
}

/// Drop enemies whose top edge passed the bottom of the screen, awarding
/// points for each one exactly once
fn cull_off_screen(state: &mut GameState) {
    let (passed, remaining): (Vec<_>, Vec<_>) = std::mem::take(&mut state.enemies)
        .into_iter()
        .partition(|enemy| enemy.is_off_screen());
    state.enemies = remaining;

    for enemy in passed {
        state.score += SCORE_PER_ENEMY;
        state.events.push(GameEvent::EnemyPassed {
            enemy_id: enemy.id,
            score: state.score,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::difficulty::DifficultyRamp;
    use crate::sim::entity::Enemy;
    use crate::target_frame_ms;

    const FRAME: f32 = 16.0;

    fn enemy_on_player(state: &mut GameState) -> Enemy {
        let id = state.next_entity_id();
        let mut enemy = Enemy::new(id, state.player.pos.x, 0.0);
        enemy.pos.y = state.player.pos.y;
        enemy
    }

    #[test]
    fn test_idle_player_stays_centered() {
        let mut state = GameState::new(1);
        for _ in 0..10 {
            tick(&mut state, &TickInput::default(), FRAME);
        }
        assert_eq!(state.player.pos.x, 210.0);
    }

    #[test]
    fn test_left_input_moves_player() {
        let mut state = GameState::new(1);
        let left = TickInput {
            direction: -1,
            ..Default::default()
        };
        for _ in 0..10 {
            tick(&mut state, &left, FRAME);
        }
        assert_eq!(state.player.pos.x, 160.0);
    }

    #[test]
    fn test_spawns_follow_interval() {
        let mut state = GameState::new(1);
        // 56 frames of 16 ms = 896 ms, just short of 900
        for _ in 0..56 {
            tick(&mut state, &TickInput::default(), FRAME);
        }
        assert!(state.enemies.is_empty());
        tick(&mut state, &TickInput::default(), FRAME);
        assert_eq!(state.enemies.len(), 1);
    }

    #[test]
    fn test_enemy_moves_by_speed_times_dt() {
        let mut state = GameState::new(1);
        let mut enemy = Enemy::new(99, 0.0, 4.0);
        enemy.pos.y = 100.0;
        state.enemies.push(enemy);
        tick(&mut state, &TickInput::default(), 32.0);
        assert_eq!(state.enemies[0].pos.y, 108.0);
    }

    #[test]
    fn test_off_screen_enemy_scores_once() {
        let mut state = GameState::new(1);
        let mut enemy = Enemy::new(99, 0.0, 4.0);
        enemy.pos.y = SCREEN_HEIGHT - 1.0;
        state.enemies.push(enemy);

        tick(&mut state, &TickInput::default(), FRAME);
        assert_eq!(state.score, 10);
        assert!(state.enemies.iter().all(|e| e.id != 99));
        assert_eq!(
            state.events,
            vec![GameEvent::EnemyPassed {
                enemy_id: 99,
                score: 10
            }]
        );

        tick(&mut state, &TickInput::default(), FRAME);
        assert_eq!(state.score, 10);
    }

    #[test]
    fn test_collision_ends_run() {
        let mut state = GameState::new(1);
        let enemy = enemy_on_player(&mut state);
        let id = enemy.id;
        state.enemies.push(enemy);

        tick(&mut state, &TickInput::default(), FRAME);
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(
            state.events,
            vec![GameEvent::Crash {
                enemy_id: id,
                score: 0
            }]
        );
    }

    #[test]
    fn test_game_over_freezes_world() {
        let mut state = GameState::new(1);
        let enemy = enemy_on_player(&mut state);
        state.enemies.push(enemy);
        tick(&mut state, &TickInput::default(), FRAME);
        assert!(state.is_game_over());

        let snapshot_enemies = state.enemies.clone();
        let snapshot_player = state.player.clone();
        let snapshot_ramp = state.ramp.clone();
        let right = TickInput {
            direction: 1,
            ..Default::default()
        };
        for _ in 0..1000 {
            assert_eq!(tick(&mut state, &right, FRAME), TickOutcome::Continue);
        }
        assert_eq!(state.enemies, snapshot_enemies);
        assert_eq!(state.player, snapshot_player);
        assert_eq!(state.ramp, snapshot_ramp);
        assert!(state.events.is_empty());
    }

    #[test]
    fn test_game_over_still_culls_and_scores() {
        let mut state = GameState::new(1);
        state.phase = GamePhase::GameOver;
        let mut enemy = Enemy::new(500, 0.0, 4.0);
        enemy.pos.y = SCREEN_HEIGHT + 1.0;
        state.enemies.push(enemy);

        tick(&mut state, &TickInput::default(), FRAME);
        assert_eq!(state.score, 10);
        assert!(state.enemies.is_empty());
        assert_eq!(
            state.events,
            vec![GameEvent::EnemyPassed {
                enemy_id: 500,
                score: 10
            }]
        );
        assert!(state.is_game_over());
    }

    #[test]
    fn test_crash_frame_scores_passed_enemy_first() {
        let mut state = GameState::new(1);
        let mut passed = Enemy::new(900, 0.0, 4.0);
        passed.pos.y = SCREEN_HEIGHT - 1.0;
        state.enemies.push(passed);
        let mut hit = Enemy::new(901, state.player.pos.x, 0.0);
        hit.pos.y = state.player.pos.y;
        state.enemies.push(hit);

        tick(&mut state, &TickInput::default(), FRAME);
        assert!(state.is_game_over());
        assert_eq!(state.score, 10);
        assert_eq!(
            state.events,
            vec![
                GameEvent::EnemyPassed {
                    enemy_id: 900,
                    score: 10
                },
                GameEvent::Crash {
                    enemy_id: 901,
                    score: 10
                },
            ]
        );
    }

    #[test]
    fn test_non_finite_frame_time_is_ignored() {
        let mut state = GameState::new(1);
        let mut enemy = Enemy::new(99, 0.0, 4.0);
        enemy.pos.y = 100.0;
        state.enemies.push(enemy);

        for frame_ms in [f32::NAN, f32::INFINITY, f32::NAN] {
            tick(&mut state, &TickInput::default(), frame_ms);
        }
        assert_eq!(state.ramp, DifficultyRamp::default());
        assert_eq!(state.spawner.elapsed_ms(), 0.0);
        assert_eq!(state.enemies[0].pos.y, 100.0);
        assert_eq!(state.play_time_secs, 0.0);
    }

    #[test]
    fn test_ramp_steps_after_five_seconds() {
        let mut state = GameState::new(1);
        // Keep the road clear so no collision interrupts the ramp
        let mut elapsed = 0.0;
        let mut stepped = false;
        while elapsed <= RAMP_PERIOD_SECS * 1000.0 {
            tick(&mut state, &TickInput::default(), 50.0);
            stepped |= state
                .events
                .iter()
                .any(|e| matches!(e, GameEvent::DifficultyUp { level: 1, .. }));
            state.enemies.clear();
            elapsed += 50.0;
        }
        assert!(stepped);
        assert_eq!(state.ramp.level, 1);
        assert_eq!(state.ramp.spawn_interval_ms, 828);
        assert_eq!(state.spawner.interval_ms(), 828);
    }

    #[test]
    fn test_quit_ignored_while_playing() {
        let mut state = GameState::new(1);
        let quit = TickInput {
            quit: true,
            ..Default::default()
        };
        assert_eq!(tick(&mut state, &quit, FRAME), TickOutcome::Continue);
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_quit_from_game_over_terminates() {
        let mut state = GameState::new(1);
        state.phase = GamePhase::GameOver;
        let quit = TickInput {
            quit: true,
            ..Default::default()
        };
        assert_eq!(tick(&mut state, &quit, FRAME), TickOutcome::Terminate);
    }

    #[test]
    fn test_close_terminates_any_phase() {
        let mut state = GameState::new(1);
        let close = TickInput {
            close: true,
            ..Default::default()
        };
        assert_eq!(tick(&mut state, &close, FRAME), TickOutcome::Terminate);
    }

    #[test]
    fn test_restart_from_game_over() {
        let mut state = GameState::new(1);
        let enemy = enemy_on_player(&mut state);
        state.enemies.push(enemy);
        state.score = 50;
        tick(&mut state, &TickInput::default(), FRAME);
        assert!(state.is_game_over());

        let restart = TickInput {
            restart: true,
            ..Default::default()
        };
        tick(&mut state, &restart, FRAME);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score, 0);
        assert!(state.enemies.is_empty());
        assert_eq!(state.ramp.spawn_interval_ms, SPAWN_INTERVAL_MS);
        assert_eq!(state.ramp.speed_boost, INITIAL_SPEED_BOOST);
        assert!(state.events.contains(&GameEvent::Restarted { run: 2 }));
    }

    #[test]
    fn test_restart_ignored_while_playing() {
        let mut state = GameState::new(1);
        state.score = 30;
        let restart = TickInput {
            restart: true,
            ..Default::default()
        };
        tick(&mut state, &restart, FRAME);
        assert_eq!(state.score, 30);
        assert_eq!(state.run, 1);
    }

    #[test]
    fn test_long_frame_is_clamped() {
        let mut state = GameState::new(1);
        let mut enemy = Enemy::new(99, 0.0, 4.0);
        enemy.pos.y = 0.0;
        state.enemies.push(enemy);
        tick(&mut state, &TickInput::default(), 10_000.0);
        let moved = state.enemies.iter().find(|e| e.id == 99).unwrap().pos.y;
        assert_eq!(moved, 4.0 * normalized_dt(MAX_FRAME_MS));
    }

    #[test]
    fn test_determinism() {
        let mut state1 = GameState::new(99999);
        let mut state2 = GameState::new(99999);

        let inputs = [
            TickInput {
                direction: -1,
                ..Default::default()
            },
            TickInput::default(),
            TickInput {
                direction: 1,
                ..Default::default()
            },
        ];

        for i in 0..600 {
            let input = &inputs[i % inputs.len()];
            tick(&mut state1, input, target_frame_ms());
            tick(&mut state2, input, target_frame_ms());
        }

        assert_eq!(state1.frame, state2.frame);
        assert_eq!(state1.score, state2.score);
        assert_eq!(state1.phase, state2.phase);
        assert_eq!(state1.enemies, state2.enemies);
        assert_eq!(state1.player, state2.player);
    }
}
