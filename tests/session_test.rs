use proptest::prelude::*;

use traf_racer::audio::SilentAudio;
use traf_racer::consts::*;
use traf_racer::renderer::{FrameRecorder, Sprite};
use traf_racer::sim::*;
use traf_racer::{Game, LoopControl, Settings};

const FRAME: f32 = 16.0;

/// Simple scripted driver: weave left and right every second
fn weave(frame: u64) -> i8 {
    if (frame / 60) % 2 == 0 { -1 } else { 1 }
}

fn run_session(seed: u64, frames: u64) -> GameState {
    let mut state = GameState::new(seed);
    for frame in 0..frames {
        let input = TickInput {
            direction: weave(frame),
            ..Default::default()
        };
        tick(&mut state, &input, FRAME);
        if state.is_game_over() {
            break;
        }
    }
    state
}

#[test]
fn test_same_seed_same_session() {
    let a = run_session(1234, 3000);
    let b = run_session(1234, 3000);

    assert_eq!(a.score, b.score);
    assert_eq!(a.phase, b.phase);
    assert_eq!(a.frame, b.frame);
    assert_eq!(a.player, b.player);
    assert_eq!(a.enemies, b.enemies);
}

#[test]
fn test_score_matches_passed_enemies() {
    let mut state = GameState::new(99);
    let mut passed = 0;
    let mut seen = std::collections::HashSet::new();

    for _ in 0..5000 {
        let input = TickInput {
            direction: autopilot::steer(&state),
            ..Default::default()
        };
        tick(&mut state, &input, FRAME);
        for event in &state.events {
            if let GameEvent::EnemyPassed { enemy_id, score } = *event {
                assert!(seen.insert(enemy_id), "enemy {} scored twice", enemy_id);
                passed += 1;
                assert_eq!(score, passed * SCORE_PER_ENEMY);
            }
        }
        if state.is_game_over() {
            break;
        }
    }

    assert!(passed > 0);
    assert_eq!(state.score, passed * SCORE_PER_ENEMY);
}

#[test]
fn test_crash_freezes_until_restart() {
    let mut state = GameState::new(7);
    let idle = TickInput::default();
    while !state.is_game_over() {
        // Sitting still in the middle lane eventually gets hit
        tick(&mut state, &idle, FRAME);
        assert!(state.frame < 100_000);
    }

    let frozen_score = state.score;
    let frozen_enemies = state.enemies.clone();
    for _ in 0..120 {
        let input = TickInput {
            direction: 1,
            ..Default::default()
        };
        assert_eq!(tick(&mut state, &input, FRAME), TickOutcome::Continue);
    }
    assert_eq!(state.score, frozen_score);
    assert_eq!(state.enemies, frozen_enemies);

    let restart = TickInput {
        restart: true,
        ..Default::default()
    };
    tick(&mut state, &restart, FRAME);
    assert_eq!(state.phase, GamePhase::Playing);
    assert_eq!(state.score, 0);
    assert!(state.enemies.is_empty());
    // The restart frame itself is a Playing frame, so the ramp timer has run once
    assert_eq!(state.ramp.speed_boost, INITIAL_SPEED_BOOST);
    assert_eq!(state.ramp.spawn_interval_ms, SPAWN_INTERVAL_MS);
    assert_eq!(state.ramp.level, 0);
    assert!(state.ramp.timer_secs <= FRAME / 1000.0);
    assert_eq!(state.spawner.interval_ms(), SPAWN_INTERVAL_MS);
    assert_eq!(state.player, Player::default());
}

#[test]
fn test_difficulty_reaches_floor() {
    let mut state = GameState::new(3);
    let mut intervals = Vec::new();

    // Two simulated minutes with no enemies in the way
    for _ in 0..(120_000.0 / FRAME) as u32 {
        state.enemies.clear();
        tick(&mut state, &TickInput::default(), FRAME);
        for event in &state.events {
            if let GameEvent::DifficultyUp {
                spawn_interval_ms, ..
            } = *event
            {
                intervals.push(spawn_interval_ms);
            }
        }
    }

    assert_eq!(&intervals[..3], &[828, 762, 701]);
    assert!(intervals.windows(2).all(|w| w[1] <= w[0]));
    assert_eq!(*intervals.last().unwrap(), MIN_SPAWN_INTERVAL_MS);
    assert_eq!(state.spawner.interval_ms(), MIN_SPAWN_INTERVAL_MS);
}

#[test]
fn test_autopilot_demo_session() {
    let settings = Settings {
        autopilot: true,
        show_fps: true,
        ..Default::default()
    };
    let mut game = Game::new(2024, settings);
    let mut recorder = FrameRecorder::new();

    for _ in 0..1800 {
        assert_eq!(
            game.frame(FRAME, &mut recorder, &SilentAudio),
            LoopControl::Continue
        );
    }

    assert_eq!(recorder.frames_presented(), 1800);
    assert_eq!(recorder.sprites(Sprite::Player).len(), 1);
    assert_eq!(
        recorder.sprites(Sprite::Enemy).len(),
        game.state.enemies.len()
    );
    let texts = recorder.texts();
    assert_eq!(texts[0], format!("Score: {}", game.state.score));
    assert!(texts[1].starts_with("FPS: "));
}

#[test]
fn test_close_ends_session_in_any_phase() {
    let mut game = Game::new(11, Settings::default());
    let mut recorder = FrameRecorder::new();
    game.frame(FRAME, &mut recorder, &SilentAudio);

    game.input.request_close();
    assert_eq!(
        game.frame(FRAME, &mut recorder, &SilentAudio),
        LoopControl::Quit
    );
}

#[test]
fn test_escape_ignored_while_playing() {
    let mut game = Game::new(11, Settings::default());
    let mut recorder = FrameRecorder::new();

    game.input.set_key("Escape", true);
    assert_eq!(
        game.frame(FRAME, &mut recorder, &SilentAudio),
        LoopControl::Continue
    );
    assert_eq!(game.state.phase, GamePhase::Playing);
}

proptest! {
    #[test]
    fn prop_player_stays_on_screen(moves in prop::collection::vec(-1i8..=1, 0..400)) {
        let mut player = Player::default();
        for direction in moves {
            player.move_by(direction);
            prop_assert!(player.pos.x >= 0.0);
            prop_assert!(player.pos.x + player.size.x <= SCREEN_WIDTH);
        }
    }

    #[test]
    fn prop_spawn_fits_screen(seed in any::<u64>(), boost in 0.0f32..30.0) {
        use rand::SeedableRng;
        let mut rng = rand_pcg::Pcg32::seed_from_u64(seed);
        let range = (ENEMY_MIN_SPEED + boost)..=(ENEMY_MAX_SPEED + boost);
        let enemy = spawn_enemy(&mut rng, 1, SCREEN_WIDTH, ENEMY_WIDTH, range.clone());

        prop_assert!(enemy.pos.x >= 0.0);
        prop_assert!(enemy.pos.x + enemy.size.x <= SCREEN_WIDTH);
        prop_assert_eq!(enemy.pos.x, enemy.pos.x.trunc());
        prop_assert_eq!(enemy.pos.y, -ENEMY_HEIGHT);
        prop_assert!(range.contains(&enemy.speed));
    }

    #[test]
    fn prop_collision_independent_of_order(
        xs in prop::collection::vec(0.0f32..SCREEN_WIDTH, 1..8),
        ys in prop::collection::vec(300.0f32..SCREEN_HEIGHT, 8),
        rotate in 0usize..8,
    ) {
        let player = Player::default();
        let enemies: Vec<Enemy> = xs
            .iter()
            .zip(&ys)
            .enumerate()
            .map(|(i, (&x, &y))| {
                let mut enemy = Enemy::new(i as u32 + 1, x, 0.0);
                enemy.pos.y = y;
                enemy
            })
            .collect();
        let mut shuffled = enemies.clone();
        let len = shuffled.len();
        shuffled.rotate_left(rotate % len);
        shuffled.reverse();

        let hit = check_collisions(&player, &enemies).is_some();
        prop_assert_eq!(hit, check_collisions(&player, &shuffled).is_some());
        let any = enemies.iter().any(|e| e.rect().intersects(&player.rect()));
        prop_assert_eq!(hit, any);
    }
}
