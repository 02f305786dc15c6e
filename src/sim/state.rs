//! Game state and core simulation types
//!
//! One `GameState` is one playthrough. Restart goes through `reset`, which
//! puts every gameplay field back to its initial value in place.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::difficulty::DifficultyRamp;
use super::entity::{Enemy, Player};
use super::spawn::{SpawnController, spawn_enemy};
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Run ended, waiting for restart or quit
    GameOver,
}

/// Something that happened during a frame, for audio and logging
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    /// An enemy left the bottom of the screen and was scored
    EnemyPassed { enemy_id: u32, score: u64 },
    /// The player hit an enemy; the run is over
    Crash { enemy_id: u32, score: u64 },
    /// The difficulty ramp stepped up
    DifficultyUp {
        level: u32,
        speed_boost: f32,
        spawn_interval_ms: u32,
    },
    /// The session was reset for a new run
    Restarted { run: u32 },
}

/// Complete session state (deterministic for a given seed and input)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed the RNG was created from
    pub seed: u64,
    /// Runs started in this process, counting the first one
    pub run: u32,
    pub phase: GamePhase,
    pub score: u64,
    pub player: Player,
    /// Active enemies in spawn order
    pub enemies: Vec<Enemy>,
    pub spawner: SpawnController,
    pub ramp: DifficultyRamp,
    /// Frames simulated in the current run
    pub frame: u64,
    /// Seconds of active (Playing) time in the current run
    pub play_time_secs: f32,
    /// Events from the most recent tick
    pub events: Vec<GameEvent>,
    rng: Pcg32,
    next_id: u32,
}

impl GameState {
    /// Create a new game state with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            run: 1,
            phase: GamePhase::Playing,
            score: 0,
            player: Player::default(),
            enemies: Vec::new(),
            spawner: SpawnController::new(SPAWN_INTERVAL_MS),
            ramp: DifficultyRamp::default(),
            frame: 0,
            play_time_secs: 0.0,
            events: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
            next_id: 1,
        }
    }

    /// Start a fresh run. The RNG stream carries on so runs differ.
    pub fn reset(&mut self) {
        self.run += 1;
        self.phase = GamePhase::Playing;
        self.score = 0;
        self.player = Player::default();
        self.enemies.clear();
        self.spawner = SpawnController::new(SPAWN_INTERVAL_MS);
        self.ramp = DifficultyRamp::default();
        self.frame = 0;
        self.play_time_secs = 0.0;
        self.events.push(GameEvent::Restarted { run: self.run });
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Spawn one enemy using the current difficulty speed range
    pub fn spawn_enemy(&mut self) {
        let id = self.next_entity_id();
        let range = self.ramp.speed_range();
        let enemy = spawn_enemy(&mut self.rng, id, SCREEN_WIDTH, ENEMY_WIDTH, range);
        self.enemies.push(enemy);
    }
}
