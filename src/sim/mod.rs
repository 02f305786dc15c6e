//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Frame time is passed in, never read from a clock
//! - Seeded RNG only
//! - Stable iteration order (enemies in spawn order)
//! - No rendering, audio or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod difficulty;
pub mod entity;
pub mod rect;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{CollisionResult, check_collisions};
pub use difficulty::{DifficultyRamp, next_spawn_interval};
pub use entity::{Enemy, Player};
pub use rect::Rect;
pub use spawn::{SpawnController, spawn_enemy};
pub use state::{GameEvent, GamePhase, GameState};
pub use tick::{TickInput, TickOutcome, tick};
