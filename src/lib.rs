//! TRAF Racer - A single-screen car-dodging arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, spawning, difficulty, collisions)
//! - `game`: Frame loop shell tying input, simulation, audio and rendering together
//! - `renderer`: Renderer trait, scene building and the WebGPU shape pipeline
//! - `audio`: Best-effort sound effects
//! - `input`: Held-key state
//! - `clock`: Frame timing and pacing
//! - `settings`: User preferences

pub mod audio;
pub mod clock;
pub mod game;
pub mod input;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use game::{Game, LoopControl};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Logical screen size in pixels
    pub const SCREEN_WIDTH: f32 = 480.0;
    pub const SCREEN_HEIGHT: f32 = 640.0;

    /// Target frame rate
    pub const TARGET_FPS: u32 = 60;
    /// Reference tick used to normalize frame time into `dt`
    pub const REFERENCE_TICK_MS: f32 = 16.0;
    /// Longest frame the simulation will accept in one step
    pub const MAX_FRAME_MS: f32 = 100.0;

    /// Player car
    pub const PLAYER_WIDTH: f32 = 60.0;
    pub const PLAYER_HEIGHT: f32 = 90.0;
    /// Pixels per frame
    pub const PLAYER_SPEED: f32 = 5.0;
    /// Gap between the player car and the bottom edge
    pub const PLAYER_BOTTOM_MARGIN: f32 = 20.0;

    /// Enemy cars
    pub const ENEMY_WIDTH: f32 = 55.0;
    pub const ENEMY_HEIGHT: f32 = 80.0;
    /// Base speed range, in pixels per reference tick
    pub const ENEMY_MIN_SPEED: f32 = 3.0;
    pub const ENEMY_MAX_SPEED: f32 = 6.0;

    /// Spawn timer
    pub const SPAWN_INTERVAL_MS: u32 = 900;
    pub const MIN_SPAWN_INTERVAL_MS: u32 = 300;
    pub const SPAWN_INTERVAL_DECAY: f32 = 0.92;

    /// Difficulty ramp
    pub const RAMP_PERIOD_SECS: f32 = 5.0;
    pub const INITIAL_SPEED_BOOST: f32 = 0.1;
    pub const SPEED_BOOST_STEP: f32 = 0.6;

    /// Points for each enemy that leaves the screen
    pub const SCORE_PER_ENEMY: u64 = 10;

    /// Road backdrop
    pub const ROAD_MARGIN: f32 = 40.0;
    pub const ROAD_SCROLL_SPEED: f32 = 4.0;
    pub const LANE_DASH_PERIOD: f32 = 40.0;
    pub const LANE_DASH_WIDTH: f32 = 10.0;
    pub const LANE_DASH_LENGTH: f32 = 20.0;
}

/// Frame time in milliseconds for the target frame rate
#[inline]
pub fn target_frame_ms() -> f32 {
    1000.0 / consts::TARGET_FPS as f32
}

/// Convert a frame duration into the normalized movement step
#[inline]
pub fn normalized_dt(frame_ms: f32) -> f32 {
    frame_ms / consts::REFERENCE_TICK_MS
}
