//! Frame loop shell
//!
//! `Game` owns one session plus everything around it that is not pure
//! simulation: held keys, settings, the road scroll and the FPS readout.
//! Each call to `frame` runs the simulation step, forwards the frame's
//! events to audio and the log, and draws the result.

use crate::audio::{AudioPlayer, SoundEffect};
use crate::clock::{FpsCounter, FrameClock};
use crate::input::InputState;
use crate::renderer::{Backdrop, Renderer, draw_frame};
use crate::settings::Settings;
use crate::sim::{GameEvent, GameState, TickOutcome, autopilot, tick};

/// Frames the autopilot waits on the game-over screen before restarting
pub const AUTOPILOT_RESTART_DELAY_FRAMES: u32 = 120;

/// Whether the frame loop should keep running
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Quit,
}

/// Game instance holding all state
pub struct Game {
    pub state: GameState,
    pub input: InputState,
    pub settings: Settings,
    backdrop: Backdrop,
    fps: FpsCounter,
    /// Frames spent on the game-over screen
    game_over_frames: u32,
}

impl Game {
    pub fn new(seed: u64, settings: Settings) -> Self {
        log::info!("New session with seed {}", seed);
        Self {
            state: GameState::new(seed),
            input: InputState::new(),
            settings,
            backdrop: Backdrop::default(),
            fps: FpsCounter::default(),
            game_over_frames: 0,
        }
    }

    pub fn backdrop(&self) -> &Backdrop {
        &self.backdrop
    }

    pub fn fps(&self) -> u32 {
        self.fps.fps()
    }

    /// Run one frame of `frame_ms` milliseconds: simulate, dispatch
    /// events, render
    pub fn frame<R, A>(&mut self, frame_ms: f32, renderer: &mut R, audio: &A) -> LoopControl
    where
        R: Renderer + ?Sized,
        A: AudioPlayer + ?Sized,
    {
        self.fps.record(frame_ms);

        let mut input = self.input.take_tick_input();
        if self.settings.autopilot {
            if self.state.is_game_over() {
                input.restart |= self.game_over_frames >= AUTOPILOT_RESTART_DELAY_FRAMES;
            } else {
                input.direction = autopilot::steer(&self.state);
            }
        }

        let outcome = tick(&mut self.state, &input, frame_ms);
        if outcome == TickOutcome::Terminate {
            log::info!(
                "Quitting after run {} with score {}",
                self.state.run,
                self.state.score
            );
            return LoopControl::Quit;
        }

        self.dispatch_events(audio);

        if self.state.is_game_over() {
            self.game_over_frames = self.game_over_frames.saturating_add(1);
        } else {
            self.game_over_frames = 0;
        }

        if !self.settings.reduced_motion {
            self.backdrop.advance();
        }
        let fps = self.settings.show_fps.then(|| self.fps.fps());
        draw_frame(renderer, &self.state, &self.backdrop, fps);

        LoopControl::Continue
    }

    fn dispatch_events<A: AudioPlayer + ?Sized>(&self, audio: &A) {
        for event in &self.state.events {
            match *event {
                GameEvent::EnemyPassed { enemy_id, score } => {
                    log::trace!("Enemy {} passed, score {}", enemy_id, score);
                }
                GameEvent::Crash { enemy_id, score } => {
                    log::info!(
                        "Crashed into enemy {} after {:.1}s, final score {}",
                        enemy_id,
                        self.state.play_time_secs,
                        score
                    );
                    audio.play_once(SoundEffect::Crash);
                }
                GameEvent::DifficultyUp { level, .. } => {
                    log::debug!("Difficulty up to level {}", level);
                    audio.play_once(SoundEffect::LevelUp);
                }
                GameEvent::Restarted { run } => {
                    log::info!("Starting run {}", run);
                }
            }
        }
    }

    /// Drive frames from `clock` until quit or `max_frames` frames have run.
    /// `poll` feeds platform input before each frame. Returns frames run.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn run<R, A, P>(
        &mut self,
        clock: &mut FrameClock,
        renderer: &mut R,
        audio: &A,
        max_frames: Option<u64>,
        mut poll: P,
    ) -> u64
    where
        R: Renderer + ?Sized,
        A: AudioPlayer + ?Sized,
        P: FnMut(&mut InputState),
    {
        let mut frames = 0;
        loop {
            if max_frames.is_some_and(|max| frames >= max) {
                break;
            }
            let frame_ms = clock.tick();
            poll(&mut self.input);
            frames += 1;
            if self.frame(frame_ms, renderer, audio) == LoopControl::Quit {
                break;
            }
            clock.pace();
        }
        frames
    }
}
