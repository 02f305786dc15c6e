//! Sound effects
//!
//! Playback is best effort: a player that cannot make sound just stays
//! quiet, and the game never waits on or fails because of audio. The
//! browser build synthesizes effects with the Web Audio API, so no sound
//! files are needed.

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Player hit another car
    Crash,
    /// Difficulty stepped up
    LevelUp,
}

impl SoundEffect {
    pub fn name(&self) -> &'static str {
        match self {
            SoundEffect::Crash => "crash",
            SoundEffect::LevelUp => "level_up",
        }
    }
}

/// Fire-and-forget sound playback
pub trait AudioPlayer {
    /// Start `effect` once; failures are swallowed
    fn play_once(&self, effect: SoundEffect);
}

/// Player with no output device
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentAudio;

impl AudioPlayer for SilentAudio {
    fn play_once(&self, effect: SoundEffect) {
        log::trace!("(silent) {}", effect.name());
    }
}

/// Master and effects volume with mute, shared by real players
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Volume {
    master: f32,
    sfx: f32,
    muted: bool,
}

impl Default for Volume {
    fn default() -> Self {
        Self {
            master: 0.8,
            sfx: 1.0,
            muted: false,
        }
    }
}

impl Volume {
    pub fn new(master: f32, sfx: f32, muted: bool) -> Self {
        Self {
            master: master.clamp(0.0, 1.0),
            sfx: sfx.clamp(0.0, 1.0),
            muted,
        }
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master(&mut self, vol: f32) {
        self.master = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx(&mut self, vol: f32) {
        self.sfx = vol.clamp(0.0, 1.0);
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    /// Gain actually applied to effects
    pub fn effective(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master * self.sfx
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::WebAudio;

#[cfg(target_arch = "wasm32")]
mod web {
    use web_sys::{AudioContext, GainNode, OscillatorNode, OscillatorType};

    use super::{AudioPlayer, SoundEffect, Volume};

    /// Web Audio synthesizer
    pub struct WebAudio {
        ctx: Option<AudioContext>,
        pub volume: Volume,
    }

    impl WebAudio {
        pub fn new(volume: Volume) -> Self {
            // May fail outside a secure context
            let ctx = AudioContext::new().ok();
            if ctx.is_none() {
                log::warn!("Failed to create AudioContext - audio disabled");
            }
            Self { ctx, volume }
        }

        /// Resume audio context (required after user gesture)
        pub fn resume(&self) {
            if let Some(ctx) = &self.ctx {
                let _ = ctx.resume();
            }
        }

        /// Create an oscillator with gain envelope
        fn create_osc(
            &self,
            ctx: &AudioContext,
            freq: f32,
            osc_type: OscillatorType,
        ) -> Option<(OscillatorNode, GainNode)> {
            let osc = ctx.create_oscillator().ok()?;
            let gain = ctx.create_gain().ok()?;

            osc.set_type(osc_type);
            osc.frequency().set_value(freq);
            osc.connect_with_audio_node(&gain).ok()?;
            gain.connect_with_audio_node(&ctx.destination()).ok()?;

            Some((osc, gain))
        }

        /// Crash - crunchy downward sweep over a low thud
        fn play_crash(&self, ctx: &AudioContext, vol: f32) {
            let t = ctx.current_time();

            if let Some((osc, gain)) = self.create_osc(ctx, 220.0, OscillatorType::Sawtooth) {
                gain.gain().set_value_at_time(vol * 0.45, t).ok();
                gain.gain()
                    .exponential_ramp_to_value_at_time(0.01, t + 0.5)
                    .ok();
                osc.frequency().set_value_at_time(220.0, t).ok();
                osc.frequency().set_value_at_time(900.0, t + 0.02).ok();
                osc.frequency().set_value_at_time(160.0, t + 0.04).ok();
                osc.frequency().set_value_at_time(700.0, t + 0.06).ok();
                osc.frequency()
                    .exponential_ramp_to_value_at_time(40.0, t + 0.5)
                    .ok();
                osc.start().ok();
                osc.stop_with_when(t + 0.55).ok();
            }

            if let Some((osc, gain)) = self.create_osc(ctx, 70.0, OscillatorType::Sine) {
                gain.gain().set_value_at_time(vol * 0.5, t).ok();
                gain.gain()
                    .exponential_ramp_to_value_at_time(0.01, t + 0.3)
                    .ok();
                osc.start().ok();
                osc.stop_with_when(t + 0.35).ok();
            }
        }

        /// Level up - short rising pair
        fn play_level_up(&self, ctx: &AudioContext, vol: f32) {
            for (i, freq) in [500.0, 750.0].iter().enumerate() {
                let delay = i as f64 * 0.08;
                if let Some((osc, gain)) = self.create_osc(ctx, *freq, OscillatorType::Triangle) {
                    let t = ctx.current_time() + delay;
                    gain.gain().set_value_at_time(vol * 0.2, t).ok();
                    gain.gain()
                        .exponential_ramp_to_value_at_time(0.01, t + 0.15)
                        .ok();
                    osc.start_with_when(t).ok();
                    osc.stop_with_when(t + 0.2).ok();
                }
            }
        }
    }

    impl AudioPlayer for WebAudio {
        fn play_once(&self, effect: SoundEffect) {
            let vol = self.volume.effective();
            if vol <= 0.0 {
                return;
            }

            let Some(ctx) = &self.ctx else { return };

            // Browsers keep the context suspended until a user gesture
            if ctx.state() == web_sys::AudioContextState::Suspended {
                let _ = ctx.resume();
            }

            match effect {
                SoundEffect::Crash => self.play_crash(ctx, vol),
                SoundEffect::LevelUp => self.play_level_up(ctx, vol),
            }
        }
    }
}
