//! Frame timing
//!
//! Platform-agnostic frame clock for the game loop.
//! - Native: `std::time::Instant`, with a sleeping pace to the target rate
//! - WASM: `performance.now()`; pacing is left to `requestAnimationFrame`

#[cfg(not(target_arch = "wasm32"))]
type Instant = std::time::Instant;

#[cfg(target_arch = "wasm32")]
type Instant = f64;

#[cfg(not(target_arch = "wasm32"))]
fn now() -> Instant {
    std::time::Instant::now()
}

#[cfg(target_arch = "wasm32")]
fn now() -> Instant {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or_else(js_sys::Date::now)
}

/// Milliseconds between two instants
#[cfg(not(target_arch = "wasm32"))]
fn millis_between(start: Instant, end: Instant) -> f32 {
    end.duration_since(start).as_secs_f32() * 1000.0
}

#[cfg(target_arch = "wasm32")]
fn millis_between(start: Instant, end: Instant) -> f32 {
    (end - start) as f32
}

/// Measures per-frame elapsed time and paces the loop to a target rate
pub struct FrameClock {
    target_frame_ms: f32,
    last_frame: Instant,
}

impl FrameClock {
    pub fn new(target_fps: u32) -> Self {
        Self {
            target_frame_ms: 1000.0 / target_fps.max(1) as f32,
            last_frame: now(),
        }
    }

    pub fn target_frame_ms(&self) -> f32 {
        self.target_frame_ms
    }

    /// Milliseconds since the previous call (or since construction)
    pub fn tick(&mut self) -> f32 {
        let current = now();
        let elapsed = millis_between(self.last_frame, current);
        self.last_frame = current;
        elapsed
    }

    /// Block until one target frame has passed since the last `tick`
    #[cfg(not(target_arch = "wasm32"))]
    pub fn pace(&self) {
        let spent = millis_between(self.last_frame, now());
        let remaining = self.target_frame_ms - spent;
        if remaining > 0.0 {
            std::thread::sleep(std::time::Duration::from_secs_f32(remaining / 1000.0));
        }
    }
}

/// Number of frames the FPS average spans
const FPS_WINDOW: usize = 60;

/// Rolling frames-per-second average over the last `FPS_WINDOW` frames
#[derive(Debug, Clone)]
pub struct FpsCounter {
    frame_ms: [f32; FPS_WINDOW],
    index: usize,
    filled: usize,
}

impl Default for FpsCounter {
    fn default() -> Self {
        Self {
            frame_ms: [0.0; FPS_WINDOW],
            index: 0,
            filled: 0,
        }
    }
}

impl FpsCounter {
    pub fn record(&mut self, frame_ms: f32) {
        self.frame_ms[self.index] = frame_ms;
        self.index = (self.index + 1) % FPS_WINDOW;
        self.filled = (self.filled + 1).min(FPS_WINDOW);
    }

    pub fn fps(&self) -> u32 {
        let total: f32 = self.frame_ms[..self.filled].iter().sum();
        if total <= 0.0 {
            return 0;
        }
        (self.filled as f32 * 1000.0 / total).round() as u32
    }
}
