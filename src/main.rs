//! TRAF Racer entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::fmt::Write as _;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::prelude::*;
    use web_sys::{Element, HtmlCanvasElement, KeyboardEvent};

    use traf_racer::audio::WebAudio;
    use traf_racer::clock::FrameClock;
    use traf_racer::consts::*;
    use traf_racer::renderer::{RenderState, Renderer, ShapeBatch, Sprite, TextSize};
    use traf_racer::sim::Rect;
    use traf_racer::{Game, LoopControl, Settings};

    /// Draws sprites through the GPU pipeline and text into a DOM overlay
    struct WebRenderer {
        batch: ShapeBatch,
        gpu: Option<RenderState>,
        overlay: Option<Element>,
        /// Overlay markup last written, to skip redundant DOM updates
        overlay_html: String,
    }

    impl WebRenderer {
        fn overlay_markup(&self) -> String {
            let mut html = String::new();
            for item in self.batch.texts() {
                let class = match item.size {
                    TextSize::Small => "small",
                    TextSize::Large => "large",
                };
                let transform = if item.centered {
                    "translate(-50%, -50%)"
                } else {
                    "none"
                };
                let _ = write!(
                    html,
                    "<div class=\"{}\" style=\"left: {:.3}%; top: {:.3}%; transform: {}\">{}</div>",
                    class,
                    item.pos.x / SCREEN_WIDTH * 100.0,
                    item.pos.y / SCREEN_HEIGHT * 100.0,
                    transform,
                    item.text
                );
            }
            html
        }
    }

    impl Renderer for WebRenderer {
        fn draw_sprite(&mut self, sprite: Sprite, rect: Rect) {
            self.batch.draw_sprite(sprite, rect);
        }

        fn draw_text(&mut self, text: &str, size: TextSize, pos: Vec2, centered: bool) {
            self.batch.draw_text(text, size, pos, centered);
        }

        fn present(&mut self) {
            self.batch.present();

            if let Some(ref mut gpu) = self.gpu {
                match gpu.render(self.batch.vertices()) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost) => {
                        gpu.resize(gpu.size.0, gpu.size.1);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }

            let html = self.overlay_markup();
            if html != self.overlay_html {
                if let Some(ref overlay) = self.overlay {
                    overlay.set_inner_html(&html);
                }
                self.overlay_html = html;
            }
        }
    }

    struct App {
        game: Game,
        renderer: WebRenderer,
        audio: WebAudio,
        clock: FrameClock,
        first_frame: bool,
    }

    pub async fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);

        log::info!("TRAF Racer starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .ok_or("no canvas")?
            .dyn_into()?;

        // Set canvas size
        let dpr = window.device_pixel_ratio();
        let width = (canvas.client_width() as f64 * dpr) as u32;
        let height = (canvas.client_height() as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let settings = Settings::load();
        let seed = settings.seed.unwrap_or(js_sys::Date::now() as u64);

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .map_err(|e| JsValue::from_str(&format!("Failed to create surface: {e}")))?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .map_err(|e| JsValue::from_str(&format!("Failed to get adapter: {e}")))?;

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        // Without a device the game still runs; only the overlay text shows
        let gpu = match RenderState::new(surface, &adapter, width, height).await {
            Ok(gpu) => Some(gpu),
            Err(e) => {
                log::error!("Failed to create device: {}", e);
                None
            }
        };

        let renderer = WebRenderer {
            batch: ShapeBatch::new(),
            gpu,
            overlay: document.get_element_by_id("overlay"),
            overlay_html: String::new(),
        };

        let app = Rc::new(RefCell::new(App {
            audio: WebAudio::new(settings.volume()),
            game: Game::new(seed, settings),
            renderer,
            clock: FrameClock::new(TARGET_FPS),
            first_frame: true,
        }));

        if let Some(loading) = document.get_element_by_id("loading") {
            let _ = loading.set_attribute("class", "hidden");
        }

        setup_input_handlers(&window, app.clone())?;
        request_animation_frame(app);

        log::info!("TRAF Racer running!");
        Ok(())
    }

    fn setup_input_handlers(window: &web_sys::Window, app: Rc<RefCell<App>>) -> Result<(), JsValue> {
        // Key down
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut a = app.borrow_mut();
                // Key presses count as the user gesture audio needs
                a.audio.resume();
                if a.game.input.set_key(&event.key(), true) {
                    event.prevent_default();
                }
            });
            window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Key up
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                app.borrow_mut().game.input.set_key(&event.key(), false);
            });
            window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Window blur: keyup events go elsewhere, so drop held keys
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                app.borrow_mut().game.input.release_all();
            });
            window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Page going away
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                app.borrow_mut().game.input.request_close();
            });
            window.add_event_listener_with_callback("pagehide", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            game_loop(app);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(app: Rc<RefCell<App>>) {
        let control = {
            let mut a = app.borrow_mut();
            let App {
                game,
                renderer,
                audio,
                clock,
                first_frame,
            } = &mut *a;

            let frame_ms = clock.tick();
            // Page load time is not a frame
            let frame_ms = if std::mem::take(first_frame) {
                clock.target_frame_ms()
            } else {
                frame_ms
            };
            game.frame(frame_ms, renderer, &*audio)
        };

        match control {
            LoopControl::Continue => request_animation_frame(app),
            LoopControl::Quit => log::info!("TRAF Racer stopped"),
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    if let Err(e) = wasm_game::run().await {
        log::error!("Startup failed: {:?}", e);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use traf_racer::audio::SilentAudio;
    use traf_racer::clock::FrameClock;
    use traf_racer::consts::TARGET_FPS;
    use traf_racer::renderer::FrameRecorder;
    use traf_racer::{Game, Settings};

    env_logger::init();
    log::info!("TRAF Racer (native) starting...");
    log::info!("Native mode has no window - running the autopilot demo headless");

    let mut settings = Settings::load();
    settings.autopilot = true;
    let frames = settings.demo_frames;
    let seed = settings.seed.unwrap_or_else(|| {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or_default()
    });

    let mut game = Game::new(seed, settings);
    let mut clock = FrameClock::new(TARGET_FPS);
    let mut recorder = FrameRecorder::new();

    let ran = game.run(&mut clock, &mut recorder, &SilentAudio, Some(frames), |_| {});

    log::info!(
        "Demo finished: {} frames, run {}, score {}, level {}",
        ran,
        game.state.run,
        game.state.score,
        game.state.ramp.level
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
