//! Ripple Drift entry point
//!
//! On the web: binds the frame driver to a canvas, pointer and resize events
//! and the requestAnimationFrame loop. Natively: runs a headless session and
//! logs what the field is doing.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, PointerEvent, Window};

    use ripple_drift::renderer::CanvasRenderer;
    use ripple_drift::{FrameDriver, Settings};

    const CANVAS_ID: &str = "ripple-canvas";
    const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

    /// Background instance holding all state
    struct App {
        driver: FrameDriver,
        renderer: CanvasRenderer,
        canvas: HtmlCanvasElement,
    }

    impl App {
        /// Match the backing store to the CSS size; returns the CSS size
        fn fit_canvas(window: &Window, canvas: &HtmlCanvasElement) -> (f32, f32, f64) {
            let dpr = window.device_pixel_ratio().max(1.0);
            let w = canvas.client_width().max(1);
            let h = canvas.client_height().max(1);
            canvas.set_width((w as f64 * dpr) as u32);
            canvas.set_height((h as f64 * dpr) as u32);
            (w as f32, h as f32, dpr)
        }

        fn on_resize(&mut self, window: &Window) {
            let (w, h, dpr) = Self::fit_canvas(window, &self.canvas);
            self.renderer.set_scale(dpr);
            self.driver.resize(w, h);
        }
    }

    /// Resolve settings: canvas `data-config` JSON, then the motion preference
    fn load_settings(window: &Window, canvas: &HtmlCanvasElement) -> Settings {
        let mut settings = match canvas.get_attribute("data-config") {
            Some(json) => Settings::from_json(&json).unwrap_or_else(|e| {
                log::warn!("Ignoring bad data-config: {}", e);
                Settings::default()
            }),
            None => Settings::default(),
        };

        if let Ok(Some(query)) = window.match_media(REDUCED_MOTION_QUERY) {
            settings.reduced_motion |= query.matches();
        }
        settings
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::warn_1(&format!("Logger init failed: {e}").into());
        }

        log::info!("Ripple Drift starting...");

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id(CANVAS_ID)
            .ok_or_else(|| JsValue::from_str("no canvas"))?
            .dyn_into()?;

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into()?;

        let settings = load_settings(&window, &canvas);
        let (w, h, dpr) = App::fit_canvas(&window, &canvas);
        let seed = js_sys::Date::now() as u64;

        let app = Rc::new(RefCell::new(App {
            driver: FrameDriver::new(settings, w, h, seed),
            renderer: CanvasRenderer::new(ctx, dpr),
            canvas,
        }));

        setup_input_handlers(&window, app.clone())?;

        request_animation_frame(app);

        log::info!("Ripple Drift running!");
        Ok(())
    }

    fn setup_input_handlers(window: &Window, app: Rc<RefCell<App>>) -> Result<(), JsValue> {
        // Pointer down anywhere in the viewport
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: PointerEvent| {
                app.borrow_mut()
                    .driver
                    .pointer_down(event.client_x() as f32, event.client_y() as f32);
            });
            window.add_event_listener_with_callback(
                "pointerdown",
                closure.as_ref().unchecked_ref(),
            )?;
            closure.forget();
        }

        // Viewport resize
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                if let Some(window) = web_sys::window() {
                    app.borrow_mut().on_resize(&window);
                }
            });
            window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            log::error!("No window; animation stopped");
            return;
        };
        let closure = Closure::once(move |time: f64| {
            frame_loop(app, time);
        });
        if let Err(e) = window.request_animation_frame(closure.as_ref().unchecked_ref()) {
            log::error!("requestAnimationFrame failed: {:?}", e);
        }
        closure.forget();
    }

    fn frame_loop(app: Rc<RefCell<App>>, time: f64) {
        {
            let mut guard = app.borrow_mut();
            let App {
                driver, renderer, ..
            } = &mut *guard;
            driver.frame(time, renderer);
        }

        request_animation_frame(app);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    if let Err(e) = wasm_app::run() {
        log::error!("Ripple Drift failed to start: {:?}", e);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Ripple Drift (native) starting...");
    log::info!("Native mode runs headless - serve the wasm build for the visual version");

    let settings = native::load_settings(std::env::args().nth(1));
    native::run_headless(settings);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::time::{SystemTime, UNIX_EPOCH};

    use ripple_drift::renderer::InstanceBatch;
    use ripple_drift::{FrameDriver, Settings};

    const WIDTH: f32 = 1280.0;
    const HEIGHT: f32 = 720.0;
    const FRAMES: u32 = 900;
    const FRAME_MS: f64 = 1000.0 / 60.0;

    /// Settings from an optional JSON file, defaults on any failure
    pub fn load_settings(path: Option<String>) -> Settings {
        let Some(path) = path else {
            return Settings::default();
        };
        match std::fs::read_to_string(&path) {
            Ok(json) => match Settings::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path);
                    settings
                }
                Err(e) => {
                    log::error!("Bad settings in {}: {}", path, e);
                    Settings::default()
                }
            },
            Err(e) => {
                log::error!("Cannot read {}: {}", path, e);
                Settings::default()
            }
        }
    }

    /// Drive a session on a fixed 60 Hz clock with a few scripted inputs
    pub fn run_headless(settings: Settings) {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);
        let mut driver = FrameDriver::new(settings, WIDTH, HEIGHT, seed);
        let mut batch = InstanceBatch::new();

        let mut now = 0.0;
        for frame in 0..FRAMES {
            match frame {
                60 => driver.pointer_down(WIDTH / 2.0, HEIGHT / 2.0),
                240 => driver.pointer_down(WIDTH * 0.2, HEIGHT * 0.3),
                480 => driver.resize(960.0, 540.0),
                _ => {}
            }

            driver.frame(now, &mut batch);
            now += FRAME_MS;

            if frame % 120 == 0 {
                let state = driver.state();
                let mean_speed = if state.particles.is_empty() {
                    0.0
                } else {
                    state.particles.iter().map(|p| p.speed()).sum::<f32>()
                        / state.particles.len() as f32
                };
                log::info!(
                    "frame {:>4}: {} particles, mean speed {:.1} px/s, {} ripples, {} instance bytes",
                    frame,
                    state.particles.len(),
                    mean_speed,
                    state.ripples.len(),
                    batch.particle_bytes().len() + batch.ripple_bytes().len()
                );
            }
        }

        println!(
            "Simulated {} frames ({} rendered) at {}x{}",
            driver.frames(),
            batch.frames,
            driver.state().bounds.width,
            driver.state().bounds.height
        );
    }
}
