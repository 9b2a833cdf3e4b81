//! Browser host: a canvas renderer driven by `requestAnimationFrame`.

use crate::app::Simulation;
use crate::ui::web_renderer::CanvasRenderer;
use particles_core::config::AppConfig;
use particles_core::Scheduler;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

fn js_error(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn warn(message: &str) {
    web_sys::console::warn_1(&JsValue::from_str(message));
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Asks the browser for the next animation frame.
struct AnimationFrameScheduler {
    callback: FrameCallback,
}

impl Scheduler for AnimationFrameScheduler {
    fn request_next_frame(&mut self) {
        let Some(window) = web_sys::window() else {
            warn("no window available, animation stopped");
            return;
        };
        if let Some(callback) = self.callback.borrow().as_ref() {
            if let Err(e) = window.request_animation_frame(callback.as_ref().unchecked_ref()) {
                warn(&format!("requestAnimationFrame failed: {e:?}"));
            }
        }
    }
}

#[wasm_bindgen]
pub struct ParticlesApp {
    simulation: Simulation,
    canvas: HtmlCanvasElement,
    running: bool,
}

#[wasm_bindgen]
impl ParticlesApp {
    /// Binds to the canvas with the given element id. The world takes the
    /// canvas's on-page size.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str) -> Result<ParticlesApp, JsValue> {
        console_error_panic_hook::set_once();

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| js_error("no document available"))?;
        let canvas = document
            .get_element_by_id(canvas_id)
            .ok_or_else(|| js_error(format!("no element with id '{canvas_id}'")))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| js_error(format!("element '{canvas_id}' is not a canvas")))?;

        let mut config = AppConfig::default();
        let rect = canvas.get_bounding_client_rect();
        if rect.width() >= 1.0 && rect.height() >= 1.0 {
            config.world.width = rect.width().floor();
            config.world.height = rect.height().floor();
        }
        canvas.set_width(config.world.width as u32);
        canvas.set_height(config.world.height as u32);

        let simulation = Simulation::new(config).map_err(js_error)?;
        Ok(ParticlesApp {
            simulation,
            canvas,
            running: false,
        })
    }

    /// Initializes from `settings` (or the default payload) and starts the
    /// animation loop. Calling it again while running only re-imports.
    pub fn start(&mut self, settings: Option<String>) -> Result<(), JsValue> {
        self.simulation
            .initialize_with_settings(settings.as_deref())
            .map_err(js_error)?;
        if self.running {
            return Ok(());
        }

        let ctx = self
            .canvas
            .get_context("2d")?
            .ok_or_else(|| js_error("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        let mut renderer = CanvasRenderer::new(
            ctx,
            self.canvas.width() as f64,
            self.canvas.height() as f64,
        );

        let callback: FrameCallback = Rc::new(RefCell::new(None));
        let mut scheduler = AnimationFrameScheduler {
            callback: callback.clone(),
        };
        let simulation = self.simulation.clone();
        let slot = callback.clone();
        *callback.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            if simulation.is_stopped() {
                // Drop the closure so the loop and everything it holds go away.
                slot.borrow_mut().take();
                return;
            }
            if let Err(e) = simulation.frame(&mut renderer) {
                warn(&format!("frame failed: {e}"));
            }
            scheduler.request_next_frame();
        }) as Box<dyn FnMut()>));

        AnimationFrameScheduler { callback }.request_next_frame();
        self.running = true;
        Ok(())
    }

    /// Replaces the running settings. Malformed input leaves the simulation
    /// untouched and returns an error.
    #[wasm_bindgen(js_name = setSettings)]
    pub fn set_settings(&self, settings: Option<String>) -> Result<(), JsValue> {
        self.simulation
            .replace_settings(settings.as_deref())
            .map_err(|e| {
                warn(&format!("settings rejected: {e}"));
                js_error(e)
            })
    }

    #[wasm_bindgen(js_name = getSettings)]
    pub fn get_settings(&self) -> Result<String, JsValue> {
        self.simulation.read_current_settings_json().map_err(js_error)
    }

    /// Stops the animation loop after the frame in progress. Stopping is
    /// final for this app.
    pub fn stop(&mut self) {
        self.simulation.stop();
        self.running = false;
    }

    pub fn tick(&self) -> f64 {
        self.simulation.with_world(|world| world.tick) as f64
    }
}
