use std::cell::RefCell;
use std::rc::Rc;

use rand::Rng;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

use crate::camera::{PerspectiveCamera, ScreenPoint};
use crate::consts::{PARTICLE_COUNT, PARTICLE_SIZE};
use crate::particles::ParticleField;
use crate::render;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Core field state: everything that doesn't depend on the canvas element.
///
/// Separated from `Field` so it can be tested without WASM/browser dependencies.
pub struct FieldCore {
    pub particles: ParticleField,
    pub camera: PerspectiveCamera,
    pub viewport_width: f64,
    pub viewport_height: f64,
    pub dpr: f64,
}

impl FieldCore {
    /// Scatter [`PARTICLE_COUNT`] particles and size the camera for the viewport.
    pub fn new(rng: &mut impl Rng, width: f64, height: f64, dpr: f64) -> Self {
        let mut core = Self {
            particles: ParticleField::scatter(PARTICLE_COUNT, rng),
            camera: PerspectiveCamera::default(),
            viewport_width: 0.0,
            viewport_height: 0.0,
            dpr: 1.0,
        };
        core.resize(width, height, dpr);
        core
    }

    /// Advance the animation by one frame.
    pub fn tick(&mut self) {
        self.particles.step();
    }

    /// Apply new viewport dimensions (CSS pixels) and device pixel ratio.
    pub fn resize(&mut self, width: f64, height: f64, dpr: f64) {
        self.viewport_width = width.max(0.0);
        self.viewport_height = height.max(0.0);
        self.dpr = if dpr > 0.0 { dpr } else { 1.0 };
        self.camera.set_aspect(self.viewport_width, self.viewport_height);
        self.camera.update_projection_matrix();
    }

    /// Backing-store size of the drawing surface in device pixels.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn surface_size(&self) -> (u32, u32) {
        (
            (self.viewport_width * self.dpr).round() as u32,
            (self.viewport_height * self.dpr).round() as u32,
        )
    }

    /// Every particle in front of the camera, projected to CSS pixels.
    pub fn visible_points(&self) -> impl Iterator<Item = ScreenPoint> + '_ {
        self.particles
            .iter()
            .filter_map(|p| self.camera.to_screen(p, self.viewport_width, self.viewport_height, PARTICLE_SIZE))
    }
}

/// The full field. Wraps `FieldCore` and owns the browser canvas element.
pub struct Field {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    pub core: FieldCore,
}

impl Field {
    /// Bind a field to a canvas element.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the canvas has no 2D context.
    pub fn new(canvas: HtmlCanvasElement, core: FieldCore) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        let mut field = Self { canvas, ctx, core };
        field.apply_surface_size()?;
        Ok(field)
    }

    /// Resize the camera and the drawing surface.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the canvas style cannot be updated.
    pub fn resize(&mut self, width: f64, height: f64, dpr: f64) -> Result<(), JsValue> {
        self.core.resize(width, height, dpr);
        self.apply_surface_size()
    }

    fn apply_surface_size(&mut self) -> Result<(), JsValue> {
        let (w, h) = self.core.surface_size();
        self.canvas.set_width(w);
        self.canvas.set_height(h);
        let style = self.canvas.style();
        style.set_property("width", &format!("{}px", self.core.viewport_width))?;
        style.set_property("height", &format!("{}px", self.core.viewport_height))?;
        Ok(())
    }

    /// Advance one frame and redraw.
    ///
    /// # Errors
    ///
    /// Returns `Err` if drawing fails.
    pub fn frame(&mut self) -> Result<(), JsValue> {
        self.core.tick();
        render::draw(&self.ctx, &self.core)
    }
}

// =============================================================
// Browser wiring
// =============================================================

fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))
}

fn viewport(window: &Window) -> Result<(f64, f64, f64), JsValue> {
    let width = window.inner_width()?.as_f64().unwrap_or(0.0);
    let height = window.inner_height()?.as_f64().unwrap_or(0.0);
    Ok((width, height, window.device_pixel_ratio()))
}

/// Seed from `Math.random` so each page load gets a different field.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn browser_seed() -> u64 {
    (js_sys::Math::random() * 2f64.powi(53)) as u64
}

/// Bind the field to `#canvas_id` and start the frame loop and resize handling.
///
/// The loop runs for the lifetime of the page and cannot be stopped.
///
/// # Errors
///
/// Fails fast if the element is missing, is not a canvas, or has no 2D context.
pub fn start(canvas_id: &str) -> Result<(), JsValue> {
    use rand::SeedableRng;

    let window = window()?;
    let document = window.document().ok_or_else(|| JsValue::from_str("no document"))?;
    let canvas = document
        .get_element_by_id(canvas_id)
        .ok_or_else(|| JsValue::from_str(&format!("missing canvas element #{canvas_id}")))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| JsValue::from_str(&format!("#{canvas_id} is not a canvas")))?;

    let (width, height, dpr) = viewport(&window)?;
    let mut rng = rand::rngs::SmallRng::seed_from_u64(browser_seed());
    let core = FieldCore::new(&mut rng, width, height, dpr);
    let field = Rc::new(RefCell::new(Field::new(canvas, core)?));

    // Resize: recompute aspect + projection, resize the surface.
    {
        let field = field.clone();
        let win = window.clone();
        let on_resize = Closure::<dyn FnMut()>::new(move || {
            if let Ok((w, h, dpr)) = viewport(&win) {
                if let Err(e) = field.borrow_mut().resize(w, h, dpr) {
                    web_sys::console::error_1(&e);
                }
            }
        });
        window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())?;
        on_resize.forget();
    }

    // Frame loop: the closure re-registers itself every frame.
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let first = tick.clone();
    let win = window.clone();
    *first.borrow_mut() = Some(Closure::<dyn FnMut()>::new(move || {
        if let Err(e) = field.borrow_mut().frame() {
            web_sys::console::error_1(&e);
        }
        if let Some(cb) = tick.borrow().as_ref() {
            if let Err(e) = win.request_animation_frame(cb.as_ref().unchecked_ref()) {
                web_sys::console::error_1(&e);
            }
        }
    }));

    if let Some(cb) = first.borrow().as_ref() {
        window.request_animation_frame(cb.as_ref().unchecked_ref())?;
    }
    Ok(())
}
