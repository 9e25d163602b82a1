//! Rendering: draws the particle field to a 2D context.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! It receives a read-only [`FieldCore`] and produces pixels; it does not
//! mutate any state.

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::consts::{PARTICLE_COLOR, PARTICLE_OPACITY};
use crate::engine::FieldCore;

/// Smallest edge drawn, in CSS pixels, so distant particles stay visible.
const MIN_POINT_PX: f64 = 1.0;

/// Draw the full scene: clear to transparent, then every visible particle.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails (e.g. invalid context state).
pub fn draw(ctx: &CanvasRenderingContext2d, core: &FieldCore) -> Result<(), JsValue> {
    let dpr = core.dpr;
    ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0)?;
    ctx.clear_rect(0.0, 0.0, core.viewport_width, core.viewport_height);

    ctx.set_global_alpha(PARTICLE_OPACITY);
    ctx.set_fill_style_str(PARTICLE_COLOR);
    for sp in core.visible_points() {
        let size = sp.size.max(MIN_POINT_PX);
        ctx.fill_rect(sp.x - size / 2.0, sp.y - size / 2.0, size, size);
    }
    ctx.set_global_alpha(1.0);

    Ok(())
}
