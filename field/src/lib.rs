//! Particle field background for the climate chat page.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns a
//! fixed set of 500 points falling through a wrapping column, a perspective
//! camera, and the frame loop that moves and redraws them. It is purely
//! decorative and shares no state with the chat widget.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Browser-bound [`engine::Field`] and testable [`engine::FieldCore`] |
//! | [`particles`] | The particle set and its per-frame fall |
//! | [`camera`] | Perspective camera and world → screen projection |
//! | [`render`] | Draws the field to a 2D canvas context |
//! | [`consts`] | Shared numeric constants (counts, bounds, camera, material) |

pub mod camera;
pub mod consts;
pub mod engine;
pub mod particles;
pub mod render;

use wasm_bindgen::prelude::*;

/// Start the background animation on the canvas with id `canvas_id`.
///
/// # Errors
///
/// Returns `Err` if the canvas element is missing or unusable.
#[wasm_bindgen(js_name = startField)]
pub fn start_field(canvas_id: &str) -> Result<(), JsValue> {
    engine::start(canvas_id)
}
