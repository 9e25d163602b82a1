//! Climate chat widget.
//!
//! Compiled to WebAssembly with the `hydrate` feature, this crate mounts onto
//! an existing form, text input and transcript container. Each non-blank
//! question is echoed, shown as a pending "Thinking..." bubble, and sent once
//! to the relay at `/api/chat`; the pending bubble is then replaced in place by
//! the answer or by a styled apology. The API key never reaches the browser.
//!
//! Without `hydrate` the crate is the browser-free core: transcript model,
//! relay reply parsing, submission state machine and bubble styling.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`transcript`] | Ordered entries, pending/resolved/failed states |
//! | [`api`] | Relay contract, [`api::ChatBackend`] seam, reply parsing |
//! | [`controller`] | One submission: validate, echo, request, settle |
//! | [`view`] | Bubble styling and the DOM transcript view |

pub mod api;
pub mod controller;
pub mod transcript;
pub mod view;

#[cfg(feature = "hydrate")]
mod mount;

#[cfg(feature = "hydrate")]
use wasm_bindgen::prelude::*;

/// Mount the chat widget on the elements with the given ids.
///
/// # Errors
///
/// Returns `Err` if any element is missing or the input is not an `<input>`.
#[cfg(feature = "hydrate")]
#[wasm_bindgen(js_name = mountChat)]
pub fn mount_chat(form_id: &str, input_id: &str, container_id: &str) -> Result<(), JsValue> {
    mount::mount(form_id, input_id, container_id)
}
