//! Browser wiring: form submit → controller → transcript view.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, Event, HtmlInputElement};

use crate::api::RelayBackend;
use crate::controller::ChatController;
use crate::view::TranscriptView;

type Controller = ChatController<RelayBackend>;

fn element(document: &Document, id: &str) -> Result<Element, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("missing chat element #{id}")))
}

fn repaint(view: &RefCell<TranscriptView>, controller: &Controller) {
    let transcript = controller.transcript();
    let transcript = transcript.borrow();
    if let Err(e) = view.borrow_mut().sync(&transcript) {
        log::error!("chat render failed: {e:?}");
    }
}

/// Attach the chat widget to the form, input and transcript container.
///
/// # Errors
///
/// Fails fast if any element is missing or the input is not an `<input>`.
pub fn mount(form_id: &str, input_id: &str, container_id: &str) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        log::debug!("console logger already installed");
    }

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let form = element(&document, form_id)?;
    let input = element(&document, input_id)?
        .dyn_into::<HtmlInputElement>()
        .map_err(|_| JsValue::from_str(&format!("#{input_id} is not an input")))?;
    let container = element(&document, container_id)?;

    let controller = Rc::new(ChatController::new(RelayBackend::default()));
    let view = Rc::new(RefCell::new(TranscriptView::new(document, container)));

    let on_submit = Closure::<dyn FnMut(Event)>::new(move |ev: Event| {
        ev.prevent_default();
        let Some(submission) = controller.begin(&input.value()) else {
            return;
        };
        input.set_value("");
        repaint(&view, &controller);

        let controller = Rc::clone(&controller);
        let view = Rc::clone(&view);
        wasm_bindgen_futures::spawn_local(async move {
            controller.complete(submission).await;
            repaint(&view, &controller);
        });
    });
    form.add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref())?;
    on_submit.forget();

    log::info!("chat widget mounted on #{form_id}");
    Ok(())
}
