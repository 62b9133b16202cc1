use gloo::events::{EventListener, EventListenerOptions};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, FormData, HtmlElement, HtmlFormElement};

use crate::dom;
use folio_core::contact::{FIELD_EMAIL, FIELD_MESSAGE, FIELD_NAME};
use folio_core::{ContactDraft, FormStatus, PageConfig};

/// Simulated submission: validates locally, never sends anything.
pub(crate) fn setup_contact_form(document: &Document, config: &PageConfig) -> Option<EventListener> {
    let form = document
        .get_element_by_id(config.selectors.contact_form_id)?
        .dyn_into::<HtmlFormElement>()
        .ok()?;
    let status = document
        .get_element_by_id(config.selectors.form_status_id)?
        .dyn_into::<HtmlElement>()
        .ok()?;

    let target = form.clone();
    Some(EventListener::new_with_options(
        &form,
        "submit",
        EventListenerOptions::enable_prevent_default(),
        move |event| {
            event.prevent_default();
            dom::report("contact: submit failed", handle_submit(&target, &status));
        },
    ))
}

fn handle_submit(form: &HtmlFormElement, status: &HtmlElement) -> Result<(), JsValue> {
    let data = FormData::new_with_form(form)?;
    let field = |name: &str| data.get(name).as_string();
    let draft = ContactDraft::from_fields(
        field(FIELD_NAME).as_deref(),
        field(FIELD_EMAIL).as_deref(),
        field(FIELD_MESSAGE).as_deref(),
    );
    let outcome = FormStatus::for_submission(draft);
    status.set_text_content(Some(&outcome.text));
    status.style().set_property("color", outcome.tone.css_color())?;
    if outcome.reset_form {
        form.reset();
    }
    Ok(())
}
