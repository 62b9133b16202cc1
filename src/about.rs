use gloo::events::EventListener;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element};

use crate::dom;
use folio_core::config::{Selectors, CLASS_CLAMP, CLASS_EXPANDED};
use folio_core::{AboutCard, PageConfig};

/// Delegated on the whole document, so cards added later work too.
pub(crate) fn register_about_toggle(document: &Document, config: &PageConfig) -> EventListener {
    let selectors = config.selectors.clone();
    EventListener::new(document, "click", move |event| {
        let Some(origin) = event
            .target()
            .and_then(|target| target.dyn_into::<Element>().ok())
        else {
            return;
        };
        dom::report("about: toggle failed", toggle_card(&origin, &selectors));
    })
}

fn toggle_card(origin: &Element, selectors: &Selectors) -> Result<(), JsValue> {
    let Some(trigger) = origin.closest(selectors.about_toggle)? else {
        return Ok(());
    };
    let Some(card) = trigger.closest(selectors.about_card)? else {
        return Ok(());
    };
    let state = AboutCard::from_expanded_class(card.class_list().contains(CLASS_EXPANDED)).toggled();
    card.class_list()
        .toggle_with_force(CLASS_EXPANDED, state.is_expanded())?;
    if let Some(text) = card.query_selector(selectors.about_text)? {
        text.class_list()
            .toggle_with_force(CLASS_CLAMP, state.text_clamped())?;
        trigger.set_text_content(Some(state.trigger_label()));
    }
    Ok(())
}
