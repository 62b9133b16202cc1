use gloo::events::EventListener;
use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use crate::dom;
use folio_core::config::CLASS_OPEN;
use folio_core::{NavPanel, PageConfig};

pub(crate) fn setup_nav_toggle(document: &Document, config: &PageConfig) -> Vec<EventListener> {
    let selectors = &config.selectors;
    let (Some(toggle), Some(links)) = (
        dom::query(document, selectors.nav_toggle),
        dom::query(document, selectors.nav_links),
    ) else {
        return Vec::new();
    };

    let mut listeners = Vec::new();
    {
        let toggle_el = toggle.clone();
        let links_el = links.clone();
        listeners.push(EventListener::new(&toggle, "click", move |_| {
            let next = NavPanel::from_open_class(links_el.class_list().contains(CLASS_OPEN)).toggled();
            dom::report("nav: toggle failed", apply(&toggle_el, &links_el, next));
        }));
    }
    // Tapping a link on mobile both navigates and dismisses the panel.
    for anchor in dom::query_all_in(&links, selectors.nav_link_anchors) {
        let toggle_el = toggle.clone();
        let links_el = links.clone();
        listeners.push(EventListener::new(&anchor, "click", move |_| {
            dom::report("nav: close failed", apply(&toggle_el, &links_el, NavPanel::closed()));
        }));
    }
    listeners
}

fn apply(toggle: &Element, links: &Element, panel: NavPanel) -> Result<(), JsValue> {
    links
        .class_list()
        .toggle_with_force(CLASS_OPEN, panel.is_open())?;
    toggle.set_attribute("aria-expanded", panel.aria_expanded())
}
