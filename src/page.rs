use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use web_sys::Document;

use crate::reveal::RevealObserver;
use crate::{about, contact, dom, gallery, nav, page_config, scroll, tilt, year};
use folio_core::PageConfig;

thread_local! {
    static PAGE: RefCell<Option<Rc<Page>>> = RefCell::new(None);
    static ABOUT_TOGGLE: RefCell<Option<EventListener>> = RefCell::new(None);
}

/// Everything the page keeps alive after bootstrap. Dropping it would detach
/// every handler, so it is parked in `PAGE` for the page lifetime.
pub(crate) struct Page {
    #[cfg_attr(not(test), allow(dead_code))]
    reveal: Option<Rc<RevealObserver>>,
    gallery_cards: usize,
    _listeners: Vec<EventListener>,
}

impl Page {
    fn build(document: &Document, config: PageConfig) -> Self {
        year::stamp_year(document, &config);
        if document
            .get_element_by_id(config.selectors.load_more_id)
            .is_some()
        {
            gloo::console::log!("page: load-more control present, left unwired");
        }

        let mut listeners = nav::setup_nav_toggle(document, &config);
        listeners.extend(scroll::setup_scroll_behavior(document, &config));

        let reveal = match RevealObserver::new(&config) {
            Ok(observer) => Some(Rc::new(observer)),
            Err(err) => {
                gloo::console::warn!("page: reveal observer unavailable", err);
                None
            }
        };

        let gallery_cards = match gallery::load_gallery(document, &config, reveal.as_ref()) {
            Ok(count) => count,
            Err(err) => {
                gloo::console::warn!("page: gallery failed", err);
                0
            }
        };

        // After the gallery so generated cards pick up the effect.
        listeners.extend(tilt::attach_tilt_effects(document, &config));
        if let Some(reveal) = &reveal {
            let observed = reveal.attach();
            gloo::console::log!("page: reveal observing", observed);
        }
        listeners.extend(contact::setup_contact_form(document, &config));

        Self {
            reveal,
            gallery_cards,
            _listeners: listeners,
        }
    }

    pub(crate) fn gallery_cards(&self) -> usize {
        self.gallery_cards
    }

    #[cfg(test)]
    fn refresh_reveal(&self) -> usize {
        self.reveal.as_ref().map(|reveal| reveal.attach()).unwrap_or(0)
    }
}

/// Registers the delegated about toggle right away, then bootstraps the rest
/// once the document has been parsed.
pub(crate) fn start() {
    let Some(document) = dom::document() else {
        return;
    };
    let config = page_config::load_page_config();
    install_about_toggle(&document, &config);

    if document.ready_state() == "loading" {
        EventListener::once(&document, "DOMContentLoaded", move |_| {
            boot(config);
        })
        .forget();
    } else {
        boot(config);
    }
}

fn install_about_toggle(document: &Document, config: &PageConfig) {
    ABOUT_TOGGLE.with(|slot| {
        let mut slot = slot.borrow_mut();
        if slot.is_none() {
            *slot = Some(about::register_about_toggle(document, config));
        }
    });
}

/// Builds the page once; later calls return the existing page untouched.
pub(crate) fn boot(config: PageConfig) -> Option<Rc<Page>> {
    if let Some(page) = PAGE.with(|slot| slot.borrow().clone()) {
        return Some(page);
    }
    let document = dom::document()?;
    gloo::console::log!("page: boot");
    let page = Rc::new(Page::build(&document, config));
    gloo::console::log!("page: ready, gallery cards", page.gallery_cards());
    PAGE.with(|slot| {
        *slot.borrow_mut() = Some(page.clone());
    });
    Some(page)
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use crate::dom::fixture;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn boot_runs_once_and_shares_one_observer() {
        let root = fixture::mount(
            r#"<div id="portfolioGrid"></div><span id="year"></span><div data-reveal class="visible"></div>"#,
        );
        let mut config = PageConfig::default();
        config.batch_size = 3;

        let first = boot(config.clone()).expect("page boots");
        assert_eq!(first.gallery_cards(), 3);

        let second = boot(PageConfig::default()).expect("page still there");
        assert!(Rc::ptr_eq(&first, &second));
        let document = dom::document().expect("document available");
        assert_eq!(dom::query_all(&document, "#portfolioGrid article").len(), 3);

        // Already-visible elements are skipped; the three cards are not.
        let observed = second.refresh_reveal();
        let pending = dom::query_all(&document, "[data-reveal]:not(.visible)").len();
        assert_eq!(observed, pending);
        root.remove();
    }
}
