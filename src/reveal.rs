use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo::render::{request_animation_frame, AnimationFrame};
use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::dom;
use folio_core::config::CLASS_VISIBLE;
use folio_core::{PageConfig, RevealState};

type EntriesCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// The page's single intersection observer for `[data-reveal]` elements.
/// Only the page bootstrap constructs one; everything else borrows it.
pub(crate) struct RevealObserver {
    observer: IntersectionObserver,
    marker: &'static str,
    frame: RefCell<Option<AnimationFrame>>,
    observed: Cell<usize>,
    _callback: EntriesCallback,
}

impl RevealObserver {
    pub(crate) fn new(config: &PageConfig) -> Result<Self, JsValue> {
        let callback: EntriesCallback = Closure::new(
            move |entries: Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    handle_entry(&entry.target(), entry.is_intersecting(), &observer);
                }
            },
        );
        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(config.reveal_threshold));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
        Ok(Self {
            observer,
            marker: config.selectors.reveal_marker,
            frame: RefCell::new(None),
            observed: Cell::new(0),
            _callback: callback,
        })
    }

    /// Observes every marked element that is not yet revealed. Safe to call
    /// repeatedly: re-observing an element is a no-op for the browser.
    pub(crate) fn attach(&self) -> usize {
        let Some(document) = dom::document() else {
            return 0;
        };
        let mut observed = 0;
        for element in dom::query_all(&document, self.marker) {
            if element.class_list().contains(CLASS_VISIBLE) {
                continue;
            }
            self.observer.observe(&element);
            observed += 1;
        }
        self.observed.set(observed);
        observed
    }

    /// Runs [`attach`](Self::attach) on the next animation frame. A request
    /// already in flight absorbs later ones.
    pub(crate) fn attach_next_frame(self: &Rc<Self>) {
        if self.frame.borrow().is_some() {
            return;
        }
        let reveal = Rc::clone(self);
        let handle = request_animation_frame(move |_| {
            reveal.frame.borrow_mut().take();
            reveal.attach();
        });
        *self.frame.borrow_mut() = Some(handle);
    }

    #[cfg(test)]
    pub(crate) fn has_pending_frame(&self) -> bool {
        self.frame.borrow().is_some()
    }

    /// Elements handed to the observer by the latest attach.
    #[cfg(test)]
    pub(crate) fn observed(&self) -> usize {
        self.observed.get()
    }
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

fn handle_entry(target: &Element, is_intersecting: bool, observer: &IntersectionObserver) {
    let before = RevealState::from_visible_class(target.class_list().contains(CLASS_VISIBLE));
    if !before.observe(is_intersecting).is_revealed() {
        return;
    }
    dom::report(
        "reveal: class update failed",
        target.class_list().add_1(CLASS_VISIBLE),
    );
    observer.unobserve(target);
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use crate::dom::fixture;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn intersecting_entry_reveals_for_good() {
        let root = fixture::mount(r#"<div id="reveal-a" data-reveal></div>"#);
        let target = root
            .query_selector("#reveal-a")
            .expect("query")
            .expect("target present");
        let reveal = RevealObserver::new(&PageConfig::default()).expect("observer");

        handle_entry(&target, false, &reveal.observer);
        assert!(!target.class_list().contains(CLASS_VISIBLE));

        handle_entry(&target, true, &reveal.observer);
        assert!(target.class_list().contains(CLASS_VISIBLE));

        handle_entry(&target, false, &reveal.observer);
        assert!(target.class_list().contains(CLASS_VISIBLE));
        root.remove();
    }

    #[wasm_bindgen_test]
    fn reattach_picks_up_new_elements_on_same_observer() {
        let root = fixture::mount(r#"<div data-reveal></div><div data-reveal class="visible"></div>"#);
        let reveal = RevealObserver::new(&PageConfig::default()).expect("observer");
        assert_eq!(reveal.attach(), 1);

        let late = dom::document()
            .expect("document available")
            .create_element("div")
            .expect("create element");
        late.set_attribute("data-reveal", "").expect("mark element");
        root.append_child(&late).expect("append element");

        assert_eq!(reveal.attach(), 2);
        root.remove();
    }
}
