use std::rc::Rc;

use gloo::events::{EventListener, EventListenerOptions};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, ScrollBehavior, ScrollToOptions};

use crate::dom;
use folio_core::config::CLASS_ACTIVE;
use folio_core::{current_section, parse_anchor, scroll_target, PageConfig, SectionOffset};

/// Tracked nav links and the sections they point at, in document order.
pub(crate) struct ScrollSpy {
    links: Vec<Element>,
    sections: Vec<HtmlElement>,
    lookahead: f64,
}

impl ScrollSpy {
    fn new(links: Vec<Element>, lookahead: f64) -> Self {
        let sections = links.iter().filter_map(anchor_target).collect();
        Self {
            links,
            sections,
            lookahead,
        }
    }

    /// Highlights the link of the last section whose top has been passed and
    /// clears every other link.
    pub(crate) fn refresh(&self) {
        let scroll_y = web_sys::window()
            .and_then(|window| window.scroll_y().ok())
            .unwrap_or(0.0);
        let offsets: Vec<SectionOffset> = self
            .sections
            .iter()
            .map(|section| SectionOffset::new(section.id(), f64::from(section.offset_top())))
            .collect();
        let current = current_section(&offsets, scroll_y, self.lookahead)
            .map(|index| format!("#{}", offsets[index].id));

        for link in &self.links {
            dom::report(
                "scroll-spy: clear failed",
                link.class_list().remove_1(CLASS_ACTIVE),
            );
        }
        let Some(href) = current else {
            return;
        };
        if let Some(active) = self
            .links
            .iter()
            .find(|link| link.get_attribute("href").as_deref() == Some(href.as_str()))
        {
            dom::report(
                "scroll-spy: highlight failed",
                active.class_list().add_1(CLASS_ACTIVE),
            );
        }
    }
}

pub(crate) fn setup_scroll_behavior(document: &Document, config: &PageConfig) -> Vec<EventListener> {
    let links = dom::query_all(document, config.selectors.tracked_links);
    let mut listeners = Vec::with_capacity(links.len() + 1);

    for link in &links {
        let anchor = link.clone();
        let header_offset = config.header_offset;
        listeners.push(EventListener::new_with_options(
            link,
            "click",
            EventListenerOptions::enable_prevent_default(),
            move |event| {
                let Some(target) = anchor_target(&anchor) else {
                    return;
                };
                event.prevent_default();
                smooth_scroll_to(&target, header_offset);
            },
        ));
    }

    let spy = Rc::new(ScrollSpy::new(links, config.spy_lookahead));
    spy.refresh();
    // gloo registers listeners as passive unless told otherwise.
    listeners.push(EventListener::new(document, "scroll", move |_| spy.refresh()));
    listeners
}

fn anchor_target(link: &Element) -> Option<HtmlElement> {
    let href = link.get_attribute("href")?;
    let id = parse_anchor(&href)?;
    link.owner_document()?
        .get_element_by_id(id)?
        .dyn_into::<HtmlElement>()
        .ok()
}

fn smooth_scroll_to(target: &HtmlElement, header_offset: f64) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let options = ScrollToOptions::new();
    options.set_top(scroll_target(f64::from(target.offset_top()), header_offset));
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}
