use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, NodeList};

pub(crate) fn document() -> Option<Document> {
    web_sys::window()?.document()
}

pub(crate) fn query(document: &Document, selector: &str) -> Option<Element> {
    match document.query_selector(selector) {
        Ok(found) => found,
        Err(err) => {
            gloo::console::warn!("selector rejected", selector, err);
            None
        }
    }
}

pub(crate) fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    match document.query_selector_all(selector) {
        Ok(list) => elements(&list),
        Err(err) => {
            gloo::console::warn!("selector rejected", selector, err);
            Vec::new()
        }
    }
}

pub(crate) fn query_all_in(root: &Element, selector: &str) -> Vec<Element> {
    match root.query_selector_all(selector) {
        Ok(list) => elements(&list),
        Err(err) => {
            gloo::console::warn!("selector rejected", selector, err);
            Vec::new()
        }
    }
}

fn elements(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|index| list.get(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Inline style write; non-HTML elements (e.g. SVG) are skipped.
pub(crate) fn set_style(element: &Element, property: &str, value: &str) -> Result<(), JsValue> {
    let Some(html) = element.dyn_ref::<HtmlElement>() else {
        return Ok(());
    };
    html.style().set_property(property, value)
}

/// Swallows a DOM failure after logging it, so one broken node does not stop
/// the remaining handlers.
pub(crate) fn report(context: &str, result: Result<(), JsValue>) {
    if let Err(err) = result {
        gloo::console::warn!(context, err);
    }
}
