use gloo::events::EventListener;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, MouseEvent};

use crate::dom;
use folio_core::tilt::rest_transform;
use folio_core::{Bounds, PageConfig, Tilt};

pub(crate) fn attach_tilt_effects(document: &Document, config: &PageConfig) -> Vec<EventListener> {
    let mut listeners = Vec::new();
    for element in dom::query_all(document, config.selectors.tilt_marker) {
        if let Err(err) = prepare(&element, config) {
            gloo::console::warn!("tilt: element skipped", err);
            continue;
        }
        let max_deg = config.tilt_max_deg;
        let perspective = config.perspective_px;

        let target = element.clone();
        listeners.push(EventListener::new(&element, "mousemove", move |event| {
            let Some(event) = event.dyn_ref::<MouseEvent>() else {
                return;
            };
            let rect = target.get_bounding_client_rect();
            let bounds = Bounds {
                left: rect.left(),
                top: rect.top(),
                width: rect.width(),
                height: rect.height(),
            };
            let tilt = Tilt::from_pointer(
                bounds,
                f64::from(event.client_x()),
                f64::from(event.client_y()),
                max_deg,
            );
            dom::report(
                "tilt: transform failed",
                dom::set_style(&target, "transform", &tilt.transform(perspective)),
            );
        }));

        let target = element.clone();
        listeners.push(EventListener::new(&element, "mouseleave", move |_| {
            dom::report(
                "tilt: reset failed",
                dom::set_style(&target, "transform", &rest_transform(perspective)),
            );
        }));
    }
    listeners
}

fn prepare(element: &Element, config: &PageConfig) -> Result<(), JsValue> {
    dom::set_style(element, "transform-style", "preserve-3d")?;
    dom::set_style(element, "transition", &config.tilt_transition())
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use crate::dom::fixture;
    use wasm_bindgen_test::*;
    use web_sys::{HtmlElement, MouseEventInit};

    wasm_bindgen_test_configure!(run_in_browser);

    fn move_to(target: &Element, x: i32, y: i32) {
        let init = MouseEventInit::new();
        init.set_client_x(x);
        init.set_client_y(y);
        let event = MouseEvent::new_with_mouse_event_init_dict("mousemove", &init)
            .expect("create mousemove");
        target.dispatch_event(&event).expect("dispatch mousemove");
    }

    #[wasm_bindgen_test]
    fn pointer_far_outside_is_clamped_then_reset_on_leave() {
        let root = fixture::mount(
            r#"<div id="tilt-a" data-tilt style="position:absolute;left:0;top:0;width:200px;height:100px"></div>"#,
        );
        let document = dom::document().expect("document available");
        let target = root
            .query_selector("#tilt-a")
            .expect("query")
            .expect("target present");
        let _listeners = attach_tilt_effects(&document, &PageConfig::default());
        let style = target.dyn_ref::<HtmlElement>().expect("html element").style();

        move_to(&target, -1000, -1000);
        let transform = style.get_property_value("transform").expect("read transform");
        assert!(transform.contains("rotateX(10deg)"), "{transform}");
        assert!(transform.contains("rotateY(-10deg)"), "{transform}");

        fixture::dispatch(&target, "mouseleave");
        let transform = style.get_property_value("transform").expect("read transform");
        assert!(transform.contains("rotateX(0"), "{transform}");
        assert!(transform.contains("rotateY(0"), "{transform}");
        root.remove();
    }
}
