// ============================================================================
// ELEMENT HELPERS - Document access for the views
// ============================================================================

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, MouseEvent};

fn document() -> Result<Document, JsValue> {
    web_sys::window()
        .and_then(|win| win.document())
        .ok_or_else(|| JsValue::from_str("No document available"))
}

/// Element the console mounts into
pub fn mount_point(id: &str) -> Result<Element, JsValue> {
    document()?
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("#{} not found", id)))
}

pub fn create_element(tag: &str) -> Result<Element, JsValue> {
    document()?.create_element(tag)
}

/// Drops every child (and their listeners) of `element`
pub fn clear_children(element: &Element) {
    element.set_inner_html("");
}

/// Appends `children` in order
pub fn append_all(parent: &Element, children: &[Element]) -> Result<(), JsValue> {
    children
        .iter()
        .try_for_each(|child| parent.append_child(child).map(|_| ()))
}

/// Registers `handler` for clicks on `target` and its descendants. The
/// listener calls into the returned closure, so the caller must keep it
/// alive as long as `target` is mounted; it is never re-registered.
pub fn listen_click<F>(target: &Element, handler: F) -> Result<Closure<dyn FnMut(MouseEvent)>, JsValue>
where
    F: FnMut(MouseEvent) + 'static,
{
    let listener = Closure::<dyn FnMut(MouseEvent)>::new(handler);
    target.add_event_listener_with_callback("click", listener.as_ref().unchecked_ref())?;
    Ok(listener)
}

/// Closest element at or above the event target carrying `attribute`
pub fn closest_with(event: &MouseEvent, attribute: &str) -> Option<Element> {
    event
        .target()?
        .dyn_into::<Element>()
        .ok()?
        .closest(&format!("[{}]", attribute))
        .ok()
        .flatten()
}
