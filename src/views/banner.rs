use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::ElementBuilder;

/// Error or success line under a screen header; nothing when both are empty
pub fn render_banner(error: Option<&str>, success: Option<&str>) -> Result<Option<Element>, JsValue> {
    let (class, text) = match (error, success) {
        (Some(error), _) => ("banner banner-error", error),
        (None, Some(success)) => ("banner banner-success", success),
        (None, None) => return Ok(None),
    };
    ElementBuilder::tag("p").map(|p| Some(p.class(class).text(text).build()))
}
