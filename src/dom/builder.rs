// ============================================================================
// ELEMENT BUILDER - Chained construction of small DOM trees
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_all, create_element};

pub struct ElementBuilder {
    node: Element,
}

impl ElementBuilder {
    pub fn tag(name: &str) -> Result<Self, JsValue> {
        create_element(name).map(|node| Self { node })
    }

    /// Sets the whole `class` attribute
    pub fn class(self, class: &str) -> Self {
        self.node.set_class_name(class);
        self
    }

    pub fn text(self, text: &str) -> Self {
        self.node.set_text_content(Some(text));
        self
    }

    pub fn attr(self, name: &str, value: &str) -> Result<Self, JsValue> {
        self.node.set_attribute(name, value)?;
        Ok(self)
    }

    /// Boolean attribute such as `disabled`
    pub fn flag(self, name: &str, on: bool) -> Result<Self, JsValue> {
        if on {
            self.attr(name, "")
        } else {
            Ok(self)
        }
    }

    pub fn child(self, child: Element) -> Result<Self, JsValue> {
        self.children(&[child])
    }

    pub fn children(self, children: &[Element]) -> Result<Self, JsValue> {
        append_all(&self.node, children)?;
        Ok(self)
    }

    pub fn build(self) -> Element {
        self.node
    }
}
