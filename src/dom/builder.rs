// ============================================================================
// ELEMENT BUILDER - Construcción encadenada de nodos para las vistas
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{append_child, create_element, set_attribute, set_class_name, set_text_content};

pub struct ElementBuilder {
    element: Element,
}

impl ElementBuilder {
    pub fn new(tag: &str) -> Result<Self, JsValue> {
        Ok(Self {
            element: create_element(tag)?,
        })
    }

    /// Reemplaza todas las clases
    pub fn class(self, class: &str) -> Self {
        set_class_name(&self.element, class);
        self
    }

    pub fn id(self, id: &str) -> Result<Self, JsValue> {
        self.attr("id", id)
    }

    pub fn text(self, text: &str) -> Self {
        set_text_content(&self.element, text);
        self
    }

    pub fn child(self, child: Element) -> Result<Self, JsValue> {
        append_child(&self.element, &child)?;
        Ok(self)
    }

    pub fn attr(self, name: &str, value: &str) -> Result<Self, JsValue> {
        set_attribute(&self.element, name, value)?;
        Ok(self)
    }

    /// `data-{key}` (ids de filas y botones)
    pub fn data(self, key: &str, value: impl ToString) -> Result<Self, JsValue> {
        self.attr(&format!("data-{}", key), &value.to_string())
    }

    /// Atributo booleano (`disabled`, `checked`, `required`...) solo si `on`
    pub fn flag(self, name: &str, on: bool) -> Result<Self, JsValue> {
        if on {
            return self.attr(name, "");
        }
        Ok(self)
    }

    pub fn build(self) -> Element {
        self.element
    }
}
