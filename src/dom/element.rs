// ============================================================================
// ELEMENT HELPERS - Acceso al documento e inputs de formularios
// ============================================================================
// Sin window (tests nativos) las búsquedas devuelven None.
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlInputElement};

pub fn document() -> Option<Document> {
    web_sys::window()?.document()
}

pub fn get_element_by_id(id: &str) -> Option<Element> {
    document()?.get_element_by_id(id)
}

pub fn create_element(tag: &str) -> Result<Element, JsValue> {
    document()
        .ok_or_else(|| JsValue::from_str("No document"))
        .and_then(|doc| doc.create_element(tag))
}

pub fn set_class_name(element: &Element, class: &str) {
    element.set_class_name(class);
}

/// classList.add (toasts)
pub fn add_class(element: &Element, class: &str) -> Result<(), JsValue> {
    element.class_list().add_1(class)
}

pub fn remove_class(element: &Element, class: &str) -> Result<(), JsValue> {
    element.class_list().remove_1(class)
}

pub fn set_text_content(element: &Element, text: &str) {
    element.set_text_content(Some(text));
}

/// Se usa con "" para vaciar una región antes de re-renderizarla
pub fn set_inner_html(element: &Element, html: &str) {
    element.set_inner_html(html);
}

pub fn append_child(parent: &Element, child: &Element) -> Result<(), JsValue> {
    parent.append_child(child).map(|_| ())
}

pub fn set_attribute(element: &Element, name: &str, value: &str) -> Result<(), JsValue> {
    element.set_attribute(name, value)
}

/// Input por ID
pub fn input_by_id(id: &str) -> Option<HtmlInputElement> {
    get_element_by_id(id)?.dyn_into::<HtmlInputElement>().ok()
}

/// Valor de un input de texto/fecha ("" si no existe)
pub fn input_value(id: &str) -> String {
    input_by_id(id).map(|input| input.value()).unwrap_or_default()
}

/// Estado de un checkbox (false si no existe)
pub fn input_checked(id: &str) -> bool {
    input_by_id(id).map(|input| input.checked()).unwrap_or(false)
}

/// Dar foco a un input
pub fn focus_input(id: &str) {
    if let Some(input) = input_by_id(id) {
        let _ = input.focus();
    }
}
