// ============================================================================
// ELEMENT HELPERS - Funciones básicas para manipular DOM
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlElement, HtmlFormElement, HtmlInputElement, HtmlSelectElement,
    HtmlTextAreaElement, Window,
};

/// Obtener window global
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Obtener document
pub fn document() -> Option<Document> {
    window()?.document()
}

/// Obtener elemento por ID
pub fn get_element_by_id(id: &str) -> Option<Element> {
    document()?.get_element_by_id(id)
}

/// Crear elemento
pub fn create_element(tag: &str) -> Result<Element, JsValue> {
    document()
        .ok_or_else(|| JsValue::from_str("No document"))
        .and_then(|doc| doc.create_element(tag))
}

/// Establecer class name (reemplaza todas las clases)
pub fn set_class_name(element: &Element, class: &str) {
    element.set_class_name(class);
}

/// Establecer text content
pub fn set_text_content(element: &Element, text: &str) {
    element.set_text_content(Some(text));
}

/// Establecer inner HTML
pub fn set_inner_html(element: &Element, html: &str) {
    element.set_inner_html(html);
}

/// Agregar hijo
pub fn append_child(parent: &Element, child: &Element) -> Result<(), JsValue> {
    parent.append_child(child).map(|_| ())
}

/// Establecer atributo
pub fn set_attribute(element: &Element, name: &str, value: &str) -> Result<(), JsValue> {
    element.set_attribute(name, value)
}

/// Obtener atributo
pub fn get_attribute(element: &Element, name: &str) -> Option<String> {
    element.get_attribute(name)
}

/// Establecer display (visibilidad) vía style inline
pub fn set_display(element: &Element, value: &str) -> Result<(), JsValue> {
    element
        .dyn_ref::<HtmlElement>()
        .ok_or_else(|| JsValue::from_str("Element is not an HtmlElement"))?
        .style()
        .set_property("display", value)
}

/// Leer el value de un control de formulario por ID (input, textarea o select)
pub fn form_value(id: &str) -> Option<String> {
    let element = get_element_by_id(id)?;
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        return Some(input.value());
    }
    if let Some(textarea) = element.dyn_ref::<HtmlTextAreaElement>() {
        return Some(textarea.value());
    }
    if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
        return Some(select.value());
    }
    None
}

/// Resetear un formulario (limpia todos sus campos)
pub fn reset_form(element: &Element) {
    if let Some(form) = element.dyn_ref::<HtmlFormElement>() {
        form.reset();
    }
}

/// Mostrar un alert nativo del navegador
pub fn alert(message: &str) {
    if let Some(win) = window() {
        let _ = win.alert_with_message(message);
    }
}

/// Query selector all (buscar múltiples elementos por selector CSS)
/// Usa js_sys::eval para ejecutar querySelectorAll directamente
pub fn query_selector_all(selector: &str) -> Result<js_sys::Array, JsValue> {
    let js_code = format!("Array.from(document.querySelectorAll('{}'))", selector);
    let result = js_sys::eval(&js_code)?;
    if let Some(array) = result.dyn_ref::<js_sys::Array>() {
        Ok(array.clone())
    } else {
        Err(JsValue::from_str("querySelectorAll did not return an array"))
    }
}
