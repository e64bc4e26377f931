// ============================================================================
// EVENT HANDLING - Listeners sobre elementos del DOM
// ============================================================================
// Cada Closure registrada queda pendiente hasta que App la reclama con
// `take_listeners()` y la guarda junto a la región que la creó. Al
// re-renderizar la región, los nodos viejos se quitan primero y después se
// sueltan sus closures; sin forget() no queda memoria retenida en Rust.
// Los listeners del layout y de document viven lo mismo que App.
// ============================================================================

use std::any::Any;
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::JsCast;
use web_sys::{Event, EventTarget, KeyboardEvent, MouseEvent};

fn listen<E, F>(target: &EventTarget, event_type: &str, handler: F) -> Result<(), JsValue>
where
    E: FromWasmAbi + 'static,
    F: FnMut(E) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    target.add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())?;
    keep_listener(Box::new(closure));
    Ok(())
}

thread_local! {
    static PENDING: RefCell<Vec<Box<dyn Any>>> = RefCell::new(Vec::new());
}

fn keep_listener(listener: Box<dyn Any>) {
    PENDING.with(|pending| pending.borrow_mut().push(listener));
}

/// Closures registradas desde la última llamada. Soltarlas desengancha su memoria.
pub fn take_listeners() -> Vec<Box<dyn Any>> {
    PENDING.with(|pending| std::mem::take(&mut *pending.borrow_mut()))
}

/// Click
pub fn on_click<F>(element: &EventTarget, handler: F) -> Result<(), JsValue>
where
    F: FnMut(MouseEvent) + 'static,
{
    listen(element, "click", handler)
}

/// Change (inputs de fecha, checkboxes)
pub fn on_change<F>(element: &EventTarget, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    listen(element, "change", handler)
}

/// Submit de formulario (el handler decide si hace prevent_default)
pub fn on_submit<F>(element: &EventTarget, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    listen(element, "submit", handler)
}

/// Keydown (se usa sobre `document` para Escape)
pub fn on_keydown<F>(target: &EventTarget, handler: F) -> Result<(), JsValue>
where
    F: FnMut(KeyboardEvent) + 'static,
{
    listen(target, "keydown", handler)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    #[test]
    fn test_take_listeners_entrega_y_vacia() {
        let owner = Rc::new(());
        keep_listener(Box::new(owner.clone()));
        keep_listener(Box::new(owner.clone()));
        assert_eq!(Rc::strong_count(&owner), 3);

        let taken = take_listeners();
        assert_eq!(taken.len(), 2);
        assert!(take_listeners().is_empty());

        // Reemplazar la región suelta las closures viejas
        drop(taken);
        assert_eq!(Rc::strong_count(&owner), 1);
    }
}
