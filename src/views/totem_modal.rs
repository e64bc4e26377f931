// ============================================================================
// TOTEM MODAL VIEW - Formulario de alta/edición de tótems
// ============================================================================
// El id del tótem viaja en un input oculto: vacío = crear, con valor = editar.
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{append_child, input_checked, input_value, on_click, on_submit, ElementBuilder};
use crate::models::TotemForm;
use crate::state::TotemModal;
use crate::utils::constants::styles;
use crate::viewmodels::Intent;

pub const TOTEM_ID_INPUT: &str = "totem-id";
pub const TOTEM_POS_INPUT: &str = "totem-external-pos-id";
pub const TOTEM_LOCATION_INPUT: &str = "totem-location";
pub const TOTEM_ACTIVE_INPUT: &str = "totem-is-active";

/// Lo que el modal muestra cuando está abierto
#[derive(Clone, Debug, PartialEq)]
pub struct TotemModalView {
    pub title: &'static str,
    pub form: TotemForm,
}

impl TotemModalView {
    pub fn from_modal(modal: &TotemModal) -> Option<Self> {
        if !modal.is_open() {
            return None;
        }
        Some(Self {
            title: modal.title(),
            form: modal.form(),
        })
    }
}

/// Leer los inputs del modal tal como están en el DOM
fn read_form() -> TotemForm {
    TotemForm {
        id: input_value(TOTEM_ID_INPUT),
        external_pos_id: input_value(TOTEM_POS_INPUT),
        location: input_value(TOTEM_LOCATION_INPUT),
        is_active: input_checked(TOTEM_ACTIVE_INPUT),
    }
}

/// Renderizar el modal. `None` = cerrado, la región queda vacía.
pub fn render_totem_modal(modal: &TotemModal) -> Result<Option<Element>, JsValue> {
    let Some(view) = TotemModalView::from_modal(modal) else {
        return Ok(None);
    };

    let backdrop = ElementBuilder::new("div")?
        .id("totem-modal")?
        .class("fixed inset-0 bg-black bg-opacity-50 flex items-center justify-center z-40")
        .build();
    // Solo el click directo sobre el fondo cierra (no los clicks dentro del panel)
    on_click(&backdrop, |e| {
        if e.target() == e.current_target() {
            crate::dispatch(Intent::CloseTotemModal);
        }
    })?;

    let form = ElementBuilder::new("form")?
        .id("totem-form")?
        .class("bg-white rounded-lg shadow-xl p-6 w-full max-w-md space-y-4")
        .build();
    on_submit(&form, |e| {
        e.prevent_default();
        crate::dispatch(Intent::SubmitTotemForm(read_form()));
    })?;

    append_child(
        &form,
        &ElementBuilder::new("h3")?
            .id("totem-modal-title")?
            .class("text-lg font-semibold text-dark")
            .text(view.title)
            .build(),
    )?;

    append_child(
        &form,
        &ElementBuilder::new("input")?
            .id(TOTEM_ID_INPUT)?
            .attr("type", "hidden")?
            .attr("value", &view.form.id)?
            .build(),
    )?;
    append_child(&form, &text_field(TOTEM_POS_INPUT, "ID de POS externo", &view.form.external_pos_id, true)?)?;
    append_child(&form, &text_field(TOTEM_LOCATION_INPUT, "Ubicación", &view.form.location, false)?)?;

    let active = ElementBuilder::new("label")?
        .class("flex items-center gap-2 text-sm text-dark")
        .child(
            ElementBuilder::new("input")?
                .id(TOTEM_ACTIVE_INPUT)?
                .attr("type", "checkbox")?
                .flag("checked", view.form.is_active)?
                .build(),
        )?
        .child(ElementBuilder::new("span")?.text("Activo").build())?
        .build();
    append_child(&form, &active)?;

    let cancel = ElementBuilder::new("button")?
        .id("totem-modal-cancel")?
        .class(styles::BTN_SECONDARY)
        .attr("type", "button")?
        .text("Cancelar")
        .build();
    on_click(&cancel, |_| crate::dispatch(Intent::CloseTotemModal))?;

    let save = ElementBuilder::new("button")?
        .class(styles::BTN_PRIMARY)
        .attr("type", "submit")?
        .text("Guardar")
        .build();

    append_child(
        &form,
        &ElementBuilder::new("div")?
            .class("flex justify-end gap-2")
            .child(cancel)?
            .child(save)?
            .build(),
    )?;

    append_child(&backdrop, &form)?;
    Ok(Some(backdrop))
}

fn text_field(id: &str, label: &str, value: &str, required: bool) -> Result<Element, JsValue> {
    ElementBuilder::new("div")?
        .class("space-y-1")
        .child(
            ElementBuilder::new("label")?
                .class("block text-sm font-medium text-dark")
                .attr("for", id)?
                .text(label)
                .build(),
        )?
        .child(
            ElementBuilder::new("input")?
                .id(id)?
                .class("w-full rounded-md border border-neutral-300 px-3 py-2 text-sm")
                .attr("type", "text")?
                .attr("value", value)?
                .flag("required", required)?
                .build(),
        )
        .map(ElementBuilder::build)
}
