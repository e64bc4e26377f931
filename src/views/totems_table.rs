// ============================================================================
// TOTEMS TABLE VIEW - Tabla de tótems del vendedor
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{append_child, on_click, ElementBuilder};
use crate::models::Totem;
use crate::utils::constants::{styles, EMPTY_TOTEMS_SUBTITLE, EMPTY_TOTEMS_TITLE};
use crate::viewmodels::Intent;

/// Fila ya formateada
#[derive(Clone, Debug, PartialEq)]
pub struct TotemRow {
    pub id: i64,
    pub external_pos_id: String,
    pub location: String,
    pub status_label: &'static str,
    pub status_class: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub enum TotemsTable {
    /// Placeholder "Aún no tienes tótems"
    Empty,
    /// Una fila por tótem, en el orden recibido
    Rows(Vec<TotemRow>),
}

impl TotemsTable {
    pub fn from_totems(totems: &[Totem]) -> Self {
        if totems.is_empty() {
            return TotemsTable::Empty;
        }
        TotemsTable::Rows(
            totems
                .iter()
                .map(|t| TotemRow {
                    id: t.id,
                    external_pos_id: t.external_pos_id.clone(),
                    location: t.location_label().to_string(),
                    status_label: if t.is_active { "Activo" } else { "Inactivo" },
                    status_class: if t.is_active { styles::BADGE_BRAND } else { styles::BADGE_NEUTRAL },
                })
                .collect(),
        )
    }
}

/// Renderizar tabla completa (reemplaza la región)
pub fn render_totems_table(totems: &[Totem]) -> Result<Element, JsValue> {
    let table = ElementBuilder::new("table")?
        .class("min-w-full divide-y divide-neutral-200")
        .build();

    let head = ElementBuilder::new("thead")?.build();
    let head_row = ElementBuilder::new("tr")?.build();
    for title in ["ID POS", "Ubicación", "Estado", ""] {
        let th = ElementBuilder::new("th")?
            .class("px-6 py-3 text-left text-xs font-medium text-medium-gray uppercase")
            .text(title)
            .build();
        append_child(&head_row, &th)?;
    }
    append_child(&head, &head_row)?;
    append_child(&table, &head)?;

    let body = ElementBuilder::new("tbody")?
        .id("totems-table-body")?
        .build();

    match TotemsTable::from_totems(totems) {
        TotemsTable::Empty => append_child(&body, &render_empty_row()?)?,
        TotemsTable::Rows(rows) => {
            for row in &rows {
                append_child(&body, &render_row(row)?)?;
            }
        }
    }

    append_child(&table, &body)?;
    Ok(table)
}

fn render_empty_row() -> Result<Element, JsValue> {
    let add_btn = ElementBuilder::new("button")?
        .class(&format!("{} mt-4", styles::BTN_PRIMARY))
        .attr("type", "button")?
        .text("Añadir Tótem")
        .build();
    on_click(&add_btn, |_| crate::dispatch(Intent::OpenCreateTotem))?;

    let cell = ElementBuilder::new("td")?
        .class("text-center py-10 px-4 empty-state")
        .attr("colspan", "4")?
        .child(
            ElementBuilder::new("h4")?
                .class("text-lg font-medium text-dark")
                .text(EMPTY_TOTEMS_TITLE)
                .build(),
        )?
        .child(
            ElementBuilder::new("p")?
                .class("text-sm text-medium-gray mt-1")
                .text(EMPTY_TOTEMS_SUBTITLE)
                .build(),
        )?
        .child(add_btn)?
        .build();

    Ok(ElementBuilder::new("tr")?.child(cell)?.build())
}

fn render_row(row: &TotemRow) -> Result<Element, JsValue> {
    let tr = ElementBuilder::new("tr")?
        .class("hover:bg-neutral-100")
        .data("id", row.id)?
        .build();

    let pos = ElementBuilder::new("td")?
        .class("px-6 py-4 whitespace-nowrap text-sm font-medium text-dark")
        .text(&row.external_pos_id)
        .build();
    let location = ElementBuilder::new("td")?
        .class("px-6 py-4 whitespace-nowrap text-sm text-medium-gray")
        .text(&row.location)
        .build();
    let status = ElementBuilder::new("td")?
        .class("px-6 py-4 whitespace-nowrap")
        .child(
            ElementBuilder::new("span")?
                .class(row.status_class)
                .text(row.status_label)
                .build(),
        )?
        .build();

    let edit_btn = ElementBuilder::new("button")?
        .class(&format!("{} {} edit-totem", styles::BTN_SECONDARY, styles::BTN_SM))
        .attr("type", "button")?
        .data("id", row.id)?
        .text("Editar")
        .build();
    let delete_btn = ElementBuilder::new("button")?
        .class(&format!("{} {} delete-totem", styles::BTN_DANGER, styles::BTN_SM))
        .attr("type", "button")?
        .data("id", row.id)?
        .text("Eliminar")
        .build();

    let id = row.id;
    on_click(&edit_btn, move |_| crate::dispatch(Intent::OpenEditTotem(id)))?;
    on_click(&delete_btn, move |_| crate::dispatch(Intent::DeleteTotem(id)))?;

    let actions = ElementBuilder::new("td")?
        .class("px-6 py-4 whitespace-nowrap text-right text-sm font-medium space-x-2")
        .child(edit_btn)?
        .child(delete_btn)?
        .build();

    append_child(&tr, &pos)?;
    append_child(&tr, &location)?;
    append_child(&tr, &status)?;
    append_child(&tr, &actions)?;
    Ok(tr)
}
