// ============================================================================
// PAYMENTS TABLE VIEW - Pagos paginados
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{append_child, on_click, ElementBuilder};
use crate::state::PaymentsCursor;
use crate::utils::constants::{styles, EMPTY_PAYMENTS_TITLE};
use crate::viewmodels::Intent;

#[derive(Clone, Debug, PartialEq)]
pub struct PaymentRow {
    pub time: String,
    pub ticket: String,
    pub pos: String,
    pub amount: String,
    pub status_label: String,
    pub status_class: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PaginationControls {
    /// "1–10"; `None` en una página vacía distinta de la primera
    pub range: Option<String>,
    pub prev_disabled: bool,
    pub next_disabled: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub enum PaymentsTable {
    /// Aún no llegó la primera página
    Loading,
    /// Página 1 sin pagos
    Empty,
    Page {
        rows: Vec<PaymentRow>,
        pagination: PaginationControls,
    },
}

impl PaymentsTable {
    pub fn from_cursor(cursor: &PaymentsCursor) -> Self {
        if !cursor.loaded {
            return PaymentsTable::Loading;
        }
        if cursor.items.is_empty() && cursor.current_page == 1 {
            return PaymentsTable::Empty;
        }

        let rows = cursor
            .items
            .iter()
            .map(|p| PaymentRow {
                time: p.formatted_time(),
                ticket: p.ticket_code.clone().unwrap_or_else(|| "N/A".to_string()),
                pos: p.external_pos_id.clone().unwrap_or_else(|| "N/A".to_string()),
                amount: p.formatted_amount(),
                status_label: if p.is_approved() { "Aprobado".to_string() } else { p.status.clone() },
                status_class: if p.is_approved() { styles::BADGE_APPROVED } else { styles::BADGE_OTHER },
            })
            .collect();

        PaymentsTable::Page {
            rows,
            pagination: PaginationControls {
                range: cursor.range().map(|(from, to)| format!("{}–{}", from, to)),
                prev_disabled: !cursor.can_go_prev(),
                next_disabled: !cursor.can_go_next(),
            },
        }
    }
}

/// Renderizar tabla + paginación (reemplaza la región)
pub fn render_payments_table(cursor: &PaymentsCursor) -> Result<Element, JsValue> {
    let wrapper = ElementBuilder::new("div")?.class("payments-table").build();

    let table = ElementBuilder::new("table")?
        .class("min-w-full divide-y divide-gray-200")
        .build();
    let head_row = ElementBuilder::new("tr")?.build();
    for title in ["Fecha", "Ticket", "POS", "Monto", "Estado"] {
        let th = ElementBuilder::new("th")?
            .class("px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase")
            .text(title)
            .build();
        append_child(&head_row, &th)?;
    }
    append_child(&table, &ElementBuilder::new("thead")?.child(head_row)?.build())?;

    let body = ElementBuilder::new("tbody")?
        .id("payments-table-body")?
        .build();
    append_child(&table, &body)?;
    append_child(&wrapper, &table)?;

    match PaymentsTable::from_cursor(cursor) {
        PaymentsTable::Loading => {
            append_child(&body, &message_row("payments-skeleton-row", "Cargando pagos...", "animate-pulse")?)?;
        }
        PaymentsTable::Empty => {
            append_child(&body, &message_row("payments-empty-state", EMPTY_PAYMENTS_TITLE, "")?)?;
        }
        PaymentsTable::Page { rows, pagination } => {
            for row in &rows {
                append_child(&body, &render_row(row)?)?;
            }
            append_child(&wrapper, &render_pagination(&pagination)?)?;
        }
    }

    Ok(wrapper)
}

fn message_row(id: &str, text: &str, extra_class: &str) -> Result<Element, JsValue> {
    let cell = ElementBuilder::new("td")?
        .class(&format!("text-center py-10 px-4 text-sm text-gray-500 {}", extra_class))
        .attr("colspan", "5")?
        .text(text)
        .build();
    Ok(ElementBuilder::new("tr")?.id(id)?.child(cell)?.build())
}

fn render_row(row: &PaymentRow) -> Result<Element, JsValue> {
    let tr = ElementBuilder::new("tr")?.class("hover:bg-gray-50").build();
    let cells = [
        ("px-6 py-4 whitespace-nowrap text-sm text-gray-600", row.time.as_str()),
        ("px-6 py-4 whitespace-nowrap text-sm font-medium text-gray-900", row.ticket.as_str()),
        ("px-6 py-4 whitespace-nowrap text-sm text-gray-500", row.pos.as_str()),
        ("px-6 py-4 whitespace-nowrap text-sm text-gray-800 text-right font-semibold", row.amount.as_str()),
    ];
    for (class, text) in cells {
        append_child(&tr, &ElementBuilder::new("td")?.class(class).text(text).build())?;
    }
    let badge = ElementBuilder::new("span")?
        .class(row.status_class)
        .text(&row.status_label)
        .build();
    append_child(
        &tr,
        &ElementBuilder::new("td")?
            .class("px-6 py-4 whitespace-nowrap text-center")
            .child(badge)?
            .build(),
    )?;
    Ok(tr)
}

fn render_pagination(controls: &PaginationControls) -> Result<Element, JsValue> {
    let nav = ElementBuilder::new("div")?
        .id("payments-pagination")?
        .class("flex items-center justify-between py-3")
        .build();

    let info = ElementBuilder::new("span")?
        .class("text-sm text-gray-600")
        .text(&match &controls.range {
            Some(range) => format!("Mostrando {}", range),
            None => "Sin resultados en esta página".to_string(),
        })
        .build();

    let prev = ElementBuilder::new("button")?
        .id("payments-prev-button")?
        .class(&format!("{} {}", styles::BTN_SECONDARY, styles::BTN_SM))
        .attr("type", "button")?
        .flag("disabled", controls.prev_disabled)?
        .text("Anterior")
        .build();
    let next = ElementBuilder::new("button")?
        .id("payments-next-button")?
        .class(&format!("{} {}", styles::BTN_SECONDARY, styles::BTN_SM))
        .attr("type", "button")?
        .flag("disabled", controls.next_disabled)?
        .text("Siguiente")
        .build();

    on_click(&prev, |_| crate::dispatch(Intent::PaymentsPrevPage))?;
    on_click(&next, |_| crate::dispatch(Intent::PaymentsNextPage))?;

    let buttons = ElementBuilder::new("div")?
        .class("space-x-2")
        .child(prev)?
        .child(next)?
        .build();

    append_child(&nav, &info)?;
    append_child(&nav, &buttons)?;
    Ok(nav)
}
