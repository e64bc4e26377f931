// ============================================================================
// LAYOUT - Esqueleto estático del dashboard
// ============================================================================
// Se monta una sola vez. Cada región es un contenedor vacío que App rellena
// (y vacía) entera cuando el view model la marca como sucia.
// Los filtros de fecha viven fuera de la región de pagos para no perder el
// foco al re-renderizar la tabla.
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::config::FeatureFlags;
use crate::dom::{append_child, input_value, on_change, on_click, ElementBuilder};
use crate::services::toast_service::TOAST_CONTAINER_ID;
use crate::utils::constants::styles;
use crate::viewmodels::{Intent, Region};

pub const START_DATE_INPUT: &str = "start-date-filter";
pub const END_DATE_INPUT: &str = "end-date-filter";

/// Contenedor DOM de cada región
pub fn region_id(region: Region) -> &'static str {
    match region {
        Region::UserInfo => "user-info-region",
        Region::Totems => "totems-region",
        Region::Payments => "payments-region",
        Region::TotemModal => "modal-region",
        Region::Sellers => "sellers-region",
    }
}

pub fn render_layout(features: &FeatureFlags) -> Result<Element, JsValue> {
    let shell = ElementBuilder::new("div")?
        .class("min-h-screen bg-neutral-100")
        .build();

    append_child(&shell, &render_header()?)?;

    let main = ElementBuilder::new("main")?
        .class("max-w-6xl mx-auto p-6 space-y-6")
        .build();

    append_child(&main, &region(Region::UserInfo)?)?;
    append_child(&main, &render_totems_section()?)?;
    if features.payments {
        append_child(&main, &render_payments_section()?)?;
    }
    if features.admin_panel {
        // Vacía salvo para admins
        append_child(&main, &region(Region::Sellers)?)?;
    }
    append_child(&shell, &main)?;

    append_child(&shell, &region(Region::TotemModal)?)?;
    append_child(
        &shell,
        &ElementBuilder::new("div")?
            .id(TOAST_CONTAINER_ID)?
            .class("fixed bottom-4 right-4 space-y-2 z-50")
            .build(),
    )?;

    Ok(shell)
}

fn region(region: Region) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("div")?.id(region_id(region))?.build())
}

fn render_header() -> Result<Element, JsValue> {
    let logout = ElementBuilder::new("button")?
        .id("logout-button")?
        .class(styles::BTN_SECONDARY)
        .attr("type", "button")?
        .text("Cerrar sesión")
        .build();
    on_click(&logout, |_| crate::dispatch(Intent::Logout))?;

    Ok(ElementBuilder::new("header")?
        .class("bg-white shadow-sm px-6 py-4 flex items-center justify-between")
        .child(
            ElementBuilder::new("h1")?
                .class("text-xl font-bold text-dark")
                .text("Panel de Vendedor")
                .build(),
        )?
        .child(logout)?
        .build())
}

fn render_totems_section() -> Result<Element, JsValue> {
    let add_btn = ElementBuilder::new("button")?
        .id("add-totem-button")?
        .class(styles::BTN_PRIMARY)
        .attr("type", "button")?
        .text("Añadir Tótem")
        .build();
    on_click(&add_btn, |_| crate::dispatch(Intent::OpenCreateTotem))?;

    Ok(ElementBuilder::new("section")?
        .class("bg-white rounded-lg shadow-sm p-6 space-y-4")
        .child(
            ElementBuilder::new("div")?
                .class("flex items-center justify-between")
                .child(
                    ElementBuilder::new("h2")?
                        .class("text-lg font-semibold text-dark")
                        .text("Mis Tótems")
                        .build(),
                )?
                .child(add_btn)?
                .build(),
        )?
        .child(region(Region::Totems)?)?
        .build())
}

fn render_payments_section() -> Result<Element, JsValue> {
    let filters = ElementBuilder::new("div")?
        .class("flex flex-wrap items-end gap-4")
        .build();
    for (id, label) in [(START_DATE_INPUT, "Desde"), (END_DATE_INPUT, "Hasta")] {
        let input = ElementBuilder::new("input")?
            .id(id)?
            .class("rounded-md border border-neutral-300 px-3 py-2 text-sm")
            .attr("type", "date")?
            .build();
        on_change(&input, |_| {
            crate::dispatch(Intent::PaymentsFilterChanged {
                start_date: input_value(START_DATE_INPUT),
                end_date: input_value(END_DATE_INPUT),
            })
        })?;
        let field = ElementBuilder::new("label")?
            .class("flex flex-col text-sm text-medium-gray")
            .attr("for", id)?
            .text(label)
            .build();
        append_child(&field, &input)?;
        append_child(&filters, &field)?;
    }

    Ok(ElementBuilder::new("section")?
        .class("bg-white rounded-lg shadow-sm p-6 space-y-4")
        .child(
            ElementBuilder::new("h2")?
                .class("text-lg font-semibold text-dark")
                .text("Pagos")
                .build(),
        )?
        .child(filters)?
        .child(region(Region::Payments)?)?
        .build())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_de_region_unicos() {
        let ids = [
            region_id(Region::UserInfo),
            region_id(Region::Totems),
            region_id(Region::Payments),
            region_id(Region::TotemModal),
            region_id(Region::Sellers),
        ];
        for (i, a) in ids.iter().enumerate() {
            for b in &ids[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
