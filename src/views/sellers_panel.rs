// ============================================================================
// SELLERS PANEL VIEW - Administración de vendedores (solo admin)
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{append_child, input_value, on_click, on_submit, ElementBuilder};
use crate::models::{Seller, SellerCreate};
use crate::state::DashboardState;
use crate::utils::constants::styles;
use crate::viewmodels::Intent;

#[derive(Clone, Debug, PartialEq)]
pub struct SellerRow {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role_label: &'static str,
    pub totem_count: usize,
    /// El admin actual no puede borrarse a sí mismo
    pub can_delete: bool,
}

impl SellerRow {
    fn from_seller(seller: &Seller, current_user: Option<i64>) -> Self {
        Self {
            id: seller.id,
            name: seller.display_name().to_string(),
            email: seller.email.clone(),
            role_label: if seller.is_admin() { "Admin" } else { "Vendedor" },
            totem_count: seller.totems.len(),
            can_delete: current_user != Some(seller.id),
        }
    }
}

/// Filas del panel; `None` si el panel no aplica a este usuario
pub fn seller_rows(state: &DashboardState) -> Option<Vec<SellerRow>> {
    if !state.show_admin_panel() {
        return None;
    }
    let me = state.session.user_id();
    Some(state.sellers.iter().map(|s| SellerRow::from_seller(s, me)).collect())
}

/// Renderizar panel. `None` cuando el usuario no es admin o el flag está apagado.
pub fn render_sellers_panel(state: &DashboardState) -> Result<Option<Element>, JsValue> {
    let Some(rows) = seller_rows(state) else {
        return Ok(None);
    };

    let panel = ElementBuilder::new("section")?
        .class("bg-white rounded-lg shadow-sm p-6 space-y-4")
        .child(
            ElementBuilder::new("h2")?
                .class("text-lg font-semibold text-dark")
                .text("Vendedores")
                .build(),
        )?
        .build();

    let table = ElementBuilder::new("table")?
        .class("min-w-full divide-y divide-neutral-200")
        .build();
    let head_row = ElementBuilder::new("tr")?.build();
    for title in ["Nombre", "Email", "Rol", "Tótems", ""] {
        append_child(
            &head_row,
            &ElementBuilder::new("th")?
                .class("px-4 py-2 text-left text-xs font-medium text-medium-gray uppercase")
                .text(title)
                .build(),
        )?;
    }
    append_child(&table, &ElementBuilder::new("thead")?.child(head_row)?.build())?;

    let body = ElementBuilder::new("tbody")?.id("sellers-table-body")?.build();
    for row in &rows {
        append_child(&body, &render_row(row)?)?;
    }
    append_child(&table, &body)?;
    append_child(&panel, &table)?;
    append_child(&panel, &render_create_form()?)?;

    Ok(Some(panel))
}

fn render_row(row: &SellerRow) -> Result<Element, JsValue> {
    let tr = ElementBuilder::new("tr")?
        .data("id", row.id)?
        .build();
    let cells = [
        row.name.clone(),
        row.email.clone(),
        row.role_label.to_string(),
        row.totem_count.to_string(),
    ];
    for text in &cells {
        append_child(
            &tr,
            &ElementBuilder::new("td")?
                .class("px-4 py-2 whitespace-nowrap text-sm text-dark")
                .text(text)
                .build(),
        )?;
    }

    let actions = ElementBuilder::new("td")?.class("px-4 py-2 text-right").build();
    if row.can_delete {
        let delete_btn = ElementBuilder::new("button")?
            .class(&format!("{} {} delete-seller", styles::BTN_DANGER, styles::BTN_SM))
            .attr("type", "button")?
            .data("id", row.id)?
            .text("Eliminar")
            .build();
        let id = row.id;
        on_click(&delete_btn, move |_| crate::dispatch(Intent::DeleteSeller(id)))?;
        append_child(&actions, &delete_btn)?;
    }
    append_child(&tr, &actions)?;
    Ok(tr)
}

fn render_create_form() -> Result<Element, JsValue> {
    let form = ElementBuilder::new("form")?
        .id("seller-form")?
        .class("grid grid-cols-1 md:grid-cols-4 gap-2 items-end")
        .build();

    for (id, placeholder, input_type) in [
        ("seller-name", "Nombre", "text"),
        ("seller-email", "Email", "email"),
        ("seller-password", "Contraseña", "password"),
    ] {
        append_child(
            &form,
            &ElementBuilder::new("input")?
                .id(id)?
                .class("rounded-md border border-neutral-300 px-3 py-2 text-sm")
                .attr("type", input_type)?
                .attr("placeholder", placeholder)?
                .flag("required", true)?
                .build(),
        )?;
    }
    append_child(
        &form,
        &ElementBuilder::new("button")?
            .class(styles::BTN_PRIMARY)
            .attr("type", "submit")?
            .text("Crear vendedor")
            .build(),
    )?;

    on_submit(&form, |e| {
        e.prevent_default();
        crate::dispatch(Intent::SubmitSellerForm(SellerCreate {
            name: input_value("seller-name"),
            email: input_value("seller-email"),
            password: input_value("seller-password"),
        }));
    })?;

    Ok(form)
}
