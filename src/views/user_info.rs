// ============================================================================
// USER INFO VIEW - Datos del vendedor y vínculo con Mercado Pago
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{append_child, on_click, ElementBuilder};
use crate::state::{SessionState, TokenField};
use crate::utils::constants::styles;
use crate::viewmodels::Intent;

#[derive(Clone, Debug, PartialEq)]
pub struct TokenInput {
    pub field: TokenField,
    pub label: &'static str,
    pub value: String,
    /// "password" enmascarado, "text" revelado
    pub input_type: &'static str,
    pub toggle_label: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub enum UserInfo {
    /// Antes de que responda /sellers/me
    Skeleton,
    Loaded {
        name: String,
        email: String,
        connected: bool,
        badge_label: &'static str,
        badge_class: &'static str,
        /// Vacío cuando no hay vínculo
        tokens: Vec<TokenInput>,
    },
}

impl UserInfo {
    pub fn from_session(session: &SessionState) -> Self {
        let Some(user) = session.user.as_ref() else {
            return UserInfo::Skeleton;
        };
        let connected = user.is_mp_connected();

        let tokens = if connected {
            [
                (TokenField::Access, "Access Token", &user.mp_access_token),
                (TokenField::Refresh, "Refresh Token", &user.mp_refresh_token),
            ]
            .into_iter()
            .map(|(field, label, value)| {
                let revealed = session.is_revealed(field);
                TokenInput {
                    field,
                    label,
                    value: value.clone().unwrap_or_default(),
                    input_type: if revealed { "text" } else { "password" },
                    toggle_label: if revealed { "Ocultar" } else { "Mostrar" },
                }
            })
            .collect()
        } else {
            Vec::new()
        };

        UserInfo::Loaded {
            name: user.display_name().to_string(),
            email: user.email.clone(),
            connected,
            badge_label: if connected { "Conectado" } else { "No Conectado" },
            badge_class: if connected { styles::BADGE_BRAND } else { styles::BADGE_NEUTRAL },
            tokens,
        }
    }
}

/// Renderizar tarjeta de usuario (reemplaza la región)
pub fn render_user_info(session: &SessionState) -> Result<Element, JsValue> {
    let card = ElementBuilder::new("div")?
        .class("bg-white rounded-lg shadow-sm p-6 space-y-4")
        .build();

    let (name, email, connected, badge_label, badge_class, tokens) = match UserInfo::from_session(session) {
        UserInfo::Skeleton => {
            let skeleton = ElementBuilder::new("div")?
                .id("user-info-skeleton")?
                .class("animate-pulse space-y-2")
                .child(ElementBuilder::new("div")?.class("h-6 bg-neutral-200 rounded w-1/3").build())?
                .child(ElementBuilder::new("div")?.class("h-4 bg-neutral-200 rounded w-1/2").build())?
                .build();
            append_child(&card, &skeleton)?;
            return Ok(card);
        }
        UserInfo::Loaded { name, email, connected, badge_label, badge_class, tokens } => {
            (name, email, connected, badge_label, badge_class, tokens)
        }
    };

    let header = ElementBuilder::new("div")?
        .class("flex items-center justify-between")
        .child(
            ElementBuilder::new("div")?
                .child(ElementBuilder::new("h2")?.id("user-name")?.class("text-xl font-semibold text-dark").text(&name).build())?
                .child(ElementBuilder::new("p")?.class("text-sm text-medium-gray").text(&email).build())?
                .build(),
        )?
        .child(
            ElementBuilder::new("span")?
                .id("mp-status-badge")?
                .class(badge_class)
                .text(badge_label)
                .build(),
        )?
        .build();
    append_child(&card, &header)?;

    let mp_button = if connected {
        let btn = ElementBuilder::new("button")?
            .id("mp-disconnect-button")?
            .class(styles::BTN_DANGER)
            .attr("type", "button")?
            .text("Desconectar Mercado Pago")
            .build();
        on_click(&btn, |_| crate::dispatch(Intent::DisconnectMercadoPago))?;
        btn
    } else {
        let btn = ElementBuilder::new("button")?
            .id("mp-connect-button")?
            .class(styles::BTN_PRIMARY)
            .attr("type", "button")?
            .text("Conectar Mercado Pago")
            .build();
        on_click(&btn, |_| crate::dispatch(Intent::ConnectMercadoPago))?;
        btn
    };
    append_child(&card, &mp_button)?;

    for token in &tokens {
        append_child(&card, &render_token_input(token)?)?;
    }

    Ok(card)
}

fn render_token_input(token: &TokenInput) -> Result<Element, JsValue> {
    let input_id = match token.field {
        TokenField::Access => "mp-access-token",
        TokenField::Refresh => "mp-refresh-token",
    };

    let input = ElementBuilder::new("input")?
        .id(input_id)?
        .class("flex-1 rounded-md border border-neutral-300 px-3 py-2 text-sm font-mono")
        .attr("type", token.input_type)?
        .attr("value", &token.value)?
        .flag("readonly", true)?
        .build();

    let toggle = ElementBuilder::new("button")?
        .class(&format!("{} {}", styles::BTN_SECONDARY, styles::BTN_SM))
        .attr("type", "button")?
        .text(token.toggle_label)
        .build();
    let field = token.field;
    on_click(&toggle, move |_| crate::dispatch(Intent::ToggleTokenVisibility(field)))?;

    let row = ElementBuilder::new("div")?
        .class("space-y-1")
        .child(
            ElementBuilder::new("label")?
                .class("block text-sm font-medium text-dark")
                .attr("for", input_id)?
                .text(token.label)
                .build(),
        )?
        .child(
            ElementBuilder::new("div")?
                .class("flex items-center gap-2")
                .child(input)?
                .child(toggle)?
                .build(),
        )?
        .build();
    Ok(row)
}
