// ============================================================================
// API CLIENT - Endpoints REST del dashboard (Stateless)
// ============================================================================
// NO tiene lógica de UI: solo arma rutas y delega en el Gateway
// ============================================================================

use std::rc::Rc;
use crate::models::{AuthorizeUrlResponse, Payment, Seller, SellerCreate, Totem, TotemPayload};
use crate::services::error::ApiError;
use crate::services::gateway::Gateway;
use crate::services::transport::HttpMethod;

pub const SELLERS_ME: &str = "/sellers/me";
pub const SELLERS: &str = "/sellers/";
pub const TOTEMS: &str = "/totems/";
pub const PAYMENTS_ME: &str = "/api/v1/payments/me";
pub const MP_AUTHORIZE_URL: &str = "/mercadopago/authorize-url";
pub const MP_DISCONNECT: &str = "/mercadopago/disconnect";

/// Cliente API - SOLO comunicación HTTP
#[derive(Clone)]
pub struct ApiClient {
    gateway: Rc<Gateway>,
}

impl ApiClient {
    pub fn new(gateway: Rc<Gateway>) -> Self {
        Self { gateway }
    }

    /// Usuario actual con sus tótems
    pub async fn me(&self) -> Result<Seller, ApiError> {
        self.gateway.call(SELLERS_ME, HttpMethod::Get).await
    }

    pub async fn create_totem(&self, payload: &TotemPayload) -> Result<Totem, ApiError> {
        log::info!("🆕 [API] Creando tótem {}", payload.external_pos_id);
        self.gateway.call_with_body(TOTEMS, HttpMethod::Post, payload).await
    }

    pub async fn update_totem(&self, id: &str, payload: &TotemPayload) -> Result<Totem, ApiError> {
        log::info!("✏️ [API] Actualizando tótem {}", id);
        self.gateway
            .call_with_body(&totem_path(id), HttpMethod::Patch, payload)
            .await
    }

    pub async fn delete_totem(&self, id: &str) -> Result<(), ApiError> {
        log::info!("🗑️ [API] Eliminando tótem {}", id);
        self.gateway
            .call::<serde_json::Value>(&totem_path(id), HttpMethod::Delete)
            .await
            .map(|_| ())
    }

    /// Página de pagos del usuario actual
    pub async fn list_payments(&self, query: &PaymentsQuery) -> Result<Vec<Payment>, ApiError> {
        self.gateway.call(&query.to_path(), HttpMethod::Get).await
    }

    pub async fn mercadopago_authorize_url(&self) -> Result<AuthorizeUrlResponse, ApiError> {
        self.gateway.call(MP_AUTHORIZE_URL, HttpMethod::Get).await
    }

    pub async fn mercadopago_disconnect(&self) -> Result<(), ApiError> {
        self.gateway
            .call::<serde_json::Value>(MP_DISCONNECT, HttpMethod::Get)
            .await
            .map(|_| ())
    }

    /// Listado de vendedores (admin)
    pub async fn list_sellers(&self) -> Result<Vec<Seller>, ApiError> {
        self.gateway.call(SELLERS, HttpMethod::Get).await
    }

    pub async fn create_seller(&self, body: &SellerCreate) -> Result<Seller, ApiError> {
        log::info!("🆕 [API] Creando vendedor {}", body.email);
        self.gateway.call_with_body(SELLERS, HttpMethod::Post, body).await
    }

    pub async fn delete_seller(&self, id: i64) -> Result<(), ApiError> {
        log::info!("🗑️ [API] Eliminando vendedor {}", id);
        self.gateway
            .call::<serde_json::Value>(&format!("/sellers/{}", id), HttpMethod::Delete)
            .await
            .map(|_| ())
    }
}

fn totem_path(id: &str) -> String {
    format!("/totems/{}", id)
}

/// Query de GET /api/v1/payments/me
#[derive(Clone, Debug, PartialEq)]
pub struct PaymentsQuery {
    pub skip: u32,
    pub limit: u32,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

impl PaymentsQuery {
    pub fn to_path(&self) -> String {
        let mut url = format!("{}?skip={}&limit={}", PAYMENTS_ME, self.skip, self.limit);
        if let Some(start) = &self.start_date {
            url.push_str(&format!("&start_date={}", start));
        }
        if let Some(end) = &self.end_date {
            url.push_str(&format!("&end_date={}", end));
        }
        url
    }
}
