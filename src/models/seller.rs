use serde::{Deserialize, Serialize};
use super::totem::Totem;

/// Rol del vendedor. Cualquier valor desconocido se trata como vendedor normal.
#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "lowercase")]
pub enum SellerRole {
    Admin,
    #[default]
    #[serde(other)]
    Seller,
}

/// Vendedor (usuario de la sesión o fila del panel de admin)
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Seller {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub role: SellerRole,
    #[serde(default)]
    pub mp_access_token: Option<String>,
    #[serde(default)]
    pub mp_refresh_token: Option<String>,
    #[serde(default)]
    pub totems: Vec<Totem>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl Seller {
    /// Nombre a mostrar: `name` o, si está vacío, `email`
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            &self.email
        } else {
            &self.name
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == SellerRole::Admin
    }

    /// Cuenta de Mercado Pago vinculada
    pub fn is_mp_connected(&self) -> bool {
        self.mp_access_token
            .as_deref()
            .map(|t| !t.is_empty())
            .unwrap_or(false)
    }

    /// Olvidar localmente los tokens de Mercado Pago (tras desconectar)
    pub fn clear_mp_link(&mut self) {
        self.mp_access_token = None;
        self.mp_refresh_token = None;
    }
}

/// Body de POST /sellers/
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct SellerCreate {
    pub name: String,
    pub email: String,
    pub password: String,
}
