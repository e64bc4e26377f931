use serde::{Deserialize, Serialize};

/// Respuesta de GET /mercadopago/authorize-url
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct AuthorizeUrlResponse {
    pub authorization_url: String,
}
