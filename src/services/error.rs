// ============================================================================
// API ERROR - Clasificación de fallos del gateway
// ============================================================================

use thiserror::Error;

/// Mensaje cuando el backend no envía `detail`
pub const GENERIC_ERROR_MESSAGE: &str = "Ocurrió un error en la petición.";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// 401: token borrado y redirección a login. Nunca se muestra toast.
    #[error("Sesión expirada")]
    AuthExpired,
    /// Respuesta no-2xx con mensaje para el usuario
    #[error("{message}")]
    RequestFailed { status: u16, message: String },
    /// Fallo de transporte (fetch rechazado, CORS, offline...)
    #[error("Error de red: {0}")]
    Network(String),
    /// Respuesta 2xx que no se pudo decodificar
    #[error("Respuesta inválida del servidor: {0}")]
    Decode(String),
}

impl ApiError {
    /// true para fallos que no deben notificarse (la página ya está redirigiendo)
    pub fn is_silent(&self) -> bool {
        matches!(self, ApiError::AuthExpired)
    }

    /// Construir `RequestFailed` a partir del body de error del backend
    pub fn from_error_body(status: u16, body: &str) -> Self {
        ApiError::RequestFailed {
            status,
            message: detail_message(body).unwrap_or_else(|| GENERIC_ERROR_MESSAGE.to_string()),
        }
    }
}

/// Extrae el campo `detail` de un body JSON de error.
/// FastAPI manda un string o, en errores de validación, una lista de `{ msg }`.
fn detail_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        serde_json::Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        serde_json::Value::Array(items) => {
            let msgs: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(|m| m.as_str()))
                .collect();
            if msgs.is_empty() {
                None
            } else {
                Some(msgs.join("; "))
            }
        }
        _ => None,
    }
}
