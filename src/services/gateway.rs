// ============================================================================
// API GATEWAY - Auth bearer + clasificación de errores + toasts
// ============================================================================
// Todas las llamadas REST pasan por aquí:
// - 401 → borra token, redirige a login, SIN toast
// - no-2xx → toast con `detail` y Err(RequestFailed)
// - red / JSON inválido → toast y Err
// ============================================================================

use std::rc::Rc;
use serde::de::DeserializeOwned;
use serde::Serialize;
use crate::services::error::ApiError;
use crate::services::platform::{Navigator, ToastKind, ToastSink, TokenStore};
use crate::services::transport::{HttpMethod, HttpRequest, Transport};

#[derive(Clone)]
pub struct Gateway {
    transport: Rc<dyn Transport>,
    tokens: Rc<dyn TokenStore>,
    navigator: Rc<dyn Navigator>,
    toasts: Rc<dyn ToastSink>,
    base_url: String,
    login_path: String,
}

impl Gateway {
    pub fn new(
        transport: Rc<dyn Transport>,
        tokens: Rc<dyn TokenStore>,
        navigator: Rc<dyn Navigator>,
        toasts: Rc<dyn ToastSink>,
        base_url: impl Into<String>,
        login_path: impl Into<String>,
    ) -> Self {
        Self {
            transport,
            tokens,
            navigator,
            toasts,
            base_url: base_url.into(),
            login_path: login_path.into(),
        }
    }

    /// Llamada sin body
    pub async fn call<T: DeserializeOwned>(&self, endpoint: &str, method: HttpMethod) -> Result<T, ApiError> {
        self.execute(endpoint, method, None).await
    }

    /// Llamada con body JSON
    pub async fn call_with_body<T, B>(&self, endpoint: &str, method: HttpMethod, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let json = match serde_json::to_string(body) {
            Ok(json) => json,
            Err(e) => return Err(self.notify(ApiError::Decode(format!("Serialization error: {}", e)))),
        };
        self.execute(endpoint, method, Some(json)).await
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        method: HttpMethod,
        body: Option<String>,
    ) -> Result<T, ApiError> {
        match self.send(endpoint, method, body).await {
            Ok(value) => Ok(value),
            Err(e) => Err(self.notify(e)),
        }
    }

    async fn send<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        method: HttpMethod,
        body: Option<String>,
    ) -> Result<T, ApiError> {
        let mut headers = Vec::new();
        // Sin token no se manda "Bearer null": el backend responde 401 igual
        if let Some(token) = self.tokens.token() {
            headers.push(("Authorization".to_string(), format!("Bearer {}", token)));
        }
        if body.is_some() {
            headers.push(("Content-Type".to_string(), "application/json".to_string()));
        }

        let request = HttpRequest {
            method,
            url: format!("{}{}", self.base_url, endpoint),
            headers,
            body,
        };

        log::debug!("🌐 [API] {} {}", method.as_str(), endpoint);

        let response = self
            .transport
            .send(request)
            .await
            .map_err(ApiError::Network)?;

        if response.status == 401 {
            log::warn!("🔒 [API] 401 en {} - sesión expirada, redirigiendo a login", endpoint);
            self.tokens.clear();
            self.navigator.redirect(&self.login_path);
            return Err(ApiError::AuthExpired);
        }

        if !response.ok() {
            return Err(ApiError::from_error_body(response.status, &response.body));
        }

        // 204 / body vacío → null (sirve para serde_json::Value y Option<T>)
        let text = if response.body.trim().is_empty() { "null" } else { response.body.as_str() };
        serde_json::from_str::<T>(text).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Toast de error como efecto secundario (excepto 401)
    fn notify(&self, error: ApiError) -> ApiError {
        if !error.is_silent() {
            log::error!("❌ [API] {}", error);
            self.toasts.show(&error.to_string(), ToastKind::Error);
        }
        error
    }
}
