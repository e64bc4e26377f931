// ============================================================================
// TRANSPORT - SOLO envío HTTP (sin auth, sin clasificación de errores)
// ============================================================================

use async_trait::async_trait;
use gloo_net::http::Request;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Patch,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Envío de una request. `Err` solo para fallos de transporte.
#[async_trait(?Send)]
pub trait Transport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, String>;
}

/// Transporte real sobre fetch (gloo-net)
#[derive(Clone, Default)]
pub struct GlooTransport;

impl GlooTransport {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait(?Send)]
impl Transport for GlooTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, String> {
        let mut builder = match request.method {
            HttpMethod::Get => Request::get(&request.url),
            HttpMethod::Post => Request::post(&request.url),
            HttpMethod::Patch => Request::patch(&request.url),
            HttpMethod::Delete => Request::delete(&request.url),
        };
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }

        let built = match request.body {
            Some(body) => builder.body(body),
            None => builder.build(),
        }
        .map_err(|e| format!("Request build error: {}", e))?;

        let response = built
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        let status = response.status();
        // Un body ilegible no es un fallo de red; el gateway decide qué hacer con ""
        let body = response.text().await.unwrap_or_default();

        Ok(HttpResponse { status, body })
    }
}
