//! Fakes de plataforma y transporte para tests nativos (sin navegador).

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;
use async_trait::async_trait;
use crate::services::platform::{Confirmer, Navigator, ToastKind, ToastSink, TokenStore};
use crate::services::transport::{HttpMethod, HttpRequest, HttpResponse, Transport};

struct Route {
    method: HttpMethod,
    path: String,
    status: u16,
    body: String,
}

/// Transporte en memoria: rutas persistentes + cola de respuestas sueltas
#[derive(Default)]
pub struct FakeTransport {
    routes: RefCell<Vec<Route>>,
    queue: RefCell<VecDeque<Result<HttpResponse, String>>>,
    sent: RefCell<Vec<HttpRequest>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Respuesta para cualquier request cuyo path (sin query) coincida
    pub fn route(&self, method: HttpMethod, path: &str, status: u16, body: &str) {
        // La última ruta registrada gana
        self.routes.borrow_mut().insert(
            0,
            Route {
                method,
                path: path.to_string(),
                status,
                body: body.to_string(),
            },
        );
    }

    /// Encolar una respuesta para la próxima request sin ruta
    pub fn respond(&self, status: u16, body: &str) {
        self.queue.borrow_mut().push_back(Ok(HttpResponse {
            status,
            body: body.to_string(),
        }));
    }

    /// Encolar un fallo de transporte
    pub fn fail(&self, message: &str) {
        self.queue.borrow_mut().push_back(Err(message.to_string()));
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.sent.borrow().clone()
    }

    /// (método, url) de cada request enviada, en orden
    pub fn calls(&self) -> Vec<(HttpMethod, String)> {
        self.sent
            .borrow()
            .iter()
            .map(|r| (r.method, r.url.clone()))
            .collect()
    }
}

#[async_trait(?Send)]
impl Transport for FakeTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, String> {
        self.sent.borrow_mut().push(request.clone());
        let path = request.url.split('?').next().unwrap_or_default();
        if let Some(route) = self
            .routes
            .borrow()
            .iter()
            .find(|r| r.method == request.method && r.path == path)
        {
            return Ok(HttpResponse {
                status: route.status,
                body: route.body.clone(),
            });
        }
        self.queue
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(format!("sin respuesta para {}", request.url)))
    }
}

#[derive(Default)]
pub struct FakeTokenStore {
    token: RefCell<Option<String>>,
}

impl TokenStore for FakeTokenStore {
    fn token(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    fn clear(&self) {
        *self.token.borrow_mut() = None;
    }
}

#[derive(Default)]
pub struct FakeNavigator {
    redirects: RefCell<Vec<String>>,
}

impl FakeNavigator {
    pub fn redirects(&self) -> Vec<String> {
        self.redirects.borrow().clone()
    }
}

impl Navigator for FakeNavigator {
    fn redirect(&self, url: &str) {
        self.redirects.borrow_mut().push(url.to_string());
    }
}

pub struct FakeConfirmer {
    answer: Cell<bool>,
    asked: RefCell<Vec<String>>,
}

impl FakeConfirmer {
    pub fn answer(&self, value: bool) {
        self.answer.set(value);
    }

    pub fn asked(&self) -> Vec<String> {
        self.asked.borrow().clone()
    }
}

impl Default for FakeConfirmer {
    fn default() -> Self {
        Self {
            answer: Cell::new(true),
            asked: RefCell::new(Vec::new()),
        }
    }
}

impl Confirmer for FakeConfirmer {
    fn confirm(&self, message: &str) -> bool {
        self.asked.borrow_mut().push(message.to_string());
        self.answer.get()
    }
}

#[derive(Default)]
pub struct FakeToasts {
    shown: RefCell<Vec<(String, ToastKind)>>,
}

impl FakeToasts {
    pub fn messages(&self) -> Vec<(String, ToastKind)> {
        self.shown.borrow().clone()
    }

    pub fn errors(&self) -> usize {
        self.shown
            .borrow()
            .iter()
            .filter(|(_, kind)| *kind == ToastKind::Error)
            .count()
    }
}

impl ToastSink for FakeToasts {
    fn show(&self, message: &str, kind: ToastKind) {
        self.shown.borrow_mut().push((message.to_string(), kind));
    }
}

#[derive(Clone, Default)]
pub struct FakePlatform {
    pub tokens: Rc<FakeTokenStore>,
    pub navigator: Rc<FakeNavigator>,
    pub confirmer: Rc<FakeConfirmer>,
    pub toasts: Rc<FakeToasts>,
}

impl FakePlatform {
    pub fn with_token(token: &str) -> Self {
        let platform = Self::default();
        *platform.tokens.token.borrow_mut() = Some(token.to_string());
        platform
    }
}

/// JSON de `/sellers/me` con los tótems dados
pub fn seller_json(id: i64, role: &str, totems: &[(i64, &str)]) -> String {
    let totems: Vec<serde_json::Value> = totems
        .iter()
        .map(|(tid, pos)| {
            serde_json::json!({
                "id": tid,
                "external_pos_id": pos,
                "location": null,
                "is_active": true,
                "owner_id": id,
            })
        })
        .collect();
    serde_json::json!({
        "id": id,
        "name": "Ana",
        "email": "ana@example.com",
        "role": role,
        "mp_access_token": null,
        "totems": totems,
    })
    .to_string()
}

/// JSON de una página de `n` pagos aprobados
pub fn payments_json(n: usize) -> String {
    let items: Vec<serde_json::Value> = (0..n)
        .map(|i| {
            serde_json::json!({
                "payment_time": "2024-05-01T12:00:00",
                "ticket_code": format!("T-{}", i),
                "external_pos_id": "POS-1",
                "amount": "10.00",
                "status": "approved",
            })
        })
        .collect();
    serde_json::Value::Array(items).to_string()
}
