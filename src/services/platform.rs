// ============================================================================
// PLATFORM - Costuras con el navegador (storage, navegación, confirm, toasts)
// ============================================================================
// Las implementaciones reales están en `services::browser` y
// `services::toast_service`; los tests usan fakes.
// ============================================================================

use std::rc::Rc;
use crate::services::transport::Transport;

/// Token de acceso persistido (localStorage["access_token"])
pub trait TokenStore {
    fn token(&self) -> Option<String>;
    fn clear(&self);
}

/// Redirecciones de la página completa
pub trait Navigator {
    fn redirect(&self, url: &str);
}

/// Confirmación interactiva (window.confirm)
pub trait Confirmer {
    fn confirm(&self, message: &str) -> bool;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    pub fn css_class(&self) -> &'static str {
        match self {
            ToastKind::Success => "bg-brand",
            ToastKind::Error => "bg-danger",
        }
    }
}

/// Notificaciones transitorias
pub trait ToastSink {
    fn show(&self, message: &str, kind: ToastKind);
}

/// Conjunto de dependencias del navegador que reciben el gateway y el view model
#[derive(Clone)]
pub struct Platform {
    pub transport: Rc<dyn Transport>,
    pub tokens: Rc<dyn TokenStore>,
    pub navigator: Rc<dyn Navigator>,
    pub confirmer: Rc<dyn Confirmer>,
    pub toasts: Rc<dyn ToastSink>,
}
