// ============================================================================
// BROWSER - Implementaciones reales de las costuras de plataforma
// ============================================================================

use std::rc::Rc;
use crate::config::AppConfig;
use crate::services::platform::{Confirmer, Navigator, Platform, TokenStore};
use crate::services::toast_service::DomToaster;
use crate::services::transport::GlooTransport;
use crate::utils::constants::ACCESS_TOKEN_KEY;
use crate::utils::storage::{load_raw_from_storage, remove_from_storage};

/// Token en localStorage (lo escribe la página de login)
#[derive(Clone, Default)]
pub struct BrowserTokenStore;

impl TokenStore for BrowserTokenStore {
    fn token(&self) -> Option<String> {
        load_raw_from_storage(ACCESS_TOKEN_KEY).filter(|t| !t.is_empty())
    }

    fn clear(&self) {
        if let Err(e) = remove_from_storage(ACCESS_TOKEN_KEY) {
            log::error!("❌ Error borrando token: {}", e);
        }
    }
}

#[derive(Clone, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn redirect(&self, url: &str) {
        let Some(window) = web_sys::window() else {
            log::error!("❌ No window, imposible redirigir a {}", url);
            return;
        };
        if let Err(e) = window.location().set_href(url) {
            log::error!("❌ Error redirigiendo a {}: {:?}", url, e);
        }
    }
}

#[derive(Clone, Default)]
pub struct BrowserConfirmer;

impl Confirmer for BrowserConfirmer {
    fn confirm(&self, message: &str) -> bool {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
}

impl Platform {
    /// Dependencias reales del navegador
    pub fn browser(config: &AppConfig) -> Self {
        Self {
            transport: Rc::new(GlooTransport::new()),
            tokens: Rc::new(BrowserTokenStore),
            navigator: Rc::new(BrowserNavigator),
            confirmer: Rc::new(BrowserConfirmer),
            toasts: Rc::new(DomToaster::new(config.toast.clone())),
        }
    }
}
