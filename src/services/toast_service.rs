// ============================================================================
// TOAST SERVICE - Notificaciones transitorias (fire-and-forget)
// ============================================================================
// append → +enter_delay "show" → +duration quitar "show" → +exit quitar nodo
// Sin cola ni deduplicación: los toasts se apilan por orden en el DOM.
// ============================================================================

use gloo_timers::callback::Timeout;
use crate::config::ToastConfig;
use crate::dom::{add_class, append_child, get_element_by_id, remove_class, ElementBuilder};
use crate::services::platform::{ToastKind, ToastSink};

pub const TOAST_CONTAINER_ID: &str = "toast-container";

#[derive(Clone)]
pub struct DomToaster {
    timing: ToastConfig,
}

impl DomToaster {
    pub fn new(timing: ToastConfig) -> Self {
        Self { timing }
    }
}

impl ToastSink for DomToaster {
    fn show(&self, message: &str, kind: ToastKind) {
        let Some(container) = get_element_by_id(TOAST_CONTAINER_ID) else {
            log::warn!("⚠️ [TOAST] Sin #{}: {}", TOAST_CONTAINER_ID, message);
            return;
        };

        let toast = match ElementBuilder::new("div") {
            Ok(builder) => builder
                .class(&format!("toast {} text-white py-2 px-4 rounded-md shadow-lg", kind.css_class()))
                .text(message)
                .build(),
            Err(e) => {
                log::error!("❌ [TOAST] Error creando toast: {:?}", e);
                return;
            }
        };

        if let Err(e) = append_child(&container, &toast) {
            log::error!("❌ [TOAST] Error insertando toast: {:?}", e);
            return;
        }

        // Clase "show" un poco después para que aplique la transición CSS
        {
            let toast = toast.clone();
            Timeout::new(self.timing.enter_delay_ms, move || {
                let _ = add_class(&toast, "show");
            })
            .forget();
        }

        let exit_ms = self.timing.exit_ms;
        Timeout::new(self.timing.duration_ms, move || {
            let _ = remove_class(&toast, "show");
            Timeout::new(exit_ms, move || toast.remove()).forget();
        })
        .forget();
    }
}
