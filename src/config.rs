// ============================================================================
// CONFIG - Configuración de la app en tiempo de compilación
// ============================================================================
// Los valores vienen de `option_env!` (build.rs carga `.env` si existe).
// ============================================================================

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Prefijo para todas las llamadas REST. Vacío = mismo origen.
    pub backend_url: String,
    /// Ruta de login a la que se redirige sin token o tras un 401
    pub login_path: String,
    pub enable_logging: bool,
    pub payments: PaymentsConfig,
    pub toast: ToastConfig,
    pub features: FeatureFlags,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentsConfig {
    pub per_page: u32,
}

impl Default for PaymentsConfig {
    fn default() -> Self {
        Self { per_page: 10 }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToastConfig {
    pub enter_delay_ms: u32,
    pub duration_ms: u32,
    pub exit_ms: u32,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            enter_delay_ms: 10,
            duration_ms: 3000,
            exit_ms: 300,
        }
    }
}

/// Secciones opcionales del dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureFlags {
    /// Panel de administración de vendedores (solo para rol admin)
    pub admin_panel: bool,
    /// Tabla de pagos con paginación y filtros
    pub payments: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            admin_panel: true,
            payments: true,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url: String::new(),
            login_path: "/".to_string(),
            enable_logging: true,
            payments: PaymentsConfig::default(),
            toast: ToastConfig::default(),
            features: FeatureFlags::default(),
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            backend_url: option_env!("BACKEND_URL")
                .map(|s| s.trim_end_matches('/').to_string())
                .unwrap_or(defaults.backend_url),
            login_path: option_env!("LOGIN_PATH")
                .map(|s| s.to_string())
                .unwrap_or(defaults.login_path),
            enable_logging: parse_or(option_env!("ENABLE_LOGGING"), defaults.enable_logging),
            payments: PaymentsConfig {
                // per_page = 0 rompería el cálculo de skip y la heurística de "siguiente"
                per_page: parse_or(option_env!("PAYMENTS_PER_PAGE"), defaults.payments.per_page).max(1),
            },
            toast: ToastConfig {
                enter_delay_ms: parse_or(option_env!("TOAST_ENTER_DELAY_MS"), defaults.toast.enter_delay_ms),
                duration_ms: parse_or(option_env!("TOAST_DURATION_MS"), defaults.toast.duration_ms),
                exit_ms: parse_or(option_env!("TOAST_EXIT_MS"), defaults.toast.exit_ms),
            },
            features: FeatureFlags {
                admin_panel: parse_or(option_env!("FEATURE_ADMIN_PANEL"), defaults.features.admin_panel),
                payments: parse_or(option_env!("FEATURE_PAYMENTS"), defaults.features.payments),
            },
        }
    }

    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }
}

fn parse_or<T: std::str::FromStr>(raw: Option<&str>, default: T) -> T {
    raw.and_then(|v| v.trim().parse().ok()).unwrap_or(default)
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}
