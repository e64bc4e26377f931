// ============================================================================
// APP STATE - Estado del dashboard (una sola generación por colección)
// ============================================================================
// Lo posee el controlador (`App`) como Rc<RefCell<_>>. Las mutaciones son
// reemplazos completos después de re-consultar el backend.
// ============================================================================

use crate::config::FeatureFlags;
use crate::models::{Seller, Totem};
use crate::state::{PaymentsCursor, SessionState, TotemModal};

#[derive(Clone, Debug)]
pub struct DashboardState {
    pub session: SessionState,
    /// Copia de `user.totems`; el backend no tiene listado propio
    pub totems: Vec<Totem>,
    pub payments: PaymentsCursor,
    /// Solo con panel de admin
    pub sellers: Vec<Seller>,
    pub modal: TotemModal,
    pub features: FeatureFlags,
}

impl DashboardState {
    pub fn new(per_page: u32, features: FeatureFlags) -> Self {
        Self {
            session: SessionState::default(),
            totems: Vec::new(),
            payments: PaymentsCursor::new(per_page),
            sellers: Vec::new(),
            modal: TotemModal::default(),
            features,
        }
    }

    /// Reemplaza usuario y tótems con la respuesta de /sellers/me
    pub fn set_user(&mut self, user: Seller) {
        self.totems = user.totems.clone();
        self.session.user = Some(user);
    }

    pub fn find_totem(&self, id: i64) -> Option<&Totem> {
        self.totems.iter().find(|t| t.id == id)
    }

    /// Panel de vendedores: flag activo y usuario admin
    pub fn show_admin_panel(&self) -> bool {
        self.features.admin_panel && self.session.is_admin()
    }
}
