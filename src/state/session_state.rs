// ============================================================================
// SESSION STATE - Usuario actual y visibilidad de tokens de Mercado Pago
// ============================================================================

use crate::models::Seller;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenField {
    Access,
    Refresh,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    /// `None` hasta que responde GET /sellers/me
    pub user: Option<Seller>,
    pub reveal_access_token: bool,
    pub reveal_refresh_token: bool,
}

impl SessionState {
    pub fn user_id(&self) -> Option<i64> {
        self.user.as_ref().map(|u| u.id)
    }

    pub fn is_admin(&self) -> bool {
        self.user.as_ref().map(|u| u.is_admin()).unwrap_or(false)
    }

    pub fn is_revealed(&self, field: TokenField) -> bool {
        match field {
            TokenField::Access => self.reveal_access_token,
            TokenField::Refresh => self.reveal_refresh_token,
        }
    }

    pub fn toggle_reveal(&mut self, field: TokenField) {
        match field {
            TokenField::Access => self.reveal_access_token = !self.reveal_access_token,
            TokenField::Refresh => self.reveal_refresh_token = !self.reveal_refresh_token,
        }
    }

    /// Tras desconectar Mercado Pago: sin tokens y enmascarado otra vez
    pub fn clear_mp_link(&mut self) {
        if let Some(user) = self.user.as_mut() {
            user.clear_mp_link();
        }
        self.reveal_access_token = false;
        self.reveal_refresh_token = false;
    }
}
