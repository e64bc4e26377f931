// ============================================================================
// INTENTS - Eventos de UI tipados (flujo unidireccional)
// ============================================================================

use crate::models::{SellerCreate, TotemForm};
use crate::state::TokenField;

#[derive(Clone, Debug, PartialEq)]
pub enum Intent {
    /// Carga inicial: usuario + tótems, pagos y (admin) vendedores
    Start,
    Logout,

    ConnectMercadoPago,
    DisconnectMercadoPago,
    ToggleTokenVisibility(TokenField),

    OpenCreateTotem,
    OpenEditTotem(i64),
    /// Cancelar o click en el backdrop
    CloseTotemModal,
    EscapePressed,
    SubmitTotemForm(TotemForm),
    DeleteTotem(i64),

    PaymentsPrevPage,
    PaymentsNextPage,
    /// Cambió cualquiera de los inputs de fecha
    PaymentsFilterChanged { start_date: String, end_date: String },

    SubmitSellerForm(SellerCreate),
    DeleteSeller(i64),
}

/// Región del DOM que debe re-renderizarse por completo
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Region {
    UserInfo,
    Totems,
    Payments,
    TotemModal,
    Sellers,
}
