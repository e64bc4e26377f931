// Claves de storage y textos de la UI

/// Token escrito por la página de login
pub const ACCESS_TOKEN_KEY: &str = "access_token";

// Tótems
pub const MSG_TOTEM_CREATED: &str = "Tótem creado con éxito.";
pub const MSG_TOTEM_UPDATED: &str = "Tótem actualizado con éxito.";
pub const MSG_TOTEM_DELETED: &str = "Tótem eliminado con éxito.";
pub const CONFIRM_DELETE_TOTEM: &str = "¿Estás seguro de que quieres eliminar este tótem?";
pub const TITLE_CREATE_TOTEM: &str = "Añadir Nuevo Tótem";
pub const TITLE_EDIT_TOTEM: &str = "Editar Tótem";
pub const EMPTY_TOTEMS_TITLE: &str = "Aún no tienes tótems";
pub const EMPTY_TOTEMS_SUBTITLE: &str = "¡Añade tu primer tótem para empezar a operar!";

// Mercado Pago
pub const MSG_MP_DISCONNECTED: &str = "Cuenta de Mercado Pago desconectada.";
pub const CONFIRM_MP_DISCONNECT: &str = "¿Estás seguro de que quieres desconectar tu cuenta de Mercado Pago?";

// Vendedores (admin)
pub const MSG_SELLER_CREATED: &str = "Vendedor creado con éxito.";
pub const MSG_SELLER_DELETED: &str = "Vendedor eliminado con éxito.";
pub const CONFIRM_DELETE_SELLER: &str = "¿Estás seguro de que quieres eliminar este vendedor?";

// Pagos
pub const EMPTY_PAYMENTS_TITLE: &str = "No hay pagos en este periodo";

/// Clases de botones y badges compartidas por las vistas
pub mod styles {
    pub const BTN_PRIMARY: &str = "bg-brand text-white font-semibold py-2 px-4 rounded-md shadow-sm hover:opacity-90 transition-opacity";
    pub const BTN_SECONDARY: &str = "bg-white text-dark font-semibold py-2 px-4 rounded-md border border-dark hover:bg-neutral-100 transition-colors";
    pub const BTN_DANGER: &str = "bg-danger text-white font-semibold py-2 px-4 rounded-md shadow-sm hover:opacity-90 transition-opacity";
    pub const BTN_SM: &str = "py-1 px-2 text-sm";
    pub const BADGE_BRAND: &str = "py-1 px-3 text-xs font-bold rounded-full bg-brand text-white";
    pub const BADGE_NEUTRAL: &str = "py-1 px-3 text-xs font-bold rounded-full bg-medium-gray text-white";
    pub const BADGE_APPROVED: &str = "py-1 px-3 text-xs font-bold rounded-full bg-green-100 text-green-800";
    pub const BADGE_OTHER: &str = "py-1 px-3 text-xs font-bold rounded-full bg-gray-100 text-gray-800";
}
