// ============================================================================
// STATE MODULE - Estado explícito del dashboard (sin singletons)
// ============================================================================

pub mod app_state;
pub mod modal_state;
pub mod payments_state;
pub mod session_state;

pub use app_state::*;
pub use modal_state::*;
pub use payments_state::*;
pub use session_state::*;
