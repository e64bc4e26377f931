pub mod error;
pub mod platform;
pub mod transport;
pub mod gateway;
pub mod api_client;
pub mod browser;
pub mod toast_service;

pub use error::ApiError;
pub use platform::{Confirmer, Navigator, Platform, ToastKind, ToastSink, TokenStore};
pub use transport::{GlooTransport, HttpMethod, Transport};
pub use gateway::Gateway;
pub use api_client::{ApiClient, PaymentsQuery};
