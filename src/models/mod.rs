pub mod seller;
pub mod totem;
pub mod payment;
pub mod mercadopago;

pub use seller::{Seller, SellerCreate, SellerRole};
pub use totem::{Totem, TotemForm, TotemPayload};
pub use payment::Payment;
pub use mercadopago::AuthorizeUrlResponse;
