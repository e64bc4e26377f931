pub mod layout;
pub mod user_info;
pub mod totems_table;
pub mod payments_table;
pub mod totem_modal;
pub mod sellers_panel;

pub use layout::{region_id, render_layout};
pub use user_info::render_user_info;
pub use totems_table::render_totems_table;
pub use payments_table::render_payments_table;
pub use totem_modal::{render_totem_modal, TOTEM_POS_INPUT};
pub use sellers_panel::render_sellers_panel;
