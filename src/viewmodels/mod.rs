pub mod intent;
pub mod dashboard_viewmodel;

pub use intent::{Intent, Region};
pub use dashboard_viewmodel::DashboardViewModel;
