pub mod controller;
pub mod shared;

pub use controller::{DashboardController, SessionContext};
pub use shared::{SharedHistory, ViewModel};
