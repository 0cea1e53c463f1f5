pub mod input;
pub mod session;

pub use crate::domain::model::IntersectionReport;
pub use crate::domain::ports::SettingsProvider;
pub use crate::utils::error::Result;
