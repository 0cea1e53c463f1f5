pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use config::{locale::Locale, OutputFormat, Settings};
pub use crate::core::{input::NumberReader, session::Session};
pub use domain::{model::IntersectionReport, segment::Segment};
pub use utils::error::{Result, SegmentError};
