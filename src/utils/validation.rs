use crate::utils::error::{Result, SegmentError};
use std::path::Path;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn invalid(field: &str, value: String, reason: &str) -> SegmentError {
    SegmentError::InvalidConfigValueError {
        field: field.to_string(),
        value,
        reason: reason.to_string(),
    }
}

/// The settings file path must name something that could be a file.
/// Whether it exists is left to the loader, which reports it with context.
pub fn validate_settings_path(field_name: &str, path: &Path) -> Result<()> {
    let shown = path.display().to_string();
    if shown.trim().is_empty() {
        return Err(invalid(field_name, shown, "settings path is empty"));
    }
    if path.is_dir() {
        return Err(invalid(field_name, shown, "settings path is a directory, expected a .toml file"));
    }
    Ok(())
}

/// A retry cap of zero would reject input before the first prompt.
pub fn validate_attempt_cap(field_name: &str, cap: usize) -> Result<()> {
    if cap == 0 {
        return Err(invalid(
            field_name,
            cap.to_string(),
            "must allow at least one attempt; omit it to retry forever",
        ));
    }
    Ok(())
}
