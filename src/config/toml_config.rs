use crate::config::locale::Locale;
use crate::config::OutputFormat;
use crate::utils::error::{Result, SegmentError};
use crate::utils::validation::{validate_attempt_cap, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Optional settings file. Every key may be omitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    pub locale: Option<Locale>,
    pub output: Option<OutputFormat>,
    pub max_attempts: Option<usize>,
}

impl TomlConfig {
    /// Loads and validates a settings file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| SegmentError::ConfigError {
            message: format!("cannot read '{}': {}", path.display(), e),
        })?;
        tracing::debug!("Loaded settings file {}", path.display());
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(|e| SegmentError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })?;
        config.validate()?;
        Ok(config)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(attempts) = self.max_attempts {
            validate_attempt_cap("max_attempts", attempts)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert_eq!(config, TomlConfig::default());
    }

    #[test]
    fn test_full_file() {
        let config = TomlConfig::from_toml_str(
            r#"
locale = "ru"
output = "json"
max_attempts = 5
"#,
        )
        .unwrap();
        assert_eq!(config.locale, Some(Locale::Ru));
        assert_eq!(config.output, Some(OutputFormat::Json));
        assert_eq!(config.max_attempts, Some(5));
    }

    #[test]
    fn test_rejects_unknown_keys_and_bad_values() {
        assert!(matches!(
            TomlConfig::from_toml_str("colour = \"red\""),
            Err(SegmentError::ConfigError { .. })
        ));
        assert!(matches!(
            TomlConfig::from_toml_str("locale = \"fr\""),
            Err(SegmentError::ConfigError { .. })
        ));
        assert!(matches!(
            TomlConfig::from_toml_str("max_attempts = 0"),
            Err(SegmentError::InvalidConfigValueError { .. })
        ));
    }
}
