#[cfg(feature = "cli")]
pub mod cli;
pub mod locale;
pub mod toml_config;

use crate::domain::ports::SettingsProvider;
use locale::Locale;
use serde::{Deserialize, Serialize};
use toml_config::TomlConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Prompts plus one line per segment.
    #[default]
    Text,
    /// No prompts, a single JSON report on stdout.
    Json,
}

/// Effective settings after merging the settings file with command-line flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Settings {
    pub locale: Locale,
    pub output: OutputFormat,
    pub max_attempts: Option<usize>,
}

impl Settings {
    /// Applies `overrides` on top of `file`; `None` fields fall through.
    pub fn merge(file: &TomlConfig, overrides: &TomlConfig) -> Self {
        Self {
            locale: overrides.locale.or(file.locale).unwrap_or_default(),
            output: overrides.output.or(file.output).unwrap_or_default(),
            max_attempts: overrides.max_attempts.or(file.max_attempts),
        }
    }
}

impl SettingsProvider for Settings {
    fn locale(&self) -> Locale {
        self.locale
    }

    fn output_format(&self) -> OutputFormat {
        self.output
    }

    fn max_attempts(&self) -> Option<usize> {
        self.max_attempts
    }
}
