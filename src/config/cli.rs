use crate::config::locale::Locale;
use crate::config::toml_config::TomlConfig;
use crate::config::{OutputFormat, Settings};
use crate::utils::error::Result;
use crate::utils::validation::{validate_attempt_cap, validate_settings_path, Validate};
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "segment-intersect")]
#[command(about = "Reads two segments from stdin and prints their intersection")]
pub struct CliConfig {
    /// Path to a TOML settings file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Language for prompts and results
    #[arg(short, long, value_enum)]
    pub locale: Option<Locale>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Give up after this many invalid entries for one value
    #[arg(long)]
    pub max_attempts: Option<usize>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Loads the settings file, if any, and layers the flags over it.
    pub fn resolve(&self) -> Result<Settings> {
        let file = match &self.config {
            Some(path) => TomlConfig::from_file(path)?,
            None => TomlConfig::default(),
        };
        let overrides = TomlConfig {
            locale: self.locale,
            output: self.output,
            max_attempts: self.max_attempts,
        };
        let settings = Settings::merge(&file, &overrides);
        tracing::debug!("Resolved settings: {:?}", settings);
        Ok(settings)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config {
            validate_settings_path("config", path)?;
        }
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
    fn test_parse_flags() {
        let cli = CliConfig::parse_from([
            "segment-intersect",
            "--locale",
            "ru",
            "-o",
            "json",
            "--max-attempts",
            "4",
            "-v",
        ]);
        assert_eq!(cli.locale, Some(Locale::Ru));
        assert_eq!(cli.output, Some(OutputFormat::Json));
        assert_eq!(cli.max_attempts, Some(4));
        assert!(cli.verbose);
        assert!(cli.validate().is_ok());

        let settings = cli.resolve().unwrap();
        assert_eq!(settings.locale, Locale::Ru);
        assert_eq!(settings.max_attempts, Some(4));
    }

    #[test]
    fn test_zero_attempts_is_invalid() {
        let cli = CliConfig::parse_from(["segment-intersect", "--max-attempts", "0"]);
        assert!(cli.validate().is_err());
    }

    #[test]
    fn test_missing_settings_file() {
        let cli = CliConfig::parse_from(["segment-intersect", "-c", "/nonexistent/settings.toml"]);
        assert!(cli.resolve().is_err());
    }
}
