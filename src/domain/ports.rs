use crate::config::locale::Locale;
use crate::config::OutputFormat;

/// Settings the interactive session depends on, whichever layer they came from.
pub trait SettingsProvider {
    fn locale(&self) -> Locale;
    fn output_format(&self) -> OutputFormat;
    /// `None` keeps re-prompting forever.
    fn max_attempts(&self) -> Option<usize>;
}
