// UI models
use clap::ValueEnum;

/// How a validation report is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Coloured report with numbered issues
    #[default]
    Text,
    /// Pretty-printed JSON of the validation result
    Json,
}
