//! Presentation-level configuration
//!
//! Resolves how results are shown from CLI flags and the `[output]` file
//! section.

use crate::cli::commands::Cli;
use chamber_domain::OutputFormat;

/// Output settings after CLI flags are applied over the config file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Enable colored terminal output
    pub color: bool,
    /// Show live progress while the simulation runs
    pub show_progress: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Full,
            color: true,
            show_progress: true,
        }
    }
}

impl OutputConfig {
    /// Merge CLI flags over the file's settings.
    ///
    /// JSON output never shows progress, so stdout stays machine-readable.
    pub fn resolve(cli: &Cli, file: OutputConfig) -> Self {
        let format = cli.output.map(OutputFormat::from).unwrap_or(file.format);
        Self {
            format,
            color: file.color,
            show_progress: file.show_progress && !cli.quiet && format != OutputFormat::Json,
        }
    }
}
