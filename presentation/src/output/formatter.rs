//! Output formatter trait

use chamber_domain::{OutputFormat, SimulationResult};

/// Trait for formatting simulation results
pub trait OutputFormatter {
    /// Every round in detail
    fn format(&self, result: &SimulationResult) -> String;

    /// Format as JSON
    fn format_json(&self, result: &SimulationResult) -> String;

    /// One line per round plus the outcome
    fn format_summary(&self, result: &SimulationResult) -> String;

    fn render(&self, result: &SimulationResult, format: OutputFormat) -> String {
        match format {
            OutputFormat::Full => self.format(result),
            OutputFormat::Summary => self.format_summary(result),
            OutputFormat::Json => self.format_json(result),
        }
    }
}
