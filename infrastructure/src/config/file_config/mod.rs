//! Raw TOML configuration data types
//!
//! These structs mirror the structure of the TOML config file. They are
//! deserialized directly and use domain types where appropriate.

mod backend;
mod logging;
mod output;
mod simulation;

pub use backend::{BackendKind, FileBackendConfig};
pub use logging::FileLoggingConfig;
pub use output::FileOutputConfig;
pub use simulation::{
    FileSimulationConfig, MAX_MEMBERS, MAX_ROUNDS, RECOMMENDED_MAX_ROUNDS, RECOMMENDED_MEMBERS,
};

use chamber_application::SimulationParams;
use chamber_domain::ConfigIssue;
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Chamber size, round budget and voting loop
    pub simulation: FileSimulationConfig,
    /// Decision backend selection and inference transport
    pub backend: FileBackendConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Transcript and diagnostics destinations
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = self.simulation.validate();
        issues.extend(self.backend.validate());
        issues
    }

    pub fn has_errors(&self) -> bool {
        self.validate().iter().any(ConfigIssue::is_error)
    }

    pub fn to_params(&self) -> SimulationParams {
        self.simulation.to_params()
    }
}
