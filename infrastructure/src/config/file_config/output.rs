//! `[output]`: how a finished run is shown

use chamber_domain::OutputFormat;
use serde::{Deserialize, Serialize};

/// Display settings read from the config file.
///
/// `-o`, `-q` and a non-terminal stdout all override these at startup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Result layout; `full` when neither the file nor `-o` names one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<OutputFormat>,
    pub color: bool,
    /// Live round and roll-call progress on stderr
    pub progress: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            color: true,
            progress: true,
        }
    }
}
