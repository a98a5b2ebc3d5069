//! Backend configuration from TOML (`[backend]` section)

use crate::providers::{DEFAULT_OLLAMA_MODEL, DEFAULT_OLLAMA_URL, DEFAULT_REQUEST_TIMEOUT};
use chamber_domain::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Which decision backend drives the roll call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BackendKind {
    /// Offline ideology heuristic with template speeches
    #[default]
    Heuristic,
    /// Language model through the Ollama gateway
    Llm,
}

impl BackendKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BackendKind::Heuristic => "heuristic",
            BackendKind::Llm => "llm",
        }
    }
}

impl std::str::FromStr for BackendKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "heuristic" | "template" => Ok(BackendKind::Heuristic),
            "llm" | "ollama" | "inference" => Ok(BackendKind::Llm),
            other => Err(format!("unknown backend kind: {other}")),
        }
    }
}

impl std::fmt::Display for BackendKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw backend configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileBackendConfig {
    /// `heuristic` or `llm`
    pub kind: String,
    pub model: String,
    pub base_url: String,
    pub request_timeout_secs: u64,
    /// With `kind = "llm"`: let the model write speeches too
    pub llm_speeches: bool,
    /// With `kind = "llm"`: let the model draft amendments too
    pub llm_amendments: bool,
}

impl Default for FileBackendConfig {
    fn default() -> Self {
        Self {
            kind: BackendKind::default().as_str().to_string(),
            model: DEFAULT_OLLAMA_MODEL.to_string(),
            base_url: DEFAULT_OLLAMA_URL.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT.as_secs(),
            llm_speeches: true,
            llm_amendments: true,
        }
    }
}

impl FileBackendConfig {
    /// Parse `kind`, falling back to the heuristic backend on unknown values.
    pub fn parse_kind(&self) -> (BackendKind, Vec<ConfigIssue>) {
        match self.kind.parse() {
            Ok(kind) => (kind, vec![]),
            Err(_) => (
                BackendKind::Heuristic,
                vec![ConfigIssue::warning(
                    ConfigIssueCode::UnknownBackendKind,
                    format!(
                        "backend.kind: unknown value '{}', falling back to 'heuristic' (valid: heuristic, llm)",
                        self.kind
                    ),
                )],
            ),
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = self.parse_kind().1;
        if self.request_timeout_secs == 0 {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::TimeoutZero,
                "backend.request_timeout_secs must be greater than zero",
            ));
        }
        issues
    }
}
