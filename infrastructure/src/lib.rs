//! Infrastructure layer for chamber-sim
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer: the Ollama inference gateway, district and
//! bill file sources, run transcripts, and configuration file loading.

pub mod config;
pub mod logging;
pub mod providers;
pub mod sources;

// Re-export commonly used types
pub use config::{
    BackendKind, ConfigLoader, FileBackendConfig, FileConfig, FileLoggingConfig,
    FileOutputConfig, FileSimulationConfig,
};
pub use logging::JsonlRunLogger;
pub use providers::OllamaGateway;
pub use sources::{
    SourceError, bill_from_parts, load_bill, load_districts, parse_districts, sample_districts,
};
