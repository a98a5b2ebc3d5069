//! District and bill sources
//!
//! Plain files on disk plus the embedded sample chamber used when no
//! district file is given.

mod bill;
mod districts;

pub use bill::{bill_from_parts, load_bill};
pub use districts::{load_districts, parse_districts, sample_districts};

use std::path::PathBuf;
use thiserror::Error;

/// Errors reading district or bill files.
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {origin}: {source}")]
    Json {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid TOML in {origin}: {source}")]
    Toml {
        origin: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("{0} contains no districts")]
    NoDistricts(String),

    #[error("bill {0} must not be empty")]
    EmptyField(&'static str),
}

impl SourceError {
    fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SourceError::Io {
            path: path.into(),
            source,
        }
    }
}
