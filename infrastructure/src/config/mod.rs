//! Configuration file loading for chamber-sim
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `--config <path>` specified file
//! 2. Project root: `./chamber.toml` or `./.chamber.toml`
//! 3. Global: `$XDG_CONFIG_HOME/chamber-sim/config.toml`
//! 4. Environment: `CHAMBER_SIMULATION__ROUNDS=5` style overrides
//! 5. Default values
//!
//! CLI flags are applied on top by the binary.

mod file_config;
mod loader;

pub use file_config::{
    BackendKind, FileBackendConfig, FileConfig, FileLoggingConfig, FileOutputConfig,
    FileSimulationConfig, MAX_MEMBERS, MAX_ROUNDS, RECOMMENDED_MAX_ROUNDS, RECOMMENDED_MEMBERS,
};
pub use loader::{ConfigLoader, ENV_PREFIX, PROJECT_CONFIG_FILES};
