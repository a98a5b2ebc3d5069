//! Application-level configuration.
//!
//! - [`SimulationParams`]: chamber size, round budget and voting loop control

pub mod simulation_params;

pub use simulation_params::SimulationParams;
