//! Simulation domain
//!
//! The round state machine ([`SimulationPhase`]) and the records a run
//! produces ([`Round`], [`SimulationResult`]).

pub mod entities;
pub mod phase;

pub use entities::{Round, SimulationResult};
pub use phase::SimulationPhase;
