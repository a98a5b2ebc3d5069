//! Core domain concepts shared across all subdomains.
//!
//! - [`rng::SeededRng`]: the single deterministic random stream owned by a run
//! - [`error::DomainError`]: domain-level errors

pub mod error;
pub mod rng;
