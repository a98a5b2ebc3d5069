//! Domain layer for chamber-sim
//!
//! This crate contains the core logic of the chamber simulator: entities,
//! value objects and pure functions. It performs no I/O and knows nothing
//! about inference transports, configuration files or terminals.
//!
//! # Core Concepts
//!
//! ## Chamber
//!
//! A fixed population of [`Member`]s is drawn once per run from weighted
//! [`District`]s using a [`SeededRng`]. Each member carries an ideology
//! anchored to its district's lean.
//!
//! ## Rounds
//!
//! Every round a small ideological cross-section speaks, the whole chamber
//! votes, and the [`VoteTally`] is reconciled so that no spokesperson votes
//! against their own speech. A failed round appends an amendment to the
//! [`Bill`] summary and the next round begins, until the bill passes or the
//! round budget runs out ([`SimulationPhase`]).
//!
//! ```
//! use chamber_domain::{SeededRng, District, sample_members, select_spokespeople};
//! use std::sync::Arc;
//!
//! let districts = vec![
//!     Arc::new(District::new("A", "North", 0.6, 750_000)),
//!     Arc::new(District::new("B", "South", -0.6, 750_000)),
//! ];
//! let mut rng = SeededRng::new(Some(42));
//! let members = sample_members(&districts, 50, 0.35, &mut rng).unwrap();
//! assert_eq!(members.len(), 50);
//! assert_eq!(select_spokespeople(&members, 7).len(), 7);
//! ```

pub mod bill;
pub mod config;
pub mod core;
pub mod debate;
pub mod district;
pub mod member;
pub mod prompt;
pub mod simulation;
pub mod tally;

// Re-export commonly used types
pub use bill::{AMENDMENT_TAG_PREFIX, Bill};
pub use config::{ConfigIssue, ConfigIssueCode, OutputFormat, Severity};
pub use core::{
    error::DomainError,
    rng::{SeededRng, stable_hash},
};
pub use debate::{
    Decision, DecisionParseError, FALLBACK_AMENDMENT, Speech, Stance, Vote,
    parse_decision_response, template_amendment, template_speech,
};
pub use district::{District, LeanLabel};
pub use member::{
    DEFAULT_IDEOLOGY_JITTER, DEFAULT_SPOKESPERSON_COUNT, Member, MemberId, PartyHint,
    sample_members, select_spokespeople,
};
pub use prompt::{PromptTemplate, excerpt};
pub use simulation::{Round, SimulationPhase, SimulationResult};
pub use tally::{DEFAULT_PASS_THRESHOLD, VoteTally, passes};
