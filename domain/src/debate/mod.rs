//! Debate domain
//!
//! Value objects and pure helpers for the debate phase of a round:
//! what a member says ([`Stance`], [`Speech`]), how it maps to the roll call
//! ([`Vote`], [`Decision`]), how inference replies are decoded, and the
//! template writers used when no language model is involved.

pub mod amendment;
pub mod parsing;
pub mod speech;
pub mod stance;

pub use amendment::{FALLBACK_AMENDMENT, template_amendment};
pub use parsing::{DecisionParseError, parse_decision_response};
pub use speech::{Speech, template_speech};
pub use stance::{Decision, Stance, Vote};
