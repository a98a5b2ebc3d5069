//! Decision backend port
//!
//! A decision backend answers one question: how does this member vote on this
//! bill? The orchestrator asks it once per spokesperson during debate and once
//! per member during the roll call.

use crate::ports::llm_gateway::GatewayError;
use async_trait::async_trait;
use chamber_domain::{Bill, Decision, DecisionParseError, Member};
use thiserror::Error;

/// Errors a decision backend may report.
///
/// None of these abort a run: the orchestrator turns every one of them into
/// an abstain vote carrying the error text as its rationale.
#[derive(Error, Debug)]
pub enum DecisionBackendError {
    #[error("Gateway error: {0}")]
    Gateway(#[from] GatewayError),

    #[error("Could not parse decision: {0}")]
    Parse(#[from] DecisionParseError),

    #[error("Decision timed out")]
    Timeout,

    #[error("{0}")]
    Other(String),
}

/// Pluggable per-member vote decision.
///
/// Implementations must be safe to call concurrently for different members
/// against the same bill snapshot.
#[async_trait]
pub trait DecisionBackend: Send + Sync {
    /// Short label recorded in result notes (e.g. `heuristic`)
    fn name(&self) -> &str;

    /// Seed the backend draws from, if it is seeded at all.
    ///
    /// A run without an explicit seed samples its chamber from this one, so a
    /// single number replays both the chamber and the votes.
    fn seed(&self) -> Option<u64> {
        None
    }

    async fn decide(&self, member: &Member, bill: &Bill) -> Result<Decision, DecisionBackendError>;
}
