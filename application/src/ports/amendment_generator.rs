//! Amendment generator port

use crate::ports::llm_gateway::GatewayError;
use async_trait::async_trait;
use chamber_domain::{Bill, Member, Speech};
use thiserror::Error;

/// Errors while proposing an amendment.
///
/// The orchestrator substitutes `FALLBACK_AMENDMENT` for any of these.
#[derive(Error, Debug)]
pub enum AmendmentGenerationError {
    #[error("Gateway error: {0}")]
    Gateway(#[from] GatewayError),

    #[error("Generator returned an empty amendment")]
    Empty,
}

/// Everything an amendment generator may look at after a failed round.
#[derive(Debug, Clone, Copy)]
pub struct AmendmentRequest<'a> {
    /// Bill snapshot the failed round voted on
    pub bill: &'a Bill,
    pub round_index: usize,
    pub speeches: &'a [Speech],
    /// Members who gave `speeches`
    pub speakers: &'a [Member],
    pub vote_failed: bool,
}

/// Proposes the text appended to the bill before the next round.
#[async_trait]
pub trait AmendmentGenerator: Send + Sync {
    fn name(&self) -> &str;

    async fn propose(
        &self,
        request: &AmendmentRequest<'_>,
    ) -> Result<String, AmendmentGenerationError>;
}
