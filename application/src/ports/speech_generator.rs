//! Speech generator port

use crate::ports::llm_gateway::GatewayError;
use async_trait::async_trait;
use chamber_domain::{Bill, Member, Stance};
use thiserror::Error;

/// Errors while producing speech text.
///
/// The orchestrator falls back to the template speech on any of these.
#[derive(Error, Debug)]
pub enum SpeechGenerationError {
    #[error("Gateway error: {0}")]
    Gateway(#[from] GatewayError),

    #[error("Generator returned an empty speech")]
    Empty,
}

/// Writes the text of a spokesperson's speech for an already decided stance.
#[async_trait]
pub trait SpeechGenerator: Send + Sync {
    fn name(&self) -> &str;

    async fn generate(
        &self,
        member: &Member,
        stance: Stance,
        bill: &Bill,
    ) -> Result<String, SpeechGenerationError>;
}
