//! LLM Gateway port
//!
//! Defines the interface for sending a prompt to an inference backend and
//! getting text back. The transport (HTTP, local process, ...) lives in the
//! infrastructure layer.

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur during LLM gateway operations
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Timeout")]
    Timeout,
}

/// Gateway for LLM communication
///
/// One instance is created per process and shared as `Arc<dyn LlmGateway>`
/// by every inference-backed adapter, so the underlying connection pool is
/// reused across calls.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// Model identifier used for every request (e.g. `llama3.1:8b`)
    fn model(&self) -> &str;

    /// Send a single prompt and return the complete, non-streamed reply.
    async fn generate(&self, prompt: &str) -> Result<String, GatewayError>;
}
