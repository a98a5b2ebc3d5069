//! Ollama HTTP gateway
//!
//! Non-streaming `POST /api/generate`; the reply text is the `response`
//! field of the JSON body.

use async_trait::async_trait;
use chamber_application::ports::llm_gateway::{GatewayError, LlmGateway};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

pub const DEFAULT_OLLAMA_URL: &str = "http://localhost:11434";
pub const DEFAULT_OLLAMA_MODEL: &str = "llama3.1:8b";
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(20);

/// Error bodies are cut to this many bytes in error messages.
const MAX_ERROR_BODY: usize = 320;

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    response: Option<String>,
}

/// [`LlmGateway`] backed by a local or remote Ollama server.
///
/// Holds a single `reqwest::Client`; clone the `Arc` around the gateway, not
/// the gateway itself, to share its connection pool.
pub struct OllamaGateway {
    client: reqwest::Client,
    base_url: String,
    model: String,
}

impl OllamaGateway {
    pub fn new(
        base_url: impl Into<String>,
        model: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, GatewayError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| GatewayError::ConnectionError(e.to_string()))?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            model: model.into(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn generate_url(&self) -> String {
        format!("{}/api/generate", self.base_url)
    }

    /// Check that the server answers at all (`GET /api/tags`).
    pub async fn ping(&self) -> Result<(), GatewayError> {
        let response = self
            .client
            .get(format!("{}/api/tags", self.base_url))
            .send()
            .await
            .map_err(map_reqwest_error)?;
        if !response.status().is_success() {
            return Err(GatewayError::RequestFailed(format!(
                "ollama returned {}",
                response.status()
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl LlmGateway for OllamaGateway {
    fn model(&self) -> &str {
        &self.model
    }

    async fn generate(&self, prompt: &str) -> Result<String, GatewayError> {
        let request = GenerateRequest {
            model: &self.model,
            prompt,
            stream: false,
        };

        let response = self
            .client
            .post(self.generate_url())
            .json(&request)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GatewayError::RequestFailed(format!(
                "ollama error {}: {}",
                status,
                chamber_domain::excerpt(&body, MAX_ERROR_BODY)
            )));
        }

        let body: GenerateResponse = response
            .json()
            .await
            .map_err(|e| GatewayError::InvalidResponse(e.to_string()))?;
        let text = body
            .response
            .ok_or_else(|| GatewayError::InvalidResponse("missing `response` field".to_string()))?;

        debug!("ollama replied with {} bytes", text.len());
        Ok(text)
    }
}

fn map_reqwest_error(e: reqwest::Error) -> GatewayError {
    if e.is_timeout() {
        GatewayError::Timeout
    } else if e.is_connect() {
        GatewayError::ConnectionError(e.to_string())
    } else {
        GatewayError::RequestFailed(e.to_string())
    }
}
