//! Inference transports implementing the `LlmGateway` port

pub mod ollama;

pub use ollama::{DEFAULT_OLLAMA_MODEL, DEFAULT_OLLAMA_URL, DEFAULT_REQUEST_TIMEOUT, OllamaGateway};
