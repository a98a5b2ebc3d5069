//! Port implementations that need nothing beyond other ports
//!
//! - [`heuristic`]: offline template/heuristic adapters
//! - [`inference`]: adapters that go through an [`LlmGateway`](crate::ports::llm_gateway::LlmGateway)

pub mod heuristic;
pub mod inference;

pub use heuristic::{HeuristicDecisionBackend, TemplateAmendmentGenerator, TemplateSpeechGenerator};
pub use inference::{InferenceDecisionBackend, LlmAmendmentGenerator, LlmSpeechGenerator};
