//! Application layer for chamber-sim
//!
//! This crate contains the round orchestrator, the port definitions it talks
//! through, and the adapters that only need other ports (template heuristics
//! and inference-backed generators). It depends only on the domain layer.

pub mod backends;
pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use backends::{
    HeuristicDecisionBackend, InferenceDecisionBackend, LlmAmendmentGenerator,
    LlmSpeechGenerator, TemplateAmendmentGenerator, TemplateSpeechGenerator,
};
pub use config::SimulationParams;
pub use ports::{
    amendment_generator::{AmendmentGenerationError, AmendmentGenerator, AmendmentRequest},
    composite_progress::CompositeObserver,
    decision_backend::{DecisionBackend, DecisionBackendError},
    llm_gateway::{GatewayError, LlmGateway},
    progress::{NoProgress, SimulationObserver, VoteProgress},
    speech_generator::{SpeechGenerationError, SpeechGenerator},
};
pub use use_cases::run_simulation::{RunSimulationError, RunSimulationInput, RunSimulationUseCase};
