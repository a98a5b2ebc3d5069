//! Port definitions (interfaces for external adapters)

pub mod amendment_generator;
pub mod composite_progress;
pub mod decision_backend;
pub mod llm_gateway;
pub mod progress;
pub mod speech_generator;
