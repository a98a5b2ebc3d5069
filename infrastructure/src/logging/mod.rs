//! Logging infrastructure: structured run transcripts.
//!
//! Provides [`JsonlRunLogger`], a JSONL file writer that follows a run as a
//! [`SimulationObserver`](chamber_application::SimulationObserver).

mod jsonl_logger;

pub use jsonl_logger::JsonlRunLogger;
