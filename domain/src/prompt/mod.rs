//! Prompt domain
//!
//! Prompt builders for the inference-backed decision backend, speech writer
//! and amendment writer.

mod excerpt;
mod template;

pub use excerpt::{EXCERPT_MARKER, excerpt};
pub use template::{MAX_BILL_TEXT_BYTES, PromptTemplate, SPEECH_WORD_LIMIT};
