//! Electoral districts
//!
//! Districts are immutable external input. The core never re-fetches or
//! re-normalises them; it only reads lean, population and issue salience.

pub mod entities;

pub use entities::{District, LeanLabel};
