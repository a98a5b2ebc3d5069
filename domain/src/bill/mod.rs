//! The bill under debate

pub mod entities;

pub use entities::{AMENDMENT_TAG_PREFIX, Bill};
