//! Vote tallying and stance/vote reconciliation

pub mod vote_tally;

pub use vote_tally::{DEFAULT_PASS_THRESHOLD, VoteTally, passes};
