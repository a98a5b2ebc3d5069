//! Live progress display for simulation runs

pub mod reporter;
