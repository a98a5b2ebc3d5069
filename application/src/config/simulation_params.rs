//! Simulation parameters: run shape and voting loop control.
//!
//! [`SimulationParams`] groups the static parameters that control a
//! [`RunSimulationUseCase`](crate::use_cases::run_simulation::RunSimulationUseCase)
//! run. File and environment configuration is mapped onto this type by the
//! infrastructure layer; CLI flags are applied on top by the binary.

use chamber_domain::{DEFAULT_IDEOLOGY_JITTER, DEFAULT_PASS_THRESHOLD, DEFAULT_SPOKESPERSON_COUNT};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default chamber size.
pub const DEFAULT_MEMBER_COUNT: usize = 200;
/// Default round budget.
pub const DEFAULT_MAX_ROUNDS: usize = 3;
/// Default number of concurrent decision calls per batch.
pub const DEFAULT_BATCH_SIZE: usize = 5;

/// Run shape and voting loop control parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationParams {
    /// Number of members sampled for the chamber.
    pub member_count: usize,
    /// Maximum number of rounds before the run is exhausted.
    pub max_rounds: usize,
    /// Spokespeople per round.
    pub spokesperson_count: usize,
    /// Decision calls run concurrently within one batch.
    pub batch_size: usize,
    /// Delay added per slot inside a batch, to spread load on the backend.
    pub stagger: Duration,
    /// Pass threshold over decisive (yes + no) votes.
    pub threshold: f64,
    /// Standard deviation of member ideology around district lean.
    pub ideology_jitter: f64,
    /// `None` seeds from the clock.
    pub seed: Option<u64>,
    /// Per-call decision limit; a timed-out call abstains.
    pub decision_timeout: Option<Duration>,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            member_count: DEFAULT_MEMBER_COUNT,
            max_rounds: DEFAULT_MAX_ROUNDS,
            spokesperson_count: DEFAULT_SPOKESPERSON_COUNT,
            batch_size: DEFAULT_BATCH_SIZE,
            stagger: Duration::ZERO,
            threshold: DEFAULT_PASS_THRESHOLD,
            ideology_jitter: DEFAULT_IDEOLOGY_JITTER,
            seed: None,
            decision_timeout: None,
        }
    }
}

impl SimulationParams {
    // ==================== Builder Methods ====================

    pub fn with_member_count(mut self, n: usize) -> Self {
        self.member_count = n;
        self
    }

    pub fn with_max_rounds(mut self, rounds: usize) -> Self {
        self.max_rounds = rounds;
        self
    }

    pub fn with_spokesperson_count(mut self, k: usize) -> Self {
        self.spokesperson_count = k;
        self
    }

    pub fn with_batch_size(mut self, size: usize) -> Self {
        self.batch_size = size;
        self
    }

    pub fn with_stagger(mut self, stagger: Duration) -> Self {
        self.stagger = stagger;
        self
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_ideology_jitter(mut self, jitter: f64) -> Self {
        self.ideology_jitter = jitter;
        self
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_decision_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.decision_timeout = timeout;
        self
    }

    // ==================== Validation ====================

    /// Reject parameters the orchestrator cannot run with.
    ///
    /// Soft limits (recommended ranges) are the config layer's business;
    /// this only checks hard preconditions.
    pub fn validate(&self) -> Result<(), String> {
        if self.member_count == 0 {
            return Err("member_count must be at least 1".to_string());
        }
        if self.max_rounds == 0 {
            return Err("max_rounds must be at least 1".to_string());
        }
        if self.batch_size == 0 {
            return Err("batch_size must be at least 1".to_string());
        }
        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(format!("threshold must be within 0..=1, got {}", self.threshold));
        }
        if !self.ideology_jitter.is_finite() || self.ideology_jitter < 0.0 {
            return Err(format!(
                "ideology_jitter must be a non-negative number, got {}",
                self.ideology_jitter
            ));
        }
        if self.decision_timeout.is_some_and(|t| t.is_zero()) {
            return Err("decision_timeout must be greater than zero".to_string());
        }
        Ok(())
    }
}
