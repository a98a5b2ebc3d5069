//! Round state machine
//!
//! ```text
//! Sampling ──▶ Debating(r) ──▶ Voting(r) ──▶ Reconciling(r) ──▶ Deciding(r)
//!                   ▲                                                │
//!                   │                    passed ─────────────────────┼──▶ Passed
//!                   │                    failed, r is last round ────┼──▶ Exhausted
//!                   └──────── Amending(r) ◀── failed, rounds remain ─┘
//! ```
//!
//! Termination depends only on the vote outcome and the round budget, so a
//! run performs at most `max_rounds` iterations.

use serde::{Deserialize, Serialize};

/// Where a simulation run currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "phase", content = "round", rename_all = "snake_case")]
pub enum SimulationPhase {
    Sampling,
    Debating(usize),
    Voting(usize),
    Reconciling(usize),
    Deciding(usize),
    Amending(usize),
    /// Terminal: the last round's tally passed.
    Passed,
    /// Terminal: every allowed round failed.
    Exhausted,
}

impl SimulationPhase {
    /// The phase that follows `Deciding(round)`.
    pub fn after_decision(round: usize, passed: bool, max_rounds: usize) -> Self {
        if passed {
            SimulationPhase::Passed
        } else if round + 1 >= max_rounds {
            SimulationPhase::Exhausted
        } else {
            SimulationPhase::Amending(round)
        }
    }

    /// The next phase for every non-branching transition.
    ///
    /// Returns `None` for `Deciding` (use [`after_decision`](Self::after_decision))
    /// and for terminal phases.
    pub fn next(&self) -> Option<Self> {
        match *self {
            SimulationPhase::Sampling => Some(SimulationPhase::Debating(0)),
            SimulationPhase::Debating(r) => Some(SimulationPhase::Voting(r)),
            SimulationPhase::Voting(r) => Some(SimulationPhase::Reconciling(r)),
            SimulationPhase::Reconciling(r) => Some(SimulationPhase::Deciding(r)),
            SimulationPhase::Amending(r) => Some(SimulationPhase::Debating(r + 1)),
            SimulationPhase::Deciding(_) | SimulationPhase::Passed | SimulationPhase::Exhausted => {
                None
            }
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, SimulationPhase::Passed | SimulationPhase::Exhausted)
    }

    pub fn round(&self) -> Option<usize> {
        match *self {
            SimulationPhase::Debating(r)
            | SimulationPhase::Voting(r)
            | SimulationPhase::Reconciling(r)
            | SimulationPhase::Deciding(r)
            | SimulationPhase::Amending(r) => Some(r),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SimulationPhase::Sampling => "sampling",
            SimulationPhase::Debating(_) => "debating",
            SimulationPhase::Voting(_) => "voting",
            SimulationPhase::Reconciling(_) => "reconciling",
            SimulationPhase::Deciding(_) => "deciding",
            SimulationPhase::Amending(_) => "amending",
            SimulationPhase::Passed => "passed",
            SimulationPhase::Exhausted => "exhausted",
        }
    }
}

impl std::fmt::Display for SimulationPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.round() {
            Some(r) => write!(f, "{} (round {})", self.as_str(), r + 1),
            None => f.write_str(self.as_str()),
        }
    }
}
