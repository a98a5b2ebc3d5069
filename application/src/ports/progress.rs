//! Simulation observer port
//!
//! Defines the interface for following a simulation while it runs.

use chamber_domain::{Bill, Member, Round, SimulationPhase, SimulationResult, Speech};

/// Cumulative roll-call counts for the round in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VoteProgress {
    pub yes: usize,
    pub no: usize,
    pub abstain: usize,
    /// Members whose vote has been recorded so far
    pub decided: usize,
    /// Chamber size
    pub total: usize,
}

impl VoteProgress {
    pub fn is_complete(&self) -> bool {
        self.decided >= self.total
    }
}

/// Callback for progress updates during a simulation run
///
/// Implementations live in the presentation and infrastructure layers.
/// Callbacks are invoked synchronously from the orchestrator and must not
/// block for long; they never influence the run.
pub trait SimulationObserver: Send + Sync {
    /// Called once the chamber has been sampled.
    fn on_simulation_start(&self, _member_count: usize, _max_rounds: usize, _seed: u64) {}

    /// Called on every state machine transition.
    fn on_phase(&self, _phase: &SimulationPhase) {}

    /// Called before the debate of each round.
    fn on_round_start(&self, _round_index: usize, _speaker_count: usize, _bill: &Bill) {}

    /// Called after each spokesperson's speech is produced.
    fn on_speech(&self, _round_index: usize, _member: &Member, _speech: &Speech) {}

    /// Called after each voting batch, and once more after reconciliation.
    fn on_vote_update(&self, _round_index: usize, _progress: &VoteProgress) {}

    /// Called when a round's record is final (amendment included, if any).
    fn on_round_complete(&self, _round: &Round) {}

    fn on_simulation_complete(&self, _result: &SimulationResult) {}
}

/// No-op observer for when progress reporting is not needed
pub struct NoProgress;

impl SimulationObserver for NoProgress {}
