//! Composite observer: fans every event out to several observers.
//!
//! Lets the CLI drive the live progress display and the JSONL transcript
//! from a single run.

use super::progress::{SimulationObserver, VoteProgress};
use chamber_domain::{Bill, Member, Round, SimulationPhase, SimulationResult, Speech};

/// An observer that delegates to multiple inner observers, in order.
///
/// Holds borrowed references so owned and borrowed observers can be mixed
/// without wrapper types.
pub struct CompositeObserver<'a> {
    delegates: Vec<&'a dyn SimulationObserver>,
}

impl<'a> CompositeObserver<'a> {
    pub fn new(delegates: Vec<&'a dyn SimulationObserver>) -> Self {
        Self { delegates }
    }

    pub fn push(&mut self, observer: &'a dyn SimulationObserver) {
        self.delegates.push(observer);
    }

    pub fn len(&self) -> usize {
        self.delegates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.delegates.is_empty()
    }
}

/// Macro to delegate a method call to all inner observers.
macro_rules! delegate {
    ($self:ident, $method:ident $(, $arg:expr)*) => {
        for d in &$self.delegates {
            d.$method($($arg),*);
        }
    };
}

impl SimulationObserver for CompositeObserver<'_> {
    fn on_simulation_start(&self, member_count: usize, max_rounds: usize, seed: u64) {
        delegate!(self, on_simulation_start, member_count, max_rounds, seed);
    }

    fn on_phase(&self, phase: &SimulationPhase) {
        delegate!(self, on_phase, phase);
    }

    fn on_round_start(&self, round_index: usize, speaker_count: usize, bill: &Bill) {
        delegate!(self, on_round_start, round_index, speaker_count, bill);
    }

    fn on_speech(&self, round_index: usize, member: &Member, speech: &Speech) {
        delegate!(self, on_speech, round_index, member, speech);
    }

    fn on_vote_update(&self, round_index: usize, progress: &VoteProgress) {
        delegate!(self, on_vote_update, round_index, progress);
    }

    fn on_round_complete(&self, round: &Round) {
        delegate!(self, on_round_complete, round);
    }

    fn on_simulation_complete(&self, result: &SimulationResult) {
        delegate!(self, on_simulation_complete, result);
    }
}
