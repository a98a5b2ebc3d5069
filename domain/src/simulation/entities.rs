//! Round records and the simulation result

use crate::bill::Bill;
use crate::debate::speech::Speech;
use crate::member::{Member, MemberId};
use crate::tally::VoteTally;
use serde::{Deserialize, Serialize};

/// One executed round.
///
/// `bill` is the snapshot the round was debated and voted on. Later
/// amendments never touch it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Round {
    /// 0-based
    pub round_index: usize,
    pub bill: Bill,
    pub speeches: Vec<Speech>,
    pub tally: VoteTally,
    /// Set only when this round failed and another round followed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amendment: Option<String>,
}

impl Round {
    pub fn new(round_index: usize, bill: Bill, speeches: Vec<Speech>, tally: VoteTally) -> Self {
        Self {
            round_index,
            bill,
            speeches,
            tally,
            amendment: None,
        }
    }

    /// 1-based round number for display.
    pub fn number(&self) -> usize {
        self.round_index + 1
    }

    pub fn passed(&self) -> bool {
        self.tally.passed
    }

    pub fn speaker_ids(&self) -> Vec<MemberId> {
        self.speeches.iter().map(|s| s.member_id).collect()
    }
}

/// Complete outcome of a simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Seed the chamber was sampled from.
    ///
    /// Replaying a run needs this seed and the decision backend's own seed.
    /// When the run is given no seed it borrows the backend's, so the two match.
    pub seed: u64,
    pub members: Vec<Member>,
    pub rounds: Vec<Round>,
    pub final_passed: bool,
    #[serde(default)]
    pub notes: Vec<String>,
}

impl SimulationResult {
    /// Assemble a result; `final_passed` is taken from the last round.
    pub fn new(seed: u64, members: Vec<Member>, rounds: Vec<Round>) -> Self {
        let final_passed = rounds.last().map(Round::passed).unwrap_or(false);
        Self {
            seed,
            members,
            rounds,
            final_passed,
            notes: Vec::new(),
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    pub fn last_round(&self) -> Option<&Round> {
        self.rounds.last()
    }

    /// Bill as it stands after every amendment.
    pub fn final_bill(&self) -> Option<Bill> {
        let last = self.rounds.last()?;
        let mut bill = last.bill.clone();
        if let Some(text) = &last.amendment {
            bill.append_amendment(last.round_index, text);
        }
        Some(bill)
    }

    pub fn amendments(&self) -> impl Iterator<Item = (usize, &str)> {
        self.rounds
            .iter()
            .filter_map(|r| r.amendment.as_deref().map(|a| (r.round_index, a)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::debate::stance::Vote;

    fn tally(yes: u32, no: u32) -> VoteTally {
        let votes = (0..yes)
            .map(|i| (MemberId::new(i + 1), Vote::Yes))
            .chain((0..no).map(|i| (MemberId::new(yes + i + 1), Vote::No)));
        VoteTally::from_roll_call(votes, 0.5)
    }

    #[test]
    fn test_final_passed_follows_last_round() {
        let bill = Bill::new("Act", "Summary");
        let mut first = Round::new(0, bill.clone(), vec![], tally(1, 3));
        first.amendment = Some("Narrow it".to_string());
        let second = Round::new(1, bill, vec![], tally(3, 1));

        let result = SimulationResult::new(7, vec![], vec![first, second]);
        assert!(result.final_passed);
        assert_eq!(result.amendments().count(), 1);
        assert_eq!(result.last_round().map(Round::number), Some(2));
    }

    #[test]
    fn test_empty_rounds_not_passed() {
        let result = SimulationResult::new(1, vec![], vec![]);
        assert!(!result.final_passed);
        assert!(result.final_bill().is_none());
    }

    #[test]
    fn test_json_roundtrip_keeps_equality() {
        let result = SimulationResult::new(
            42,
            vec![],
            vec![Round::new(0, Bill::new("Act", "S"), vec![], tally(2, 1))],
        )
        .with_note("heuristic backend");
        let json = serde_json::to_string(&result).unwrap();
        let back: SimulationResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, result);
    }
}
