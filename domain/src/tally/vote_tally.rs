//! Vote tally for a single round
//!
//! Abstentions are excluded from the pass ratio: a bill passes when
//! `yes / max(1, yes + no) >= threshold`, no matter how many members abstain.

use crate::debate::speech::Speech;
use crate::debate::stance::Vote;
use crate::member::MemberId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Default pass threshold (simple majority of decisive votes).
pub const DEFAULT_PASS_THRESHOLD: f64 = 0.5;

/// Whether `yes` out of `yes + no` meets `threshold`.
///
/// # Example
///
/// ```
/// use chamber_domain::tally::passes;
///
/// assert!(passes(3, 3, 0.5));   // 50% meets a 0.5 threshold
/// assert!(!passes(0, 0, 0.5));  // nobody decisive → 0 / 1
/// ```
pub fn passes(yes: usize, no: usize, threshold: f64) -> bool {
    yes as f64 / (yes + no).max(1) as f64 >= threshold
}

/// Aggregated roll call for one round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoteTally {
    pub yes: usize,
    pub no: usize,
    pub abstain: usize,
    pub roll_call: BTreeMap<MemberId, Vote>,
    pub threshold: f64,
    pub passed: bool,
}

impl VoteTally {
    /// Empty tally, ready to [`record`](Self::record) votes as they arrive.
    pub fn new(threshold: f64) -> Self {
        Self {
            yes: 0,
            no: 0,
            abstain: 0,
            roll_call: BTreeMap::new(),
            threshold,
            passed: passes(0, 0, threshold),
        }
    }

    /// Pure aggregation of a complete roll call.
    pub fn from_roll_call(votes: impl IntoIterator<Item = (MemberId, Vote)>, threshold: f64) -> Self {
        let mut tally = Self::new(threshold);
        for (member, vote) in votes {
            tally.record(member, vote);
        }
        tally
    }

    /// Record one member's vote.
    ///
    /// A member already on the roll call is moved to the new bucket rather than
    /// counted twice.
    pub fn record(&mut self, member: MemberId, vote: Vote) {
        if let Some(previous) = self.roll_call.insert(member, vote) {
            self.decrement(previous);
        }
        self.increment(vote);
        self.passed = passes(self.yes, self.no, self.threshold);
    }

    /// Force every speaker's roll-call entry to the vote their stance implies.
    ///
    /// The bucket the backend originally placed the speaker in is decremented
    /// and the implied bucket incremented. The result does not depend on the
    /// order of `speeches`. Returns how many entries were changed.
    pub fn reconcile(&mut self, speeches: &[Speech]) -> usize {
        let mut changed = 0;
        for speech in speeches {
            let implied = speech.stance.implied_vote();
            if self.roll_call.get(&speech.member_id) != Some(&implied) {
                self.record(speech.member_id, implied);
                changed += 1;
            }
        }
        changed
    }

    pub fn total(&self) -> usize {
        self.yes + self.no + self.abstain
    }

    /// `yes / max(1, yes + no)`
    pub fn approval_ratio(&self) -> f64 {
        self.yes as f64 / (self.yes + self.no).max(1) as f64
    }

    pub fn vote_of(&self, member: MemberId) -> Option<Vote> {
        self.roll_call.get(&member).copied()
    }

    fn increment(&mut self, vote: Vote) {
        match vote {
            Vote::Yes => self.yes += 1,
            Vote::No => self.no += 1,
            Vote::Abstain => self.abstain += 1,
        }
    }

    fn decrement(&mut self, vote: Vote) {
        match vote {
            Vote::Yes => self.yes -= 1,
            Vote::No => self.no -= 1,
            Vote::Abstain => self.abstain -= 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::debate::stance::Stance;

    fn id(n: u32) -> MemberId {
        MemberId::new(n)
    }

    #[test]
    fn test_from_roll_call_counts() {
        let tally = VoteTally::from_roll_call(
            vec![
                (id(1), Vote::Yes),
                (id(2), Vote::Yes),
                (id(3), Vote::No),
                (id(4), Vote::Abstain),
            ],
            DEFAULT_PASS_THRESHOLD,
        );
        assert_eq!((tally.yes, tally.no, tally.abstain), (2, 1, 1));
        assert_eq!(tally.total(), 4);
        assert!(tally.passed);
    }

    #[test]
    fn test_abstain_excluded_from_ratio() {
        // 1 yes, 1 no, 98 abstain → 0.5 ≥ 0.5 passes
        let mut votes = vec![(id(1), Vote::Yes), (id(2), Vote::No)];
        votes.extend((3..=100).map(|n| (id(n), Vote::Abstain)));
        let tally = VoteTally::from_roll_call(votes, 0.5);
        assert!(tally.passed);
        assert_eq!(tally.approval_ratio(), 0.5);
    }

    #[test]
    fn test_all_abstain_fails() {
        let tally =
            VoteTally::from_roll_call((1..=10).map(|n| (id(n), Vote::Abstain)), 0.5);
        assert_eq!((tally.yes, tally.no, tally.abstain), (0, 0, 10));
        assert!(!tally.passed);
    }

    #[test]
    fn test_empty_tally() {
        let tally = VoteTally::new(0.5);
        assert_eq!(tally.total(), 0);
        assert!(!tally.passed);
    }

    #[test]
    fn test_zero_threshold_passes_empty() {
        assert!(VoteTally::new(0.0).passed);
    }

    #[test]
    fn test_record_overwrites() {
        let mut tally = VoteTally::new(0.5);
        tally.record(id(1), Vote::No);
        tally.record(id(1), Vote::Yes);
        assert_eq!((tally.yes, tally.no, tally.abstain), (1, 0, 0));
        assert!(tally.passed);
    }

    #[test]
    fn test_reconcile_moves_buckets() {
        let mut tally = VoteTally::from_roll_call(
            vec![
                (id(1), Vote::No),
                (id(2), Vote::No),
                (id(3), Vote::Yes),
                (id(4), Vote::Abstain),
            ],
            0.5,
        );
        assert!(!tally.passed);

        let speeches = vec![
            Speech::new(id(1), Stance::Support, "changed my mind"),
            Speech::new(id(3), Stance::Support, "consistent"),
            Speech::new(id(4), Stance::Oppose, "decided"),
        ];
        let changed = tally.reconcile(&speeches);

        assert_eq!(changed, 2);
        assert_eq!((tally.yes, tally.no, tally.abstain), (2, 2, 0));
        assert_eq!(tally.vote_of(id(1)), Some(Vote::Yes));
        assert_eq!(tally.vote_of(id(4)), Some(Vote::No));
        assert!(tally.passed);
        assert_eq!(tally.total(), 4);
    }

    #[test]
    fn test_reconcile_order_independent() {
        let roll_call = vec![
            (id(1), Vote::Yes),
            (id(2), Vote::No),
            (id(3), Vote::Abstain),
        ];
        let speeches = vec![
            Speech::new(id(1), Stance::Oppose, ""),
            Speech::new(id(2), Stance::Amend, ""),
            Speech::new(id(3), Stance::Support, ""),
        ];
        let mut forward = VoteTally::from_roll_call(roll_call.clone(), 0.5);
        forward.reconcile(&speeches);

        let mut reversed_speeches = speeches.clone();
        reversed_speeches.reverse();
        let mut backward = VoteTally::from_roll_call(roll_call, 0.5);
        backward.reconcile(&reversed_speeches);

        assert_eq!(forward, backward);
    }

    #[test]
    fn test_passes_law() {
        assert!(passes(5, 5, 0.5));
        assert!(!passes(4, 5, 0.5));
        assert!(passes(2, 1, 0.66));
        assert!(!passes(0, 0, 0.01));
    }
}
