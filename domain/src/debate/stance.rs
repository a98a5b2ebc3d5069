//! Stance, vote and decision value objects
//!
//! A [`Stance`] is what a member says in debate; a [`Vote`] is what lands on
//! the roll call. The two are tied by a fixed mapping in both directions:
//!
//! | Stance  | Vote    |
//! |---------|---------|
//! | Support | Yes     |
//! | Oppose  | No      |
//! | Amend   | Abstain |

use serde::{Deserialize, Serialize};

/// Debate-phase position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stance {
    Support,
    Oppose,
    /// Undecided or contested: wants the bill changed.
    Amend,
}

impl Stance {
    /// The roll-call vote implied by this stance.
    pub fn implied_vote(&self) -> Vote {
        match self {
            Stance::Support => Vote::Yes,
            Stance::Oppose => Vote::No,
            Stance::Amend => Vote::Abstain,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Stance::Support => "support",
            Stance::Oppose => "oppose",
            Stance::Amend => "amend",
        }
    }
}

impl std::fmt::Display for Stance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Final roll-call vote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Vote {
    Yes,
    No,
    Abstain,
}

impl Vote {
    /// The stance a member voting this way would take in debate.
    pub fn as_stance(&self) -> Stance {
        match self {
            Vote::Yes => Stance::Support,
            Vote::No => Stance::Oppose,
            Vote::Abstain => Stance::Amend,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Vote::Yes => "yes",
            Vote::No => "no",
            Vote::Abstain => "abstain",
        }
    }
}

impl std::fmt::Display for Vote {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Vote {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "yes" | "yea" | "aye" => Ok(Vote::Yes),
            "no" | "nay" => Ok(Vote::No),
            "abstain" | "present" => Ok(Vote::Abstain),
            other => Err(format!("Unknown vote: {other}. Valid: yes, no, abstain")),
        }
    }
}

/// A decision backend's answer for one member: a vote and why.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Decision {
    pub vote: Vote,
    pub rationale: String,
}

impl Decision {
    pub fn new(vote: Vote, rationale: impl Into<String>) -> Self {
        Self {
            vote,
            rationale: rationale.into(),
        }
    }

    /// Degraded decision used whenever a backend could not decide.
    pub fn abstain(rationale: impl Into<String>) -> Self {
        Self::new(Vote::Abstain, rationale)
    }

    pub fn stance(&self) -> Stance {
        self.vote.as_stance()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mapping_is_bijective() {
        for stance in [Stance::Support, Stance::Oppose, Stance::Amend] {
            assert_eq!(stance.implied_vote().as_stance(), stance);
        }
        for vote in [Vote::Yes, Vote::No, Vote::Abstain] {
            assert_eq!(vote.as_stance().implied_vote(), vote);
        }
    }

    #[test]
    fn test_vote_from_str() {
        assert_eq!("YES".parse::<Vote>(), Ok(Vote::Yes));
        assert_eq!(" nay ".parse::<Vote>(), Ok(Vote::No));
        assert_eq!("Abstain".parse::<Vote>(), Ok(Vote::Abstain));
        assert!("maybe".parse::<Vote>().is_err());
    }

    #[test]
    fn test_serialize_lowercase() {
        assert_eq!(serde_json::to_string(&Stance::Amend).unwrap(), "\"amend\"");
        assert_eq!(serde_json::to_string(&Vote::Abstain).unwrap(), "\"abstain\"");
    }

    #[test]
    fn test_abstain_decision() {
        let d = Decision::abstain("backend unavailable");
        assert_eq!(d.vote, Vote::Abstain);
        assert_eq!(d.stance(), Stance::Amend);
    }
}
