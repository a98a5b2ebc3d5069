//! Member (simulated representative) entity

use crate::district::District;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Ideology above which a member is labelled [`PartyHint::Blue`].
pub const PARTY_HINT_THRESHOLD: f64 = 0.15;

/// Sequential member identifier, rendered as `M-0001`.
///
/// Ordering follows sampling order, which keeps roll-call maps stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemberId(u32);

impl MemberId {
    pub fn new(n: u32) -> Self {
        Self(n)
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for MemberId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "M-{:04}", self.0)
    }
}

/// Cosmetic party label derived from ideology. Never used in voting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartyHint {
    Blue,
    Red,
    Purple,
}

impl PartyHint {
    pub fn from_ideology(ideology: f64) -> Self {
        if ideology > PARTY_HINT_THRESHOLD {
            PartyHint::Blue
        } else if ideology < -PARTY_HINT_THRESHOLD {
            PartyHint::Red
        } else {
            PartyHint::Purple
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PartyHint::Blue => "Blue",
            PartyHint::Red => "Red",
            PartyHint::Purple => "Purple",
        }
    }
}

impl std::fmt::Display for PartyHint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A simulated representative.
///
/// Created once per run by the sampler and never mutated afterwards. The
/// district is shared read-only between every member drawn from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    pub id: MemberId,
    pub district: Arc<District>,
    /// -1 (right) to +1 (left)
    pub ideology: f64,
    pub party_hint: PartyHint,
}

impl Member {
    pub fn new(id: MemberId, district: Arc<District>, ideology: f64) -> Self {
        let ideology = ideology.clamp(-1.0, 1.0);
        Self {
            id,
            district,
            ideology,
            party_hint: PartyHint::from_ideology(ideology),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_member_id_display() {
        assert_eq!(MemberId::new(1).to_string(), "M-0001");
        assert_eq!(MemberId::new(12345).to_string(), "M-12345");
    }

    #[test]
    fn test_member_id_orders_numerically() {
        assert!(MemberId::new(9) < MemberId::new(10));
        assert!(MemberId::new(9999) < MemberId::new(10000));
    }

    #[test]
    fn test_party_hint_thresholds() {
        assert_eq!(PartyHint::from_ideology(0.5), PartyHint::Blue);
        assert_eq!(PartyHint::from_ideology(-0.5), PartyHint::Red);
        assert_eq!(PartyHint::from_ideology(0.15), PartyHint::Purple);
        assert_eq!(PartyHint::from_ideology(-0.1), PartyHint::Purple);
    }

    #[test]
    fn test_member_clamps_ideology() {
        let district = Arc::new(District::new("a", "A", 0.0, 1));
        let m = Member::new(MemberId::new(1), district, 1.7);
        assert_eq!(m.ideology, 1.0);
        assert_eq!(m.party_hint, PartyHint::Blue);
    }
}
