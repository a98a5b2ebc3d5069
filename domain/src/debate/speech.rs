//! Speeches and the template speech writer
//!
//! Speech text is cosmetic: nothing in the tally reads it. The stance stored
//! next to it is what reconciliation uses.

use crate::bill::Bill;
use crate::debate::stance::Stance;
use crate::member::{Member, MemberId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One debate contribution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Speech {
    pub member_id: MemberId,
    pub stance: Stance,
    pub text: String,
    /// Legacy per-issue rationale map, always empty.
    #[serde(default)]
    pub rationale: BTreeMap<String, f64>,
}

impl Speech {
    pub fn new(member_id: MemberId, stance: Stance, text: impl Into<String>) -> Self {
        Self {
            member_id,
            stance,
            text: text.into(),
            rationale: BTreeMap::new(),
        }
    }
}

/// Short structured speech built only from the member's district and stance.
///
/// Deliberately generic: it never names real people or parties.
pub fn template_speech(member: &Member, stance: Stance, bill: &Bill) -> String {
    let lean = member.district.lean_label();
    let issues: Vec<String> = member
        .district
        .top_issues(2)
        .into_iter()
        .filter(|(_, w)| *w > 0.0)
        .map(|(issue, _)| issue)
        .collect();
    let priorities = match issues.as_slice() {
        [] => "our priorities are broad".to_string(),
        [one] => format!("our top priority is {one}"),
        [first, second, ..] => format!("our top priorities are {first} and {second}"),
    };

    let amended = match bill.amendment_count() {
        0 => String::new(),
        1 => " Having weighed the amendment already adopted,".to_string(),
        n => format!(" Having weighed the {n} amendments already adopted,"),
    };

    match stance {
        Stance::Support => format!(
            "I support this bill. My district is {lean}, and {priorities}.{amended} \
             On net, it improves outcomes my constituents prioritize."
        ),
        Stance::Oppose => format!(
            "I oppose this bill. My district is {lean}, and {priorities}.{amended} \
             On net, it cuts against constituent priorities or creates tradeoffs we can't justify."
        ),
        Stance::Amend => format!(
            "I want amendments. My district is {lean}; we should keep the benefits but reduce the downsides.{amended} \
             Let's adjust the bill to better match the median voter in the district."
        ),
    }
}
