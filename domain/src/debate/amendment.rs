//! Amendment text
//!
//! Amendments are purely textual: they are appended to the bill summary and
//! only influence later rounds through the text a decision backend reads.

use crate::debate::speech::Speech;
use crate::debate::stance::Stance;
use crate::member::Member;
use std::collections::BTreeMap;

/// Used whenever an amendment generator fails, so the loop can continue.
pub const FALLBACK_AMENDMENT: &str =
    "Clarify the bill's scope and add a phased implementation schedule with annual reporting requirements.";

/// Build an amendment from the objections raised in a failed round.
///
/// Looks at the speakers who opposed or asked for amendments, finds the issue
/// their districts weigh most often, and proposes narrowing it. Deterministic
/// for a given set of speeches.
pub fn template_amendment(speeches: &[Speech], speakers: &[Member]) -> String {
    let objectors: Vec<&Speech> = speeches
        .iter()
        .filter(|s| matches!(s.stance, Stance::Oppose | Stance::Amend))
        .collect();

    if objectors.is_empty() {
        return "Add a sunset clause and an independent review after two years to win over undecided members."
            .to_string();
    }

    let mut issue_counts: BTreeMap<String, usize> = BTreeMap::new();
    for speech in &objectors {
        let top = speakers
            .iter()
            .find(|m| m.id == speech.member_id)
            .and_then(|m| m.district.top_issues(1).into_iter().next());
        if let Some((issue, _)) = top.filter(|(_, w)| *w > 0.0) {
            *issue_counts.entry(issue).or_default() += 1;
        }
    }

    // BTreeMap iteration is alphabetical, and max_by keeps the last maximum,
    // so reverse first to let the alphabetically first issue win ties.
    let focus = issue_counts
        .iter()
        .rev()
        .max_by_key(|(_, count)| **count)
        .map(|(issue, _)| issue.clone());

    match focus {
        Some(issue) => format!(
            "Narrow the provisions affecting {issue} and phase implementation in over three years, \
             addressing concerns raised by {} of {} speakers.",
            objectors.len(),
            speeches.len()
        ),
        None => format!(
            "Phase implementation in over three years and cap first-year costs, \
             addressing concerns raised by {} of {} speakers.",
            objectors.len(),
            speeches.len()
        ),
    }
}
