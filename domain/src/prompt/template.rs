//! Prompt templates for inference-backed decisions, speeches and amendments
//!
//! Every builder is a pure function of its arguments, so the same member and
//! bill always produce the same prompt.

use crate::bill::Bill;
use crate::debate::speech::Speech;
use crate::debate::stance::Stance;
use crate::member::Member;
use super::excerpt::excerpt;

/// Bill text is cut to this many bytes before it goes into a prompt.
pub const MAX_BILL_TEXT_BYTES: usize = 4000;

/// Upper bound on speech length requested from the model.
pub const SPEECH_WORD_LIMIT: usize = 90;

/// Templates for each inference call the simulator makes
pub struct PromptTemplate;

impl PromptTemplate {
    /// Preamble shared by every prompt.
    pub fn persona() -> &'static str {
        "You are a generic elected representative in a simulated legislature. \
         Do NOT reference real people, parties, or scandals."
    }

    /// Decision prompt: asks for a single vote in a strict format.
    pub fn decision_prompt(member: &Member, bill: &Bill) -> String {
        let mut prompt = format!(
            "{}\n\n{}\n{}",
            Self::persona(),
            Self::member_profile(member),
            Self::bill_section(bill)
        );

        let prior = bill.amendment_count();
        if prior > 0 {
            prompt.push_str(&format!(
                "\nThe summary above includes {prior} amendment(s) adopted after earlier failed votes. \
                 Take them into account.\n"
            ));
        }

        prompt.push_str(
            "\nDecide how you vote on this bill.\n\
             Reply with ONLY a JSON object and nothing else:\n\
             {\"vote\": \"yes\" | \"no\" | \"abstain\", \"rationale\": \"<one sentence>\"}",
        );
        prompt
    }

    /// Speech prompt for a spokesperson who has already taken `stance`.
    pub fn speech_prompt(member: &Member, stance: Stance, bill: &Bill) -> String {
        format!(
            "{}\nWrite a concise argument (<={} words).\n\n{}\n{}\nStance: {}\nArgument:",
            Self::persona(),
            SPEECH_WORD_LIMIT,
            Self::member_profile(member),
            Self::bill_section(bill),
            stance
        )
    }

    /// Amendment prompt after `round_index` failed.
    pub fn amendment_prompt(bill: &Bill, round_index: usize, speeches: &[Speech]) -> String {
        let mut prompt = format!(
            "You are the clerk of a simulated legislature drafting a compromise. \
             Do NOT reference real people, parties, or scandals.\n\n\
             The following bill failed its vote in round {}.\n\n{}\nDebate:\n",
            round_index + 1,
            Self::bill_section(bill)
        );

        if speeches.is_empty() {
            prompt.push_str("(no speeches were given)\n");
        }
        for speech in speeches {
            prompt.push_str(&format!(
                "- {} ({}): {}\n",
                speech.member_id,
                speech.stance,
                speech.text.trim()
            ));
        }

        prompt.push_str(
            "\nPropose ONE amendment, in one or two sentences, that addresses the main objections \
             while keeping the bill's purpose. Reply with the amendment text only.",
        );
        prompt
    }

    fn member_profile(member: &Member) -> String {
        let district = &member.district;
        let issues = district
            .top_issues(3)
            .into_iter()
            .map(|(issue, weight)| format!("{issue} ({weight:.2})"))
            .collect::<Vec<_>>();
        let issues = if issues.is_empty() {
            "none recorded".to_string()
        } else {
            issues.join(", ")
        };

        format!(
            "District: {} ({})\n\
             District lean (right=-1 to left=+1): {:.2}, {}\n\
             Member ideology (right=-1 to left=+1): {:.2}\n\
             District priorities: {}\n",
            district.name,
            district.district_id,
            district.lean,
            district.lean_label(),
            member.ideology,
            issues
        )
    }

    fn bill_section(bill: &Bill) -> String {
        let mut section = format!("Bill title: {}\nBill summary:\n{}\n", bill.title, bill.summary);
        if let Some(text) = bill.text_content.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
            section.push_str("Bill text (excerpt):\n");
            section.push_str(&excerpt(text, MAX_BILL_TEXT_BYTES));
            section.push('\n');
        }
        section
    }
}
