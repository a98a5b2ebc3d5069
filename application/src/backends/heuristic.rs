//! Template heuristic adapters
//!
//! Offline implementations of the three generator ports. They never read
//! bill semantics beyond the amendment count and never fail.

use crate::ports::amendment_generator::{
    AmendmentGenerationError, AmendmentGenerator, AmendmentRequest,
};
use crate::ports::decision_backend::{DecisionBackend, DecisionBackendError};
use crate::ports::speech_generator::{SpeechGenerationError, SpeechGenerator};
use async_trait::async_trait;
use chamber_domain::{
    Bill, Decision, Member, SeededRng, Stance, Vote, template_amendment, template_speech,
};

/// How far each prior amendment pulls `p(yes)` toward 0.5.
pub const AMENDMENT_MODERATION_STEP: f64 = 0.05;

/// Draws this close to `p(yes)` abstain.
pub const ABSTAIN_BAND: f64 = 0.03;

/// Ideology-driven vote decision.
///
/// `p(yes) = (1 + ideology) / 2`, moderated toward 0.5 by every amendment
/// already on the bill. The draw is keyed on the run seed, the member and the
/// bill text, so the backend holds no mutable state and the same member sees
/// the same draw whenever the bill is unchanged.
#[derive(Debug, Clone)]
pub struct HeuristicDecisionBackend {
    seed: u64,
}

impl HeuristicDecisionBackend {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Probability of a yes vote for `member` on `bill`.
    pub fn yes_probability(member: &Member, bill: &Bill) -> f64 {
        let base = (1.0 + member.ideology) / 2.0;
        let pull = AMENDMENT_MODERATION_STEP * bill.amendment_count() as f64;
        if base > 0.5 {
            (base - pull).max(0.5)
        } else {
            (base + pull).min(0.5)
        }
    }

    fn draw(&self, member: &Member, bill: &Bill) -> f64 {
        let key = format!("{}\u{1f}{}\u{1f}{}", member.id, bill.title, bill.summary);
        SeededRng::derived(self.seed, &key).next_f64()
    }
}

#[async_trait]
impl DecisionBackend for HeuristicDecisionBackend {
    fn name(&self) -> &str {
        "heuristic"
    }

    fn seed(&self) -> Option<u64> {
        Some(self.seed)
    }

    async fn decide(&self, member: &Member, bill: &Bill) -> Result<Decision, DecisionBackendError> {
        let p_yes = Self::yes_probability(member, bill);
        let u = self.draw(member, bill);

        let vote = if (u - p_yes).abs() < ABSTAIN_BAND {
            Vote::Abstain
        } else if u < p_yes {
            Vote::Yes
        } else {
            Vote::No
        };

        Ok(Decision::new(
            vote,
            format!(
                "ideology {:+.2} in a {} district gives p(yes) = {:.2}",
                member.ideology,
                member.district.lean_label(),
                p_yes
            ),
        ))
    }
}

/// Structured template speech, no inference involved.
#[derive(Debug, Clone, Default)]
pub struct TemplateSpeechGenerator;

#[async_trait]
impl SpeechGenerator for TemplateSpeechGenerator {
    fn name(&self) -> &str {
        "template"
    }

    async fn generate(
        &self,
        member: &Member,
        stance: Stance,
        bill: &Bill,
    ) -> Result<String, SpeechGenerationError> {
        Ok(template_speech(member, stance, bill))
    }
}

/// Amendment that narrows the issue objectors care about most.
#[derive(Debug, Clone, Default)]
pub struct TemplateAmendmentGenerator;

#[async_trait]
impl AmendmentGenerator for TemplateAmendmentGenerator {
    fn name(&self) -> &str {
        "template"
    }

    async fn propose(
        &self,
        request: &AmendmentRequest<'_>,
    ) -> Result<String, AmendmentGenerationError> {
        Ok(template_amendment(request.speeches, request.speakers))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chamber_domain::{District, MemberId, Speech};
    use std::sync::Arc;

    fn member(id: u32, ideology: f64) -> Member {
        let district = Arc::new(
            District::new("D-1", "Riverside", 0.3, 500_000)
                .with_weight("economy", 0.6)
                .with_weight("healthcare", 0.4),
        );
        Member::new(MemberId::new(id), district, ideology)
    }

    #[test]
    fn test_yes_probability() {
        let bill = Bill::new("Act", "Summary");
        assert_eq!(HeuristicDecisionBackend::yes_probability(&member(1, 1.0), &bill), 1.0);
        assert_eq!(HeuristicDecisionBackend::yes_probability(&member(1, -1.0), &bill), 0.0);
        assert_eq!(HeuristicDecisionBackend::yes_probability(&member(1, 0.0), &bill), 0.5);
    }

    #[test]
    fn test_amendments_moderate_probability() {
        let mut bill = Bill::new("Act", "Summary");
        bill.append_amendment(0, "One");
        bill.append_amendment(1, "Two");

        let left = HeuristicDecisionBackend::yes_probability(&member(1, 1.0), &bill);
        let right = HeuristicDecisionBackend::yes_probability(&member(2, -1.0), &bill);
        assert!((left - 0.9).abs() < 1e-9);
        assert!((right - 0.1).abs() < 1e-9);

        // never crosses 0.5
        let near = HeuristicDecisionBackend::yes_probability(&member(3, 0.1), &bill);
        assert_eq!(near, 0.5);
    }

    #[tokio::test]
    async fn test_decide_is_deterministic() {
        let bill = Bill::new("Act", "Summary");
        let a = HeuristicDecisionBackend::new(42);
        let b = HeuristicDecisionBackend::new(42);
        for id in 1..=20 {
            let m = member(id, 0.2);
            assert_eq!(
                a.decide(&m, &bill).await.unwrap(),
                b.decide(&m, &bill).await.unwrap()
            );
        }
    }

    #[tokio::test]
    async fn test_extreme_ideology_votes_predictably() {
        let bill = Bill::new("Act", "Summary");
        let backend = HeuristicDecisionBackend::new(7);
        for id in 1..=20 {
            let yes = backend.decide(&member(id, 1.0), &bill).await.unwrap();
            assert_ne!(yes.vote, Vote::No);
            let no = backend.decide(&member(id, -1.0), &bill).await.unwrap();
            assert_ne!(no.vote, Vote::Yes);
        }
    }

    #[tokio::test]
    async fn test_rationale_mentions_probability() {
        let backend = HeuristicDecisionBackend::new(1);
        let decision = backend
            .decide(&member(1, 0.5), &Bill::new("Act", "Summary"))
            .await
            .unwrap();
        assert!(decision.rationale.contains("p(yes) = 0.75"));
        assert!(decision.rationale.contains("left-leaning"));
    }

    #[tokio::test]
    async fn test_template_generators() {
        let bill = Bill::new("Act", "Summary");
        let speaker = member(1, -0.4);
        let speech = TemplateSpeechGenerator
            .generate(&speaker, Stance::Oppose, &bill)
            .await
            .unwrap();
        assert!(speech.starts_with("I oppose this bill."));

        let speeches = vec![Speech::new(speaker.id, Stance::Oppose, speech)];
        let speakers = vec![speaker];
        let request = AmendmentRequest {
            bill: &bill,
            round_index: 0,
            speeches: &speeches,
            speakers: &speakers,
            vote_failed: true,
        };
        let amendment = TemplateAmendmentGenerator.propose(&request).await.unwrap();
        assert!(amendment.contains("affecting economy"));
    }
}
