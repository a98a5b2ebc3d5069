//! Inference-backed adapters
//!
//! Each adapter builds a pure prompt from the domain templates, sends it
//! through the shared [`LlmGateway`] and decodes the reply. None of them
//! retries; degraded output is handled by the caller's fallback.

use crate::ports::amendment_generator::{
    AmendmentGenerationError, AmendmentGenerator, AmendmentRequest,
};
use crate::ports::decision_backend::{DecisionBackend, DecisionBackendError};
use crate::ports::llm_gateway::LlmGateway;
use crate::ports::speech_generator::{SpeechGenerationError, SpeechGenerator};
use async_trait::async_trait;
use chamber_domain::{Bill, Decision, Member, PromptTemplate, Stance, parse_decision_response};
use std::sync::Arc;
use tracing::{debug, warn};

/// Vote decision delegated to a language model.
///
/// Transport failures and unparseable replies never leave this adapter as
/// errors: they become an abstain decision whose rationale says what went
/// wrong.
pub struct InferenceDecisionBackend {
    gateway: Arc<dyn LlmGateway>,
    name: String,
}

impl InferenceDecisionBackend {
    pub fn new(gateway: Arc<dyn LlmGateway>) -> Self {
        let name = format!("inference ({})", gateway.model());
        Self { gateway, name }
    }

    async fn try_decide(&self, member: &Member, bill: &Bill) -> Result<Decision, DecisionBackendError> {
        let prompt = PromptTemplate::decision_prompt(member, bill);
        let reply = self.gateway.generate(&prompt).await?;
        debug!("Decision reply for {}: {:?}", member.id, reply);
        Ok(parse_decision_response(&reply)?)
    }
}

#[async_trait]
impl DecisionBackend for InferenceDecisionBackend {
    fn name(&self) -> &str {
        &self.name
    }

    async fn decide(&self, member: &Member, bill: &Bill) -> Result<Decision, DecisionBackendError> {
        match self.try_decide(member, bill).await {
            Ok(decision) => Ok(decision),
            Err(e) => {
                warn!("Inference decision for {} failed: {}", member.id, e);
                Ok(Decision::abstain(format!("inference failed: {e}")))
            }
        }
    }
}

/// Speech text written by a language model.
pub struct LlmSpeechGenerator {
    gateway: Arc<dyn LlmGateway>,
    name: String,
}

impl LlmSpeechGenerator {
    pub fn new(gateway: Arc<dyn LlmGateway>) -> Self {
        let name = format!("llm ({})", gateway.model());
        Self { gateway, name }
    }
}

#[async_trait]
impl SpeechGenerator for LlmSpeechGenerator {
    fn name(&self) -> &str {
        &self.name
    }

    async fn generate(
        &self,
        member: &Member,
        stance: Stance,
        bill: &Bill,
    ) -> Result<String, SpeechGenerationError> {
        let prompt = PromptTemplate::speech_prompt(member, stance, bill);
        let reply = self.gateway.generate(&prompt).await?;
        let text = reply.trim();
        if text.is_empty() {
            return Err(SpeechGenerationError::Empty);
        }
        Ok(text.to_string())
    }
}

/// Amendment text drafted by a language model.
pub struct LlmAmendmentGenerator {
    gateway: Arc<dyn LlmGateway>,
    name: String,
}

impl LlmAmendmentGenerator {
    pub fn new(gateway: Arc<dyn LlmGateway>) -> Self {
        let name = format!("llm ({})", gateway.model());
        Self { gateway, name }
    }
}

#[async_trait]
impl AmendmentGenerator for LlmAmendmentGenerator {
    fn name(&self) -> &str {
        &self.name
    }

    async fn propose(
        &self,
        request: &AmendmentRequest<'_>,
    ) -> Result<String, AmendmentGenerationError> {
        let prompt =
            PromptTemplate::amendment_prompt(request.bill, request.round_index, request.speeches);
        let reply = self.gateway.generate(&prompt).await?;
        let text = reply.trim().trim_matches('"').trim();
        if text.is_empty() {
            return Err(AmendmentGenerationError::Empty);
        }
        Ok(text.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::llm_gateway::GatewayError;
    use chamber_domain::{District, MemberId, Speech, Vote};
    use std::collections::VecDeque;
    use std::sync::Mutex;

    /// Gateway that replays scripted replies and records prompts
    struct ScriptedGateway {
        replies: Mutex<VecDeque<Result<String, GatewayError>>>,
        prompts: Mutex<Vec<String>>,
    }

    impl ScriptedGateway {
        fn new(replies: Vec<Result<String, GatewayError>>) -> Arc<Self> {
            Arc::new(Self {
                replies: Mutex::new(replies.into()),
                prompts: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl LlmGateway for ScriptedGateway {
        fn model(&self) -> &str {
            "test-model"
        }

        async fn generate(&self, prompt: &str) -> Result<String, GatewayError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            self.replies
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or(Err(GatewayError::ConnectionError("script exhausted".into())))
        }
    }

    fn member() -> Member {
        let district = Arc::new(District::new("D-1", "Lakeside", -0.4, 300_000).with_weight("energy", 1.0));
        Member::new(MemberId::new(9), district, -0.3)
    }

    #[tokio::test]
    async fn test_decide_parses_json_reply() {
        let gateway = ScriptedGateway::new(vec![Ok(
            r#"{"vote": "No", "rationale": "Raises energy costs."}"#.to_string(),
        )]);
        let backend = InferenceDecisionBackend::new(gateway.clone());

        let decision = backend
            .decide(&member(), &Bill::new("Grid Act", "Upgrades the grid."))
            .await
            .unwrap();

        assert_eq!(decision.vote, Vote::No);
        assert_eq!(decision.rationale, "raises energy costs.");
        assert!(gateway.prompts.lock().unwrap()[0].contains("Grid Act"));
        assert_eq!(backend.name(), "inference (test-model)");
    }

    #[tokio::test]
    async fn test_unparseable_reply_abstains() {
        let gateway = ScriptedGateway::new(vec![Ok("Well, it depends on many things.".to_string())]);
        let backend = InferenceDecisionBackend::new(gateway);

        let decision = backend
            .decide(&member(), &Bill::new("A", "B"))
            .await
            .unwrap();

        assert_eq!(decision.vote, Vote::Abstain);
        assert!(decision.rationale.starts_with("inference failed:"));
    }

    #[tokio::test]
    async fn test_transport_error_abstains() {
        let gateway = ScriptedGateway::new(vec![Err(GatewayError::Timeout)]);
        let backend = InferenceDecisionBackend::new(gateway);

        let decision = backend
            .decide(&member(), &Bill::new("A", "B"))
            .await
            .unwrap();

        assert_eq!(decision.vote, Vote::Abstain);
        assert!(decision.rationale.contains("Timeout"));
    }

    #[tokio::test]
    async fn test_speech_trimmed_and_empty_rejected() {
        let gateway = ScriptedGateway::new(vec![
            Ok("  We must protect ratepayers.  \n".to_string()),
            Ok("   ".to_string()),
        ]);
        let generator = LlmSpeechGenerator::new(gateway.clone());
        let bill = Bill::new("A", "B");

        let text = generator
            .generate(&member(), Stance::Oppose, &bill)
            .await
            .unwrap();
        assert_eq!(text, "We must protect ratepayers.");
        assert!(gateway.prompts.lock().unwrap()[0].contains("Stance: oppose"));

        let empty = generator.generate(&member(), Stance::Oppose, &bill).await;
        assert!(matches!(empty, Err(SpeechGenerationError::Empty)));
    }

    #[tokio::test]
    async fn test_amendment_strips_quotes() {
        let gateway = ScriptedGateway::new(vec![Ok("\"Cap rate increases at 2% per year.\"".to_string())]);
        let generator = LlmAmendmentGenerator::new(gateway.clone());
        let bill = Bill::new("Grid Act", "Upgrades the grid.");
        let speeches = vec![Speech::new(MemberId::new(9), Stance::Oppose, "Too costly.")];
        let speakers = vec![member()];

        let text = generator
            .propose(&AmendmentRequest {
                bill: &bill,
                round_index: 0,
                speeches: &speeches,
                speakers: &speakers,
                vote_failed: true,
            })
            .await
            .unwrap();

        assert_eq!(text, "Cap rate increases at 2% per year.");
        assert!(gateway.prompts.lock().unwrap()[0].contains("M-0009 (oppose): Too costly."));
    }

    #[tokio::test]
    async fn test_amendment_gateway_error_propagates() {
        let gateway = ScriptedGateway::new(vec![Err(GatewayError::RequestFailed("503".into()))]);
        let generator = LlmAmendmentGenerator::new(gateway);
        let bill = Bill::new("A", "B");

        let result = generator
            .propose(&AmendmentRequest {
                bill: &bill,
                round_index: 0,
                speeches: &[],
                speakers: &[],
                vote_failed: true,
            })
            .await;
        assert!(matches!(result, Err(AmendmentGenerationError::Gateway(_))));
    }
}
