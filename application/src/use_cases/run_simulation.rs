//! Run Simulation use case
//!
//! Orchestrates the full multi-round chamber simulation:
//!
//! ```text
//! sample chamber (once)
//!   └─ per round: select spokespeople → decide + speak (sequential)
//!                 → roll call (batched, concurrent) → reconcile → decide
//!                 → passed / exhausted / amend and go again
//! ```

use crate::config::SimulationParams;
use crate::ports::amendment_generator::{AmendmentGenerator, AmendmentRequest};
use crate::ports::decision_backend::{DecisionBackend, DecisionBackendError};
use crate::ports::progress::{NoProgress, SimulationObserver, VoteProgress};
use crate::ports::speech_generator::SpeechGenerator;
use chamber_domain::{
    Bill, Decision, District, DomainError, FALLBACK_AMENDMENT, Member, MemberId, Round,
    SeededRng, SimulationPhase, SimulationResult, Speech, Vote, VoteTally, sample_members,
    select_spokespeople, template_speech,
};
use std::collections::BTreeSet;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use thiserror::Error;
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

/// Errors that abort a simulation run
///
/// Only sampling-phase and parameter errors end up here; per-member and
/// per-round failures degrade to data instead.
#[derive(Error, Debug)]
pub enum RunSimulationError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Invalid simulation parameters: {0}")]
    InvalidParams(String),
}

/// Input for the RunSimulation use case
#[derive(Debug, Clone)]
pub struct RunSimulationInput {
    pub districts: Vec<Arc<District>>,
    pub bill: Bill,
    pub params: SimulationParams,
}

impl RunSimulationInput {
    pub fn new(districts: Vec<Arc<District>>, bill: Bill) -> Self {
        Self {
            districts,
            bill,
            params: SimulationParams::default(),
        }
    }

    pub fn with_params(mut self, params: SimulationParams) -> Self {
        self.params = params;
        self
    }
}

/// Use case for running a chamber simulation
pub struct RunSimulationUseCase {
    decision_backend: Arc<dyn DecisionBackend>,
    speech_generator: Arc<dyn SpeechGenerator>,
    amendment_generator: Arc<dyn AmendmentGenerator>,
}

impl RunSimulationUseCase {
    pub fn new(
        decision_backend: Arc<dyn DecisionBackend>,
        speech_generator: Arc<dyn SpeechGenerator>,
        amendment_generator: Arc<dyn AmendmentGenerator>,
    ) -> Self {
        Self {
            decision_backend,
            speech_generator,
            amendment_generator,
        }
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(
        &self,
        input: RunSimulationInput,
    ) -> Result<SimulationResult, RunSimulationError> {
        self.execute_with_progress(input, &NoProgress).await
    }

    /// Execute the use case with observer callbacks
    pub async fn execute_with_progress(
        &self,
        input: RunSimulationInput,
        observer: &dyn SimulationObserver,
    ) -> Result<SimulationResult, RunSimulationError> {
        let RunSimulationInput {
            districts,
            bill,
            params,
        } = input;
        params.validate().map_err(RunSimulationError::InvalidParams)?;

        let backend_seed = self.decision_backend.seed();
        if let (Some(run), Some(backend)) = (params.seed, backend_seed) {
            if run != backend {
                warn!(
                    "Run seed {} differs from the {} backend seed {}; replays need both",
                    run,
                    self.decision_backend.name(),
                    backend
                );
            }
        }
        let mut rng = SeededRng::new(params.seed.or(backend_seed));
        let seed = rng.seed();

        let mut phase = SimulationPhase::Sampling;
        observer.on_phase(&phase);
        let members = sample_members(
            &districts,
            params.member_count,
            params.ideology_jitter,
            &mut rng,
        )?;
        info!(
            "Sampled {} members from {} districts (seed {})",
            members.len(),
            districts.len(),
            seed
        );
        observer.on_simulation_start(members.len(), params.max_rounds, seed);

        let degraded = AtomicUsize::new(0);
        let mut bill = bill;
        let mut rounds = Vec::new();

        for round_index in 0..params.max_rounds {
            let snapshot = Arc::new(bill.clone());

            phase = advance(phase, observer);
            debug_assert_eq!(phase, SimulationPhase::Debating(round_index));
            info!("Round {}: {}", round_index + 1, phase);
            let speakers = select_spokespeople(&members, params.spokesperson_count);
            observer.on_round_start(round_index, speakers.len(), &snapshot);
            let speeches = self
                .debate(round_index, &speakers, &snapshot, &params, observer, &degraded)
                .await;

            phase = advance(phase, observer);
            let mut tally = self
                .roll_call(round_index, &members, &snapshot, &params, observer, &degraded)
                .await;

            phase = advance(phase, observer);
            let changed = tally.reconcile(&speeches);
            if changed > 0 {
                debug!(
                    "Round {}: reconciled {} spokesperson vote(s) with their speeches",
                    round_index + 1,
                    changed
                );
            }
            observer.on_vote_update(round_index, &vote_progress(&tally, members.len()));

            phase = advance(phase, observer);
            info!(
                "Round {}: yes={} no={} abstain={} passed={}",
                round_index + 1,
                tally.yes,
                tally.no,
                tally.abstain,
                tally.passed
            );
            phase = SimulationPhase::after_decision(round_index, tally.passed, params.max_rounds);

            let amendment = if let SimulationPhase::Amending(_) = phase {
                observer.on_phase(&phase);
                let text = self
                    .amend(round_index, &snapshot, &speeches, &speakers)
                    .await;
                bill.append_amendment(round_index, &text);
                // The bill strips any round tag the generator echoed back
                bill.amendments.last().cloned()
            } else {
                None
            };

            let snapshot = Arc::try_unwrap(snapshot).unwrap_or_else(|shared| (*shared).clone());
            let mut round = Round::new(round_index, snapshot, speeches, tally);
            round.amendment = amendment;
            observer.on_round_complete(&round);
            rounds.push(round);

            if phase.is_terminal() {
                info!("Simulation finished: {}", phase);
                observer.on_phase(&phase);
                break;
            }
        }

        let degraded = degraded.into_inner();
        let mut result = SimulationResult::new(seed, members, rounds)
            .with_note(format!("Votes decided by the {} backend", self.decision_backend.name()))
            .with_note(format!(
                "Debate speeches written by the {} generator",
                self.speech_generator.name()
            ))
            .with_note(format!(
                "Amendments drafted by the {} generator",
                self.amendment_generator.name()
            ));
        if degraded > 0 {
            result = result.with_note(format!(
                "{degraded} decision(s) or generator call(s) degraded to a fallback"
            ));
        }

        observer.on_simulation_complete(&result);
        Ok(result)
    }

    /// Spokespeople decide and speak one after another, so speech order and
    /// observer events are reproducible.
    async fn debate(
        &self,
        round_index: usize,
        speakers: &[Member],
        bill: &Bill,
        params: &SimulationParams,
        observer: &dyn SimulationObserver,
        degraded: &AtomicUsize,
    ) -> Vec<Speech> {
        let mut speeches = Vec::with_capacity(speakers.len());

        for member in speakers {
            let (decision, failed) = decide_or_abstain(
                self.decision_backend.as_ref(),
                member,
                bill,
                params.decision_timeout,
            )
            .await;
            if failed {
                degraded.fetch_add(1, Ordering::Relaxed);
            }
            let stance = decision.stance();

            let text = match self.speech_generator.generate(member, stance, bill).await {
                Ok(text) => text,
                Err(e) => {
                    warn!("Speech for {} fell back to template: {}", member.id, e);
                    degraded.fetch_add(1, Ordering::Relaxed);
                    template_speech(member, stance, bill)
                }
            };

            let speech = Speech::new(member.id, stance, text);
            observer.on_speech(round_index, member, &speech);
            speeches.push(speech);
        }

        speeches
    }

    /// Whole-chamber vote.
    ///
    /// Batches run one after another; calls inside a batch run concurrently.
    /// Results are folded into the tally only by this loop.
    async fn roll_call(
        &self,
        round_index: usize,
        members: &[Member],
        bill: &Arc<Bill>,
        params: &SimulationParams,
        observer: &dyn SimulationObserver,
        degraded: &AtomicUsize,
    ) -> VoteTally {
        let mut tally = VoteTally::new(params.threshold);

        for (batch_index, batch) in members.chunks(params.batch_size).enumerate() {
            let mut join_set = JoinSet::new();
            let mut pending: BTreeSet<MemberId> = batch.iter().map(|m| m.id).collect();

            for (slot, member) in batch.iter().enumerate() {
                let backend = Arc::clone(&self.decision_backend);
                let bill = Arc::clone(bill);
                let member = member.clone();
                let delay = params.stagger * slot as u32;
                let timeout = params.decision_timeout;

                join_set.spawn(async move {
                    if !delay.is_zero() {
                        tokio::time::sleep(delay).await;
                    }
                    let outcome = decide_or_abstain(backend.as_ref(), &member, &bill, timeout).await;
                    (member.id, outcome)
                });
            }

            while let Some(joined) = join_set.join_next().await {
                match joined {
                    Ok((member_id, (decision, failed))) => {
                        if failed {
                            degraded.fetch_add(1, Ordering::Relaxed);
                        }
                        pending.remove(&member_id);
                        tally.record(member_id, decision.vote);
                    }
                    Err(e) => {
                        warn!("Decision task join error: {}", e);
                    }
                }
            }

            // A task that panicked still owes the chamber a vote.
            for member_id in pending {
                degraded.fetch_add(1, Ordering::Relaxed);
                tally.record(member_id, Vote::Abstain);
            }

            debug!(
                "Round {} batch {}: {} of {} decided",
                round_index + 1,
                batch_index + 1,
                tally.total(),
                members.len()
            );
            observer.on_vote_update(round_index, &vote_progress(&tally, members.len()));
        }

        tally
    }

    async fn amend(
        &self,
        round_index: usize,
        bill: &Bill,
        speeches: &[Speech],
        speakers: &[Member],
    ) -> String {
        let request = AmendmentRequest {
            bill,
            round_index,
            speeches,
            speakers,
            vote_failed: true,
        };

        match self.amendment_generator.propose(&request).await {
            Ok(text) if !text.trim().is_empty() => text.trim().to_string(),
            Ok(_) => {
                warn!("Amendment generator returned nothing; using fallback amendment");
                FALLBACK_AMENDMENT.to_string()
            }
            Err(e) => {
                warn!("Amendment generation failed, using fallback amendment: {}", e);
                FALLBACK_AMENDMENT.to_string()
            }
        }
    }
}

/// Ask the backend, turning every error (and an expired timeout) into an
/// abstain decision. The flag reports whether the fallback was used.
async fn decide_or_abstain(
    backend: &dyn DecisionBackend,
    member: &Member,
    bill: &Bill,
    timeout: Option<Duration>,
) -> (Decision, bool) {
    let result = match timeout {
        Some(limit) => match tokio::time::timeout(limit, backend.decide(member, bill)).await {
            Ok(result) => result,
            Err(_) => Err(DecisionBackendError::Timeout),
        },
        None => backend.decide(member, bill).await,
    };

    match result {
        Ok(decision) => (decision, false),
        Err(e) => {
            warn!("Decision for {} degraded to abstain: {}", member.id, e);
            (Decision::abstain(format!("decision failed: {e}")), true)
        }
    }
}

/// Step to the next linear phase and announce it.
fn advance(phase: SimulationPhase, observer: &dyn SimulationObserver) -> SimulationPhase {
    let next = phase.next().unwrap_or(phase);
    observer.on_phase(&next);
    next
}

fn vote_progress(tally: &VoteTally, total: usize) -> VoteProgress {
    VoteProgress {
        yes: tally.yes,
        no: tally.no,
        abstain: tally.abstain,
        decided: tally.total(),
        total,
    }
}
