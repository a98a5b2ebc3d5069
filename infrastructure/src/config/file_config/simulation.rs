//! Simulation configuration from TOML (`[simulation]` section)

use chamber_application::SimulationParams;
use chamber_domain::{
    ConfigIssue, ConfigIssueCode, DEFAULT_IDEOLOGY_JITTER, DEFAULT_PASS_THRESHOLD,
    DEFAULT_SPOKESPERSON_COUNT,
};
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use std::time::Duration;

/// Chamber sizes the simulator was tuned for.
pub const RECOMMENDED_MEMBERS: RangeInclusive<usize> = 10..=1000;
pub const MAX_MEMBERS: usize = 5000;
pub const RECOMMENDED_MAX_ROUNDS: usize = 10;
pub const MAX_ROUNDS: usize = 25;

/// Raw simulation configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSimulationConfig {
    pub members: usize,
    pub rounds: usize,
    pub spokespeople: usize,
    pub batch_size: usize,
    /// Per-slot delay inside a voting batch, in milliseconds
    pub stagger_ms: u64,
    pub threshold: f64,
    pub jitter: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decision_timeout_secs: Option<u64>,
}

impl Default for FileSimulationConfig {
    fn default() -> Self {
        let params = SimulationParams::default();
        Self {
            members: params.member_count,
            rounds: params.max_rounds,
            spokespeople: DEFAULT_SPOKESPERSON_COUNT,
            batch_size: params.batch_size,
            stagger_ms: 0,
            threshold: DEFAULT_PASS_THRESHOLD,
            jitter: DEFAULT_IDEOLOGY_JITTER,
            seed: None,
            decision_timeout_secs: None,
        }
    }
}

impl FileSimulationConfig {
    pub fn to_params(&self) -> SimulationParams {
        SimulationParams::default()
            .with_member_count(self.members)
            .with_max_rounds(self.rounds)
            .with_spokesperson_count(self.spokespeople)
            .with_batch_size(self.batch_size)
            .with_stagger(Duration::from_millis(self.stagger_ms))
            .with_threshold(self.threshold)
            .with_ideology_jitter(self.jitter)
            .with_seed(self.seed)
            .with_decision_timeout(self.decision_timeout_secs.map(Duration::from_secs))
    }

    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if self.members == 0 {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::MemberCountZero,
                "simulation.members must be at least 1",
            ));
        } else if self.members > MAX_MEMBERS {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::MemberCountOutOfRange,
                format!(
                    "simulation.members = {} exceeds the maximum of {}",
                    self.members, MAX_MEMBERS
                ),
            ));
        } else if !RECOMMENDED_MEMBERS.contains(&self.members) {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::MemberCountOutOfRange,
                format!(
                    "simulation.members = {} is outside the recommended range {}..={}",
                    self.members,
                    RECOMMENDED_MEMBERS.start(),
                    RECOMMENDED_MEMBERS.end()
                ),
            ));
        }

        if self.rounds == 0 || self.rounds > MAX_ROUNDS {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::RoundCountOutOfRange,
                format!(
                    "simulation.rounds = {} must be within 1..={}",
                    self.rounds, MAX_ROUNDS
                ),
            ));
        } else if self.rounds > RECOMMENDED_MAX_ROUNDS {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::RoundCountAboveRecommended,
                format!(
                    "simulation.rounds = {} is above the recommended {}",
                    self.rounds, RECOMMENDED_MAX_ROUNDS
                ),
            ));
        }

        if self.spokespeople == 0 {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::SpokespersonCountZero,
                "simulation.spokespeople = 0: rounds will have no debate",
            ));
        }

        if self.batch_size == 0 {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::BatchSizeZero,
                "simulation.batch_size must be at least 1",
            ));
        }

        if !(0.0..=1.0).contains(&self.threshold) {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::ThresholdOutOfRange,
                format!("simulation.threshold = {} must be within 0..=1", self.threshold),
            ));
        }

        if !self.jitter.is_finite() || self.jitter < 0.0 {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::JitterNegative,
                format!("simulation.jitter = {} must be a non-negative number", self.jitter),
            ));
        }

        if self.decision_timeout_secs == Some(0) {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::TimeoutZero,
                "simulation.decision_timeout_secs must be greater than zero",
            ));
        }

        issues
    }
}
