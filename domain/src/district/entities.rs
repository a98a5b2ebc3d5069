//! District entity

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Lean magnitude above which a district reads as clearly left or right.
pub const LEAN_LABEL_THRESHOLD: f64 = 0.15;

/// A weighted electoral district.
///
/// `lean` runs from -1 (right) to +1 (left). `population` is only a sampling
/// weight. `weights` maps issue name to salience; the values are expected to
/// sum to 1 but are normalised on read where it matters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct District {
    pub district_id: String,
    pub name: String,
    #[serde(default)]
    pub lean: f64,
    #[serde(default)]
    pub population: i64,
    #[serde(default)]
    pub weights: BTreeMap<String, f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state_fips: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cd: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub demographics: BTreeMap<String, f64>,
}

impl District {
    pub fn new(id: impl Into<String>, name: impl Into<String>, lean: f64, population: i64) -> Self {
        Self {
            district_id: id.into(),
            name: name.into(),
            lean,
            population,
            weights: BTreeMap::new(),
            state_fips: None,
            cd: None,
            demographics: BTreeMap::new(),
        }
    }

    pub fn with_weight(mut self, issue: impl Into<String>, weight: f64) -> Self {
        self.weights.insert(issue.into(), weight);
        self
    }

    /// Sampling weight: population clamped to at least 1.
    pub fn sampling_weight(&self) -> f64 {
        self.population.max(1) as f64
    }

    /// Issue weights rescaled to sum to 1.
    ///
    /// Negative and non-finite weights are dropped to zero first. An all-zero
    /// map stays all-zero.
    pub fn normalized_weights(&self) -> BTreeMap<String, f64> {
        let cleaned: BTreeMap<String, f64> = self
            .weights
            .iter()
            .map(|(issue, w)| {
                let w = if w.is_finite() { w.max(0.0) } else { 0.0 };
                (issue.clone(), w)
            })
            .collect();

        let total: f64 = cleaned.values().sum();
        if total <= 0.0 {
            return cleaned;
        }
        cleaned.into_iter().map(|(k, v)| (k, v / total)).collect()
    }

    /// The `n` most salient issues, highest weight first.
    ///
    /// Ties are broken by issue name so the order is stable.
    pub fn top_issues(&self, n: usize) -> Vec<(String, f64)> {
        let mut issues: Vec<(String, f64)> = self.normalized_weights().into_iter().collect();
        issues.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        issues.truncate(n);
        issues
    }

    pub fn lean_label(&self) -> LeanLabel {
        LeanLabel::from_lean(self.lean)
    }
}

/// Coarse reading of a district's lean, used in speech text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeanLabel {
    LeftLeaning,
    RightLeaning,
    Mixed,
}

impl LeanLabel {
    pub fn from_lean(lean: f64) -> Self {
        if lean > LEAN_LABEL_THRESHOLD {
            LeanLabel::LeftLeaning
        } else if lean < -LEAN_LABEL_THRESHOLD {
            LeanLabel::RightLeaning
        } else {
            LeanLabel::Mixed
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LeanLabel::LeftLeaning => "left-leaning",
            LeanLabel::RightLeaning => "right-leaning",
            LeanLabel::Mixed => "mixed",
        }
    }
}

impl std::fmt::Display for LeanLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
