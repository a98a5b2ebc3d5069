//! Decision response decoding.
//!
//! Turns the raw text of an inference reply into a [`Decision`]. This is a
//! strict decode step: a reply either matches one of the two accepted shapes
//! or it is a [`DecisionParseError`]. There is no best-effort keyword scraping;
//! callers decide what a parse failure means (the orchestrator abstains).
//!
//! # Accepted shapes
//!
//! | Shape | Example |
//! |-------|---------|
//! | Single vote token | `YES`, `no.`, `Abstain` |
//! | JSON object | `{"vote": "yes", "rationale": "Helps local employers."}` |
//!
//! The JSON object may be wrapped in a single Markdown code fence. Unknown
//! fields are rejected. The vote token and the rationale are trimmed and
//! lower-cased.

use crate::debate::stance::{Decision, Vote};
use serde::Deserialize;
use thiserror::Error;

/// Why a reply could not be decoded.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DecisionParseError {
    #[error("empty response")]
    Empty,

    #[error("unrecognized vote token: {0}")]
    UnrecognizedVote(String),

    #[error("malformed response: {0}")]
    Malformed(String),
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct DecisionPayload {
    vote: String,
    #[serde(default)]
    rationale: String,
}

/// Decode a raw inference reply.
///
/// # Examples
///
/// ```
/// use chamber_domain::{parse_decision_response, Vote};
///
/// let d = parse_decision_response("YES").unwrap();
/// assert_eq!(d.vote, Vote::Yes);
///
/// let d = parse_decision_response(r#"{"vote": "No", "rationale": " Too costly. "}"#).unwrap();
/// assert_eq!(d.vote, Vote::No);
/// assert_eq!(d.rationale, "too costly.");
///
/// assert!(parse_decision_response("I think I would probably say yes").is_err());
/// ```
pub fn parse_decision_response(response: &str) -> Result<Decision, DecisionParseError> {
    let trimmed = response.trim();
    if trimmed.is_empty() {
        return Err(DecisionParseError::Empty);
    }

    let body = strip_code_fence(trimmed);
    if body.starts_with('{') {
        return parse_json_payload(body);
    }

    if body.split_whitespace().count() == 1 {
        let token = body.trim_end_matches(['.', '!']).to_lowercase();
        let vote = token
            .parse::<Vote>()
            .map_err(|_| DecisionParseError::UnrecognizedVote(token.clone()))?;
        return Ok(Decision::new(vote, token));
    }

    Err(DecisionParseError::Malformed(
        "expected a single vote token or a {vote, rationale} JSON object".to_string(),
    ))
}

fn parse_json_payload(body: &str) -> Result<Decision, DecisionParseError> {
    let payload: DecisionPayload =
        serde_json::from_str(body).map_err(|e| DecisionParseError::Malformed(e.to_string()))?;

    let token = payload.vote.trim().to_lowercase();
    let vote = token
        .parse::<Vote>()
        .map_err(|_| DecisionParseError::UnrecognizedVote(token.clone()))?;

    Ok(Decision::new(vote, payload.rationale.trim().to_lowercase()))
}

/// Strip one surrounding ```` ``` ```` / ```` ```json ```` fence if present.
fn strip_code_fence(text: &str) -> &str {
    let Some(inner) = text.strip_prefix("```") else {
        return text;
    };
    let Some(inner) = inner.strip_suffix("```") else {
        return text;
    };
    let inner = inner.strip_prefix("json").unwrap_or(inner);
    inner.trim()
}
