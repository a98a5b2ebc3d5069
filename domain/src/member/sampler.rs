//! Population sampler
//!
//! Draws the fixed chamber for a run from a weighted list of districts.

use crate::core::error::DomainError;
use crate::core::rng::SeededRng;
use crate::district::District;
use crate::member::entities::{Member, MemberId};
use std::sync::Arc;

/// Default standard deviation of a member's ideology around district lean.
pub const DEFAULT_IDEOLOGY_JITTER: f64 = 0.35;

/// Draw `n` members from `districts` with replacement.
///
/// Districts are weighted by `max(1, population)`. Each member's ideology is
/// `clamp(gauss(lean, jitter_stddev), -1, 1)`. Ids are assigned sequentially
/// starting at `M-0001`.
///
/// Fails with [`DomainError::NoDistricts`] when `districts` is empty.
pub fn sample_members(
    districts: &[Arc<District>],
    n: usize,
    jitter_stddev: f64,
    rng: &mut SeededRng,
) -> Result<Vec<Member>, DomainError> {
    if districts.is_empty() {
        return Err(DomainError::NoDistricts);
    }

    let weights: Vec<f64> = districts.iter().map(|d| d.sampling_weight()).collect();

    let mut members = Vec::with_capacity(n);
    for i in 0..n {
        let district = rng.weighted_choice(districts, Some(&weights))?;
        let ideology = rng.gauss(district.lean, jitter_stddev).clamp(-1.0, 1.0);
        members.push(Member::new(
            MemberId::new(i as u32 + 1),
            Arc::clone(district),
            ideology,
        ));
    }
    Ok(members)
}
