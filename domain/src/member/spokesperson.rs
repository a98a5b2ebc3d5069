//! Spokesperson selection
//!
//! Picks a small ideological cross-section of the chamber to speak in the
//! debate phase of a round. Selection is fully deterministic: the same chamber
//! and `k` always yield the same speakers.
//!
//! ```text
//! sorted by ideology:  0 ........ n/4 ........ n/2 ........ 3n/4 ........ n-1
//! anchors:             *           *            *            *             *
//! back-fill order:                        ... mid-1, mid, mid+1 ...
//!                                  [---- interquartile band ----)
//! ```

use crate::member::entities::Member;
use std::collections::BTreeSet;

/// Default number of speakers per round.
pub const DEFAULT_SPOKESPERSON_COUNT: usize = 7;

/// Select up to `k` spokespeople, returned sorted by ideology ascending.
///
/// - `members.len() <= k`: everyone speaks.
/// - Otherwise the extremes and quartiles (`0, n/4, n/2, 3n/4, n-1`) are taken
///   first. With `k < 5` the `k` anchors are spread evenly over `[0, n-1]`
///   instead.
/// - Remaining slots are back-filled from the interquartile band
///   `[n/4, 3n/4)`, walking outward from the median, until `k` speakers are
///   chosen or the band is exhausted.
///
/// Ties in ideology keep sampling order (stable sort).
pub fn select_spokespeople(members: &[Member], k: usize) -> Vec<Member> {
    let mut sorted: Vec<&Member> = members.iter().collect();
    sorted.sort_by(|a, b| a.ideology.total_cmp(&b.ideology));

    let n = sorted.len();
    if n <= k {
        return sorted.into_iter().cloned().collect();
    }
    if k == 0 {
        return Vec::new();
    }

    let mut chosen: BTreeSet<usize> = anchor_positions(n, k).into_iter().collect();

    for pos in backfill_order(n) {
        if chosen.len() >= k {
            break;
        }
        chosen.insert(pos);
    }

    // Positions index the ideology-sorted list, so iterating the ordered set
    // yields speakers already sorted by ideology.
    chosen.into_iter().map(|pos| sorted[pos].clone()).collect()
}

fn anchor_positions(n: usize, k: usize) -> Vec<usize> {
    let last = n - 1;
    if k >= 5 {
        return vec![0, n / 4, n / 2, 3 * n / 4, last];
    }
    if k == 1 {
        return vec![n / 2];
    }
    (0..k).map(|i| i * last / (k - 1)).collect()
}

/// Interquartile positions ordered by distance from the median, lower first.
fn backfill_order(n: usize) -> Vec<usize> {
    let (lo, hi) = (n / 4, 3 * n / 4);
    let mid = n / 2;
    let mut order = Vec::with_capacity(hi.saturating_sub(lo));
    if !(lo..hi).contains(&mid) {
        return order;
    }

    order.push(mid);
    let mut step = 1;
    loop {
        let below = mid.checked_sub(step).filter(|p| *p >= lo);
        let above = Some(mid + step).filter(|p| *p < hi);
        if below.is_none() && above.is_none() {
            break;
        }
        order.extend(below);
        order.extend(above);
        step += 1;
    }
    order
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::district::District;
    use crate::member::entities::MemberId;
    use std::sync::Arc;

    fn chamber(ideologies: &[f64]) -> Vec<Member> {
        let district = Arc::new(District::new("D", "D", 0.0, 1));
        ideologies
            .iter()
            .enumerate()
            .map(|(i, x)| Member::new(MemberId::new(i as u32 + 1), Arc::clone(&district), *x))
            .collect()
    }

    fn spread(n: usize) -> Vec<Member> {
        // ideology decreasing with id so sorting actually reorders
        let ideologies: Vec<f64> = (0..n)
            .map(|i| 1.0 - 2.0 * i as f64 / (n - 1) as f64)
            .collect();
        chamber(&ideologies)
    }

    fn is_sorted(members: &[Member]) -> bool {
        members.windows(2).all(|w| w[0].ideology <= w[1].ideology)
    }

    #[test]
    fn test_small_chamber_returns_everyone_sorted() {
        let members = chamber(&[0.4, -0.2, 0.1]);
        let chosen = select_spokespeople(&members, 7);
        assert_eq!(chosen.len(), 3);
        assert!(is_sorted(&chosen));
    }

    #[test]
    fn test_picks_k_unique_sorted() {
        let members = spread(40);
        let chosen = select_spokespeople(&members, 7);
        assert_eq!(chosen.len(), 7);
        assert!(is_sorted(&chosen));
        let ids: BTreeSet<MemberId> = chosen.iter().map(|m| m.id).collect();
        assert_eq!(ids.len(), 7);
    }

    #[test]
    fn test_includes_extremes() {
        let members = spread(40);
        let chosen = select_spokespeople(&members, 7);
        assert_eq!(chosen.first().unwrap().ideology, -1.0);
        assert_eq!(chosen.last().unwrap().ideology, 1.0);
    }

    #[test]
    fn test_deterministic() {
        let members = spread(101);
        let a = select_spokespeople(&members, 9);
        let b = select_spokespeople(&members, 9);
        assert_eq!(a, b);
    }

    #[test]
    fn test_backfill_stays_in_band() {
        let n = 40;
        let members = spread(n);
        let chosen = select_spokespeople(&members, 9);
        let mut sorted = members.clone();
        sorted.sort_by(|a, b| a.ideology.total_cmp(&b.ideology));
        let anchors = [0, n / 4, n / 2, 3 * n / 4, n - 1];
        for m in &chosen {
            let pos = sorted.iter().position(|s| s.id == m.id).unwrap();
            assert!(anchors.contains(&pos) || (n / 4..3 * n / 4).contains(&pos));
        }
    }

    #[test]
    fn test_backfill_fills_remaining_slots() {
        let members = spread(8);
        let chosen = select_spokespeople(&members, 7);
        // anchors {0,2,4,6,7} + band [2,6) → {2,3,4,5} → union size 7
        assert_eq!(chosen.len(), 7);

        let members = spread(6);
        let chosen = select_spokespeople(&members, 5);
        assert_eq!(chosen.len(), 5);
    }

    #[test]
    fn test_band_exhausted_before_k() {
        // n = 10, k = 9: anchors {0,2,5,7,9}, band [2,7) = {2,3,4,5,6}
        // union = {0,2,3,4,5,6,7,9} = 8 < 9
        let members = spread(10);
        let chosen = select_spokespeople(&members, 9);
        assert_eq!(chosen.len(), 8);
    }

    #[test]
    fn test_small_k_spread_evenly() {
        let members = spread(21);
        let chosen = select_spokespeople(&members, 3);
        let ideologies: Vec<f64> = chosen.iter().map(|m| m.ideology).collect();
        assert_eq!(ideologies.len(), 3);
        assert_eq!(ideologies[0], -1.0);
        assert!(ideologies[1].abs() < 1e-12);
        assert_eq!(ideologies[2], 1.0);
    }

    #[test]
    fn test_zero_k() {
        assert!(select_spokespeople(&spread(10), 0).is_empty());
    }

    #[test]
    fn test_ties_keep_sampling_order() {
        let members = chamber(&[0.0, 0.0, 0.0]);
        let chosen = select_spokespeople(&members, 5);
        let ids: Vec<u32> = chosen.iter().map(|m| m.id.value()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }
}
