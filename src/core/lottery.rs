//! Weighted lottery selection
//!
//! Candidates are `(account, points)` pairs in creation order. A draw value
//! `r` in `1..=total_points` selects the first candidate whose cumulative
//! points reach `r`, so each candidate wins with probability
//! `points / total_points`. Zero-point candidates never advance the running
//! total and can never be selected.

use crate::types::AccountId;
use rand::Rng;

/// A lottery participant: account number and its weight
pub type Candidate = (AccountId, u64);

/// Sum of all candidate points
///
/// Saturates instead of overflowing.
pub fn total_points(candidates: &[Candidate]) -> u64 {
    candidates
        .iter()
        .fold(0u64, |total, &(_, points)| total.saturating_add(points))
}

/// Draw a value uniformly from `1..=total`
///
/// Returns `None` when `total` is 0, since the range would be empty.
pub fn draw_value<R: Rng>(rng: &mut R, total: u64) -> Option<u64> {
    if total == 0 {
        return None;
    }
    Some(rng.gen_range(1..=total))
}

/// Select the candidate matching `draw` by cumulative-sum threshold scan
///
/// Returns `None` if no candidate's cumulative points reach `draw` (which
/// happens only for `draw` outside `1..=total_points`).
pub fn select_weighted(candidates: &[Candidate], draw: u64) -> Option<AccountId> {
    if draw == 0 {
        return None;
    }
    let mut cumulative = 0u64;
    for &(account, points) in candidates {
        cumulative = cumulative.saturating_add(points);
        if cumulative >= draw {
            return Some(account);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use rstest::rstest;

    #[test]
    fn test_total_points() {
        assert_eq!(total_points(&[(1, 2), (2, 5), (3, 0)]), 7);
        assert_eq!(total_points(&[]), 0);
    }

    #[test]
    fn test_total_points_saturates() {
        assert_eq!(total_points(&[(1, u64::MAX), (2, 1)]), u64::MAX);
    }

    #[rstest]
    #[case::first_lower_bound(1, Some(1))]
    #[case::first_upper_bound(2, Some(1))]
    #[case::second_lower_bound(3, Some(2))]
    #[case::second_upper_bound(7, Some(2))]
    #[case::above_total(8, None)]
    #[case::zero(0, None)]
    fn test_select_weighted_two_accounts(#[case] draw: u64, #[case] expected: Option<AccountId>) {
        // points 2 and 5, total 7
        let candidates = [(1, 2), (2, 5)];
        assert_eq!(select_weighted(&candidates, draw), expected);
    }

    #[rstest]
    #[case(1, Some(2))]
    #[case(3, Some(2))]
    #[case(4, Some(4))]
    fn test_select_weighted_skips_zero_point_accounts(
        #[case] draw: u64,
        #[case] expected: Option<AccountId>,
    ) {
        let candidates = [(1, 0), (2, 3), (3, 0), (4, 1)];
        assert_eq!(select_weighted(&candidates, draw), expected);
    }

    #[test]
    fn test_select_weighted_all_zero_points() {
        let candidates = [(1, 0), (2, 0)];
        assert_eq!(select_weighted(&candidates, 1), None);
    }

    #[test]
    fn test_draw_value_empty_range() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(draw_value(&mut rng, 0), None);
    }

    #[test]
    fn test_draw_value_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let value = draw_value(&mut rng, 7).unwrap();
            assert!((1..=7).contains(&value));
        }
    }

    #[test]
    fn test_draw_value_single_point() {
        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(draw_value(&mut rng, 1), Some(1));
    }

    #[test]
    fn test_every_draw_selects_someone() {
        let candidates = [(1, 2), (2, 0), (3, 5), (4, 1)];
        let total = total_points(&candidates);
        for draw in 1..=total {
            let winner = select_weighted(&candidates, draw);
            assert!(winner.is_some());
            assert_ne!(winner, Some(2));
        }
    }
}
