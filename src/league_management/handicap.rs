//! Handicap module
//!
//! Pure handicap arithmetic: score differentials, the rolling league
//! handicap index, course and playing handicaps, and the substitute
//! handicap used for absence entries. No function here touches the
//! database; callers hand in plain values and histories.

use chrono::{DateTime, FixedOffset};

use crate::league_management::rules::{
    ABSENT_BASE_OFFSET, ABSENT_MAX_OFFSET, ABSENT_WORST_COUNT, DIFFERENTIALS_CONSIDERED,
    DIFFERENTIALS_USED, SLOPE_BASELINE,
};

/// One round's standardized performance measure. Immutable once recorded;
/// a player's history is append-only.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Differential {
    pub value: f64,
    pub recorded_at: DateTime<FixedOffset>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandicapError {
    NoDifferentials,
}

impl std::fmt::Display for HandicapError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HandicapError::NoDifferentials => {
                write!(f, "no differentials available; use the provisional index")
            }
        }
    }
}

/// Round to one decimal place, ties away from zero
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Score differential for one round. Unrounded; rounding happens at the
/// index stage.
pub fn score_differential(adjusted_gross_score: i32, course_rating: f64, slope_rating: i32) -> f64 {
    (f64::from(adjusted_gross_score) - course_rating) * SLOPE_BASELINE / f64::from(slope_rating)
}

/// League handicap index from a differential history.
///
/// With fewer than `num_considered` differentials available the index is
/// the straight mean of everything on record (the insufficient-history
/// fallback, not an error). Otherwise the `num_considered` most recent
/// differentials are pooled and the lowest `num_used` of them averaged,
/// dropping the worst of the pool. Result is rounded to one decimal.
pub fn handicap_index(
    differentials: &[Differential],
    num_used: usize,
    num_considered: usize,
) -> Result<f64, HandicapError> {
    if differentials.is_empty() {
        return Err(HandicapError::NoDifferentials);
    }

    let values: Vec<f64> = if differentials.len() < num_considered {
        differentials.iter().map(|d| d.value).collect()
    } else {
        // Stable sort keeps submission order for same-day rounds
        let mut recent: Vec<&Differential> = differentials.iter().collect();
        recent.sort_by(|a, b| b.recorded_at.cmp(&a.recorded_at));

        let mut pool: Vec<f64> = recent[..num_considered].iter().map(|d| d.value).collect();
        pool.sort_by(f64::total_cmp);
        pool.truncate(num_used);
        pool
    };

    let mean = values.iter().sum::<f64>() / values.len() as f64;
    Ok(round_to_tenth(mean))
}

/// Index after a player's first round: the provisional still dominates
pub fn index_after_one_round(provisional: f64, d1: f64) -> f64 {
    round_to_tenth((2.0 * provisional + d1) / 3.0)
}

/// Index after a player's second round
pub fn index_after_two_rounds(provisional: f64, d1: f64, d2: f64) -> f64 {
    round_to_tenth((provisional + d1 + d2) / 3.0)
}

/// Recalculate a player's league index after a round is posted.
///
/// Dispatches on history length: the 1- and 2-round ladders blend the
/// committee-assigned provisional with the early differentials; from the
/// third round on the drop-and-average rule applies (which itself falls
/// back to a straight mean below five rounds). `history` is the player's
/// full non-absent differential record in chronological order.
pub fn recalculated_index(provisional: f64, history: &[Differential]) -> f64 {
    match history {
        [] => round_to_tenth(provisional),
        [d1] => index_after_one_round(provisional, d1.value),
        [d1, d2] => index_after_two_rounds(provisional, d1.value, d2.value),
        _ => handicap_index(history, DIFFERENTIALS_USED, DIFFERENTIALS_CONSIDERED)
            .unwrap_or_else(|_| round_to_tenth(provisional)),
    }
}

/// Course handicap: index scaled by slope, corrected for rating vs par.
/// Unrounded; rounding happens at the playing-handicap stage.
pub fn course_handicap(index: f64, slope_rating: i32, course_rating: f64, par: i32) -> f64 {
    index * f64::from(slope_rating) / SLOPE_BASELINE + (course_rating - f64::from(par))
}

/// Playing handicap: course handicap under the league allowance, rounded
/// to the nearest whole stroke with ties away from zero
pub fn playing_handicap(course_handicap: f64, allowance: f64) -> i32 {
    (course_handicap * allowance).round() as i32
}

/// Substitute handicap for an absent player.
///
/// Base is the posted handicap plus two strokes. When at least three
/// recent differentials are computable, the worst three are averaged and
/// the larger of base and that average is taken. The result never exceeds
/// the posted handicap plus four, and is rounded to one decimal.
pub fn absent_handicap(posted_handicap: f64, recent_differentials: &[f64]) -> f64 {
    let base = posted_handicap + ABSENT_BASE_OFFSET;
    let ceiling = posted_handicap + ABSENT_MAX_OFFSET;

    let adjusted = if recent_differentials.len() >= ABSENT_WORST_COUNT {
        let mut worst = recent_differentials.to_vec();
        worst.sort_by(|a, b| b.total_cmp(a));
        let worst_avg =
            worst[..ABSENT_WORST_COUNT].iter().sum::<f64>() / ABSENT_WORST_COUNT as f64;
        base.max(worst_avg)
    } else {
        base
    };

    round_to_tenth(adjusted.min(ceiling))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn diff(value: f64, day: u32) -> Differential {
        Differential {
            value,
            recorded_at: Utc
                .with_ymd_and_hms(2025, 6, day, 12, 0, 0)
                .unwrap()
                .into(),
        }
    }

    #[test]
    fn test_score_differential_formula() {
        // (40 - 36.1) * 113 / 120 = 3.67225
        let d = score_differential(40, 36.1, 120);
        assert!((d - 3.672_25).abs() < 1e-9);
    }

    #[test]
    fn test_score_differential_unrounded() {
        let d = score_differential(47, 35.4, 117);
        assert!((d - (47.0 - 35.4) * 113.0 / 117.0).abs() < 1e-12);
    }

    #[test]
    fn test_handicap_index_rulebook_worked_example() {
        // Five differentials: drop the worst two (15.5, 18.0), average the
        // lowest three -> 12.1666... -> 12.2
        let history = vec![
            diff(10.5, 1),
            diff(12.0, 2),
            diff(14.0, 3),
            diff(15.5, 4),
            diff(18.0, 5),
        ];

        let index = handicap_index(&history, DIFFERENTIALS_USED, DIFFERENTIALS_CONSIDERED);
        assert_eq!(index, Ok(12.2));
    }

    #[test]
    fn test_handicap_index_uses_most_recent_considered() {
        // Six rounds: the oldest (a terrible 25.0) falls out of the
        // considered window entirely
        let history = vec![
            diff(25.0, 1),
            diff(10.5, 2),
            diff(12.0, 3),
            diff(14.0, 4),
            diff(15.5, 5),
            diff(18.0, 6),
        ];

        let index = handicap_index(&history, DIFFERENTIALS_USED, DIFFERENTIALS_CONSIDERED);
        assert_eq!(index, Ok(12.2));
    }

    #[test]
    fn test_handicap_index_four_rounds_straight_average() {
        // Below the considered count: straight mean, no drops
        let history = vec![diff(10.0, 1), diff(12.0, 2), diff(14.0, 3), diff(16.0, 4)];

        let index = handicap_index(&history, DIFFERENTIALS_USED, DIFFERENTIALS_CONSIDERED);
        assert_eq!(index, Ok(13.0));
    }

    #[test]
    fn test_handicap_index_empty_history_is_error() {
        let index = handicap_index(&[], DIFFERENTIALS_USED, DIFFERENTIALS_CONSIDERED);
        assert_eq!(index, Err(HandicapError::NoDifferentials));
    }

    #[test]
    fn test_handicap_index_rounds_to_one_decimal() {
        let history = vec![diff(10.0, 1), diff(10.1, 2)];
        // mean = 10.05 -> 10.1 (ties away from zero)
        let index = handicap_index(&history, DIFFERENTIALS_USED, DIFFERENTIALS_CONSIDERED);
        assert_eq!(index, Ok(10.1));
    }

    #[test]
    fn test_early_ladder_one_round() {
        // (2 * 12.0 + 15.0) / 3 = 13.0
        assert_eq!(index_after_one_round(12.0, 15.0), 13.0);
    }

    #[test]
    fn test_early_ladder_two_rounds() {
        // (12.0 + 15.0 + 9.0) / 3 = 12.0
        assert_eq!(index_after_two_rounds(12.0, 15.0, 9.0), 12.0);
    }

    #[test]
    fn test_recalculated_index_dispatch() {
        assert_eq!(recalculated_index(12.0, &[]), 12.0);
        assert_eq!(recalculated_index(12.0, &[diff(15.0, 1)]), 13.0);
        assert_eq!(
            recalculated_index(12.0, &[diff(15.0, 1), diff(9.0, 2)]),
            12.0
        );

        // Three rounds: provisional no longer participates
        assert_eq!(
            recalculated_index(12.0, &[diff(10.0, 1), diff(12.0, 2), diff(14.0, 3)]),
            12.0
        );

        // Five rounds: full drop-and-average
        let history = vec![
            diff(10.5, 1),
            diff(12.0, 2),
            diff(14.0, 3),
            diff(15.5, 4),
            diff(18.0, 5),
        ];
        assert_eq!(recalculated_index(30.0, &history), 12.2);
    }

    #[test]
    fn test_course_handicap_formula() {
        // 12.2 * 120 / 113 + (36.1 - 36) = 13.0558...
        let ch = course_handicap(12.2, 120, 36.1, 36);
        assert!((ch - (12.2 * 120.0 / 113.0 + 0.1)).abs() < 1e-9);
    }

    #[test]
    fn test_playing_handicap_rulebook_worked_example() {
        // 13.95 * 0.95 = 13.2525 -> 13
        assert_eq!(playing_handicap(13.95, 0.95), 13);
    }

    #[test]
    fn test_playing_handicap_half_rounds_away_from_zero() {
        // 13.5 exactly at the boundary rounds up
        assert_eq!(playing_handicap(13.5, 1.0), 14);
        // Negative (plus-handicap) boundary rounds away from zero too
        assert_eq!(playing_handicap(-13.5, 1.0), -14);
        assert_eq!(playing_handicap(0.5, 1.0), 1);
        assert_eq!(playing_handicap(-0.5, 1.0), -1);
    }

    #[test]
    fn test_round_to_tenth_boundaries() {
        assert_eq!(round_to_tenth(12.15), 12.2);
        assert_eq!(round_to_tenth(-12.15), -12.2);
        assert_eq!(round_to_tenth(12.04), 12.0);
    }

    #[test]
    fn test_absent_handicap_base_beats_mild_history() {
        // posted 10: base 12 beats a worst-three average of 11.5
        let result = absent_handicap(10.0, &[11.5, 11.5, 11.5, 8.0, 9.0]);
        assert_eq!(result, 12.0);
    }

    #[test]
    fn test_absent_handicap_worst_three_beats_base_but_capped() {
        // posted 10: worst-three average 16 would win, but the ceiling is 14
        let result = absent_handicap(10.0, &[16.0, 16.0, 16.0, 8.0, 9.0]);
        assert_eq!(result, 14.0);
    }

    #[test]
    fn test_absent_handicap_worst_three_between_base_and_cap() {
        // posted 10: worst three of {13.0, 13.5, 12.5} average 13.0
        let result = absent_handicap(10.0, &[13.0, 13.5, 12.5, 8.0]);
        assert_eq!(result, 13.0);
    }

    #[test]
    fn test_absent_handicap_too_few_differentials_uses_base() {
        assert_eq!(absent_handicap(10.0, &[20.0, 20.0]), 12.0);
        assert_eq!(absent_handicap(10.0, &[]), 12.0);
    }
}
