//! Match play module
//!
//! Pure two-player match logic: allocating handicap strokes between the
//! matched players and scoring the 22-point match from net hole scores.

use crate::league_management::rules::{
    validate_course_holes, Hole, ValidationError, HOLES_PER_ROUND,
};

/// Points for winning a hole outright
pub const HOLE_WIN_POINTS: i32 = 2;

/// Bonus points for the lower aggregate net score
pub const TOTAL_WIN_POINTS: i32 = 4;

/// Points at stake per match
pub const MATCH_TOTAL_POINTS: i32 =
    HOLE_WIN_POINTS * HOLES_PER_ROUND as i32 + TOTAL_WIN_POINTS;

/// Match strokes for both players, hole order. The allocator owns both
/// arrays: exactly one side is non-zero unless the handicaps are equal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrokeAllocation {
    pub strokes_a: [i32; HOLES_PER_ROUND],
    pub strokes_b: [i32; HOLES_PER_ROUND],
}

impl StrokeAllocation {
    /// Strokes received by the receiving side (zero when handicaps are
    /// equal)
    pub fn strokes_received(&self) -> i32 {
        let a: i32 = self.strokes_a.iter().sum();
        let b: i32 = self.strokes_b.iter().sum();
        a.max(b)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchPlayError {
    WrongNetScoreCount { side: char, actual: usize },
}

impl std::fmt::Display for MatchPlayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchPlayError::WrongNetScoreCount { side, actual } => {
                write!(
                    f,
                    "player {side} must have exactly {HOLES_PER_ROUND} net scores, got {actual}"
                )
            }
        }
    }
}

/// Distribute the handicap difference between two matched players.
///
/// Only the higher-handicap player receives strokes; the count is the
/// absolute difference. Strokes land one per hole in ascending
/// stroke-index order (hardest first), wrapping around before any hole
/// gets a third. Swapping the inputs swaps which array is non-zero.
pub fn assign_strokes(
    playing_handicap_a: i32,
    playing_handicap_b: i32,
    holes: &[Hole],
) -> Result<StrokeAllocation, ValidationError> {
    validate_course_holes(holes)?;

    let mut allocation = StrokeAllocation {
        strokes_a: [0; HOLES_PER_ROUND],
        strokes_b: [0; HOLES_PER_ROUND],
    };

    let difference = (playing_handicap_a - playing_handicap_b).abs();
    if difference == 0 {
        return Ok(allocation);
    }

    // Hole positions ordered hardest first
    let mut order: Vec<usize> = (0..HOLES_PER_ROUND).collect();
    order.sort_by_key(|&i| holes[i].stroke_index);

    let receiving = if playing_handicap_a > playing_handicap_b {
        &mut allocation.strokes_a
    } else {
        &mut allocation.strokes_b
    };

    for n in 0..difference as usize {
        receiving[order[n % HOLES_PER_ROUND]] += 1;
    }

    Ok(allocation)
}

/// Score a completed match from both players' net hole scores.
///
/// Per hole the lower net score earns two points and a tie splits them;
/// the lower aggregate earns a four-point bonus and a tie splits it. The
/// points always sum to 22.
pub fn calculate_match_points(net_a: &[i32], net_b: &[i32]) -> Result<(i32, i32), MatchPlayError> {
    if net_a.len() != HOLES_PER_ROUND {
        return Err(MatchPlayError::WrongNetScoreCount {
            side: 'A',
            actual: net_a.len(),
        });
    }
    if net_b.len() != HOLES_PER_ROUND {
        return Err(MatchPlayError::WrongNetScoreCount {
            side: 'B',
            actual: net_b.len(),
        });
    }

    let mut points_a = 0;
    let mut points_b = 0;

    for (a, b) in net_a.iter().zip(net_b) {
        let (hole_a, hole_b) = hole_points(*a, *b);
        points_a += hole_a;
        points_b += hole_b;
    }

    let total_a: i32 = net_a.iter().sum();
    let total_b: i32 = net_b.iter().sum();

    match total_a.cmp(&total_b) {
        std::cmp::Ordering::Less => points_a += TOTAL_WIN_POINTS,
        std::cmp::Ordering::Greater => points_b += TOTAL_WIN_POINTS,
        std::cmp::Ordering::Equal => {
            points_a += TOTAL_WIN_POINTS / 2;
            points_b += TOTAL_WIN_POINTS / 2;
        }
    }

    Ok((points_a, points_b))
}

/// Points for one hole: lower net score wins both, a tie splits them
pub fn hole_points(net_a: i32, net_b: i32) -> (i32, i32) {
    match net_a.cmp(&net_b) {
        std::cmp::Ordering::Less => (HOLE_WIN_POINTS, 0),
        std::cmp::Ordering::Greater => (0, HOLE_WIN_POINTS),
        std::cmp::Ordering::Equal => (HOLE_WIN_POINTS / 2, HOLE_WIN_POINTS / 2),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nine_holes() -> Vec<Hole> {
        (1..=9)
            .map(|i| Hole {
                par: 4,
                stroke_index: i,
            })
            .collect()
    }

    /// Course where hole order differs from difficulty order
    fn scrambled_holes() -> Vec<Hole> {
        [5, 1, 8, 3, 9, 2, 7, 4, 6]
            .iter()
            .map(|&si| Hole {
                par: 4,
                stroke_index: si,
            })
            .collect()
    }

    #[test]
    fn test_assign_strokes_equal_handicaps_all_zero() {
        let allocation = assign_strokes(10, 10, &nine_holes()).unwrap();
        assert_eq!(allocation.strokes_a, [0; 9]);
        assert_eq!(allocation.strokes_b, [0; 9]);
        assert_eq!(allocation.strokes_received(), 0);
    }

    #[test]
    fn test_assign_strokes_higher_handicap_receives() {
        let allocation = assign_strokes(13, 10, &nine_holes()).unwrap();
        // A receives 3 strokes on the three hardest holes
        assert_eq!(allocation.strokes_a, [1, 1, 1, 0, 0, 0, 0, 0, 0]);
        assert_eq!(allocation.strokes_b, [0; 9]);
        assert_eq!(allocation.strokes_received(), 3);
    }

    #[test]
    fn test_assign_strokes_follows_stroke_index_order() {
        // On the scrambled course the two hardest holes are at positions
        // 1 (stroke index 1) and 5 (stroke index 2)
        let allocation = assign_strokes(12, 10, &scrambled_holes()).unwrap();
        assert_eq!(allocation.strokes_a, [0, 1, 0, 0, 0, 1, 0, 0, 0]);
    }

    #[test]
    fn test_assign_strokes_wraps_beyond_nine() {
        // Difference of 11: every hole gets one, the two hardest get a
        // second before any hole gets a third
        let allocation = assign_strokes(18, 7, &nine_holes()).unwrap();
        assert_eq!(allocation.strokes_a, [2, 2, 1, 1, 1, 1, 1, 1, 1]);
        assert_eq!(allocation.strokes_received(), 11);
    }

    #[test]
    fn test_assign_strokes_antisymmetric() {
        let holes = scrambled_holes();
        let forward = assign_strokes(14, 9, &holes).unwrap();
        let swapped = assign_strokes(9, 14, &holes).unwrap();

        assert_eq!(forward.strokes_a, swapped.strokes_b);
        assert_eq!(forward.strokes_b, swapped.strokes_a);
        assert_eq!(forward.strokes_received(), 5);
        assert_eq!(swapped.strokes_received(), 5);
    }

    #[test]
    fn test_assign_strokes_sum_equals_difference() {
        let holes = nine_holes();
        for (a, b) in [(0, 0), (5, 2), (2, 5), (20, 3), (9, 18)] {
            let allocation = assign_strokes(a, b, &holes).unwrap();
            let total: i32 = allocation.strokes_a.iter().sum::<i32>()
                + allocation.strokes_b.iter().sum::<i32>();
            assert_eq!(total, (a - b).abs());
        }
    }

    #[test]
    fn test_assign_strokes_rejects_bad_course() {
        let mut holes = nine_holes();
        holes[0].stroke_index = 2; // duplicate
        assert!(assign_strokes(10, 8, &holes).is_err());
    }

    #[test]
    fn test_match_points_sum_to_twenty_two() {
        let cases: Vec<(Vec<i32>, Vec<i32>)> = vec![
            (vec![4; 9], vec![4; 9]),
            (vec![3, 4, 5, 4, 3, 4, 5, 4, 4], vec![4, 4, 4, 4, 4, 4, 4, 4, 4]),
            (vec![6, 6, 6, 6, 6, 6, 6, 6, 6], vec![3, 3, 3, 3, 3, 3, 3, 3, 3]),
            (vec![4, 5, 4, 5, 4, 5, 4, 5, 4], vec![5, 4, 5, 4, 5, 4, 5, 4, 5]),
        ];

        for (net_a, net_b) in cases {
            let (a, b) = calculate_match_points(&net_a, &net_b).unwrap();
            assert_eq!(a + b, MATCH_TOTAL_POINTS);
        }
    }

    #[test]
    fn test_match_points_all_square() {
        // Every hole halved and totals equal: 9 + 2 = 11 each
        let (a, b) = calculate_match_points(&[4; 9], &[4; 9]).unwrap();
        assert_eq!((a, b), (11, 11));
    }

    #[test]
    fn test_match_points_clean_sweep() {
        let (a, b) = calculate_match_points(&[3; 9], &[5; 9]).unwrap();
        assert_eq!((a, b), (22, 0));
    }

    #[test]
    fn test_match_points_holes_split_total_decides() {
        // B wins one hole big, A edges the rest... holes 4-4 points-wise
        // after four wins each and a halve, totals decide the bonus
        let net_a = vec![4, 4, 4, 4, 8, 5, 5, 5, 5];
        let net_b = vec![5, 5, 5, 5, 4, 4, 4, 4, 5];
        let (a, b) = calculate_match_points(&net_a, &net_b).unwrap();
        // A: 4 holes won = 8 + 1 halved = 9; B: 4 holes won = 8 + 1 = 9
        // Totals: A 44, B 41 -> B takes the bonus
        assert_eq!((a, b), (9, 13));
    }

    #[test]
    fn test_match_points_total_tie_splits_bonus() {
        let net_a = vec![3, 5, 4, 4, 4, 4, 4, 4, 4];
        let net_b = vec![5, 3, 4, 4, 4, 4, 4, 4, 4];
        let (a, b) = calculate_match_points(&net_a, &net_b).unwrap();
        assert_eq!((a, b), (11, 11));
    }

    #[test]
    fn test_match_points_rejects_wrong_length() {
        assert_eq!(
            calculate_match_points(&[4; 8], &[4; 9]),
            Err(MatchPlayError::WrongNetScoreCount {
                side: 'A',
                actual: 8
            })
        );
        assert_eq!(
            calculate_match_points(&[4; 9], &[4; 10]),
            Err(MatchPlayError::WrongNetScoreCount {
                side: 'B',
                actual: 10
            })
        );
    }

    #[test]
    fn test_hole_points() {
        assert_eq!(hole_points(3, 4), (2, 0));
        assert_eq!(hole_points(5, 4), (0, 2));
        assert_eq!(hole_points(4, 4), (1, 1));
    }
}
