//! Scoring module
//!
//! Pure per-hole scoring logic: the stroke-allotment table, the Net
//! Double Bogey adjusted gross score, and match-net application. All
//! functions take pre-fetched data and perform no database operations.

use crate::league_management::rules::{
    validate_course_holes, validate_hole_scores, Hole, ValidationError, NEW_PLAYER_CAP_OVER_PAR,
};

/// How hole scores are capped when computing the adjusted gross score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdjustmentPolicy {
    /// Established players: cap at par + 2 + strokes received on the hole
    NetDoubleBogey { playing_handicap: i32 },
    /// Players with fewer than five rounds: cap at par + 5 regardless of
    /// strokes
    NewPlayer,
}

/// Result of adjusting one nine-hole card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjustedRound {
    /// Per-hole adjusted scores, hole order
    pub hole_adjusted_scores: Vec<i32>,
    /// Sum of the adjusted scores
    pub adjusted_gross: i32,
}

/// Strokes a playing handicap yields on one hole.
///
/// Single-course repeat allocation for nine-hole play: the first nine
/// handicap strokes land one per hole by difficulty, the next nine add a
/// second stroke the same way, and so on. Intentionally not the 18-hole
/// allocation table.
pub fn strokes_for_hole(playing_handicap: i32, stroke_index: i32) -> i32 {
    if playing_handicap <= 9 {
        if playing_handicap >= stroke_index {
            1
        } else {
            0
        }
    } else if playing_handicap <= 18 {
        if playing_handicap - 9 >= stroke_index {
            2
        } else {
            1
        }
    } else if playing_handicap - 18 >= stroke_index {
        3
    } else {
        2
    }
}

/// Adjusted gross score for one card under the caller-selected policy
pub fn adjusted_gross_score(
    gross_hole_scores: &[i32],
    holes: &[Hole],
    policy: AdjustmentPolicy,
) -> Result<AdjustedRound, ValidationError> {
    validate_hole_scores(gross_hole_scores)?;
    validate_course_holes(holes)?;

    let hole_adjusted_scores: Vec<i32> = gross_hole_scores
        .iter()
        .zip(holes)
        .map(|(&gross, hole)| {
            let cap = match policy {
                AdjustmentPolicy::NetDoubleBogey { playing_handicap } => {
                    hole.par + 2 + strokes_for_hole(playing_handicap, hole.stroke_index)
                }
                AdjustmentPolicy::NewPlayer => hole.par + NEW_PLAYER_CAP_OVER_PAR,
            };
            gross.min(cap)
        })
        .collect();

    let adjusted_gross = hole_adjusted_scores.iter().sum();

    Ok(AdjustedRound {
        hole_adjusted_scores,
        adjusted_gross,
    })
}

/// Subtract allotted match strokes from gross hole scores
pub fn apply_match_strokes(gross_hole_scores: &[i32], match_strokes: &[i32]) -> Vec<i32> {
    gross_hole_scores
        .iter()
        .zip(match_strokes)
        .map(|(&gross, &strokes)| gross - strokes)
        .collect()
}
