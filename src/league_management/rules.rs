//! League rules module
//!
//! This module contains league configuration constants, course/score
//! validation, and the stateless score-entry rules (breakfast ball,
//! penalty strokes, hazard drops, lie improvement, gimmes) that depend
//! only on in-memory domain types and std.

use serde::{Deserialize, Serialize};

/// Number of holes per round
pub const HOLES_PER_ROUND: usize = 9;

/// Number of recent differentials considered for an established index
pub const DIFFERENTIALS_CONSIDERED: usize = 5;

/// Number of lowest differentials averaged (the worst two are dropped)
pub const DIFFERENTIALS_USED: usize = 3;

/// Rounds needed before a player is established
pub const ESTABLISHED_ROUNDS: usize = 5;

/// Standard slope rating the differential formula is normalized against
pub const SLOPE_BASELINE: f64 = 113.0;

/// Allowance applied to the course handicap for match play
pub const PLAYING_HANDICAP_ALLOWANCE: f64 = 0.95;

/// Per-hole cap over par for players without an established history
pub const NEW_PLAYER_CAP_OVER_PAR: i32 = 5;

/// Strokes added to a posted handicap for an absence entry
pub const ABSENT_BASE_OFFSET: f64 = 2.0;

/// Hard ceiling over the posted handicap for an absence entry
pub const ABSENT_MAX_OFFSET: f64 = 4.0;

/// Worst differentials compared against the absence base
pub const ABSENT_WORST_COUNT: usize = 3;

/// Only hole where a breakfast ball may be taken
pub const BREAKFAST_BALL_HOLE: i32 = 1;

/// Maximum lie improvement in inches
pub const MAX_FLUFF_INCHES: f64 = 3.0;

/// Maximum conceded putt length in feet
pub const MAX_GIMME_FEET: f64 = 2.0;

/// Maximum lateral-hazard drop distance in club lengths
pub const MAX_LATERAL_DROP_CLUB_LENGTHS: f64 = 2.0;

/// One nine-hole course hole as the engine sees it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hole {
    pub par: i32,
    /// 1 = hardest .. 9 = easiest
    pub stroke_index: i32,
}

/// Input and course-configuration failures, rejected before computation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    WrongHoleScoreCount(usize),
    NonPositiveHoleScore { hole: usize, score: i32 },
    WrongHoleCount(usize),
    NonPositivePar { hole: usize, par: i32 },
    StrokeIndexNotPermutation,
    NonPositiveSlopeRating(i32),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::WrongHoleScoreCount(n) => {
                write!(f, "expected {HOLES_PER_ROUND} hole scores, got {n}")
            }
            ValidationError::NonPositiveHoleScore { hole, score } => {
                write!(f, "hole {hole} score must be positive, got {score}")
            }
            ValidationError::WrongHoleCount(n) => {
                write!(f, "course must have {HOLES_PER_ROUND} holes, got {n}")
            }
            ValidationError::NonPositivePar { hole, par } => {
                write!(f, "hole {hole} par must be positive, got {par}")
            }
            ValidationError::StrokeIndexNotPermutation => {
                write!(
                    f,
                    "hole stroke indexes must form a permutation of 1..={HOLES_PER_ROUND}"
                )
            }
            ValidationError::NonPositiveSlopeRating(s) => {
                write!(f, "slope rating must be positive, got {s}")
            }
        }
    }
}

/// Validate a submitted nine-hole score card
pub fn validate_hole_scores(hole_scores: &[i32]) -> Result<(), ValidationError> {
    if hole_scores.len() != HOLES_PER_ROUND {
        return Err(ValidationError::WrongHoleScoreCount(hole_scores.len()));
    }

    for (i, score) in hole_scores.iter().enumerate() {
        if *score <= 0 {
            return Err(ValidationError::NonPositiveHoleScore {
                hole: i + 1,
                score: *score,
            });
        }
    }

    Ok(())
}

/// Validate a course hole layout: nine holes, positive pars, and stroke
/// indexes forming a permutation of 1..=9
pub fn validate_course_holes(holes: &[Hole]) -> Result<(), ValidationError> {
    if holes.len() != HOLES_PER_ROUND {
        return Err(ValidationError::WrongHoleCount(holes.len()));
    }

    for (i, hole) in holes.iter().enumerate() {
        if hole.par <= 0 {
            return Err(ValidationError::NonPositivePar {
                hole: i + 1,
                par: hole.par,
            });
        }
    }

    let mut seen = [false; HOLES_PER_ROUND];
    for hole in holes {
        if hole.stroke_index < 1 || hole.stroke_index > HOLES_PER_ROUND as i32 {
            return Err(ValidationError::StrokeIndexNotPermutation);
        }
        let slot = (hole.stroke_index - 1) as usize;
        if seen[slot] {
            return Err(ValidationError::StrokeIndexNotPermutation);
        }
        seen[slot] = true;
    }

    Ok(())
}

/// Validate a course slope rating
pub fn validate_slope_rating(slope_rating: i32) -> Result<(), ValidationError> {
    if slope_rating <= 0 {
        return Err(ValidationError::NonPositiveSlopeRating(slope_rating));
    }
    Ok(())
}

/// Penalty situations, each worth exactly one stroke
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PenaltyKind {
    OutOfBounds,
    LostBall,
    Hazard,
    LateralHazard,
}

/// Strokes added for a penalty situation
pub fn penalty_strokes(kind: PenaltyKind) -> i32 {
    match kind {
        PenaltyKind::OutOfBounds
        | PenaltyKind::LostBall
        | PenaltyKind::Hazard
        | PenaltyKind::LateralHazard => 1,
    }
}

/// A breakfast ball (free replay of the opening tee shot) is allowed on
/// hole 1 only
pub fn breakfast_ball_allowed(hole_number: i32) -> bool {
    hole_number == BREAKFAST_BALL_HOLE
}

/// When a breakfast ball is taken, the replayed shot is authoritative
pub fn breakfast_ball_score(_first_shot: i32, second_shot: i32) -> i32 {
    second_shot
}

/// A hazard drop must not be nearer the hole than the point of entry
pub fn is_valid_hazard_drop(drop_distance_to_hole: f64, entry_distance_to_hole: f64) -> bool {
    drop_distance_to_hole >= entry_distance_to_hole
}

/// A lateral-hazard drop must not be nearer the hole and must be within
/// two club lengths of the point of entry
pub fn is_valid_lateral_drop(
    drop_distance_to_hole: f64,
    entry_distance_to_hole: f64,
    club_lengths_from_entry: f64,
) -> bool {
    is_valid_hazard_drop(drop_distance_to_hole, entry_distance_to_hole)
        && club_lengths_from_entry <= MAX_LATERAL_DROP_CLUB_LENGTHS
}

/// Lie improvement ("fluff"): legal if the ball moved no further than the
/// configured maximum and no obstacle was eliminated by the move
pub fn is_valid_fluff(moved_inches: f64, obstacle_eliminated: bool, max_inches: f64) -> bool {
    moved_inches <= max_inches && !obstacle_eliminated
}

/// A putt is conceded if it is within the configured gimme distance;
/// otherwise it must be holed out
pub fn is_gimme(putt_distance_feet: f64, max_feet: f64) -> bool {
    putt_distance_feet <= max_feet
}
