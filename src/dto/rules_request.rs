use serde::{Deserialize, Serialize};

use crate::league_management::rules::PenaltyKind;

/// Score-entry rule check requested by the front end while a card is being
/// filled in. Tagged by rule so new checks can be added without new routes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum RulesCheckRequest {
    BreakfastBall {
        hole_number: i32,
    },
    PenaltyStroke {
        kind: PenaltyKind,
    },
    HazardDrop {
        lateral: bool,
        drop_distance_to_hole: f64,
        entry_distance_to_hole: f64,
        #[serde(default)]
        club_lengths_from_entry: Option<f64>,
    },
    LieImprovement {
        moved_inches: f64,
        obstacle_eliminated: bool,
    },
    Gimme {
        putt_distance_feet: f64,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RulesCheckResponse {
    pub allowed: bool,
    pub penalty_strokes: Option<i32>,
    pub detail: String,
}
