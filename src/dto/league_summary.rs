use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Hole-by-hole breakdown of a completed match.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchSummary {
    #[serde(rename = "match")]
    pub match_info: MatchSummaryInfo,
    pub course_name: String,
    pub players: Vec<PlayerSummary>,
    pub holes: Vec<HoleResultSummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchSummaryInfo {
    pub id: Uuid,
    pub status: String,
    pub scheduled_for: DateTime<FixedOffset>,
    pub completed_at: Option<DateTime<FixedOffset>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerSummary {
    pub player_id: Uuid,
    pub display_name: String,
    pub side: String,
    pub points: i32,
    pub result: String,
    pub gross_score: i32,
    pub match_net_score: i32,
    pub playing_handicap: i32,
    pub strokes_received: i32,
    pub player_absent: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HoleResultSummary {
    pub hole_number: i32,
    pub par: i32,
    pub stroke_index: i32,
    pub net_a: i32,
    pub net_b: i32,
    pub points_a: i32,
    pub points_b: i32,
}

/// One row of the league table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandingEntry {
    pub rank: usize,
    pub player_id: Uuid,
    pub display_name: String,
    pub matches_played: usize,
    pub wins: usize,
    pub halves: usize,
    pub losses: usize,
    pub total_points: i32,
    pub handicap_index: f64,
}

/// A player's handicap position: current index plus the audit trail behind it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerHandicapSummary {
    pub player_id: Uuid,
    pub display_name: String,
    pub provisional_index: f64,
    pub current_index: f64,
    pub established_rounds: usize,
    pub records: Vec<HandicapRecordSummary>,
    pub differentials: Vec<DifferentialSummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HandicapRecordSummary {
    pub league_handicap_index: f64,
    pub updated_at: DateTime<FixedOffset>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DifferentialSummary {
    pub value: f64,
    pub recorded_at: DateTime<FixedOffset>,
}
