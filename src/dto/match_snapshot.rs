use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchSnapshot {
    #[serde(rename = "match")]
    pub match_info: MatchInfo,
    pub course: CourseSnapshot,
    pub players: Vec<MatchPlayerSnapshot>,
    pub scores: Vec<ScoreSnapshot>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchInfo {
    pub id: Uuid,
    pub status: String,
    pub scheduled_for: DateTime<FixedOffset>,
    pub player_a_points: Option<i32>,
    pub player_b_points: Option<i32>,
    pub created_at: DateTime<FixedOffset>,
    pub updated_at: DateTime<FixedOffset>,
    pub completed_at: Option<DateTime<FixedOffset>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseSnapshot {
    pub id: Uuid,
    pub name: String,
    pub par: i32,
    pub course_rating: f64,
    pub slope_rating: i32,
    pub holes: Vec<HoleSnapshot>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HoleSnapshot {
    pub hole_number: i32,
    pub par: i32,
    pub stroke_index: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchPlayerSnapshot {
    pub player_id: Uuid,
    pub user_id: Uuid,
    pub display_name: String,
    pub side: String,
    pub current_index: f64,
    pub round_submitted: bool,
    pub user: UserSnapshot,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSnapshot {
    pub id: Uuid,
    pub email: String,
    pub name: Option<String>,
}

/// Full stored score line for one player, arrays in hole order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreSnapshot {
    pub player_id: Uuid,
    pub hole_scores: Vec<i32>,
    pub hole_adjusted_gross_scores: Vec<i32>,
    pub match_strokes: Vec<i32>,
    pub match_net_hole_scores: Vec<i32>,
    pub gross_score: i32,
    pub adjusted_gross: i32,
    pub net_score: i32,
    pub match_net_score: i32,
    pub handicap_differential: f64,
    pub handicap_index: f64,
    pub course_handicap: f64,
    pub playing_handicap: i32,
    pub strokes_received: i32,
    pub player_absent: bool,
    pub recorded_at: DateTime<FixedOffset>,
}
