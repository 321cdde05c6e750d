use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchRequest {
    pub course_id: Uuid,
    pub player_a_id: Uuid,
    pub player_b_id: Uuid,
    pub scheduled_for: DateTime<FixedOffset>,
}
