use serde::{Deserialize, Serialize};

/// A player's card for one match: nine hole scores in hole order, plus a
/// flag for absence entries (the phantom card posted for a no-show).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundRequest {
    pub hole_scores: Vec<i32>,
    #[serde(default)]
    pub player_absent: bool,
}
