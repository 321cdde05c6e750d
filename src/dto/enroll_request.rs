use serde::{Deserialize, Serialize};

/// League enrollment for the authenticated user. The provisional index is
/// the committee-assigned starting handicap used until rounds are posted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnrollRequest {
    pub display_name: String,
    pub provisional_index: f64,
}
