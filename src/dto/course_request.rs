use serde::{Deserialize, Serialize};

/// Course definition as submitted by the league admin. Course par is
/// derived from the hole pars, so it is not accepted here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseRequest {
    pub name: String,
    pub course_rating: f64,
    pub slope_rating: i32,
    pub holes: Vec<HoleRequest>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HoleRequest {
    pub hole_number: i32,
    pub par: i32,
    pub stroke_index: i32,
}
