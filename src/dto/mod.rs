pub mod course_request;
pub mod enroll_request;
pub mod league_summary;
pub mod match_request;
pub mod match_snapshot;
pub mod round_request;
pub mod rules_request;
