pub mod users;
pub mod league_players;
pub mod courses;
pub mod course_holes;
pub mod matches;
pub mod scores;
pub mod handicap_records;

pub use users::Entity as Users;
pub use league_players::Entity as LeaguePlayers;
pub use courses::Entity as Courses;
pub use course_holes::Entity as CourseHoles;
pub use matches::Entity as Matches;
pub use scores::Entity as Scores;
pub use handicap_records::Entity as HandicapRecords;
