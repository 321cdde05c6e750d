use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// One player's round for one match, written whole at submission time and
/// never amended. The four per-hole arrays are stored as JSON and always
/// hold nine entries ordered hole 1 through hole 9.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "scores")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub match_id: Uuid,
    pub player_id: Uuid,
    #[sea_orm(column_type = "JsonBinary")]
    pub hole_scores: Json,
    #[sea_orm(column_type = "JsonBinary")]
    pub hole_adjusted_gross_scores: Json,
    #[sea_orm(column_type = "JsonBinary")]
    pub match_strokes: Json,
    #[sea_orm(column_type = "JsonBinary")]
    pub match_net_hole_scores: Json,
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
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::matches::Entity",
        from = "Column::MatchId",
        to = "super::matches::Column::Id"
    )]
    Match,
    #[sea_orm(
        belongs_to = "super::league_players::Entity",
        from = "Column::PlayerId",
        to = "super::league_players::Column::Id"
    )]
    LeaguePlayer,
}

impl Related<super::matches::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Match.def()
    }
}

impl Related<super::league_players::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LeaguePlayer.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
