use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Posted league handicap index history. Recalculations insert a new row;
/// the most recent row per player is the current index.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "handicap_records")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub player_id: Uuid,
    pub league_handicap_index: f64,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::league_players::Entity",
        from = "Column::PlayerId",
        to = "super::league_players::Column::Id"
    )]
    LeaguePlayer,
}

impl Related<super::league_players::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LeaguePlayer.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
