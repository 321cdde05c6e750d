use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create users table
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Users::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Users::ExternalId).string().not_null().unique_key())
                    .col(ColumnDef::new(Users::Email).string().not_null().unique_key())
                    .col(ColumnDef::new(Users::Name).string().null())
                    .col(ColumnDef::new(Users::CreatedAt).timestamp_with_time_zone().not_null())
                    .col(ColumnDef::new(Users::UpdatedAt).timestamp_with_time_zone().not_null())
                    .to_owned(),
            )
            .await?;

        // Create league_players table
        manager
            .create_table(
                Table::create()
                    .table(LeaguePlayers::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(LeaguePlayers::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(LeaguePlayers::UserId).uuid().not_null().unique_key())
                    .col(ColumnDef::new(LeaguePlayers::DisplayName).string().not_null())
                    .col(ColumnDef::new(LeaguePlayers::ProvisionalIndex).double().not_null())
                    .col(ColumnDef::new(LeaguePlayers::JoinedAt).timestamp_with_time_zone().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_league_players_user_id")
                            .from(LeaguePlayers::Table, LeaguePlayers::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                    )
                    .to_owned(),
            )
            .await?;

        // Create courses table
        manager
            .create_table(
                Table::create()
                    .table(Courses::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Courses::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Courses::Name).string().not_null())
                    .col(ColumnDef::new(Courses::Par).integer().not_null())
                    .col(ColumnDef::new(Courses::CourseRating).double().not_null())
                    .col(ColumnDef::new(Courses::SlopeRating).integer().not_null())
                    .col(ColumnDef::new(Courses::CreatedAt).timestamp_with_time_zone().not_null())
                    .to_owned(),
            )
            .await?;

        // Create course_holes table
        manager
            .create_table(
                Table::create()
                    .table(CourseHoles::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(CourseHoles::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(CourseHoles::CourseId).uuid().not_null())
                    .col(ColumnDef::new(CourseHoles::HoleNumber).integer().not_null())
                    .col(ColumnDef::new(CourseHoles::Par).integer().not_null())
                    .col(ColumnDef::new(CourseHoles::StrokeIndex).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_course_holes_course_id")
                            .from(CourseHoles::Table, CourseHoles::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                    )
                    .to_owned(),
            )
            .await?;

        // Create matches table
        manager
            .create_table(
                Table::create()
                    .table(Matches::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Matches::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Matches::CourseId).uuid().not_null())
                    .col(ColumnDef::new(Matches::PlayerAId).uuid().not_null())
                    .col(ColumnDef::new(Matches::PlayerBId).uuid().not_null())
                    .col(ColumnDef::new(Matches::Status).string_len(20).not_null())
                    .col(ColumnDef::new(Matches::ScheduledFor).timestamp_with_time_zone().not_null())
                    .col(ColumnDef::new(Matches::PlayerAPoints).integer().null())
                    .col(ColumnDef::new(Matches::PlayerBPoints).integer().null())
                    .col(ColumnDef::new(Matches::CreatedAt).timestamp_with_time_zone().not_null())
                    .col(ColumnDef::new(Matches::UpdatedAt).timestamp_with_time_zone().not_null())
                    .col(ColumnDef::new(Matches::CompletedAt).timestamp_with_time_zone().null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_matches_course_id")
                            .from(Matches::Table, Matches::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_matches_player_a_id")
                            .from(Matches::Table, Matches::PlayerAId)
                            .to(LeaguePlayers::Table, LeaguePlayers::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_matches_player_b_id")
                            .from(Matches::Table, Matches::PlayerBId)
                            .to(LeaguePlayers::Table, LeaguePlayers::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                    )
                    .to_owned(),
            )
            .await?;

        // Create scores table
        manager
            .create_table(
                Table::create()
                    .table(Scores::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Scores::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Scores::MatchId).uuid().not_null())
                    .col(ColumnDef::new(Scores::PlayerId).uuid().not_null())
                    .col(ColumnDef::new(Scores::HoleScores).json_binary().not_null())
                    .col(ColumnDef::new(Scores::HoleAdjustedGrossScores).json_binary().not_null())
                    .col(ColumnDef::new(Scores::MatchStrokes).json_binary().not_null())
                    .col(ColumnDef::new(Scores::MatchNetHoleScores).json_binary().not_null())
                    .col(ColumnDef::new(Scores::GrossScore).integer().not_null())
                    .col(ColumnDef::new(Scores::AdjustedGross).integer().not_null())
                    .col(ColumnDef::new(Scores::NetScore).integer().not_null())
                    .col(ColumnDef::new(Scores::MatchNetScore).integer().not_null())
                    .col(ColumnDef::new(Scores::HandicapDifferential).double().not_null())
                    .col(ColumnDef::new(Scores::HandicapIndex).double().not_null())
                    .col(ColumnDef::new(Scores::CourseHandicap).double().not_null())
                    .col(ColumnDef::new(Scores::PlayingHandicap).integer().not_null())
                    .col(ColumnDef::new(Scores::StrokesReceived).integer().not_null())
                    .col(ColumnDef::new(Scores::PlayerAbsent).boolean().not_null().default(false))
                    .col(ColumnDef::new(Scores::CreatedAt).timestamp_with_time_zone().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_scores_match_id")
                            .from(Scores::Table, Scores::MatchId)
                            .to(Matches::Table, Matches::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_scores_player_id")
                            .from(Scores::Table, Scores::PlayerId)
                            .to(LeaguePlayers::Table, LeaguePlayers::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                    )
                    .to_owned(),
            )
            .await?;

        // Create handicap_records table
        manager
            .create_table(
                Table::create()
                    .table(HandicapRecords::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(HandicapRecords::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(HandicapRecords::PlayerId).uuid().not_null())
                    .col(ColumnDef::new(HandicapRecords::LeagueHandicapIndex).double().not_null())
                    .col(ColumnDef::new(HandicapRecords::UpdatedAt).timestamp_with_time_zone().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_handicap_records_player_id")
                            .from(HandicapRecords::Table, HandicapRecords::PlayerId)
                            .to(LeaguePlayers::Table, LeaguePlayers::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Drop tables in reverse order due to foreign key constraints
        manager
            .drop_table(Table::drop().table(HandicapRecords::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Scores::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Matches::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(CourseHoles::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Courses::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(LeaguePlayers::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
    ExternalId,
    Email,
    Name,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum LeaguePlayers {
    Table,
    Id,
    UserId,
    DisplayName,
    ProvisionalIndex,
    JoinedAt,
}

#[derive(DeriveIden)]
enum Courses {
    Table,
    Id,
    Name,
    Par,
    CourseRating,
    SlopeRating,
    CreatedAt,
}

#[derive(DeriveIden)]
enum CourseHoles {
    Table,
    Id,
    CourseId,
    HoleNumber,
    Par,
    StrokeIndex,
}

#[derive(DeriveIden)]
enum Matches {
    Table,
    Id,
    CourseId,
    PlayerAId,
    PlayerBId,
    Status,
    ScheduledFor,
    PlayerAPoints,
    PlayerBPoints,
    CreatedAt,
    UpdatedAt,
    CompletedAt,
}

#[derive(DeriveIden)]
enum Scores {
    Table,
    Id,
    MatchId,
    PlayerId,
    HoleScores,
    HoleAdjustedGrossScores,
    MatchStrokes,
    MatchNetHoleScores,
    GrossScore,
    AdjustedGross,
    NetScore,
    MatchNetScore,
    HandicapDifferential,
    HandicapIndex,
    CourseHandicap,
    PlayingHandicap,
    StrokesReceived,
    PlayerAbsent,
    CreatedAt,
}

#[derive(DeriveIden)]
enum HandicapRecords {
    Table,
    Id,
    PlayerId,
    LeagueHandicapIndex,
    UpdatedAt,
}
