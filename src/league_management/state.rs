//! League state module
//!
//! This module contains database-coupled read and assembly logic: current
//! posted indices, differential histories, match snapshots and summaries,
//! and the league standings table. Writes live in the orchestration
//! module; everything here only reads.

use sea_orm::{ColumnTrait, EntityTrait, Order, QueryFilter, QueryOrder, QuerySelect};
use uuid::Uuid;

use crate::dto::league_summary::{
    DifferentialSummary, HandicapRecordSummary, HoleResultSummary, MatchSummary, MatchSummaryInfo,
    PlayerHandicapSummary, PlayerSummary, StandingEntry,
};
use crate::dto::match_snapshot::{
    CourseSnapshot, HoleSnapshot, MatchInfo, MatchPlayerSnapshot, MatchSnapshot, ScoreSnapshot,
    UserSnapshot,
};
use crate::entity::{course_holes, courses, handicap_records, league_players, matches, scores, users};
use crate::league_management::handicap::Differential;
use crate::league_management::matchplay::hole_points;
use crate::league_management::rules::Hole;

/// Decode a stored nine-slot JSON array column
pub(crate) fn hole_array(json: &sea_orm::JsonValue) -> Vec<i32> {
    serde_json::from_value(json.clone()).unwrap_or_default()
}

/// Assert that a match is still scheduled
pub(crate) fn assert_scheduled(league_match: &matches::Model) -> Result<(), String> {
    if league_match.status != matches::MatchStatus::Scheduled {
        Err(format!(
            "Match is {}, expected scheduled",
            league_match.status
        ))
    } else {
        Ok(())
    }
}

/// Find the league player enrolled for a user, if any
pub(crate) async fn find_player_by_user(
    user_id: Uuid,
    db: &(impl sea_orm::ConnectionTrait + std::marker::Send),
) -> Result<Option<league_players::Model>, String> {
    league_players::Entity::find()
        .filter(league_players::Column::UserId.eq(user_id))
        .one(db)
        .await
        .map_err(|e| format!("Failed to fetch league player: {e}"))
}

/// A player's current posted index: the most recent handicap record, or
/// the committee-assigned provisional when none has been written yet
pub(crate) async fn current_posted_index(
    player: &league_players::Model,
    db: &(impl sea_orm::ConnectionTrait + std::marker::Send),
) -> Result<f64, String> {
    let latest = handicap_records::Entity::find()
        .filter(handicap_records::Column::PlayerId.eq(player.id))
        .order_by(handicap_records::Column::UpdatedAt, Order::Desc)
        .order_by(handicap_records::Column::Id, Order::Desc)
        .one(db)
        .await
        .map_err(|e| format!("Failed to fetch handicap records: {e}"))?;

    Ok(latest
        .map(|record| record.league_handicap_index)
        .unwrap_or(player.provisional_index))
}

/// A player's full differential history in chronological order. Absence
/// entries never contribute differentials.
pub(crate) async fn differential_history(
    player_id: Uuid,
    db: &(impl sea_orm::ConnectionTrait + std::marker::Send),
) -> Result<Vec<Differential>, String> {
    let rows = scores::Entity::find()
        .filter(scores::Column::PlayerId.eq(player_id))
        .filter(scores::Column::PlayerAbsent.eq(false))
        .order_by(scores::Column::CreatedAt, Order::Asc)
        .all(db)
        .await
        .map_err(|e| format!("Failed to fetch score history: {e}"))?;

    Ok(rows
        .iter()
        .map(|row| Differential {
            value: row.handicap_differential,
            recorded_at: row.created_at,
        })
        .collect())
}

/// Up to the five most recent non-absent differential values, used by the
/// absence adjuster
pub(crate) async fn recent_differential_values(
    player_id: Uuid,
    db: &(impl sea_orm::ConnectionTrait + std::marker::Send),
) -> Result<Vec<f64>, String> {
    let rows = scores::Entity::find()
        .filter(scores::Column::PlayerId.eq(player_id))
        .filter(scores::Column::PlayerAbsent.eq(false))
        .order_by(scores::Column::CreatedAt, Order::Desc)
        .limit(5)
        .all(db)
        .await
        .map_err(|e| format!("Failed to fetch recent scores: {e}"))?;

    Ok(rows.iter().map(|row| row.handicap_differential).collect())
}

/// Fetch a course with its holes in hole-number order
pub(crate) async fn course_with_holes(
    course_id: Uuid,
    db: &(impl sea_orm::ConnectionTrait + std::marker::Send),
) -> Result<(courses::Model, Vec<course_holes::Model>), String> {
    let course = match courses::Entity::find_by_id(course_id).one(db).await {
        Ok(Some(course)) => course,
        Ok(None) => return Err("Course not found".to_string()),
        Err(e) => return Err(format!("Failed to fetch course: {e}")),
    };

    let holes = courses_holes_ordered(course_id, db).await?;

    Ok((course, holes))
}

async fn courses_holes_ordered(
    course_id: Uuid,
    db: &(impl sea_orm::ConnectionTrait + std::marker::Send),
) -> Result<Vec<course_holes::Model>, String> {
    course_holes::Entity::find()
        .filter(course_holes::Column::CourseId.eq(course_id))
        .order_by(course_holes::Column::HoleNumber, Order::Asc)
        .all(db)
        .await
        .map_err(|e| format!("Failed to fetch course holes: {e}"))
}

/// Project hole rows into the engine's hole type
pub(crate) fn hole_specs(holes: &[course_holes::Model]) -> Vec<Hole> {
    holes
        .iter()
        .map(|hole| Hole {
            par: hole.par,
            stroke_index: hole.stroke_index,
        })
        .collect()
}

/// Build the full snapshot for a match: course, both players with their
/// current indices, and any submitted score lines
pub(crate) async fn build_match_snapshot(
    league_match: matches::Model,
    db: &(impl sea_orm::ConnectionTrait + std::marker::Send),
) -> Result<MatchSnapshot, String> {
    let (course, holes) = course_with_holes(league_match.course_id, db).await?;

    let score_rows = scores::Entity::find()
        .filter(scores::Column::MatchId.eq(league_match.id))
        .all(db)
        .await
        .map_err(|e| format!("Failed to fetch match scores: {e}"))?;

    let mut players = Vec::new();
    for (player_id, side) in [
        (league_match.player_a_id, "A"),
        (league_match.player_b_id, "B"),
    ] {
        let player = match league_players::Entity::find_by_id(player_id).one(db).await {
            Ok(Some(player)) => player,
            Ok(None) => return Err("Match player not found".to_string()),
            Err(e) => return Err(format!("Failed to fetch match player: {e}")),
        };

        let user = match users::Entity::find_by_id(player.user_id).one(db).await {
            Ok(Some(user)) => user,
            Ok(None) => return Err("Player user not found".to_string()),
            Err(e) => return Err(format!("Failed to fetch player user: {e}")),
        };

        let current_index = current_posted_index(&player, db).await?;
        let round_submitted = score_rows.iter().any(|row| row.player_id == player.id);

        players.push(MatchPlayerSnapshot {
            player_id: player.id,
            user_id: player.user_id,
            display_name: player.display_name,
            side: side.to_string(),
            current_index,
            round_submitted,
            user: UserSnapshot {
                id: user.id,
                email: user.email,
                name: user.name,
            },
        });
    }

    let score_snapshots = score_rows
        .iter()
        .map(|row| ScoreSnapshot {
            player_id: row.player_id,
            hole_scores: hole_array(&row.hole_scores),
            hole_adjusted_gross_scores: hole_array(&row.hole_adjusted_gross_scores),
            match_strokes: hole_array(&row.match_strokes),
            match_net_hole_scores: hole_array(&row.match_net_hole_scores),
            gross_score: row.gross_score,
            adjusted_gross: row.adjusted_gross,
            net_score: row.net_score,
            match_net_score: row.match_net_score,
            handicap_differential: row.handicap_differential,
            handicap_index: row.handicap_index,
            course_handicap: row.course_handicap,
            playing_handicap: row.playing_handicap,
            strokes_received: row.strokes_received,
            player_absent: row.player_absent,
            recorded_at: row.created_at,
        })
        .collect();

    Ok(MatchSnapshot {
        match_info: MatchInfo {
            id: league_match.id,
            status: league_match.status.to_string(),
            scheduled_for: league_match.scheduled_for,
            player_a_points: league_match.player_a_points,
            player_b_points: league_match.player_b_points,
            created_at: league_match.created_at,
            updated_at: league_match.updated_at,
            completed_at: league_match.completed_at,
        },
        course: CourseSnapshot {
            id: course.id,
            name: course.name,
            par: course.par,
            course_rating: course.course_rating,
            slope_rating: course.slope_rating,
            holes: holes
                .iter()
                .map(|hole| HoleSnapshot {
                    hole_number: hole.hole_number,
                    par: hole.par,
                    stroke_index: hole.stroke_index,
                })
                .collect(),
        },
        players,
        scores: score_snapshots,
    })
}

/// Build the hole-by-hole breakdown for a completed match
pub(crate) async fn build_match_summary(
    league_match: matches::Model,
    db: &(impl sea_orm::ConnectionTrait + std::marker::Send),
) -> Result<MatchSummary, String> {
    if league_match.status != matches::MatchStatus::Completed {
        return Err("Match is not completed yet".to_string());
    }

    let (course, holes) = course_with_holes(league_match.course_id, db).await?;

    let score_rows = scores::Entity::find()
        .filter(scores::Column::MatchId.eq(league_match.id))
        .all(db)
        .await
        .map_err(|e| format!("Failed to fetch match scores: {e}"))?;

    let score_a = score_rows
        .iter()
        .find(|row| row.player_id == league_match.player_a_id)
        .ok_or("Player A score not found")?;
    let score_b = score_rows
        .iter()
        .find(|row| row.player_id == league_match.player_b_id)
        .ok_or("Player B score not found")?;

    let net_a = hole_array(&score_a.match_net_hole_scores);
    let net_b = hole_array(&score_b.match_net_hole_scores);

    let hole_summaries = holes
        .iter()
        .zip(net_a.iter().zip(&net_b))
        .map(|(hole, (&a, &b))| {
            let (points_a, points_b) = hole_points(a, b);
            HoleResultSummary {
                hole_number: hole.hole_number,
                par: hole.par,
                stroke_index: hole.stroke_index,
                net_a: a,
                net_b: b,
                points_a,
                points_b,
            }
        })
        .collect();

    let points_a = league_match.player_a_points.unwrap_or(0);
    let points_b = league_match.player_b_points.unwrap_or(0);

    let mut players = Vec::new();
    for (score, side, points, opponent_points) in [
        (score_a, "A", points_a, points_b),
        (score_b, "B", points_b, points_a),
    ] {
        let player = match league_players::Entity::find_by_id(score.player_id).one(db).await {
            Ok(Some(player)) => player,
            Ok(None) => return Err("Match player not found".to_string()),
            Err(e) => return Err(format!("Failed to fetch match player: {e}")),
        };

        let result = match points.cmp(&opponent_points) {
            std::cmp::Ordering::Greater => "won",
            std::cmp::Ordering::Less => "lost",
            std::cmp::Ordering::Equal => "halved",
        };

        players.push(PlayerSummary {
            player_id: player.id,
            display_name: player.display_name,
            side: side.to_string(),
            points,
            result: result.to_string(),
            gross_score: score.gross_score,
            match_net_score: score.match_net_score,
            playing_handicap: score.playing_handicap,
            strokes_received: score.strokes_received,
            player_absent: score.player_absent,
        });
    }

    Ok(MatchSummary {
        match_info: MatchSummaryInfo {
            id: league_match.id,
            status: league_match.status.to_string(),
            scheduled_for: league_match.scheduled_for,
            completed_at: league_match.completed_at,
        },
        course_name: course.name,
        players,
        holes: hole_summaries,
    })
}

/// Build the league table from completed matches, sorted by total points
pub(crate) async fn build_standings(
    db: &(impl sea_orm::ConnectionTrait + std::marker::Send),
) -> Result<Vec<StandingEntry>, String> {
    let players = league_players::Entity::find()
        .all(db)
        .await
        .map_err(|e| format!("Failed to fetch league players: {e}"))?;

    let completed = matches::Entity::find()
        .filter(matches::Column::Status.eq(matches::MatchStatus::Completed))
        .all(db)
        .await
        .map_err(|e| format!("Failed to fetch matches: {e}"))?;

    let mut entries = Vec::new();
    for player in &players {
        let mut matches_played = 0;
        let mut wins = 0;
        let mut halves = 0;
        let mut losses = 0;
        let mut total_points = 0;

        for league_match in &completed {
            let (own, opponent) = if league_match.player_a_id == player.id {
                (league_match.player_a_points, league_match.player_b_points)
            } else if league_match.player_b_id == player.id {
                (league_match.player_b_points, league_match.player_a_points)
            } else {
                continue;
            };

            let (own, opponent) = match (own, opponent) {
                (Some(own), Some(opponent)) => (own, opponent),
                _ => continue,
            };

            matches_played += 1;
            total_points += own;
            match own.cmp(&opponent) {
                std::cmp::Ordering::Greater => wins += 1,
                std::cmp::Ordering::Equal => halves += 1,
                std::cmp::Ordering::Less => losses += 1,
            }
        }

        let handicap_index = current_posted_index(player, db).await?;

        entries.push(StandingEntry {
            rank: 0, // assigned after sorting
            player_id: player.id,
            display_name: player.display_name.clone(),
            matches_played,
            wins,
            halves,
            losses,
            total_points,
            handicap_index,
        });
    }

    entries.sort_by(|a, b| {
        b.total_points
            .cmp(&a.total_points)
            .then(b.wins.cmp(&a.wins))
            .then(a.display_name.cmp(&b.display_name))
    });
    for (i, entry) in entries.iter_mut().enumerate() {
        entry.rank = i + 1;
    }

    Ok(entries)
}

/// Build a player's handicap position: current index plus the record and
/// differential audit trails
pub(crate) async fn build_player_handicap_summary(
    player: league_players::Model,
    db: &(impl sea_orm::ConnectionTrait + std::marker::Send),
) -> Result<PlayerHandicapSummary, String> {
    let current_index = current_posted_index(&player, db).await?;
    let history = differential_history(player.id, db).await?;

    let records = handicap_records::Entity::find()
        .filter(handicap_records::Column::PlayerId.eq(player.id))
        .order_by(handicap_records::Column::UpdatedAt, Order::Desc)
        .order_by(handicap_records::Column::Id, Order::Desc)
        .all(db)
        .await
        .map_err(|e| format!("Failed to fetch handicap records: {e}"))?;

    Ok(PlayerHandicapSummary {
        player_id: player.id,
        display_name: player.display_name,
        provisional_index: player.provisional_index,
        current_index,
        established_rounds: history.len(),
        records: records
            .iter()
            .map(|record| HandicapRecordSummary {
                league_handicap_index: record.league_handicap_index,
                updated_at: record.updated_at,
            })
            .collect(),
        differentials: history
            .iter()
            .map(|d| DifferentialSummary {
                value: d.value,
                recorded_at: d.recorded_at,
            })
            .collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_assert_scheduled() {
        let league_match = matches::Model {
            id: Uuid::new_v4(),
            course_id: Uuid::new_v4(),
            player_a_id: Uuid::new_v4(),
            player_b_id: Uuid::new_v4(),
            status: matches::MatchStatus::Scheduled,
            scheduled_for: Utc::now().into(),
            player_a_points: None,
            player_b_points: None,
            created_at: Utc::now().into(),
            updated_at: Utc::now().into(),
            completed_at: None,
        };

        assert!(assert_scheduled(&league_match).is_ok());

        let completed = matches::Model {
            status: matches::MatchStatus::Completed,
            ..league_match
        };
        assert!(assert_scheduled(&completed).is_err());
    }

    #[test]
    fn test_hole_array_decodes_nine_slots() {
        let json = serde_json::json!([4, 5, 3, 4, 6, 4, 5, 4, 4]);
        assert_eq!(hole_array(&json), vec![4, 5, 3, 4, 6, 4, 5, 4, 4]);
    }

    #[test]
    fn test_hole_array_tolerates_malformed_column() {
        let json = serde_json::json!("not an array");
        assert_eq!(hole_array(&json), Vec::<i32>::new());
    }
}
