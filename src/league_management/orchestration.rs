//! League orchestration module
//!
//! This module contains database-coupled write logic for match operations.
//! It handles row locking and transactions and coordinates between the
//! pure handicap, scoring, and match play modules. Every function here
//! expects to run inside a transaction owned by the caller.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseTransaction, EntityTrait, ModelTrait, QueryFilter,
    QuerySelect, Set,
};
use uuid::Uuid;

use crate::dto::round_request::RoundRequest;
use crate::entity::{handicap_records, league_players, matches, scores};
use crate::league_management::handicap::{
    absent_handicap, course_handicap, playing_handicap, recalculated_index, score_differential,
    Differential,
};
use crate::league_management::matchplay::{assign_strokes, calculate_match_points};
use crate::league_management::rules::{
    validate_hole_scores, validate_slope_rating, ESTABLISHED_ROUNDS, PLAYING_HANDICAP_ALLOWANCE,
};
use crate::league_management::scoring::{
    adjusted_gross_score, apply_match_strokes, AdjustmentPolicy,
};
use crate::league_management::state;

/// Lock a match row for update and return it
async fn lock_match(match_id: Uuid, txn: &DatabaseTransaction) -> Result<matches::Model, String> {
    match matches::Entity::find_by_id(match_id)
        .lock(sea_orm::sea_query::LockType::Update)
        .one(txn)
        .await
    {
        Ok(Some(league_match)) => Ok(league_match),
        Ok(None) => Err("Match not found".to_string()),
        Err(e) => Err(format!("Failed to fetch match: {e}")),
    }
}

/// Resolve the authenticated user to an enrolled player and check that the
/// player is one of the match sides
async fn participant_for(
    league_match: &matches::Model,
    user_id: Uuid,
    txn: &DatabaseTransaction,
) -> Result<league_players::Model, String> {
    let player = match state::find_player_by_user(user_id, txn).await? {
        Some(player) => player,
        None => return Err("You are not enrolled in the league".to_string()),
    };

    if player.id != league_match.player_a_id && player.id != league_match.player_b_id {
        return Err("You are not a participant in this match".to_string());
    }

    Ok(player)
}

/// The playing handicap a player's opponent carries into the match: taken
/// from the opponent's stored score row when one exists, otherwise derived
/// from their current record
async fn opponent_playing_handicap(
    league_match: &matches::Model,
    opponent_id: Uuid,
    slope_rating: i32,
    course_rating: f64,
    par: i32,
    txn: &DatabaseTransaction,
) -> Result<i32, String> {
    let stored = scores::Entity::find()
        .filter(scores::Column::MatchId.eq(league_match.id))
        .filter(scores::Column::PlayerId.eq(opponent_id))
        .one(txn)
        .await
        .map_err(|e| format!("Failed to fetch opponent score: {e}"))?;

    if let Some(row) = stored {
        return Ok(row.playing_handicap);
    }

    let opponent = match league_players::Entity::find_by_id(opponent_id).one(txn).await {
        Ok(Some(opponent)) => opponent,
        Ok(None) => return Err("Opponent not found".to_string()),
        Err(e) => return Err(format!("Failed to fetch opponent: {e}")),
    };

    let index = state::current_posted_index(&opponent, txn).await?;
    let ch = course_handicap(index, slope_rating, course_rating, par);
    Ok(playing_handicap(ch, PLAYING_HANDICAP_ALLOWANCE))
}

/// Submit one player's nine-hole card for a scheduled match.
///
/// Runs the whole posting pipeline: validation, index in effect (with the
/// absence substitute when flagged), course and playing handicaps, match
/// stroke allocation, adjusted gross score and differential, and finally
/// the score insert. Non-absent rounds also recalculate the player's
/// league index and append a handicap record.
pub(crate) async fn submit_round(
    match_id: Uuid,
    user_id: Uuid,
    request: &RoundRequest,
    txn: &DatabaseTransaction,
) -> Result<scores::Model, String> {
    let league_match = lock_match(match_id, txn).await?;
    state::assert_scheduled(&league_match)?;

    let player = participant_for(&league_match, user_id, txn).await?;

    let existing = scores::Entity::find()
        .filter(scores::Column::MatchId.eq(match_id))
        .filter(scores::Column::PlayerId.eq(player.id))
        .one(txn)
        .await
        .map_err(|e| format!("Failed to fetch existing score: {e}"))?;
    if existing.is_some() {
        return Err("Round already submitted for this match".to_string());
    }

    validate_hole_scores(&request.hole_scores).map_err(|e| e.to_string())?;

    let (course, hole_rows) = state::course_with_holes(league_match.course_id, txn).await?;
    validate_slope_rating(course.slope_rating).map_err(|e| e.to_string())?;
    let holes = state::hole_specs(&hole_rows);

    // Differential history never includes absence entries
    let history = state::differential_history(player.id, txn).await?;
    let posted_index = state::current_posted_index(&player, txn).await?;

    let index_in_effect = if request.player_absent {
        let recent = state::recent_differential_values(player.id, txn).await?;
        absent_handicap(posted_index, &recent)
    } else {
        posted_index
    };

    let ch = course_handicap(
        index_in_effect,
        course.slope_rating,
        course.course_rating,
        course.par,
    );
    let ph = playing_handicap(ch, PLAYING_HANDICAP_ALLOWANCE);

    let opponent_id = if player.id == league_match.player_a_id {
        league_match.player_b_id
    } else {
        league_match.player_a_id
    };
    let opponent_ph = opponent_playing_handicap(
        &league_match,
        opponent_id,
        course.slope_rating,
        course.course_rating,
        course.par,
        txn,
    )
    .await?;

    let allocation = assign_strokes(ph, opponent_ph, &holes).map_err(|e| e.to_string())?;
    let match_strokes = allocation.strokes_a.to_vec();
    let strokes_received: i32 = match_strokes.iter().sum();

    let match_net_hole_scores = apply_match_strokes(&request.hole_scores, &match_strokes);
    let match_net_score: i32 = match_net_hole_scores.iter().sum();

    let policy = if history.len() >= ESTABLISHED_ROUNDS {
        AdjustmentPolicy::NetDoubleBogey {
            playing_handicap: ph,
        }
    } else {
        AdjustmentPolicy::NewPlayer
    };
    let adjusted =
        adjusted_gross_score(&request.hole_scores, &holes, policy).map_err(|e| e.to_string())?;

    let differential = score_differential(
        adjusted.adjusted_gross,
        course.course_rating,
        course.slope_rating,
    );

    let gross_score: i32 = request.hole_scores.iter().sum();
    let net_score = gross_score - ph;
    let now: chrono::DateTime<chrono::FixedOffset> = chrono::Utc::now().into();

    let score = scores::ActiveModel {
        id: Set(Uuid::new_v4()),
        match_id: Set(match_id),
        player_id: Set(player.id),
        hole_scores: Set(serde_json::json!(request.hole_scores)),
        hole_adjusted_gross_scores: Set(serde_json::json!(adjusted.hole_adjusted_scores)),
        match_strokes: Set(serde_json::json!(match_strokes)),
        match_net_hole_scores: Set(serde_json::json!(match_net_hole_scores)),
        gross_score: Set(gross_score),
        adjusted_gross: Set(adjusted.adjusted_gross),
        net_score: Set(net_score),
        match_net_score: Set(match_net_score),
        handicap_differential: Set(differential),
        handicap_index: Set(index_in_effect),
        course_handicap: Set(ch),
        playing_handicap: Set(ph),
        strokes_received: Set(strokes_received),
        player_absent: Set(request.player_absent),
        created_at: Set(now),
    }
    .insert(txn)
    .await
    .map_err(|e| format!("Failed to insert score: {e}"))?;

    // Absence entries leave the posted index untouched
    if !request.player_absent {
        let mut updated_history = history;
        updated_history.push(Differential {
            value: differential,
            recorded_at: now,
        });
        let new_index = recalculated_index(player.provisional_index, &updated_history);

        handicap_records::ActiveModel {
            id: Set(Uuid::new_v4()),
            player_id: Set(player.id),
            league_handicap_index: Set(new_index),
            updated_at: Set(now),
        }
        .insert(txn)
        .await
        .map_err(|e| format!("Failed to insert handicap record: {e}"))?;
    }

    Ok(score)
}

/// Complete a scheduled match once both cards are in: score the 22 points
/// from the stored match-net arrays and mark the match completed
pub(crate) async fn complete_match(
    match_id: Uuid,
    user_id: Uuid,
    txn: &DatabaseTransaction,
) -> Result<matches::Model, String> {
    let league_match = lock_match(match_id, txn).await?;
    state::assert_scheduled(&league_match)?;
    participant_for(&league_match, user_id, txn).await?;

    let score_rows = scores::Entity::find()
        .filter(scores::Column::MatchId.eq(match_id))
        .all(txn)
        .await
        .map_err(|e| format!("Failed to fetch match scores: {e}"))?;

    let score_a = score_rows
        .iter()
        .find(|row| row.player_id == league_match.player_a_id)
        .ok_or("Both players must submit a round before completion")?;
    let score_b = score_rows
        .iter()
        .find(|row| row.player_id == league_match.player_b_id)
        .ok_or("Both players must submit a round before completion")?;

    let net_a = state::hole_array(&score_a.match_net_hole_scores);
    let net_b = state::hole_array(&score_b.match_net_hole_scores);

    let (points_a, points_b) = calculate_match_points(&net_a, &net_b).map_err(|e| e.to_string())?;

    let now: chrono::DateTime<chrono::FixedOffset> = chrono::Utc::now().into();
    let mut active: matches::ActiveModel = league_match.into();
    active.status = Set(matches::MatchStatus::Completed);
    active.player_a_points = Set(Some(points_a));
    active.player_b_points = Set(Some(points_b));
    active.completed_at = Set(Some(now));
    active.updated_at = Set(now);

    active
        .update(txn)
        .await
        .map_err(|e| format!("Failed to update match: {e}"))
}

/// Delete a scheduled match that has no submitted rounds yet
pub(crate) async fn delete_match(
    match_id: Uuid,
    user_id: Uuid,
    txn: &DatabaseTransaction,
) -> Result<(), String> {
    let league_match = lock_match(match_id, txn).await?;
    state::assert_scheduled(&league_match)?;
    participant_for(&league_match, user_id, txn).await?;

    let submitted = scores::Entity::find()
        .filter(scores::Column::MatchId.eq(match_id))
        .one(txn)
        .await
        .map_err(|e| format!("Failed to fetch match scores: {e}"))?;
    if submitted.is_some() {
        return Err("Cannot delete a match with submitted rounds".to_string());
    }

    league_match
        .delete(txn)
        .await
        .map_err(|e| format!("Failed to delete match: {e}"))?;

    Ok(())
}
