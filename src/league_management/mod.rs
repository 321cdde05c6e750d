//! League management module
//!
//! This module contains the handicap and match play engine for the
//! nine-hole golf league, plus the HTTP handlers that expose it.

pub mod handicap;
pub mod matchplay;
pub mod orchestration;
pub mod rules;
pub mod scoring;
pub mod state;

use actix_web::{delete, get, post, web, HttpRequest, HttpResponse, Result as ActixResult};
use chrono::{DateTime, FixedOffset, Utc};

use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DatabaseTransaction, EntityTrait, Order, QueryOrder, Set,
    TransactionTrait,
};
use serde_json::json;
use uuid::Uuid;

use crate::dto::course_request::CourseRequest;
use crate::dto::enroll_request::EnrollRequest;
use crate::dto::match_request::MatchRequest;
use crate::dto::round_request::RoundRequest;
use crate::dto::rules_request::{RulesCheckRequest, RulesCheckResponse};
use crate::entity::{course_holes, courses, handicap_records, league_players, matches, scores};
use crate::jwt::get_user;
use crate::league_management::rules::{
    breakfast_ball_allowed, is_gimme, is_valid_fluff, is_valid_hazard_drop, is_valid_lateral_drop,
    penalty_strokes, validate_course_holes, validate_slope_rating, Hole, BREAKFAST_BALL_HOLE,
    HOLES_PER_ROUND, MAX_FLUFF_INCHES, MAX_GIMME_FEET, MAX_LATERAL_DROP_CLUB_LENGTHS,
};

#[post("/courses")]
pub async fn create_course(
    req: HttpRequest,
    course_data: web::Json<CourseRequest>,
    db: web::Data<DatabaseConnection>,
) -> ActixResult<HttpResponse> {
    // Extract user from JWT authentication
    if get_user(&req).is_none() {
        return Ok(HttpResponse::Unauthorized()
            .content_type("application/json")
            .json(json!({
                "error": "User not authenticated"
            })));
    }

    let request = course_data.into_inner();

    if request.name.trim().is_empty() {
        return Ok(HttpResponse::BadRequest()
            .content_type("application/json")
            .json(json!({
                "error": "Course name must not be empty"
            })));
    }

    if let Err(e) = validate_slope_rating(request.slope_rating) {
        return Ok(HttpResponse::BadRequest()
            .content_type("application/json")
            .json(json!({
                "error": e.to_string()
            })));
    }

    // Holes must be numbered 1 through 9 exactly once
    let mut holes = request.holes.clone();
    holes.sort_by_key(|h| h.hole_number);
    let numbered_correctly = holes.len() == HOLES_PER_ROUND
        && holes
            .iter()
            .enumerate()
            .all(|(i, h)| h.hole_number == i as i32 + 1);
    if !numbered_correctly {
        return Ok(HttpResponse::BadRequest()
            .content_type("application/json")
            .json(json!({
                "error": format!("Holes must be numbered 1 through {HOLES_PER_ROUND} exactly once")
            })));
    }

    let hole_specs: Vec<Hole> = holes
        .iter()
        .map(|h| Hole {
            par: h.par,
            stroke_index: h.stroke_index,
        })
        .collect();
    if let Err(e) = validate_course_holes(&hole_specs) {
        return Ok(HttpResponse::BadRequest()
            .content_type("application/json")
            .json(json!({
                "error": e.to_string()
            })));
    }

    // Course par is derived from the hole pars
    let par: i32 = holes.iter().map(|h| h.par).sum();

    let course_id = Uuid::new_v4();
    let now: DateTime<FixedOffset> = Utc::now().into();

    let course = courses::ActiveModel {
        id: Set(course_id),
        name: Set(request.name.trim().to_string()),
        par: Set(par),
        course_rating: Set(request.course_rating),
        slope_rating: Set(request.slope_rating),
        created_at: Set(now),
    };

    let course_result = match course.insert(&**db).await {
        Ok(course) => course,
        Err(e) => {
            return Ok(HttpResponse::InternalServerError()
                .content_type("application/json")
                .json(json!({
                    "error": "Failed to create course",
                    "details": e.to_string()
                })));
        }
    };

    let mut hole_results = Vec::new();
    for hole in &holes {
        let hole_row = course_holes::ActiveModel {
            id: Set(Uuid::new_v4()),
            course_id: Set(course_id),
            hole_number: Set(hole.hole_number),
            par: Set(hole.par),
            stroke_index: Set(hole.stroke_index),
        };

        match hole_row.insert(&**db).await {
            Ok(inserted) => hole_results.push(inserted),
            Err(e) => {
                return Ok(HttpResponse::InternalServerError()
                    .content_type("application/json")
                    .json(json!({
                        "error": "Failed to create course hole",
                        "details": e.to_string()
                    })));
            }
        }
    }

    Ok(HttpResponse::Ok()
        .content_type("application/json")
        .json(json!({
            "course": course_result,
            "holes": hole_results
        })))
}

#[get("/courses")]
pub async fn get_courses(
    req: HttpRequest,
    db: web::Data<DatabaseConnection>,
) -> ActixResult<HttpResponse> {
    if get_user(&req).is_none() {
        return Ok(HttpResponse::Unauthorized()
            .content_type("application/json")
            .json(json!({
                "error": "User not authenticated"
            })));
    }

    let course_list = match courses::Entity::find()
        .order_by(courses::Column::Name, Order::Asc)
        .all(&**db)
        .await
    {
        Ok(course_list) => course_list,
        Err(e) => {
            return Ok(HttpResponse::InternalServerError()
                .content_type("application/json")
                .json(json!({
                    "error": "Failed to fetch courses",
                    "details": e.to_string()
                })));
        }
    };

    let all_holes = match course_holes::Entity::find()
        .order_by(course_holes::Column::HoleNumber, Order::Asc)
        .all(&**db)
        .await
    {
        Ok(all_holes) => all_holes,
        Err(e) => {
            return Ok(HttpResponse::InternalServerError()
                .content_type("application/json")
                .json(json!({
                    "error": "Failed to fetch course holes",
                    "details": e.to_string()
                })));
        }
    };

    let entries: Vec<serde_json::Value> = course_list
        .iter()
        .map(|course| {
            let holes: Vec<&course_holes::Model> = all_holes
                .iter()
                .filter(|hole| hole.course_id == course.id)
                .collect();
            json!({
                "course": course,
                "holes": holes
            })
        })
        .collect();

    Ok(HttpResponse::Ok()
        .content_type("application/json")
        .json(json!({
            "courses": entries
        })))
}

#[post("/enroll")]
pub async fn enroll(
    req: HttpRequest,
    enroll_data: web::Json<EnrollRequest>,
    db: web::Data<DatabaseConnection>,
) -> ActixResult<HttpResponse> {
    let user = match get_user(&req) {
        Some(user) => user,
        None => {
            return Ok(HttpResponse::Unauthorized()
                .content_type("application/json")
                .json(json!({
                    "error": "User not authenticated"
                })));
        }
    };

    let request = enroll_data.into_inner();

    if request.display_name.trim().is_empty() {
        return Ok(HttpResponse::BadRequest()
            .content_type("application/json")
            .json(json!({
                "error": "Display name must not be empty"
            })));
    }

    let result = db
        .transaction(|txn| Box::pin(enroll_transaction(user.id, request.clone(), txn)))
        .await;

    match result {
        Ok(player) => Ok(HttpResponse::Ok()
            .content_type("application/json")
            .json(json!({
                "player": player
            }))),
        Err(e) => Ok(HttpResponse::BadRequest()
            .content_type("application/json")
            .json(json!({
                "error": e.to_string()
            }))),
    }
}

/// Helper function to enroll a user within a transaction
async fn enroll_transaction(
    user_id: Uuid,
    request: EnrollRequest,
    txn: &DatabaseTransaction,
) -> Result<league_players::Model, String> {
    if let Some(_existing) = state::find_player_by_user(user_id, txn).await? {
        return Err("You are already enrolled in the league".to_string());
    }

    let now: DateTime<FixedOffset> = Utc::now().into();
    let player = league_players::ActiveModel {
        id: Set(Uuid::new_v4()),
        user_id: Set(user_id),
        display_name: Set(request.display_name.trim().to_string()),
        provisional_index: Set(request.provisional_index),
        joined_at: Set(now),
    }
    .insert(txn)
    .await
    .map_err(|e| format!("Failed to enroll player: {e}"))?;

    // The provisional index is the first posted record
    handicap_records::ActiveModel {
        id: Set(Uuid::new_v4()),
        player_id: Set(player.id),
        league_handicap_index: Set(request.provisional_index),
        updated_at: Set(now),
    }
    .insert(txn)
    .await
    .map_err(|e| format!("Failed to insert handicap record: {e}"))?;

    Ok(player)
}

#[get("/players")]
pub async fn get_players(
    req: HttpRequest,
    db: web::Data<DatabaseConnection>,
) -> ActixResult<HttpResponse> {
    if get_user(&req).is_none() {
        return Ok(HttpResponse::Unauthorized()
            .content_type("application/json")
            .json(json!({
                "error": "User not authenticated"
            })));
    }

    let players = match league_players::Entity::find()
        .order_by(league_players::Column::DisplayName, Order::Asc)
        .all(&**db)
        .await
    {
        Ok(players) => players,
        Err(e) => {
            return Ok(HttpResponse::InternalServerError()
                .content_type("application/json")
                .json(json!({
                    "error": "Failed to fetch players",
                    "details": e.to_string()
                })));
        }
    };

    let mut entries = Vec::new();
    for player in &players {
        let current_index = match state::current_posted_index(player, &**db).await {
            Ok(index) => index,
            Err(e) => {
                return Ok(HttpResponse::InternalServerError()
                    .content_type("application/json")
                    .json(json!({
                        "error": e
                    })));
            }
        };

        entries.push(json!({
            "id": player.id,
            "user_id": player.user_id,
            "display_name": player.display_name,
            "provisional_index": player.provisional_index,
            "current_index": current_index,
            "joined_at": player.joined_at
        }));
    }

    Ok(HttpResponse::Ok()
        .content_type("application/json")
        .json(json!({
            "players": entries
        })))
}

#[get("/player/{id}/handicap")]
pub async fn get_player_handicap(
    req: HttpRequest,
    path: web::Path<String>,
    db: web::Data<DatabaseConnection>,
) -> ActixResult<HttpResponse> {
    if get_user(&req).is_none() {
        return Ok(HttpResponse::Unauthorized()
            .content_type("application/json")
            .json(json!({
                "error": "User not authenticated"
            })));
    }

    let player_id = match path.parse::<Uuid>() {
        Ok(id) => id,
        Err(_) => {
            return Ok(HttpResponse::BadRequest()
                .content_type("application/json")
                .json(json!({
                    "error": "Invalid player ID format"
                })));
        }
    };

    let player = match league_players::Entity::find_by_id(player_id).one(&**db).await {
        Ok(Some(player)) => player,
        Ok(None) => {
            return Ok(HttpResponse::NotFound()
                .content_type("application/json")
                .json(json!({
                    "error": "Player not found"
                })));
        }
        Err(e) => {
            return Ok(HttpResponse::InternalServerError()
                .content_type("application/json")
                .json(json!({
                    "error": "Failed to fetch player",
                    "details": e.to_string()
                })));
        }
    };

    match state::build_player_handicap_summary(player, &**db).await {
        Ok(summary) => Ok(HttpResponse::Ok()
            .content_type("application/json")
            .json(summary)),
        Err(e) => Ok(HttpResponse::InternalServerError()
            .content_type("application/json")
            .json(json!({
                "error": e
            }))),
    }
}

#[post("/matches")]
pub async fn create_match(
    req: HttpRequest,
    match_data: web::Json<MatchRequest>,
    db: web::Data<DatabaseConnection>,
) -> ActixResult<HttpResponse> {
    if get_user(&req).is_none() {
        return Ok(HttpResponse::Unauthorized()
            .content_type("application/json")
            .json(json!({
                "error": "User not authenticated"
            })));
    }

    let request = match_data.into_inner();

    if request.player_a_id == request.player_b_id {
        return Ok(HttpResponse::BadRequest()
            .content_type("application/json")
            .json(json!({
                "error": "A match requires two distinct players"
            })));
    }

    // Both players must be enrolled
    for player_id in [request.player_a_id, request.player_b_id] {
        match league_players::Entity::find_by_id(player_id).one(&**db).await {
            Ok(Some(_)) => {}
            Ok(None) => {
                return Ok(HttpResponse::BadRequest()
                    .content_type("application/json")
                    .json(json!({
                        "error": "Player not found",
                        "player_id": player_id
                    })));
            }
            Err(e) => {
                return Ok(HttpResponse::InternalServerError()
                    .content_type("application/json")
                    .json(json!({
                        "error": "Failed to fetch player",
                        "details": e.to_string()
                    })));
            }
        }
    }

    match courses::Entity::find_by_id(request.course_id).one(&**db).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::BadRequest()
                .content_type("application/json")
                .json(json!({
                    "error": "Course not found"
                })));
        }
        Err(e) => {
            return Ok(HttpResponse::InternalServerError()
                .content_type("application/json")
                .json(json!({
                    "error": "Failed to fetch course",
                    "details": e.to_string()
                })));
        }
    }

    let now: DateTime<FixedOffset> = Utc::now().into();
    let league_match = matches::ActiveModel {
        id: Set(Uuid::new_v4()),
        course_id: Set(request.course_id),
        player_a_id: Set(request.player_a_id),
        player_b_id: Set(request.player_b_id),
        status: Set(matches::MatchStatus::Scheduled),
        scheduled_for: Set(request.scheduled_for),
        player_a_points: Set(None),
        player_b_points: Set(None),
        created_at: Set(now),
        updated_at: Set(now),
        completed_at: Set(None),
    };

    match league_match.insert(&**db).await {
        Ok(created) => Ok(HttpResponse::Ok()
            .content_type("application/json")
            .json(json!({
                "match": created
            }))),
        Err(e) => Ok(HttpResponse::InternalServerError()
            .content_type("application/json")
            .json(json!({
                "error": "Failed to create match",
                "details": e.to_string()
            }))),
    }
}

#[get("/matches")]
pub async fn get_matches(
    req: HttpRequest,
    db: web::Data<DatabaseConnection>,
) -> ActixResult<HttpResponse> {
    if get_user(&req).is_none() {
        return Ok(HttpResponse::Unauthorized()
            .content_type("application/json")
            .json(json!({
                "error": "User not authenticated"
            })));
    }

    let match_list = match matches::Entity::find()
        .order_by(matches::Column::ScheduledFor, Order::Asc)
        .all(&**db)
        .await
    {
        Ok(match_list) => match_list,
        Err(e) => {
            return Ok(HttpResponse::InternalServerError()
                .content_type("application/json")
                .json(json!({
                    "error": "Failed to fetch matches",
                    "details": e.to_string()
                })));
        }
    };

    Ok(HttpResponse::Ok()
        .content_type("application/json")
        .json(json!({
            "matches": match_list
        })))
}

#[get("/match/{id}/state")]
pub async fn get_match_state(
    req: HttpRequest,
    path: web::Path<String>,
    db: web::Data<DatabaseConnection>,
) -> ActixResult<HttpResponse> {
    if get_user(&req).is_none() {
        return Ok(HttpResponse::Unauthorized()
            .content_type("application/json")
            .json(json!({
                "error": "User not authenticated"
            })));
    }

    let match_id = match path.parse::<Uuid>() {
        Ok(id) => id,
        Err(_) => {
            return Ok(HttpResponse::BadRequest()
                .content_type("application/json")
                .json(json!({
                    "error": "Invalid match ID format"
                })));
        }
    };

    let league_match = match matches::Entity::find_by_id(match_id).one(&**db).await {
        Ok(Some(league_match)) => league_match,
        Ok(None) => {
            return Ok(HttpResponse::NotFound()
                .content_type("application/json")
                .json(json!({
                    "error": "Match not found"
                })));
        }
        Err(e) => {
            return Ok(HttpResponse::InternalServerError()
                .content_type("application/json")
                .json(json!({
                    "error": "Failed to fetch match",
                    "details": e.to_string()
                })));
        }
    };

    match state::build_match_snapshot(league_match, &**db).await {
        Ok(snapshot) => Ok(HttpResponse::Ok()
            .content_type("application/json")
            .json(snapshot)),
        Err(e) => Ok(HttpResponse::InternalServerError()
            .content_type("application/json")
            .json(json!({
                "error": e
            }))),
    }
}

#[post("/match/{id}/round")]
pub async fn submit_round(
    req: HttpRequest,
    path: web::Path<String>,
    round_data: web::Json<RoundRequest>,
    db: web::Data<DatabaseConnection>,
) -> ActixResult<HttpResponse> {
    let user = match get_user(&req) {
        Some(user) => user,
        None => {
            return Ok(HttpResponse::Unauthorized()
                .content_type("application/json")
                .json(json!({
                    "error": "User not authenticated"
                })));
        }
    };

    let match_id = match path.parse::<Uuid>() {
        Ok(id) => id,
        Err(_) => {
            return Ok(HttpResponse::BadRequest()
                .content_type("application/json")
                .json(json!({
                    "error": "Invalid match ID format"
                })));
        }
    };

    let request = round_data.into_inner();

    // Execute the entire posting pipeline in a transaction with row locks
    let result = db
        .transaction(|txn| Box::pin(submit_round_transaction(match_id, user.id, request, txn)))
        .await;

    match result {
        Ok(score) => Ok(HttpResponse::Ok()
            .content_type("application/json")
            .json(json!({
                "message": "Round submitted successfully",
                "score": score
            }))),
        Err(e) => Ok(HttpResponse::BadRequest()
            .content_type("application/json")
            .json(json!({
                "error": e.to_string()
            }))),
    }
}

/// Helper function to submit a round within a transaction
async fn submit_round_transaction(
    match_id: Uuid,
    user_id: Uuid,
    request: RoundRequest,
    txn: &DatabaseTransaction,
) -> Result<scores::Model, String> {
    orchestration::submit_round(match_id, user_id, &request, txn).await
}

#[post("/match/{id}/complete")]
pub async fn complete_match(
    req: HttpRequest,
    path: web::Path<String>,
    db: web::Data<DatabaseConnection>,
) -> ActixResult<HttpResponse> {
    let user = match get_user(&req) {
        Some(user) => user,
        None => {
            return Ok(HttpResponse::Unauthorized()
                .content_type("application/json")
                .json(json!({
                    "error": "User not authenticated"
                })));
        }
    };

    let match_id = match path.parse::<Uuid>() {
        Ok(id) => id,
        Err(_) => {
            return Ok(HttpResponse::BadRequest()
                .content_type("application/json")
                .json(json!({
                    "error": "Invalid match ID format"
                })));
        }
    };

    let result = db
        .transaction(|txn| Box::pin(orchestration::complete_match(match_id, user.id, txn)))
        .await;

    match result {
        Ok(completed) => Ok(HttpResponse::Ok()
            .content_type("application/json")
            .json(json!({
                "message": "Match completed successfully",
                "match": completed
            }))),
        Err(e) => Ok(HttpResponse::BadRequest()
            .content_type("application/json")
            .json(json!({
                "error": e.to_string()
            }))),
    }
}

#[get("/match/{id}/summary")]
pub async fn get_match_summary(
    req: HttpRequest,
    path: web::Path<String>,
    db: web::Data<DatabaseConnection>,
) -> ActixResult<HttpResponse> {
    if get_user(&req).is_none() {
        return Ok(HttpResponse::Unauthorized()
            .content_type("application/json")
            .json(json!({
                "error": "User not authenticated"
            })));
    }

    let match_id = match path.parse::<Uuid>() {
        Ok(id) => id,
        Err(_) => {
            return Ok(HttpResponse::BadRequest()
                .content_type("application/json")
                .json(json!({
                    "error": "Invalid match ID format"
                })));
        }
    };

    let league_match = match matches::Entity::find_by_id(match_id).one(&**db).await {
        Ok(Some(league_match)) => league_match,
        Ok(None) => {
            return Ok(HttpResponse::NotFound()
                .content_type("application/json")
                .json(json!({
                    "error": "Match not found"
                })));
        }
        Err(e) => {
            return Ok(HttpResponse::InternalServerError()
                .content_type("application/json")
                .json(json!({
                    "error": "Failed to fetch match",
                    "details": e.to_string()
                })));
        }
    };

    match state::build_match_summary(league_match, &**db).await {
        Ok(summary) => Ok(HttpResponse::Ok()
            .content_type("application/json")
            .json(summary)),
        Err(e) => Ok(HttpResponse::BadRequest()
            .content_type("application/json")
            .json(json!({
                "error": e
            }))),
    }
}

#[get("/standings")]
pub async fn get_standings(
    req: HttpRequest,
    db: web::Data<DatabaseConnection>,
) -> ActixResult<HttpResponse> {
    if get_user(&req).is_none() {
        return Ok(HttpResponse::Unauthorized()
            .content_type("application/json")
            .json(json!({
                "error": "User not authenticated"
            })));
    }

    match state::build_standings(&**db).await {
        Ok(standings) => Ok(HttpResponse::Ok()
            .content_type("application/json")
            .json(json!({
                "standings": standings
            }))),
        Err(e) => Ok(HttpResponse::InternalServerError()
            .content_type("application/json")
            .json(json!({
                "error": e
            }))),
    }
}

#[post("/rules/check")]
pub async fn check_rules(
    req: HttpRequest,
    check_data: web::Json<RulesCheckRequest>,
) -> ActixResult<HttpResponse> {
    if get_user(&req).is_none() {
        return Ok(HttpResponse::Unauthorized()
            .content_type("application/json")
            .json(json!({
                "error": "User not authenticated"
            })));
    }

    let response = match check_data.into_inner() {
        RulesCheckRequest::BreakfastBall { hole_number } => {
            let allowed = breakfast_ball_allowed(hole_number);
            RulesCheckResponse {
                allowed,
                penalty_strokes: None,
                detail: if allowed {
                    "Breakfast ball allowed; the replayed shot counts".to_string()
                } else {
                    format!("Breakfast ball is only allowed on hole {BREAKFAST_BALL_HOLE}")
                },
            }
        }
        RulesCheckRequest::PenaltyStroke { kind } => {
            let strokes = penalty_strokes(kind);
            RulesCheckResponse {
                allowed: true,
                penalty_strokes: Some(strokes),
                detail: format!("Add {strokes} penalty stroke"),
            }
        }
        RulesCheckRequest::HazardDrop {
            lateral,
            drop_distance_to_hole,
            entry_distance_to_hole,
            club_lengths_from_entry,
        } => {
            if lateral {
                let club_lengths = match club_lengths_from_entry {
                    Some(club_lengths) => club_lengths,
                    None => {
                        return Ok(HttpResponse::BadRequest()
                            .content_type("application/json")
                            .json(json!({
                                "error": "club_lengths_from_entry is required for a lateral drop"
                            })));
                    }
                };
                let allowed = is_valid_lateral_drop(
                    drop_distance_to_hole,
                    entry_distance_to_hole,
                    club_lengths,
                );
                RulesCheckResponse {
                    allowed,
                    penalty_strokes: allowed.then_some(1),
                    detail: if allowed {
                        "Lateral drop is valid; add one penalty stroke".to_string()
                    } else {
                        format!(
                            "Lateral drop must be within {MAX_LATERAL_DROP_CLUB_LENGTHS} club lengths and no nearer the hole"
                        )
                    },
                }
            } else {
                let allowed =
                    is_valid_hazard_drop(drop_distance_to_hole, entry_distance_to_hole);
                RulesCheckResponse {
                    allowed,
                    penalty_strokes: allowed.then_some(1),
                    detail: if allowed {
                        "Hazard drop is valid; add one penalty stroke".to_string()
                    } else {
                        "Hazard drop must not be nearer the hole than the point of entry"
                            .to_string()
                    },
                }
            }
        }
        RulesCheckRequest::LieImprovement {
            moved_inches,
            obstacle_eliminated,
        } => {
            let allowed = is_valid_fluff(moved_inches, obstacle_eliminated, MAX_FLUFF_INCHES);
            RulesCheckResponse {
                allowed,
                penalty_strokes: None,
                detail: if allowed {
                    "Lie improvement is within the league allowance".to_string()
                } else {
                    format!(
                        "The ball may move at most {MAX_FLUFF_INCHES} inches and must not eliminate an obstacle"
                    )
                },
            }
        }
        RulesCheckRequest::Gimme { putt_distance_feet } => {
            let allowed = is_gimme(putt_distance_feet, MAX_GIMME_FEET);
            RulesCheckResponse {
                allowed,
                penalty_strokes: None,
                detail: if allowed {
                    "Putt is conceded".to_string()
                } else {
                    format!("Putts beyond {MAX_GIMME_FEET} feet must be holed out")
                },
            }
        }
    };

    Ok(HttpResponse::Ok()
        .content_type("application/json")
        .json(response))
}

#[delete("/match/{id}")]
pub async fn delete_match(
    req: HttpRequest,
    path: web::Path<String>,
    db: web::Data<DatabaseConnection>,
) -> ActixResult<HttpResponse> {
    let user = match get_user(&req) {
        Some(user) => user,
        None => {
            return Ok(HttpResponse::Unauthorized()
                .content_type("application/json")
                .json(json!({
                    "error": "User not authenticated"
                })));
        }
    };

    let match_id = match path.parse::<Uuid>() {
        Ok(id) => id,
        Err(_) => {
            return Ok(HttpResponse::BadRequest()
                .content_type("application/json")
                .json(json!({
                    "error": "Invalid match ID format"
                })));
        }
    };

    let result = db
        .transaction(|txn| Box::pin(orchestration::delete_match(match_id, user.id, txn)))
        .await;

    match result {
        Ok(_) => Ok(HttpResponse::Ok()
            .content_type("application/json")
            .json(json!({
                "success": true,
                "message": "Match deleted successfully"
            }))),
        Err(e) => Ok(HttpResponse::BadRequest()
            .content_type("application/json")
            .json(json!({
                "error": e.to_string()
            }))),
    }
}
