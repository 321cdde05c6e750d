pub mod bootstrap;
pub mod dto;
pub mod entity;
pub mod jwt;
pub mod league_management;
pub mod test_support;
pub mod user_management;

pub use bootstrap::{connect_and_migrate_from_env, init_tracing, load_dotenv};

use actix_web::web;

use jwt::{get_claims, get_user, JwtAuth};
use league_management::{
    check_rules, complete_match, create_course, create_match, delete_match, enroll, get_courses,
    get_match_state, get_match_summary, get_matches, get_player_handicap, get_players,
    get_standings, submit_round,
};

/// Configure all routes for the application
pub fn configure_routes(cfg: &mut actix_web::web::ServiceConfig) {
    cfg.service(hello).service(
        web::scope("/api")
            .wrap(JwtAuth::new())
            .service(protected_route)
            .service(create_course)
            .service(get_courses)
            .service(enroll)
            .service(get_players)
            .service(get_player_handicap)
            .service(create_match)
            .service(get_matches)
            .service(get_standings)
            .service(check_rules)
            .service(get_match_state)
            .service(get_match_summary)
            .service(submit_round)
            .service(complete_match)
            .service(delete_match),
    );
}

#[actix_web::get("/")]
async fn hello() -> impl actix_web::Responder {
    "Hello, FrontNine!"
}

#[actix_web::get("/protected")]
async fn protected_route(
    req: actix_web::HttpRequest,
) -> actix_web::Result<actix_web::HttpResponse> {
    // Extract claims and user from the request (set by JWT middleware)
    if let Some(claims) = get_claims(&req) {
        if let Some(user) = get_user(&req) {
            Ok(actix_web::HttpResponse::Ok()
                .content_type("application/json")
                .json(serde_json::json!({
                    "message": "Access granted to protected route",
                    "user": {
                        "id": user.id,
                        "external_id": user.external_id,
                        "email": user.email,
                        "name": user.name,
                        "created_at": user.created_at
                    },
                    "token_info": {
                        "sub": claims.sub,
                        "email": claims.email,
                        "issued_at": claims.iat,
                        "expires_at": claims.exp
                    }
                })))
        } else {
            Ok(actix_web::HttpResponse::InternalServerError()
                .content_type("application/json")
                .json(serde_json::json!({
                    "error": "User not found"
                })))
        }
    } else {
        // This should never happen if middleware is working correctly
        Ok(actix_web::HttpResponse::Unauthorized()
            .content_type("application/json")
            .json(serde_json::json!({
                "error": "No claims found"
            })))
    }
}
