use chrono::Utc;
use frontnine::test_support::common::{test_bootstrap, test_issue_token};
use uuid::Uuid;

/// Full league workflow: enroll two players, create a course and a match,
/// submit both cards, complete the match, and check the derived views.
#[actix_web::test]
async fn smoke_workflow() -> anyhow::Result<()> {
    let db = test_bootstrap().await; // loads .env, ensures *_test, inits tracing, connects+migrates once
    let app = actix_web::test::init_service(
        actix_web::App::new()
            .app_data(actix_web::web::Data::new(db.clone()))
            .configure(frontnine::configure_routes),
    )
    .await;

    // 1) Mint JWTs for two fresh users; the middleware upserts them
    let sub_a = Uuid::new_v4().to_string();
    let sub_b = Uuid::new_v4().to_string();
    let auth_a = format!(
        "Bearer {}",
        test_issue_token(&sub_a, &format!("test-{sub_a}@example.com"), 3600)
    );
    let auth_b = format!(
        "Bearer {}",
        test_issue_token(&sub_b, &format!("test-{sub_b}@example.com"), 3600)
    );

    // 2) Enroll both players with committee-assigned provisional indices
    let req = actix_web::test::TestRequest::post()
        .uri("/api/enroll")
        .insert_header(("Authorization", auth_a.as_str()))
        .set_json(serde_json::json!({
            "display_name": format!("Alice-{sub_a}"),
            "provisional_index": 12.0
        }))
        .to_request();
    let res = actix_web::test::call_service(&app, req).await;
    assert!(res.status().is_success());
    let enrolled: serde_json::Value = actix_web::test::read_body_json(res).await;
    let player_a_id = enrolled["player"]["id"].as_str().unwrap().to_string();

    let req = actix_web::test::TestRequest::post()
        .uri("/api/enroll")
        .insert_header(("Authorization", auth_b.as_str()))
        .set_json(serde_json::json!({
            "display_name": format!("Bob-{sub_b}"),
            "provisional_index": 8.0
        }))
        .to_request();
    let res = actix_web::test::call_service(&app, req).await;
    assert!(res.status().is_success());
    let enrolled: serde_json::Value = actix_web::test::read_body_json(res).await;
    let player_b_id = enrolled["player"]["id"].as_str().unwrap().to_string();

    // 3) Create a nine-hole course
    let holes: Vec<serde_json::Value> = [
        (1, 4, 3),
        (2, 5, 1),
        (3, 3, 9),
        (4, 4, 5),
        (5, 4, 7),
        (6, 5, 2),
        (7, 3, 8),
        (8, 4, 4),
        (9, 4, 6),
    ]
    .iter()
    .map(|(hole_number, par, stroke_index)| {
        serde_json::json!({
            "hole_number": hole_number,
            "par": par,
            "stroke_index": stroke_index
        })
    })
    .collect();

    let req = actix_web::test::TestRequest::post()
        .uri("/api/courses")
        .insert_header(("Authorization", auth_a.as_str()))
        .set_json(serde_json::json!({
            "name": format!("Willow Creek {}", Uuid::new_v4()),
            "course_rating": 35.8,
            "slope_rating": 118,
            "holes": holes
        }))
        .to_request();
    let res = actix_web::test::call_service(&app, req).await;
    assert!(res.status().is_success());
    let created: serde_json::Value = actix_web::test::read_body_json(res).await;
    let course_id = created["course"]["id"].as_str().unwrap().to_string();
    // Course par is derived from the hole pars
    assert_eq!(created["course"]["par"].as_i64(), Some(36));

    // 4) Schedule a match between the two players
    let req = actix_web::test::TestRequest::post()
        .uri("/api/matches")
        .insert_header(("Authorization", auth_a.as_str()))
        .set_json(serde_json::json!({
            "course_id": course_id,
            "player_a_id": player_a_id,
            "player_b_id": player_b_id,
            "scheduled_for": Utc::now().to_rfc3339()
        }))
        .to_request();
    let res = actix_web::test::call_service(&app, req).await;
    assert!(res.status().is_success());
    let created: serde_json::Value = actix_web::test::read_body_json(res).await;
    let match_id = created["match"]["id"].as_str().unwrap().to_string();

    // 5) Both players submit their cards
    let req = actix_web::test::TestRequest::post()
        .uri(&format!("/api/match/{match_id}/round"))
        .insert_header(("Authorization", auth_a.as_str()))
        .set_json(serde_json::json!({
            "hole_scores": [5, 6, 4, 5, 4, 6, 4, 5, 5]
        }))
        .to_request();
    let res = actix_web::test::call_service(&app, req).await;
    assert!(res.status().is_success());
    let submitted: serde_json::Value = actix_web::test::read_body_json(res).await;
    assert_eq!(submitted["score"]["gross_score"].as_i64(), Some(44));
    assert_eq!(
        submitted["score"]["hole_scores"].as_array().unwrap().len(),
        9
    );

    // The stored differential is reproducible from the row's own fields
    let adjusted_gross = submitted["score"]["adjusted_gross"].as_i64().unwrap() as f64;
    let stored_differential = submitted["score"]["handicap_differential"].as_f64().unwrap();
    assert!((stored_differential - (adjusted_gross - 35.8) * 113.0 / 118.0).abs() < 1e-9);

    // Submitting twice for the same match is rejected
    let req = actix_web::test::TestRequest::post()
        .uri(&format!("/api/match/{match_id}/round"))
        .insert_header(("Authorization", auth_a.as_str()))
        .set_json(serde_json::json!({
            "hole_scores": [5, 6, 4, 5, 4, 6, 4, 5, 5]
        }))
        .to_request();
    let res = actix_web::test::call_service(&app, req).await;
    assert_eq!(res.status(), actix_web::http::StatusCode::BAD_REQUEST);

    let req = actix_web::test::TestRequest::post()
        .uri(&format!("/api/match/{match_id}/round"))
        .insert_header(("Authorization", auth_b.as_str()))
        .set_json(serde_json::json!({
            "hole_scores": [4, 5, 3, 4, 5, 5, 4, 4, 5]
        }))
        .to_request();
    let res = actix_web::test::call_service(&app, req).await;
    assert!(res.status().is_success());

    // 6) Complete the match and check the 22-point split
    let req = actix_web::test::TestRequest::post()
        .uri(&format!("/api/match/{match_id}/complete"))
        .insert_header(("Authorization", auth_a.as_str()))
        .to_request();
    let res = actix_web::test::call_service(&app, req).await;
    assert!(res.status().is_success());
    let completed: serde_json::Value = actix_web::test::read_body_json(res).await;
    let points_a = completed["match"]["player_a_points"].as_i64().unwrap();
    let points_b = completed["match"]["player_b_points"].as_i64().unwrap();
    assert_eq!(points_a + points_b, 22);
    assert_eq!(completed["match"]["status"].as_str(), Some("completed"));

    // Completion happens exactly once
    let req = actix_web::test::TestRequest::post()
        .uri(&format!("/api/match/{match_id}/complete"))
        .insert_header(("Authorization", auth_a.as_str()))
        .to_request();
    let res = actix_web::test::call_service(&app, req).await;
    assert_eq!(res.status(), actix_web::http::StatusCode::BAD_REQUEST);

    // 7) Hole-by-hole summary
    let req = actix_web::test::TestRequest::get()
        .uri(&format!("/api/match/{match_id}/summary"))
        .insert_header(("Authorization", auth_b.as_str()))
        .to_request();
    let res = actix_web::test::call_service(&app, req).await;
    assert!(res.status().is_success());
    let summary: serde_json::Value = actix_web::test::read_body_json(res).await;
    assert_eq!(summary["holes"].as_array().unwrap().len(), 9);
    assert_eq!(summary["players"].as_array().unwrap().len(), 2);

    // 8) Standings include both players with the match counted
    let req = actix_web::test::TestRequest::get()
        .uri("/api/standings")
        .insert_header(("Authorization", auth_a.as_str()))
        .to_request();
    let res = actix_web::test::call_service(&app, req).await;
    assert!(res.status().is_success());
    let standings: serde_json::Value = actix_web::test::read_body_json(res).await;
    let entry_a = standings["standings"]
        .as_array()
        .unwrap()
        .iter()
        .find(|entry| entry["player_id"].as_str() == Some(player_a_id.as_str()))
        .expect("player A missing from standings");
    assert_eq!(entry_a["matches_played"].as_i64(), Some(1));
    assert_eq!(entry_a["total_points"].as_i64(), Some(points_a));

    // 9) The posted round moved the player's handicap record
    let req = actix_web::test::TestRequest::get()
        .uri(&format!("/api/player/{player_a_id}/handicap"))
        .insert_header(("Authorization", auth_a.as_str()))
        .to_request();
    let res = actix_web::test::call_service(&app, req).await;
    assert!(res.status().is_success());
    let handicap: serde_json::Value = actix_web::test::read_body_json(res).await;
    assert_eq!(handicap["established_rounds"].as_i64(), Some(1));
    assert!(handicap["records"].as_array().unwrap().len() >= 2);
    assert_eq!(handicap["differentials"].as_array().unwrap().len(), 1);

    // 10) Rules check endpoint is pure and stateless
    let req = actix_web::test::TestRequest::post()
        .uri("/api/rules/check")
        .insert_header(("Authorization", auth_a.as_str()))
        .set_json(serde_json::json!({
            "rule": "breakfast_ball",
            "hole_number": 1
        }))
        .to_request();
    let res = actix_web::test::call_service(&app, req).await;
    assert!(res.status().is_success());
    let check: serde_json::Value = actix_web::test::read_body_json(res).await;
    assert_eq!(check["allowed"].as_bool(), Some(true));

    // 11) Absence entry: B no-shows the next match; the phantom card is
    // stored but B's posted index does not move
    let req = actix_web::test::TestRequest::get()
        .uri(&format!("/api/player/{player_b_id}/handicap"))
        .insert_header(("Authorization", auth_b.as_str()))
        .to_request();
    let res = actix_web::test::call_service(&app, req).await;
    let before: serde_json::Value = actix_web::test::read_body_json(res).await;
    let records_before = before["records"].as_array().unwrap().len();

    let req = actix_web::test::TestRequest::post()
        .uri("/api/matches")
        .insert_header(("Authorization", auth_b.as_str()))
        .set_json(serde_json::json!({
            "course_id": course_id,
            "player_a_id": player_a_id,
            "player_b_id": player_b_id,
            "scheduled_for": Utc::now().to_rfc3339()
        }))
        .to_request();
    let res = actix_web::test::call_service(&app, req).await;
    assert!(res.status().is_success());
    let created: serde_json::Value = actix_web::test::read_body_json(res).await;
    let second_match_id = created["match"]["id"].as_str().unwrap().to_string();

    let req = actix_web::test::TestRequest::post()
        .uri(&format!("/api/match/{second_match_id}/round"))
        .insert_header(("Authorization", auth_b.as_str()))
        .set_json(serde_json::json!({
            "hole_scores": [5, 6, 4, 5, 5, 6, 4, 5, 5],
            "player_absent": true
        }))
        .to_request();
    let res = actix_web::test::call_service(&app, req).await;
    assert!(res.status().is_success());
    let submitted: serde_json::Value = actix_web::test::read_body_json(res).await;
    assert_eq!(submitted["score"]["player_absent"].as_bool(), Some(true));

    let req = actix_web::test::TestRequest::get()
        .uri(&format!("/api/player/{player_b_id}/handicap"))
        .insert_header(("Authorization", auth_b.as_str()))
        .to_request();
    let res = actix_web::test::call_service(&app, req).await;
    let after: serde_json::Value = actix_web::test::read_body_json(res).await;
    assert_eq!(after["records"].as_array().unwrap().len(), records_before);

    // 12) A scheduled match with no rounds can be deleted by a participant
    let req = actix_web::test::TestRequest::post()
        .uri("/api/matches")
        .insert_header(("Authorization", auth_a.as_str()))
        .set_json(serde_json::json!({
            "course_id": course_id,
            "player_a_id": player_a_id,
            "player_b_id": player_b_id,
            "scheduled_for": Utc::now().to_rfc3339()
        }))
        .to_request();
    let res = actix_web::test::call_service(&app, req).await;
    assert!(res.status().is_success());
    let created: serde_json::Value = actix_web::test::read_body_json(res).await;
    let third_match_id = created["match"]["id"].as_str().unwrap().to_string();

    let req = actix_web::test::TestRequest::delete()
        .uri(&format!("/api/match/{third_match_id}"))
        .insert_header(("Authorization", auth_a.as_str()))
        .to_request();
    let res = actix_web::test::call_service(&app, req).await;
    assert!(res.status().is_success());

    let req = actix_web::test::TestRequest::get()
        .uri(&format!("/api/match/{third_match_id}/state"))
        .insert_header(("Authorization", auth_a.as_str()))
        .to_request();
    let res = actix_web::test::call_service(&app, req).await;
    assert_eq!(res.status(), actix_web::http::StatusCode::NOT_FOUND);

    // The second match with only one card in cannot be completed
    let req = actix_web::test::TestRequest::post()
        .uri(&format!("/api/match/{second_match_id}/complete"))
        .insert_header(("Authorization", auth_b.as_str()))
        .to_request();
    let res = actix_web::test::call_service(&app, req).await;
    assert_eq!(res.status(), actix_web::http::StatusCode::BAD_REQUEST);

    println!("Smoke test completed successfully!");
    Ok(())
}
