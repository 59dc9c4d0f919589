use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use std::sync::Arc;
use tower::ServiceExt;

use herodex::api::AppState;
use herodex::config::Config;

async fn spawn_app() -> (Router, Arc<AppState>) {
    let mut config = Config::default();
    config.general.database_path = "sqlite::memory:".to_string();

    let state = herodex::api::create_app_state_from_config(config)
        .await
        .expect("Failed to create app state");

    (herodex::api::router(state.clone()), state)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

async fn send_json(app: &Router, method: &str, uri: &str, body: &Value) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .header("Content-Type", "application/json")
                .body(Body::from(serde_json::to_string(body).unwrap()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_list_heroes_is_a_flat_projection() {
    let (app, state) = spawn_app().await;

    state
        .store()
        .create_hero("Kamala Khan".into(), "Ms. Marvel".into())
        .await
        .unwrap();
    state
        .store()
        .create_hero("Doreen Green".into(), "Squirrel Girl".into())
        .await
        .unwrap();

    let (status, body) = get(&app, "/heroes").await;

    assert_eq!(status, StatusCode::OK);
    let heroes = body.as_array().unwrap();
    assert_eq!(heroes.len(), 2);
    assert_eq!(heroes[0]["name"], "Kamala Khan");
    assert_eq!(heroes[0]["super_name"], "Ms. Marvel");
    assert_eq!(heroes[1]["name"], "Doreen Green");
    // List views never expand relations.
    assert!(heroes[0].get("hero_powers").is_none());
}

#[tokio::test]
async fn test_get_hero_not_found() {
    let (app, _state) = spawn_app().await;

    let (status, body) = get(&app, "/heroes/999").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Hero not found" }));
}

#[tokio::test]
async fn test_get_hero_nests_currently_stored_power() {
    let (app, state) = spawn_app().await;

    let hero = state
        .store()
        .create_hero("Kamala Khan".into(), "Ms. Marvel".into())
        .await
        .unwrap();
    let power = state
        .store()
        .create_power(
            "super strength".into(),
            "gives the wielder super-human strengths".into(),
        )
        .await
        .unwrap();
    state
        .store()
        .create_hero_power("Strong".into(), hero.id, power.id)
        .await
        .unwrap();

    let (status, body) = get(&app, &format!("/heroes/{}", hero.id)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], hero.id);
    assert_eq!(body["super_name"], "Ms. Marvel");
    let hero_powers = body["hero_powers"].as_array().unwrap();
    assert_eq!(hero_powers.len(), 1);
    assert_eq!(hero_powers[0]["hero_id"], hero.id);
    assert_eq!(hero_powers[0]["power_id"], power.id);
    assert_eq!(hero_powers[0]["strength"], "Strong");
    assert_eq!(hero_powers[0]["power"]["name"], "super strength");
    assert_eq!(
        hero_powers[0]["power"]["description"],
        "gives the wielder super-human strengths"
    );

    // The nested power reflects the stored row, not a snapshot: update the
    // description and the hero detail follows.
    let new_description = "now also grants flight through the skies at supersonic speed";
    let (status, _) = send_json(
        &app,
        "PATCH",
        &format!("/powers/{}", power.id),
        &json!({ "description": new_description }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = get(&app, &format!("/heroes/{}", hero.id)).await;
    assert_eq!(body["hero_powers"][0]["power"]["description"], new_description);
}

#[tokio::test]
async fn test_create_hero_power_returns_nested_detail() {
    let (app, state) = spawn_app().await;

    let hero = state
        .store()
        .create_hero("Kamala Khan".into(), "Ms. Marvel".into())
        .await
        .unwrap();
    let power = state
        .store()
        .create_power(
            "flight".into(),
            "gives the wielder the ability to fly through the skies at supersonic speed".into(),
        )
        .await
        .unwrap();

    let (status, body) = send_json(
        &app,
        "POST",
        "/hero_powers",
        &json!({ "strength": "Strong", "hero_id": hero.id, "power_id": power.id }),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert!(body["id"].is_i64());
    assert_eq!(body["hero_id"], hero.id);
    assert_eq!(body["power_id"], power.id);
    assert_eq!(body["strength"], "Strong");
    assert_eq!(body["hero"]["id"], hero.id);
    assert_eq!(body["hero"]["name"], "Kamala Khan");
    assert_eq!(body["hero"]["super_name"], "Ms. Marvel");
    assert_eq!(body["power"]["id"], power.id);
    assert_eq!(body["power"]["name"], "flight");
    assert_eq!(
        body["power"]["description"],
        "gives the wielder the ability to fly through the skies at supersonic speed"
    );
}

#[tokio::test]
async fn test_create_hero_power_rejects_invalid_strength() {
    let (app, state) = spawn_app().await;

    let hero = state
        .store()
        .create_hero("Kamala Khan".into(), "Ms. Marvel".into())
        .await
        .unwrap();
    let power = state
        .store()
        .create_power(
            "super strength".into(),
            "gives the wielder super-human strengths".into(),
        )
        .await
        .unwrap();

    for strength in ["Mediocre", "strong", "STRONG", ""] {
        let (status, body) = send_json(
            &app,
            "POST",
            "/hero_powers",
            &json!({ "strength": strength, "hero_id": hero.id, "power_id": power.id }),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            json!({ "errors": ["Strength must be one of the following values: 'Strong', 'Weak', 'Average'."] })
        );
    }

    // Nothing was written.
    assert_eq!(state.store().count_hero_powers().await.unwrap(), 0);
}

#[tokio::test]
async fn test_create_hero_power_rejects_unknown_references() {
    let (app, state) = spawn_app().await;

    let hero = state
        .store()
        .create_hero("Doreen Green".into(), "Squirrel Girl".into())
        .await
        .unwrap();
    let power = state
        .store()
        .create_power(
            "super strength".into(),
            "gives the wielder super-human strengths".into(),
        )
        .await
        .unwrap();

    let (status, body) = send_json(
        &app,
        "POST",
        "/hero_powers",
        &json!({ "strength": "Weak", "hero_id": 999, "power_id": power.id }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "errors": ["Hero does not exist."] }));

    let (status, body) = send_json(
        &app,
        "POST",
        "/hero_powers",
        &json!({ "strength": "Weak", "hero_id": hero.id, "power_id": 999 }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "errors": ["Power does not exist."] }));

    assert_eq!(state.store().count_hero_powers().await.unwrap(), 0);
}

#[tokio::test]
async fn test_patch_power_description() {
    let (app, state) = spawn_app().await;

    let power = state
        .store()
        .create_power(
            "super strength".into(),
            "gives the wielder super-human strengths".into(),
        )
        .await
        .unwrap();

    // Too short: 400 with the exact message, stored value untouched.
    let (status, body) = send_json(
        &app,
        "PATCH",
        &format!("/powers/{}", power.id),
        &json!({ "description": "too short" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({ "errors": ["Description must be at least 20 characters long."] })
    );

    let (_, body) = get(&app, &format!("/powers/{}", power.id)).await;
    assert_eq!(body["description"], "gives the wielder super-human strengths");

    // Exactly 20 characters is the boundary and succeeds.
    let exactly_twenty = "exactly--20--chars!!";
    assert_eq!(exactly_twenty.chars().count(), 20);

    let (status, body) = send_json(
        &app,
        "PATCH",
        &format!("/powers/{}", power.id),
        &json!({ "description": exactly_twenty }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["description"], exactly_twenty);
    assert_eq!(body["name"], "super strength");

    let (_, body) = get(&app, &format!("/powers/{}", power.id)).await;
    assert_eq!(body["description"], exactly_twenty);
}

#[tokio::test]
async fn test_patch_power_without_description_changes_nothing() {
    let (app, state) = spawn_app().await;

    let power = state
        .store()
        .create_power(
            "flight".into(),
            "gives the wielder the ability to fly through the skies at supersonic speed".into(),
        )
        .await
        .unwrap();

    let (status, body) =
        send_json(&app, "PATCH", &format!("/powers/{}", power.id), &json!({})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["description"],
        "gives the wielder the ability to fly through the skies at supersonic speed"
    );
}

#[tokio::test]
async fn test_power_not_found() {
    let (app, _state) = spawn_app().await;

    let (status, body) = get(&app, "/powers/999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Power not found" }));

    let (status, body) = send_json(
        &app,
        "PATCH",
        "/powers/999",
        &json!({ "description": "long enough to pass the length check" }),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Power not found" }));
}

#[tokio::test]
async fn test_appearance_rating_boundaries() {
    let (app, state) = spawn_app().await;

    let episode = state
        .store()
        .create_episode("1/11/99".into(), 1)
        .await
        .unwrap();
    let guest = state
        .store()
        .create_guest("Michael J. Fox".into(), "actor".into())
        .await
        .unwrap();

    for rating in [0, 6, -1] {
        let (status, body) = send_json(
            &app,
            "POST",
            "/appearances",
            &json!({ "rating": rating, "episode_id": episode.id, "guest_id": guest.id }),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "errors": ["Rating must be between 1 and 5."] }));
    }
    assert_eq!(state.store().count_appearances().await.unwrap(), 0);

    for rating in [1, 5] {
        let (status, body) = send_json(
            &app,
            "POST",
            "/appearances",
            &json!({ "rating": rating, "episode_id": episode.id, "guest_id": guest.id }),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["rating"], rating);
    }
    assert_eq!(state.store().count_appearances().await.unwrap(), 2);
}

#[tokio::test]
async fn test_create_appearance_returns_nested_detail() {
    let (app, state) = spawn_app().await;

    let episode = state
        .store()
        .create_episode("1/12/99".into(), 2)
        .await
        .unwrap();
    let guest = state
        .store()
        .create_guest("Sandra Bernhard".into(), "Comedian".into())
        .await
        .unwrap();

    let (status, body) = send_json(
        &app,
        "POST",
        "/appearances",
        &json!({ "rating": 5, "episode_id": episode.id, "guest_id": guest.id }),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["rating"], 5);
    assert_eq!(body["episode_id"], episode.id);
    assert_eq!(body["guest_id"], guest.id);
    assert_eq!(body["episode"]["date"], "1/12/99");
    assert_eq!(body["episode"]["number"], 2);
    assert_eq!(body["guest"]["name"], "Sandra Bernhard");
    assert_eq!(body["guest"]["occupation"], "Comedian");
}

#[tokio::test]
async fn test_create_appearance_rejects_unknown_references() {
    let (app, state) = spawn_app().await;

    let episode = state
        .store()
        .create_episode("1/11/99".into(), 1)
        .await
        .unwrap();

    let (status, body) = send_json(
        &app,
        "POST",
        "/appearances",
        &json!({ "rating": 3, "episode_id": 999, "guest_id": 1 }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "errors": ["Episode does not exist."] }));

    let (status, body) = send_json(
        &app,
        "POST",
        "/appearances",
        &json!({ "rating": 3, "episode_id": episode.id, "guest_id": 999 }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "errors": ["Guest does not exist."] }));

    assert_eq!(state.store().count_appearances().await.unwrap(), 0);
}

#[tokio::test]
async fn test_get_episode_detail_with_appearances() {
    let (app, state) = spawn_app().await;

    let episode = state
        .store()
        .create_episode("1/11/99".into(), 1)
        .await
        .unwrap();
    let guest = state
        .store()
        .create_guest("Michael J. Fox".into(), "actor".into())
        .await
        .unwrap();
    state
        .store()
        .create_appearance(4, episode.id, guest.id)
        .await
        .unwrap();

    let (status, body) = get(&app, &format!("/episodes/{}", episode.id)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["date"], "1/11/99");
    assert_eq!(body["number"], 1);
    let appearances = body["appearances"].as_array().unwrap();
    assert_eq!(appearances.len(), 1);
    assert_eq!(appearances[0]["rating"], 4);
    assert_eq!(appearances[0]["guest_id"], guest.id);
    assert_eq!(appearances[0]["guest"]["name"], "Michael J. Fox");
    assert_eq!(appearances[0]["guest"]["occupation"], "actor");
}

#[tokio::test]
async fn test_get_episode_not_found() {
    let (app, _state) = spawn_app().await;

    let (status, body) = get(&app, "/episodes/999").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Episode not found" }));
}

#[tokio::test]
async fn test_flat_list_endpoints() {
    let (app, state) = spawn_app().await;

    herodex::db::seed::seed_sample_data(state.store()).await.unwrap();

    let (status, body) = get(&app, "/powers").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 2);
    assert_eq!(body[0]["name"], "super strength");

    let (status, body) = get(&app, "/episodes").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["date"], "1/11/99");
    assert_eq!(body[1]["number"], 2);
    assert!(body[0].get("appearances").is_none());

    let (status, body) = get(&app, "/guests").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["name"], "Michael J. Fox");
    assert_eq!(body[1]["occupation"], "Comedian");
}

#[tokio::test]
async fn test_seed_is_idempotent() {
    let (_app, state) = spawn_app().await;

    herodex::db::seed::seed_sample_data(state.store()).await.unwrap();
    herodex::db::seed::seed_sample_data(state.store()).await.unwrap();

    assert_eq!(state.store().list_heroes().await.unwrap().len(), 2);
    assert_eq!(state.store().count_appearances().await.unwrap(), 2);
}
