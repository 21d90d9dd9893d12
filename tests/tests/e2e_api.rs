//! End-to-end scenarios against a running instance.
//!
//! These tests need the API and a MongoDB behind it:
//!   BASE_URL=http://localhost:3000 cargo test -p tabletop-tests -- --ignored

use reqwest::StatusCode;
use serde_json::{json, Value};
use tabletop_tests::{base_url, unique_email, unique_title};

async fn create_game(client: &reqwest::Client, title: &str, year: i32) -> Value {
    let response = client
        .post(format!("{}/games", base_url()))
        .json(&json!({
            "title": title,
            "year": year,
            "category": "Strategy",
            "mechanics": ["Trading"],
        }))
        .send()
        .await
        .expect("Failed to send create-game request");
    assert_eq!(response.status(), StatusCode::CREATED);
    response.json().await.expect("Invalid create-game response")
}

async fn create_user(client: &reqwest::Client, name: &str) -> Value {
    let response = client
        .post(format!("{}/users", base_url()))
        .json(&json!({ "name": name, "email": unique_email() }))
        .send()
        .await
        .expect("Failed to send create-user request");
    assert_eq!(response.status(), StatusCode::CREATED);
    response.json().await.expect("Invalid create-user response")
}

#[tokio::test]
#[ignore = "requires a running API instance"]
async fn test_health_endpoint() {
    let client = reqwest::Client::new();
    let response = client
        .get(format!("{}/health", base_url()))
        .send()
        .await
        .expect("Failed to send /health request");
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
#[ignore = "requires a running API instance"]
async fn test_duplicate_title_is_rejected() {
    let client = reqwest::Client::new();
    let title = unique_title("Catan");
    create_game(&client, &title, 1995).await;

    let response = client
        .post(format!("{}/games", base_url()))
        .json(&json!({ "title": title, "year": 1995, "category": "Strategy" }))
        .send()
        .await
        .expect("Failed to send create-game request");

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let body: Value = response.json().await.unwrap();
    assert!(body["error"].as_str().unwrap().contains("title"));
}

#[tokio::test]
#[ignore = "requires a running API instance"]
async fn test_patch_updates_only_present_fields() {
    let client = reqwest::Client::new();
    let title = unique_title("Wingspan");
    let game = create_game(&client, &title, 2019).await;
    let id = game["id"].as_str().unwrap();

    let response = client
        .patch(format!("{}/games/{}", base_url(), id))
        .json(&json!({ "year": 2020 }))
        .send()
        .await
        .expect("Failed to send update request");
    assert_eq!(response.status(), StatusCode::OK);

    let updated: Value = response.json().await.unwrap();
    assert_eq!(updated["year"], 2020);
    assert_eq!(updated["title"].as_str().unwrap(), title);
    assert_eq!(updated["category"], "Strategy");
    assert_eq!(updated["mechanics"].as_array().unwrap().len(), 1);
}

#[tokio::test]
#[ignore = "requires a running API instance"]
async fn test_game_list_filters() {
    let client = reqwest::Client::new();
    let title = unique_title("Azul");
    create_game(&client, &title, 2017).await;

    let response = client
        .get(format!("{}/games", base_url()))
        .query(&[("min_year", "2017"), ("title", title.to_lowercase().as_str())])
        .send()
        .await
        .expect("Failed to send list request");
    assert_eq!(response.status(), StatusCode::OK);

    let games: Vec<Value> = response.json().await.unwrap();
    assert!(games.iter().any(|g| g["title"] == title.as_str()));
}

#[tokio::test]
#[ignore = "requires a running API instance"]
async fn test_shelving_twice_yields_two_entries() {
    let client = reqwest::Client::new();
    let title = unique_title("Catan");
    let game = create_game(&client, &title, 1995).await;
    let user = create_user(&client, "Alice").await;
    let payload = json!({
        "user_id": user["id"],
        "game_id": game["id"],
    });

    for _ in 0..2 {
        let response = client
            .post(format!("{}/users/shelf", base_url()))
            .json(&payload)
            .send()
            .await
            .expect("Failed to send shelf request");
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = client
        .get(format!("{}/users/{}", base_url(), user["id"].as_str().unwrap()))
        .send()
        .await
        .expect("Failed to fetch user");
    let view: Value = response.json().await.unwrap();
    let shelf = view["shelf"].as_array().unwrap();

    assert_eq!(shelf.len(), 2);
    for entry in shelf {
        assert_eq!(entry["state"], "resolved");
        assert_eq!(entry["title"].as_str().unwrap(), title);
        // Shelf summaries stay lightweight.
        assert!(entry.get("mechanics").is_none());
    }
}

#[tokio::test]
#[ignore = "requires a running API instance"]
async fn test_deleted_game_leaves_unresolved_placeholder() {
    let client = reqwest::Client::new();
    let game = create_game(&client, &unique_title("Pandemic"), 2008).await;
    let user = create_user(&client, "Bruno").await;

    let response = client
        .post(format!("{}/users/shelf", base_url()))
        .json(&json!({ "user_id": user["id"], "game_id": game["id"] }))
        .send()
        .await
        .expect("Failed to send shelf request");
    assert_eq!(response.status(), StatusCode::OK);

    let response = client
        .delete(format!(
            "{}/games/{}",
            base_url(),
            game["id"].as_str().unwrap()
        ))
        .send()
        .await
        .expect("Failed to delete game");
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = client
        .get(format!("{}/users/{}", base_url(), user["id"].as_str().unwrap()))
        .send()
        .await
        .expect("Failed to fetch user");
    assert_eq!(response.status(), StatusCode::OK);

    let view: Value = response.json().await.unwrap();
    let shelf = view["shelf"].as_array().unwrap();
    assert_eq!(shelf.len(), 1);
    assert_eq!(shelf[0]["state"], "unresolved");
    assert_eq!(shelf[0]["id"], game["id"]);
}

#[tokio::test]
#[ignore = "requires a running API instance"]
async fn test_match_with_unknown_player_is_rejected() {
    let client = reqwest::Client::new();
    let game = create_game(&client, &unique_title("Catan"), 1995).await;
    let user = create_user(&client, "Carla").await;

    let response = client
        .post(format!("{}/matches", base_url()))
        .json(&json!({
            "game_id": game["id"],
            // Well-formed but absent id.
            "player_ids": [user["id"], "ffffffffffffffffffffffff"],
        }))
        .send()
        .await
        .expect("Failed to send match request");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = response.json().await.unwrap();
    assert!(body["error"].as_str().unwrap().contains("players"));
}

#[tokio::test]
#[ignore = "requires a running API instance"]
async fn test_record_match_with_winner() {
    let client = reqwest::Client::new();
    let game = create_game(&client, &unique_title("Catan"), 1995).await;
    let alice = create_user(&client, "Alice").await;
    let bruno = create_user(&client, "Bruno").await;

    let response = client
        .post(format!("{}/matches", base_url()))
        .json(&json!({
            "game_id": game["id"],
            "player_ids": [alice["id"], bruno["id"]],
            "location": "game night",
            "winner_id": bruno["id"],
        }))
        .send()
        .await
        .expect("Failed to send match request");
    assert_eq!(response.status(), StatusCode::CREATED);

    let view: Value = response.json().await.unwrap();
    assert_eq!(view["game_id"], game["id"]);
    assert_eq!(view["winner_id"], bruno["id"]);
    assert_eq!(view["player_ids"].as_array().unwrap().len(), 2);
    assert!(view["played_at"].as_str().is_some());
}

#[tokio::test]
#[ignore = "requires a running API instance"]
async fn test_rating_score_bounds() {
    let client = reqwest::Client::new();
    let game = create_game(&client, &unique_title("Azul"), 2017).await;
    let user = create_user(&client, "Diana").await;

    for score in [0, 6] {
        let response = client
            .post(format!("{}/ratings", base_url()))
            .json(&json!({
                "user_id": user["id"],
                "game_id": game["id"],
                "score": score,
            }))
            .send()
            .await
            .expect("Failed to send rating request");
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    let response = client
        .post(format!("{}/ratings", base_url()))
        .json(&json!({
            "user_id": user["id"],
            "game_id": game["id"],
            "score": 5,
            "comment": "Beautiful tiles",
        }))
        .send()
        .await
        .expect("Failed to send rating request");
    assert_eq!(response.status(), StatusCode::CREATED);

    let view: Value = response.json().await.unwrap();
    assert_eq!(view["score"], 5);
}

#[tokio::test]
#[ignore = "requires a running API instance"]
async fn test_popular_games_report_orders_by_match_count() {
    let client = reqwest::Client::new();
    let title_a = unique_title("Catan");
    let title_b = unique_title("Azul");
    let game_a = create_game(&client, &title_a, 1995).await;
    let game_b = create_game(&client, &title_b, 2017).await;
    let user = create_user(&client, "Alice").await;

    for (game, plays) in [(&game_a, 3), (&game_b, 1)] {
        for _ in 0..plays {
            let response = client
                .post(format!("{}/matches", base_url()))
                .json(&json!({ "game_id": game["id"], "player_ids": [user["id"]] }))
                .send()
                .await
                .expect("Failed to send match request");
            assert_eq!(response.status(), StatusCode::CREATED);
        }
    }

    let response = client
        .get(format!("{}/reports/popular-games", base_url()))
        .send()
        .await
        .expect("Failed to fetch report");
    assert_eq!(response.status(), StatusCode::OK);

    let rows: Vec<Value> = response.json().await.unwrap();
    let position_a = rows.iter().position(|r| r["title"] == title_a.as_str());
    let position_b = rows.iter().position(|r| r["title"] == title_b.as_str());

    let position_a = position_a.expect("game A missing from report");
    let position_b = position_b.expect("game B missing from report");
    assert!(position_a < position_b);
    assert_eq!(rows[position_a]["total_matches"], 3);
    assert_eq!(rows[position_b]["total_matches"], 1);
}

#[tokio::test]
#[ignore = "requires a running API instance"]
async fn test_rating_summary_report_averages() {
    let client = reqwest::Client::new();
    let title = unique_title("Wingspan");
    let game = create_game(&client, &title, 2019).await;
    let alice = create_user(&client, "Alice").await;
    let bruno = create_user(&client, "Bruno").await;

    for (user, score) in [(&alice, 4), (&bruno, 5)] {
        let response = client
            .post(format!("{}/ratings", base_url()))
            .json(&json!({
                "user_id": user["id"],
                "game_id": game["id"],
                "score": score,
            }))
            .send()
            .await
            .expect("Failed to send rating request");
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = client
        .get(format!("{}/reports/rating-summary", base_url()))
        .send()
        .await
        .expect("Failed to fetch report");
    assert_eq!(response.status(), StatusCode::OK);

    let rows: Vec<Value> = response.json().await.unwrap();
    let row = rows
        .iter()
        .find(|r| r["title"] == title.as_str())
        .expect("game missing from report");

    assert_eq!(row["avg_score"], 4.5);
    assert_eq!(row["rating_count"], 2);
}
