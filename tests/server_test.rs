//! Integration tests for the HTTP endpoint

use players_api::{
    error::StorageError,
    server::{router, REQUEST_ID_HEADER},
    service::Service,
    storage::{NewPlayer, Player, PlayerDatabase, PlayerFilter, Players},
};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::Arc;

/// Store whose reads panic, standing in for a bug inside a handler.
struct PanickingPlayers;

impl Players for PanickingPlayers {
    fn list(&self, _filter: &PlayerFilter) -> Result<Vec<Player>, StorageError> {
        panic!("list exploded");
    }

    fn average_age_by_position(&self) -> Result<HashMap<String, f64>, StorageError> {
        Ok(HashMap::new())
    }
}

async fn spawn_server<P>(players: P) -> String
where
    P: Players + Send + Sync + 'static,
{
    let app = router(Arc::new(Service::new(players)));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{addr}/")
}

fn seeded_db() -> PlayerDatabase {
    let db = PlayerDatabase::open_in_memory().unwrap();
    let player = |first: &str, last: &str, position: &str, age: i32| NewPlayer {
        first_name: first.to_string(),
        last_name: last.to_string(),
        position: position.to_string(),
        age,
    };

    db.insert_batch(
        &[
            player("John", "Smith", "QB", 30),
            player("Jim", "Jones", "QB", 26),
        ],
        "football",
    )
    .unwrap();
    db.insert_batch(&[player("Larry", "Bird", "F", 35)], "basketball")
        .unwrap();
    db.insert_batch(&[player("Bobby", "Orr", "D", 30)], "hockey")
        .unwrap();
    db
}

async fn get_with_body(url: &str, body: &str) -> (reqwest::StatusCode, Value) {
    let response = reqwest::Client::new()
        .get(url)
        .header("content-type", "application/json")
        .body(body.to_string())
        .send()
        .await
        .unwrap();
    let status = response.status();
    (status, response.json::<Value>().await.unwrap())
}

#[tokio::test]
async fn test_get_all_players() {
    let url = spawn_server(seeded_db()).await;
    let (status, body) = get_with_body(&url, "{}").await;

    assert_eq!(status, reqwest::StatusCode::OK);
    assert_eq!(body["error"], Value::Null);

    let data = body["data"].as_array().unwrap();
    // The hockey player has no brief-name format and is left out.
    assert_eq!(data.len(), 3);
    assert_eq!(
        data[0],
        json!({
            "id": 1,
            "nameBrief": "J. Smith",
            "firstName": "John",
            "lastName": "Smith",
            "position": "QB",
            "age": 30,
            "averagePositionAgeDiff": 2
        })
    );
    assert_eq!(data[2]["nameBrief"], "Larry B.");
}

#[tokio::test]
async fn test_get_filtered_players() {
    let url = spawn_server(seeded_db()).await;
    let (_, body) = get_with_body(&url, r#"{"name":"JO","maxAge":29,"sport":"Football"}"#).await;

    let data = body["data"].as_array().unwrap();
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["lastName"], "Jones");
    assert_eq!(data[0]["averagePositionAgeDiff"], -2);
}

#[tokio::test]
async fn test_no_matches_returns_empty_list() {
    let url = spawn_server(seeded_db()).await;
    let (_, body) = get_with_body(&url, r#"{"position":"goalie"}"#).await;

    assert_eq!(body, json!({ "data": [], "error": null }));
}

#[tokio::test]
async fn test_malformed_body_returns_null_data() {
    let url = spawn_server(seeded_db()).await;

    for bad in ["", "{not json", r#"{"minAge":"old"}"#] {
        let (status, body) = get_with_body(&url, bad).await;
        // The bad-request marker is not applied to the transport status.
        assert_eq!(status, reqwest::StatusCode::OK);
        assert_eq!(body, json!({ "data": null, "error": null }));
    }
}

#[tokio::test]
async fn test_storage_failure_reported_in_body() {
    // No schema, so every read fails.
    let db = PlayerDatabase::open(":memory:").unwrap();
    let url = spawn_server(db).await;

    let (status, body) = get_with_body(&url, "{}").await;

    assert_eq!(status, reqwest::StatusCode::OK);
    assert_eq!(body["data"], Value::Null);
    assert!(body["error"].as_str().unwrap().contains("no such table"));
}

#[tokio::test]
async fn test_handler_panic_becomes_internal_error() {
    let url = spawn_server(PanickingPlayers).await;
    let client = reqwest::Client::new();

    let response = client.get(&url).body("{}").send().await.unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::INTERNAL_SERVER_ERROR);
    assert!(response.headers().contains_key(REQUEST_ID_HEADER));

    // The server keeps serving after the panic.
    let response = client.get(&url).body("{}").send().await.unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_request_id_generated_and_propagated() {
    let url = spawn_server(seeded_db()).await;
    let client = reqwest::Client::new();

    let response = client.get(&url).body("{}").send().await.unwrap();
    let generated = response.headers().get(REQUEST_ID_HEADER).unwrap();
    assert!(!generated.to_str().unwrap().is_empty());

    let response = client
        .get(&url)
        .header(REQUEST_ID_HEADER, "req-42")
        .body("{}")
        .send()
        .await
        .unwrap();
    assert_eq!(response.headers().get(REQUEST_ID_HEADER).unwrap(), "req-42");
}
