use axum::{http::StatusCode, routing::get, Json, Router};
use serde_json::{json, Value};

use usersync_server::remote::{HttpRemoteSource, RemoteSource};

fn user_json(id: i64) -> Value {
    json!({
        "id": id,
        "name": format!("User {}", id),
        "username": format!("user{}", id),
        "email": "user@example.com",
        "address": {
            "street": "Street",
            "suite": "Suite",
            "city": "City",
            "zipcode": "00000",
            "geo": {"lat": "1.5", "lng": "-2.5"}
        },
        "phone": "555",
        "website": "example.com",
        "company": {"name": "Co", "catchPhrase": "Phrase", "bs": "bs"}
    })
}

async fn users() -> Json<Value> {
    Json(Value::Array((1..=12).map(user_json).collect()))
}

async fn posts() -> Json<Value> {
    Json(json!([
        {"userId": 1, "id": 1, "title": "a", "body": "b"},
        {"userId": 2, "id": 2, "title": "c", "body": "d"}
    ]))
}

async fn comments() -> Json<Value> {
    Json(json!([
        {"postId": 1, "id": 1, "name": "n", "email": "e", "body": "b"}
    ]))
}

async fn broken() -> StatusCode {
    StatusCode::INTERNAL_SERVER_ERROR
}

/// Serve the fixture collections on an ephemeral port and return the base URL
async fn spawn_fixture(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind fixture server");
    let addr = listener.local_addr().expect("No local address");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("Fixture server error");
    });
    format!("http://{}", addr)
}

#[tokio::test]
async fn test_fetches_all_collections_and_truncates_users() {
    let base_url = spawn_fixture(
        Router::new()
            .route("/users", get(users))
            .route("/posts", get(posts))
            .route("/comments", get(comments)),
    )
    .await;

    let source = HttpRemoteSource::new(format!("{}/", base_url), 10);
    let data = source.load_remote_data().await.expect("Fetch failed");

    let user_ids: Vec<i64> = data.users.iter().map(|u| u.id).collect();
    assert_eq!(user_ids, (1..=10).collect::<Vec<_>>());
    assert_eq!(data.users[0].address.geo.lng, "-2.5");
    assert_eq!(data.users[0].company.catch_phrase, "Phrase");
    assert_eq!(data.posts.len(), 2);
    assert_eq!(data.posts[1].user_id, 2);
    assert_eq!(data.comments.len(), 1);
    assert_eq!(data.comments[0].post_id, 1);
}

#[tokio::test]
async fn test_fails_when_any_collection_fails() {
    let base_url = spawn_fixture(
        Router::new()
            .route("/users", get(users))
            .route("/posts", get(posts))
            .route("/comments", get(broken)),
    )
    .await;

    let source = HttpRemoteSource::new(base_url, 10);
    assert!(source.load_remote_data().await.is_err());
}

#[tokio::test]
async fn test_fails_on_malformed_collection() {
    async fn not_users() -> Json<Value> {
        Json(json!({"unexpected": true}))
    }

    let base_url = spawn_fixture(
        Router::new()
            .route("/users", get(not_users))
            .route("/posts", get(posts))
            .route("/comments", get(comments)),
    )
    .await;

    let source = HttpRemoteSource::new(base_url, 10);
    assert!(source.load_remote_data().await.is_err());
}

#[tokio::test]
async fn test_fails_when_source_unreachable() {
    // Bind then drop to get a port nobody is listening on
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let source = HttpRemoteSource::new(format!("http://{}", addr), 10);
    assert!(source.load_remote_data().await.is_err());
}
