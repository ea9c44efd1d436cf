use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use bibliobot::api;
use bibliobot::config::Config;
use bibliobot::genie::Responses;
use bibliobot::infrastructure::AppState;
use bibliobot::server;
use serde_json::Value;
use tower::util::ServiceExt; // for `oneshot`

// Helper to create a test state with a fixed recommendation seed
fn setup_test_state() -> AppState {
    let config = Config {
        recommendation_seed: Some(7),
        ..Config::default()
    };
    AppState::new(&config)
}

fn setup_test_app() -> Router {
    api::api_router(setup_test_state())
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn post_chat(app: &Router, payload: Value) -> (StatusCode, Value) {
    let req = Request::builder()
        .uri("/chat")
        .method("POST")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(&payload).unwrap()))
        .unwrap();

    let response = app.clone().oneshot(req).await.unwrap();
    let status = response.status();
    (status, body_json(response).await)
}

async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let req = Request::builder()
        .uri(uri)
        .method("GET")
        .body(Body::empty())
        .unwrap();

    let response = app.clone().oneshot(req).await.unwrap();
    let status = response.status();
    (status, body_json(response).await)
}

fn titles(body: &Value) -> Vec<String> {
    body["recommendations"]
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["title"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn test_chat_greeting_returns_session_id() {
    let app = setup_test_app();

    let (status, body) = post_chat(&app, serde_json::json!({ "message": "Hi there!" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["response"], Responses::GREETING);
    assert!(!body["session_id"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn test_chat_genre_follow_up_within_session() {
    let app = setup_test_app();

    let (_, first) = post_chat(
        &app,
        serde_json::json!({ "message": "I want a book", "session_id": "reader-1" }),
    )
    .await;
    assert_eq!(first["response"], Responses::ASK_FOR_GENRE);
    assert_eq!(first["session_id"], "reader-1");

    let (_, second) = post_chat(
        &app,
        serde_json::json!({ "message": "mystery", "session_id": "reader-1" }),
    )
    .await;
    assert_eq!(
        second["response"],
        "Here are some recommendations for you: Murder on the Orient Express by Agatha Christie."
    );
}

#[tokio::test]
async fn test_chat_sessions_do_not_share_state() {
    let app = setup_test_app();

    let (_, first) = post_chat(
        &app,
        serde_json::json!({ "message": "any suggestion?", "session_id": "alice" }),
    )
    .await;
    assert_eq!(first["response"], Responses::ASK_FOR_GENRE);

    // bob's "mystery" is not a genre answer; it matches no keyword
    let (_, other) = post_chat(
        &app,
        serde_json::json!({ "message": "mystery", "session_id": "bob" }),
    )
    .await;
    assert_eq!(other["response"], Responses::DEFAULT);
}

#[tokio::test]
async fn test_chat_empty_message_passes_through() {
    let app = setup_test_app();

    let (status, body) = post_chat(&app, serde_json::json!({ "message": "" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["response"], Responses::DEFAULT);
}

#[tokio::test]
async fn test_chat_rejects_bad_session_id() {
    let app = setup_test_app();

    let (status, body) = post_chat(
        &app,
        serde_json::json!({ "message": "hello", "session_id": "not valid!" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("session_id"));
}

#[tokio::test]
async fn test_chat_invalid_json() {
    let app = setup_test_app();

    let req = Request::builder()
        .uri("/chat")
        .method("POST")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("invalid json"))
        .unwrap();

    let response = app.oneshot(req).await.unwrap();
    // Axum's Json extractor returns 400 for malformed JSON
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_recommendations_by_genre() {
    let app = setup_test_app();

    let (status, body) = get_json(&app, "/recommendations/Romance").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(titles(&body), vec!["Pride and Prejudice".to_string()]);
    assert_eq!(body["recommendations"][0]["author"], "Jane Austen");
    assert_eq!(body["recommendations"][0]["genre"], "romance");
}

#[tokio::test]
async fn test_recommendations_default_limit_and_query_limit() {
    let app = setup_test_app();

    let (_, body) = get_json(&app, "/recommendations/fiction").await;
    assert_eq!(titles(&body).len(), 3);

    let (_, body) = get_json(&app, "/recommendations/fiction?limit=1").await;
    assert_eq!(titles(&body).len(), 1);

    let (_, body) = get_json(&app, "/recommendations?limit=10").await;
    assert_eq!(titles(&body).len(), 10);
}

#[tokio::test]
async fn test_recommendations_unknown_genre_is_empty() {
    let app = setup_test_app();

    let (status, body) = get_json(&app, "/recommendations/sci-fi").await;
    assert_eq!(status, StatusCode::OK);
    assert!(titles(&body).is_empty());
}

#[tokio::test]
async fn test_genres_and_health() {
    let app = setup_test_app();

    let (_, body) = get_json(&app, "/genres").await;
    assert_eq!(
        body["genres"],
        serde_json::json!(["fiction", "non-fiction", "mystery", "fantasy", "romance", "thriller"])
    );

    let (status, body) = get_json(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_full_router_serves_openapi() {
    let config = Config::default();
    let app = server::build_router(AppState::new(&config), &config);

    let (status, body) = get_json(&app, "/api-docs/openapi.json").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/chat"].is_object());
    assert!(body["paths"]["/recommendations/{genre}"].is_object());
}

#[tokio::test]
async fn test_one_shot_chats_store_no_sessions() {
    let state = setup_test_state();
    let app = api::api_router(state.clone());

    for message in ["Hi", "thanks a lot", "xyz", "recommend a fantasy book"] {
        for _ in 0..25 {
            let (status, _) = post_chat(&app, serde_json::json!({ "message": message })).await;
            assert_eq!(status, StatusCode::OK);
        }
    }
    assert_eq!(state.sessions.len(), 0);
}

#[tokio::test]
async fn test_pending_genre_session_is_released_after_answer() {
    let state = setup_test_state();
    let app = api::api_router(state.clone());

    let (_, body) = post_chat(&app, serde_json::json!({ "message": "I want a book" })).await;
    assert_eq!(body["response"], Responses::ASK_FOR_GENRE);
    assert_eq!(state.sessions.len(), 1);

    let session_id = body["session_id"].as_str().unwrap().to_string();
    let (_, body) = post_chat(
        &app,
        serde_json::json!({ "message": "fantasy", "session_id": session_id }),
    )
    .await;
    assert!(body["response"].as_str().unwrap().contains("The Hobbit"));
    assert_eq!(state.sessions.len(), 0);
}

#[tokio::test]
async fn test_full_router_serves_chat_page_with_cors() {
    let config = Config {
        static_dir: format!("{}/public", env!("CARGO_MANIFEST_DIR")),
        ..Config::default()
    };
    let app = server::build_router(AppState::new(&config), &config);

    let req = Request::builder()
        .uri("/")
        .method("GET")
        .header(header::ORIGIN, "http://example.test")
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert!(String::from_utf8_lossy(&bytes).contains("chat-container"));

    let req = Request::builder()
        .uri("/js/chat.js")
        .method("GET")
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert!(String::from_utf8_lossy(&bytes).contains("session_id"));

    let req = Request::builder()
        .uri("/missing.html")
        .method("GET")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
