use super::*;
use crate::adapters::service::API_KEY_HEADER;
use crate::config::secret_string;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;


const NONCE: &str = "n0nce";
const ADMIN_KEY: &str = "admin-key";

/// 120 published posts tagged with term 12, one draft, one post without a permalink
fn fixture() -> ContentFixture {
    let mut posts: Vec<Value> = (0..120)
        .map(|i| {
            json!({
                "id": i + 1,
                "title": format!("Post {i}"),
                "permalink": format!("https://blog.example.com/post-{i}"),
                "date": format!("2025-{:02}-{:02}T00:00:00Z", i / 28 + 1, i % 28 + 1),
                "terms": [12]
            })
        })
        .collect();
    posts.push(json!({
        "id": 500, "title": "Draft", "permalink": "https://blog.example.com/draft",
        "date": "2026-01-01T00:00:00Z", "status": "draft", "terms": [12]
    }));
    posts.push(json!({
        "id": 501, "title": "Hidden", "date": "2024-01-01T00:00:00Z", "terms": [7]
    }));
    posts.push(json!({
        "id": 502, "title": "Listed", "permalink": "https://blog.example.com/listed",
        "date": "2025-01-05T09:30:00Z", "terms": [7]
    }));

    serde_json::from_value(json!({
        "taxonomies": ["category", "post_tag"],
        "terms": [
            {"id": 12, "taxonomy": "category", "name": "News & Views"},
            {"id": 7, "taxonomy": "post_tag", "name": "Featured"},
            {"id": 8, "taxonomy": "post_tag", "name": "Empty"}
        ],
        "posts": posts
    }))
    .unwrap()
}

fn server_config() -> ServerConfig {
    ServerConfig {
        nonce: Some(secret_string(NONCE.to_string())),
        admin_keys: vec![secret_string(ADMIN_KEY.to_string())],
        ..Default::default()
    }
}

fn test_router() -> Router {
    let store: Arc<dyn ContentStore> = Arc::new(InMemoryContentStore::new(fixture()));
    create_router(AppState::new(store, Arc::new(server_config())))
}

fn admin_request(query: &str) -> Request<Body> {
    Request::builder()
        .uri(format!("{AJAX_PATH}?{query}"))
        .header(API_KEY_HEADER, ADMIN_KEY)
        .body(Body::empty())
        .unwrap()
}

async fn send(request: Request<Body>) -> (StatusCode, String) {
    let response = test_router().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

async fn send_json(request: Request<Body>) -> (StatusCode, Value) {
    let (status, body) = send(request).await;
    (status, serde_json::from_str(&body).unwrap())
}

#[tokio::test]
async fn test_server_spawns_and_stops() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let store: Arc<dyn ContentStore> = Arc::new(InMemoryContentStore::new(fixture()));
    let state = AppState::new(store, Arc::new(server_config()));
    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    let handle = tokio::spawn(serve(listener, state, shutdown_rx));
    shutdown_tx.send(true).unwrap();

    let result = tokio::time::timeout(std::time::Duration::from_secs(5), handle)
        .await
        .unwrap()
        .unwrap();
    assert!(result.is_ok());
}

#[test]
fn test_build_store_without_content_path_is_empty() {
    let store = build_store(&ServerConfig::default()).unwrap();
    assert!(!store.taxonomy_exists("category"));
}
