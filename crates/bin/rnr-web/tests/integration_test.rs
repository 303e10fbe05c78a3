//! End-to-end smoke tests for the full rnr-web stack.
//!
//! Each test starts a fake automation backend on an ephemeral port, wires the
//! real reqwest backend adapter, control service and axum router against it,
//! and exercises the relay via `tower::ServiceExt::oneshot`; the relay itself
//! binds no TCP port.

use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::body::Body;
use axum::extract::State;
use axum::http::{Request, StatusCode, header};
use axum::routing::{get, post};
use axum::{Json, Router};
use http_body_util::BodyExt;
use rnr_adapter_backend_reqwest::{BackendConfig, HttpBackend};
use rnr_adapter_http_axum::router;
use rnr_adapter_http_axum::state::AppState;
use rnr_app::services::control_service::ControlService;
use rnr_domain::room::{NewRoom, RoomSummary};
use serde_json::{Map, Value, json};
use tower::ServiceExt;

type Rooms = Arc<Mutex<Map<String, Value>>>;

/// Start a fake backend that stores rooms in memory and rejects pairing.
async fn fake_backend() -> String {
    let rooms: Rooms = Arc::default();

    let app = Router::new()
        .route(
            "/add_room",
            post(|State(rooms): State<Rooms>, Json(room): Json<NewRoom>| async move {
                rooms.lock().unwrap().insert(
                    room.room_name.clone(),
                    json!({
                        "apple_tv_host": room.apple_tv_host,
                        "is_connected": false,
                        "light_ids": room.light_ids,
                    }),
                );
                Json(json!({ "status": "room_added", "room_name": room.room_name }))
            }),
        )
        .route(
            "/rooms",
            get(|State(rooms): State<Rooms>| async move {
                Json(Value::Object(rooms.lock().unwrap().clone()))
            }),
        )
        .route(
            "/start_pairing",
            post(|| async {
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "No AppleTV at 10.0.0.9" })),
                )
            }),
        )
        .route(
            "/send_pin",
            post(|| async { Json(json!({ "status": "pairing_finished" })) }),
        )
        .with_state(rooms);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("ephemeral port should bind");
    let addr = listener.local_addr().expect("listener has an address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("fake backend serves");
    });

    format!("http://{addr}")
}

/// Build a fully-wired relay pointed at `backend_url`.
fn relay(backend_url: &str) -> Router {
    let backend = HttpBackend::new(&BackendConfig {
        url: backend_url.to_string(),
        timeout_secs: 5,
        connect_timeout_secs: 1,
    })
    .expect("client should build");

    router::build(AppState::new(ControlService::new(backend)), &dist_dir())
}

fn dist_dir() -> PathBuf {
    static NEXT: AtomicUsize = AtomicUsize::new(0);
    let dir = std::env::temp_dir().join(format!(
        "rnr-web-it-{}-{}",
        std::process::id(),
        NEXT.fetch_add(1, Ordering::Relaxed)
    ));
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(
        dir.join("index.html"),
        "<html><head><title>RnR</title></head><body></body></html>",
    )
    .unwrap();
    dir
}

fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get_req(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Health & pages
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_return_ok_when_health_check_called() {
    let resp = relay("http://127.0.0.1:9")
        .oneshot(get_req("/health"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn should_serve_manage_rooms_page() {
    let resp = relay("http://127.0.0.1:9")
        .oneshot(get_req("/manage_rooms"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    assert!(String::from_utf8_lossy(&bytes).contains("<title>RnR</title>"));
}

// ---------------------------------------------------------------------------
// Rooms
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_add_room_then_list_it() {
    let backend = fake_backend().await;

    let room = NewRoom::builder()
        .room_name(" Living Room ")
        .apple_tv_host("10.0.0.5")
        .light_ids("1, 2,,3")
        .build()
        .unwrap();
    let resp = relay(&backend)
        .oneshot(post_json("/add_room", &serde_json::to_value(&room).unwrap()))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        body_json(resp).await,
        json!({ "status": "room_added", "room_name": "Living Room" })
    );

    let resp = relay(&backend).oneshot(get_req("/rooms")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let summary: RoomSummary = serde_json::from_value(body_json(resp).await).unwrap();
    assert_eq!(
        summary.lines(),
        vec!["Living Room - AppleTV: 10.0.0.5, Connected: false"]
    );
}

#[tokio::test]
async fn should_relay_rooms_in_backend_key_order() {
    let raw = r#"{"Zeta":{"apple_tv_host":"z","is_connected":false},"Alpha":{"apple_tv_host":"a","is_connected":true}}"#;
    let app = Router::new().route(
        "/rooms",
        get(move || async move { ([(header::CONTENT_TYPE, "application/json")], raw) }),
    );
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("ephemeral port should bind");
    let addr = listener.local_addr().expect("listener has an address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("fake backend serves");
    });

    let resp = relay(&format!("http://{addr}"))
        .oneshot(get_req("/rooms"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(String::from_utf8_lossy(&bytes), raw);
}

#[tokio::test]
async fn should_list_no_rooms_initially() {
    let backend = fake_backend().await;

    let resp = relay(&backend).oneshot(get_req("/rooms")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await, json!({}));
}

// ---------------------------------------------------------------------------
// Pairing
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_relay_pairing_failure_status_and_body() {
    let backend = fake_backend().await;

    let resp = relay(&backend)
        .oneshot(post_json(
            "/start_pairing",
            &json!({ "room_name": "Den", "apple_tv_host": "10.0.0.9", "protocol": "airplay" }),
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body_json(resp).await,
        json!({ "error": "No AppleTV at 10.0.0.9" })
    );
}

#[tokio::test]
async fn should_relay_pin_submission() {
    let backend = fake_backend().await;

    let resp = relay(&backend)
        .oneshot(post_json(
            "/send_pin",
            &json!({ "room_name": "Den", "pin": "1234" }),
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await, json!({ "status": "pairing_finished" }));
}

// ---------------------------------------------------------------------------
// Failures
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_return_bad_gateway_when_backend_is_down() {
    let resp = relay("http://127.0.0.1:9")
        .oneshot(get_req("/rooms"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    let body = body_json(resp).await;
    assert!(body["error"].as_str().unwrap().starts_with("backend unreachable"));
}
