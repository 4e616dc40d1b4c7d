//! End-to-end checks of the HTTP surface: routing, envelopes, status codes
//! Run: cargo test -p reserva-server --test http_api

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use chrono::{Duration, Utc};
use serde_json::{Value, json};
use tower::ServiceExt;

use reserva_server::core::{Config, ServerState};

async fn app() -> (tempfile::TempDir, Router) {
    let tmp = tempfile::tempdir().unwrap();
    let config = Config::with_overrides(tmp.path().to_string_lossy(), 0);
    let state = ServerState::initialize(&config).await.unwrap();
    (tmp, reserva_server::api::router(state))
}

async fn request(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(v) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(serde_json::to_vec(&v).unwrap())
        }
        None => Body::empty(),
    };
    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

#[tokio::test]
async fn health_is_public() {
    let (_tmp, app) = app().await;
    let (status, body) = request(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn login_gate_accepts_only_the_configured_pair() {
    let (_tmp, app) = app().await;

    let (status, body) = request(
        &app,
        "POST",
        "/api/auth/login",
        Some(json!({"username": "admin", "password": "admin"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["username"], "admin");

    // Wrong password and unknown username produce the same answer
    let (status, body) = request(
        &app,
        "POST",
        "/api/auth/login",
        Some(json!({"username": "admin", "password": "nope"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "E0006");
    assert_eq!(body["message"], "Invalid username or password");

    let (status, body) = request(
        &app,
        "POST",
        "/api/auth/login",
        Some(json!({"username": "root", "password": "admin"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid username or password");
}

#[tokio::test]
async fn client_crud_over_http() {
    let (_tmp, app) = app().await;

    let (status, created) = request(
        &app,
        "POST",
        "/api/clients",
        Some(json!({
            "name": "Ana García",
            "email": "ana@example.com",
            "phone": "+34911223344",
            "address": "Calle Mayor 1"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let id = created["id"].as_str().unwrap().to_string();
    assert!(id.starts_with("usuarios:"));

    let (status, list) = request(&app, "GET", "/api/clients", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list.as_array().unwrap().len(), 1);

    let (status, updated) = request(
        &app,
        "PUT",
        &format!("/api/clients/{id}"),
        Some(json!({
            "name": "Ana G. Pérez",
            "email": "ana.perez@example.com",
            "phone": "0034911223344"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["name"], "Ana G. Pérez");
    assert_eq!(updated["id"], id.as_str());

    // Validation failures use the envelope
    let (status, body) = request(
        &app,
        "POST",
        "/api/clients",
        Some(json!({
            "name": "Sin Correo",
            "email": "sin-correo",
            "phone": "+34911223399"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "E0002");

    let (status, deleted) = request(&app, "DELETE", &format!("/api/clients/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(deleted, Value::Bool(true));

    let (status, body) = request(&app, "GET", &format!("/api/clients/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "E0003");
}

#[tokio::test]
async fn duplicate_table_number_maps_to_conflict() {
    let (_tmp, app) = app().await;

    let payload = json!({"table_number": 5, "capacity": 4, "location": "Terraza"});
    let (status, _) = request(&app, "POST", "/api/tables", Some(payload.clone())).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = request(&app, "POST", "/api/tables", Some(payload)).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "E0004");

    let (status, summary) = request(&app, "GET", "/api/dashboard", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(summary, json!({"clients": 0, "tables": 1, "reservations": 0}));
}

#[tokio::test]
async fn reservation_flow_with_date_filter() {
    let (_tmp, app) = app().await;

    let (_, ana) = request(
        &app,
        "POST",
        "/api/clients",
        Some(json!({
            "name": "Ana García",
            "email": "ana@example.com",
            "phone": "+34911223344"
        })),
    )
    .await;
    let (_, ben) = request(
        &app,
        "POST",
        "/api/clients",
        Some(json!({
            "name": "Benito Ruiz",
            "email": "benito@example.com",
            "phone": "+34911223355"
        })),
    )
    .await;
    let (_, t1) = request(
        &app,
        "POST",
        "/api/tables",
        Some(json!({"table_number": 1, "capacity": 4, "location": "Salón"})),
    )
    .await;

    let ana_id = ana["id"].as_str().unwrap();
    let ben_id = ben["id"].as_str().unwrap();
    let t1_id = t1["id"].as_str().unwrap();

    let day = (Utc::now() + Duration::days(40)).date_naive();
    let at = |h: u32| day.and_hms_opt(h, 0, 0).unwrap().and_utc().timestamp_millis();

    // Status defaults to Pending when omitted
    let (status, created) = request(
        &app,
        "POST",
        "/api/reservations",
        Some(json!({
            "client_id": ana_id,
            "table_id": t1_id,
            "reserved_at": at(13)
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["status"], "Pending");

    // Another client an hour later on the same table
    let (status, body) = request(
        &app,
        "POST",
        "/api/reservations",
        Some(json!({
            "client_id": ben_id,
            "table_id": t1_id,
            "reserved_at": at(14)
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "E0004");

    // Dinner the same day and lunch the next day are fine
    let (status, _) = request(
        &app,
        "POST",
        "/api/reservations",
        Some(json!({
            "client_id": ben_id,
            "table_id": t1_id,
            "reserved_at": at(20),
            "status": "Confirmed",
            "notes": "Ventana"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let next_day = day.succ_opt().unwrap();
    let (status, _) = request(
        &app,
        "POST",
        "/api/reservations",
        Some(json!({
            "client_id": ana_id,
            "table_id": t1_id,
            "reserved_at": next_day.and_hms_opt(13, 0, 0).unwrap().and_utc().timestamp_millis()
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, filtered) = request(
        &app,
        "GET",
        &format!("/api/reservations?date={}", day.format("%Y-%m-%d")),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let filtered = filtered.as_array().unwrap();
    assert_eq!(filtered.len(), 2);
    assert_eq!(filtered[0]["reserved_at"], at(13));
    assert_eq!(filtered[1]["reserved_at"], at(20));

    let (status, all) = request(&app, "GET", "/api/reservations", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(all.as_array().unwrap().len(), 3);

    let (status, body) = request(&app, "GET", "/api/reservations?date=not-a-date", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "E0002");
}
