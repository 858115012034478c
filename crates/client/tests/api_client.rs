//! `ApiClient` endpoint groups against the live mock API and stub servers.

mod common;

use std::sync::{Arc, Mutex};
use std::time::Duration;

use assert_matches::assert_matches;
use axum::http::StatusCode;
use axum::routing::{get, patch};
use axum::{Json, Router};
use chrono::Utc;
use imagiq_client::warehouse::{watch_metrics, watch_orders, WarehouseBoard};
use imagiq_client::{ApiClient, ClientConfig, ClientError};
use imagiq_core::auth::LoginRequest;
use imagiq_core::coverage::{CreateCoverageZone, GeoPoint};
use imagiq_core::error::CoreError;
use serde_json::{json, Value};

use common::RecordingNotifier;

// ---------------------------------------------------------------------------
// Auth and session
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_login_builds_session_context() {
    let api = common::spawn_api().await;
    let session = common::login(&api).await;

    assert!(!session.token.is_empty());
    assert_eq!(session.user.email, common::ADMIN_EMAIL);
    assert!(session.expires_at > Utc::now());
    assert!(!api.lifecycle().is_expired(&session, Utc::now()));
}

#[tokio::test]
async fn test_bad_credentials_surface_server_message() {
    let api = common::spawn_api().await;
    let err = api
        .auth()
        .login(&LoginRequest {
            email: common::ADMIN_EMAIL.to_string(),
            password: "wrong".to_string(),
        })
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(401));
    assert_eq!(err.user_message(), "Invalid email or password");
}

#[tokio::test]
async fn test_expired_session_refused_before_sending() {
    let api = common::spawn_api().await;
    let mut session = common::login(&api).await;
    session.expires_at = Utc::now() - chrono::Duration::minutes(1);

    let err = api.warehouse().metrics(&session).await.unwrap_err();
    assert_matches!(err, ClientError::SessionExpired);

    let renewed = api
        .auth()
        .renew(session, &common::admin_credentials())
        .await
        .unwrap();
    assert!(api.warehouse().metrics(&renewed).await.is_ok());
}

#[tokio::test]
async fn test_logout_invalidates_token() {
    let api = common::spawn_api().await;
    let session = common::login(&api).await;

    api.auth().logout(&session).await.unwrap();
    let err = api.warehouse().orders(&session).await.unwrap_err();
    assert_eq!(err.status(), Some(401));
}

// ---------------------------------------------------------------------------
// Catalog and warehouse
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_catalog_navigation() {
    let api = common::spawn_api().await;

    let categories = api.categories().list().await.unwrap();
    assert!(categories.iter().any(|c| c.id == "cat-mobile"));

    let menus = api.menus().list_for_category("cat-mobile").await.unwrap();
    assert!(menus.iter().all(|m| m.category_id == "cat-mobile"));
    assert!(menus.iter().any(|m| m.id == "menu-smartphones"));

    let submenus = api.submenus().list_for_menu("menu-smartphones").await.unwrap();
    assert!(submenus.iter().all(|s| s.menu_id == "menu-smartphones"));

    let err = api.menus().list_for_category("cat-nope").await.unwrap_err();
    assert_eq!(err.status(), Some(404));
}

#[tokio::test]
async fn test_column_values_through_filter_group() {
    let api = common::spawn_api().await;
    let session = common::login(&api).await;

    let values = api.filters().column_values(&session, "color").await.unwrap();
    assert_eq!(values.column, "color");
    assert!(values.values.contains(&"Negro".to_string()));
}

#[tokio::test]
async fn test_remote_metrics_match_remote_orders() {
    let api = common::spawn_api().await;
    let session = common::login(&api).await;

    let orders = api.warehouse().orders(&session).await.unwrap();
    let metrics = api.warehouse().metrics(&session).await.unwrap();
    assert_eq!(orders.len(), 40);
    assert_eq!(metrics.total_orders, 40);
}

#[tokio::test]
async fn test_watch_orders_fills_board_until_cancelled() {
    let api = common::spawn_api().await;
    let session = common::login(&api).await;
    let board = Arc::new(Mutex::new(WarehouseBoard::new(
        Vec::new(),
        RecordingNotifier::shared(),
    )));

    let subscription = watch_orders(
        api.clone(),
        session.clone(),
        board.clone(),
        Duration::from_millis(50),
    );
    let mut filled = false;
    for _ in 0..100 {
        if !board.lock().unwrap().orders().is_empty() {
            filled = true;
            break;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    subscription.shutdown().await;
    assert!(filled);
    assert_eq!(board.lock().unwrap().orders().len(), 40);

    let totals = Arc::new(Mutex::new(Vec::new()));
    let sink = totals.clone();
    let subscription = watch_metrics(api, session, Duration::from_millis(50), move |m| {
        sink.lock().unwrap().push(m.total_orders)
    });
    for _ in 0..100 {
        if !totals.lock().unwrap().is_empty() {
            break;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    subscription.shutdown().await;
    assert_eq!(totals.lock().unwrap().first(), Some(&40));
}

// ---------------------------------------------------------------------------
// Stub server: envelope handling for the remaining groups
// ---------------------------------------------------------------------------

fn zone(id: &str, active: bool) -> Value {
    json!({
        "id": id,
        "name": format!("Zona {id}"),
        "storeId": "store-1",
        "city": "Bogotá",
        "polygon": [
            { "lat": 0.0, "lng": 0.0 },
            { "lat": 0.0, "lng": 10.0 },
            { "lat": 10.0, "lng": 10.0 },
            { "lat": 10.0, "lng": 0.0 }
        ],
        "isActive": active
    })
}

async fn stub_client() -> (ApiClient, imagiq_client::SessionContext) {
    let router = Router::new()
        .route(
            "/api/auth/login",
            axum::routing::post(|| async {
                Json(json!({
                    "success": true,
                    "data": {
                        "token": "stub-token",
                        "user": { "id": "admin-1", "email": "a@b.co", "name": "A", "role": "admin" },
                        "expiresAt": (Utc::now() + chrono::Duration::hours(1)).to_rfc3339()
                    }
                }))
            }),
        )
        .route(
            "/api/banners",
            get(|| async {
                Json(json!({
                    "success": true,
                    "data": [{
                        "id": "b-1",
                        "name": "Galaxy S24",
                        "placement": "home",
                        "desktopImageUrl": "https://cdn.example.com/s24.jpg",
                        "isActive": true
                    }]
                }))
            }),
        )
        .route(
            "/api/banners/{id}",
            patch(|| async {
                (
                    StatusCode::OK,
                    Json(json!({ "success": false, "message": "Banner bloqueado" })),
                )
            }),
        )
        .route(
            "/api/coverage-zones",
            get(|| async { Json(json!({ "success": true, "data": [zone("z-1", true), zone("z-2", false)] })) }),
        )
        .route(
            "/api/product-notifications/stats",
            get(|| async { (StatusCode::BAD_GATEWAY, "<html>upstream down</html>") }),
        )
        .route(
            "/api/warehouse/metrics",
            get(|| async { "not json at all" }),
        );

    let base_url = common::serve(router).await;
    let api = ApiClient::new(&ClientConfig::with_api_url(base_url));
    let session = api.auth().login(&common::admin_credentials()).await.unwrap();
    (api, session)
}

#[tokio::test]
async fn test_banner_list_and_rejected_toggle() {
    let (api, session) = stub_client().await;

    let banners = api.banners().list(&session).await.unwrap();
    assert_eq!(banners.len(), 1);
    assert!(banners[0].is_live(Utc::now()));

    let err = api
        .banners()
        .set_active(&session, "b-1", false)
        .await
        .unwrap_err();
    assert_matches!(err, ClientError::Api { status: 200, ref message, .. } if message == "Banner bloqueado");
}

#[tokio::test]
async fn test_coverage_lookup_uses_active_zones() {
    let (api, session) = stub_client().await;

    let covering = api
        .coverage_zones()
        .covering(&session, GeoPoint { lat: 5.0, lng: 5.0 })
        .await
        .unwrap();
    let ids: Vec<&str> = covering.iter().map(|z| z.id.as_str()).collect();
    assert_eq!(ids, vec!["z-1"]);

    let outside = api
        .coverage_zones()
        .covering(&session, GeoPoint { lat: 50.0, lng: 5.0 })
        .await
        .unwrap();
    assert!(outside.is_empty());
}

#[tokio::test]
async fn test_degenerate_zone_rejected_locally() {
    let (api, session) = stub_client().await;
    let err = api
        .coverage_zones()
        .create(
            &session,
            &CreateCoverageZone {
                name: "Línea".to_string(),
                store_id: "store-1".to_string(),
                city: "Bogotá".to_string(),
                polygon: vec![GeoPoint { lat: 0.0, lng: 0.0 }, GeoPoint { lat: 1.0, lng: 1.0 }],
            },
        )
        .await
        .unwrap_err();
    assert_matches!(err, ClientError::Validation(CoreError::Validation(_)));
}

#[tokio::test]
async fn test_non_envelope_bodies() {
    let (api, session) = stub_client().await;

    let err = api
        .product_notifications()
        .stats(&session)
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(502));

    let err = api.warehouse().metrics(&session).await.unwrap_err();
    assert_matches!(err, ClientError::MalformedEnvelope(_));
    assert_eq!(err.user_message(), "Respuesta inesperada del servidor");
}
