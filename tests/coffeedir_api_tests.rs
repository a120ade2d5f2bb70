// SPDX-License-Identifier: MIT

//! Coffee directory API tests against offline backends.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use tower::ServiceExt;

mod common;

#[tokio::test]
async fn test_get_activity_rejects_non_numeric_id() {
    let app = common::create_coffeedir_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/activities/abc")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_user_activities_rejects_non_numeric_id() {
    let app = common::create_coffeedir_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/accounts/abc/activities")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_list_roasters_offline_db_is_server_error() {
    let app = common::create_coffeedir_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/roasters")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_post_activity_requires_roaster_name() {
    let app = common::create_coffeedir_app();

    let body = serde_json::json!({
        "user_id": 7,
        "date": "2024-03-01T09:00:00+00:00",
        "drink": "Cortado",
        "method": "Espresso",
        "homebrew": false,
        "origin": "Kenya",
        "roaster_name": "",
        "amount": { "n": 2, "unit": "shots" },
        "notes": "",
        "picture": null,
    });

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/activities")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_roaster_requires_name() {
    let app = common::create_coffeedir_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/roasters")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"name":""}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
