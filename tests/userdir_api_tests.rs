// SPDX-License-Identifier: MIT

//! User directory API tests against an offline database.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use tower::ServiceExt;

mod common;

#[tokio::test]
async fn test_health_ok() {
    let app = common::create_userdir_app();

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_get_account_rejects_non_numeric_id() {
    let app = common::create_userdir_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/accounts/not-a-number")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_get_account_offline_db_is_server_error() {
    let app = common::create_userdir_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/accounts/12345")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_authorize_rejects_empty_subject() {
    let app = common::create_userdir_app();

    let body = serde_json::json!({
        "google_id": "",
        "email": null,
        "display_name": "Ada",
        "picture_url": null,
    });

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/accounts/authorize")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
