// SPDX-License-Identifier: MIT

//! Web front-end input validation tests.

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use tower::ServiceExt;

mod common;

#[tokio::test]
async fn test_autocomplete_query_too_long() {
    let (app, _) = common::create_web_app();

    let long_query = "a".repeat(101);

    let response = app
        .oneshot(
            Request::builder()
                .uri(&format!("/autocomplete/roaster?data={}", long_query))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    // Rejected before the roaster catalog is fetched.
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_autocomplete_valid_query_hits_backend() {
    let (app, _) = common::create_web_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/autocomplete/roaster?data=chem")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    // The query passes validation and the dead backend surfaces as 502.
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn test_activity_page_rejects_non_numeric_id() {
    let (app, _) = common::create_web_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/a/not-a-number")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_profile_page_rejects_non_numeric_id() {
    let (app, _) = common::create_web_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/u/12x34")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_home_anonymous_renders() {
    let (app, _) = common::create_web_app();

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let html = String::from_utf8(body.to_vec()).unwrap();
    assert!(html.contains("/login"));
}
