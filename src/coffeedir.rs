// SPDX-License-Identifier: MIT

//! Coffee directory service: HTTP surface over the roaster catalog and
//! activity log.

use crate::config::CoffeeDirectoryConfig;
use crate::error::{AppError, Result};
use crate::health::health_check;
use crate::models::{
    ActivityView, CreateRoasterRequest, PostActivityRequest, PostActivityResponse, Roaster,
};
use crate::services::CoffeeDirectory;
use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Shared state for the coffee directory service.
pub struct CoffeeDirState {
    pub config: CoffeeDirectoryConfig,
    pub catalog: CoffeeDirectory,
}

/// Build the complete router with all routes.
pub fn create_router(state: Arc<CoffeeDirState>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/roasters", get(list_roasters).post(create_roaster))
        .route("/roasters/{id}", get(get_roaster))
        .route("/roasters/by-name/{name}", get(get_roaster_by_name))
        .route("/activities", post(post_activity))
        .route("/activities/{id}", get(get_activity))
        .route("/accounts/{id}/activities", get(user_activities))
        .layer(axum::middleware::from_fn(
            crate::middleware::security::add_security_headers,
        ))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state)
}

fn parse_id(raw: &str) -> Result<i64> {
    raw.parse()
        .map_err(|_| AppError::BadRequest(format!("cannot parse id {:?}", raw)))
}

/// List the full roaster catalog.
async fn list_roasters(State(state): State<Arc<CoffeeDirState>>) -> Result<Json<Vec<Roaster>>> {
    let roasters = state.catalog.list_roasters().await?;
    tracing::debug!(count = roasters.len(), "retrieved roasters list");
    Ok(Json(roasters))
}

/// Insert a roaster unconditionally.
async fn create_roaster(
    State(state): State<Arc<CoffeeDirState>>,
    Json(request): Json<CreateRoasterRequest>,
) -> Result<Json<Roaster>> {
    if request.name.is_empty() {
        return Err(AppError::BadRequest("roaster name is required".to_string()));
    }

    let roaster = state.catalog.create_roaster(&request.name).await?;
    Ok(Json(roaster))
}

/// Fetch a roaster by internal ID.
async fn get_roaster(
    State(state): State<Arc<CoffeeDirState>>,
    Path(id): Path<String>,
) -> Result<Json<Roaster>> {
    let id = parse_id(&id)?;
    let roaster = state
        .catalog
        .get_roaster_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("roaster {} not found", id)))?;
    Ok(Json(roaster))
}

/// Fetch a roaster by exact name.
async fn get_roaster_by_name(
    State(state): State<Arc<CoffeeDirState>>,
    Path(name): Path<String>,
) -> Result<Json<Roaster>> {
    let roaster = state
        .catalog
        .get_roaster_by_name(&name)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("roaster {:?} not found", name)))?;
    Ok(Json(roaster))
}

/// Record a new activity.
async fn post_activity(
    State(state): State<Arc<CoffeeDirState>>,
    Json(request): Json<PostActivityRequest>,
) -> Result<Json<PostActivityResponse>> {
    if request.roaster_name.is_empty() {
        return Err(AppError::BadRequest("roaster name is required".to_string()));
    }

    let id = state.catalog.post_activity(request).await?;
    Ok(Json(PostActivityResponse { id }))
}

/// Fetch an activity with its owner.
async fn get_activity(
    State(state): State<Arc<CoffeeDirState>>,
    Path(id): Path<String>,
) -> Result<Json<ActivityView>> {
    let id = parse_id(&id)?;
    let activity = state
        .catalog
        .get_activity(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("activity {} not found", id)))?;
    Ok(Json(activity))
}

/// List a user's activities, newest first.
async fn user_activities(
    State(state): State<Arc<CoffeeDirState>>,
    Path(id): Path<String>,
) -> Result<Json<Vec<ActivityView>>> {
    let id = parse_id(&id)?;
    let activities = state
        .catalog
        .user_activities(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("account {} not found", id)))?;
    Ok(Json(activities))
}
