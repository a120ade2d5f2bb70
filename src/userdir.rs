// SPDX-License-Identifier: MIT

//! User directory service: HTTP surface over the account directory.

use crate::config::UserDirectoryConfig;
use crate::error::{AppError, Result};
use crate::health::health_check;
use crate::models::{GoogleIdentity, UserView};
use crate::services::AccountDirectory;
use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Shared state for the user directory service.
pub struct UserDirState {
    pub config: UserDirectoryConfig,
    pub accounts: AccountDirectory,
}

/// Build the complete router with all routes.
pub fn create_router(state: Arc<UserDirState>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/accounts/authorize", post(authorize))
        .route("/accounts/{id}", get(get_account))
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

/// Resolve a Google identity to a local account (find-or-create).
async fn authorize(
    State(state): State<Arc<UserDirState>>,
    Json(identity): Json<GoogleIdentity>,
) -> Result<Json<UserView>> {
    if identity.google_id.is_empty() {
        return Err(AppError::BadRequest("google_id is required".to_string()));
    }

    let account = state.accounts.authorize_google(&identity).await?;
    Ok(Json(account.to_view()))
}

/// Fetch an account by its internal ID.
async fn get_account(
    State(state): State<Arc<UserDirState>>,
    Path(id): Path<String>,
) -> Result<Json<UserView>> {
    let id: i64 = id
        .parse()
        .map_err(|_| AppError::BadRequest(format!("cannot parse account id {:?}", id)))?;

    let account = state
        .accounts
        .get_account(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("account {} not found", id)))?;

    Ok(Json(account.to_view()))
}
