// SPDX-License-Identifier: MIT

//! Browser-facing web front-end.
//!
//! Serves the HTML pages, the Google sign-in flow and the roaster
//! autocomplete endpoint, delegating all persistence to the two directory
//! services.

pub mod auth;
pub mod pages;
pub mod session;
pub mod site;

use crate::clients::{CoffeeDirectoryClient, UserDirectoryClient};
use crate::config::WebConfig;
use crate::health::health_check;
use crate::services::GoogleAuthClient;
use axum::extract::FromRef;
use axum::{routing::get, Router};
use axum_extra::extract::cookie::Key;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Shared state for the web front-end.
///
/// Cloning is cheap: the clients hold pooled connections internally.
#[derive(Clone)]
pub struct WebState {
    pub config: WebConfig,
    pub oauth: GoogleAuthClient,
    pub users: UserDirectoryClient,
    pub coffee: CoffeeDirectoryClient,
    cookie_key: Key,
}

impl WebState {
    pub fn new(config: WebConfig) -> Self {
        let cookie_key = Key::from(&config.cookie_key);
        Self {
            oauth: GoogleAuthClient::new(&config.oauth),
            users: UserDirectoryClient::new(&config.user_directory_addr),
            coffee: CoffeeDirectoryClient::new(&config.coffee_directory_addr),
            cookie_key,
            config,
        }
    }
}

impl FromRef<WebState> for Key {
    fn from_ref(state: &WebState) -> Key {
        state.cookie_key.clone()
    }
}

/// Build the complete router with all routes.
pub fn create_router(state: WebState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .merge(auth::routes())
        .merge(site::routes())
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
