// SPDX-License-Identifier: MIT

//! Coffeelog: log your coffee-drinking activity.
//!
//! This crate provides the three services making up the application: a
//! user directory (accounts linked to Google identities), a coffee
//! directory (roaster catalog and activity log), and the browser-facing
//! web front-end that ties them together.

pub mod clients;
pub mod coffeedir;
pub mod config;
pub mod db;
pub mod error;
pub mod health;
pub mod middleware;
pub mod models;
pub mod reference;
pub mod services;
pub mod userdir;
pub mod web;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize structured JSON logging (GCP-compliant).
///
/// Called once from each binary's `main`.
pub fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("coffeelog=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .with(format)
        .init();
}
