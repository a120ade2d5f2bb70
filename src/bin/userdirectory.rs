// SPDX-License-Identifier: MIT

//! User directory service.
//!
//! Maps Google identities to local accounts and serves account lookups
//! for the other services.

use coffeelog::{
    config::UserDirectoryConfig, db::FirestoreDb, services::AccountDirectory, userdir,
};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    coffeelog::init_logging();

    let config = UserDirectoryConfig::from_env().expect("Failed to load configuration");
    let port = config.port;
    tracing::info!(port, "Starting user directory");

    let db = FirestoreDb::new(&config.gcp_project_id)
        .await
        .expect("Failed to connect to Firestore");

    let state = Arc::new(userdir::UserDirState {
        accounts: AccountDirectory::new(db),
        config,
    });

    let app = userdir::create_router(state);

    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}
