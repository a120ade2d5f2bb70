// SPDX-License-Identifier: MIT

//! Coffee directory service.
//!
//! Owns the roaster catalog and the activity log; calls the user
//! directory to enrich activities with their owners.

use coffeelog::{
    clients::UserDirectoryClient,
    coffeedir,
    config::CoffeeDirectoryConfig,
    db::FirestoreDb,
    services::{CoffeeDirectory, PhotoStore},
};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    coffeelog::init_logging();

    let config = CoffeeDirectoryConfig::from_env().expect("Failed to load configuration");
    let port = config.port;
    tracing::info!(port, user_directory = %config.user_directory_addr, "Starting coffee directory");

    let db = FirestoreDb::new(&config.gcp_project_id)
        .await
        .expect("Failed to connect to Firestore");

    let users = UserDirectoryClient::new(&config.user_directory_addr);

    let photos = PhotoStore::new(&config.photos_bucket)
        .await
        .expect("Failed to initialize photo store");
    tracing::info!(bucket = %config.photos_bucket, "Photo store initialized");

    let state = Arc::new(coffeedir::CoffeeDirState {
        catalog: CoffeeDirectory::new(db, users, photos),
        config,
    });

    let app = coffeedir::create_router(state);

    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}
