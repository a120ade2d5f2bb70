// SPDX-License-Identifier: MIT

//! Web front-end.
//!
//! Serves the HTML pages and the Google sign-in flow, delegating all
//! persistence to the user and coffee directory services.

use coffeelog::{config::WebConfig, web};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    coffeelog::init_logging();

    let config = WebConfig::from_env().expect("Failed to load configuration");
    let port = config.port;
    tracing::info!(
        port,
        user_directory = %config.user_directory_addr,
        coffee_directory = %config.coffee_directory_addr,
        "Starting web front-end"
    );

    let state = web::WebState::new(config);
    let app = web::create_router(state);

    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}
