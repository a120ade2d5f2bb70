// SPDX-License-Identifier: MIT

//! Typed HTTP clients for the directory services.

pub mod coffee;
pub mod users;

pub use coffee::CoffeeDirectoryClient;
pub use users::UserDirectoryClient;

use crate::error::AppError;
use serde::de::DeserializeOwned;

/// Check response status and parse the JSON body.
pub(crate) async fn read_json<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, AppError> {
    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(AppError::Upstream(format!("HTTP {}: {}", status, body)));
    }

    response
        .json()
        .await
        .map_err(|e| AppError::Upstream(format!("JSON parse error: {}", e)))
}

/// Like [`read_json`], but maps a 404 to `None`.
pub(crate) async fn read_json_opt<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<Option<T>, AppError> {
    if response.status() == reqwest::StatusCode::NOT_FOUND {
        return Ok(None);
    }
    read_json(response).await.map(Some)
}
