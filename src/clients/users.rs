// SPDX-License-Identifier: MIT

//! User directory client.

use crate::error::AppError;
use crate::models::{GoogleIdentity, UserView};

/// Client for the user directory service.
#[derive(Clone)]
pub struct UserDirectoryClient {
    http: reqwest::Client,
    base_url: String,
}

impl UserDirectoryClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Resolve a Google identity to a local account, creating one if needed.
    pub async fn authorize_google(&self, identity: &GoogleIdentity) -> Result<UserView, AppError> {
        let url = format!("{}/accounts/authorize", self.base_url);
        let response = self
            .http
            .post(&url)
            .json(identity)
            .send()
            .await
            .map_err(|e| AppError::Upstream(format!("user directory unreachable: {}", e)))?;
        super::read_json(response).await
    }

    /// Fetch an account by ID; `None` when no such account exists.
    pub async fn get_account(&self, id: i64) -> Result<Option<UserView>, AppError> {
        let url = format!("{}/accounts/{}", self.base_url, id);
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::Upstream(format!("user directory unreachable: {}", e)))?;
        super::read_json_opt(response).await
    }
}
