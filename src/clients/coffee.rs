// SPDX-License-Identifier: MIT

//! Coffee directory client.

use crate::error::AppError;
use crate::models::{ActivityView, PostActivityRequest, PostActivityResponse, Roaster};

/// Client for the coffee directory service.
#[derive(Clone)]
pub struct CoffeeDirectoryClient {
    http: reqwest::Client,
    base_url: String,
}

impl CoffeeDirectoryClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Fetch the full roaster catalog.
    pub async fn list_roasters(&self) -> Result<Vec<Roaster>, AppError> {
        let url = format!("{}/roasters", self.base_url);
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::Upstream(format!("coffee directory unreachable: {}", e)))?;
        super::read_json(response).await
    }

    /// Post a new activity; returns the assigned activity ID.
    pub async fn post_activity(
        &self,
        request: &PostActivityRequest,
    ) -> Result<PostActivityResponse, AppError> {
        let url = format!("{}/activities", self.base_url);
        let response = self
            .http
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| AppError::Upstream(format!("coffee directory unreachable: {}", e)))?;
        super::read_json(response).await
    }

    /// Fetch a single activity with its owner; `None` when absent.
    pub async fn get_activity(&self, id: i64) -> Result<Option<ActivityView>, AppError> {
        let url = format!("{}/activities/{}", self.base_url, id);
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::Upstream(format!("coffee directory unreachable: {}", e)))?;
        super::read_json_opt(response).await
    }

    /// List a user's activities, newest first; `None` when the user is
    /// unknown to the directory.
    pub async fn user_activities(&self, user_id: i64) -> Result<Option<Vec<ActivityView>>, AppError> {
        let url = format!("{}/accounts/{}/activities", self.base_url, user_id);
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::Upstream(format!("coffee directory unreachable: {}", e)))?;
        super::read_json_opt(response).await
    }
}
