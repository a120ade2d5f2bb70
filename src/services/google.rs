// SPDX-License-Identifier: MIT

//! Google OAuth2 / OpenID Connect client for the sign-in flow.

use crate::config::GoogleOAuthConfig;
use crate::error::AppError;
use crate::models::GoogleIdentity;
use serde::Deserialize;

const AUTH_URL: &str = "https://accounts.google.com/o/oauth2/v2/auth";
const TOKEN_URL: &str = "https://oauth2.googleapis.com/token";
const USERINFO_URL: &str = "https://openidconnect.googleapis.com/v1/userinfo";
const SCOPES: &str = "openid email profile";

/// Google OAuth client.
#[derive(Clone)]
pub struct GoogleAuthClient {
    http: reqwest::Client,
    client_id: String,
    client_secret: String,
}

/// Token endpoint response.
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// OpenID userinfo response.
#[derive(Debug, Deserialize)]
struct UserInfo {
    sub: String,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    picture: Option<String>,
}

impl GoogleAuthClient {
    pub fn new(config: &GoogleOAuthConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            client_id: config.client_id.clone(),
            client_secret: config.client_secret.clone(),
        }
    }

    /// Build the consent-screen URL the browser is redirected to.
    pub fn consent_url(&self, redirect_uri: &str, state: &str) -> String {
        format!(
            "{}?client_id={}&redirect_uri={}&response_type=code&scope={}&access_type=offline&state={}",
            AUTH_URL,
            urlencoding::encode(&self.client_id),
            urlencoding::encode(redirect_uri),
            urlencoding::encode(SCOPES),
            urlencoding::encode(state),
        )
    }

    /// Exchange an authorization code for an access token.
    pub async fn exchange_code(&self, code: &str, redirect_uri: &str) -> Result<String, AppError> {
        let response = self
            .http
            .post(TOKEN_URL)
            .form(&[
                ("client_id", self.client_id.as_str()),
                ("client_secret", self.client_secret.as_str()),
                ("code", code),
                ("grant_type", "authorization_code"),
                ("redirect_uri", redirect_uri),
            ])
            .send()
            .await
            .map_err(|e| AppError::Upstream(format!("token exchange request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Upstream(format!(
                "token exchange failed: HTTP {}: {}",
                status, body
            )));
        }

        let token: TokenResponse = response
            .json()
            .await
            .map_err(|e| AppError::Upstream(format!("token response parse error: {}", e)))?;
        Ok(token.access_token)
    }

    /// Fetch the signed-in user's OpenID profile.
    pub async fn fetch_profile(&self, access_token: &str) -> Result<GoogleIdentity, AppError> {
        let response = self
            .http
            .get(USERINFO_URL)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| AppError::Upstream(format!("userinfo request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Upstream(format!(
                "userinfo fetch failed: HTTP {}: {}",
                status, body
            )));
        }

        let info: UserInfo = response
            .json()
            .await
            .map_err(|e| AppError::Upstream(format!("userinfo parse error: {}", e)))?;

        tracing::debug!(google_id = %info.sub, "retrieved google user");

        Ok(GoogleIdentity {
            google_id: info.sub,
            email: info.email,
            display_name: info.name.unwrap_or_default(),
            picture_url: info.picture,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_consent_url_carries_state_and_redirect() {
        let client = GoogleAuthClient::new(&GoogleOAuthConfig {
            client_id: "id-123".to_string(),
            client_secret: "s3cret".to_string(),
        });

        let url = client.consent_url("http://localhost:8000/oauth2callback", "nonce-abc");

        assert!(url.starts_with("https://accounts.google.com/o/oauth2/v2/auth?"));
        assert!(url.contains("client_id=id-123"));
        assert!(url.contains("state=nonce-abc"));
        assert!(url.contains("redirect_uri=http%3A%2F%2Flocalhost%3A8000%2Foauth2callback"));
        assert!(!url.contains("s3cret"));
    }
}
