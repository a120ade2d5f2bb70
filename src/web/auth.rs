// SPDX-License-Identifier: MIT

//! Google OAuth authentication routes.

use crate::error::{AppError, Result};
use crate::web::{session, WebState};
use axum::{
    extract::{Query, State},
    http::{header, HeaderMap},
    response::Redirect,
    routing::get,
    Router,
};
use axum_extra::extract::cookie::PrivateCookieJar;
use serde::Deserialize;

pub fn routes() -> Router<WebState> {
    Router::new()
        .route("/login", get(login))
        .route("/oauth2callback", get(oauth2_callback))
        .route("/logout", get(logout))
}

/// Callback URL derived from the request Host header.
fn callback_url(headers: &HeaderMap) -> String {
    let host = headers
        .get(header::HOST)
        .and_then(|h| h.to_str().ok())
        .unwrap_or("localhost:8000");

    let scheme = if host.contains("localhost") || host.contains("127.0.0.1") {
        "http"
    } else {
        "https"
    };

    format!("{}://{}/oauth2callback", scheme, host)
}

/// Start the sign-in flow: mint a state nonce and redirect to Google.
async fn login(
    State(state): State<WebState>,
    headers: HeaderMap,
    jar: PrivateCookieJar,
) -> Result<(PrivateCookieJar, Redirect)> {
    let nonce = session::new_state_nonce()?;
    let jar = session::store_oauth_state(jar, &nonce);

    let url = state.oauth.consent_url(&callback_url(&headers), &nonce);
    tracing::debug!("redirecting user to oauth2 consent page");

    Ok((jar, Redirect::temporary(&url)))
}

#[derive(Deserialize)]
pub struct CallbackParams {
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    state: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

/// OAuth callback: verify state, exchange the code, authorize the account
/// and write the session cookie.
async fn oauth2_callback(
    State(state): State<WebState>,
    headers: HeaderMap,
    jar: PrivateCookieJar,
    Query(params): Query<CallbackParams>,
) -> Result<(PrivateCookieJar, Redirect)> {
    let (jar, expected) = session::take_oauth_state(jar);
    let expected = expected
        .ok_or_else(|| AppError::BadRequest("missing oauth2 state cookie".to_string()))?;

    if params.state.as_deref() != Some(expected.as_str()) {
        return Err(AppError::BadRequest("wrong oauth2 state".to_string()));
    }

    if let Some(error) = params.error {
        tracing::warn!(error = %error, "oauth2 error from google");
        return Err(AppError::BadRequest(format!(
            "authorization failed: {}",
            error
        )));
    }

    let code = params
        .code
        .filter(|code| !code.is_empty())
        .ok_or_else(|| AppError::BadRequest("missing oauth2 grant code".to_string()))?;

    let token = state
        .oauth
        .exchange_code(&code, &callback_url(&headers))
        .await?;
    let identity = state.oauth.fetch_profile(&token).await?;

    let user = state.users.authorize_google(&identity).await?;
    tracing::info!(id = user.id, "authenticated user with google");

    let jar = session::store_session(jar, user.id);
    Ok((jar, Redirect::temporary("/")))
}

/// Log out: expire our cookies and go home.
async fn logout(jar: PrivateCookieJar) -> (PrivateCookieJar, Redirect) {
    tracing::debug!("logout requested");
    (session::clear(jar), Redirect::temporary("/"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers_with_host(host: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::HOST, host.parse().unwrap());
        headers
    }

    #[test]
    fn test_callback_url_localhost_is_http() {
        let url = callback_url(&headers_with_host("localhost:8000"));
        assert_eq!(url, "http://localhost:8000/oauth2callback");
    }

    #[test]
    fn test_callback_url_production_is_https() {
        let url = callback_url(&headers_with_host("coffeelog.example.com"));
        assert_eq!(url, "https://coffeelog.example.com/oauth2callback");
    }
}
