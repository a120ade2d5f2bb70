// SPDX-License-Identifier: MIT

//! Session and OAuth-state cookies.
//!
//! The session is the account ID inside an authenticated-encrypted cookie
//! (`PrivateCookieJar`); a cookie that fails decryption is simply absent,
//! so a tampered session degrades to anonymous. There is no server-side
//! session table and no revocation.

use crate::error::AppError;
use axum_extra::extract::cookie::{Cookie, PrivateCookieJar, SameSite};
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use ring::rand::{SecureRandom, SystemRandom};

/// Session cookie holding the signed-in account ID.
pub const SESSION_COOKIE: &str = "coffeelog_user";

/// Short-lived cookie holding the OAuth anti-forgery nonce.
pub const OAUTH_STATE_COOKIE: &str = "coffeelog_oauth_state";

const SESSION_DAYS: i64 = 30;
const OAUTH_STATE_MINUTES: i64 = 10;

/// Account ID from the session cookie, if present and valid.
pub fn account_id(jar: &PrivateCookieJar) -> Option<i64> {
    jar.get(SESSION_COOKIE)?.value().parse().ok()
}

/// Write the session cookie for a signed-in account.
pub fn store_session(jar: PrivateCookieJar, account_id: i64) -> PrivateCookieJar {
    let mut cookie = Cookie::new(SESSION_COOKIE, account_id.to_string());
    cookie.set_path("/");
    cookie.set_http_only(true);
    cookie.set_same_site(SameSite::Lax);
    cookie.set_max_age(time::Duration::days(SESSION_DAYS));
    jar.add(cookie)
}

/// Mint a fresh random anti-forgery state value.
pub fn new_state_nonce() -> Result<String, AppError> {
    let mut buf = [0u8; 16];
    SystemRandom::new()
        .fill(&mut buf)
        .map_err(|_| AppError::Internal(anyhow::anyhow!("system RNG failure")))?;
    Ok(URL_SAFE_NO_PAD.encode(buf))
}

/// Store the OAuth state nonce, scoped to the callback path.
pub fn store_oauth_state(jar: PrivateCookieJar, nonce: &str) -> PrivateCookieJar {
    let mut cookie = Cookie::new(OAUTH_STATE_COOKIE, nonce.to_string());
    cookie.set_path("/oauth2callback");
    cookie.set_http_only(true);
    cookie.set_same_site(SameSite::Lax);
    cookie.set_max_age(time::Duration::minutes(OAUTH_STATE_MINUTES));
    jar.add(cookie)
}

/// Read and clear the OAuth state nonce.
pub fn take_oauth_state(jar: PrivateCookieJar) -> (PrivateCookieJar, Option<String>) {
    let value = jar
        .get(OAUTH_STATE_COOKIE)
        .map(|cookie| cookie.value().to_string());

    let mut removal = Cookie::from(OAUTH_STATE_COOKIE);
    removal.set_path("/oauth2callback");
    (jar.remove(removal), value)
}

/// Expire all cookies this application sets.
pub fn clear(jar: PrivateCookieJar) -> PrivateCookieJar {
    let mut session = Cookie::from(SESSION_COOKIE);
    session.set_path("/");

    let mut state = Cookie::from(OAUTH_STATE_COOKIE);
    state.set_path("/oauth2callback");

    jar.remove(session).remove(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WebConfig;
    use axum_extra::extract::cookie::Key;

    fn test_key() -> Key {
        Key::from(&WebConfig::test_default().cookie_key)
    }

    #[test]
    fn test_session_round_trip() {
        let jar = PrivateCookieJar::new(test_key());
        let jar = store_session(jar, 42);
        assert_eq!(account_id(&jar), Some(42));
    }

    #[test]
    fn test_missing_session_is_anonymous() {
        let jar = PrivateCookieJar::new(test_key());
        assert_eq!(account_id(&jar), None);
    }

    #[test]
    fn test_take_oauth_state_clears_cookie() {
        let jar = PrivateCookieJar::new(test_key());
        let nonce = new_state_nonce().unwrap();
        let jar = store_oauth_state(jar, &nonce);

        let (jar, taken) = take_oauth_state(jar);
        assert_eq!(taken.as_deref(), Some(nonce.as_str()));
        assert!(jar.get(OAUTH_STATE_COOKIE).is_none());
    }

    #[test]
    fn test_nonces_are_unique() {
        let a = new_state_nonce().unwrap();
        let b = new_state_nonce().unwrap();
        assert_ne!(a, b);
    }
}
