// SPDX-License-Identifier: MIT

use coffeelog::clients::UserDirectoryClient;
use coffeelog::coffeedir::{self, CoffeeDirState};
use coffeelog::config::{CoffeeDirectoryConfig, UserDirectoryConfig, WebConfig};
use coffeelog::db::FirestoreDb;
use coffeelog::services::{AccountDirectory, CoffeeDirectory, PhotoStore};
use coffeelog::userdir::{self, UserDirState};
use coffeelog::web::{self, session, WebState};
use std::sync::Arc;

/// Unroutable address so an accidental backend call fails fast.
#[allow(dead_code)]
pub const DEAD_BACKEND: &str = "http://127.0.0.1:1";

/// Create a mock database connection (offline).
#[allow(dead_code)]
pub fn test_db_offline() -> FirestoreDb {
    FirestoreDb::new_mock()
}

/// User directory app over an offline database.
#[allow(dead_code)]
pub fn create_userdir_app() -> axum::Router {
    let state = Arc::new(UserDirState {
        config: UserDirectoryConfig::test_default(),
        accounts: AccountDirectory::new(test_db_offline()),
    });
    userdir::create_router(state)
}

/// Coffee directory app over an offline database and dead user directory.
#[allow(dead_code)]
pub fn create_coffeedir_app() -> axum::Router {
    let state = Arc::new(CoffeeDirState {
        catalog: CoffeeDirectory::new(
            test_db_offline(),
            UserDirectoryClient::new(DEAD_BACKEND),
            PhotoStore::new_mock(),
        ),
        config: CoffeeDirectoryConfig::test_default(),
    });
    coffeedir::create_router(state)
}

/// Web app wired to dead directory backends.
/// Returns the router and the config used to build it.
#[allow(dead_code)]
pub fn create_web_app() -> (axum::Router, WebConfig) {
    let mut config = WebConfig::test_default();
    config.user_directory_addr = DEAD_BACKEND.to_string();
    config.coffee_directory_addr = DEAD_BACKEND.to_string();

    let state = WebState::new(config.clone());
    (web::create_router(state), config)
}

/// Mint an encrypted session cookie pair ("name=value") for requests.
#[allow(dead_code)]
pub fn session_cookie(config: &WebConfig, account_id: i64) -> String {
    use axum::response::IntoResponse;
    use axum_extra::extract::cookie::{Key, PrivateCookieJar};

    let key = Key::from(&config.cookie_key);
    let jar = session::store_session(PrivateCookieJar::new(key), account_id);

    let response = jar.into_response();
    response
        .headers()
        .get(axum::http::header::SET_COOKIE)
        .expect("session cookie should be set")
        .to_str()
        .unwrap()
        .split(';')
        .next()
        .unwrap()
        .to_string()
}
