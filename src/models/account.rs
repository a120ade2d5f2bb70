//! Account model for storage and API.

use serde::{Deserialize, Serialize};

/// Account record stored in Firestore.
///
/// An account is created the first time a Google identity authorizes, and
/// is looked up by `google_id` on every subsequent sign-in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    /// Internal account ID (also used as document ID)
    pub id: i64,
    /// Display name from the identity provider
    pub display_name: String,
    /// Profile picture URL (may be None if not shared)
    pub picture: Option<String>,
    /// Email address (may be None if not shared)
    pub email: Option<String>,
    /// Google subject ID, unique per account
    pub google_id: String,
    /// When the account was first created (RFC3339)
    pub created_at: String,
}

impl Account {
    /// Public view of this account, safe to hand to other services.
    pub fn to_view(&self) -> UserView {
        UserView {
            id: self.id,
            display_name: self.display_name.clone(),
            picture: self.picture.clone(),
        }
    }
}

/// Public account representation returned by the user directory.
///
/// Email and the Google subject ID stay inside the directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserView {
    pub id: i64,
    pub display_name: String,
    pub picture: Option<String>,
}

/// Identity assertion produced by a completed Google sign-in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoogleIdentity {
    /// Google subject ID
    pub google_id: String,
    pub email: Option<String>,
    pub display_name: String,
    pub picture_url: Option<String>,
}
