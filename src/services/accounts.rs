// SPDX-License-Identifier: MIT

//! Account directory logic: map Google identities to local accounts.

use crate::db::FirestoreDb;
use crate::error::AppError;
use crate::models::{Account, GoogleIdentity};

/// Account directory backed by Firestore.
#[derive(Clone)]
pub struct AccountDirectory {
    db: FirestoreDb,
}

impl AccountDirectory {
    pub fn new(db: FirestoreDb) -> Self {
        Self { db }
    }

    /// Resolve a Google identity to a local account, creating one on first
    /// sign-in.
    ///
    /// Lookups are keyed by the Google subject ID, so repeated
    /// authorization for the same identity always lands on the same
    /// account. Re-authorization overwrites the provider-sourced profile
    /// fields with whatever Google currently reports.
    pub async fn authorize_google(&self, identity: &GoogleIdentity) -> Result<Account, AppError> {
        match self.db.find_account_by_google_id(&identity.google_id).await? {
            Some(mut account) => {
                account.display_name = identity.display_name.clone();
                account.picture = identity.picture_url.clone();
                account.email = identity.email.clone();
                self.db.update_account(&account).await?;
                tracing::debug!(id = account.id, "user exists");
                Ok(account)
            }
            None => {
                let account = self
                    .db
                    .insert_account(Account {
                        id: 0,
                        display_name: identity.display_name.clone(),
                        picture: identity.picture_url.clone(),
                        email: identity.email.clone(),
                        google_id: identity.google_id.clone(),
                        created_at: chrono::Utc::now().to_rfc3339(),
                    })
                    .await?;
                tracing::info!(id = account.id, "created new user account");
                Ok(account)
            }
        }
    }

    /// Fetch an account by internal ID.
    pub async fn get_account(&self, id: i64) -> Result<Option<Account>, AppError> {
        self.db.get_account(id).await
    }
}
