// SPDX-License-Identifier: MIT

//! Firestore client wrapper with typed operations.
//!
//! Provides high-level operations for:
//! - Accounts (identity records keyed by Google subject ID)
//! - Roasters (append-only catalog, looked up by ID or exact name)
//! - Activities (immutable log entries, listed per owner newest-first)

use crate::db::collections;
use crate::error::AppError;
use crate::models::{Account, Activity, Roaster};
use ring::rand::{SecureRandom, SystemRandom};

/// Firestore database client.
#[derive(Clone)]
pub struct FirestoreDb {
    client: Option<firestore::FirestoreDb>,
}

impl FirestoreDb {
    /// Create a new Firestore client.
    ///
    /// For local development with emulator, set FIRESTORE_EMULATOR_HOST.
    pub async fn new(project_id: &str) -> Result<Self, AppError> {
        // If the emulator environment variable is set, use unauthenticated connection
        // to avoid local credential warnings and leakage.
        if std::env::var("FIRESTORE_EMULATOR_HOST").is_ok() {
            return Self::create_emulator_client(project_id).await;
        }

        let client = firestore::FirestoreDb::new(project_id)
            .await
            .map_err(|e| AppError::Database(format!("Failed to connect to Firestore: {}", e)))?;

        tracing::info!(project = project_id, "Connected to Firestore");

        Ok(Self {
            client: Some(client),
        })
    }

    /// Create a Firestore client for the emulator with unauthenticated access.
    async fn create_emulator_client(project_id: &str) -> Result<Self, AppError> {
        tracing::info!("Using unauthenticated connection for Firestore Emulator");

        let token_source = gcloud_sdk::ExternalJwtFunctionSource::new(|| async {
            Ok(gcloud_sdk::Token {
                token_type: "Bearer".to_string(),
                token: gcloud_sdk::SecretValue::new(
                    "eyJhbGciOiJub25lIn0.eyJ1aWQiOiJ0ZXN0In0."
                        .to_string()
                        .into(),
                ),
                expiry: chrono::Utc::now() + chrono::Duration::hours(1),
            })
        });

        let options = firestore::FirestoreDbOptions::new(project_id.to_string());

        let client = firestore::FirestoreDb::with_options_token_source(
            options,
            gcloud_sdk::GCP_DEFAULT_SCOPES.clone(),
            gcloud_sdk::TokenSourceType::ExternalSource(Box::new(token_source)),
        )
        .await
        .map_err(|e| {
            AppError::Database(format!("Failed to connect to Firestore Emulator: {}", e))
        })?;

        tracing::info!(
            project = project_id,
            "Connected to Firestore (Emulator/Unauthenticated)"
        );

        Ok(Self {
            client: Some(client),
        })
    }

    /// Create a mock Firestore client for testing (offline mode).
    ///
    /// All database operations will return an error if called.
    pub fn new_mock() -> Self {
        Self { client: None }
    }

    /// Helper to get the client or return an error if offline.
    fn get_client(&self) -> Result<&firestore::FirestoreDb, AppError> {
        self.client
            .as_ref()
            .ok_or_else(|| AppError::Database("Database not connected (offline mode)".to_string()))
    }

    /// Allocate a document ID for a new record.
    ///
    /// IDs are random positive 63-bit integers, never zero.
    fn allocate_id() -> Result<i64, AppError> {
        let mut buf = [0u8; 8];
        SystemRandom::new()
            .fill(&mut buf)
            .map_err(|_| AppError::Internal(anyhow::anyhow!("system RNG failure")))?;
        let id = (u64::from_be_bytes(buf) & (i64::MAX as u64)) as i64;
        Ok(id.max(1))
    }

    // ─── Account Operations ──────────────────────────────────────

    /// Look up an account by its Google subject ID.
    pub async fn find_account_by_google_id(
        &self,
        google_id: &str,
    ) -> Result<Option<Account>, AppError> {
        let google_id = google_id.to_string();
        let mut results: Vec<Account> = self
            .get_client()?
            .fluent()
            .select()
            .from(collections::ACCOUNTS)
            .filter(move |q| q.field("google_id").eq(google_id.clone()))
            .limit(1)
            .obj()
            .query()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        Ok(results.pop())
    }

    /// Get an account by its internal ID.
    pub async fn get_account(&self, id: i64) -> Result<Option<Account>, AppError> {
        self.get_client()?
            .fluent()
            .select()
            .by_id_in(collections::ACCOUNTS)
            .obj()
            .one(&id.to_string())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Insert a new account, assigning its ID.
    pub async fn insert_account(&self, mut account: Account) -> Result<Account, AppError> {
        account.id = Self::allocate_id()?;
        self.write_account(&account).await?;
        Ok(account)
    }

    /// Overwrite an existing account record (re-authorization refresh).
    pub async fn update_account(&self, account: &Account) -> Result<(), AppError> {
        self.write_account(account).await
    }

    async fn write_account(&self, account: &Account) -> Result<(), AppError> {
        let _: () = self
            .get_client()?
            .fluent()
            .update()
            .in_col(collections::ACCOUNTS)
            .document_id(account.id.to_string())
            .object(account)
            .execute()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        Ok(())
    }

    // ─── Roaster Operations ──────────────────────────────────────

    /// Get a roaster by its internal ID.
    pub async fn get_roaster(&self, id: i64) -> Result<Option<Roaster>, AppError> {
        self.get_client()?
            .fluent()
            .select()
            .by_id_in(collections::ROASTERS)
            .obj()
            .one(&id.to_string())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Look up a roaster by exact, case-sensitive name.
    ///
    /// Duplicate names are possible (no uniqueness constraint); the first
    /// match wins.
    pub async fn find_roaster_by_name(&self, name: &str) -> Result<Option<Roaster>, AppError> {
        let name = name.to_string();
        let mut results: Vec<Roaster> = self
            .get_client()?
            .fluent()
            .select()
            .from(collections::ROASTERS)
            .filter(move |q| q.field("name").eq(name.clone()))
            .limit(1)
            .obj()
            .query()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        Ok(results.pop())
    }

    /// Insert a new roaster, assigning its ID.
    pub async fn insert_roaster(&self, mut roaster: Roaster) -> Result<Roaster, AppError> {
        roaster.id = Self::allocate_id()?;
        let _: () = self
            .get_client()?
            .fluent()
            .update()
            .in_col(collections::ROASTERS)
            .document_id(roaster.id.to_string())
            .object(&roaster)
            .execute()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        Ok(roaster)
    }

    /// List the full roaster catalog (no pagination).
    pub async fn list_roasters(&self) -> Result<Vec<Roaster>, AppError> {
        self.get_client()?
            .fluent()
            .select()
            .from(collections::ROASTERS)
            .obj()
            .query()
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    // ─── Activity Operations ─────────────────────────────────────

    /// Get an activity by its internal ID.
    pub async fn get_activity(&self, id: i64) -> Result<Option<Activity>, AppError> {
        self.get_client()?
            .fluent()
            .select()
            .by_id_in(collections::ACTIVITIES)
            .obj()
            .one(&id.to_string())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Insert a new activity, assigning its ID. The record is immutable
    /// once written.
    pub async fn insert_activity(&self, mut activity: Activity) -> Result<Activity, AppError> {
        activity.id = Self::allocate_id()?;
        let _: () = self
            .get_client()?
            .fluent()
            .update()
            .in_col(collections::ACTIVITIES)
            .document_id(activity.id.to_string())
            .object(&activity)
            .execute()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        Ok(activity)
    }

    /// List a user's activities ordered by event timestamp descending.
    pub async fn list_user_activities(&self, user_id: i64) -> Result<Vec<Activity>, AppError> {
        self.get_client()?
            .fluent()
            .select()
            .from(collections::ACTIVITIES)
            .filter(move |q| q.field("user_id").eq(user_id))
            .order_by([("date", firestore::FirestoreQueryDirection::Descending)])
            .obj()
            .query()
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allocate_id_positive() {
        for _ in 0..64 {
            let id = FirestoreDb::allocate_id().unwrap();
            assert!(id > 0);
        }
    }

    #[tokio::test]
    async fn test_offline_mock_errors() {
        let db = FirestoreDb::new_mock();
        let err = db.get_account(1).await.unwrap_err();
        assert!(matches!(err, AppError::Database(_)));
    }
}
