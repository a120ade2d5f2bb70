// SPDX-License-Identifier: MIT

//! Roaster catalog and activity log logic.

use crate::clients::UserDirectoryClient;
use crate::db::FirestoreDb;
use crate::error::AppError;
use crate::models::{Activity, ActivityView, PostActivityRequest, Roaster};
use crate::services::PhotoStore;

/// Roaster/activity directory backed by Firestore.
///
/// Activities reference the account directory for owner enrichment and the
/// photo store for uploaded pictures.
#[derive(Clone)]
pub struct CoffeeDirectory {
    db: FirestoreDb,
    users: UserDirectoryClient,
    photos: PhotoStore,
}

impl CoffeeDirectory {
    pub fn new(db: FirestoreDb, users: UserDirectoryClient, photos: PhotoStore) -> Self {
        Self { db, users, photos }
    }

    /// Fetch a roaster by internal ID.
    pub async fn get_roaster_by_id(&self, id: i64) -> Result<Option<Roaster>, AppError> {
        self.db.get_roaster(id).await
    }

    /// Fetch a roaster by exact, case-sensitive name.
    pub async fn get_roaster_by_name(&self, name: &str) -> Result<Option<Roaster>, AppError> {
        self.db.find_roaster_by_name(name).await
    }

    /// Insert a roaster unconditionally.
    ///
    /// Callers wanting find-or-create must check existence first; two
    /// concurrent creates for the same name can both succeed and leave
    /// duplicate catalog entries.
    pub async fn create_roaster(&self, name: &str) -> Result<Roaster, AppError> {
        let roaster = self
            .db
            .insert_roaster(Roaster {
                id: 0,
                name: name.to_string(),
                picture: None,
                created_by: None,
            })
            .await?;
        tracing::debug!(id = roaster.id, name = %roaster.name, "new roaster created");
        Ok(roaster)
    }

    /// List the full roaster catalog.
    pub async fn list_roasters(&self) -> Result<Vec<Roaster>, AppError> {
        self.db.list_roasters().await
    }

    /// Record a new activity.
    ///
    /// Resolves the named roaster (creating it on first mention), uploads
    /// the photo when one is attached, stamps the log timestamp and
    /// inserts the record. Any failure aborts the whole operation; a
    /// roaster created just before a failed insert is not rolled back.
    pub async fn post_activity(&self, request: PostActivityRequest) -> Result<i64, AppError> {
        let roaster = match self.db.find_roaster_by_name(&request.roaster_name).await? {
            Some(roaster) => {
                tracing::debug!(id = roaster.id, "using existing roaster");
                roaster
            }
            None => {
                tracing::debug!(name = %request.roaster_name, "roaster not found, creating");
                self.create_roaster(&request.roaster_name).await?
            }
        };

        let picture_url = match &request.picture {
            Some(photo) => Some(self.photos.upload(photo).await?),
            None => None,
        };

        let activity = self
            .db
            .insert_activity(Activity {
                id: 0,
                user_id: request.user_id,
                date: request.date,
                log_date: chrono::Utc::now().to_rfc3339(),
                drink: request.drink,
                method: request.method,
                homebrew: request.homebrew,
                origin: request.origin,
                roaster_id: roaster.id,
                roaster_name: roaster.name,
                amount: request.amount.n,
                amount_unit: request.amount.unit,
                notes: request.notes,
                picture_url,
            })
            .await?;

        tracing::info!(id = activity.id, "activity saved");
        Ok(activity.id)
    }

    /// Fetch an activity enriched with its owner.
    ///
    /// A missing owner for an existing activity is a data inconsistency,
    /// surfaced as an internal error rather than a not-found.
    pub async fn get_activity(&self, id: i64) -> Result<Option<ActivityView>, AppError> {
        let Some(activity) = self.db.get_activity(id).await? else {
            return Ok(None);
        };

        let owner = self
            .users
            .get_account(activity.user_id)
            .await?
            .ok_or_else(|| {
                AppError::Internal(anyhow::anyhow!(
                    "activity {} references missing account {}",
                    id,
                    activity.user_id
                ))
            })?;

        Ok(Some(ActivityView::new(activity, owner)))
    }

    /// List a user's activities, newest first.
    ///
    /// Returns `None` when the owner does not exist.
    pub async fn user_activities(&self, user_id: i64) -> Result<Option<Vec<ActivityView>>, AppError> {
        let Some(owner) = self.users.get_account(user_id).await? else {
            return Ok(None);
        };

        let mut activities = self.db.list_user_activities(user_id).await?;
        sort_newest_first(&mut activities);

        Ok(Some(
            activities
                .into_iter()
                .map(|activity| ActivityView::new(activity, owner.clone()))
                .collect(),
        ))
    }
}

/// Order activities by event timestamp descending.
///
/// RFC3339 timestamps compare correctly as strings.
fn sort_newest_first(activities: &mut [Activity]) {
    activities.sort_by(|a, b| b.date.cmp(&a.date));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CaffeineUnit;

    fn activity_dated(date: &str) -> Activity {
        Activity {
            id: 0,
            user_id: 7,
            date: date.to_string(),
            log_date: date.to_string(),
            drink: "Coffee".to_string(),
            method: "Chemex".to_string(),
            homebrew: true,
            origin: "Kenya".to_string(),
            roaster_id: 1,
            roaster_name: "Chemex Roasters".to_string(),
            amount: 12,
            amount_unit: CaffeineUnit::Oz,
            notes: String::new(),
            picture_url: None,
        }
    }

    #[test]
    fn test_sort_newest_first() {
        let mut activities = vec![
            activity_dated("2024-01-01T09:00:00+00:00"),
            activity_dated("2024-03-01T09:00:00+00:00"),
            activity_dated("2024-02-01T09:00:00+00:00"),
        ];

        sort_newest_first(&mut activities);

        let dates: Vec<&str> = activities.iter().map(|a| a.date.as_str()).collect();
        assert_eq!(
            dates,
            vec![
                "2024-03-01T09:00:00+00:00",
                "2024-02-01T09:00:00+00:00",
                "2024-01-01T09:00:00+00:00",
            ]
        );
    }
}
