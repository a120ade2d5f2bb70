// SPDX-License-Identifier: MIT

//! Photo storage on Google Cloud Storage.
//!
//! Uploads go through the JSON API with a token from the ambient GCP
//! credentials; objects are publicly readable and keyed by upload
//! year/month plus a random filename.

use crate::error::AppError;
use crate::models::PhotoUpload;
use chrono::{DateTime, Datelike, Utc};
use std::sync::Arc;
use uuid::Uuid;

const UPLOAD_BASE: &str = "https://storage.googleapis.com/upload/storage/v1";
const PUBLIC_BASE: &str = "https://storage.googleapis.com";

/// Cloud Storage photo store.
#[derive(Clone)]
pub struct PhotoStore {
    inner: Option<PhotoStoreInner>,
}

#[derive(Clone)]
struct PhotoStoreInner {
    http: reqwest::Client,
    bucket: String,
    token_source: Arc<gcloud_sdk::GoogleAuthTokenGenerator>,
}

impl PhotoStore {
    /// Create a photo store writing to the given bucket.
    pub async fn new(bucket: &str) -> Result<Self, AppError> {
        let token_source = gcloud_sdk::GoogleAuthTokenGenerator::new(
            gcloud_sdk::TokenSourceType::Default,
            gcloud_sdk::GCP_DEFAULT_SCOPES.clone(),
        )
        .await
        .map_err(|e| {
            AppError::Internal(anyhow::anyhow!("failed to initialize storage credentials: {}", e))
        })?;

        Ok(Self {
            inner: Some(PhotoStoreInner {
                http: reqwest::Client::new(),
                bucket: bucket.to_string(),
                token_source: Arc::new(token_source),
            }),
        })
    }

    /// Create a mock photo store for testing (offline mode).
    ///
    /// Uploads will return an error if called.
    pub fn new_mock() -> Self {
        Self { inner: None }
    }

    /// Upload a photo and return its public URL.
    pub async fn upload(&self, photo: &PhotoUpload) -> Result<String, AppError> {
        let inner = self.inner.as_ref().ok_or_else(|| {
            AppError::Internal(anyhow::anyhow!("photo store not configured (offline mode)"))
        })?;

        let object = object_name(Utc::now(), &photo.filename);
        let token = inner
            .token_source
            .create_token()
            .await
            .map_err(|e| AppError::Upstream(format!("storage token failure: {}", e)))?;

        let url = format!(
            "{}/b/{}/o?uploadType=media&name={}&predefinedAcl=publicRead",
            UPLOAD_BASE,
            inner.bucket,
            urlencoding::encode(&object)
        );

        let response = inner
            .http
            .post(&url)
            .header(reqwest::header::AUTHORIZATION, token.header_value())
            .header(reqwest::header::CONTENT_TYPE, &photo.content_type)
            .body(photo.data.clone())
            .send()
            .await
            .map_err(|e| AppError::Upstream(format!("storage upload failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Upstream(format!(
                "storage upload failed: HTTP {}: {}",
                status, body
            )));
        }

        tracing::debug!(bucket = %inner.bucket, object = %object, "uploaded file");
        Ok(format!("{}/{}/{}", PUBLIC_BASE, inner.bucket, object))
    }
}

/// Object name for an upload: `YYYY/MM/<uuid><original extension>`.
fn object_name(now: DateTime<Utc>, filename: &str) -> String {
    let ext = std::path::Path::new(filename)
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy()))
        .unwrap_or_default();
    format!("{}/{:02}/{}{}", now.year(), now.month(), Uuid::new_v4(), ext)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_name_keeps_extension() {
        let now = "2024-02-07T10:00:00Z".parse::<DateTime<Utc>>().unwrap();
        let name = object_name(now, "latte.JPG");
        assert!(name.starts_with("2024/02/"));
        assert!(name.ends_with(".JPG"));
    }

    #[test]
    fn test_object_name_without_extension() {
        let now = "2024-11-30T10:00:00Z".parse::<DateTime<Utc>>().unwrap();
        let name = object_name(now, "photo");
        assert!(name.starts_with("2024/11/"));
        assert!(!name.contains('.'));
    }

    #[tokio::test]
    async fn test_offline_mock_errors() {
        let photos = PhotoStore::new_mock();
        let err = photos
            .upload(&PhotoUpload {
                filename: "x.png".to_string(),
                content_type: "image/png".to_string(),
                data: vec![1, 2, 3],
            })
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Internal(_)));
    }
}
