// SPDX-License-Identifier: MIT

//! Activity model for storage and API.

use crate::models::UserView;
use serde::{Deserialize, Serialize};

/// Unit a drink's caffeine content is measured in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaffeineUnit {
    Unspecified,
    Oz,
    Shots,
}

impl CaffeineUnit {
    /// Parse the unit as submitted by the coffee form.
    ///
    /// Unknown values fold to `Unspecified` rather than erroring.
    pub fn from_form(value: &str) -> Self {
        match value {
            "oz" => CaffeineUnit::Oz,
            "shots" => CaffeineUnit::Shots,
            _ => CaffeineUnit::Unspecified,
        }
    }

    /// Label for display; empty when unspecified.
    pub fn label(&self) -> &'static str {
        match self {
            CaffeineUnit::Oz => "oz",
            CaffeineUnit::Shots => "shots",
            CaffeineUnit::Unspecified => "",
        }
    }
}

/// Drink quantity with its unit.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DrinkAmount {
    pub n: i32,
    pub unit: CaffeineUnit,
}

/// Stored activity record in Firestore.
///
/// Immutable once created; the roaster name/ID pair is a snapshot taken at
/// write time and is never re-resolved.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    /// Internal activity ID (also used as document ID)
    pub id: i64,
    /// Owning account ID
    pub user_id: i64,
    /// Event timestamp (RFC3339)
    pub date: String,
    /// When the record was written (RFC3339, server-assigned)
    pub log_date: String,
    /// Drink label (e.g. "Cortado")
    pub drink: String,
    /// Brew method (e.g. "Aeropress")
    pub method: String,
    /// Whether brewed at home
    pub homebrew: bool,
    /// Origin country
    pub origin: String,
    /// Roaster snapshot
    pub roaster_id: i64,
    pub roaster_name: String,
    /// Caffeine amount and unit
    pub amount: i32,
    pub amount_unit: CaffeineUnit,
    /// Free-text notes
    pub notes: String,
    /// Public URL of the uploaded photo, if any
    pub picture_url: Option<String>,
}

/// Roaster snapshot embedded in activity responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoasterRef {
    pub id: i64,
    pub name: String,
}

/// Activity enriched with its owner, as returned by the coffee directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityView {
    pub id: i64,
    pub user: UserView,
    pub date: String,
    pub log_date: String,
    pub drink: String,
    pub method: String,
    pub homebrew: bool,
    pub origin: String,
    pub roaster: RoasterRef,
    pub amount: DrinkAmount,
    pub notes: String,
    pub picture_url: Option<String>,
}

impl ActivityView {
    pub fn new(activity: Activity, user: UserView) -> Self {
        Self {
            id: activity.id,
            user,
            date: activity.date,
            log_date: activity.log_date,
            drink: activity.drink,
            method: activity.method,
            homebrew: activity.homebrew,
            origin: activity.origin,
            roaster: RoasterRef {
                id: activity.roaster_id,
                name: activity.roaster_name,
            },
            amount: DrinkAmount {
                n: activity.amount,
                unit: activity.amount_unit,
            },
            notes: activity.notes,
            picture_url: activity.picture_url,
        }
    }
}

/// Photo attachment crossing the wire to the coffee directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhotoUpload {
    pub filename: String,
    pub content_type: String,
    #[serde(with = "base64_bytes")]
    pub data: Vec<u8>,
}

/// Request body for posting an activity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostActivityRequest {
    pub user_id: i64,
    /// Event timestamp (RFC3339)
    pub date: String,
    pub drink: String,
    pub method: String,
    pub homebrew: bool,
    pub origin: String,
    pub roaster_name: String,
    pub amount: DrinkAmount,
    pub notes: String,
    pub picture: Option<PhotoUpload>,
}

/// Response body for a posted activity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostActivityResponse {
    pub id: i64,
}

/// Serde adapter for raw bytes as base64 strings in JSON.
mod base64_bytes {
    use base64::{engine::general_purpose::STANDARD, Engine as _};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&STANDARD.encode(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        STANDARD.decode(raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_caffeine_unit_from_form() {
        assert_eq!(CaffeineUnit::from_form("oz"), CaffeineUnit::Oz);
        assert_eq!(CaffeineUnit::from_form("shots"), CaffeineUnit::Shots);
        assert_eq!(CaffeineUnit::from_form(""), CaffeineUnit::Unspecified);
        assert_eq!(CaffeineUnit::from_form("liters"), CaffeineUnit::Unspecified);
    }

    #[test]
    fn test_photo_upload_base64_round_trip() {
        let upload = PhotoUpload {
            filename: "latte.jpg".to_string(),
            content_type: "image/jpeg".to_string(),
            data: vec![0xff, 0xd8, 0xff, 0xe0],
        };

        let json = serde_json::to_value(&upload).unwrap();
        assert_eq!(json["data"], "/9j/4A==");

        let back: PhotoUpload = serde_json::from_value(json).unwrap();
        assert_eq!(back.data, upload.data);
    }
}
