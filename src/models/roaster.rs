//! Roaster catalog model.

use serde::{Deserialize, Serialize};

/// Roaster record stored in Firestore.
///
/// The catalog is append-only: roasters are created lazily the first time
/// an activity names them and are never updated or deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Roaster {
    /// Internal roaster ID (also used as document ID)
    pub id: i64,
    /// Human-readable roaster name
    pub name: String,
    /// Picture URL, currently unset
    pub picture: Option<String>,
    /// Account that first named this roaster, currently unset
    pub created_by: Option<i64>,
}

/// Request body for creating a roaster.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRoasterRequest {
    pub name: String,
}
