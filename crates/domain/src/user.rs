//! User — an account record with a name and an email address.

use serde::{Deserialize, Serialize};

use crate::id::UserId;
use crate::time::Timestamp;

/// A stored user record.
///
/// `id`, `created_at`, and `updated_at` are assigned by the storage layer;
/// the soft-delete marker is a store-owned column and never appears here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Creatable fields of a [`User`], deserialized from a POST body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUser {
    pub name: String,
    #[serde(default)]
    pub email: String,
}

/// Partial update for a [`User`].
///
/// Every field is optional; absent fields keep their prior value. There is
/// deliberately no `id` or timestamp field, so a client-supplied id in an
/// update payload is ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserPatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl User {
    /// Overlay a patch onto this record, field by field.
    ///
    /// Any deserializable value is accepted, empty strings included; the
    /// record's shape is the only constraint.
    pub fn apply(&mut self, patch: UserPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
    }
}
