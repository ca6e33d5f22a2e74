//! Demo — a minimal named record, useful as a resource template.

use serde::{Deserialize, Serialize};

use crate::id::DemoId;
use crate::time::Timestamp;

/// A stored demo record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Demo {
    pub id: DemoId,
    pub name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Creatable fields of a [`Demo`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewDemo {
    pub name: String,
}

/// Partial update for a [`Demo`]. Absent fields keep their prior value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DemoPatch {
    #[serde(default)]
    pub name: Option<String>,
}

impl Demo {
    /// Overlay a patch onto this record.
    pub fn apply(&mut self, patch: DemoPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
    }
}
