use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::classification::Classification;
use super::reading::Reading;

/// Reserved prefix for locally-generated entry ids. Server ids are hex object
/// ids and can never start with this, so the two namespaces cannot collide.
pub(crate) const LOCAL_ID_PREFIX: &str = "local-";

/// Where an entry came from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum Provenance {
    /// Fetched from the remote store; permanent for the session.
    Confirmed,
    /// Synthesized locally after a manual submission; lives until a confirmed
    /// entry with an equal-or-later timestamp supersedes it.
    Speculative,
}

/// One row of the dashboard history: a reading plus its derived classification.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub sensor_readings: Reading,
    pub states: Classification,
    pub provenance: Provenance,
}

impl Entry {
    pub fn is_speculative(&self) -> bool {
        self.provenance == Provenance::Speculative
    }
}

/// Fresh identifier in the reserved local namespace.
pub(crate) fn new_local_id() -> String {
    format!("{LOCAL_ID_PREFIX}{}", Uuid::new_v4())
}
