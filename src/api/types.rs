//! Wire types for the remote store API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::classify::{classify, NormalRanges};
use crate::models::{Entry, Provenance, Reading};

/// One element of the `GET /soil` response array.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSoilEntry {
    #[serde(rename = "_id")]
    pub id: String,
    pub sensor_readings: Reading,
    pub created_at: DateTime<Utc>,
}

impl RawSoilEntry {
    /// Lift a wire row into a confirmed history entry, deriving its
    /// classification on the way in.
    pub fn into_entry(self, ranges: &NormalRanges) -> Entry {
        Entry {
            states: classify(ranges, &self.sensor_readings),
            id: self.id,
            created_at: self.created_at,
            sensor_readings: self.sensor_readings,
            provenance: Provenance::Confirmed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RangeState;

    #[test]
    fn decodes_wire_row_and_classifies() {
        let json = r#"{
            "_id": "64f1c2ab9e8d3f0012ab34cd",
            "sensorReadings": { "ph": 5.5, "moisture": 40, "N": null, "P": null, "K": null },
            "createdAt": "2026-08-01T10:00:00Z"
        }"#;
        let raw: RawSoilEntry = serde_json::from_str(json).unwrap();
        let entry = raw.into_entry(&NormalRanges::default());

        assert_eq!(entry.id, "64f1c2ab9e8d3f0012ab34cd");
        assert_eq!(entry.provenance, Provenance::Confirmed);
        assert_eq!(entry.states.ph, RangeState::Low);
        assert_eq!(entry.states.moisture, RangeState::Normal);
        assert_eq!(entry.states.nitrogen, RangeState::Unknown);
    }

    #[test]
    fn tolerates_missing_reading_fields() {
        let json = r#"{
            "_id": "a",
            "sensorReadings": {},
            "createdAt": "2026-08-01T10:00:00Z"
        }"#;
        let raw: RawSoilEntry = serde_json::from_str(json).unwrap();
        assert!(!raw.sensor_readings.has_any_value());
    }
}
