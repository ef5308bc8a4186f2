use serde::{Deserialize, Serialize};

use super::reading::Parameter;

/// Qualitative state of one parameter relative to its normal range.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum RangeState {
    Low,
    Normal,
    High,
    /// The reading carried no value for this parameter.
    Unknown,
}

impl RangeState {
    pub fn as_str(&self) -> &'static str {
        match self {
            RangeState::Low => "Low",
            RangeState::Normal => "Normal",
            RangeState::High => "High",
            RangeState::Unknown => "Unknown",
        }
    }
}

/// Per-parameter classification of a reading. Derived deterministically from a
/// `Reading`; stored next to its source and never updated independently.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Classification {
    pub ph: RangeState,
    pub moisture: RangeState,
    #[serde(rename = "N")]
    pub nitrogen: RangeState,
    #[serde(rename = "P")]
    pub phosphorus: RangeState,
    #[serde(rename = "K")]
    pub potassium: RangeState,
}

impl Classification {
    pub fn state(&self, param: Parameter) -> RangeState {
        match param {
            Parameter::Ph => self.ph,
            Parameter::Moisture => self.moisture,
            Parameter::Nitrogen => self.nitrogen,
            Parameter::Phosphorus => self.phosphorus,
            Parameter::Potassium => self.potassium,
        }
    }
}
