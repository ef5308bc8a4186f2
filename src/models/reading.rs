use serde::{Deserialize, Serialize};

/// The fixed set of soil parameters a sensor reports.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Parameter {
    Ph,
    Moisture,
    Nitrogen,
    Phosphorus,
    Potassium,
}

impl Parameter {
    pub const ALL: [Parameter; 5] = [
        Parameter::Ph,
        Parameter::Moisture,
        Parameter::Nitrogen,
        Parameter::Phosphorus,
        Parameter::Potassium,
    ];

    /// Wire/display key, matching the remote store's JSON field names.
    pub fn as_str(&self) -> &'static str {
        match self {
            Parameter::Ph => "ph",
            Parameter::Moisture => "moisture",
            Parameter::Nitrogen => "N",
            Parameter::Phosphorus => "P",
            Parameter::Potassium => "K",
        }
    }
}

/// One sensor reading. `None` means the parameter was not measured.
/// Immutable once created; classification is always derived from it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Reading {
    pub ph: Option<f64>,
    pub moisture: Option<f64>,
    #[serde(rename = "N")]
    pub nitrogen: Option<f64>,
    #[serde(rename = "P")]
    pub phosphorus: Option<f64>,
    #[serde(rename = "K")]
    pub potassium: Option<f64>,
}

impl Reading {
    pub fn value(&self, param: Parameter) -> Option<f64> {
        match param {
            Parameter::Ph => self.ph,
            Parameter::Moisture => self.moisture,
            Parameter::Nitrogen => self.nitrogen,
            Parameter::Phosphorus => self.phosphorus,
            Parameter::Potassium => self.potassium,
        }
    }

    /// True if at least one parameter carries a measured value.
    pub fn has_any_value(&self) -> bool {
        Parameter::ALL.iter().any(|p| self.value(*p).is_some())
    }
}
