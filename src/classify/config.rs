use serde::{Deserialize, Serialize};

use crate::models::Parameter;

/// Inclusive normal range for one parameter.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ParamRange {
    pub min: f64,
    pub max: f64,
}

impl ParamRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }
}

/// Normal-range table for the fixed parameter set. Configuration data, not
/// logic: deserializable so deployments can override it without a rebuild.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct NormalRanges {
    pub ph: ParamRange,
    pub moisture: ParamRange,
    #[serde(rename = "N")]
    pub nitrogen: ParamRange,
    #[serde(rename = "P")]
    pub phosphorus: ParamRange,
    #[serde(rename = "K")]
    pub potassium: ParamRange,
}

impl Default for NormalRanges {
    fn default() -> Self {
        Self {
            ph: ParamRange::new(6.0, 7.5),
            moisture: ParamRange::new(20.0, 60.0),
            nitrogen: ParamRange::new(0.1, 0.5),
            phosphorus: ParamRange::new(0.05, 0.3),
            potassium: ParamRange::new(0.1, 0.6),
        }
    }
}

impl NormalRanges {
    pub fn range(&self, param: Parameter) -> ParamRange {
        match param {
            Parameter::Ph => self.ph,
            Parameter::Moisture => self.moisture,
            Parameter::Nitrogen => self.nitrogen,
            Parameter::Phosphorus => self.phosphorus,
            Parameter::Potassium => self.potassium,
        }
    }
}
