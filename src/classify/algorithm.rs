use crate::models::{Classification, Parameter, RangeState, Reading};

use super::config::NormalRanges;

/// Classify a reading against the normal-range table. Pure and total: any real
/// value or absence is a valid input, there are no error cases.
pub fn classify(ranges: &NormalRanges, reading: &Reading) -> Classification {
    Classification {
        ph: classify_param(ranges, reading, Parameter::Ph),
        moisture: classify_param(ranges, reading, Parameter::Moisture),
        nitrogen: classify_param(ranges, reading, Parameter::Nitrogen),
        phosphorus: classify_param(ranges, reading, Parameter::Phosphorus),
        potassium: classify_param(ranges, reading, Parameter::Potassium),
    }
}

fn classify_param(ranges: &NormalRanges, reading: &Reading, param: Parameter) -> RangeState {
    let Some(value) = reading.value(param) else {
        return RangeState::Unknown;
    };

    let range = ranges.range(param);
    if value < range.min {
        RangeState::Low
    } else if value > range.max {
        RangeState::High
    } else {
        // Bounds are inclusive on both ends
        RangeState::Normal
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::config::ParamRange;

    fn reading(ph: Option<f64>, moisture: Option<f64>) -> Reading {
        Reading {
            ph,
            moisture,
            ..Reading::default()
        }
    }

    #[test]
    fn classifies_low_normal_high() {
        let ranges = NormalRanges::default();

        let c = classify(&ranges, &reading(Some(5.5), Some(40.0)));
        assert_eq!(c.ph, RangeState::Low);
        assert_eq!(c.moisture, RangeState::Normal);
        assert_eq!(c.nitrogen, RangeState::Unknown);
        assert_eq!(c.phosphorus, RangeState::Unknown);
        assert_eq!(c.potassium, RangeState::Unknown);

        let c = classify(&ranges, &reading(Some(8.0), Some(75.0)));
        assert_eq!(c.ph, RangeState::High);
        assert_eq!(c.moisture, RangeState::High);
    }

    #[test]
    fn boundary_values_are_normal() {
        let ranges = NormalRanges::default();

        let c = classify(&ranges, &reading(Some(6.0), Some(60.0)));
        assert_eq!(c.ph, RangeState::Normal);
        assert_eq!(c.moisture, RangeState::Normal);

        let c = classify(&ranges, &reading(Some(7.5), Some(20.0)));
        assert_eq!(c.ph, RangeState::Normal);
        assert_eq!(c.moisture, RangeState::Normal);
    }

    #[test]
    fn absent_values_are_unknown() {
        let ranges = NormalRanges::default();
        let c = classify(&ranges, &Reading::default());
        for param in Parameter::ALL {
            assert_eq!(c.state(param), RangeState::Unknown, "{}", param.as_str());
        }
    }

    #[test]
    fn ranges_are_overridable() {
        let mut ranges = NormalRanges::default();
        ranges.ph = ParamRange::new(5.0, 6.0);

        let c = classify(&ranges, &reading(Some(5.5), None));
        assert_eq!(c.ph, RangeState::Normal);
    }

    #[test]
    fn ranges_deserialize_from_json() {
        let json = r#"{
            "ph": { "min": 6.5, "max": 7.0 },
            "moisture": { "min": 20, "max": 60 },
            "N": { "min": 0.1, "max": 0.5 },
            "P": { "min": 0.05, "max": 0.3 },
            "K": { "min": 0.1, "max": 0.6 }
        }"#;
        let ranges: NormalRanges = serde_json::from_str(json).unwrap();
        assert_eq!(ranges.ph, ParamRange::new(6.5, 7.0));
    }
}
