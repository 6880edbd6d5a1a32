//! Fixed weighted formula over the four rates.

use super::{ModelType, RiskFeatures, RiskModel};

/// Weights of the composite score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RuleWeights {
    pub anomaly_rate: f64,
    pub invalid_pin_rate: f64,
    pub duplicate_rate: f64,
    pub missing_dob_rate: f64,
}

pub const WEIGHTS: RuleWeights = RuleWeights {
    anomaly_rate: 0.35,
    invalid_pin_rate: 0.25,
    duplicate_rate: 0.25,
    missing_dob_rate: 0.15,
};

/// Typical rates sit below 0.2; scaling lifts the weighted sum into `[0, 1]`.
pub const SCALE: f64 = 5.0;

#[derive(Debug, Clone, Copy, Default)]
pub struct RuleBasedModel;

impl RiskModel for RuleBasedModel {
    fn model_type(&self) -> ModelType {
        ModelType::RuleBased
    }

    fn score(&self, features: &RiskFeatures) -> f64 {
        let raw = features.anomaly_rate * WEIGHTS.anomaly_rate
            + features.invalid_pin_rate * WEIGHTS.invalid_pin_rate
            + features.duplicate_rate * WEIGHTS.duplicate_rate
            + features.missing_dob_rate * WEIGHTS.missing_dob_rate;

        (raw * SCALE).min(1.0)
    }
}
