//! Trained linear model loaded from a JSON artifact.
//!
//! ```json
//! {
//!   "name": "risk-logit-2024-11",
//!   "intercept": -4.1,
//!   "weights": {
//!     "anomaly_rate": 22.0,
//!     "invalid_pin_rate": 14.5,
//!     "duplicate_rate": 18.0,
//!     "missing_dob_rate": 9.0
//!   }
//! }
//! ```
//!
//! The score is the logistic of the linear combination.

use serde::Deserialize;
use std::path::Path;

use super::{ModelType, RiskFeatures, RiskModel};

#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    #[error("cannot read model artifact: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed model artifact: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct FeatureWeights {
    anomaly_rate: f64,
    invalid_pin_rate: f64,
    duplicate_rate: f64,
    missing_dob_rate: f64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct Artifact {
    name: String,
    intercept: f64,
    weights: FeatureWeights,
}

#[derive(Debug, Clone)]
pub struct LinearArtifactModel {
    artifact: Artifact,
}

impl LinearArtifactModel {
    pub fn load(path: &Path) -> Result<Self, ArtifactError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Self, ArtifactError> {
        let artifact: Artifact = serde_json::from_str(raw)?;
        Ok(Self { artifact })
    }

    pub fn name(&self) -> &str {
        &self.artifact.name
    }
}

impl RiskModel for LinearArtifactModel {
    fn model_type(&self) -> ModelType {
        ModelType::MlModel
    }

    fn score(&self, features: &RiskFeatures) -> f64 {
        let w = &self.artifact.weights;
        let z = self.artifact.intercept
            + w.anomaly_rate * features.anomaly_rate
            + w.invalid_pin_rate * features.invalid_pin_rate
            + w.duplicate_rate * features.duplicate_rate
            + w.missing_dob_rate * features.missing_dob_rate;

        (1.0 / (1.0 + (-z).exp())).clamp(0.0, 1.0)
    }
}
