//! Risk scoring for regional data-quality rates.
//!
//! A [`RiskModel`] turns the derived [`RiskFeatures`] into a composite score
//! in `[0, 1]`; [`RiskScorer`] wraps the active model and derives the tier,
//! confidence, recommended action and ranked contributing factors. The
//! rule-based model is the default; a JSON linear artifact can replace it.

pub mod artifact;
pub mod rules;

use serde::{Deserialize, Serialize};
use std::path::Path;

pub use artifact::LinearArtifactModel;
pub use rules::RuleBasedModel;

/// Score at or above which a region is High risk.
pub const HIGH_THRESHOLD: f64 = 0.70;
/// Score at or above which a region is Medium risk.
pub const MEDIUM_THRESHOLD: f64 = 0.40;

const MIN_CONFIDENCE: f64 = 0.65;
const MAX_CONFIDENCE: f64 = 0.95;
const MAX_FACTORS: usize = 3;

/// Already-coerced scorer input.
#[derive(Debug, Clone, PartialEq)]
pub struct RiskInput {
    pub records: i64,
    pub anomalies: i64,
    pub invalid_pin_rate: f64,
    pub duplicate_rate: f64,
    pub missing_dob_rate: f64,
    pub state: Option<String>,
}

/// Rates the models score on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiskFeatures {
    pub anomaly_rate: f64,
    pub invalid_pin_rate: f64,
    pub duplicate_rate: f64,
    pub missing_dob_rate: f64,
}

impl RiskFeatures {
    pub fn from_input(input: &RiskInput) -> Self {
        // records = 0 counts as a single record
        let denominator = input.records.max(1) as f64;
        Self {
            anomaly_rate: input.anomalies as f64 / denominator,
            invalid_pin_rate: input.invalid_pin_rate,
            duplicate_rate: input.duplicate_rate,
            missing_dob_rate: input.missing_dob_rate,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskTier {
    #[serde(rename = "Low Risk Zone")]
    Low,
    #[serde(rename = "Medium Risk Zone")]
    Medium,
    #[serde(rename = "High Risk Zone")]
    High,
}

impl RiskTier {
    pub fn from_score(score: f64) -> Self {
        if score >= HIGH_THRESHOLD {
            RiskTier::High
        } else if score >= MEDIUM_THRESHOLD {
            RiskTier::Medium
        } else {
            RiskTier::Low
        }
    }

    fn confidence(self, score: f64) -> f64 {
        let raw = match self {
            RiskTier::High => 0.85 + (score - HIGH_THRESHOLD) * 0.30,
            RiskTier::Medium => 0.75 + (score - MEDIUM_THRESHOLD) * 0.20,
            RiskTier::Low => 0.70 + score * 0.30,
        };
        raw.clamp(MIN_CONFIDENCE, MAX_CONFIDENCE)
    }

    pub fn recommended_action(self) -> &'static str {
        match self {
            RiskTier::High => "Immediate verification required. Initiate PIN validation and duplicate check workflows.",
            RiskTier::Medium => "Schedule verification within 7 days. Focus on address and biometric quality checks.",
            RiskTier::Low => "Routine monitoring sufficient. No immediate action required.",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelType {
    RuleBased,
    MlModel,
}

/// A factor explaining an elevated score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contribution {
    pub feature: String,
    pub value: String,
    pub contribution: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub prediction: RiskTier,
    pub score: f64,
    pub confidence: f64,
    pub recommended_action: String,
    pub top_features: Vec<Contribution>,
    pub state: String,
    pub model_type: ModelType,
}

/// Scoring strategy.
pub trait RiskModel: Send + Sync {
    fn model_type(&self) -> ModelType;

    /// Composite score in `[0, 1]`.
    fn score(&self, features: &RiskFeatures) -> f64;
}

pub struct RiskScorer {
    model: Box<dyn RiskModel>,
}

impl Default for RiskScorer {
    fn default() -> Self {
        Self::rule_based()
    }
}

impl RiskScorer {
    pub fn new(model: Box<dyn RiskModel>) -> Self {
        Self { model }
    }

    pub fn rule_based() -> Self {
        Self::new(Box::new(RuleBasedModel))
    }

    /// Use the artifact at `path` when it loads, the rule-based model otherwise.
    pub fn from_model_path(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            tracing::info!("No model artifact configured; using rule-based predictor");
            return Self::rule_based();
        };

        match LinearArtifactModel::load(path) {
            Ok(model) => {
                tracing::info!(path = %path.display(), model = %model.name(), "Loaded trained model artifact");
                Self::new(Box::new(model))
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Model artifact unusable; using rule-based predictor");
                Self::rule_based()
            }
        }
    }

    pub fn model_type(&self) -> ModelType {
        self.model.model_type()
    }

    pub fn score(&self, input: &RiskInput) -> RiskAssessment {
        let features = RiskFeatures::from_input(input);
        let score = self.model.score(&features).min(1.0);
        let tier = RiskTier::from_score(score);

        RiskAssessment {
            prediction: tier,
            score: round_to(score, 2),
            confidence: round_to(tier.confidence(score), 2),
            recommended_action: tier.recommended_action().to_string(),
            top_features: contributions(&features),
            state: input.state.clone().unwrap_or_else(|| "Unknown".to_string()),
            model_type: self.model.model_type(),
        }
    }
}

fn contributions(features: &RiskFeatures) -> Vec<Contribution> {
    let candidates = [
        ("Invalid PIN Rate", features.invalid_pin_rate, 0.05),
        ("Duplicate Rate", features.duplicate_rate, 0.03),
        ("Overall Anomaly Rate", features.anomaly_rate, 0.02),
        ("Missing DOB Rate", features.missing_dob_rate, 0.02),
    ];

    let mut factors: Vec<Contribution> = candidates
        .iter()
        .filter(|(_, rate, threshold)| rate > threshold)
        .map(|&(feature, rate, _)| Contribution {
            feature: feature.to_string(),
            value: format!("{:.1}%", rate * 100.0),
            contribution: round_to(rate * 100.0, 1),
        })
        .collect();

    if factors.is_empty() {
        factors.push(Contribution {
            feature: "General Assessment".to_string(),
            value: "Normal".to_string(),
            contribution: 100.0,
        });
    }

    // stable: ties keep enumeration order
    factors.sort_by(|a, b| b.contribution.total_cmp(&a.contribution));
    factors.truncate(MAX_FACTORS);
    factors
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(records: i64, anomalies: i64, pin: f64, dup: f64, dob: f64) -> RiskInput {
        RiskInput {
            records,
            anomalies,
            invalid_pin_rate: pin,
            duplicate_rate: dup,
            missing_dob_rate: dob,
            state: Some("Bihar".to_string()),
        }
    }

    #[test]
    fn scores_typical_region_as_low_risk() {
        let result = RiskScorer::rule_based().score(&input(1000, 20, 0.10, 0.02, 0.01));

        assert_eq!(result.prediction, RiskTier::Low);
        assert_eq!(result.score, 0.16);
        assert_eq!(result.confidence, 0.75);
        assert_eq!(result.state, "Bihar");
        assert_eq!(result.model_type, ModelType::RuleBased);
        assert_eq!(
            result.top_features,
            vec![Contribution {
                feature: "Invalid PIN Rate".to_string(),
                value: "10.0%".to_string(),
                contribution: 10.0,
            }]
        );
    }

    #[test]
    fn all_zero_input_yields_general_assessment() {
        let mut zero = input(0, 0, 0.0, 0.0, 0.0);
        zero.state = None;
        let result = RiskScorer::rule_based().score(&zero);

        assert_eq!(result.prediction, RiskTier::Low);
        assert_eq!(result.score, 0.0);
        assert_eq!(result.confidence, 0.70);
        assert_eq!(result.state, "Unknown");
        assert_eq!(result.top_features.len(), 1);
        assert_eq!(result.top_features[0].feature, "General Assessment");
        assert_eq!(result.top_features[0].value, "Normal");
        assert_eq!(result.top_features[0].contribution, 100.0);
    }

    #[test]
    fn zero_records_floors_denominator_at_one() {
        let features = RiskFeatures::from_input(&input(0, 5, 0.0, 0.0, 0.0));
        assert_eq!(features.anomaly_rate, 5.0);

        let result = RiskScorer::rule_based().score(&input(0, 5, 0.0, 0.0, 0.0));
        assert_eq!(result.score, 1.0);
        assert_eq!(result.prediction, RiskTier::High);
        assert_eq!(result.confidence, 0.94);
        assert_eq!(result.top_features[0].feature, "Overall Anomaly Rate");
        assert_eq!(result.top_features[0].value, "500.0%");
    }

    #[test]
    fn tier_boundaries_are_half_open() {
        assert_eq!(RiskTier::from_score(0.70), RiskTier::High);
        assert_eq!(RiskTier::from_score(0.6999), RiskTier::Medium);
        assert_eq!(RiskTier::from_score(0.40), RiskTier::Medium);
        assert_eq!(RiskTier::from_score(0.3999), RiskTier::Low);
        assert_eq!(RiskTier::from_score(1.0), RiskTier::High);
        assert_eq!(RiskTier::from_score(0.0), RiskTier::Low);
    }

    #[test]
    fn medium_tier_confidence_and_action() {
        // raw = 0.02*0.35 + 0.20*0.25 + 0.10*0.25 = 0.082
        let result = RiskScorer::rule_based().score(&input(1000, 20, 0.20, 0.10, 0.0));
        assert_eq!(result.prediction, RiskTier::Medium);
        assert_eq!(result.score, 0.41);
        assert_eq!(result.confidence, 0.75);
        assert!(result.recommended_action.starts_with("Schedule verification"));
    }

    #[test]
    fn rates_above_one_only_cap_the_final_score() {
        let result = RiskScorer::rule_based().score(&input(100, 0, 3.0, 0.0, 0.0));
        assert_eq!(result.score, 1.0);
        assert_eq!(result.top_features[0].value, "300.0%");
        assert_eq!(result.top_features[0].contribution, 300.0);
    }

    #[test]
    fn contributions_sorted_descending_and_truncated() {
        let result = RiskScorer::rule_based().score(&input(100, 4, 0.06, 0.09, 0.07));
        let names: Vec<&str> = result.top_features.iter().map(|c| c.feature.as_str()).collect();
        assert_eq!(names, vec!["Duplicate Rate", "Missing DOB Rate", "Invalid PIN Rate"]);
        assert!(result
            .top_features
            .windows(2)
            .all(|w| w[0].contribution >= w[1].contribution));
    }

    #[test]
    fn equal_contributions_keep_enumeration_order() {
        let result = RiskScorer::rule_based().score(&input(100, 8, 0.08, 0.08, 0.08));
        let names: Vec<&str> = result.top_features.iter().map(|c| c.feature.as_str()).collect();
        assert_eq!(names, vec!["Invalid PIN Rate", "Duplicate Rate", "Overall Anomaly Rate"]);
    }

    #[test]
    fn thresholds_are_strict() {
        // each rate exactly at its threshold is not a contributing factor
        let result = RiskScorer::rule_based().score(&input(100, 2, 0.05, 0.03, 0.02));
        assert_eq!(result.top_features[0].feature, "General Assessment");
    }

    #[test]
    fn identical_inputs_produce_identical_output() {
        let scorer = RiskScorer::rule_based();
        let a = scorer.score(&input(5000, 321, 0.07, 0.04, 0.03));
        let b = scorer.score(&input(5000, 321, 0.07, 0.04, 0.03));
        assert_eq!(a, b);
        assert_eq!(a.score.to_bits(), b.score.to_bits());
    }

    #[test]
    fn score_and_confidence_stay_in_range() {
        let scorer = RiskScorer::rule_based();
        for records in [0, 1, 10, 1000] {
            for anomalies in [0, 1, 50, 5000] {
                for rate in [0.0, 0.01, 0.05, 0.2, 0.9, 2.5] {
                    let r = scorer.score(&input(records, anomalies, rate, rate, rate));
                    assert!((0.0..=1.0).contains(&r.score), "score {}", r.score);
                    assert!((0.65..=0.95).contains(&r.confidence), "confidence {}", r.confidence);
                    assert!(r.top_features.len() <= 3);
                }
            }
        }
    }

    #[test]
    fn serializes_with_wire_labels() {
        let result = RiskScorer::rule_based().score(&input(1000, 20, 0.10, 0.02, 0.01));
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["prediction"], "Low Risk Zone");
        assert_eq!(json["model_type"], "rule_based");
        assert_eq!(json["top_features"][0]["feature"], "Invalid PIN Rate");
    }

    #[test]
    fn missing_artifact_falls_back_to_rules() {
        let scorer = RiskScorer::from_model_path(Some(Path::new("/nonexistent/risk-model.json")));
        assert_eq!(scorer.model_type(), ModelType::RuleBased);
        assert_eq!(RiskScorer::from_model_path(None).model_type(), ModelType::RuleBased);
    }
}
