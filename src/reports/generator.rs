//! Randomized analytics payloads.
//!
//! Values change on every call; field names and types never do.

use chrono::{Local, NaiveDateTime};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

use super::catalog::{
    districts_of, PolicyRecommendation, Severity, ANOMALY_TYPES, POLICY_RECOMMENDATIONS, STATES,
};

#[derive(Debug, Clone, Serialize)]
pub struct StateAnomalyCount {
    pub state: String,
    pub anomaly_count: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardSummary {
    pub total_records: u32,
    pub total_anomalies: u32,
    pub anomaly_rate: f64,
    pub verified_fixed: u32,
    pub pending_verification: u32,
    pub most_affected_states: Vec<StateAnomalyCount>,
    pub last_updated: NaiveDateTime,
}

#[derive(Debug, Clone, Serialize)]
pub struct StateOverview {
    pub state: String,
    pub total_records: u32,
    pub total_anomalies: u32,
    pub anomaly_rate: f64,
    pub severity: Severity,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnomalyCount {
    #[serde(rename = "type")]
    pub anomaly_type: String,
    pub count: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct DistrictCount {
    pub district: String,
    pub records: u32,
    pub anomalies: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct StateDetail {
    pub state: String,
    pub total_records: u32,
    pub total_anomalies: u32,
    pub anomaly_rate: f64,
    pub top_anomaly_types: Vec<AnomalyCount>,
    pub district_distribution: Vec<DistrictCount>,
    pub invalid_pin_rate: f64,
    pub duplicate_rate: f64,
    pub missing_dob_rate: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct AgeDistribution {
    #[serde(rename = "0-5")]
    pub age_0_5: u32,
    #[serde(rename = "5-17")]
    pub age_5_17: u32,
    #[serde(rename = "18-30")]
    pub age_18_30: u32,
    #[serde(rename = "31-45")]
    pub age_31_45: u32,
    #[serde(rename = "46-60")]
    pub age_46_60: u32,
    #[serde(rename = "60+")]
    pub age_60_plus: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct GenderDistribution {
    #[serde(rename = "Male")]
    pub male: u32,
    #[serde(rename = "Female")]
    pub female: u32,
    #[serde(rename = "Other")]
    pub other: u32,
    #[serde(rename = "Not Specified")]
    pub not_specified: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct CorrelationWarning {
    pub warning: &'static str,
    pub correlation: f64,
    pub severity: Severity,
}

#[derive(Debug, Clone, Serialize)]
pub struct StateAnomalies {
    pub state: String,
    pub anomalies: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct SuspiciousPattern {
    pub pattern: &'static str,
    pub affected_records: u32,
    pub risk_level: Severity,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub age_distribution: AgeDistribution,
    pub gender_distribution: GenderDistribution,
    pub anomaly_frequency: Vec<AnomalyCount>,
    pub correlation_warnings: Vec<CorrelationWarning>,
    pub state_anomaly_distribution: Vec<StateAnomalies>,
    pub suspicious_patterns: Vec<SuspiciousPattern>,
    pub total_records_analyzed: u32,
    pub analysis_date: NaiveDateTime,
}

const CORRELATION_WARNINGS: [(&str, f64, Severity); 4] = [
    ("High correlation between Invalid PIN Code and District-State Mismatch", 0.87, Severity::High),
    ("Missing DOB often occurs with Biometric Quality Issues", 0.65, Severity::Medium),
    ("Duplicate records cluster in urban districts", 0.72, Severity::Medium),
    ("Impossible Age values linked with Name Character Issues", 0.45, Severity::Low),
];

const SUSPICIOUS_PATTERNS: [(&str, (u32, u32), Severity); 4] = [
    ("Bulk enrollments with sequential Aadhaar IDs detected in Bihar", (1000, 5000), Severity::Critical),
    ("Unusual spike in biometric rejections in Mumbai (Nov 2025)", (500, 2000), Severity::High),
    ("Same mobile number linked to 50+ Aadhaar records in Delhi", (100, 500), Severity::Critical),
    ("Address field contains PO Box patterns (potential fraud)", (200, 800), Severity::Medium),
];

/// Percentage with two decimals.
fn percent(part: u32, whole: u32) -> f64 {
    (f64::from(part) / f64::from(whole.max(1)) * 10_000.0).round() / 100.0
}

fn rate_between<R: Rng + ?Sized>(rng: &mut R, low: f64, high: f64) -> f64 {
    (rng.gen_range(low..=high) * 1000.0).round() / 1000.0
}

fn severity_for_anomalies(total_anomalies: u32) -> Severity {
    if total_anomalies > 40_000 {
        Severity::High
    } else if total_anomalies > 15_000 {
        Severity::Medium
    } else {
        Severity::Low
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ReportGenerator;

impl ReportGenerator {
    pub fn new() -> Self {
        Self
    }

    pub fn dashboard_summary<R: Rng + ?Sized>(&self, rng: &mut R) -> DashboardSummary {
        let total_records = rng.gen_range(4_500_000..=5_500_000);
        let total_anomalies = rng.gen_range(150_000..=300_000);
        let verified_fixed = rng.gen_range(50_000..=100_000);

        let mut most_affected: Vec<StateAnomalyCount> = STATES
            .choose_multiple(rng, 5)
            .map(|state| StateAnomalyCount {
                state: state.to_string(),
                anomaly_count: rng.gen_range(10_000..=50_000),
            })
            .collect();
        most_affected.sort_by(|a, b| b.anomaly_count.cmp(&a.anomaly_count));

        DashboardSummary {
            total_records,
            total_anomalies,
            anomaly_rate: percent(total_anomalies, total_records),
            verified_fixed,
            pending_verification: total_anomalies - verified_fixed,
            most_affected_states: most_affected,
            last_updated: Local::now().naive_local(),
        }
    }

    pub fn all_states<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<StateOverview> {
        STATES
            .iter()
            .map(|state| {
                let total_records = rng.gen_range(50_000..=600_000);
                let total_anomalies = rng.gen_range(2_000..=60_000);
                StateOverview {
                    state: state.to_string(),
                    total_records,
                    total_anomalies,
                    anomaly_rate: percent(total_anomalies, total_records),
                    severity: severity_for_anomalies(total_anomalies),
                }
            })
            .collect()
    }

    pub fn state_detail<R: Rng + ?Sized>(&self, rng: &mut R, state: &str) -> StateDetail {
        let total_records = rng.gen_range(100_000..=500_000);
        let total_anomalies = rng.gen_range(5_000..=50_000);

        let mut top_anomaly_types: Vec<AnomalyCount> = ANOMALY_TYPES
            .choose_multiple(rng, 3)
            .map(|anomaly| AnomalyCount {
                anomaly_type: anomaly.to_string(),
                count: rng.gen_range(1_000..=10_000),
            })
            .collect();
        top_anomaly_types.sort_by(|a, b| b.count.cmp(&a.count));

        let district_distribution = districts_of(state)
            .iter()
            .take(6)
            .map(|district| DistrictCount {
                district: district.to_string(),
                records: rng.gen_range(10_000..=80_000),
                anomalies: rng.gen_range(500..=5_000),
            })
            .collect();

        StateDetail {
            state: state.to_string(),
            total_records,
            total_anomalies,
            anomaly_rate: percent(total_anomalies, total_records),
            top_anomaly_types,
            district_distribution,
            invalid_pin_rate: rate_between(rng, 0.02, 0.15),
            duplicate_rate: rate_between(rng, 0.01, 0.08),
            missing_dob_rate: rate_between(rng, 0.01, 0.05),
        }
    }

    pub fn analysis_report<R: Rng + ?Sized>(&self, rng: &mut R) -> AnalysisReport {
        let age_distribution = AgeDistribution {
            age_0_5: rng.gen_range(200_000..=400_000),
            age_5_17: rng.gen_range(800_000..=1_200_000),
            age_18_30: rng.gen_range(1_000_000..=1_500_000),
            age_31_45: rng.gen_range(800_000..=1_200_000),
            age_46_60: rng.gen_range(500_000..=800_000),
            age_60_plus: rng.gen_range(300_000..=500_000),
        };

        let gender_distribution = GenderDistribution {
            male: rng.gen_range(2_500_000..=2_800_000),
            female: rng.gen_range(2_200_000..=2_600_000),
            other: rng.gen_range(5_000..=15_000),
            not_specified: rng.gen_range(10_000..=30_000),
        };

        let mut anomaly_frequency: Vec<AnomalyCount> = ANOMALY_TYPES
            .iter()
            .map(|anomaly| AnomalyCount {
                anomaly_type: anomaly.to_string(),
                count: rng.gen_range(5_000..=80_000),
            })
            .collect();
        anomaly_frequency.sort_by(|a, b| b.count.cmp(&a.count));

        let correlation_warnings = CORRELATION_WARNINGS
            .iter()
            .map(|&(warning, correlation, severity)| CorrelationWarning {
                warning,
                correlation,
                severity,
            })
            .collect();

        let mut state_anomaly_distribution: Vec<StateAnomalies> = STATES
            .choose_multiple(rng, 10)
            .map(|state| StateAnomalies {
                state: state.to_string(),
                anomalies: rng.gen_range(5_000..=50_000),
            })
            .collect();
        state_anomaly_distribution.sort_by(|a, b| b.anomalies.cmp(&a.anomalies));

        let suspicious_patterns = SUSPICIOUS_PATTERNS
            .iter()
            .map(|&(pattern, (low, high), risk_level)| SuspiciousPattern {
                pattern,
                affected_records: rng.gen_range(low..=high),
                risk_level,
            })
            .collect();

        AnalysisReport {
            age_distribution,
            gender_distribution,
            anomaly_frequency,
            correlation_warnings,
            state_anomaly_distribution,
            suspicious_patterns,
            total_records_analyzed: rng.gen_range(4_500_000..=5_500_000),
            analysis_date: Local::now().naive_local(),
        }
    }

    pub fn policy_recommendations(&self) -> Vec<PolicyRecommendation> {
        POLICY_RECOMMENDATIONS.to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn keys(value: &serde_json::Value) -> Vec<String> {
        value.as_object().unwrap().keys().cloned().collect()
    }

    #[test]
    fn dashboard_summary_is_consistent() {
        let mut rng = StdRng::seed_from_u64(7);
        let summary = ReportGenerator::new().dashboard_summary(&mut rng);

        assert_eq!(summary.most_affected_states.len(), 5);
        assert!(summary
            .most_affected_states
            .windows(2)
            .all(|w| w[0].anomaly_count >= w[1].anomaly_count));
        assert_eq!(
            summary.pending_verification,
            summary.total_anomalies - summary.verified_fixed
        );
        assert!(summary.anomaly_rate > 0.0 && summary.anomaly_rate < 10.0);
    }

    #[test]
    fn shapes_are_stable_across_calls() {
        let generator = ReportGenerator::new();
        let mut a = StdRng::seed_from_u64(1);
        let mut b = StdRng::seed_from_u64(2);

        let first = serde_json::to_value(generator.analysis_report(&mut a)).unwrap();
        let second = serde_json::to_value(generator.analysis_report(&mut b)).unwrap();
        assert_eq!(keys(&first), keys(&second));
        assert_eq!(keys(&first["age_distribution"]), keys(&second["age_distribution"]));
        assert_eq!(first["anomaly_frequency"].as_array().unwrap().len(), ANOMALY_TYPES.len());
        assert!(first["anomaly_frequency"][0]["type"].is_string());

        let first = serde_json::to_value(generator.state_detail(&mut a, "Bihar")).unwrap();
        let second = serde_json::to_value(generator.state_detail(&mut b, "Goa")).unwrap();
        assert_eq!(keys(&first), keys(&second));
    }

    #[test]
    fn state_detail_uses_catalog_districts() {
        let mut rng = StdRng::seed_from_u64(3);
        let generator = ReportGenerator::new();

        let known = generator.state_detail(&mut rng, "Maharashtra");
        assert_eq!(known.district_distribution.len(), 6);
        assert_eq!(known.district_distribution[0].district, "Mumbai");

        let unknown = generator.state_detail(&mut rng, "Atlantis");
        assert_eq!(unknown.district_distribution.len(), 3);
        assert!((0.02..=0.15).contains(&unknown.invalid_pin_rate));
    }

    #[test]
    fn all_states_severity_follows_anomaly_count() {
        let mut rng = StdRng::seed_from_u64(11);
        let states = ReportGenerator::new().all_states(&mut rng);
        assert_eq!(states.len(), STATES.len());
        for s in states {
            assert_eq!(s.severity, severity_for_anomalies(s.total_anomalies));
        }
        assert_eq!(severity_for_anomalies(40_000), Severity::Medium);
        assert_eq!(severity_for_anomalies(40_001), Severity::High);
        assert_eq!(severity_for_anomalies(15_000), Severity::Low);
    }
}
