//! Prediction handlers

use axum::extract::State;
use serde_json::{Map, Value};

use crate::reports::STATES;
use crate::response::{ApiJson, ApiResponse};
use crate::scoring::{RiskAssessment, RiskInput};
use crate::{AppError, AppResult, AppState};

const REQUIRED_FIELDS: [&str; 3] = ["state", "records", "anomalies"];

fn invalid_format(field: &str, value: &Value, expected: &str) -> AppError {
    AppError::ValidationError(format!(
        "Invalid data format: {} must be {}, got {}",
        field, expected, value
    ))
}

fn count_field(fields: &Map<String, Value>, field: &str) -> AppResult<i64> {
    let value = &fields[field];
    let parsed = match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite() && *f >= 0.0).map(|f| f.trunc() as i64)),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    };
    parsed
        .filter(|n| *n >= 0)
        .ok_or_else(|| invalid_format(field, value, "a non-negative integer"))
}

fn rate_field(fields: &Map<String, Value>, field: &str) -> AppResult<f64> {
    let value = match fields.get(field) {
        None | Some(Value::Null) => return Ok(0.0),
        Some(value) => value,
    };
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed
        .filter(|r| r.is_finite() && *r >= 0.0)
        .ok_or_else(|| invalid_format(field, value, "a non-negative number"))
}

/// Validate and coerce a prediction request body.
pub fn parse_risk_input(body: &Value) -> AppResult<RiskInput> {
    let fields = match body.as_object() {
        Some(fields) if !fields.is_empty() => fields,
        _ => return Err(AppError::ValidationError("Request body is required".to_string())),
    };

    let missing: Vec<&str> = REQUIRED_FIELDS
        .iter()
        .copied()
        .filter(|f| !fields.contains_key(*f))
        .collect();
    if !missing.is_empty() {
        return Err(AppError::ValidationError(format!(
            "Missing required fields: {}",
            missing.join(", ")
        )));
    }

    let state = match &fields["state"] {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    };

    Ok(RiskInput {
        records: count_field(fields, "records")?,
        anomalies: count_field(fields, "anomalies")?,
        invalid_pin_rate: rate_field(fields, "invalid_pin_rate")?,
        duplicate_rate: rate_field(fields, "duplicate_rate")?,
        missing_dob_rate: rate_field(fields, "missing_dob_rate")?,
        state,
    })
}

/// Score a region's data-quality rates
pub async fn predict(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<Value>,
) -> AppResult<ApiResponse<RiskAssessment>> {
    let input = parse_risk_input(&body)?;
    let assessment = state.scorer.score(&input);

    tracing::debug!(
        state = %assessment.state,
        score = assessment.score,
        tier = ?assessment.prediction,
        "Risk prediction"
    );

    Ok(ApiResponse::ok(assessment))
}

/// Regions offered by the prediction form
pub async fn states() -> AppResult<ApiResponse<&'static [&'static str]>> {
    Ok(ApiResponse::ok(STATES.as_slice()))
}
