use serde::{Deserialize, Serialize};

use crate::models::domain::{AssessmentReport, ScoreTally};

/// Response for the JSON assessment endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentResponse {
    #[serde(rename = "assessmentId")]
    pub assessment_id: String,
    #[serde(rename = "assessedAt")]
    pub assessed_at: chrono::DateTime<chrono::Utc>,
    pub name: String,
    pub age: u16,
    pub gender: String,
    #[serde(rename = "heightCm")]
    pub height_cm: f64,
    #[serde(rename = "weightKg")]
    pub weight_kg: f64,
    pub bmi: BmiView,
    pub scores: ScoresView,
    pub status: StatusView,
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmiView {
    pub value: f64,
    pub category: String,
    pub color: String,
    pub advice: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoresView {
    pub physical: u8,
    #[serde(rename = "physicalMax")]
    pub physical_max: u8,
    pub mental: u8,
    #[serde(rename = "mentalMax")]
    pub mental_max: u8,
    pub total: u8,
    #[serde(rename = "totalMax")]
    pub total_max: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusView {
    pub label: String,
    pub color: String,
    pub advice: String,
}

impl From<&AssessmentReport> for AssessmentResponse {
    fn from(report: &AssessmentReport) -> Self {
        let profile = &report.profile;

        Self {
            assessment_id: report.assessment_id.to_string(),
            assessed_at: report.assessed_at,
            name: profile.name.clone(),
            age: profile.age,
            gender: profile.gender.as_str().to_string(),
            height_cm: profile.height_cm,
            weight_kg: profile.weight_kg,
            bmi: BmiView {
                value: report.bmi.value,
                category: report.bmi.category.label().to_string(),
                color: report.bmi.category.color().to_string(),
                advice: report.bmi.category.advice().to_string(),
            },
            scores: ScoresView {
                physical: report.scores.physical,
                physical_max: ScoreTally::PHYSICAL_MAX,
                mental: report.scores.mental,
                mental_max: ScoreTally::MENTAL_MAX,
                total: report.scores.total,
                total_max: ScoreTally::TOTAL_MAX,
            },
            status: StatusView {
                label: report.status.label().to_string(),
                color: report.status.color().to_string(),
                advice: report.status.advice().to_string(),
            },
            recommendations: report.recommendations.iter().map(|r| r.to_string()).collect(),
        }
    }
}

/// Returned with 422 when required fields are missing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
    #[serde(rename = "invalidFields")]
    pub invalid_fields: Vec<String>,
}

/// Response for the nearby link endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NearbyLinkResponse {
    pub url: String,
    #[serde(rename = "placeType")]
    pub place_type: String,
    pub centered: bool,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
