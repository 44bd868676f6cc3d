use chrono::Utc;
use uuid::Uuid;

use crate::core::{
    bmi::assess_bmi,
    recommendations::recommendations,
    scoring::{overall_status, tally},
    validation::{validate_form, ValidationFailure},
};
use crate::models::{AssessmentForm, AssessmentReport, HealthProfile};

/// Runs one quiz submission through the assessment pipeline
///
/// # Pipeline Stages
/// 1. Validation (raw form -> `HealthProfile`)
/// 2. BMI and category
/// 3. Score tally and overall status
/// 4. Targeted recommendations
///
/// Stateless: every call produces a fresh report and nothing is kept.
#[derive(Debug, Clone, Copy, Default)]
pub struct Assessor;

impl Assessor {
    pub fn new() -> Self {
        Self
    }

    /// Validate a raw submission and assess it
    pub fn submit(&self, form: &AssessmentForm) -> Result<AssessmentReport, ValidationFailure> {
        let profile = validate_form(form)?;
        Ok(self.assess(profile))
    }

    /// Assess an already validated profile
    pub fn assess(&self, profile: HealthProfile) -> AssessmentReport {
        let bmi = assess_bmi(profile.weight_kg, profile.height_cm);
        let scores = tally(&profile.answers);
        let status = overall_status(scores.total);
        let recommendations = recommendations(&profile.answers);

        let report = AssessmentReport {
            assessment_id: Uuid::new_v4(),
            assessed_at: Utc::now(),
            profile,
            bmi,
            scores,
            status,
            recommendations,
        };

        tracing::debug!(
            "Assessment {}: bmi={} ({}), total={}/30, status={:?}, {} recommendations",
            report.assessment_id,
            report.bmi.formatted(),
            report.bmi.category.label(),
            report.scores.total,
            report.status,
            report.recommendations.len()
        );

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::validation::FormField;
    use crate::models::{BmiCategory, Gender, HealthStatus, QUESTION_COUNT};

    fn form_with_answers(answer: u8) -> AssessmentForm {
        let mut form = AssessmentForm {
            name: Some("Sam".to_string()),
            age: Some(41),
            gender: Some(Gender::Other),
            height: Some(175.0),
            weight: Some(70.0),
            ..Default::default()
        };
        for index in 0..QUESTION_COUNT {
            form.set_answer(index, Some(answer));
        }
        form
    }

    #[test]
    fn test_full_marks() {
        let report = Assessor::new().submit(&form_with_answers(3)).unwrap();

        assert_eq!(report.bmi.value, 22.9);
        assert_eq!(report.bmi.category, BmiCategory::Normal);
        assert_eq!(report.scores.physical, 18);
        assert_eq!(report.scores.mental, 12);
        assert_eq!(report.scores.total, 30);
        assert_eq!(report.status, HealthStatus::Excellent);
        assert!(report.recommendations.is_empty());
    }

    #[test]
    fn test_moderate_profile() {
        let report = Assessor::new().submit(&form_with_answers(2)).unwrap();

        assert_eq!(report.scores.total, 20);
        assert_eq!(report.status, HealthStatus::Moderate);
        assert_eq!(report.recommendations.len(), 5);
    }

    #[test]
    fn test_missing_field_stops_assessment() {
        let mut form = form_with_answers(3);
        form.name = None;

        let failure = Assessor::new().submit(&form).unwrap_err();
        assert_eq!(failure.invalid_fields(), &[FormField::Name]);
    }

    #[test]
    fn test_reports_are_independent() {
        let assessor = Assessor::new();
        let first = assessor.submit(&form_with_answers(3)).unwrap();
        let second = assessor.submit(&form_with_answers(3)).unwrap();
        assert_ne!(first.assessment_id, second.assessment_id);
    }
}
