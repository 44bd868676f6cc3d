//! Wellcheck - health assessment quiz service
//!
//! This library provides the scoring core of the quiz: validation of a raw
//! submission, BMI and wellness scoring, targeted recommendations, the
//! results panel markup, and the "find nearby" map search.

pub mod config;
pub mod core;
pub mod models;
pub mod render;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{Assessor, FormField, Locator, MapSearch, PlaceType, PositionSource, ValidationFailure};
pub use crate::models::{AssessmentForm, AssessmentReport, AssessmentResponse, HealthProfile};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let failure = Assessor::new().submit(&AssessmentForm::default()).unwrap_err();
        assert_eq!(failure.invalid_fields().len(), 15);
    }
}
