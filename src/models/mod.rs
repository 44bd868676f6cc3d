// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    AnswerLevel, Answers, AssessmentReport, BmiCategory, BmiResult, Coordinates, Gender,
    HealthProfile, HealthStatus, ScoreTally, QUESTION_COUNT,
};
pub use requests::{AssessmentForm, NearbyQuery};
pub use responses::{
    AssessmentResponse, ErrorResponse, HealthResponse, NearbyLinkResponse, ValidationErrorResponse,
};
