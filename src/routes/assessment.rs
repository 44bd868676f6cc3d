use actix_web::{web, HttpResponse, Responder};

use crate::core::ValidationFailure;
use crate::models::{
    AssessmentForm, AssessmentResponse, HealthResponse, ValidationErrorResponse,
};
use crate::render::{render_page, render_regions, PageView, ResultRegions};
use crate::routes::AppState;

/// Quiz page and form submission
pub fn configure_pages(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/", web::get().to(index))
        .route("/assess", web::post().to(submit_form));
}

/// JSON API
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/assessments", web::post().to(create_assessment));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

fn html(status: actix_web::http::StatusCode, body: String) -> HttpResponse {
    HttpResponse::build(status)
        .content_type("text/html; charset=utf-8")
        .body(body)
}

fn page(
    state: &AppState,
    form: &AssessmentForm,
    failure: Option<&ValidationFailure>,
    result: Option<&ResultRegions>,
) -> String {
    render_page(&PageView {
        form,
        failure,
        result,
        place_types: &state.place_types,
    })
}

/// GET /
async fn index(state: web::Data<AppState>) -> impl Responder {
    let body = page(&state, &AssessmentForm::default(), None, None);
    html(actix_web::http::StatusCode::OK, body)
}

/// POST /assess
///
/// Form-encoded quiz submission. Re-renders the page with either the
/// results panel or the field marks and alert.
async fn submit_form(
    state: web::Data<AppState>,
    form: web::Form<AssessmentForm>,
) -> impl Responder {
    let form = form.into_inner();

    match state.assessor.submit(&form) {
        Ok(report) => {
            tracing::info!(
                "Assessment {} rendered: status={:?}, bmi={}",
                report.assessment_id,
                report.status,
                report.bmi.formatted()
            );
            let regions = render_regions(&report);
            let body = page(&state, &form, None, Some(&regions));
            html(actix_web::http::StatusCode::OK, body)
        }
        Err(failure) => {
            tracing::info!(
                "Form submission incomplete: {} field(s) marked",
                failure.invalid_fields().len()
            );
            let body = page(&state, &form, Some(&failure), None);
            html(actix_web::http::StatusCode::UNPROCESSABLE_ENTITY, body)
        }
    }
}

/// Create assessment endpoint
///
/// POST /api/v1/assessments
///
/// Request body:
/// ```json
/// {
///   "name": "string",
///   "age": 30,
///   "gender": "male|female|other",
///   "height": 175,
///   "weight": 70,
///   "q1": 3, "q2": 2, ..., "q10": 1
/// }
/// ```
async fn create_assessment(
    state: web::Data<AppState>,
    req: web::Json<AssessmentForm>,
) -> impl Responder {
    match state.assessor.submit(&req) {
        Ok(report) => {
            tracing::info!(
                "Assessment {} computed: total={}, status={:?}",
                report.assessment_id,
                report.scores.total,
                report.status
            );
            HttpResponse::Ok().json(AssessmentResponse::from(&report))
        }
        Err(failure) => {
            let invalid_fields: Vec<String> = failure
                .invalid_fields()
                .iter()
                .map(|field| field.to_string())
                .collect();

            tracing::info!("Validation failed for assessment request: fields={:?}", invalid_fields);

            HttpResponse::UnprocessableEntity().json(ValidationErrorResponse {
                error: "validation_failed".to_string(),
                message: failure.to_string(),
                status_code: 422,
                invalid_fields,
            })
        }
    }
}
