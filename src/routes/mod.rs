// Route exports
pub mod assessment;
pub mod errors;
pub mod nearby;

use actix_web::web;
use std::sync::Arc;

use crate::config::Settings;
use crate::core::{Assessor, Locator};

/// Application state shared across all handlers
#[derive(Debug, Clone)]
pub struct AppState {
    pub assessor: Assessor,
    pub locator: Locator,
    pub place_types: Arc<Vec<String>>,
}

impl AppState {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            assessor: Assessor::new(),
            locator: settings.locator.build_locator(),
            place_types: Arc::new(settings.locator.place_types.clone()),
        }
    }
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg
        .app_data(web::JsonConfig::default().error_handler(errors::handle_json_payload_error))
        .app_data(web::FormConfig::default().error_handler(errors::handle_form_payload_error))
        .app_data(web::QueryConfig::default().error_handler(errors::handle_query_payload_error))
        .configure(assessment::configure_pages)
        .service(
            web::scope("/api/v1")
                .configure(assessment::configure)
                .configure(nearby::configure),
        );
}
