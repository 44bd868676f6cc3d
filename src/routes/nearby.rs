use actix_web::{http::header, web, HttpResponse, Responder};

use crate::core::{PlaceType, PositionSource};
use crate::models::{ErrorResponse, NearbyLinkResponse, NearbyQuery};
use crate::routes::AppState;
use crate::services::QueryPosition;

/// Configure the "find nearby" routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/nearby/{place_type}", web::get().to(open_nearby))
        .route("/nearby/{place_type}/link", web::get().to(nearby_link));
}

fn invalid_place_type(e: impl std::fmt::Display) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: "Invalid place type".to_string(),
        message: e.to_string(),
        status_code: 400,
    })
}

/// Open nearby search
///
/// GET /api/v1/nearby/{placeType}?lat={lat}&lng={lng}
/// GET /api/v1/nearby/{placeType}?error={code}
///
/// Redirects to the map search, centered on the position when one is given.
async fn open_nearby(
    state: web::Data<AppState>,
    place_type: web::Path<String>,
    query: web::Query<NearbyQuery>,
) -> impl Responder {
    let place = match PlaceType::new(&place_type) {
        Ok(place) => place,
        Err(e) => return invalid_place_type(e),
    };

    let source = QueryPosition::from_query(&query);
    let url = state
        .locator
        .find_nearby(place, source.as_ref().map(|s| s as &dyn PositionSource))
        .await;

    tracing::info!("Opening nearby search: {}", url);

    HttpResponse::Found()
        .insert_header((header::LOCATION, url))
        .finish()
}

/// Same decision as `open_nearby`, returned as JSON
///
/// GET /api/v1/nearby/{placeType}/link?lat={lat}&lng={lng}
async fn nearby_link(
    state: web::Data<AppState>,
    place_type: web::Path<String>,
    query: web::Query<NearbyQuery>,
) -> impl Responder {
    let place = match PlaceType::new(&place_type) {
        Ok(place) => place,
        Err(e) => return invalid_place_type(e),
    };

    let source = QueryPosition::from_query(&query);
    let search = state
        .locator
        .locate(place, source.as_ref().map(|s| s as &dyn PositionSource))
        .await;

    HttpResponse::Ok().json(NearbyLinkResponse {
        url: state.locator.url_for(&search),
        place_type: search.place().to_string(),
        centered: search.is_centered(),
    })
}
