use async_trait::async_trait;
use std::fmt;
use std::time::Duration;
use thiserror::Error;

use crate::models::Coordinates;

/// Map zoom used for coordinate-centered searches
pub const DEFAULT_ZOOM: u8 = 15;

/// Base URL of the external map search
pub const DEFAULT_MAP_SEARCH_BASE: &str = "https://www.google.com/maps/search";

/// Why the host could not provide a position
///
/// Codes follow the browser geolocation API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GeolocationError {
    #[error("permission denied")]
    PermissionDenied,

    #[error("position unavailable")]
    PositionUnavailable,

    #[error("timed out waiting for position")]
    Timeout,
}

impl GeolocationError {
    pub fn from_code(code: u8) -> Self {
        match code {
            1 => GeolocationError::PermissionDenied,
            3 => GeolocationError::Timeout,
            _ => GeolocationError::PositionUnavailable,
        }
    }
}

/// Something that can be asked for the user's current position once
#[async_trait]
pub trait PositionSource: Send + Sync {
    async fn current_position(&self) -> Result<Coordinates, GeolocationError>;
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("place type must not be empty")]
pub struct PlaceTypeError;

/// Keyword searched for on the map ("hospital", "pharmacy", ...)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceType(String);

impl PlaceType {
    pub fn new(keyword: &str) -> Result<Self, PlaceTypeError> {
        let keyword = keyword.trim();
        if keyword.is_empty() {
            return Err(PlaceTypeError);
        }
        Ok(Self(keyword.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlaceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The search to open, decided by whether a position was obtained
#[derive(Debug, Clone, PartialEq)]
pub enum MapSearch {
    Centered { place: PlaceType, at: Coordinates },
    PlaceOnly { place: PlaceType },
}

impl MapSearch {
    pub fn place(&self) -> &PlaceType {
        match self {
            MapSearch::Centered { place, .. } | MapSearch::PlaceOnly { place } => place,
        }
    }

    pub fn is_centered(&self) -> bool {
        matches!(self, MapSearch::Centered { .. })
    }

    /// Build the map URL
    ///
    /// Centered: `{base}/{place}/@{lat},{lng},{zoom}z`
    /// Place only: `{base}/{place}/`
    pub fn url(&self, base: &str, zoom: u8) -> String {
        let base = base.trim_end_matches('/');
        let place = urlencoding::encode(self.place().as_str());

        match self {
            MapSearch::Centered { at, .. } => format!(
                "{}/{}/@{},{},{}z",
                base,
                place,
                at.latitude(),
                at.longitude(),
                zoom
            ),
            MapSearch::PlaceOnly { .. } => format!("{}/{}/", base, place),
        }
    }
}

/// Decides which map search to open for a "find nearby" action
///
/// One position request per call, no retries. Any geolocation failure
/// falls back to the place-only search and is never reported to the user.
#[derive(Debug, Clone)]
pub struct Locator {
    map_search_base: String,
    zoom: u8,
    position_timeout: Option<Duration>,
}

impl Default for Locator {
    fn default() -> Self {
        Self::new(DEFAULT_MAP_SEARCH_BASE.to_string(), DEFAULT_ZOOM, None)
    }
}

impl Locator {
    /// `position_timeout` of `None` waits as long as the source takes
    pub fn new(map_search_base: String, zoom: u8, position_timeout: Option<Duration>) -> Self {
        Self {
            map_search_base,
            zoom,
            position_timeout,
        }
    }

    /// Ask `source` for the position (if there is a source) and pick the search
    pub async fn locate(&self, place: PlaceType, source: Option<&dyn PositionSource>) -> MapSearch {
        let Some(source) = source else {
            tracing::debug!("Geolocation unsupported, searching for {} without position", place);
            return MapSearch::PlaceOnly { place };
        };

        match self.request_position(source).await {
            Ok(at) => MapSearch::Centered { place, at },
            Err(e) => {
                tracing::debug!("Geolocation failed ({}), searching for {} without position", e, place);
                MapSearch::PlaceOnly { place }
            }
        }
    }

    /// Locate and return the URL to open
    pub async fn find_nearby(&self, place: PlaceType, source: Option<&dyn PositionSource>) -> String {
        let search = self.locate(place, source).await;
        self.url_for(&search)
    }

    pub fn url_for(&self, search: &MapSearch) -> String {
        search.url(&self.map_search_base, self.zoom)
    }

    async fn request_position(
        &self,
        source: &dyn PositionSource,
    ) -> Result<Coordinates, GeolocationError> {
        match self.position_timeout {
            Some(limit) => tokio::time::timeout(limit, source.current_position())
                .await
                .unwrap_or(Err(GeolocationError::Timeout)),
            None => source.current_position().await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(Result<Coordinates, GeolocationError>);

    #[async_trait]
    impl PositionSource for Fixed {
        async fn current_position(&self) -> Result<Coordinates, GeolocationError> {
            self.0
        }
    }

    struct Stalled;

    #[async_trait]
    impl PositionSource for Stalled {
        async fn current_position(&self) -> Result<Coordinates, GeolocationError> {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Err(GeolocationError::PositionUnavailable)
        }
    }

    fn hospital() -> PlaceType {
        PlaceType::new("hospital").unwrap()
    }

    #[test]
    fn test_granted_position_centers_search() {
        let source = Fixed(Ok(Coordinates::new(40.7128, -74.006).unwrap()));
        let url = tokio_test::block_on(Locator::default().find_nearby(hospital(), Some(&source)));

        assert_eq!(
            url,
            "https://www.google.com/maps/search/hospital/@40.7128,-74.006,15z"
        );
    }

    #[test]
    fn test_denied_position_falls_back() {
        let source = Fixed(Err(GeolocationError::PermissionDenied));
        let url = tokio_test::block_on(Locator::default().find_nearby(hospital(), Some(&source)));

        assert_eq!(url, "https://www.google.com/maps/search/hospital/");
    }

    #[test]
    fn test_missing_capability_falls_back() {
        let search = tokio_test::block_on(Locator::default().locate(hospital(), None));
        assert!(!search.is_centered());
        assert_eq!(search.place().as_str(), "hospital");
    }

    #[test]
    fn test_timeout_falls_back() {
        let locator = Locator::new(
            DEFAULT_MAP_SEARCH_BASE.to_string(),
            DEFAULT_ZOOM,
            Some(Duration::from_millis(10)),
        );
        let search = tokio_test::block_on(locator.locate(hospital(), Some(&Stalled)));
        assert!(!search.is_centered());
    }

    #[test]
    fn test_place_type_is_encoded() {
        let search = MapSearch::PlaceOnly {
            place: PlaceType::new(" urgent care ").unwrap(),
        };
        assert_eq!(
            search.url("https://maps.example/search/", 12),
            "https://maps.example/search/urgent%20care/"
        );
    }

    #[test]
    fn test_blank_place_type_is_rejected() {
        assert_eq!(PlaceType::new("  "), Err(PlaceTypeError));
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(GeolocationError::from_code(1), GeolocationError::PermissionDenied);
        assert_eq!(GeolocationError::from_code(2), GeolocationError::PositionUnavailable);
        assert_eq!(GeolocationError::from_code(3), GeolocationError::Timeout);
    }
}
