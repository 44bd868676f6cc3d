use async_trait::async_trait;

use crate::core::locator::{GeolocationError, PositionSource};
use crate::models::{Coordinates, NearbyQuery};

/// Position reported by the browser alongside a nearby request
///
/// The page asks the browser for its position and forwards either the
/// coordinates or the geolocation error code in the query string.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QueryPosition {
    outcome: Result<Coordinates, GeolocationError>,
}

impl QueryPosition {
    /// `None` when the request carries neither a position nor an error,
    /// i.e. the browser has no geolocation support
    pub fn from_query(query: &NearbyQuery) -> Option<Self> {
        if let Some(code) = query.error {
            return Some(Self {
                outcome: Err(GeolocationError::from_code(code)),
            });
        }

        match (query.lat, query.lng) {
            (Some(lat), Some(lng)) => Some(Self {
                outcome: Coordinates::new(lat, lng).ok_or(GeolocationError::PositionUnavailable),
            }),
            (None, None) => None,
            _ => Some(Self {
                outcome: Err(GeolocationError::PositionUnavailable),
            }),
        }
    }
}

#[async_trait]
impl PositionSource for QueryPosition {
    async fn current_position(&self) -> Result<Coordinates, GeolocationError> {
        self.outcome
    }
}
