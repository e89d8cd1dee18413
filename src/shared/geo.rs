use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A point geometry in canonical axis order: X is longitude, Y is latitude.
///
/// All spatial data downstream assumes this ordering; constructing through
/// `from_lon_lat` keeps the two named inputs from ever being swapped.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GeoPoint {
    pub x: f64,
    pub y: f64,
}

impl GeoPoint {
    pub fn from_lon_lat(longitude: f64, latitude: f64) -> Self {
        Self {
            x: longitude,
            y: latitude,
        }
    }

    pub fn longitude(&self) -> f64 {
        self.x
    }

    pub fn latitude(&self) -> f64 {
        self.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn longitude_maps_to_x_and_latitude_to_y() {
        let point = GeoPoint::from_lon_lat(100.5, 13.7);
        assert_eq!(point.x, 100.5);
        assert_eq!(point.y, 13.7);
        assert_eq!(point.longitude(), 100.5);
        assert_eq!(point.latitude(), 13.7);
    }
}
