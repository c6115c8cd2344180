use serde::Serialize;

use crate::{define_index_newtype, problem::minutes::Minutes};

define_index_newtype!(ZoneIdx, ZoneDetail);

/// Reference data for one delivery zone.
///
/// Coordinates are only handed to the traffic collaborator, the assignment
/// itself only reads the baseline delivery duration.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ZoneDetail {
    name: String,
    delivery_duration: Minutes,
    latitude: f64,
    longitude: f64,
}

impl ZoneDetail {
    pub fn new(
        name: impl Into<String>,
        delivery_duration: Minutes,
        latitude: f64,
        longitude: f64,
    ) -> Self {
        Self {
            name: name.into(),
            delivery_duration,
            latitude,
            longitude,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn delivery_duration(&self) -> Minutes {
        self.delivery_duration
    }
}

impl From<&ZoneDetail> for geo_types::Point {
    fn from(zone: &ZoneDetail) -> Self {
        geo_types::Point::new(zone.longitude, zone.latitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_is_lon_lat() {
        let zone = ZoneDetail::new("Γ1", Minutes::new(160), 38.157150, 23.778900);
        let point: geo_types::Point = (&zone).into();

        assert_eq!(point.x(), 23.778900);
        assert_eq!(point.y(), 38.157150);
    }
}
