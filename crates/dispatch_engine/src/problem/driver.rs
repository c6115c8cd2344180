use fxhash::FxHashMap;

use crate::define_index_newtype;

define_index_newtype!(DriverIdx, DriverProfile);

#[derive(Debug, Clone, PartialEq)]
pub struct DriverProfile {
    id: String,
    deviations: FxHashMap<String, f64>,
}

impl DriverProfile {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            deviations: FxHashMap::default(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Recorded deviation for `zone`, zero when nothing was recorded.
    pub fn deviation_for(&self, zone: &str) -> f64 {
        self.deviations.get(zone).copied().unwrap_or(0.0)
    }

    pub(crate) fn set_deviation(&mut self, zone: String, deviation: f64) {
        self.deviations.insert(zone, deviation);
    }
}

/// One row of the driver/zone deviation listing.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DriverDeviation {
    pub driver_id: String,
    pub zones: Vec<(String, f64)>,
}

impl DriverDeviation {
    pub fn new(driver_id: impl Into<String>) -> Self {
        Self {
            driver_id: driver_id.into(),
            zones: Vec::new(),
        }
    }

    pub fn with_zone(mut self, zone: impl Into<String>, deviation: f64) -> Self {
        self.zones.push((zone.into(), deviation));
        self
    }
}
