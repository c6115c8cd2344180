use fxhash::FxHashMap;
use thiserror::Error;
use tracing::{debug, instrument, warn};

use crate::problem::{
    driver::{DriverDeviation, DriverIdx, DriverProfile},
    time_tracker::DriverTimeTracker,
};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RosterError {
    #[error("Driver {0} is listed more than once")]
    DuplicateDriver(String),
}

/// Drivers of one run, in the priority order they were listed in.
#[derive(Debug, Clone, Default)]
pub struct DriverRoster {
    drivers: Vec<DriverProfile>,
    index: FxHashMap<String, DriverIdx>,
}

impl DriverRoster {
    /// Left-outer join of the driver listing with the deviation listing.
    ///
    /// Every listed driver is kept, whether or not it has deviations. Only
    /// the first deviation row of a driver applies: zones it does not carry
    /// read as zero even when a later row names them. Rows for drivers that
    /// are not listed are dropped.
    #[instrument(skip_all, level = "debug")]
    pub fn join<I>(driver_ids: I, deviations: Vec<DriverDeviation>) -> Result<Self, RosterError>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let mut drivers = Vec::new();
        let mut index = FxHashMap::default();

        for id in driver_ids {
            let id: String = id.into();
            if index.contains_key(&id) {
                return Err(RosterError::DuplicateDriver(id));
            }

            index.insert(id.clone(), DriverIdx::new(drivers.len()));
            drivers.push(DriverProfile::new(id));
        }

        let mut joined = vec![false; drivers.len()];
        let mut dropped = 0;
        for deviation in deviations {
            let Some(&driver_idx) = index.get(&deviation.driver_id) else {
                dropped += 1;
                continue;
            };

            if joined[driver_idx.get()] {
                debug!(
                    "DriverRoster: ignored extra deviation row for {}",
                    deviation.driver_id
                );
                continue;
            }
            joined[driver_idx.get()] = true;

            let driver = &mut drivers[driver_idx.get()];
            for (zone, value) in deviation.zones {
                driver.set_deviation(zone, value);
            }
        }

        if dropped > 0 {
            warn!(
                "DriverRoster: ignored {} deviation rows for unknown drivers",
                dropped
            );
        }

        Ok(Self { drivers, index })
    }

    pub fn from_drivers<I>(driver_ids: I) -> Result<Self, RosterError>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self::join(driver_ids, Vec::new())
    }

    /// Drivers in listing order; this order is the assignment priority.
    #[inline]
    pub fn ordered_drivers(&self) -> &[DriverProfile] {
        &self.drivers
    }

    pub fn iter_idx(&self) -> impl Iterator<Item = (DriverIdx, &DriverProfile)> {
        DriverIdx::range(self.drivers.len()).zip(self.drivers.iter())
    }

    #[inline]
    pub fn driver(&self, idx: DriverIdx) -> &DriverProfile {
        &self.drivers[idx]
    }

    pub fn position(&self, driver_id: &str) -> Option<DriverIdx> {
        self.index.get(driver_id).copied()
    }

    pub fn deviation_for(&self, driver_id: &str, zone: &str) -> f64 {
        self.position(driver_id)
            .map(|idx| self.drivers[idx].deviation_for(zone))
            .unwrap_or(0.0)
    }

    /// A fresh tracker with zero committed minutes for every driver.
    pub fn time_tracker(&self) -> DriverTimeTracker {
        DriverTimeTracker::new(self.drivers.len())
    }

    pub fn len(&self) -> usize {
        self.drivers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drivers.is_empty()
    }
}
