use fxhash::FxHashMap;
use thiserror::Error;

use crate::problem::{
    attica::attica_zones,
    zone::{ZoneDetail, ZoneIdx},
};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Zone {0} is defined more than once")]
    DuplicateZone(String),

    #[error("Zone {0} has a zero delivery duration")]
    ZeroDeliveryDuration(String),
}

/// Ordered, read-only zone reference data.
///
/// Iteration always follows the order the zones were given in; the name
/// index is only used for lookups.
#[derive(Debug, Clone)]
pub struct ZoneCatalog {
    zones: Vec<ZoneDetail>,
    index: FxHashMap<String, ZoneIdx>,
}

impl ZoneCatalog {
    pub fn from_zones(zones: Vec<ZoneDetail>) -> Result<Self, CatalogError> {
        let mut index = FxHashMap::default();

        for (position, zone) in zones.iter().enumerate() {
            if zone.delivery_duration().is_zero() {
                return Err(CatalogError::ZeroDeliveryDuration(zone.name().to_owned()));
            }

            if index
                .insert(zone.name().to_owned(), ZoneIdx::new(position))
                .is_some()
            {
                return Err(CatalogError::DuplicateZone(zone.name().to_owned()));
            }
        }

        Ok(Self { zones, index })
    }

    /// The built-in Attica catalog, used when a batch brings no zones.
    pub fn attica() -> Self {
        let zones = attica_zones();
        let index = zones
            .iter()
            .enumerate()
            .map(|(position, zone)| (zone.name().to_owned(), ZoneIdx::new(position)))
            .collect();

        Self { zones, index }
    }

    pub fn lookup(&self, name: &str) -> Option<&ZoneDetail> {
        self.index.get(name).map(|&idx| &self.zones[idx])
    }

    pub fn zone_idx(&self, name: &str) -> Option<ZoneIdx> {
        self.index.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    #[inline]
    pub fn zone(&self, idx: ZoneIdx) -> &ZoneDetail {
        &self.zones[idx]
    }

    #[inline]
    pub fn zones(&self) -> &[ZoneDetail] {
        &self.zones
    }

    pub fn iter_idx(&self) -> impl Iterator<Item = (ZoneIdx, &ZoneDetail)> {
        ZoneIdx::range(self.zones.len()).zip(self.zones.iter())
    }

    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problem::minutes::Minutes;

    #[test]
    fn test_attica_keeps_dispatch_order() {
        let catalog = ZoneCatalog::attica();

        assert_eq!(catalog.len(), 14);
        assert_eq!(catalog.zones()[0].name(), "Α ΑΤΤΙΚ");
        assert_eq!(catalog.zones()[13].name(), "ΦΘΙΩΤ");
        assert_eq!(
            catalog.lookup("ΙΒ ΠΕΡ").map(|zone| zone.delivery_duration()),
            Some(Minutes::new(320))
        );
        assert_eq!(catalog.zone_idx("Γ1"), Some(ZoneIdx::new(4)));
    }

    #[test]
    fn test_lookup_unknown_zone() {
        let catalog = ZoneCatalog::attica();

        assert!(catalog.lookup("Κρήτη").is_none());
        assert!(!catalog.contains("Κρήτη"));
    }

    #[test]
    fn test_from_zones_preserves_input_order() {
        let catalog = ZoneCatalog::from_zones(vec![
            ZoneDetail::new("Z", Minutes::new(10), 0.0, 0.0),
            ZoneDetail::new("A", Minutes::new(20), 0.0, 0.0),
        ])
        .unwrap();

        let names = catalog
            .iter_idx()
            .map(|(idx, zone)| (idx.get(), zone.name()))
            .collect::<Vec<_>>();
        assert_eq!(names, vec![(0, "Z"), (1, "A")]);
    }

    #[test]
    fn test_duplicate_zone() {
        let result = ZoneCatalog::from_zones(vec![
            ZoneDetail::new("A", Minutes::new(10), 0.0, 0.0),
            ZoneDetail::new("A", Minutes::new(20), 0.0, 0.0),
        ]);

        assert_eq!(
            result.unwrap_err(),
            CatalogError::DuplicateZone(String::from("A"))
        );
    }

    #[test]
    fn test_zero_delivery_duration() {
        let result =
            ZoneCatalog::from_zones(vec![ZoneDetail::new("A", Minutes::ZERO, 0.0, 0.0)]);

        assert_eq!(
            result.unwrap_err(),
            CatalogError::ZeroDeliveryDuration(String::from("A"))
        );
    }
}
