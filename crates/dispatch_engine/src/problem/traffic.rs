use fxhash::FxHashMap;

pub use dispatch_traffic::NEUTRAL_TRAFFIC_VOLUME;

use crate::problem::{minutes::Minutes, zone::ZoneDetail};

/// Traffic volume units per unit of slowdown: a volume of 500 makes a
/// delivery take 5% longer.
pub const TRAFFIC_VOLUME_SCALE: f64 = 10_000.0;

/// Predicted traffic volume per zone for one run.
///
/// Only finite, non-negative volumes are kept. Anything else counts as
/// unavailable and the zone falls back to [`NEUTRAL_TRAFFIC_VOLUME`].
#[derive(Debug, Clone, Default)]
pub struct TrafficMultipliers {
    volumes: FxHashMap<String, f64>,
}

impl TrafficMultipliers {
    /// Returns whether the volume was accepted.
    pub fn insert(&mut self, zone: impl Into<String>, volume: f64) -> bool {
        if !volume.is_finite() || volume < 0.0 {
            return false;
        }

        self.volumes.insert(zone.into(), volume);
        true
    }

    pub fn get(&self, zone: &str) -> Option<f64> {
        self.volumes.get(zone).copied()
    }

    pub fn len(&self) -> usize {
        self.volumes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.volumes.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for TrafficMultipliers {
    fn from_iter<T: IntoIterator<Item = (S, f64)>>(iter: T) -> Self {
        let mut multipliers = TrafficMultipliers::default();
        for (zone, volume) in iter {
            multipliers.insert(zone, volume);
        }
        multipliers
    }
}

/// The duration an order in a zone consumes, with the traffic inputs that
/// produced it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdjustedDuration {
    /// Volume the adjustment was computed from, after the neutral fallback.
    pub volume: f64,
    /// `1 + volume / 10000`
    pub multiplier: f64,
    pub duration: Minutes,
}

#[inline]
pub fn traffic_multiplier(volume: f64) -> f64 {
    1.0 + volume / TRAFFIC_VOLUME_SCALE
}

/// `floor(baseline * (1 + volume / 10000))`.
///
/// A missing volume is replaced by [`NEUTRAL_TRAFFIC_VOLUME`], which still
/// adds a ten-thousandth of the baseline before truncation.
pub fn adjusted_duration(zone: &ZoneDetail, volume: Option<f64>) -> AdjustedDuration {
    let volume = volume.unwrap_or(NEUTRAL_TRAFFIC_VOLUME);
    let multiplier = traffic_multiplier(volume);
    let minutes = f64::from(zone.delivery_duration().value()) * multiplier;

    AdjustedDuration {
        volume,
        multiplier,
        duration: Minutes::new(minutes.floor() as u32),
    }
}

#[inline]
pub fn effective_duration(zone: &ZoneDetail, volume: Option<f64>) -> Minutes {
    adjusted_duration(zone, volume).duration
}
