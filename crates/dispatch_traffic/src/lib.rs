pub mod traffic_client;
pub mod traffic_model;
pub mod traffic_provider;
pub mod weather;

/// Traffic volume reported for a zone when no prediction could be made.
pub const NEUTRAL_TRAFFIC_VOLUME: f64 = 1.0;
