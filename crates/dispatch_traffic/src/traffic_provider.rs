use std::fmt::Display;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, JsonSchema, Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum TrafficProvider {
    /// Current weather per zone, fed to the traffic model
    #[default]
    WeatherModel,
    /// Neutral volume everywhere, no network access
    Neutral,
}

impl Display for TrafficProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                TrafficProvider::WeatherModel => "weather_model",
                TrafficProvider::Neutral => "neutral",
            }
        )
    }
}
