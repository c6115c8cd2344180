use jiff::{Timestamp, Zoned};
use thiserror::Error;
use tracing::{info, instrument, warn};

use crate::{
    NEUTRAL_TRAFFIC_VOLUME,
    traffic_model::{TrafficModel, TrafficModelError, WeatherFeatures},
    traffic_provider::TrafficProvider,
    weather::{WeatherClient, WeatherClientParams, WeatherError},
};

#[derive(Debug, Error)]
pub enum TrafficError {
    #[error("Weather lookup failed: {0}")]
    Weather(#[from] WeatherError),

    #[error("Traffic prediction failed: {0}")]
    Model(#[from] TrafficModelError),
}

/// Produces one traffic volume per point.
///
/// Failures never reach the caller: a point whose weather or prediction
/// fails gets [`NEUTRAL_TRAFFIC_VOLUME`].
pub struct TrafficClient<M> {
    weather_client: WeatherClient,
    model: M,
}

impl<M: TrafficModel> TrafficClient<M> {
    pub fn new(weather_client: WeatherClient, model: M) -> Self {
        Self {
            weather_client,
            model,
        }
    }

    pub fn with_model(model: M) -> Self {
        Self::new(WeatherClient::new(WeatherClientParams::default()), model)
    }

    #[instrument(skip_all, level = "debug")]
    pub async fn fetch_volumes<P>(&self, points: &[P], provider: TrafficProvider) -> Vec<f64>
    where
        for<'a> &'a P: Into<geo_types::Point>,
    {
        match provider {
            TrafficProvider::Neutral => vec![NEUTRAL_TRAFFIC_VOLUME; points.len()],
            TrafficProvider::WeatherModel => {
                let now = self.local_now();
                let futures = points
                    .iter()
                    .map(|point| self.predict_volume(point.into(), &now));

                let volumes = futures::future::join_all(futures).await;

                info!(
                    "Traffic: predicted volumes for {} points at {}",
                    volumes.len(),
                    now
                );

                volumes
            }
        }
    }

    async fn predict_volume(&self, point: geo_types::Point, at: &Zoned) -> f64 {
        match self.try_predict_volume(point, at).await {
            Ok(volume) => volume,
            Err(err) => {
                warn!(
                    "Traffic: prediction for ({}, {}) failed, using neutral volume: {}",
                    point.y(),
                    point.x(),
                    err
                );
                NEUTRAL_TRAFFIC_VOLUME
            }
        }
    }

    async fn try_predict_volume(
        &self,
        point: geo_types::Point,
        at: &Zoned,
    ) -> Result<f64, TrafficError> {
        let weather = self.weather_client.current_weather(point).await?;
        let features = WeatherFeatures::new(&weather, at);
        Ok(self.model.predict(&features)?)
    }

    /// Current time in the weather client's timezone, falling back to the
    /// system timezone when the name is unknown.
    fn local_now(&self) -> Zoned {
        let timezone = &self.weather_client.params().timezone;
        Timestamp::now().in_tz(timezone).unwrap_or_else(|err| {
            warn!("Traffic: unknown timezone {}: {}", timezone, err);
            Zoned::now()
        })
    }
}
