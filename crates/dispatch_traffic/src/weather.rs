use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

pub const OPEN_METEO_FORECAST_API_URL: &str = "https://api.open-meteo.com/v1/forecast";
pub const DEFAULT_TIMEZONE: &str = "Europe/Athens";

#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Failed to decode forecast: {0}")]
    Deserialize(#[from] serde_json::Error),
}

/// Current conditions at one point. Fields the API leaves out read as zero.
#[derive(Deserialize, Debug, Clone, Copy, Default, PartialEq)]
pub struct CurrentWeather {
    /// Degrees Celsius
    #[serde(default)]
    pub temperature: f64,

    /// km/h
    #[serde(default)]
    pub windspeed: f64,

    /// Percent of sky covered
    #[serde(default)]
    pub cloudcover: f64,
}

#[derive(Deserialize)]
struct ForecastResponse {
    #[serde(default)]
    current_weather: Option<CurrentWeather>,
}

#[derive(Clone, Debug)]
pub struct WeatherClientParams {
    pub base_url: String,
    pub timezone: String,
    pub request_timeout: Duration,
}

impl Default for WeatherClientParams {
    fn default() -> Self {
        Self {
            base_url: OPEN_METEO_FORECAST_API_URL.to_string(),
            timezone: DEFAULT_TIMEZONE.to_string(),
            request_timeout: Duration::from_secs(10),
        }
    }
}

pub struct WeatherClient {
    params: WeatherClientParams,
    client: reqwest::Client,
}

impl WeatherClient {
    pub fn new(params: WeatherClientParams) -> Self {
        Self {
            params,
            client: reqwest::Client::new(),
        }
    }

    pub fn params(&self) -> &WeatherClientParams {
        &self.params
    }

    pub async fn current_weather(
        &self,
        point: geo_types::Point,
    ) -> Result<CurrentWeather, WeatherError> {
        let response = self
            .client
            .get(&self.params.base_url)
            .query(&[
                ("latitude", point.y().to_string()),
                ("longitude", point.x().to_string()),
                ("current_weather", String::from("true")),
                ("timezone", self.params.timezone.clone()),
            ])
            .timeout(self.params.request_timeout)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(WeatherError::Api { status, message });
        }

        let body = response.text().await?;
        let weather = parse_forecast(&body)?;

        debug!(
            "Weather: current conditions at ({}, {}) received",
            point.y(),
            point.x()
        );

        Ok(weather)
    }
}

fn parse_forecast(body: &str) -> Result<CurrentWeather, WeatherError> {
    let forecast: ForecastResponse = serde_json::from_str(body)?;
    Ok(forecast.current_weather.unwrap_or_default())
}
