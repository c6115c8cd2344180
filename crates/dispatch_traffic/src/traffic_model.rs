use std::{fs::File, io::BufReader, path::Path};

use jiff::Zoned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::weather::CurrentWeather;

#[derive(Debug, Error)]
pub enum TrafficModelError {
    #[error("Failed to read traffic model: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse traffic model: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Traffic model has {features} features but {coefficients} coefficients")]
    ShapeMismatch {
        features: usize,
        coefficients: usize,
    },

    #[error("Traffic model produced a non-finite prediction")]
    NonFinitePrediction,
}

/// Model inputs for one zone at one moment.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Default)]
pub struct WeatherFeatures {
    pub temp: f64,
    pub clouds_all: f64,
    pub windspeed: f64,
    /// Local hour of day, 0-23
    pub hour: f64,
    /// Local day of week, Monday = 0
    pub day: f64,
}

impl WeatherFeatures {
    pub fn new(weather: &CurrentWeather, at: &Zoned) -> Self {
        Self {
            temp: weather.temperature,
            clouds_all: weather.cloudcover,
            windspeed: weather.windspeed,
            hour: f64::from(at.hour()),
            day: f64::from(at.weekday().to_monday_zero_offset()),
        }
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        match name {
            "temp" => Some(self.temp),
            "clouds_all" => Some(self.clouds_all),
            "windspeed" => Some(self.windspeed),
            "hour" => Some(self.hour),
            "day" => Some(self.day),
            _ => None,
        }
    }
}

/// Predicts a traffic volume from weather features.
///
/// Models are handed to the client that uses them, there is no shared
/// global instance.
pub trait TrafficModel: Send + Sync {
    fn predict(&self, features: &WeatherFeatures) -> Result<f64, TrafficModelError>;
}

impl<T: TrafficModel + ?Sized> TrafficModel for Box<T> {
    fn predict(&self, features: &WeatherFeatures) -> Result<f64, TrafficModelError> {
        (**self).predict(features)
    }
}

/// `intercept + sum(coefficient_i * feature_i)`, clamped at zero.
///
/// The input vector follows `feature_names`; names the model knows but the
/// weather does not provide contribute zero.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct LinearTrafficModel {
    feature_names: Vec<String>,
    coefficients: Vec<f64>,
    #[serde(default)]
    intercept: f64,
}

impl LinearTrafficModel {
    pub fn new(
        feature_names: Vec<String>,
        coefficients: Vec<f64>,
        intercept: f64,
    ) -> Result<Self, TrafficModelError> {
        let model = Self {
            feature_names,
            coefficients,
            intercept,
        };
        model.validate()?;
        Ok(model)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, TrafficModelError> {
        let file = File::open(path)?;
        let model: LinearTrafficModel = serde_json::from_reader(BufReader::new(file))?;
        model.validate()?;
        Ok(model)
    }

    pub fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    fn validate(&self) -> Result<(), TrafficModelError> {
        if self.feature_names.len() != self.coefficients.len() {
            return Err(TrafficModelError::ShapeMismatch {
                features: self.feature_names.len(),
                coefficients: self.coefficients.len(),
            });
        }
        Ok(())
    }

    fn input_vector(&self, features: &WeatherFeatures) -> Vec<f64> {
        self.feature_names
            .iter()
            .map(|name| features.get(name).unwrap_or(0.0))
            .collect()
    }
}

impl TrafficModel for LinearTrafficModel {
    fn predict(&self, features: &WeatherFeatures) -> Result<f64, TrafficModelError> {
        let prediction = self
            .input_vector(features)
            .iter()
            .zip(&self.coefficients)
            .fold(self.intercept, |acc, (x, w)| acc + x * w);

        if !prediction.is_finite() {
            return Err(TrafficModelError::NonFinitePrediction);
        }

        Ok(prediction.max(0.0))
    }
}

/// Same volume whatever the weather.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstantTrafficModel(f64);

impl ConstantTrafficModel {
    pub fn new(volume: f64) -> Self {
        ConstantTrafficModel(volume)
    }
}

impl TrafficModel for ConstantTrafficModel {
    fn predict(&self, _features: &WeatherFeatures) -> Result<f64, TrafficModelError> {
        Ok(self.0)
    }
}
