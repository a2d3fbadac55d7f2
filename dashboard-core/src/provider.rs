use std::fmt::Debug;

use async_trait::async_trait;
use thiserror::Error;

use crate::model::WeatherObservation;

pub mod openweather;

pub use openweather::OpenWeatherProvider;

/// Recoverable failure while fetching one city's weather.
///
/// Never fatal: the dashboard logs the error and moves on to the next city.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request never completed (DNS, connect, transport).
    #[error("request to the weather provider failed: {0}")]
    Http(#[from] reqwest::Error),
    /// The provider answered with a non-success status.
    #[error("weather provider returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
    /// The body was not JSON of the expected shape.
    #[error("failed to parse weather provider response: {0}")]
    Parse(#[from] serde_json::Error),
    /// The body decoded, but a field the dashboard relies on was unusable.
    #[error("malformed weather provider response: {0}")]
    Malformed(&'static str),
}

/// A source of current weather observations.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// Fetch the current observation for `city`.
    async fn current_weather(&self, city: &str) -> Result<WeatherObservation, FetchError>;
}
