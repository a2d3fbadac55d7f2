use async_trait::async_trait;
use chrono::DateTime;
use reqwest::Client;
use serde::Deserialize;

use crate::model::WeatherObservation;

use super::{FetchError, WeatherProvider};

/// OpenWeatherMap current-conditions endpoint.
const CURRENT_WEATHER_URL: &str = "http://api.openweathermap.org/data/2.5/weather";

/// Client for the OpenWeatherMap current-weather API.
///
/// One GET per city, imperial units, no retries and no timeout beyond
/// what the transport itself imposes.
#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            http: Client::new(),
        }
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn current_weather(&self, city: &str) -> Result<WeatherObservation, FetchError> {
        let res = self
            .http
            .get(CURRENT_WEATHER_URL)
            .query(&[
                ("q", city),
                ("units", "imperial"),
                ("appid", self.api_key.as_str()),
            ])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(FetchError::Status {
                status,
                body: truncate_body(&body),
            });
        }

        parse_current(&body)
    }
}

/// Decode one current-weather payload into the domain observation.
///
/// Every field the dashboard relies on must be present and usable.
/// Anything else in the payload is ignored.
fn parse_current(body: &str) -> Result<WeatherObservation, FetchError> {
    let parsed: OwCurrentResponse = serde_json::from_str(body)?;

    let description = parsed
        .weather
        .into_iter()
        .next()
        .map(|w| w.description)
        .ok_or(FetchError::Malformed("weather list is empty"))?;

    let observed_at = DateTime::from_timestamp(parsed.dt, 0)
        .ok_or(FetchError::Malformed("observation timestamp out of range"))?;

    Ok(WeatherObservation {
        temperature: parsed.main.temp,
        description,
        humidity: parsed.main.humidity,
        wind_speed: parsed.wind.speed,
        observed_at,
    })
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    description: String,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    dt: i64,
    main: OwMain,
    weather: Vec<OwWeather>,
    wind: OwWind,
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    let mut truncated: String = body.chars().take(MAX).collect();
    if truncated.len() < body.len() {
        truncated.push_str("...");
    }
    truncated
}
