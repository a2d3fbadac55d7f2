use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One weather snapshot for one city, validated at the parse boundary.
///
/// Lives for a single fetch-display-archive cycle and is not retained
/// afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherObservation {
    /// Temperature in °F (the provider is queried with imperial units).
    pub temperature: f64,
    /// Textual conditions, e.g. "clear sky".
    pub description: String,
    /// Relative humidity in percent.
    pub humidity: u8,
    /// Wind speed in mph.
    pub wind_speed: f64,
    /// Provider-reported observation time, serialized as epoch seconds.
    #[serde(with = "chrono::serde::ts_seconds")]
    pub observed_at: DateTime<Utc>,
}

/// What actually lands in the bucket: every observation field plus the
/// capture timestamp that also appears in the object key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArchivedRecord {
    #[serde(flatten)]
    pub observation: WeatherObservation,
    pub timestamp: String,
}

/// Capture timestamp used in object keys and archived records: `YYYYMMDDHHMMSS`, UTC.
pub fn capture_timestamp(now: DateTime<Utc>) -> String {
    now.format("%Y%m%d%H%M%S").to_string()
}

/// Object key for one archived observation: `{city}_{timestamp}.json`.
///
/// Second granularity: archiving the same city twice within one second
/// reuses the key and overwrites the earlier object.
pub fn object_key(city: &str, timestamp: &str) -> String {
    format!("{city}_{timestamp}.json")
}
