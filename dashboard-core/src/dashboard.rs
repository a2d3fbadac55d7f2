use chrono::Utc;
use tracing::{info, warn};

use crate::model::{ArchivedRecord, WeatherObservation, capture_timestamp, object_key};
use crate::provider::{FetchError, WeatherProvider};
use crate::storage::{ObjectStorage, StorageError};

/// Cities a default run covers, in display order.
pub const DEFAULT_CITIES: [&str; 3] = ["Philadelphia", "Seattle", "New York"];

/// Whether [`Dashboard::ensure_bucket`] found the bucket or had to create it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BucketStatus {
    AlreadyExists,
    Created,
}

/// What happened to one city during a run.
#[derive(Debug)]
pub enum CityOutcome {
    /// Fetched, displayed, and archived under `key`.
    Archived { key: String },
    /// Fetched and displayed; archival was disabled for this run.
    Displayed,
    /// Fetched and displayed, but the storage write failed.
    ArchiveFailed(StorageError),
    /// The provider request failed; nothing was displayed or archived.
    FetchFailed(FetchError),
}

/// Per-city result of a run.
#[derive(Debug)]
pub struct CityReport {
    pub city: String,
    pub outcome: CityOutcome,
}

/// Everything a run did, one entry per requested city, in request order.
#[derive(Debug, Default)]
pub struct RunReport {
    pub cities: Vec<CityReport>,
}

impl RunReport {
    /// Cities whose observation landed in the bucket.
    pub fn archived(&self) -> usize {
        self.cities
            .iter()
            .filter(|report| matches!(report.outcome, CityOutcome::Archived { .. }))
            .count()
    }

    /// Cities that failed at either the fetch or the archive step.
    pub fn failed(&self) -> usize {
        self.cities
            .iter()
            .filter(|report| {
                matches!(
                    report.outcome,
                    CityOutcome::FetchFailed(_) | CityOutcome::ArchiveFailed(_)
                )
            })
            .count()
    }
}

/// The dashboard controller: fetch, display, archive, one city at a time.
#[derive(Debug)]
pub struct Dashboard {
    provider: Box<dyn WeatherProvider>,
    storage: Box<dyn ObjectStorage>,
}

impl Dashboard {
    pub fn new(provider: Box<dyn WeatherProvider>, storage: Box<dyn ObjectStorage>) -> Self {
        Self { provider, storage }
    }

    /// Check-then-create for the archive bucket.
    ///
    /// Idempotent: when the bucket already exists, no create call is issued.
    pub async fn ensure_bucket(&self) -> Result<BucketStatus, StorageError> {
        if self.storage.bucket_exists().await? {
            return Ok(BucketStatus::AlreadyExists);
        }
        self.storage.create_bucket().await?;
        Ok(BucketStatus::Created)
    }

    /// Run the full sequence: bucket check first (when archiving), then
    /// every requested city strictly in order.
    ///
    /// Nothing here aborts the loop. A failed bucket check is logged and
    /// the per-city writes are left to fail on their own; per-city errors
    /// are logged and recorded in the report.
    pub async fn run(&self, cities: &[String], archive: bool) -> RunReport {
        if archive {
            match self.ensure_bucket().await {
                Ok(BucketStatus::AlreadyExists) => {
                    info!(bucket = self.storage.bucket(), "bucket exists");
                }
                Ok(BucketStatus::Created) => {
                    info!(bucket = self.storage.bucket(), "bucket created");
                }
                Err(err) => {
                    warn!(
                        bucket = self.storage.bucket(),
                        error = %err,
                        "could not verify bucket; archival may fail"
                    );
                }
            }
        }

        let mut report = RunReport::default();
        for city in cities {
            report.cities.push(self.process_city(city, archive).await);
        }
        report
    }

    /// One fetch-display-archive cycle.
    pub async fn process_city(&self, city: &str, archive: bool) -> CityReport {
        let observation = match self.provider.current_weather(city).await {
            Ok(observation) => observation,
            Err(err) => {
                warn!(city, error = %err, "failed to fetch weather");
                return CityReport {
                    city: city.to_string(),
                    outcome: CityOutcome::FetchFailed(err),
                };
            }
        };

        println!("{}", render_report(city, &observation));
        println!();

        if !archive {
            return CityReport {
                city: city.to_string(),
                outcome: CityOutcome::Displayed,
            };
        }

        match self.archive_observation(city, &observation).await {
            Ok(key) => {
                info!(city, key = %key, "archived observation");
                CityReport {
                    city: city.to_string(),
                    outcome: CityOutcome::Archived { key },
                }
            }
            Err(err) => {
                warn!(city, error = %err, "failed to archive observation");
                CityReport {
                    city: city.to_string(),
                    outcome: CityOutcome::ArchiveFailed(err),
                }
            }
        }
    }

    /// Persist one observation under `{city}_{YYYYMMDDHHMMSS}.json`.
    ///
    /// The key timestamp is the capture time, taken here, not the
    /// provider's observation time.
    pub async fn archive_observation(
        &self,
        city: &str,
        observation: &WeatherObservation,
    ) -> Result<String, StorageError> {
        let timestamp = capture_timestamp(Utc::now());
        let key = object_key(city, &timestamp);

        let record = ArchivedRecord {
            observation: observation.clone(),
            timestamp,
        };
        let body = serde_json::to_vec(&record)?;

        self.storage
            .put_object(&key, body, "application/json")
            .await?;
        Ok(key)
    }
}

/// Console summary for one observation. Pure formatting, no side effects.
pub fn render_report(city: &str, observation: &WeatherObservation) -> String {
    format!(
        "Weather data for {city}:\n\
         Temperature: {temperature}°F\n\
         Weather: {description}\n\
         Humidity: {humidity}%\n\
         Wind Speed: {wind_speed} mph\n\
         Timestamp: {timestamp} UTC\n\
         {rule}",
        temperature = observation.temperature,
        description = observation.description,
        humidity = observation.humidity,
        wind_speed = observation.wind_speed,
        timestamp = observation.observed_at.format("%Y-%m-%d %H:%M:%S"),
        rule = "-".repeat(40),
    )
}
