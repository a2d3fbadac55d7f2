//! Core library for the weather dashboard.
//!
//! This crate defines:
//! - Configuration loaded from the environment and validated at startup
//! - The OpenWeatherMap provider and the typed observation model
//! - Bucket-scoped object storage for archival
//! - The dashboard controller tying fetch, display, and archive together
//!
//! It is used by `dashboard-cli`, but can also be reused by other binaries or services.

pub mod config;
pub mod dashboard;
pub mod model;
pub mod provider;
pub mod storage;

pub use config::{Config, ConfigError};
pub use dashboard::{
    BucketStatus, CityOutcome, CityReport, DEFAULT_CITIES, Dashboard, RunReport, render_report,
};
pub use model::{ArchivedRecord, WeatherObservation, capture_timestamp, object_key};
pub use provider::{FetchError, OpenWeatherProvider, WeatherProvider};
pub use storage::{ObjectStorage, S3Storage, StorageError};
