use anyhow::Context;
use clap::Parser;
use dashboard_core::{Config, DEFAULT_CITIES, Dashboard, OpenWeatherProvider, S3Storage};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(
    name = "weather-dashboard",
    version,
    about = "Fetch, display, and archive city weather"
)]
pub struct Cli {
    /// City to process; repeat the flag for several. Defaults to
    /// Philadelphia, Seattle, and New York, in that order.
    #[arg(long = "city", value_name = "NAME")]
    pub cities: Vec<String>,

    /// Fetch and display only; skip the bucket check and all archive writes.
    #[arg(long)]
    pub no_archive: bool,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let config = Config::from_env().context("incomplete configuration")?;

        let provider = OpenWeatherProvider::new(config.api_key.clone());
        let storage = S3Storage::connect(&config).await;
        let dashboard = Dashboard::new(Box::new(provider), Box::new(storage));

        let cities = resolve_cities(self.cities);
        let report = dashboard.run(&cities, !self.no_archive).await;

        tracing::info!(
            cities = report.cities.len(),
            archived = report.archived(),
            failed = report.failed(),
            "run finished"
        );

        Ok(())
    }
}

/// The fixed default list applies only when no `--city` was given.
fn resolve_cities(cities: Vec<String>) -> Vec<String> {
    if cities.is_empty() {
        DEFAULT_CITIES.iter().map(|city| (*city).to_string()).collect()
    } else {
        cities
    }
}
