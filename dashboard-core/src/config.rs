use thiserror::Error;

/// Environment variable holding the OpenWeatherMap API key.
pub const ENV_API_KEY: &str = "OPENWEATHER_API_KEY";
/// Environment variable holding the archive bucket name.
pub const ENV_BUCKET_NAME: &str = "S3_BUCKET_NAME";
/// Environment variable holding the storage access key id.
pub const ENV_ACCESS_KEY: &str = "AWS_ACCESS_KEY";
/// Environment variable holding the storage secret key.
pub const ENV_SECRET_KEY: &str = "AWS_SECRET_KEY";
/// Environment variable holding the storage region.
pub const ENV_REGION: &str = "AWS_REGION";
/// Optional: endpoint override for S3-compatible services (MinIO etc.).
pub const ENV_ENDPOINT_URL: &str = "AWS_ENDPOINT_URL";

/// Everything a dashboard run needs, validated up front.
///
/// Built once at startup and handed to the components that need it;
/// nothing below this layer reads the process environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub bucket_name: String,
    pub access_key: String,
    pub secret_key: String,
    pub region: String,
    pub endpoint_url: Option<String>,
}

/// Fatal startup error: a required setting is absent.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),
}

impl Config {
    /// Read and validate configuration from the process environment.
    ///
    /// Fails on the first required variable that is missing or empty,
    /// before any network or storage client is constructed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Like [`Config::from_env`], but with an injectable variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            api_key: required(&lookup, ENV_API_KEY)?,
            bucket_name: required(&lookup, ENV_BUCKET_NAME)?,
            access_key: required(&lookup, ENV_ACCESS_KEY)?,
            secret_key: required(&lookup, ENV_SECRET_KEY)?,
            region: required(&lookup, ENV_REGION)?,
            endpoint_url: lookup(ENV_ENDPOINT_URL).filter(|value| !value.is_empty()),
        })
    }
}

fn required<F>(lookup: &F, name: &'static str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(ConfigError::Missing(name)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn full_env() -> HashMap<&'static str, &'static str> {
        HashMap::from([
            (ENV_API_KEY, "test-api-key"),
            (ENV_BUCKET_NAME, "weather-archive"),
            (ENV_ACCESS_KEY, "AKIAEXAMPLE"),
            (ENV_SECRET_KEY, "wJalrXUtnFEMI"),
            (ENV_REGION, "us-east-1"),
        ])
    }

    fn lookup_in(env: &HashMap<&'static str, &'static str>) -> impl Fn(&str) -> Option<String> {
        |name| env.get(name).map(|value| (*value).to_string())
    }

    #[test]
    fn loads_complete_environment() {
        let env = full_env();
        let cfg = Config::from_lookup(lookup_in(&env)).expect("config must load");

        assert_eq!(cfg.api_key, "test-api-key");
        assert_eq!(cfg.bucket_name, "weather-archive");
        assert_eq!(cfg.access_key, "AKIAEXAMPLE");
        assert_eq!(cfg.secret_key, "wJalrXUtnFEMI");
        assert_eq!(cfg.region, "us-east-1");
        assert_eq!(cfg.endpoint_url, None);
    }

    #[test]
    fn every_required_variable_is_enforced() {
        for missing in [
            ENV_API_KEY,
            ENV_BUCKET_NAME,
            ENV_ACCESS_KEY,
            ENV_SECRET_KEY,
            ENV_REGION,
        ] {
            let mut env = full_env();
            env.remove(missing);

            let err = Config::from_lookup(lookup_in(&env)).unwrap_err();
            assert_eq!(err, ConfigError::Missing(missing));
        }
    }

    #[test]
    fn empty_value_counts_as_missing() {
        let mut env = full_env();
        env.insert(ENV_BUCKET_NAME, "");

        let err = Config::from_lookup(lookup_in(&env)).unwrap_err();
        assert_eq!(err, ConfigError::Missing(ENV_BUCKET_NAME));
        assert_eq!(err.to_string(), "S3_BUCKET_NAME is not set");
    }

    #[test]
    fn endpoint_override_is_optional() {
        let mut env = full_env();
        env.insert(ENV_ENDPOINT_URL, "http://localhost:9000");

        let cfg = Config::from_lookup(lookup_in(&env)).expect("config must load");
        assert_eq!(cfg.endpoint_url.as_deref(), Some("http://localhost:9000"));
    }
}
