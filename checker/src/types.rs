//! Checker configuration types

use std::path::PathBuf;
use std::time::Duration;

use url::Url;

use crate::error::{CheckerError, CheckerResult};

pub const DEFAULT_BASE_URL: &str = "http://localhost:7081";
pub const DEFAULT_SEARCH_PATH: &str = "/terrorists/search";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;
pub const DEFAULT_MAX_CONCURRENT: usize = 50;
pub const DEFAULT_RECORDS_PATH: &str = "records.json";

/// Optional tuning parameters understood by the search service.
///
/// Unset fields are left out of the request entirely.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchOptions {
    /// Maximum number of entries the service should return
    pub count: Option<u32>,
    pub min_coefficient: Option<f64>,
    pub min_average_coefficient: Option<f64>,
}

impl SearchOptions {
    /// Extra query parameters, in a stable order
    pub fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(count) = self.count {
            params.push(("count", count.to_string()));
        }
        if let Some(min) = self.min_coefficient {
            params.push(("minCoefficient", min.to_string()));
        }
        if let Some(min) = self.min_average_coefficient {
            params.push(("minAverageCoefficient", min.to_string()));
        }
        params
    }
}

/// Full configuration of one checker run
#[derive(Debug, Clone, PartialEq)]
pub struct CheckerConfig {
    pub base_url: String,
    pub search_path: String,
    /// Total-duration budget of a single lookup
    pub request_timeout: Duration,
    /// Maximum number of lookups in flight at once
    pub max_concurrent: usize,
    pub records_path: PathBuf,
    /// Where to write the JSON run summary, if anywhere
    pub summary_path: Option<PathBuf>,
    pub search_options: SearchOptions,
    /// The service runs locally behind a self-signed certificate; never enable this for remote hosts
    pub accept_invalid_certs: bool,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            search_path: DEFAULT_SEARCH_PATH.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            max_concurrent: DEFAULT_MAX_CONCURRENT,
            records_path: PathBuf::from(DEFAULT_RECORDS_PATH),
            summary_path: None,
            search_options: SearchOptions::default(),
            accept_invalid_certs: true,
        }
    }
}

impl CheckerConfig {
    /// Load configuration from `CHECKER_*` environment variables over the defaults
    pub fn from_env() -> CheckerResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> CheckerResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(base_url) = lookup("CHECKER_BASE_URL") {
            config.base_url = base_url;
        }
        if let Some(secs) = lookup("CHECKER_TIMEOUT_SECS") {
            let secs = parse_number::<u64>("CHECKER_TIMEOUT_SECS", &secs)?;
            config.request_timeout = Duration::from_secs(secs);
        }
        if let Some(max) = lookup("CHECKER_MAX_CONCURRENT") {
            config.max_concurrent = parse_number::<usize>("CHECKER_MAX_CONCURRENT", &max)?;
        }
        if let Some(path) = lookup("CHECKER_RECORDS") {
            config.records_path = PathBuf::from(path);
        }
        if let Some(path) = lookup("CHECKER_SUMMARY_PATH") {
            config.summary_path = Some(PathBuf::from(path));
        }

        Ok(config)
    }

    /// Reject configurations the run cannot work with
    pub fn validate(&self) -> CheckerResult<()> {
        if self.max_concurrent == 0 {
            return Err(CheckerError::ConfigError {
                message: "max_concurrent must be greater than zero".to_string(),
            });
        }
        if self.request_timeout.is_zero() {
            return Err(CheckerError::ConfigError {
                message: "request_timeout must be greater than zero".to_string(),
            });
        }
        check_coefficient("min_coefficient", self.search_options.min_coefficient)?;
        check_coefficient("min_average_coefficient", self.search_options.min_average_coefficient)?;
        self.search_url().map(|_| ())
    }

    /// Endpoint every lookup is sent to
    pub fn search_url(&self) -> CheckerResult<Url> {
        let base = Url::parse(&self.base_url).map_err(|e| CheckerError::ConfigError {
            message: format!("Invalid base URL '{}': {}", self.base_url, e),
        })?;
        base.join(&self.search_path).map_err(|e| CheckerError::ConfigError {
            message: format!("Invalid search path '{}': {}", self.search_path, e),
        })
    }
}

fn parse_number<T: std::str::FromStr>(key: &str, value: &str) -> CheckerResult<T> {
    value.trim().parse::<T>().map_err(|_| CheckerError::ConfigError {
        message: format!("{key} must be a non-negative integer, got '{value}'"),
    })
}

fn check_coefficient(field: &str, value: Option<f64>) -> CheckerResult<()> {
    match value {
        Some(v) if !(v > 0.0 && v <= 1.0) => Err(CheckerError::ConfigError {
            message: format!("{field} must be in (0, 1], got {v}"),
        }),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = CheckerConfig::default();
        assert_eq!(config.request_timeout, Duration::from_secs(60));
        assert_eq!(config.max_concurrent, 50);
        assert_eq!(config.search_url().unwrap().as_str(), "http://localhost:7081/terrorists/search");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_overrides_defaults() {
        let config = CheckerConfig::from_lookup(lookup_from(&[
            ("CHECKER_BASE_URL", "http://127.0.0.1:9000"),
            ("CHECKER_TIMEOUT_SECS", "5"),
            ("CHECKER_MAX_CONCURRENT", "8"),
            ("CHECKER_SUMMARY_PATH", "out/summary.json"),
        ]))
        .unwrap();

        assert_eq!(config.base_url, "http://127.0.0.1:9000");
        assert_eq!(config.request_timeout, Duration::from_secs(5));
        assert_eq!(config.max_concurrent, 8);
        assert_eq!(config.summary_path, Some(PathBuf::from("out/summary.json")));
        assert_eq!(config.records_path, PathBuf::from(DEFAULT_RECORDS_PATH));
    }

    #[test]
    fn test_env_rejects_bad_numbers() {
        let result = CheckerConfig::from_lookup(lookup_from(&[("CHECKER_MAX_CONCURRENT", "lots")]));
        assert!(matches!(result, Err(CheckerError::ConfigError { .. })));
    }

    #[test]
    fn test_validate_rejects_zero_concurrency() {
        let config = CheckerConfig {
            max_concurrent: 0,
            ..CheckerConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_out_of_range_coefficient() {
        let mut config = CheckerConfig::default();
        config.search_options.min_coefficient = Some(1.5);
        assert!(config.validate().is_err());

        config.search_options.min_coefficient = Some(0.39);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_base_url() {
        let config = CheckerConfig {
            base_url: "not a url".to_string(),
            ..CheckerConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_search_options_only_emit_set_fields() {
        assert!(SearchOptions::default().params().is_empty());

        let options = SearchOptions {
            count: Some(3),
            min_coefficient: None,
            min_average_coefficient: Some(0.75),
        };
        assert_eq!(
            options.params(),
            vec![("count", "3".to_string()), ("minAverageCoefficient", "0.75".to_string())]
        );
    }
}
