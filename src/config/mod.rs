//! Harvest configuration.
//!
//! `Config::from_env` reads environment variables and falls back to the
//! defaults below; the binary then lets command-line flags override single
//! fields. None of this is read by the normalization core.

use std::env;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

pub const ENV_BASE_URL: &str = "CATALOG_BASE_URL";
pub const ENV_TARGET: &str = "HARVEST_TARGET";
pub const ENV_CATEGORIES: &str = "HARVEST_CATEGORIES";
pub const ENV_VERBOSE: &str = "HARVEST_VERBOSE";
pub const ENV_REQUEST_TIMEOUT_SECS: &str = "HARVEST_REQUEST_TIMEOUT_SECS";
pub const ENV_DELAY_MS: &str = "HARVEST_DELAY_MS";
pub const ENV_ATTEMPTS_MULTIPLIER: &str = "HARVEST_ATTEMPTS_MULTIPLIER";
pub const ENV_PAGE_SIZE: &str = "HARVEST_PAGE_SIZE";
pub const ENV_OUTPUT: &str = "HARVEST_OUTPUT";

const DEFAULT_BASE_URL: &str = "https://terrywhitechemmart.com.au";
const DEFAULT_TARGET: usize = 10;
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
const DEFAULT_DELAY_MS: u64 = 1000;
const DEFAULT_ATTEMPTS_MULTIPLIER: usize = 5;
const DEFAULT_PAGE_SIZE: u32 = 24;
const DEFAULT_OUTPUT: &str = "terry_white_products_cleaned.csv";

/// Every top-level category slug in the catalog.
pub const DEFAULT_CATEGORIES: [&str; 12] = [
    "beauty",
    "cosmetics",
    "diabetes-ndss",
    "general-health",
    "gifting-fragrances",
    "household",
    "medicines",
    "mother-baby",
    "personal-care",
    "skin-care",
    "vitamins-nutrition",
    "weight-management",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Storefront origin; API endpoints and product URLs hang off it.
    pub base_url: String,
    /// Number of complete rows to collect.
    pub target: usize,
    pub categories: Vec<String>,
    pub verbose: bool,
    pub request_timeout: Duration,
    /// Pause after every catalog request.
    pub delay: Duration,
    /// Attempt budget is `target * attempts_multiplier`.
    pub attempts_multiplier: usize,
    pub page_size: u32,
    pub output: PathBuf,
}

impl Config {
    /// Load from environment variables, falling back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let categories = match env::var(ENV_CATEGORIES) {
            Ok(raw) => parse_categories(&raw),
            Err(_) => defaults.categories,
        };

        let config = Self {
            base_url: env::var(ENV_BASE_URL).unwrap_or(defaults.base_url),
            target: parse_var(ENV_TARGET, "target")?.unwrap_or(defaults.target),
            categories,
            verbose: parse_bool_var(ENV_VERBOSE)?.unwrap_or(defaults.verbose),
            request_timeout: parse_var(ENV_REQUEST_TIMEOUT_SECS, "request_timeout")?
                .map(Duration::from_secs)
                .unwrap_or(defaults.request_timeout),
            delay: parse_var(ENV_DELAY_MS, "delay")?
                .map(Duration::from_millis)
                .unwrap_or(defaults.delay),
            attempts_multiplier: parse_var(ENV_ATTEMPTS_MULTIPLIER, "attempts_multiplier")?
                .unwrap_or(defaults.attempts_multiplier),
            page_size: parse_var(ENV_PAGE_SIZE, "page_size")?.unwrap_or(defaults.page_size),
            output: env::var(ENV_OUTPUT)
                .map(PathBuf::from)
                .unwrap_or(defaults.output),
        };
        config.validate()?;
        Ok(config)
    }

    /// Reject values the harvest loop cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.target == 0 {
            return Err(ConfigError::invalid("target", "must be at least 1"));
        }
        if self.attempts_multiplier == 0 {
            return Err(ConfigError::invalid("attempts_multiplier", "must be at least 1"));
        }
        if self.page_size == 0 {
            return Err(ConfigError::invalid("page_size", "must be at least 1"));
        }
        if self.categories.is_empty() {
            return Err(ConfigError::invalid("categories", "no categories given"));
        }
        if url::Url::parse(&self.base_url).is_err() {
            return Err(ConfigError::invalid("base_url", format!("not a URL: {}", self.base_url)));
        }
        Ok(())
    }

    pub fn max_attempts(&self) -> usize {
        self.target.saturating_mul(self.attempts_multiplier)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            target: DEFAULT_TARGET,
            categories: DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect(),
            verbose: false,
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            delay: Duration::from_millis(DEFAULT_DELAY_MS),
            attempts_multiplier: DEFAULT_ATTEMPTS_MULTIPLIER,
            page_size: DEFAULT_PAGE_SIZE,
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

/// Split a comma-separated category list, dropping blanks.
pub fn parse_categories(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_var<T: FromStr>(key: &str, field: &'static str) -> Result<Option<T>, ConfigError>
where
    T::Err: Display,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|e: T::Err| ConfigError::invalid(field, format!("{key}={raw:?}: {e}"))),
        Err(_) => Ok(None),
    }
}

fn parse_bool_var(key: &str) -> Result<Option<bool>, ConfigError> {
    match env::var(key) {
        Ok(raw) => match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(Some(true)),
            "0" | "false" | "no" | "off" | "" => Ok(Some(false)),
            _ => Err(ConfigError::invalid("verbose", format!("{key}={raw:?} is not a boolean"))),
        },
        Err(_) => Ok(None),
    }
}

/// Errors that can occur while building a configuration.
#[derive(Debug)]
pub enum ConfigError {
    InvalidValue { field: &'static str, reason: String },
}

impl ConfigError {
    fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        ConfigError::InvalidValue {
            field,
            reason: reason.into(),
        }
    }
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidValue { field, reason } => {
                write!(f, "invalid value for '{}': {}", field, reason)
            }
        }
    }
}

impl Error for ConfigError {}
