//! Playground configuration, read once from the environment.

use thiserror::Error;

pub const RECIPIENT_ENV: &str = "SOLIDKIT_RECIPIENT";
pub const DISCOUNT_ENV: &str = "SOLIDKIT_DISCOUNT";
pub const PRICES_ENV: &str = "SOLIDKIT_PRICES";
pub const REMOTE_ENDPOINT_ENV: &str = "SOLIDKIT_REMOTE_ENDPOINT";

const DEFAULT_RECIPIENT: &str = "user@example.com";
const DEFAULT_REMOTE_ENDPOINT: &str = "https://store.invalid/invoices";
const DEFAULT_DISCOUNT: f64 = 10.0;
const DEFAULT_PRICES: [f64; 3] = [10.0, 30.0, 100.0];

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("{var}: expected a number, got `{value}`")]
    InvalidNumber { var: &'static str, value: String },

    #[error("{var} must not be empty")]
    Empty { var: &'static str },
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlaygroundConfig {
    pub recipient: String,
    pub discount: f64,
    pub prices: Vec<f64>,
    pub remote_endpoint: String,
}

impl Default for PlaygroundConfig {
    fn default() -> Self {
        Self {
            recipient: DEFAULT_RECIPIENT.to_string(),
            discount: DEFAULT_DISCOUNT,
            prices: DEFAULT_PRICES.to_vec(),
            remote_endpoint: DEFAULT_REMOTE_ENDPOINT.to_string(),
        }
    }
}

impl PlaygroundConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build from an arbitrary variable lookup. Unset variables fall back to
    /// defaults; set but malformed ones are errors.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let recipient = match lookup(RECIPIENT_ENV) {
            Some(v) if v.trim().is_empty() => return Err(ConfigError::Empty { var: RECIPIENT_ENV }),
            Some(v) => v.trim().to_string(),
            None => fallback(RECIPIENT_ENV, defaults.recipient),
        };

        let discount = match lookup(DISCOUNT_ENV) {
            Some(v) => parse_number(DISCOUNT_ENV, &v)?,
            None => fallback(DISCOUNT_ENV, defaults.discount),
        };

        let prices = match lookup(PRICES_ENV) {
            Some(v) => parse_prices(&v)?,
            None => fallback(PRICES_ENV, defaults.prices),
        };

        let remote_endpoint = match lookup(REMOTE_ENDPOINT_ENV) {
            Some(v) if v.trim().is_empty() => {
                return Err(ConfigError::Empty {
                    var: REMOTE_ENDPOINT_ENV,
                });
            }
            Some(v) => v.trim().to_string(),
            None => fallback(REMOTE_ENDPOINT_ENV, defaults.remote_endpoint),
        };

        Ok(Self {
            recipient,
            discount,
            prices,
            remote_endpoint,
        })
    }
}

fn fallback<T: core::fmt::Debug>(var: &'static str, default: T) -> T {
    tracing::warn!("{var} not set; using default {default:?}");
    default
}

fn parse_number(var: &'static str, value: &str) -> Result<f64, ConfigError> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| ConfigError::InvalidNumber {
            var,
            value: value.to_string(),
        })
}

fn parse_prices(value: &str) -> Result<Vec<f64>, ConfigError> {
    if value.trim().is_empty() {
        return Ok(Vec::new());
    }
    value
        .split(',')
        .map(|part| parse_number(PRICES_ENV, part))
        .collect()
}
