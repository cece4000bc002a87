//! Runtime settings for [`OrderSystem`](crate::runtime::OrderSystem).
//!
//! Defaults can be overridden from the environment:
//!
//! | Variable | Field | Default |
//! |----------|-------|---------|
//! | `ORDER_INTAKE_BUFFER_SIZE` | [`SystemConfig::buffer_size`] | 32 |
//!
//! Blank values are ignored.

use serde::Deserialize;
use std::env;
use thiserror::Error;

pub const BUFFER_SIZE_ENV: &str = "ORDER_INTAKE_BUFFER_SIZE";

const DEFAULT_BUFFER_SIZE: usize = 32;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SystemConfig {
    /// Number of requests each actor queues before senders wait.
    pub buffer_size: usize,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid environment override for `{key}`: `{value}`")]
    InvalidEnvOverride { key: String, value: String },
    #[error("buffer_size must be greater than zero")]
    ZeroBufferSize,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            buffer_size: DEFAULT_BUFFER_SIZE,
        }
    }
}

impl SystemConfig {
    /// Defaults with environment overrides applied.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(read_env)
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(value) = lookup(BUFFER_SIZE_ENV) {
            config.buffer_size = parse_usize(BUFFER_SIZE_ENV, value.trim())?;
        }
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.buffer_size == 0 {
            return Err(ConfigError::ZeroBufferSize);
        }
        Ok(())
    }
}

fn read_env(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}

fn parse_usize(key: &str, value: &str) -> Result<usize, ConfigError> {
    value.parse::<usize>().map_err(|_| ConfigError::InvalidEnvOverride {
        key: key.to_string(),
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup(value: Option<&'static str>) -> impl Fn(&str) -> Option<String> {
        move |key| {
            assert_eq!(key, BUFFER_SIZE_ENV);
            value.map(str::to_string)
        }
    }

    #[test]
    fn test_defaults() {
        let config = SystemConfig::from_lookup(lookup(None)).unwrap();
        assert_eq!(config, SystemConfig { buffer_size: 32 });
    }

    #[test]
    fn test_env_override() {
        let config = SystemConfig::from_lookup(lookup(Some(" 128 "))).unwrap();
        assert_eq!(config.buffer_size, 128);
    }

    #[test]
    fn test_invalid_override_is_reported() {
        let err = SystemConfig::from_lookup(lookup(Some("lots"))).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidEnvOverride {
                key: BUFFER_SIZE_ENV.to_string(),
                value: "lots".to_string(),
            }
        );
        assert_eq!(
            err.to_string(),
            "invalid environment override for `ORDER_INTAKE_BUFFER_SIZE`: `lots`"
        );
    }

    #[test]
    fn test_zero_buffer_is_rejected() {
        let err = SystemConfig::from_lookup(lookup(Some("0"))).unwrap_err();
        assert_eq!(err, ConfigError::ZeroBufferSize);
    }
}
