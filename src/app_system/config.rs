use std::time::Duration;

use crate::actor_framework::Latency;
use super::ConfigError;

pub const ENV_BUFFER_SIZE: &str = "BACKOFFICE_BUFFER_SIZE";
pub const ENV_LATENCY: &str = "BACKOFFICE_LATENCY";
pub const ENV_SEED: &str = "BACKOFFICE_SEED";

/// Settings for starting a [`BackOffice`](super::BackOffice).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreConfig {
    /// Capacity of each actor's request channel.
    pub buffer_size: usize,
    pub latency: Latency,
    /// Start with the reference catalog and ledger instead of empty stores.
    pub seed_fixtures: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            buffer_size: 32,
            latency: Latency::default(),
            seed_fixtures: true,
        }
    }
}

impl StoreConfig {
    /// Empty stores that answer immediately.
    pub fn for_tests() -> Self {
        Self {
            buffer_size: 16,
            latency: Latency::none(),
            seed_fixtures: false,
        }
    }

    /// Defaults overridden by `BACKOFFICE_BUFFER_SIZE`, `BACKOFFICE_LATENCY`
    /// (`off`, `default` or milliseconds for every operation) and
    /// `BACKOFFICE_SEED` (`true`/`false`).
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(value) = lookup(ENV_BUFFER_SIZE) {
            config.buffer_size = value
                .trim()
                .parse::<usize>()
                .ok()
                .filter(|size| *size > 0)
                .ok_or(ConfigError::InvalidValue { key: ENV_BUFFER_SIZE, value })?;
        }

        if let Some(value) = lookup(ENV_LATENCY) {
            config.latency = match value.trim() {
                "off" => Latency::none(),
                "default" => Latency::default(),
                millis => millis
                    .parse::<u64>()
                    .map(|ms| Latency::uniform(Duration::from_millis(ms)))
                    .map_err(|_| ConfigError::InvalidValue { key: ENV_LATENCY, value: value.clone() })?,
            };
        }

        if let Some(value) = lookup(ENV_SEED) {
            config.seed_fixtures = match value.trim() {
                "true" | "1" => true,
                "false" | "0" => false,
                _ => return Err(ConfigError::InvalidValue { key: ENV_SEED, value: value.clone() }),
            };
        }

        Ok(config)
    }
}
