use std::env;
use std::fmt::Display;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use log::LevelFilter;
use thiserror::Error;

use crate::logging::LogDestination;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {key}={value:?}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub addr: SocketAddr,
    /// Snapshot file for the contacts store; in-memory only when unset.
    pub data_file: Option<PathBuf>,
    pub log_destination: LogDestination,
    pub log_level: LevelFilter,
    /// Seed demo contacts when no snapshot exists.
    pub seed: bool,
    /// Artificial loader latency.
    pub latency: Duration,
    /// Keys that fell back to their defaults, reported once logging is up.
    pub defaulted: Vec<&'static str>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut loader = Loader {
            lookup,
            defaulted: Vec::new(),
        };
        let addr = loader.try_load("CONTACTS_ADDR", "127.0.0.1:3000")?;
        let data_file = loader.optional("CONTACTS_DATA_FILE").map(PathBuf::from);
        let log_destination = loader.try_load("CONTACTS_LOG", "terminal")?;
        let log_level = loader.try_load("CONTACTS_LOG_LEVEL", "info")?;
        let seed = loader.try_load("CONTACTS_SEED", "true")?;
        let latency_ms: u64 = loader.try_load("CONTACTS_LATENCY_MS", "0")?;

        Ok(Self {
            addr,
            data_file,
            log_destination,
            log_level,
            seed,
            latency: Duration::from_millis(latency_ms),
            defaulted: loader.defaulted,
        })
    }
}

struct Loader<F> {
    lookup: F,
    defaulted: Vec<&'static str>,
}

impl<F: Fn(&str) -> Option<String>> Loader<F> {
    fn optional(&mut self, key: &'static str) -> Option<String> {
        let value = (self.lookup)(key).filter(|value| !value.trim().is_empty());
        if value.is_none() {
            self.defaulted.push(key);
        }
        value
    }

    fn try_load<T: FromStr>(&mut self, key: &'static str, default: &str) -> Result<T, ConfigError>
    where
        T::Err: Display,
    {
        let raw = self.optional(key).unwrap_or_else(|| default.to_owned());
        raw.trim().parse().map_err(|err: T::Err| ConfigError::Invalid {
            key,
            value: raw.clone(),
            reason: err.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = config_from(&[]).unwrap();

        assert_eq!(config.addr, "127.0.0.1:3000".parse::<SocketAddr>().unwrap());
        assert_eq!(config.data_file, None);
        assert_eq!(config.log_destination, LogDestination::Terminal);
        assert_eq!(config.log_level, LevelFilter::Info);
        assert!(config.seed);
        assert_eq!(config.latency, Duration::ZERO);
        assert!(config.defaulted.contains(&"CONTACTS_ADDR"));
    }

    #[test]
    fn reads_overrides() {
        let config = config_from(&[
            ("CONTACTS_ADDR", "0.0.0.0:8080"),
            ("CONTACTS_DATA_FILE", "/tmp/contacts.ron"),
            ("CONTACTS_LOG", "both"),
            ("CONTACTS_LOG_LEVEL", "debug"),
            ("CONTACTS_SEED", "false"),
            ("CONTACTS_LATENCY_MS", "250"),
        ])
        .unwrap();

        assert_eq!(config.addr.port(), 8080);
        assert_eq!(config.data_file, Some(PathBuf::from("/tmp/contacts.ron")));
        assert_eq!(config.log_destination, LogDestination::Both);
        assert_eq!(config.log_level, LevelFilter::Debug);
        assert!(!config.seed);
        assert_eq!(config.latency, Duration::from_millis(250));
        assert!(config.defaulted.is_empty());
    }

    #[test]
    fn rejects_invalid_values() {
        let err = config_from(&[("CONTACTS_SEED", "maybe")]).unwrap_err();

        match err {
            ConfigError::Invalid { key, value, .. } => {
                assert_eq!(key, "CONTACTS_SEED");
                assert_eq!(value, "maybe");
            }
        }
    }
}
