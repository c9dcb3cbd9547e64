use std::str::FromStr;
use thiserror::Error;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_MAX_PAYLOAD_BYTES: usize = 256 * 1024;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {var}: {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// `None` keeps actix-web's default of one worker per physical core.
    pub workers: Option<usize>,
    pub max_payload_bytes: usize,
    pub log_level: log::LevelFilter,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST")
            .filter(|h| !h.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = parse_var(&lookup, "PORT")?.unwrap_or(DEFAULT_PORT);

        let workers = parse_var::<usize, _>(&lookup, "WORKERS")?;
        if let Some(0) = workers {
            return Err(ConfigError::Invalid {
                var: "WORKERS",
                value: "0".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }

        let max_payload_bytes =
            parse_var(&lookup, "MAX_PAYLOAD_BYTES")?.unwrap_or(DEFAULT_MAX_PAYLOAD_BYTES);
        let log_level = parse_var(&lookup, "LOG_LEVEL")?.unwrap_or(log::LevelFilter::Info);

        Ok(Self {
            host,
            port,
            workers,
            max_payload_bytes,
            log_level,
        })
    }
}

fn parse_var<T, F>(lookup: &F, var: &'static str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(var) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e| ConfigError::Invalid {
                var,
                value: raw.clone(),
                reason: e.to_string(),
            }),
    }
}
