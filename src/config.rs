use crate::modules::session::use_cases::controller::SessionTimings;
use dotenvy::dotenv;
use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key}={value:?} is invalid: {reason}")]
    Invalid {
        key: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    File,
    Memory,
}

impl FromStr for StorageBackend {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "file" => Ok(StorageBackend::File),
            "memory" => Ok(StorageBackend::Memory),
            _ => Err("expected `file` or `memory`".to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub storage: StorageBackend,
    pub data_dir: PathBuf,
    pub auto_logout_after: Duration,
    pub sync_delay: Duration,
    pub admin_login_delay: Duration,
    pub employee_login_delay: Duration,
    pub default_theme: String,
    pub start_online: bool,
}

impl Default for Config {
    fn default() -> Self {
        let timings = SessionTimings::default();
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            storage: StorageBackend::File,
            data_dir: PathBuf::from("./data"),
            auto_logout_after: timings.auto_logout_after,
            sync_delay: Duration::from_millis(100),
            admin_login_delay: timings.admin_login_delay,
            employee_login_delay: timings.employee_login_delay,
            default_theme: "green".to_string(),
            start_online: true,
        }
    }
}

impl Config {
    /// Reads `TIME_CLOCK_*` variables, loading `.env` first when present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Ok(Self {
            bind_addr: parsed(&lookup, "TIME_CLOCK_BIND_ADDR")?.unwrap_or(defaults.bind_addr),
            storage: parsed(&lookup, "TIME_CLOCK_STORAGE")?.unwrap_or(defaults.storage),
            data_dir: lookup("TIME_CLOCK_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.data_dir),
            auto_logout_after: parsed(&lookup, "TIME_CLOCK_AUTO_LOGOUT_SECS")?
                .map(Duration::from_secs)
                .unwrap_or(defaults.auto_logout_after),
            sync_delay: millis(&lookup, "TIME_CLOCK_SYNC_DELAY_MS")?.unwrap_or(defaults.sync_delay),
            admin_login_delay: millis(&lookup, "TIME_CLOCK_ADMIN_LOGIN_DELAY_MS")?
                .unwrap_or(defaults.admin_login_delay),
            employee_login_delay: millis(&lookup, "TIME_CLOCK_EMPLOYEE_LOGIN_DELAY_MS")?
                .unwrap_or(defaults.employee_login_delay),
            default_theme: lookup("TIME_CLOCK_DEFAULT_THEME").unwrap_or(defaults.default_theme),
            start_online: parsed(&lookup, "TIME_CLOCK_START_ONLINE")?
                .unwrap_or(defaults.start_online),
        })
    }

    pub fn session_timings(&self) -> SessionTimings {
        SessionTimings {
            admin_login_delay: self.admin_login_delay,
            employee_login_delay: self.employee_login_delay,
            auto_logout_after: self.auto_logout_after,
        }
    }
}

fn parsed<F, T>(lookup: &F, key: &str) -> Result<Option<T>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: ToString,
{
    let Some(value) = lookup(key) else {
        return Ok(None);
    };
    let result = value.trim().parse::<T>();
    result
        .map(Some)
        .map_err(|error: T::Err| ConfigError::Invalid {
            key: key.to_string(),
            value,
            reason: error.to_string(),
        })
}

fn millis<F>(lookup: &F, key: &str) -> Result<Option<Duration>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    Ok(parsed(lookup, key)?.map(Duration::from_millis))
}

#[cfg(test)]
mod config_tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[rstest]
    fn it_should_fall_back_to_defaults() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.bind_addr.to_string(), "0.0.0.0:8080");
        assert_eq!(config.session_timings(), SessionTimings::default());
        assert_eq!(config.sync_delay, Duration::from_millis(100));
    }

    #[rstest]
    fn it_should_read_every_variable() {
        let config = Config::from_lookup(lookup_from(&[
            ("TIME_CLOCK_BIND_ADDR", "127.0.0.1:3000"),
            ("TIME_CLOCK_STORAGE", "Memory"),
            ("TIME_CLOCK_DATA_DIR", "/var/lib/time-clock"),
            ("TIME_CLOCK_AUTO_LOGOUT_SECS", "45"),
            ("TIME_CLOCK_SYNC_DELAY_MS", "0"),
            ("TIME_CLOCK_ADMIN_LOGIN_DELAY_MS", "10"),
            ("TIME_CLOCK_EMPLOYEE_LOGIN_DELAY_MS", "20"),
            ("TIME_CLOCK_DEFAULT_THEME", "dark"),
            ("TIME_CLOCK_START_ONLINE", "false"),
        ]))
        .unwrap();

        assert_eq!(config.bind_addr.port(), 3000);
        assert_eq!(config.storage, StorageBackend::Memory);
        assert_eq!(config.data_dir, PathBuf::from("/var/lib/time-clock"));
        assert_eq!(config.auto_logout_after, Duration::from_secs(45));
        assert_eq!(config.sync_delay, Duration::ZERO);
        assert_eq!(config.admin_login_delay, Duration::from_millis(10));
        assert_eq!(config.employee_login_delay, Duration::from_millis(20));
        assert_eq!(config.default_theme, "dark");
        assert!(!config.start_online);
    }

    #[rstest]
    #[case("TIME_CLOCK_BIND_ADDR", "localhost")]
    #[case("TIME_CLOCK_STORAGE", "postgres")]
    #[case("TIME_CLOCK_AUTO_LOGOUT_SECS", "-1")]
    #[case("TIME_CLOCK_START_ONLINE", "yes")]
    fn invalid_values_should_be_errors(#[case] key: &str, #[case] value: &str) {
        let error = Config::from_lookup(lookup_from(&[(key, value)])).unwrap_err();
        let ConfigError::Invalid { key: bad_key, value: bad_value, .. } = error;
        assert_eq!(bad_key, key);
        assert_eq!(bad_value, value);
    }
}
