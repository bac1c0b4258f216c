//! Configuration handling for the application.
//!
//! Everything is read from environment variables with sensible development
//! defaults, so the binary runs with no setup. `Config::from_env` performs
//! the loading and validates the numeric knobs.

use std::env;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Duration;

/// Environment variable names. Keeping them public lets tests refer to them.
pub const ENV_BIND_ADDR: &str = "BIND_ADDR";
pub const ENV_SUMMARY_SENTENCES: &str = "SUMMARY_SENTENCES";
pub const ENV_FETCH_TIMEOUT_SECS: &str = "FETCH_TIMEOUT_SECS";

/// Default development values used when environment variables are absent.
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";
const DEFAULT_SUMMARY_SENTENCES: usize = 5;
const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 30;

/// Application runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    bind_addr: String,
    summary_sentences: usize,
    fetch_timeout_secs: u64,
}

impl Config {
    /// Create a new config explicitly.
    pub fn new(
        bind_addr: impl Into<String>,
        summary_sentences: usize,
        fetch_timeout_secs: u64,
    ) -> Self {
        Self {
            bind_addr: bind_addr.into(),
            summary_sentences,
            fetch_timeout_secs,
        }
    }

    /// Load from environment variables, falling back to development defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let bind_addr = env::var(ENV_BIND_ADDR).unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());

        let summary_sentences =
            parse_env(ENV_SUMMARY_SENTENCES, DEFAULT_SUMMARY_SENTENCES)?;
        if summary_sentences == 0 {
            return Err(ConfigError::InvalidValue {
                field: ENV_SUMMARY_SENTENCES,
                reason: "must be at least 1".to_string(),
            });
        }

        let fetch_timeout_secs = parse_env(ENV_FETCH_TIMEOUT_SECS, DEFAULT_FETCH_TIMEOUT_SECS)?;
        if fetch_timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: ENV_FETCH_TIMEOUT_SECS,
                reason: "must be at least 1".to_string(),
            });
        }

        Ok(Self {
            bind_addr,
            summary_sentences,
            fetch_timeout_secs,
        })
    }

    /// TCP bind address (host:port) for the HTTP server.
    pub fn bind_addr(&self) -> &str {
        &self.bind_addr
    }
    /// Number of sentences the extractive summary is limited to.
    pub fn summary_sentences(&self) -> usize {
        self.summary_sentences
    }
    /// Overall deadline for one page fetch.
    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }
}

impl Default for Config {
    /// Development defaults (mirrors `from_env` with no env overrides).
    fn default() -> Self {
        Self::new(
            DEFAULT_BIND_ADDR,
            DEFAULT_SUMMARY_SENTENCES,
            DEFAULT_FETCH_TIMEOUT_SECS,
        )
    }
}

fn parse_env<T: std::str::FromStr>(field: &'static str, default: T) -> Result<T, ConfigError>
where
    T::Err: Display,
{
    match env::var(field) {
        Ok(raw) => raw.parse::<T>().map_err(|e| ConfigError::InvalidValue {
            field,
            reason: e.to_string(),
        }),
        Err(_) => Ok(default),
    }
}

/// Errors that can occur while building a configuration.
#[derive(Debug)]
pub enum ConfigError {
    InvalidValue { field: &'static str, reason: String },
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

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Ensure environment-variable manipulating tests run serially.
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn clear_env() {
        for key in [ENV_BIND_ADDR, ENV_SUMMARY_SENTENCES, ENV_FETCH_TIMEOUT_SECS] {
            unsafe {
                env::remove_var(key);
            }
        }
    }

    #[test]
    fn defaults_when_env_missing() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let cfg = Config::from_env().unwrap();
        assert_eq!(cfg.bind_addr(), super::DEFAULT_BIND_ADDR);
        assert_eq!(cfg.summary_sentences(), super::DEFAULT_SUMMARY_SENTENCES);
        assert_eq!(
            cfg.fetch_timeout(),
            Duration::from_secs(super::DEFAULT_FETCH_TIMEOUT_SECS)
        );
    }

    #[test]
    fn overrides_when_env_present() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        unsafe {
            env::set_var(ENV_BIND_ADDR, "0.0.0.0:9000");
            env::set_var(ENV_SUMMARY_SENTENCES, "3");
            env::set_var(ENV_FETCH_TIMEOUT_SECS, "10");
        }
        let cfg = Config::from_env().unwrap();
        assert_eq!(cfg.bind_addr(), "0.0.0.0:9000");
        assert_eq!(cfg.summary_sentences(), 3);
        assert_eq!(cfg.fetch_timeout(), Duration::from_secs(10));
        clear_env();
    }

    #[test]
    fn rejects_zero_summary_sentences() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        unsafe {
            env::set_var(ENV_SUMMARY_SENTENCES, "0");
        }
        let err = Config::from_env().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue {
                field: ENV_SUMMARY_SENTENCES,
                ..
            }
        ));
        clear_env();
    }

    #[test]
    fn rejects_zero_fetch_timeout() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        unsafe {
            env::set_var(ENV_FETCH_TIMEOUT_SECS, "0");
        }
        let err = Config::from_env().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue {
                field: ENV_FETCH_TIMEOUT_SECS,
                ..
            }
        ));
        clear_env();
    }

    #[test]
    fn rejects_non_numeric_fetch_timeout() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        unsafe {
            env::set_var(ENV_FETCH_TIMEOUT_SECS, "soon");
        }
        assert!(Config::from_env().is_err());
        clear_env();
    }
}
