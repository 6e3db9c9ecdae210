//! Configuration management with environment variable support.
//!
//! This module provides centralized configuration for authcheck, supporting:
//! - Environment variables for all configurable values
//! - Sensible defaults that match the original hardcoded values
//!
//! # Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `AUTHCHECK_BASE_URL` | Base URL of the application under test | `http://127.0.0.1:8000/` |
//! | `AUTHCHECK_CHROME` | Path to the Chrome/Chromium executable | auto-detect |
//! | `AUTHCHECK_RESULTS_DIR` | Base directory for run artifacts | `./test-results` |
//! | `AUTHCHECK_LOOKUP_WAIT` | Implicit element lookup wait in seconds | `10` |
//! | `AUTHCHECK_SUBMIT_WAIT` | Post-submit marker wait in seconds | `5` |
//!
//! # Example
//!
//! ```bash
//! # Point the harness at a staging deployment
//! export AUTHCHECK_BASE_URL="http://staging.internal:8000/"
//! export AUTHCHECK_RESULTS_DIR="/var/tmp/authcheck-results"
//! ```

use std::env;
use std::sync::OnceLock;
use std::time::Duration;

// ============================================================================
// Default Values (matching original hardcoded values)
// ============================================================================

/// Default base URL of the application under test
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000/";

/// Default base directory for run artifacts
pub const DEFAULT_RESULTS_DIR: &str = "./test-results";

/// Default implicit element lookup wait (seconds)
pub const DEFAULT_LOOKUP_WAIT_SECS: u64 = 10;

/// Default post-submit marker wait (seconds)
pub const DEFAULT_SUBMIT_WAIT_SECS: u64 = 5;

/// Default polling interval for element and marker waits (milliseconds)
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 250;

// ============================================================================
// Environment Variable Names
// ============================================================================

/// Environment variable for the base URL
pub const ENV_BASE_URL: &str = "AUTHCHECK_BASE_URL";

/// Environment variable for the Chrome executable path
pub const ENV_CHROME: &str = "AUTHCHECK_CHROME";

/// Environment variable for the results directory
pub const ENV_RESULTS_DIR: &str = "AUTHCHECK_RESULTS_DIR";

/// Environment variable for the implicit lookup wait
pub const ENV_LOOKUP_WAIT: &str = "AUTHCHECK_LOOKUP_WAIT";

/// Environment variable for the post-submit marker wait
pub const ENV_SUBMIT_WAIT: &str = "AUTHCHECK_SUBMIT_WAIT";

// ============================================================================
// Configuration Getters (with caching)
// ============================================================================

static CONFIG: OnceLock<Config> = OnceLock::new();

/// Get the global configuration (initialized from environment on first access)
pub fn get() -> &'static Config {
    CONFIG.get_or_init(Config::from_env)
}

/// Centralized configuration for authcheck
#[derive(Debug, Clone)]
pub struct Config {
    /// Target application settings
    pub target: TargetSettings,
    /// Results directory settings
    pub results: ResultsSettings,
    /// Wait/timeout settings
    pub waits: WaitSettings,
}

/// Settings describing the application under test
#[derive(Debug, Clone)]
pub struct TargetSettings {
    /// Base URL; page paths are appended to this
    pub base_url: String,
    /// Explicit Chrome/Chromium executable, if the default discovery is wrong
    pub chrome_path: Option<String>,
}

/// Settings for run artifact storage
#[derive(Debug, Clone)]
pub struct ResultsSettings {
    /// Base directory for per-run artifact directories
    pub base_dir: String,
}

/// Wait policy applied to browser interactions
#[derive(Debug, Clone)]
pub struct WaitSettings {
    /// Implicit wait applied to every element lookup
    pub lookup: Duration,
    /// Bounded wait for an expected marker after a form submit
    pub submit: Duration,
    /// Polling interval used inside both waits
    pub poll: Duration,
}

impl Config {
    /// Create configuration from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        Self {
            target: TargetSettings::from_env(),
            results: ResultsSettings::from_env(),
            waits: WaitSettings::from_env(),
        }
    }

    /// Create configuration with all defaults (ignoring environment)
    pub fn defaults() -> Self {
        Self {
            target: TargetSettings::defaults(),
            results: ResultsSettings::defaults(),
            waits: WaitSettings::defaults(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

impl TargetSettings {
    /// Create target settings from environment variables
    pub fn from_env() -> Self {
        Self {
            base_url: env::var(ENV_BASE_URL).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            chrome_path: env::var(ENV_CHROME).ok(),
        }
    }

    /// Create target settings with defaults
    pub fn defaults() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            chrome_path: None,
        }
    }
}

impl ResultsSettings {
    /// Create results settings from environment variables
    pub fn from_env() -> Self {
        Self {
            base_dir: env::var(ENV_RESULTS_DIR).unwrap_or_else(|_| DEFAULT_RESULTS_DIR.to_string()),
        }
    }

    /// Create results settings with defaults
    pub fn defaults() -> Self {
        Self {
            base_dir: DEFAULT_RESULTS_DIR.to_string(),
        }
    }
}

impl WaitSettings {
    /// Create wait settings from environment variables
    pub fn from_env() -> Self {
        Self {
            lookup: Duration::from_secs(
                env::var(ENV_LOOKUP_WAIT)
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(DEFAULT_LOOKUP_WAIT_SECS),
            ),
            submit: Duration::from_secs(
                env::var(ENV_SUBMIT_WAIT)
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(DEFAULT_SUBMIT_WAIT_SECS),
            ),
            poll: Duration::from_millis(DEFAULT_POLL_INTERVAL_MS),
        }
    }

    /// Create wait settings with defaults
    pub fn defaults() -> Self {
        Self {
            lookup: Duration::from_secs(DEFAULT_LOOKUP_WAIT_SECS),
            submit: Duration::from_secs(DEFAULT_SUBMIT_WAIT_SECS),
            poll: Duration::from_millis(DEFAULT_POLL_INTERVAL_MS),
        }
    }
}

/// Get the results base directory (convenience function)
pub fn results_base_dir() -> String {
    get().results.base_dir.clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = Config::defaults();
        assert_eq!(config.target.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.target.chrome_path, None);
        assert_eq!(config.results.base_dir, DEFAULT_RESULTS_DIR);
    }

    #[test]
    fn test_wait_defaults() {
        let waits = WaitSettings::defaults();
        assert_eq!(waits.lookup, Duration::from_secs(DEFAULT_LOOKUP_WAIT_SECS));
        assert_eq!(waits.submit, Duration::from_secs(DEFAULT_SUBMIT_WAIT_SECS));
        assert_eq!(waits.poll, Duration::from_millis(DEFAULT_POLL_INTERVAL_MS));
    }
}
