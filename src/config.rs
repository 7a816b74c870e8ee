//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `BEHIND_PROXY` - Read client IP from forwarding headers (default: `false`)
//! - `FETCH_TIMEOUT_SECONDS` - Timeout for retrieving a scan target (default: 30)
//! - `FETCH_MAX_BYTES` - Maximum response body size accepted from a target (default: 10 MiB)
//! - `FETCH_RETRIES` - Retries for transient fetch failures (default: 2)
//! - `ALLOW_PRIVATE_TARGETS` - Permit scans of loopback/private addresses (default: `false`)

use anyhow::Result;
use std::env;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// When true, rate limiting reads client IP from X-Forwarded-For / X-Real-IP headers.
    /// Enable only when the service is behind a trusted reverse proxy.
    pub behind_proxy: bool,
    /// Timeout in seconds for retrieving a scan target.
    pub fetch_timeout_seconds: u64,
    /// Maximum response body size in bytes accepted from a scan target.
    pub fetch_max_bytes: u64,
    /// Number of retries for transient fetch failures.
    pub fetch_retries: usize,
    /// When true, URLs resolving to loopback or private address literals may be scanned.
    pub allow_private_targets: bool,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> Self {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let behind_proxy = env::var("BEHIND_PROXY")
            .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
            .unwrap_or(false);

        let fetch_timeout_seconds = env::var("FETCH_TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(30);

        let fetch_max_bytes = env::var("FETCH_MAX_BYTES")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10 * 1024 * 1024);

        let fetch_retries = env::var("FETCH_RETRIES")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(2);

        let allow_private_targets = env::var("ALLOW_PRIVATE_TARGETS")
            .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
            .unwrap_or(false);

        Self {
            listen_addr,
            log_level,
            log_format,
            behind_proxy,
            fetch_timeout_seconds,
            fetch_max_bytes,
            fetch_retries,
            allow_private_targets,
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is invalid
    /// - fetch limits are out of range
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.fetch_timeout_seconds == 0 || self.fetch_timeout_seconds > 300 {
            anyhow::bail!(
                "FETCH_TIMEOUT_SECONDS must be between 1 and 300, got {}",
                self.fetch_timeout_seconds
            );
        }

        if self.fetch_max_bytes < 1024 {
            anyhow::bail!(
                "FETCH_MAX_BYTES must be at least 1024, got {}",
                self.fetch_max_bytes
            );
        }

        if self.fetch_retries > 10 {
            anyhow::bail!("FETCH_RETRIES must be at most 10, got {}", self.fetch_retries);
        }

        Ok(())
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!("  Behind proxy: {}", self.behind_proxy);
        tracing::info!("  Fetch timeout: {}s", self.fetch_timeout_seconds);
        tracing::info!("  Fetch max bytes: {}", self.fetch_max_bytes);
        tracing::info!("  Fetch retries: {}", self.fetch_retries);
        tracing::info!("  Allow private targets: {}", self.allow_private_targets);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env();
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn base_config() -> Config {
        Config {
            listen_addr: "0.0.0.0:3000".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            behind_proxy: false,
            fetch_timeout_seconds: 30,
            fetch_max_bytes: 10 * 1024 * 1024,
            fetch_retries: 2,
            allow_private_targets: false,
        }
    }

    #[test]
    fn test_config_validation() {
        let mut config = base_config();
        assert!(config.validate().is_ok());

        config.log_format = "invalid".to_string();
        assert!(config.validate().is_err());

        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());

        config.listen_addr = "3000".to_string();
        assert!(config.validate().is_err());

        config.listen_addr = "0.0.0.0:3000".to_string();

        config.fetch_timeout_seconds = 0;
        assert!(config.validate().is_err());

        config.fetch_timeout_seconds = 301;
        assert!(config.validate().is_err());

        config.fetch_timeout_seconds = 30;
        config.fetch_max_bytes = 100;
        assert!(config.validate().is_err());
    }

    #[test]
    #[serial]
    fn test_defaults() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::remove_var("LISTEN");
            env::remove_var("LOG_FORMAT");
            env::remove_var("FETCH_TIMEOUT_SECONDS");
            env::remove_var("FETCH_MAX_BYTES");
            env::remove_var("ALLOW_PRIVATE_TARGETS");
        }

        let config = Config::from_env();

        assert_eq!(config.listen_addr, "0.0.0.0:3000");
        assert_eq!(config.log_format, "text");
        assert_eq!(config.fetch_timeout_seconds, 30);
        assert_eq!(config.fetch_max_bytes, 10 * 1024 * 1024);
        assert!(!config.allow_private_targets);
    }

    #[test]
    #[serial]
    fn test_env_overrides() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("LISTEN", "127.0.0.1:8080");
            env::set_var("FETCH_TIMEOUT_SECONDS", "10");
            env::set_var("BEHIND_PROXY", "true");
            env::set_var("ALLOW_PRIVATE_TARGETS", "1");
        }

        let config = Config::from_env();

        assert_eq!(config.listen_addr, "127.0.0.1:8080");
        assert_eq!(config.fetch_timeout_seconds, 10);
        assert!(config.behind_proxy);
        assert!(config.allow_private_targets);

        // Cleanup
        unsafe {
            env::remove_var("LISTEN");
            env::remove_var("FETCH_TIMEOUT_SECONDS");
            env::remove_var("BEHIND_PROXY");
            env::remove_var("ALLOW_PRIVATE_TARGETS");
        }
    }

    #[test]
    #[serial]
    fn test_unparsable_numbers_fall_back_to_defaults() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("FETCH_MAX_BYTES", "lots");
        }

        let config = Config::from_env();
        assert_eq!(config.fetch_max_bytes, 10 * 1024 * 1024);

        unsafe {
            env::remove_var("FETCH_MAX_BYTES");
        }
    }
}
