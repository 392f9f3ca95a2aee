// ABOUTME: Configuration module for the podium application
// ABOUTME: Provides configuration settings and environment variable handling

use crate::build::BuildConfig;
use crate::watch::WatchConfig;
use std::env;
use std::path::PathBuf;

/// Global configuration for the application
pub struct Config {
    pub source_dir: PathBuf,
    pub output_dir: PathBuf,
    pub fetch_timeout_ms: u64,
    pub debounce_ms: u64,
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from("presentations"),
            output_dir: PathBuf::from("dist"),
            fetch_timeout_ms: 10000, // 10 seconds
            debounce_ms: 500,
            port: 8080,
        }
    }
}

impl Config {
    /// Create a new configuration instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let source_dir = env::var("PODIUM_SOURCE_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.source_dir);
        let output_dir = env::var("PODIUM_OUTPUT_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.output_dir);
        let fetch_timeout_ms = env::var("PODIUM_FETCH_TIMEOUT_MS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or(defaults.fetch_timeout_ms);
        let debounce_ms = env::var("PODIUM_DEBOUNCE_MS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or(defaults.debounce_ms);
        let port = env::var("PODIUM_PORT")
            .ok()
            .and_then(|s| s.parse::<u16>().ok())
            .unwrap_or(defaults.port);

        Self {
            source_dir,
            output_dir,
            fetch_timeout_ms,
            debounce_ms,
            port,
        }
    }

    /// Get a build configuration with defaults from this config
    pub fn get_build_config(
        &self,
        source_dir: Option<PathBuf>,
        output_dir: Option<PathBuf>,
    ) -> BuildConfig {
        BuildConfig {
            source_dir: source_dir.unwrap_or_else(|| self.source_dir.clone()),
            output_dir: output_dir.unwrap_or_else(|| self.output_dir.clone()),
        }
    }

    /// Get a watch configuration with defaults from this config
    pub fn get_watch_config(
        &self,
        source_dir: Option<PathBuf>,
        output_dir: Option<PathBuf>,
        serve: bool,
        port: Option<u16>,
        debounce_ms: Option<u64>,
    ) -> WatchConfig {
        WatchConfig {
            source_dir: source_dir.unwrap_or_else(|| self.source_dir.clone()),
            output_dir: output_dir.unwrap_or_else(|| self.output_dir.clone()),
            debounce_ms: debounce_ms.unwrap_or(self.debounce_ms),
            serve,
            port: port.unwrap_or(self.port),
        }
    }
}
