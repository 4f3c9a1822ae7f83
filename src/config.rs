//! # Application Configuration Module
//!
//! Runtime configuration with compiled-in defaults and environment
//! overrides. Anything unset or unusable in the environment falls back to
//! its default rather than failing startup.

use tracing::warn;

use crate::search::DEFAULT_PAGE_SIZE;

// Constants for application configuration
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000/api";
pub const DEFAULT_DATA_DIR: &str = ".souschef";

/// Runtime configuration for the application
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL of the recipe service
    pub api_base_url: String,
    /// Directory persisted data lives under
    pub data_dir: String,
    /// Search results shown per page
    pub page_size: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            data_dir: DEFAULT_DATA_DIR.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl AppConfig {
    /// Build the configuration from `SOUSCHEF_API_URL`, `SOUSCHEF_DATA_DIR`
    /// and `SOUSCHEF_PAGE_SIZE`, defaulting whatever is unset
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let page_size = match std::env::var("SOUSCHEF_PAGE_SIZE") {
            Ok(raw) => match raw.parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => {
                    warn!(value = %raw, "Ignoring unusable SOUSCHEF_PAGE_SIZE");
                    defaults.page_size
                }
            },
            Err(_) => defaults.page_size,
        };

        Self {
            api_base_url: std::env::var("SOUSCHEF_API_URL").unwrap_or(defaults.api_base_url),
            data_dir: std::env::var("SOUSCHEF_DATA_DIR").unwrap_or(defaults.data_dir),
            page_size,
        }
    }
}
