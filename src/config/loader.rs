//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the service
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::ServiceConfig;

/// Loads and provides access to the service configuration.
///
/// # File Format
///
/// ```text
/// bind_address: "127.0.0.1:3000"
/// log_filter: "info"
/// include_audit_trace: true
/// ```
///
/// # Example
///
/// ```no_run
/// use net_salary_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/service.yaml")?;
/// println!("Log filter: {}", loader.config().log_filter);
/// # Ok::<(), net_salary_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: ServiceConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - The file does not exist or cannot be read (`ConfigNotFound`)
    /// - The file contains invalid YAML, an unknown key or an unparseable
    ///   bind address (`ConfigParseError`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::from_yaml(&content, &path_str)
    }

    /// Loads configuration from `path`, or falls back to the defaults when
    /// the file does not exist.
    ///
    /// A file that exists but fails to parse is still an error.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// Parses configuration from YAML text. `source` names the origin of
    /// the text in error messages.
    pub fn from_yaml(content: &str, source: &str) -> EngineResult<Self> {
        let config =
            serde_yaml::from_str::<ServiceConfig>(content).map_err(|e| {
                EngineError::ConfigParseError {
                    path: source.to_string(),
                    message: e.to_string(),
                }
            })?;

        Ok(Self { config })
    }

    /// Creates a loader around an already built configuration.
    pub fn from_config(config: ServiceConfig) -> Self {
        Self { config }
    }

    /// Returns the loaded service configuration.
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }
}
