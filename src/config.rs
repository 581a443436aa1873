//! Configuration System
//!
//! Layered configuration: built-in defaults, the global config file, an
//! explicit `--config` file and `ZKWALKER__SECTION__KEY` environment variables,
//! in increasing precedence. Command-line flags are applied on top by the CLI.

use crate::error::ConfigError;
use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

mod merge;
mod sources;

pub use sources::global_file::global_config_path;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Session settings
    #[serde(default)]
    pub connection: ConnectionConfig,

    /// Walk settings
    #[serde(default)]
    pub walk: WalkConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Session settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionConfig {
    /// Session timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Scheme used for the `--auth` credential
    #[serde(default = "default_auth_scheme")]
    pub auth_scheme: String,
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_auth_scheme() -> String {
    "digest".to_string()
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            auth_scheme: default_auth_scheme(),
        }
    }
}

impl ConnectionConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Walk settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WalkConfig {
    /// Znode the walk starts from
    #[serde(default = "default_root")]
    pub root: String,

    /// Print znode content under each path
    #[serde(default)]
    pub print_content: bool,
}

fn default_root() -> String {
    "/".to_string()
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            print_content: false,
        }
    }
}

impl AppConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.connection.timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "connection.timeout_secs must be greater than 0".to_string(),
            ));
        }
        if self.connection.auth_scheme.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "connection.auth_scheme cannot be empty".to_string(),
            ));
        }
        if !self.walk.root.starts_with('/') {
            return Err(ConfigError::Invalid(format!(
                "walk.root must be an absolute znode path, got '{}'",
                self.walk.root
            )));
        }
        Ok(())
    }
}

/// Loads [`AppConfig`] from its layered sources
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load defaults, global file, `explicit` file (required when given) and
    /// environment overrides
    pub fn load(explicit: Option<&Path>) -> Result<AppConfig, ConfigError> {
        let mut builder = merge::merge_policy::builder_with_defaults()?;
        builder = sources::global_file::add_to_builder(builder)?;
        if let Some(path) = explicit {
            builder = sources::explicit_file::add_to_builder(builder, path)?;
        }
        builder = sources::environment::add_to_builder(builder);

        let config = builder.build()?.try_deserialize::<AppConfig>()?;
        Ok(config)
    }

    /// Load defaults plus a single file, ignoring global file and environment
    pub fn load_from_file(path: &Path) -> Result<AppConfig, ConfigError> {
        let builder = merge::merge_policy::builder_with_defaults()?;
        let builder = sources::explicit_file::add_to_builder(builder, path)?;

        let config = builder.build()?.try_deserialize::<AppConfig>()?;
        Ok(config)
    }
}
