//! Merge rules: defaults and override order.

use config::builder::DefaultState;
use config::Config;
use config::ConfigBuilder;
use config::ConfigError;

/// Create a Config builder with merge policy defaults applied.
///
/// Sources added afterwards override these values in the order they are added.
pub fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("connection.timeout_secs", 10)?
        .set_default("connection.auth_scheme", "digest")?
        .set_default("walk.root", "/")?
        .set_default("walk.print_content", false)
}
