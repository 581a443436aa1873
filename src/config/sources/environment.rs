//! Environment source: ZKWALKER__SECTION__KEY, e.g. ZKWALKER__CONNECTION__TIMEOUT_SECS=30

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::Environment;

/// Prefix shared by all configuration environment variables
pub const ENV_PREFIX: &str = "ZKWALKER";

/// Add environment overrides to builder.
///
/// The double underscore separator keeps `ZKWALKER_LOG` and friends, which the
/// logging system reads directly, out of the configuration tree.
pub fn add_to_builder(builder: ConfigBuilder<DefaultState>) -> ConfigBuilder<DefaultState> {
    builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("__")
            .separator("__")
            .try_parsing(true),
    )
}
