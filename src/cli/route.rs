//! CLI route: run context. Merges flags into configuration, connects and walks.

use crate::cli::parse::Cli;
use crate::client::{Credential, TreeClient, ZkClientBuilder};
use crate::config::{AppConfig, ConfigLoader, WalkConfig};
use crate::error::{AppError, ConfigError, WalkResult};
use crate::logging::LoggingConfig;
use crate::policy::{AllChildren, PrintPath, PrintPathAndContent};
use crate::tree::Walker;
use std::io::Write;
use tracing::{debug, info};

/// Runtime context for one CLI invocation: parsed flags plus the merged
/// configuration. Built with ConfigLoader; flags take precedence.
pub struct RunContext {
    cli: Cli,
    config: AppConfig,
}

impl RunContext {
    /// Load configuration and apply command-line overrides
    pub fn new(cli: Cli) -> Result<Self, ConfigError> {
        let mut config = ConfigLoader::load(cli.config.as_deref())?;
        apply_flags(&cli, &mut config);
        config.validate()?;
        Ok(Self { cli, config })
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn logging_config(&self) -> &LoggingConfig {
        &self.config.logging
    }

    /// Connect, walk from the configured root printing to stdout, and close
    ///
    /// The session is closed whether or not the walk succeeds.
    pub fn execute(&self) -> Result<(), AppError> {
        let mut builder =
            ZkClientBuilder::new(self.cli.servers.clone()).timeout(self.config.connection.timeout());
        if let Some(auth) = self.cli.auth.as_deref().filter(|auth| !auth.is_empty()) {
            builder = builder.credential(Credential::new(
                self.config.connection.auth_scheme.clone(),
                auth.as_bytes(),
            ));
        }

        let walker = Walker::new(builder.connect()?);
        info!(root = %self.config.walk.root, "Connected, starting walk");

        walk_then_close(walker, &self.config.walk, std::io::stdout()).map_err(AppError::from)
    }
}

/// Walk to `out` and close the session whether or not the walk succeeded
fn walk_then_close<C, W>(walker: Walker<C>, walk: &WalkConfig, out: W) -> WalkResult<()>
where
    C: TreeClient,
    W: Write,
{
    let result = walk_to(&walker, walk, out);
    walker.close();
    debug!("Session closed");
    result
}

/// Walk with the built-in printing policies, writing to `out`
///
/// Content is printed under each path when `walk.print_content` is set;
/// every listed child is visited.
pub fn walk_to<C, W>(walker: &Walker<C>, walk: &WalkConfig, out: W) -> WalkResult<()>
where
    C: TreeClient,
    W: Write,
{
    if walk.print_content {
        walker.walk(&walk.root, &mut PrintPathAndContent::new(out), &mut AllChildren)
    } else {
        walker.walk(&walk.root, &mut PrintPath::new(out), &mut AllChildren)
    }
}

/// Apply command-line flags over loaded configuration.
/// Precedence: CLI flags override config file override defaults.
fn apply_flags(cli: &Cli, config: &mut AppConfig) {
    if let Some(ref root) = cli.root {
        config.walk.root = root.clone();
    }
    if cli.print {
        config.walk.print_content = true;
    }
    if let Some(timeout) = cli.timeout {
        config.connection.timeout_secs = timeout;
    }

    if cli.quiet {
        config.logging.level = "off".to_string();
    }
    if cli.verbose {
        config.logging.level = "debug".to_string();
    }
    if let Some(ref level) = cli.log_level {
        config.logging.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        config.logging.format = format.clone();
    }
}
