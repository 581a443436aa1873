//! zkwalker CLI Binary
//!
//! Walks a ZooKeeper znode tree and prints one line per znode.
//! Exit status: 0 on success, 1 on runtime failure, 2 on usage errors.

use clap::Parser;
use std::process;
use tracing::{error, info};
use zkwalker::cli::{map_error, Cli, RunContext};
use zkwalker::error::AppError;
use zkwalker::logging::init_logging;

fn main() {
    // Usage errors exit with status 2 from here
    let cli = Cli::parse();

    let context = match RunContext::new(cli) {
        Ok(ctx) => ctx,
        Err(e) => {
            let err: AppError = e.into();
            eprintln!("{}", map_error(&err));
            process::exit(1);
        }
    };

    if let Err(e) = init_logging(context.logging_config()) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    info!("zkwalker starting");

    if let Err(e) = context.execute() {
        error!("Walk failed: {}", e);
        eprintln!("{}", map_error(&e));
        process::exit(1);
    }
}
