//! CLI parse: clap types for zkwalker. No behavior; definitions only.

use crate::client::ServerList;
use clap::Parser;
use std::path::PathBuf;

/// zkwalker CLI - walk a ZooKeeper znode tree depth-first
#[derive(Parser, Debug)]
#[command(name = "zkwalker", version)]
#[command(about = "Walk a ZooKeeper znode tree depth-first, printing every znode path")]
#[command(after_help = "EXAMPLES:\n    \
    zkwalker zk1:2181,zk2:2181\n    \
    zkwalker --root /kafka --print localhost:2181\n    \
    zkwalker --auth admin:secret zk1:2181")]
pub struct Cli {
    /// Comma separated list of ZooKeeper servers to connect to: host1:port1,...,hostN:portN
    #[arg(value_name = "CONNECTION_STRING", value_parser = parse_servers)]
    pub servers: ServerList,

    /// <username:password> to use as a digest ACL
    #[arg(long, value_name = "USER:PASS")]
    pub auth: Option<String>,

    /// Znode from which to start the walk [default: /]
    #[arg(long, value_name = "PATH")]
    pub root: Option<String>,

    /// Print the znode content as string
    #[arg(long)]
    pub print: bool,

    /// Session timeout in seconds [default: 10]
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Configuration file path (TOML)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable logging entirely
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,
}

fn parse_servers(value: &str) -> Result<ServerList, String> {
    ServerList::parse(value).map_err(|e| e.to_string())
}
