//! Connection string parsing: `host1:port1,...,hostN:portN`

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// Port used when a server entry does not name one
pub const DEFAULT_PORT: u16 = 2181;

/// Ordered list of `host:port` server addresses
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerList {
    servers: Vec<String>,
}

impl ServerList {
    /// Parse a comma separated server list
    ///
    /// Entries are trimmed; an entry without a port gets [`DEFAULT_PORT`].
    pub fn parse(input: &str) -> Result<Self, ConfigError> {
        let invalid = |reason: String| ConfigError::InvalidServerList {
            input: input.to_string(),
            reason,
        };

        if input.trim().is_empty() {
            return Err(invalid("no servers given".to_string()));
        }

        let mut servers = Vec::new();
        for entry in input.split(',') {
            let entry = entry.trim();
            if entry.is_empty() {
                return Err(invalid("empty server entry".to_string()));
            }

            match entry.rsplit_once(':') {
                Some((host, port)) => {
                    if host.is_empty() {
                        return Err(invalid(format!("missing host in '{}'", entry)));
                    }
                    port.parse::<u16>()
                        .map_err(|_| invalid(format!("invalid port in '{}'", entry)))?;
                    servers.push(entry.to_string());
                }
                None => servers.push(format!("{}:{}", entry, DEFAULT_PORT)),
            }
        }

        Ok(Self { servers })
    }

    /// Servers in the order they were given
    pub fn servers(&self) -> &[String] {
        &self.servers
    }

    /// Connection string as the client library expects it
    pub fn to_connect_string(&self) -> String {
        self.servers.join(",")
    }
}

impl FromStr for ServerList {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for ServerList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_connect_string())
    }
}
