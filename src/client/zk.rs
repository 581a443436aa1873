//! ZooKeeper-backed tree client

use super::servers::ServerList;
use super::TreeClient;
use crate::error::{ClientError, ClientResult};
use crate::types::{Listing, NodeData, NodeStat};
use std::fmt;
use std::time::Duration;
use tracing::{debug, info, trace, warn};
use zookeeper::{Stat, WatchedEvent, ZkError, ZooKeeper};

/// Session timeout used unless the builder is told otherwise
pub const DEFAULT_SESSION_TIMEOUT: Duration = Duration::from_secs(10);

/// Scheme-based credential attached to a session before any walk
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    pub scheme: String,
    pub payload: Vec<u8>,
}

impl Credential {
    pub fn new(scheme: impl Into<String>, payload: impl Into<Vec<u8>>) -> Self {
        Self {
            scheme: scheme.into(),
            payload: payload.into(),
        }
    }

    /// `digest` credential from a `user:password` pair
    pub fn digest(user_password: &str) -> Self {
        Self::new("digest", user_password.as_bytes())
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("scheme", &self.scheme)
            .field("payload", &"<redacted>")
            .finish()
    }
}

/// Builder for ZooKeeper sessions
pub struct ZkClientBuilder {
    servers: ServerList,
    timeout: Duration,
    credential: Option<Credential>,
}

impl ZkClientBuilder {
    pub fn new(servers: ServerList) -> Self {
        Self {
            servers,
            timeout: DEFAULT_SESSION_TIMEOUT,
            credential: None,
        }
    }

    /// Set session timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Attach `credential` right after the session is established
    pub fn credential(mut self, credential: Credential) -> Self {
        self.credential = Some(credential);
        self
    }

    /// Establish the session and attach the credential, if any
    ///
    /// A failed credential closes the session before the error is returned.
    pub fn connect(self) -> ClientResult<ZkClient> {
        let connect_string = self.servers.to_connect_string();
        info!(servers = %connect_string, timeout = ?self.timeout, "Connecting to ZooKeeper");

        let zk = ZooKeeper::connect(&connect_string, self.timeout, |event: WatchedEvent| {
            trace!("Session event: {:?}", event);
        })
        .map_err(|e| ClientError::ConnectionFailed {
            servers: connect_string.clone(),
            reason: e.to_string(),
        })?;

        let client = ZkClient {
            zk,
            servers: self.servers,
        };

        match self.credential {
            Some(credential) => attach_credential(client, &credential),
            None => Ok(client),
        }
    }
}

/// Attach `credential` to an open session, closing it if the server refuses
pub fn attach_credential<C: TreeClient>(client: C, credential: &Credential) -> ClientResult<C> {
    if let Err(e) = client.add_auth(&credential.scheme, &credential.payload) {
        client.close();
        return Err(e);
    }
    debug!(scheme = %credential.scheme, "Credential attached");
    Ok(client)
}

/// Tree client over a live ZooKeeper session
pub struct ZkClient {
    zk: ZooKeeper,
    servers: ServerList,
}

impl ZkClient {
    /// Connect with default settings and no credential
    pub fn connect(servers: ServerList) -> ClientResult<Self> {
        ZkClientBuilder::new(servers).connect()
    }

    pub fn servers(&self) -> &ServerList {
        &self.servers
    }
}

impl TreeClient for ZkClient {
    fn get(&self, path: &str) -> ClientResult<NodeData> {
        let (data, stat) = self
            .zk
            .get_data(path, false)
            .map_err(|e| map_zk_error(path, e))?;
        Ok(NodeData {
            data,
            stat: stat.into(),
        })
    }

    fn children(&self, path: &str) -> ClientResult<Listing> {
        let names = self
            .zk
            .get_children(path, false)
            .map_err(|e| map_zk_error(path, e))?;
        Ok(Listing::new(names))
    }

    fn add_auth(&self, scheme: &str, payload: &[u8]) -> ClientResult<()> {
        self.zk
            .add_auth(scheme, payload.to_vec())
            .map_err(|e| ClientError::AuthFailed {
                scheme: scheme.to_string(),
                reason: e.to_string(),
            })
    }

    fn close(&self) {
        if let Err(e) = self.zk.close() {
            warn!("Failed to close ZooKeeper session: {}", e);
        }
    }
}

impl From<Stat> for NodeStat {
    fn from(stat: Stat) -> Self {
        Self {
            czxid: stat.czxid,
            mzxid: stat.mzxid,
            ctime: stat.ctime,
            mtime: stat.mtime,
            version: stat.version,
            cversion: stat.cversion,
            aversion: stat.aversion,
            ephemeral_owner: stat.ephemeral_owner,
            data_length: stat.data_length,
            num_children: stat.num_children,
            pzxid: stat.pzxid,
        }
    }
}

fn map_zk_error(path: &str, err: ZkError) -> ClientError {
    match err {
        ZkError::NoNode => ClientError::NotFound {
            path: path.to_string(),
        },
        ZkError::NoAuth => ClientError::PermissionDenied {
            path: path.to_string(),
        },
        other => ClientError::Protocol {
            path: path.to_string(),
            message: other.to_string(),
        },
    }
}
