//! Remote tree client capability
//!
//! The walker only ever talks to a [`TreeClient`]. [`ZkClient`] is the
//! ZooKeeper-backed implementation; [`MemoryTree`] serves a fixed in-memory
//! tree and records every call made against it.

use crate::error::ClientResult;
use crate::types::{Listing, NodeData};

mod memory;
mod servers;
mod zk;

pub use memory::MemoryTree;
pub use servers::{ServerList, DEFAULT_PORT};
pub use zk::{attach_credential, Credential, ZkClient, ZkClientBuilder, DEFAULT_SESSION_TIMEOUT};

/// Operations the walker needs from a hierarchical key-tree service.
///
/// Every call is an independent blocking round trip; nothing is cached.
pub trait TreeClient {
    /// Fetch the content and metadata of the node at `path`
    fn get(&self, path: &str) -> ClientResult<NodeData>;

    /// List the direct child names of the node at `path`
    fn children(&self, path: &str) -> ClientResult<Listing>;

    /// Attach a credential to the session
    fn add_auth(&self, scheme: &str, payload: &[u8]) -> ClientResult<()>;

    /// Release the session. The client is unusable afterwards.
    fn close(&self);
}

impl<T: TreeClient + ?Sized> TreeClient for &T {
    fn get(&self, path: &str) -> ClientResult<NodeData> {
        (**self).get(path)
    }

    fn children(&self, path: &str) -> ClientResult<Listing> {
        (**self).children(path)
    }

    fn add_auth(&self, scheme: &str, payload: &[u8]) -> ClientResult<()> {
        (**self).add_auth(scheme, payload)
    }

    fn close(&self) {
        (**self).close()
    }
}

impl<T: TreeClient + ?Sized> TreeClient for Box<T> {
    fn get(&self, path: &str) -> ClientResult<NodeData> {
        (**self).get(path)
    }

    fn children(&self, path: &str) -> ClientResult<Listing> {
        (**self).children(path)
    }

    fn add_auth(&self, scheme: &str, payload: &[u8]) -> ClientResult<()> {
        (**self).add_auth(scheme, payload)
    }

    fn close(&self) {
        (**self).close()
    }
}
