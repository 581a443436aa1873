//! Lazy node reader handed to node processors

use crate::client::TreeClient;
use crate::error::ClientResult;
use crate::types::NodeData;

/// Deferred content fetch bound to one znode path
///
/// Constructing a reader performs no I/O. Each call to [`NodeReader::read`]
/// is a fresh remote `get`; results are not memoized.
#[derive(Clone, Copy)]
pub struct NodeReader<'a> {
    client: &'a dyn TreeClient,
    path: &'a str,
}

impl<'a> NodeReader<'a> {
    pub fn new(client: &'a dyn TreeClient, path: &'a str) -> Self {
        Self { client, path }
    }

    /// Path this reader is bound to
    pub fn path(&self) -> &'a str {
        self.path
    }

    /// Fetch the node content now
    pub fn read(&self) -> ClientResult<NodeData> {
        self.client.get(self.path)
    }
}

impl std::fmt::Debug for NodeReader<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NodeReader").field("path", &self.path).finish()
    }
}
