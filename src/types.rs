//! Data carried between the remote client and the walk processors.

/// Znode metadata as reported by the server
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NodeStat {
    /// Zxid of the change that created the znode
    pub czxid: i64,
    /// Zxid of the change that last modified the znode
    pub mzxid: i64,
    /// Creation time in milliseconds since epoch
    pub ctime: i64,
    /// Last modification time in milliseconds since epoch
    pub mtime: i64,
    /// Number of changes to the data
    pub version: i32,
    /// Number of changes to the children
    pub cversion: i32,
    /// Number of changes to the ACL
    pub aversion: i32,
    /// Session id of the owner if ephemeral, 0 otherwise
    pub ephemeral_owner: i64,
    pub data_length: i32,
    pub num_children: i32,
    /// Zxid of the change that last modified the children
    pub pzxid: i64,
}

/// Content of a single znode, fetched on demand
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeData {
    pub data: Vec<u8>,
    pub stat: NodeStat,
}

/// Direct children of a znode
///
/// Names are relative segments in the order the server returned them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Listing {
    pub names: Vec<String>,
    /// Parent metadata, when the backend returns it with the listing
    pub stat: Option<NodeStat>,
}

impl Listing {
    pub fn new(names: Vec<String>) -> Self {
        Self { names, stat: None }
    }
}
