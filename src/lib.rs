//! zkwalker: depth-first walks over ZooKeeper znode trees
//!
//! The [`tree::Walker`] visits znodes in pre-order over any
//! [`client::TreeClient`]. What happens at each znode, and which children are
//! walked into, is decided by caller-supplied [`policy::NodeProcessor`] and
//! [`policy::ChildrenProcessor`] implementations. Znode content is fetched
//! lazily: only when a node processor asks for it.
//!
//! # Example
//!
//! ```bash
//! # Print every znode path
//! zkwalker zk1:2181,zk2:2181
//!
//! # Print paths and content under /kafka
//! zkwalker --root /kafka --print localhost:2181
//! ```

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod logging;
pub mod policy;
pub mod tree;
pub mod types;

pub use client::{MemoryTree, ServerList, TreeClient, ZkClient, ZkClientBuilder};
pub use error::{ClientError, WalkError};
pub use policy::{
    AllChildren, ChildrenProcessor, NoChildren, NodeProcessor, PrintPath, PrintPathAndContent, Visit,
};
pub use tree::{NodeReader, Walker};
