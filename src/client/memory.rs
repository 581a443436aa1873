//! In-memory tree client that records the calls made against it

use super::TreeClient;
use crate::error::{ClientError, ClientResult};
use crate::types::{Listing, NodeData, NodeStat};
use parking_lot::Mutex;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Debug, Clone)]
struct MemoryNode {
    data: Vec<u8>,
    children: Vec<String>,
}

impl MemoryNode {
    fn stat(&self) -> NodeStat {
        NodeStat {
            data_length: self.data.len() as i32,
            num_children: self.children.len() as i32,
            ..NodeStat::default()
        }
    }
}

/// Fixed tree served from memory
///
/// Every `get` and `children` call is recorded in order, including calls that
/// fail, so tests can assert exactly which remote reads a walk performed.
#[derive(Debug, Default)]
pub struct MemoryTree {
    nodes: HashMap<String, MemoryNode>,
    failing_gets: HashSet<String>,
    failing_lists: HashSet<String>,
    failing_auth: bool,
    get_calls: Mutex<Vec<String>>,
    list_calls: Mutex<Vec<String>>,
    credentials: Mutex<Vec<String>>,
    closed: AtomicBool,
}

impl MemoryTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node with its content and ordered child names
    pub fn node(mut self, path: &str, content: impl AsRef<[u8]>, children: &[&str]) -> Self {
        self.nodes.insert(
            path.to_string(),
            MemoryNode {
                data: content.as_ref().to_vec(),
                children: children.iter().map(|c| c.to_string()).collect(),
            },
        );
        self
    }

    /// Make every content fetch of `path` fail
    pub fn fail_get(mut self, path: &str) -> Self {
        self.failing_gets.insert(path.to_string());
        self
    }

    /// Make every children listing of `path` fail
    pub fn fail_children(mut self, path: &str) -> Self {
        self.failing_lists.insert(path.to_string());
        self
    }

    /// Reject every credential
    pub fn fail_auth(mut self) -> Self {
        self.failing_auth = true;
        self
    }

    /// Paths passed to `get`, in call order
    pub fn get_calls(&self) -> Vec<String> {
        self.get_calls.lock().clone()
    }

    /// Paths passed to `children`, in call order
    pub fn list_calls(&self) -> Vec<String> {
        self.list_calls.lock().clone()
    }

    /// Schemes of the credentials attached so far
    pub fn credentials(&self) -> Vec<String> {
        self.credentials.lock().clone()
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }

    fn lookup(&self, path: &str, failing: &HashSet<String>) -> ClientResult<&MemoryNode> {
        if self.is_closed() {
            return Err(ClientError::Closed);
        }
        if failing.contains(path) {
            return Err(ClientError::Protocol {
                path: path.to_string(),
                message: "injected failure".to_string(),
            });
        }
        self.nodes.get(path).ok_or_else(|| ClientError::NotFound {
            path: path.to_string(),
        })
    }
}

impl TreeClient for MemoryTree {
    fn get(&self, path: &str) -> ClientResult<NodeData> {
        self.get_calls.lock().push(path.to_string());
        let node = self.lookup(path, &self.failing_gets)?;
        Ok(NodeData {
            data: node.data.clone(),
            stat: node.stat(),
        })
    }

    fn children(&self, path: &str) -> ClientResult<Listing> {
        self.list_calls.lock().push(path.to_string());
        let node = self.lookup(path, &self.failing_lists)?;
        Ok(Listing {
            names: node.children.clone(),
            stat: Some(node.stat()),
        })
    }

    fn add_auth(&self, scheme: &str, _payload: &[u8]) -> ClientResult<()> {
        if self.is_closed() {
            return Err(ClientError::Closed);
        }
        if self.failing_auth {
            return Err(ClientError::AuthFailed {
                scheme: scheme.to_string(),
                reason: "injected failure".to_string(),
            });
        }
        self.credentials.lock().push(scheme.to_string());
        Ok(())
    }

    fn close(&self) {
        self.closed.store(true, Ordering::SeqCst);
    }
}
