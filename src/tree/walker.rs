//! Depth-first znode walker

use crate::client::TreeClient;
use crate::error::WalkResult;
use crate::policy::{ChildrenProcessor, NodeProcessor, Visit};
use crate::tree::path;
use crate::tree::reader::NodeReader;
use std::vec;
use tracing::{debug, trace};

/// Children selected for a node that are still waiting to be walked
struct Pending {
    parent: String,
    children: vec::IntoIter<String>,
}

/// Walks a znode tree over a [`TreeClient`]
pub struct Walker<C> {
    client: C,
}

impl<C: TreeClient> Walker<C> {
    /// Create a new walker over the given client
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// Client the walker reads from
    pub fn client(&self) -> &C {
        &self.client
    }

    /// Release the underlying client. The walker is consumed.
    pub fn close(self) {
        self.client.close();
    }

    /// Walk the tree rooted at `root` in pre-order
    ///
    /// For every visited node `node_processor` runs first; unless it asks to
    /// skip the subtree, the node's children are listed once and handed to
    /// `children_processor`, and each selected child is walked in order
    /// before the next sibling starts. The first error returned by either
    /// processor ends the walk and is returned unchanged.
    ///
    /// Pending siblings live on an explicit stack, so tree depth is not bounded
    /// by the call stack.
    pub fn walk<N, K>(
        &self,
        root: &str,
        node_processor: &mut N,
        children_processor: &mut K,
    ) -> WalkResult<()>
    where
        N: NodeProcessor + ?Sized,
        K: ChildrenProcessor + ?Sized,
    {
        let root = path::normalize(root);
        debug!(root = %root, "Starting walk");

        let mut stack: Vec<Pending> = Vec::new();
        if let Some(children) = self.visit(&root, node_processor, children_processor)? {
            stack.push(Pending {
                parent: root,
                children: children.into_iter(),
            });
        }

        while let Some(top) = stack.last_mut() {
            let Some(name) = top.children.next() else {
                stack.pop();
                continue;
            };

            let child = path::join(&top.parent, &name);
            if let Some(children) = self.visit(&child, node_processor, children_processor)? {
                stack.push(Pending {
                    parent: child,
                    children: children.into_iter(),
                });
            }
        }

        debug!("Walk finished");
        Ok(())
    }

    /// Enter a single node. `None` means the subtree is skipped.
    fn visit<N, K>(
        &self,
        path: &str,
        node_processor: &mut N,
        children_processor: &mut K,
    ) -> WalkResult<Option<Vec<String>>>
    where
        N: NodeProcessor + ?Sized,
        K: ChildrenProcessor + ?Sized,
    {
        trace!(path = %path, "Visiting znode");

        let reader = NodeReader::new(&self.client, path);
        if node_processor.process(path, &reader)? == Visit::SkipChildren {
            trace!(path = %path, "Subtree skipped");
            return Ok(None);
        }

        let listing = self.client.children(path);
        let selected = children_processor.select(path, listing)?;
        Ok(Some(selected))
    }
}
