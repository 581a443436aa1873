//! Walk policies
//!
//! A [`NodeProcessor`] runs once per visited znode and decides whether its
//! subtree is walked. A [`ChildrenProcessor`] receives the outcome of the
//! children listing and picks which children to descend into. Returning an
//! error from either stops the whole walk.
//!
//! Closures with the matching signature implement both traits, so ad-hoc
//! policies need no named type.

use crate::error::{ClientResult, WalkResult};
use crate::tree::reader::NodeReader;
use crate::types::Listing;
use std::io::{self, Stdout, Write};
use tracing::warn;

/// What the walker does with a node's subtree after its node processor ran
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visit {
    /// List the children and continue into the selected ones
    Descend,
    /// Treat the node as a leaf: no listing, no descendants
    SkipChildren,
}

/// Called for each visited znode, in pre-order
///
/// `node` is lazy: content is only fetched if the processor calls
/// [`NodeReader::read`], and every call fetches again.
pub trait NodeProcessor {
    fn process(&mut self, path: &str, node: &NodeReader<'_>) -> WalkResult<Visit>;
}

impl<F> NodeProcessor for F
where
    F: FnMut(&str, &NodeReader<'_>) -> WalkResult<Visit>,
{
    fn process(&mut self, path: &str, node: &NodeReader<'_>) -> WalkResult<Visit> {
        self(path, node)
    }
}

/// Picks which children of a znode to walk into
///
/// `listing` is the raw outcome of the children call, failure included; the
/// processor decides whether a failed listing is fatal.
pub trait ChildrenProcessor {
    fn select(&mut self, path: &str, listing: ClientResult<Listing>) -> WalkResult<Vec<String>>;
}

impl<F> ChildrenProcessor for F
where
    F: FnMut(&str, ClientResult<Listing>) -> WalkResult<Vec<String>>,
{
    fn select(&mut self, path: &str, listing: ClientResult<Listing>) -> WalkResult<Vec<String>> {
        self(path, listing)
    }
}

/// Prints each znode path on its own line; never reads content
#[derive(Debug)]
pub struct PrintPath<W: Write = Stdout> {
    out: W,
}

impl PrintPath<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> PrintPath<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> NodeProcessor for PrintPath<W> {
    fn process(&mut self, path: &str, _node: &NodeReader<'_>) -> WalkResult<Visit> {
        writeln!(self.out, "{}", path)?;
        Ok(Visit::Descend)
    }
}

/// Prints each znode path followed by its content on a tab-indented line
///
/// A node whose content can't be read is logged and treated as a leaf. The
/// content line is omitted for empty znodes.
#[derive(Debug)]
pub struct PrintPathAndContent<W: Write = Stdout> {
    out: W,
}

impl PrintPathAndContent<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> PrintPathAndContent<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> NodeProcessor for PrintPathAndContent<W> {
    fn process(&mut self, path: &str, node: &NodeReader<'_>) -> WalkResult<Visit> {
        writeln!(self.out, "{}", path)?;

        let node = match node.read() {
            Ok(node) => node,
            Err(e) => {
                warn!("Can't get {}: {}", path, e);
                return Ok(Visit::SkipChildren);
            }
        };

        if !node.data.is_empty() {
            writeln!(self.out, "\t{}", String::from_utf8_lossy(&node.data))?;
        }
        Ok(Visit::Descend)
    }
}

/// Walks into every listed child, in listing order
///
/// A failed listing is logged and treated as "no children".
#[derive(Debug, Clone, Copy, Default)]
pub struct AllChildren;

impl ChildrenProcessor for AllChildren {
    fn select(&mut self, path: &str, listing: ClientResult<Listing>) -> WalkResult<Vec<String>> {
        match listing {
            Ok(listing) => Ok(listing.names),
            Err(e) => {
                warn!("Can't list children of {}: {}", path, e);
                Ok(Vec::new())
            }
        }
    }
}

/// Never walks into any child
#[derive(Debug, Clone, Copy, Default)]
pub struct NoChildren;

impl ChildrenProcessor for NoChildren {
    fn select(&mut self, _path: &str, _listing: ClientResult<Listing>) -> WalkResult<Vec<String>> {
        Ok(Vec::new())
    }
}
