//! Shared fixtures for walk tests

use zkwalker::error::WalkResult;
use zkwalker::{MemoryTree, NodeReader, Visit};

/// `/` -> foo -> {bar -> {aaa, bbb}, baz -> {xxx, yyy}}
pub fn sample_tree() -> MemoryTree {
    MemoryTree::new()
        .node("/", "", &["foo"])
        .node("/foo", "", &["bar", "baz"])
        .node("/foo/bar", "", &["aaa", "bbb"])
        .node("/foo/bar/aaa", "", &[])
        .node("/foo/bar/bbb", "", &[])
        .node("/foo/baz", "", &["xxx", "yyy"])
        .node("/foo/baz/xxx", "", &[])
        .node("/foo/baz/yyy", "", &[])
}

/// `/` -> foo -> bar -> aaa
pub fn chain_tree() -> MemoryTree {
    MemoryTree::new()
        .node("/", "", &["foo"])
        .node("/foo", "", &["bar"])
        .node("/foo/bar", "", &["aaa"])
        .node("/foo/bar/aaa", "", &[])
}

/// Node processor that records visited paths and never reads content
pub fn recorder(visited: &mut Vec<String>) -> impl FnMut(&str, &NodeReader<'_>) -> WalkResult<Visit> + '_ {
    move |path: &str, _node: &NodeReader<'_>| {
        visited.push(path.to_string());
        Ok(Visit::Descend)
    }
}
