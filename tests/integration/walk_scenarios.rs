//! Integration tests for walk order, laziness, pruning and filtering

use super::test_utils::{chain_tree, recorder, sample_tree};
use zkwalker::error::{ClientResult, WalkResult};
use zkwalker::types::Listing;
use zkwalker::{AllChildren, NoChildren, NodeReader, PrintPath, Visit, Walker};

/// Test that the walk is depth first and never reads content on its own
#[test]
fn test_walk_is_preorder_depth_first() {
    let tree = sample_tree();
    let walker = Walker::new(&tree);
    let mut visited = Vec::new();

    walker
        .walk("/", &mut recorder(&mut visited), &mut AllChildren)
        .unwrap();

    let expected = vec![
        "/",
        "/foo",
        "/foo/bar",
        "/foo/bar/aaa",
        "/foo/bar/bbb",
        "/foo/baz",
        "/foo/baz/xxx",
        "/foo/baz/yyy",
    ];
    assert_eq!(visited, expected);
    assert_eq!(tree.list_calls(), expected);
    assert!(tree.get_calls().is_empty());
}

/// Test that reading once per node performs exactly one fetch per node
#[test]
fn test_reading_once_fetches_once() {
    let tree = chain_tree();
    let walker = Walker::new(&tree);
    let mut read_once = |_: &str, node: &NodeReader<'_>| -> WalkResult<Visit> {
        node.read()?;
        Ok(Visit::Descend)
    };

    walker.walk("/", &mut read_once, &mut AllChildren).unwrap();

    let expected = vec!["/", "/foo", "/foo/bar", "/foo/bar/aaa"];
    assert_eq!(tree.get_calls(), expected);
    assert_eq!(tree.list_calls(), expected);
}

/// Test that an empty selection stops the walk below the root
#[test]
fn test_empty_selection_lists_root_only() {
    let tree = chain_tree();
    let walker = Walker::new(&tree);
    let mut visited = Vec::new();

    walker
        .walk("/", &mut recorder(&mut visited), &mut NoChildren)
        .unwrap();

    assert_eq!(visited, vec!["/"]);
    assert_eq!(tree.list_calls(), vec!["/"]);
}

/// Test that a skipped node is neither listed nor descended into
#[test]
fn test_skip_children_prunes_subtree() {
    let tree = sample_tree();
    let walker = Walker::new(&tree);
    let mut visited = Vec::new();
    let mut prune_bar = |path: &str, _: &NodeReader<'_>| -> WalkResult<Visit> {
        visited.push(path.to_string());
        if path == "/foo/bar" {
            return Ok(Visit::SkipChildren);
        }
        Ok(Visit::Descend)
    };

    walker.walk("/", &mut prune_bar, &mut AllChildren).unwrap();

    assert_eq!(
        visited,
        vec!["/", "/foo", "/foo/bar", "/foo/baz", "/foo/baz/xxx", "/foo/baz/yyy"]
    );
    assert!(!tree.list_calls().contains(&"/foo/bar".to_string()));
}

/// Test that only selected children and their subtrees are visited
#[test]
fn test_filtered_children_only() {
    let tree = sample_tree();
    let walker = Walker::new(&tree);
    let mut visited = Vec::new();
    let mut skip_bar = |_: &str, listing: ClientResult<Listing>| -> WalkResult<Vec<String>> {
        Ok(listing?.names.into_iter().filter(|name| name != "bar").collect())
    };

    walker
        .walk("/", &mut recorder(&mut visited), &mut skip_bar)
        .unwrap();

    assert_eq!(
        visited,
        vec!["/", "/foo", "/foo/baz", "/foo/baz/xxx", "/foo/baz/yyy"]
    );
}

/// Test that children are visited in the order the processor returns them
#[test]
fn test_selection_order_is_respected() {
    let tree = sample_tree();
    let walker = Walker::new(&tree);
    let mut visited = Vec::new();
    let mut reversed = |_: &str, listing: ClientResult<Listing>| -> WalkResult<Vec<String>> {
        Ok(listing?.names.into_iter().rev().collect())
    };

    walker
        .walk("/foo", &mut recorder(&mut visited), &mut reversed)
        .unwrap();

    assert_eq!(
        visited,
        vec!["/foo", "/foo/baz", "/foo/baz/yyy", "/foo/baz/xxx", "/foo/bar", "/foo/bar/bbb", "/foo/bar/aaa"]
    );
}

/// Test that the path printer emits one line per visited znode
#[test]
fn test_print_path_output() {
    let tree = chain_tree();
    let walker = Walker::new(&tree);
    let mut printer = PrintPath::new(Vec::new());

    walker.walk("/", &mut printer, &mut AllChildren).unwrap();

    let output = String::from_utf8(printer.into_inner()).unwrap();
    assert_eq!(output, "/\n/foo\n/foo/bar\n/foo/bar/aaa\n");
}

/// Test that walking twice repeats every remote call
#[test]
fn test_walks_are_stateless() {
    let tree = chain_tree();
    let walker = Walker::new(&tree);
    let mut visited = Vec::new();

    walker
        .walk("/", &mut recorder(&mut visited), &mut AllChildren)
        .unwrap();
    walker
        .walk("/", &mut recorder(&mut visited), &mut AllChildren)
        .unwrap();

    assert_eq!(visited.len(), 8);
    assert_eq!(tree.list_calls().len(), 8);
}
