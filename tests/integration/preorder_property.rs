//! Property-based tests for walk order and laziness

use proptest::prelude::*;
use proptest::sample::Index;
use zkwalker::error::WalkResult;
use zkwalker::{AllChildren, MemoryTree, NodeReader, Visit, Walker};

/// Random tree: node 0 is the root, node `i` hangs under an earlier node
struct Shape {
    paths: Vec<String>,
    children: Vec<Vec<usize>>,
}

impl Shape {
    fn from_parents(parents: &[Index]) -> Self {
        let mut paths = vec!["/".to_string()];
        let mut children = vec![Vec::new()];
        for (i, parent) in parents.iter().enumerate() {
            let id = i + 1;
            let parent = parent.index(id);
            let path = if parent == 0 {
                format!("/n{}", id)
            } else {
                format!("{}/n{}", paths[parent], id)
            };
            paths.push(path);
            children.push(Vec::new());
            children[parent].push(id);
        }
        Self { paths, children }
    }

    fn to_tree(&self) -> MemoryTree {
        let mut tree = MemoryTree::new();
        for (id, path) in self.paths.iter().enumerate() {
            let names: Vec<String> = self.children[id].iter().map(|c| format!("n{}", c)).collect();
            let names: Vec<&str> = names.iter().map(String::as_str).collect();
            tree = tree.node(path, path.as_bytes(), &names);
        }
        tree
    }

    fn preorder(&self) -> Vec<String> {
        let mut out = Vec::new();
        self.collect(0, &mut out);
        out
    }

    fn collect(&self, id: usize, out: &mut Vec<String>) {
        out.push(self.paths[id].clone());
        for &child in &self.children[id] {
            self.collect(child, out);
        }
    }
}

/// Test that unfiltered walks visit nodes in pre-order without reading content
#[test]
fn test_preorder_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(
            &prop::collection::vec(any::<Index>(), 0..40),
            |parents| {
                let shape = Shape::from_parents(&parents);
                let tree = shape.to_tree();
                let walker = Walker::new(&tree);
                let mut visited = Vec::new();
                let mut record = |path: &str, _: &NodeReader<'_>| -> WalkResult<Visit> {
                    visited.push(path.to_string());
                    Ok(Visit::Descend)
                };

                walker.walk("/", &mut record, &mut AllChildren).unwrap();

                let expected = shape.preorder();
                prop_assert_eq!(&visited, &expected);
                prop_assert_eq!(tree.list_calls(), expected);
                prop_assert!(tree.get_calls().is_empty());
                Ok(())
            },
        )
        .unwrap();
}

/// Test that exactly the nodes whose processor reads are fetched, once each
#[test]
fn test_laziness_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(
            &(prop::collection::vec(any::<Index>(), 0..40), any::<u64>()),
            |(parents, mask)| {
                let shape = Shape::from_parents(&parents);
                let tree = shape.to_tree();
                let walker = Walker::new(&tree);
                let mut position = 0usize;
                let mut read_some = |_: &str, node: &NodeReader<'_>| -> WalkResult<Visit> {
                    if mask >> (position % 64) & 1 == 1 {
                        let data = node.read()?;
                        assert_eq!(data.data, node.path().as_bytes());
                    }
                    position += 1;
                    Ok(Visit::Descend)
                };

                walker.walk("/", &mut read_some, &mut AllChildren).unwrap();

                let expected: Vec<String> = shape
                    .preorder()
                    .into_iter()
                    .enumerate()
                    .filter(|(i, _)| mask >> (i % 64) & 1 == 1)
                    .map(|(_, path)| path)
                    .collect();
                prop_assert_eq!(tree.get_calls(), expected);
                Ok(())
            },
        )
        .unwrap();
}
