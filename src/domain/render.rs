//! Renders a composite tree as a `termtree::Tree`, annotated with values.

use std::collections::HashSet;

use termtree::Tree;
use tracing::instrument;

use crate::domain::arena::{CompositeTree, Node, NodeId};
use crate::domain::error::{DomainError, DomainResult};

pub trait TreeRender {
    fn to_tree_string(&self, root: NodeId, precision: usize) -> DomainResult<Tree<String>>;
}

impl TreeRender for CompositeTree {
    /// Builds the display tree bottom-up without recursion.
    ///
    /// A composite reached a second time (shared or duplicated) is shown once
    /// more as `label [v] (shared)` without repeating its subtree.
    #[instrument(level = "debug", skip(self))]
    fn to_tree_string(&self, root: NodeId, precision: usize) -> DomainResult<Tree<String>> {
        let totals = self.subtotals(root)?;
        let mut expanded: HashSet<NodeId> = HashSet::new();
        let mut work: Vec<(NodeId, Option<usize>)> = vec![(root, None)];
        let mut built: Vec<Tree<String>> = Vec::new();

        while let Some((idx, ready)) = work.pop() {
            let node = self
                .get(idx)
                .ok_or_else(|| DomainError::NodeNotFound(format!("{idx:?}")))?;
            let total = totals.get(&idx).copied().unwrap_or_default();

            match (node, ready) {
                (Node::Leaf(_), _) => {
                    built.push(Tree::new(format!("{} = {:.*}", node.label(), precision, total)));
                }
                (Node::Composite(_), Some(count)) => {
                    let leaves = built.split_off(built.len() - count);
                    let text = format!("{} [{:.*}]", node.label(), precision, total);
                    built.push(Tree::new(text).with_leaves(leaves));
                }
                (Node::Composite(composite), None) => {
                    if !expanded.insert(idx) {
                        built.push(Tree::new(format!(
                            "{} [{:.*}] (shared)",
                            node.label(),
                            precision,
                            total
                        )));
                        continue;
                    }
                    work.push((idx, Some(composite.children().len())));
                    for &child in composite.children().iter().rev() {
                        work.push((child, None));
                    }
                }
            }
        }

        built
            .pop()
            .ok_or_else(|| DomainError::NodeNotFound(format!("{root:?}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_box_with_products_when_rendered_then_lists_values() {
        let mut tree = CompositeTree::new();
        let root = tree.composite("box");
        let a = tree.leaf("pen", 1.5);
        let b = tree.leaf("ink", 2.0);
        tree.add_child(root, a).unwrap();
        tree.add_child(root, b).unwrap();

        let rendered = tree.to_tree_string(root, 2).unwrap().to_string();

        assert!(rendered.starts_with("box [3.50]"));
        assert!(rendered.contains("pen = 1.50"));
        assert!(rendered.contains("ink = 2.00"));
    }

    #[test]
    fn given_shared_box_when_rendered_then_subtree_expanded_once() {
        let mut tree = CompositeTree::new();
        let root = tree.composite("crate");
        let shared = tree.composite("kit");
        let pen = tree.leaf("pen", 1.0);
        tree.add_child(shared, pen).unwrap();
        tree.add_child(root, shared).unwrap();
        tree.add_child(root, shared).unwrap();

        let rendered = tree.to_tree_string(root, 1).unwrap().to_string();

        assert!(rendered.starts_with("crate [2.0]"));
        assert_eq!(rendered.matches("pen = 1.0").count(), 1);
        assert!(rendered.contains("kit [1.0] (shared)"));
    }

    #[test]
    fn given_chain_deeper_than_limit_when_rendered_then_depth_exceeded() {
        let mut tree = CompositeTree::with_max_depth(8);
        let mut top = tree.leaf("bottom", 1.0);
        for level in 0..20_000 {
            let parent = tree.composite(&format!("level {level}"));
            tree.add_child(parent, top).unwrap();
            top = parent;
        }

        assert!(matches!(
            tree.to_tree_string(top, 1),
            Err(DomainError::DepthExceeded { max_depth: 8, .. })
        ));
    }
}
