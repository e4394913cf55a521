use std::collections::{HashMap, HashSet};
use std::fmt;

use generational_arena::{Arena, Index};
use tracing::{debug, instrument};

use crate::domain::error::{DomainError, DomainResult};

/// Handle to a node stored in a [`CompositeTree`].
///
/// Handles are compared by identity: two leaves with equal label and value
/// are still different nodes.
pub type NodeId = Index;

/// Recursion limit applied by [`CompositeTree::value`] unless configured otherwise.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Terminal node carrying a fixed scalar value.
#[derive(Debug, Clone, PartialEq)]
pub struct Leaf {
    label: String,
    value: f64,
}

impl Leaf {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn value(&self) -> f64 {
        self.value
    }
}

/// Non-terminal node aggregating an ordered sequence of children.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Composite {
    label: String,
    children: Vec<NodeId>,
}

impl Composite {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            children: Vec::new(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}

/// A node is either a leaf or a composite.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Leaf(Leaf),
    Composite(Composite),
}

impl Node {
    pub fn label(&self) -> &str {
        match self {
            Node::Leaf(leaf) => leaf.label(),
            Node::Composite(composite) => composite.label(),
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf(_))
    }

    /// Direct children; always empty for a leaf.
    pub fn children(&self) -> &[NodeId] {
        match self {
            Node::Leaf(_) => &[],
            Node::Composite(composite) => composite.children(),
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Leaf(leaf) => write!(f, "{} ({})", leaf.label, leaf.value),
            Node::Composite(composite) => {
                write!(f, "{} [{} children]", composite.label, composite.children.len())
            }
        }
    }
}

/// Arena-backed part-whole hierarchy.
///
/// All nodes are owned by the arena; composites refer to their children by
/// [`NodeId`]. A node may be attached under several parents, but
/// [`add_child`](Self::add_child) refuses any edge that would close a cycle,
/// so evaluation always terminates.
#[derive(Debug)]
pub struct CompositeTree {
    arena: Arena<Node>,
    parents: HashMap<NodeId, Vec<NodeId>>,
    max_depth: usize,
}

impl Default for CompositeTree {
    fn default() -> Self {
        Self::new()
    }
}

impl CompositeTree {
    pub fn new() -> Self {
        Self::with_max_depth(DEFAULT_MAX_DEPTH)
    }

    pub fn with_max_depth(max_depth: usize) -> Self {
        Self {
            arena: Arena::new(),
            parents: HashMap::new(),
            max_depth,
        }
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    #[instrument(level = "trace", skip(self))]
    pub fn leaf(&mut self, label: &str, value: f64) -> NodeId {
        self.arena.insert(Node::Leaf(Leaf::new(label, value)))
    }

    #[instrument(level = "trace", skip(self))]
    pub fn composite(&mut self, label: &str) -> NodeId {
        self.arena.insert(Node::Composite(Composite::new(label)))
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.arena.get(id)
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.arena.contains(id)
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    fn node(&self, id: NodeId) -> DomainResult<&Node> {
        self.arena
            .get(id)
            .ok_or_else(|| DomainError::NodeNotFound(format!("{id:?}")))
    }

    pub fn label(&self, id: NodeId) -> DomainResult<&str> {
        self.node(id).map(Node::label)
    }

    pub fn children(&self, id: NodeId) -> DomainResult<&[NodeId]> {
        self.node(id).map(Node::children)
    }

    /// First node (in creation order) carrying `label`.
    pub fn find(&self, label: &str) -> Option<NodeId> {
        self.arena
            .iter()
            .find(|(_, node)| node.label() == label)
            .map(|(idx, _)| idx)
    }

    /// Appends `child` to `parent`'s children.
    ///
    /// # Errors
    /// * `NodeNotFound` if either handle is stale
    /// * `NotAComposite` if `parent` is a leaf
    /// * `CycleDetected` if `parent` is reachable from `child` (including `child == parent`)
    #[instrument(level = "debug", skip(self))]
    pub fn add_child(&mut self, parent: NodeId, child: NodeId) -> DomainResult<()> {
        let child_label = self.label(child)?.to_string();
        let parent_label = match self.node(parent)? {
            Node::Leaf(leaf) => return Err(DomainError::NotAComposite(leaf.label.clone())),
            Node::Composite(composite) => composite.label.clone(),
        };

        if self.has_ancestor(parent, child) {
            return Err(DomainError::CycleDetected {
                parent: parent_label,
                child: child_label,
            });
        }

        if let Some(Node::Composite(composite)) = self.arena.get_mut(parent) {
            composite.children.push(child);
        }
        self.parents.entry(child).or_default().push(parent);
        debug!("{} <- {}", parent_label, child_label);
        Ok(())
    }

    /// Removes the first occurrence of `child` from `parent`'s children.
    ///
    /// Exactly one occurrence is removed even if `child` was added repeatedly.
    ///
    /// # Errors
    /// * `NodeNotFound` if `parent` is stale
    /// * `NotAComposite` if `parent` is a leaf
    /// * `ChildNotFound` if `child` is not among `parent`'s children
    #[instrument(level = "debug", skip(self))]
    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) -> DomainResult<()> {
        let child_label = self
            .get(child)
            .map(|node| node.label().to_string())
            .unwrap_or_else(|| format!("{child:?}"));

        match self.arena.get_mut(parent) {
            None => Err(DomainError::NodeNotFound(format!("{parent:?}"))),
            Some(Node::Leaf(leaf)) => Err(DomainError::NotAComposite(leaf.label.clone())),
            Some(Node::Composite(composite)) => {
                match composite.children.iter().position(|&idx| idx == child) {
                    Some(pos) => {
                        composite.children.remove(pos);
                        debug!("{} -/- {}", composite.label, child_label);
                        if let Some(up) = self.parents.get_mut(&child) {
                            if let Some(pos) = up.iter().position(|&idx| idx == parent) {
                                up.remove(pos);
                            }
                        }
                        Ok(())
                    }
                    None => Err(DomainError::ChildNotFound {
                        parent: composite.label.clone(),
                        child: child_label,
                    }),
                }
            }
        }
    }

    /// Aggregate value of `id`: a leaf's own value, or the sum of a composite's
    /// children in sequence order. Recomputed on every call.
    ///
    /// # Errors
    /// * `NodeNotFound` if `id` is stale
    /// * `DepthExceeded` if the tree is deeper than the configured limit
    #[instrument(level = "trace", skip(self))]
    pub fn value(&self, id: NodeId) -> DomainResult<f64> {
        let measures = self.measure(id)?;
        Ok(measures.get(&id).map(|m| m.total).unwrap_or_default())
    }

    /// Values of every node under `root`, computed bottom-up in one pass.
    #[instrument(level = "debug", skip(self))]
    pub fn subtotals(&self, root: NodeId) -> DomainResult<HashMap<NodeId, f64>> {
        let measures = self.measure(root)?;
        Ok(measures.into_iter().map(|(idx, m)| (idx, m.total)).collect())
    }

    /// Number of levels from `id` down to its deepest leaf.
    ///
    /// # Errors
    /// Same as [`value`](Self::value).
    #[instrument(level = "trace", skip(self))]
    pub fn depth(&self, id: NodeId) -> DomainResult<usize> {
        let measures = self.measure(id)?;
        Ok(measures.get(&id).map(|m| m.height).unwrap_or_default())
    }

    /// Total and height of every distinct node under `root`.
    ///
    /// Iterative post-order walk; a node shared by several parents is measured
    /// once. Fails as soon as some path from `root` is longer than `max_depth`.
    fn measure(&self, root: NodeId) -> DomainResult<HashMap<NodeId, Measure>> {
        let mut done: HashMap<NodeId, Measure> = HashMap::new();
        let mut stack = vec![(root, 0usize, false)];

        while let Some((idx, depth, expanded)) = stack.pop() {
            let node = self.node(idx)?;
            if let Some(measure) = done.get(&idx) {
                if depth + measure.height - 1 > self.max_depth {
                    return Err(self.too_deep(node));
                }
                continue;
            }
            if depth > self.max_depth {
                return Err(self.too_deep(node));
            }

            if expanded {
                let measure = match node {
                    Node::Leaf(leaf) => Measure {
                        total: leaf.value,
                        height: 1,
                    },
                    Node::Composite(composite) => {
                        let (total, height) = composite.children.iter().fold(
                            (0.0, 0),
                            |(total, height): (f64, usize), child| match done.get(child) {
                                Some(m) => (total + m.total, height.max(m.height)),
                                None => (total, height),
                            },
                        );
                        Measure {
                            total,
                            height: height + 1,
                        }
                    }
                };
                done.insert(idx, measure);
            } else {
                stack.push((idx, depth, true));
                for &child in node.children().iter().rev() {
                    stack.push((child, depth + 1, false));
                }
            }
        }
        Ok(done)
    }

    fn too_deep(&self, node: &Node) -> DomainError {
        DomainError::DepthExceeded {
            label: node.label().to_string(),
            max_depth: self.max_depth,
        }
    }

    /// True if `ancestor` is `node` itself or sits anywhere above it.
    fn has_ancestor(&self, node: NodeId, ancestor: NodeId) -> bool {
        if node == ancestor {
            return true;
        }
        let mut stack: Vec<NodeId> = self.parents.get(&node).cloned().unwrap_or_default();
        let mut seen = HashSet::new();
        while let Some(idx) = stack.pop() {
            if idx == ancestor {
                return true;
            }
            if seen.insert(idx) {
                if let Some(up) = self.parents.get(&idx) {
                    stack.extend(up.iter().copied());
                }
            }
        }
        false
    }

    /// Collects all leaves under `id` in left-to-right order.
    #[instrument(level = "debug", skip(self))]
    pub fn leaves(&self, id: NodeId) -> Vec<NodeId> {
        self.iter(id)
            .filter(|(_, node)| node.is_leaf())
            .map(|(idx, _)| idx)
            .collect()
    }

    pub fn iter(&self, root: NodeId) -> TreeIterator<'_> {
        TreeIterator::new(self, root)
    }

    pub fn iter_postorder(&self, root: NodeId) -> PostOrderIterator<'_> {
        PostOrderIterator::new(self, root)
    }
}

#[derive(Debug, Clone, Copy)]
struct Measure {
    total: f64,
    height: usize,
}

/// Pre-order traversal starting at a given node.
///
/// Follows every edge, so a shared node is yielded once per path.
pub struct TreeIterator<'a> {
    tree: &'a CompositeTree,
    stack: Vec<NodeId>,
}

impl<'a> TreeIterator<'a> {
    fn new(tree: &'a CompositeTree, root: NodeId) -> Self {
        Self {
            tree,
            stack: vec![root],
        }
    }
}

impl<'a> Iterator for TreeIterator<'a> {
    type Item = (NodeId, &'a Node);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(current) = self.stack.pop() {
            if let Some(node) = self.tree.get(current) {
                // Push children in reverse order for left-to-right traversal
                self.stack.extend(node.children().iter().rev().copied());
                return Some((current, node));
            }
        }
        None
    }
}

/// Post-order traversal: every child is yielded before its parent.
///
/// Like [`TreeIterator`] it follows every edge; use
/// [`CompositeTree::subtotals`] when shared nodes should be visited once.
pub struct PostOrderIterator<'a> {
    tree: &'a CompositeTree,
    stack: Vec<(NodeId, bool)>,
}

impl<'a> PostOrderIterator<'a> {
    fn new(tree: &'a CompositeTree, root: NodeId) -> Self {
        Self {
            tree,
            stack: vec![(root, false)],
        }
    }
}

impl<'a> Iterator for PostOrderIterator<'a> {
    type Item = (NodeId, &'a Node);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((current, visited)) = self.stack.pop() {
            if let Some(node) = self.tree.get(current) {
                if visited {
                    return Some((current, node));
                }
                self.stack.push((current, true));
                for &child in node.children().iter().rev() {
                    self.stack.push((child, false));
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_leaf_when_displayed_then_shows_label_and_value() {
        let node = Node::Leaf(Leaf::new("Product 1", 10.0));
        assert_eq!(node.to_string(), "Product 1 (10)");
    }

    #[test]
    fn given_nested_boxes_when_iterating_then_preorder_and_postorder_differ() {
        let mut tree = CompositeTree::new();
        let root = tree.composite("root");
        let inner = tree.composite("inner");
        let a = tree.leaf("a", 1.0);
        let b = tree.leaf("b", 2.0);
        tree.add_child(inner, a).unwrap();
        tree.add_child(root, inner).unwrap();
        tree.add_child(root, b).unwrap();

        let pre: Vec<_> = tree.iter(root).map(|(_, n)| n.label().to_string()).collect();
        let post: Vec<_> = tree
            .iter_postorder(root)
            .map(|(_, n)| n.label().to_string())
            .collect();

        assert_eq!(pre, vec!["root", "inner", "a", "b"]);
        assert_eq!(post, vec!["a", "inner", "b", "root"]);
    }

    #[test]
    fn given_shallow_limit_when_evaluating_deep_tree_then_depth_exceeded() {
        let mut tree = CompositeTree::with_max_depth(1);
        let outer = tree.composite("outer");
        let middle = tree.composite("middle");
        let leaf = tree.leaf("leaf", 5.0);
        tree.add_child(middle, leaf).unwrap();
        tree.add_child(outer, middle).unwrap();

        assert_eq!(tree.value(middle), Ok(5.0));
        assert!(matches!(
            tree.value(outer),
            Err(DomainError::DepthExceeded { max_depth: 1, .. })
        ));
    }
}
