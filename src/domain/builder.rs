//! Tree builder: turns a declarative node description into a composite tree.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::domain::arena::{CompositeTree, NodeId};
use crate::domain::error::DomainError;

/// Result type for tree operations.
pub type TreeResult<T> = Result<T, DomainError>;

/// Serializable description of one node and its subtree.
///
/// A node with a `value` (or `price`) is a leaf; a node without one is a
/// composite whose `children` are built in order.
///
/// ```toml
/// label = "box1"
///
/// [[children]]
/// label = "Product 1"
/// price = 10
///
/// [[children]]
/// label = "box2"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NodeSpec {
    pub label: String,
    #[serde(default, alias = "price", skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NodeSpec>,
}

impl NodeSpec {
    pub fn leaf(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value: Some(value),
            children: Vec::new(),
        }
    }

    pub fn composite(label: impl Into<String>, children: Vec<NodeSpec>) -> Self {
        Self {
            label: label.into(),
            value: None,
            children,
        }
    }

    /// Parse a spec from TOML text.
    pub fn from_toml(content: &str) -> TreeResult<Self> {
        toml::from_str(content).map_err(|e| DomainError::InvalidSpec {
            label: "<document>".to_string(),
            reason: e.message().to_string(),
        })
    }

    /// The sample hierarchy: box1 = Product 1 + box2(Product 2 + box3(Product 3 + Product 4)).
    pub fn sample() -> Self {
        Self::composite(
            "box1",
            vec![
                Self::leaf("Product 1", 10.0),
                Self::composite(
                    "box2",
                    vec![
                        Self::leaf("Product 2", 20.0),
                        Self::composite(
                            "box3",
                            vec![Self::leaf("Product 3", 30.0), Self::leaf("Product 4", 40.0)],
                        ),
                    ],
                ),
            ],
        )
    }
}

/// Constructs composite trees from [`NodeSpec`] descriptions.
pub struct TreeBuilder {
    max_depth: usize,
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self {
            max_depth: crate::domain::arena::DEFAULT_MAX_DEPTH,
        }
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Build a tree from `spec`, returning it with the handle of its root.
    ///
    /// Nodes are created bottom-up: children exist before they are attached.
    #[instrument(level = "debug", skip(self, spec), fields(root = %spec.label))]
    pub fn build(&self, spec: &NodeSpec) -> TreeResult<(CompositeTree, NodeId)> {
        let mut tree = CompositeTree::with_max_depth(self.max_depth);
        let root = self.build_node(&mut tree, spec, 0)?;
        debug!("built tree with {} nodes", tree.len());
        Ok((tree, root))
    }

    fn build_node(
        &self,
        tree: &mut CompositeTree,
        spec: &NodeSpec,
        depth: usize,
    ) -> TreeResult<NodeId> {
        if depth > self.max_depth {
            return Err(DomainError::DepthExceeded {
                label: spec.label.clone(),
                max_depth: self.max_depth,
            });
        }
        if spec.label.trim().is_empty() {
            return Err(DomainError::InvalidSpec {
                label: spec.label.clone(),
                reason: "label must not be empty".to_string(),
            });
        }

        match spec.value {
            Some(value) if spec.children.is_empty() => Ok(tree.leaf(&spec.label, value)),
            Some(_) => Err(DomainError::InvalidSpec {
                label: spec.label.clone(),
                reason: "a node with a value cannot have children".to_string(),
            }),
            None => {
                let children = spec
                    .children
                    .iter()
                    .map(|child| self.build_node(tree, child, depth + 1))
                    .collect::<TreeResult<Vec<_>>>()?;
                let node = tree.composite(&spec.label);
                for child in children {
                    tree.add_child(node, child)?;
                }
                Ok(node)
            }
        }
    }
}
