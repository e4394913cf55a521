//! Domain layer: the composite tree and its builder
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod arena;
pub mod builder;
pub mod error;
pub mod render;

pub use arena::{Composite, CompositeTree, Leaf, Node, NodeId, DEFAULT_MAX_DEPTH};
pub use builder::{NodeSpec, TreeBuilder};
pub use error::{DomainError, DomainResult};
pub use render::TreeRender;
