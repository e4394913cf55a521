//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent rule violations in the pattern models.
/// They carry no I/O or CLI concerns.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("node not found in tree: {0}")]
    NodeNotFound(String),

    #[error("node is a leaf and cannot hold children: {0}")]
    NotAComposite(String),

    #[error("'{child}' is not a child of '{parent}'")]
    ChildNotFound { parent: String, child: String },

    #[error("adding '{child}' under '{parent}' would create a cycle")]
    CycleDetected { parent: String, child: String },

    #[error("tree deeper than {max_depth} levels below '{label}'")]
    DepthExceeded { label: String, max_depth: usize },

    #[error("no node labelled '{0}'")]
    LabelNotFound(String),

    #[error("invalid node spec '{label}': {reason}")]
    InvalidSpec { label: String, reason: String },

    #[error("unknown notification channel: {0}")]
    UnknownChannel(String),

    #[error("unknown pattern: {0}")]
    UnknownPattern(String),
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
