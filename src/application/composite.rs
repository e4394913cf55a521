//! Pricing service on top of the composite tree.

use tracing::{debug, instrument};

use crate::application::ApplicationResult;
use crate::config::Settings;
use crate::domain::{DomainError, NodeSpec, TreeBuilder, TreeRender};

/// Value of one node in an evaluated tree.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceReport {
    pub label: String,
    pub value: f64,
}

impl PriceReport {
    pub fn formatted(&self, precision: usize) -> String {
        format!("Total price of {} = {}", self.label, format_value(self.value, precision))
    }
}

pub fn format_value(value: f64, precision: usize) -> String {
    format!("{:.*}", precision, value)
}

/// Build the tree described by `spec` and evaluate the root, or the first
/// node labelled `node` when given.
#[instrument(level = "debug", skip(spec, settings))]
pub fn price(spec: &NodeSpec, settings: &Settings, node: Option<&str>) -> ApplicationResult<PriceReport> {
    let (tree, root) = TreeBuilder::new()
        .with_max_depth(settings.max_depth)
        .build(spec)?;

    let target = match node {
        Some(label) => tree
            .find(label)
            .ok_or_else(|| DomainError::LabelNotFound(label.to_string()))?,
        None => root,
    };

    let report = PriceReport {
        label: tree.label(target)?.to_string(),
        value: tree.value(target)?,
    };
    debug!("{} = {}", report.label, report.value);
    Ok(report)
}

/// Render the tree described by `spec` with per-node totals.
#[instrument(level = "debug", skip(spec, settings))]
pub fn render(spec: &NodeSpec, settings: &Settings) -> ApplicationResult<String> {
    let (tree, root) = TreeBuilder::new()
        .with_max_depth(settings.max_depth)
        .build(spec)?;
    Ok(tree.to_tree_string(root, settings.precision)?.to_string())
}
