//! Tests for TreeBuilder and NodeSpec parsing

use std::path::PathBuf;

use tempfile::TempDir;

use patterns::domain::{DomainError, Node, NodeSpec, TreeBuilder};

fn create_tree_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).expect("write tree file");
    path
}

const NESTED: &str = r#"
label = "box1"

[[children]]
label = "Product 1"
price = 10

[[children]]
label = "box2"

  [[children.children]]
  label = "Product 2"
  value = 20.5

  [[children.children]]
  label = "empty box"
"#;

#[test]
fn given_sample_spec_when_building_then_root_totals_100() {
    let (tree, root) = TreeBuilder::new().build(&NodeSpec::sample()).unwrap();

    assert_eq!(tree.label(root).unwrap(), "box1");
    assert_eq!(tree.value(root).unwrap(), 100.0);
    assert_eq!(tree.len(), 7);
}

#[test]
fn given_toml_file_when_building_then_creates_tree() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let path = create_tree_file(&temp, "boxes.toml", NESTED);
    let content = std::fs::read_to_string(path).unwrap();

    // Act
    let spec = NodeSpec::from_toml(&content).unwrap();
    let (tree, root) = TreeBuilder::new().build(&spec).unwrap();

    // Assert
    assert_eq!(tree.value(root).unwrap(), 30.5);
    let box2 = tree.find("box2").unwrap();
    assert_eq!(tree.children(box2).unwrap().len(), 2);
    let empty = tree.find("empty box").unwrap();
    assert!(matches!(tree.get(empty), Some(Node::Composite(_))));
    assert_eq!(tree.value(empty).unwrap(), 0.0);
}

#[test]
fn given_price_alias_when_parsing_then_maps_to_value() {
    let spec = NodeSpec::from_toml("label = \"pen\"\nprice = 2.5\n").unwrap();
    assert_eq!(spec, NodeSpec::leaf("pen", 2.5));
}

#[test]
fn given_leaf_with_children_when_building_then_invalid_spec() {
    let spec = NodeSpec {
        label: "odd".to_string(),
        value: Some(1.0),
        children: vec![NodeSpec::leaf("x", 1.0)],
    };

    let result = TreeBuilder::new().build(&spec);

    assert!(matches!(result, Err(DomainError::InvalidSpec { ref label, .. }) if label == "odd"));
}

#[test]
fn given_blank_label_when_building_then_invalid_spec() {
    let spec = NodeSpec::composite("root", vec![NodeSpec::leaf("  ", 1.0)]);
    assert!(matches!(
        TreeBuilder::new().build(&spec),
        Err(DomainError::InvalidSpec { .. })
    ));
}

#[test]
fn given_malformed_toml_when_parsing_then_invalid_spec() {
    let result = NodeSpec::from_toml("label = [unclosed");
    assert!(matches!(result, Err(DomainError::InvalidSpec { .. })));
}

#[test]
fn given_spec_deeper_than_limit_when_building_then_depth_exceeded() {
    let mut spec = NodeSpec::leaf("bottom", 1.0);
    for level in 0..5 {
        spec = NodeSpec::composite(format!("level{level}"), vec![spec]);
    }

    let result = TreeBuilder::new().with_max_depth(3).build(&spec);

    assert!(matches!(result, Err(DomainError::DepthExceeded { max_depth: 3, .. })));
}

#[test]
fn given_sample_when_serialized_then_parses_back_to_same_tree_value() {
    let toml = toml::to_string_pretty(&NodeSpec::sample()).unwrap();
    let spec = NodeSpec::from_toml(&toml).unwrap();

    let (tree, root) = TreeBuilder::new().build(&spec).unwrap();
    assert_eq!(tree.value(root).unwrap(), 100.0);
}
