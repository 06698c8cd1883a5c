//! # Schema Validation
//!
//! Boundary checks for page documents and node lists arriving from outside
//! the editor (page store payloads, generated content, CLI input).
//!
//! Validation is all-or-nothing: a payload either parses into a fully valid
//! tree or is rejected with the first problem found, located by a JSON-path
//! style string such as `rootNodes[0].children[2].props.level`.

use crate::error::{ValidationError, ValidationResult};
use crate::node::Node;
use crate::page::PageSchema;
use serde_json::{Map, Value};
use std::collections::HashMap;

const STRING_PROPS: [&str; 8] = ["text", "src", "alt", "href", "target", "placeholder", "logoText", "copyrightText"];
const LINK_PROPS: [&str; 2] = ["navLinks", "footerLinks"];
const BREAKPOINT_KEYS: [&str; 3] = ["base", "md", "sm"];

/// Parse and validate a page document from JSON text
pub fn parse_page(source: &str) -> ValidationResult<PageSchema> {
    let value: Value = serde_json::from_str(source).map_err(|e| ValidationError::Json(e.to_string()))?;
    parse_page_value(value)
}

/// Validate an already-decoded JSON page document
pub fn parse_page_value(value: Value) -> ValidationResult<PageSchema> {
    let Value::Object(page) = &value else {
        return Err(ValidationError::invalid("$", "page must be an object"));
    };

    if let Some(version) = page.get("version") {
        if version.as_u64().filter(|v| *v <= u32::MAX as u64).is_none() {
            return Err(ValidationError::invalid("version", "must be a non-negative integer"));
        }
    }

    match page.get("rootNodes") {
        None => {}
        Some(Value::Array(items)) => check_node_values(items, "rootNodes")?,
        Some(_) => return Err(ValidationError::invalid("rootNodes", "must be an array")),
    }

    let schema: PageSchema = serde_json::from_value(value).map_err(|e| ValidationError::Json(e.to_string()))?;
    validate_tree(&schema.root_nodes, "rootNodes")?;
    Ok(schema)
}

/// Validate a bare JSON array of nodes. `label` prefixes error paths.
pub fn parse_node_list(value: Value, label: &str) -> ValidationResult<Vec<Node>> {
    let Value::Array(items) = &value else {
        return Err(ValidationError::invalid(label, "expected an array of nodes"));
    };
    check_node_values(items, label)?;

    let nodes: Vec<Node> = serde_json::from_value(value).map_err(|e| ValidationError::Json(e.to_string()))?;
    validate_tree(&nodes, label)?;
    Ok(nodes)
}

/// Semantic checks on a typed tree: unique ids and per-type prop shapes
pub fn validate_nodes(nodes: &[Node]) -> ValidationResult<()> {
    validate_tree(nodes, "rootNodes")
}

fn validate_tree(nodes: &[Node], label: &str) -> ValidationResult<()> {
    let mut seen = HashMap::new();
    for (index, node) in nodes.iter().enumerate() {
        validate_node(node, &format!("{}[{}]", label, index), &mut seen)?;
    }
    Ok(())
}

fn validate_node(node: &Node, path: &str, seen: &mut HashMap<String, String>) -> ValidationResult<()> {
    if node.id.is_empty() {
        return Err(ValidationError::invalid(format!("{}.id", path), "must not be empty"));
    }
    if let Some(first) = seen.insert(node.id.clone(), path.to_string()) {
        return Err(ValidationError::DuplicateId {
            id: node.id.clone(),
            first,
            second: path.to_string(),
        });
    }

    check_props(&node.props, &format!("{}.props", path))?;

    for (index, child) in node.children.iter().enumerate() {
        validate_node(child, &format!("{}.children[{}]", path, index), seen)?;
    }
    Ok(())
}

fn check_props(props: &Map<String, Value>, path: &str) -> ValidationResult<()> {
    for key in STRING_PROPS {
        if let Some(value) = props.get(key) {
            if !value.is_string() {
                return Err(ValidationError::invalid(format!("{}.{}", path, key), "must be a string"));
            }
        }
    }

    if let Some(level) = props.get("level") {
        match level.as_f64() {
            Some(l) if (1.0..=6.0).contains(&l) => {}
            _ => {
                return Err(ValidationError::invalid(
                    format!("{}.level", path),
                    "must be a number between 1 and 6",
                ))
            }
        }
    }

    if let Some(columns) = props.get("columns") {
        if !columns.is_number() {
            return Err(ValidationError::invalid(format!("{}.columns", path), "must be a number"));
        }
    }

    for key in LINK_PROPS {
        let Some(value) = props.get(key) else {
            continue;
        };
        let Value::Array(links) = value else {
            return Err(ValidationError::invalid(format!("{}.{}", path, key), "must be an array"));
        };
        for (index, link) in links.iter().enumerate() {
            let well_formed = link.get("label").is_some_and(Value::is_string)
                && link.get("href").is_some_and(Value::is_string);
            if !well_formed {
                return Err(ValidationError::invalid(
                    format!("{}.{}[{}]", path, key, index),
                    "must be an object with string label and href",
                ));
            }
        }
    }

    Ok(())
}

/// Structural checks on raw JSON, run before deserializing so that errors
/// can point at the offending node.
fn check_node_values(items: &[Value], label: &str) -> ValidationResult<()> {
    for (index, item) in items.iter().enumerate() {
        check_node_value(item, &format!("{}[{}]", label, index))?;
    }
    Ok(())
}

fn check_node_value(value: &Value, path: &str) -> ValidationResult<()> {
    let Value::Object(node) = value else {
        return Err(ValidationError::invalid(path, "node must be an object"));
    };

    match node.get("id") {
        Some(Value::String(_)) => {}
        Some(_) => return Err(ValidationError::invalid(format!("{}.id", path), "must be a string")),
        None => return Err(ValidationError::invalid(format!("{}.id", path), "is required")),
    }

    match node.get("type") {
        Some(Value::String(_)) => {}
        Some(_) => return Err(ValidationError::invalid(format!("{}.type", path), "must be a string")),
        None => return Err(ValidationError::invalid(format!("{}.type", path), "is required")),
    }

    if let Some(props) = node.get("props") {
        if !props.is_object() {
            return Err(ValidationError::invalid(format!("{}.props", path), "must be an object"));
        }
    }

    if let Some(styles) = node.get("styles") {
        let Value::Object(breakpoints) = styles else {
            return Err(ValidationError::invalid(format!("{}.styles", path), "must be an object"));
        };
        for (breakpoint, declarations) in breakpoints {
            let bp_path = format!("{}.styles.{}", path, breakpoint);
            if !BREAKPOINT_KEYS.contains(&breakpoint.as_str()) {
                return Err(ValidationError::invalid(bp_path, "unknown breakpoint (expected base, md or sm)"));
            }
            let Value::Object(declarations) = declarations else {
                return Err(ValidationError::invalid(bp_path, "must be an object"));
            };
            for (property, style_value) in declarations {
                if !style_value.is_string() {
                    return Err(ValidationError::invalid(
                        format!("{}.{}", bp_path, property),
                        "style values must be strings",
                    ));
                }
            }
        }
    }

    match node.get("children") {
        None => Ok(()),
        Some(Value::Array(children)) => check_node_values(children, &format!("{}.children", path)),
        Some(_) => Err(ValidationError::invalid(format!("{}.children", path), "must be an array")),
    }
}
