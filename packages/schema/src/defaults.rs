//! # Node Factory
//!
//! Builds well-formed nodes from per-type default templates.
//!
//! Overrides are merged shallowly:
//! - `props`: override keys win, other default keys survive
//! - `styles`: merged per breakpoint (an override map replaces that breakpoint's defaults)
//! - `children`: used verbatim when supplied
//!
//! Construction never fails, not even for unknown type strings.

use crate::id_generator::new_node_id;
use crate::node::{Node, NodeType, Props, ResponsiveStyles, StyleMap};
use serde_json::{json, Value};

/// Partial node data merged over a type's defaults
#[derive(Debug, Clone, Default)]
pub struct NodeOverrides {
    pub props: Option<Props>,
    pub styles: Option<ResponsiveStyles>,
    pub children: Option<Vec<Node>>,
}

impl NodeOverrides {
    pub fn props(mut self, props: Props) -> Self {
        self.props = Some(props);
        self
    }

    pub fn styles(mut self, styles: ResponsiveStyles) -> Self {
        self.styles = Some(styles);
        self
    }

    pub fn children(mut self, children: Vec<Node>) -> Self {
        self.children = Some(children);
        self
    }
}

/// Create a node of `node_type` with default props and styles
pub fn create_node(node_type: NodeType) -> Node {
    create_node_with(node_type, NodeOverrides::default())
}

/// Create a node of `node_type`, merging `overrides` over the defaults
pub fn create_node_with(node_type: NodeType, overrides: NodeOverrides) -> Node {
    let (mut props, mut styles) = default_template(&node_type);

    if let Some(override_props) = overrides.props {
        for (key, value) in override_props {
            props.insert(key, value);
        }
    }

    if let Some(override_styles) = overrides.styles {
        let ResponsiveStyles { base, md, sm } = override_styles;
        if base.is_some() {
            styles.base = base;
        }
        if md.is_some() {
            styles.md = md;
        }
        if sm.is_some() {
            styles.sm = sm;
        }
    }

    Node {
        id: new_node_id(),
        node_type,
        props,
        styles,
        children: overrides.children.unwrap_or_default(),
    }
}

/// Build a style map from literal pairs
pub fn style_map(pairs: &[(&str, &str)]) -> StyleMap {
    pairs
        .iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect()
}

fn props_from(value: Value) -> Props {
    match value {
        Value::Object(map) => map,
        _ => Props::new(),
    }
}

fn default_template(node_type: &NodeType) -> (Props, ResponsiveStyles) {
    match node_type {
        NodeType::Section => (
            Props::new(),
            ResponsiveStyles::with_base(style_map(&[
                ("padding", "48px 24px"),
                ("display", "flex"),
                ("flexDirection", "column"),
                ("alignItems", "center"),
                ("minHeight", "200px"),
            ])),
        ),
        NodeType::Container => (
            Props::new(),
            ResponsiveStyles::with_base(style_map(&[
                ("maxWidth", "1200px"),
                ("width", "100%"),
                ("padding", "16px"),
                ("display", "flex"),
                ("flexDirection", "column"),
            ])),
        ),
        NodeType::Heading => (
            props_from(json!({ "text": "Heading", "level": 2 })),
            ResponsiveStyles::with_base(style_map(&[
                ("fontSize", "32px"),
                ("fontWeight", "700"),
                ("marginBottom", "16px"),
            ])),
        ),
        NodeType::Text => (
            props_from(json!({
                "text": "Lorem ipsum dolor sit amet, consectetur adipiscing elit."
            })),
            ResponsiveStyles::with_base(style_map(&[
                ("fontSize", "16px"),
                ("lineHeight", "1.6"),
                ("marginBottom", "12px"),
            ])),
        ),
        NodeType::Button => (
            props_from(json!({ "text": "Click Me", "href": "#" })),
            ResponsiveStyles::with_base(style_map(&[
                ("padding", "12px 24px"),
                ("backgroundColor", "#2563eb"),
                ("color", "#ffffff"),
                ("borderRadius", "8px"),
                ("fontSize", "16px"),
                ("fontWeight", "600"),
                ("textAlign", "center"),
                ("border", "none"),
                ("display", "inline-block"),
            ])),
        ),
        NodeType::Image => (
            props_from(json!({
                "src": "https://placehold.co/800x400",
                "alt": "Placeholder"
            })),
            ResponsiveStyles::with_base(style_map(&[
                ("width", "100%"),
                ("height", "auto"),
                ("borderRadius", "8px"),
            ])),
        ),
        NodeType::Spacer => (
            Props::new(),
            ResponsiveStyles::with_base(style_map(&[("height", "48px")])),
        ),
        NodeType::Divider => (
            Props::new(),
            ResponsiveStyles::with_base(style_map(&[
                ("width", "100%"),
                ("height", "1px"),
                ("backgroundColor", "#e5e7eb"),
                ("margin", "24px 0"),
            ])),
        ),
        NodeType::Grid => (
            props_from(json!({ "columns": 3 })),
            ResponsiveStyles {
                base: Some(style_map(&[
                    ("display", "grid"),
                    ("gridTemplateColumns", "repeat(3, 1fr)"),
                    ("gap", "24px"),
                    ("width", "100%"),
                ])),
                md: None,
                sm: Some(style_map(&[("gridTemplateColumns", "1fr")])),
            },
        ),
        NodeType::Columns => (
            props_from(json!({ "columns": 2 })),
            ResponsiveStyles {
                base: Some(style_map(&[
                    ("display", "grid"),
                    ("gridTemplateColumns", "repeat(2, 1fr)"),
                    ("gap", "24px"),
                    ("width", "100%"),
                ])),
                md: None,
                sm: Some(style_map(&[("gridTemplateColumns", "1fr")])),
            },
        ),
        NodeType::Column => (
            Props::new(),
            ResponsiveStyles::with_base(style_map(&[
                ("display", "flex"),
                ("flexDirection", "column"),
                ("padding", "8px"),
            ])),
        ),
        NodeType::Navbar => (
            props_from(json!({
                "logoText": "MySite",
                "navLinks": [
                    { "label": "Home", "href": "/" },
                    { "label": "About", "href": "/about" },
                    { "label": "Contact", "href": "/contact" }
                ]
            })),
            ResponsiveStyles::with_base(style_map(&[
                ("display", "flex"),
                ("justifyContent", "space-between"),
                ("alignItems", "center"),
                ("padding", "16px 24px"),
                ("backgroundColor", "#ffffff"),
                ("borderColor", "#e5e7eb"),
                ("border", "0 0 1px 0"),
                ("width", "100%"),
            ])),
        ),
        NodeType::Footer => (
            props_from(json!({
                "copyrightText": "© 2025 MySite. All rights reserved.",
                "footerLinks": [
                    { "label": "Privacy", "href": "/privacy" },
                    { "label": "Terms", "href": "/terms" }
                ]
            })),
            ResponsiveStyles::with_base(style_map(&[
                ("padding", "32px 24px"),
                ("backgroundColor", "#1f2937"),
                ("color", "#ffffff"),
                ("textAlign", "center"),
                ("width", "100%"),
            ])),
        ),
        NodeType::Other(_) => (Props::new(), ResponsiveStyles::with_base(StyleMap::new())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::Breakpoint;

    #[test]
    fn test_heading_defaults() {
        let heading = create_node(NodeType::Heading);

        assert_eq!(heading.text(), Some("Heading"));
        assert_eq!(heading.heading_level(), Some(2));
        let base = heading.styles.get(Breakpoint::Base).unwrap();
        assert_eq!(base["fontSize"], "32px");
        assert_eq!(base["fontWeight"], "700");
        assert_eq!(base["marginBottom"], "16px");
        assert!(heading.children.is_empty());
    }

    #[test]
    fn test_every_type_has_base_styles() {
        for node_type in NodeType::ALL {
            let node = create_node(node_type.clone());
            assert!(node.styles.base.is_some(), "{} has no base styles", node_type);
            assert_eq!(node.node_type, node_type);
        }
    }

    #[test]
    fn test_unknown_type_gets_empty_template() {
        let node = create_node(NodeType::parse("carousel"));

        assert_eq!(node.node_type.as_str(), "carousel");
        assert!(node.props.is_empty());
        assert_eq!(node.styles.base, Some(StyleMap::new()));
        assert!(node.children.is_empty());
    }

    #[test]
    fn test_grid_has_mobile_overlay() {
        let grid = create_node(NodeType::Grid);
        assert_eq!(grid.styles.get(Breakpoint::Sm).unwrap()["gridTemplateColumns"], "1fr");
        assert_eq!(grid.column_count(), Some(3));
    }

    #[test]
    fn test_prop_overrides_merge_shallowly() {
        let mut props = Props::new();
        props.insert("text".into(), json!("Custom"));
        let node = create_node_with(NodeType::Heading, NodeOverrides::default().props(props));

        assert_eq!(node.text(), Some("Custom"));
        assert_eq!(node.heading_level(), Some(2));
    }

    #[test]
    fn test_style_overrides_replace_per_breakpoint() {
        let overrides = ResponsiveStyles {
            base: None,
            md: Some(style_map(&[("fontSize", "24px")])),
            sm: None,
        };
        let node = create_node_with(NodeType::Heading, NodeOverrides::default().styles(overrides));

        assert_eq!(node.styles.get(Breakpoint::Base).unwrap()["fontSize"], "32px");
        assert_eq!(node.styles.get(Breakpoint::Md).unwrap()["fontSize"], "24px");
    }

    #[test]
    fn test_children_override_used_verbatim() {
        let child = create_node(NodeType::Text);
        let child_id = child.id.clone();
        let section = create_node_with(
            NodeType::Section,
            NodeOverrides::default().children(vec![child]),
        );

        assert_eq!(section.children.len(), 1);
        assert_eq!(section.children[0].id, child_id);
    }

    #[test]
    fn test_defaults_keep_declaration_order() {
        let button = create_node(NodeType::Button);
        let keys: Vec<&str> = button
            .styles
            .get(Breakpoint::Base)
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(keys[0], "padding");
        assert_eq!(keys[keys.len() - 1], "display");
    }
}
