//! Starter page templates.
//!
//! Every call to [`template`] builds a fresh tree with fresh node ids, so two
//! pages started from the same template never share ids.

use crate::defaults::style_map;
use crate::id_generator::new_node_id;
use crate::node::{Node, NodeType, Props, ResponsiveStyles, StyleMap};
use crate::page::PageSchema;
use serde_json::{json, Value};

/// Template catalogue entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateInfo {
    pub name: &'static str,
    pub description: &'static str,
    pub category: &'static str,
}

pub const TEMPLATES: [TemplateInfo; 3] = [
    TemplateInfo {
        name: "blank",
        description: "Start from scratch with an empty page",
        category: "general",
    },
    TemplateInfo {
        name: "landing",
        description: "Modern landing page with hero, features, and CTA",
        category: "marketing",
    },
    TemplateInfo {
        name: "portfolio",
        description: "Showcase your work with a clean portfolio layout",
        category: "portfolio",
    },
];

pub fn template_names() -> Vec<&'static str> {
    TEMPLATES.iter().map(|t| t.name).collect()
}

/// Build the page for a named template
pub fn template(name: &str) -> Option<PageSchema> {
    let root_nodes = match name {
        "blank" => Vec::new(),
        "landing" => landing(),
        "portfolio" => portfolio(),
        _ => return None,
    };
    Some(PageSchema::new(root_nodes))
}

fn node(node_type: NodeType, props: Value, base: StyleMap, children: Vec<Node>) -> Node {
    let props = match props {
        Value::Object(map) => map,
        _ => Props::new(),
    };
    Node {
        id: new_node_id(),
        node_type,
        props,
        styles: ResponsiveStyles::with_base(base),
        children,
    }
}

fn with_mobile(mut node: Node, sm: StyleMap) -> Node {
    node.styles.sm = Some(sm);
    node
}

fn navbar() -> Node {
    node(
        NodeType::Navbar,
        json!({
            "logoText": "MySite",
            "navLinks": [
                { "label": "Home", "href": "/" },
                { "label": "About", "href": "/about" },
                { "label": "Contact", "href": "/contact" }
            ]
        }),
        style_map(&[
            ("display", "flex"),
            ("justifyContent", "space-between"),
            ("alignItems", "center"),
            ("padding", "16px 32px"),
            ("backgroundColor", "#ffffff"),
            ("width", "100%"),
        ]),
        Vec::new(),
    )
}

fn footer() -> Node {
    node(
        NodeType::Footer,
        json!({
            "copyrightText": "© 2025 MySite. All rights reserved.",
            "footerLinks": [
                { "label": "Privacy", "href": "/privacy" },
                { "label": "Terms", "href": "/terms" }
            ]
        }),
        style_map(&[
            ("padding", "32px 24px"),
            ("backgroundColor", "#111827"),
            ("color", "#d1d5db"),
            ("textAlign", "center"),
            ("width", "100%"),
        ]),
        Vec::new(),
    )
}

fn hero(title: &str, subtitle: &str, cta: &str, background: &str) -> Node {
    node(
        NodeType::Section,
        json!({}),
        style_map(&[
            ("padding", "80px 24px"),
            ("backgroundColor", background),
            ("display", "flex"),
            ("flexDirection", "column"),
            ("alignItems", "center"),
            ("textAlign", "center"),
        ]),
        vec![
            with_mobile(
                node(
                    NodeType::Heading,
                    json!({ "text": title, "level": 1 }),
                    style_map(&[
                        ("fontSize", "48px"),
                        ("fontWeight", "800"),
                        ("marginBottom", "16px"),
                        ("color", "#111827"),
                    ]),
                    Vec::new(),
                ),
                style_map(&[("fontSize", "32px")]),
            ),
            with_mobile(
                node(
                    NodeType::Text,
                    json!({ "text": subtitle }),
                    style_map(&[
                        ("fontSize", "20px"),
                        ("lineHeight", "1.6"),
                        ("color", "#4b5563"),
                        ("maxWidth", "600px"),
                        ("marginBottom", "32px"),
                    ]),
                    Vec::new(),
                ),
                style_map(&[("fontSize", "16px")]),
            ),
            node(
                NodeType::Button,
                json!({ "text": cta, "href": "#" }),
                style_map(&[
                    ("padding", "14px 32px"),
                    ("backgroundColor", "#2563eb"),
                    ("color", "#ffffff"),
                    ("borderRadius", "8px"),
                    ("fontSize", "18px"),
                    ("fontWeight", "600"),
                ]),
                Vec::new(),
            ),
        ],
    )
}

fn features(items: &[(&str, &str)]) -> Node {
    let cards = items
        .iter()
        .map(|(title, desc)| {
            node(
                NodeType::Container,
                json!({}),
                style_map(&[("padding", "24px"), ("textAlign", "center")]),
                vec![
                    node(
                        NodeType::Heading,
                        json!({ "text": title, "level": 3 }),
                        style_map(&[("fontSize", "20px"), ("fontWeight", "600"), ("marginBottom", "8px")]),
                        Vec::new(),
                    ),
                    node(
                        NodeType::Text,
                        json!({ "text": desc }),
                        style_map(&[("fontSize", "15px"), ("lineHeight", "1.6"), ("color", "#6b7280")]),
                        Vec::new(),
                    ),
                ],
            )
        })
        .collect();

    node(
        NodeType::Section,
        json!({}),
        style_map(&[
            ("padding", "64px 24px"),
            ("backgroundColor", "#ffffff"),
            ("display", "flex"),
            ("flexDirection", "column"),
            ("alignItems", "center"),
        ]),
        vec![
            node(
                NodeType::Heading,
                json!({ "text": "Features", "level": 2 }),
                style_map(&[
                    ("fontSize", "36px"),
                    ("fontWeight", "700"),
                    ("marginBottom", "48px"),
                    ("textAlign", "center"),
                ]),
                Vec::new(),
            ),
            with_mobile(
                node(
                    NodeType::Grid,
                    json!({ "columns": 3 }),
                    style_map(&[
                        ("display", "grid"),
                        ("gridTemplateColumns", "repeat(3, 1fr)"),
                        ("gap", "32px"),
                        ("maxWidth", "1000px"),
                        ("width", "100%"),
                    ]),
                    cards,
                ),
                style_map(&[("gridTemplateColumns", "1fr")]),
            ),
        ],
    )
}

fn landing() -> Vec<Node> {
    vec![
        navbar(),
        hero(
            "Build Something Amazing",
            "The all-in-one platform to launch your next big idea. Fast, beautiful, and effortless.",
            "Get Started Free",
            "#f0f9ff",
        ),
        features(&[
            ("Lightning Fast", "Optimized performance that loads in milliseconds."),
            ("Beautiful Design", "Pixel-perfect templates crafted by top designers."),
            ("Easy to Use", "No coding required. Drag, drop, and publish."),
        ]),
        node(
            NodeType::Section,
            json!({}),
            style_map(&[
                ("padding", "64px 24px"),
                ("backgroundColor", "#2563eb"),
                ("display", "flex"),
                ("flexDirection", "column"),
                ("alignItems", "center"),
                ("textAlign", "center"),
            ]),
            vec![
                node(
                    NodeType::Heading,
                    json!({ "text": "Ready to get started?", "level": 2 }),
                    style_map(&[
                        ("fontSize", "36px"),
                        ("fontWeight", "700"),
                        ("color", "#ffffff"),
                        ("marginBottom", "16px"),
                    ]),
                    Vec::new(),
                ),
                node(
                    NodeType::Text,
                    json!({ "text": "Join thousands of creators building with our platform." }),
                    style_map(&[("fontSize", "18px"), ("color", "#dbeafe"), ("marginBottom", "32px")]),
                    Vec::new(),
                ),
                node(
                    NodeType::Button,
                    json!({ "text": "Start Building", "href": "#" }),
                    style_map(&[
                        ("padding", "14px 32px"),
                        ("backgroundColor", "#ffffff"),
                        ("color", "#2563eb"),
                        ("borderRadius", "8px"),
                        ("fontSize", "18px"),
                        ("fontWeight", "600"),
                    ]),
                    Vec::new(),
                ),
            ],
        ),
        footer(),
    ]
}

fn portfolio() -> Vec<Node> {
    let projects = [
        ("e2e8f0/475569", "Project 1"),
        ("dbeafe/1e40af", "Project 2"),
        ("fef3c7/92400e", "Project 3"),
        ("d1fae5/065f46", "Project 4"),
    ]
    .iter()
    .map(|(colors, alt)| {
        node(
            NodeType::Image,
            json!({
                "src": format!("https://placehold.co/600x400/{}?text={}", colors, alt.replace(' ', "+")),
                "alt": alt
            }),
            style_map(&[("width", "100%"), ("borderRadius", "12px")]),
            Vec::new(),
        )
    })
    .collect();

    vec![
        navbar(),
        node(
            NodeType::Section,
            json!({}),
            style_map(&[
                ("padding", "80px 24px"),
                ("backgroundColor", "#fafafa"),
                ("display", "flex"),
                ("flexDirection", "column"),
                ("alignItems", "center"),
            ]),
            vec![
                with_mobile(
                    node(
                        NodeType::Heading,
                        json!({ "text": "Jane Designer", "level": 1 }),
                        style_map(&[("fontSize", "48px"), ("fontWeight", "800"), ("marginBottom", "8px")]),
                        Vec::new(),
                    ),
                    style_map(&[("fontSize", "32px")]),
                ),
                node(
                    NodeType::Text,
                    json!({ "text": "UI/UX Designer & Creative Director" }),
                    style_map(&[("fontSize", "20px"), ("color", "#6b7280"), ("marginBottom", "32px")]),
                    Vec::new(),
                ),
            ],
        ),
        node(
            NodeType::Section,
            json!({}),
            style_map(&[
                ("padding", "48px 24px"),
                ("display", "flex"),
                ("flexDirection", "column"),
                ("alignItems", "center"),
            ]),
            vec![
                node(
                    NodeType::Heading,
                    json!({ "text": "Selected Work", "level": 2 }),
                    style_map(&[("fontSize", "32px"), ("fontWeight", "700"), ("marginBottom", "32px")]),
                    Vec::new(),
                ),
                with_mobile(
                    node(
                        NodeType::Grid,
                        json!({ "columns": 2 }),
                        style_map(&[
                            ("display", "grid"),
                            ("gridTemplateColumns", "repeat(2, 1fr)"),
                            ("gap", "24px"),
                            ("maxWidth", "900px"),
                            ("width", "100%"),
                        ]),
                        projects,
                    ),
                    style_map(&[("gridTemplateColumns", "1fr")]),
                ),
            ],
        ),
        footer(),
    ]
}
