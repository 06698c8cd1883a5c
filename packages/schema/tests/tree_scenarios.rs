//! Tree operations and schema loading against realistic pages

use anyhow::Result;
use serde_json::json;
use sitebuilder_schema::{
    create_node, create_node_with, parse_page, templates, tree, validate_nodes, Breakpoint, Node, NodeOverrides,
    NodeType, PageSchema, ValidationError,
};
use std::collections::HashSet;

fn assert_unique(roots: &[Node]) {
    let ids = tree::collect_ids(roots);
    let unique: HashSet<&String> = ids.iter().collect();
    assert_eq!(ids.len(), unique.len(), "duplicate ids in {:?}", ids);
}

#[test]
fn test_page_round_trip_keeps_unknown_types() -> Result<()> {
    let source = r#"{
        "rootNodes": [
            { "id": "a", "type": "carousel", "props": { "slides": 3 }, "styles": { "md": { "height": "200px" } } }
        ]
    }"#;

    let page = parse_page(source)?;
    assert_eq!(page.version, 1);
    assert_eq!(page.root_nodes[0].node_type, NodeType::Other("carousel".into()));

    let saved = serde_json::to_value(&page)?;
    assert_eq!(saved["rootNodes"][0]["type"], "carousel");
    assert_eq!(saved["rootNodes"][0]["styles"]["md"]["height"], "200px");
    assert_eq!(parse_page(&saved.to_string())?, page);
    Ok(())
}

#[test]
fn test_duplicate_chains_stay_unique() -> Result<()> {
    let mut roots = templates::template("landing").ok_or_else(|| anyhow::anyhow!("missing template"))?.root_nodes;
    let section = roots[1].id.clone();

    let mut latest = section.clone();
    for _ in 0..5 {
        latest = tree::duplicate(&mut roots, &latest).ok_or_else(|| anyhow::anyhow!("duplicate failed"))?;
    }
    for _ in 0..20 {
        roots.push(create_node(NodeType::Columns));
    }

    assert_unique(&roots);
    validate_nodes(&roots)?;
    Ok(())
}

#[test]
fn test_duplicate_is_deep() {
    let mut roots = vec![Node::new("card", NodeType::Container)
        .with_child(Node::new("title", NodeType::Heading).with_prop("text", "Original"))];

    let copy_id = tree::duplicate(&mut roots, "card").unwrap();
    let copy_title = tree::find_by_id(&roots, &copy_id).unwrap().children[0].id.clone();

    let title = tree::find_by_id_mut(&mut roots, &copy_title).unwrap();
    title.props.insert("text".into(), json!("Copy"));

    assert_eq!(tree::find_by_id(&roots, "title").unwrap().text(), Some("Original"));
    assert_eq!(roots[1].id, copy_id);
}

#[test]
fn test_parent_context_for_nested_node() {
    let mut roots = vec![Node::new("s", NodeType::Section).with_children([
        Node::new("a", NodeType::Text),
        Node::new("b", NodeType::Text),
        Node::new("c", NodeType::Text),
    ])];

    let context = tree::find_parent_context(&mut roots, "b").unwrap();
    assert_eq!(context.index, 1);
    assert_eq!(context.siblings.len(), 3);

    assert!(tree::find_parent_context(&mut roots, "zzz").is_none());
}

#[test]
fn test_move_rejections_leave_tree_intact() {
    let mut roots = vec![
        Node::new("s", NodeType::Section).with_child(Node::new("g", NodeType::Grid)),
        Node::new("t", NodeType::Text),
    ];
    let before = tree::deep_clone(&roots);

    assert!(!tree::move_node(&mut roots, "s", Some("g"), 0));
    assert!(!tree::move_node(&mut roots, "s", Some("t"), 0));
    assert!(!tree::move_node(&mut roots, "missing", None, 0));
    assert!(!tree::move_node(&mut roots, "t", Some("missing"), 0));
    assert_eq!(roots, before);

    assert!(tree::move_node(&mut roots, "t", Some("g"), 99));
    assert_eq!(tree::find_by_id(&roots, "g").unwrap().children[0].id, "t");
    assert_eq!(roots.len(), 1);
}

#[test]
fn test_overrides_merge_over_defaults() {
    let mut props = sitebuilder_schema::Props::new();
    props.insert("text".into(), json!("Buy now"));
    let node = create_node_with(NodeType::Button, NodeOverrides::default().props(props));

    assert_eq!(node.text(), Some("Buy now"));
    assert_eq!(node.href(), Some("#"));
    assert_eq!(node.styles.get(Breakpoint::Base).unwrap()["backgroundColor"], "#2563eb");

    let unknown = create_node(NodeType::parse("video"));
    assert!(unknown.props.is_empty());
    assert!(unknown.styles.get(Breakpoint::Base).map_or(false, |base| base.is_empty()));
}

#[test]
fn test_validation_paths() {
    let err = parse_page(
        r#"{ "rootNodes": [{ "id": "s", "type": "section", "children": [
            { "id": "n", "type": "navbar", "props": { "navLinks": [{ "label": "Home" }] } }
        ] }] }"#,
    )
    .unwrap_err();
    assert!(matches!(err, ValidationError::Invalid { ref path, .. } if path.starts_with("rootNodes[0].children[0].props.navLinks")));

    let page = PageSchema::new(vec![Node::new("x", NodeType::Text), Node::new("x", NodeType::Text)]);
    assert!(matches!(validate_nodes(&page.root_nodes), Err(ValidationError::DuplicateId { .. })));
}

#[test]
fn test_ensure_unique_ids_against_existing_tree() {
    let existing = vec![Node::new("hero", NodeType::Section)];
    let mut incoming = vec![
        Node::new("hero", NodeType::Section).with_child(Node::new("", NodeType::Text)),
        Node::new("fresh", NodeType::Divider),
    ];

    let replaced = tree::ensure_unique_ids(&existing, &mut incoming);
    assert_eq!(replaced, 2);
    assert_ne!(incoming[0].id, "hero");
    assert!(!incoming[0].children[0].id.is_empty());
    assert_eq!(incoming[1].id, "fresh");
}
