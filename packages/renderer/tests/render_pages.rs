//! Rendering whole pages built from the starter templates

use sitebuilder_renderer::{render_canvas, render_page, PageMeta, RenderOptions};
use sitebuilder_schema::{parse_page, templates, tree, Breakpoint, NodeType, PageSchema};

#[test]
fn test_every_template_renders_in_both_modes() {
    for name in templates::template_names() {
        let page = templates::template(name).unwrap();

        let published = render_page(page.view(), &PageMeta::new(name), &RenderOptions::published());
        assert!(published.contains("<body>"), "{}", name);
        assert!(!published.contains("data-editor-hooks"), "{}", name);
        assert!(!published.contains("Unknown component"), "{}", name);

        let editable = render_canvas(&page.root_nodes, &RenderOptions::editable());
        assert_eq!(
            editable.matches("data-editor-hooks=\"select hover\"").count(),
            tree::count_nodes(&page.root_nodes),
            "{}",
            name
        );
    }
}

#[test]
fn test_blank_template_shows_only_the_wrapper() {
    let page = templates::template("blank").unwrap();
    let html = render_canvas(&page.root_nodes, &RenderOptions::editable().compact());
    assert_eq!(
        html,
        "<div class=\"editor-canvas\" data-breakpoint=\"base\" style=\"width: 100%; margin: 0 auto\"></div>"
    );
}

#[test]
fn test_landing_links_are_live_only_when_published() {
    let page = templates::template("landing").unwrap();
    let navbar = page
        .root_nodes
        .iter()
        .find(|node| node.node_type == NodeType::Navbar)
        .unwrap();
    let first_link = navbar.nav_links().into_iter().next().unwrap();
    let href = format!("href=\"{}\"", first_link.href);

    let published = render_page(page.view(), &PageMeta::new("Landing"), &RenderOptions::published());
    assert!(published.contains(&href));

    let editable = render_canvas(&page.root_nodes, &RenderOptions::editable());
    assert!(!editable.contains("<a "));
}

#[test]
fn test_hostile_page_from_json() {
    let json = r#"{
        "rootNodes": [
            {
                "id": "x\"><script>alert(1)</script>",
                "type": "section",
                "styles": {
                    "base": { "background": "url(\"a\")" },
                    "sm": { "color": "red" }
                },
                "children": [
                    { "id": "link", "type": "button", "props": { "text": "<b>Buy</b>", "href": " javascript:steal()" } },
                    { "id": "who", "type": "marquee", "props": {} }
                ]
            }
        ]
    }"#;
    let page: PageSchema = parse_page(json).unwrap();
    let options = RenderOptions::published().with_responsive(true);
    let html = render_page(page.view(), &PageMeta::new("<Shop>"), &options);

    assert!(!html.contains("<script>"));
    assert!(!html.contains("<b>"));
    assert!(!html.contains("javascript:"));
    assert!(html.contains("<title>&lt;Shop&gt;</title>"));
    assert!(html.contains("Unknown component: marquee"));
    assert!(html.contains("@media (max-width: 640px)"));
    assert!(html.contains("\\3c /script>"));

    let editable = render_canvas(
        &page.root_nodes,
        &RenderOptions::editable().with_breakpoint(Breakpoint::Md),
    );
    assert!(!editable.contains("<script>"));
    assert!(editable.contains("width: 768px"));
}
