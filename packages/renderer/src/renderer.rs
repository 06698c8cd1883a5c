use crate::context::{Context, RenderOptions};
use crate::escape::{escape_html, sanitize_url};
use crate::styles::{inline_style, responsive_stylesheet};
use sitebuilder_schema::{Breakpoint, Link, Node, NodeType};
use tracing::debug;

const EDITOR_HOOKS: &str = "select hover";

/// Attribute list for one element. Values are stored escaped.
struct Attributes {
    pairs: Vec<(&'static str, String)>,
}

impl Attributes {
    fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    fn push(&mut self, name: &'static str, value: &str) {
        self.pairs.push((name, escape_html(value)));
    }

    fn push_escaped(&mut self, name: &'static str, value: String) {
        self.pairs.push((name, value));
    }

    fn write_into(&self, out: &mut String) {
        for (name, value) in &self.pairs {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            out.push_str(value);
            out.push('"');
        }
    }

    fn open_tag(&self, tag: &str) -> String {
        let mut out = format!("<{}", tag);
        self.write_into(&mut out);
        out.push('>');
        out
    }

    fn void_tag(&self, tag: &str) -> String {
        let mut out = format!("<{}", tag);
        self.write_into(&mut out);
        out.push_str(" />");
        out
    }
}

/// Render a node list without any wrapper.
///
/// The responsive stylesheet is not included; use [`render_canvas`] or
/// [`crate::render_page`] for complete output.
pub fn render_nodes(nodes: &[Node], options: &RenderOptions) -> String {
    let mut ctx = Context::new(options);
    for node in nodes {
        render_node(node, &mut ctx);
    }
    ctx.get_output()
}

/// Render the editor canvas: the node tree inside `<div class="editor-canvas">`.
///
/// Editable canvases carry the active breakpoint and its viewport width.
pub fn render_canvas(nodes: &[Node], options: &RenderOptions) -> String {
    let mut ctx = Context::new(options);

    let mut attrs = Attributes::new();
    attrs.push("class", "editor-canvas");
    if options.is_editable() {
        attrs.push("data-breakpoint", options.breakpoint.as_str());
        attrs.push(
            "style",
            &format!("width: {}; margin: 0 auto", options.breakpoint.viewport_width()),
        );
    }

    ctx.add_line(&attrs.open_tag("div"));
    ctx.indent();
    if options.responsive {
        render_stylesheet(nodes, &mut ctx);
    }
    for node in nodes {
        render_node(node, &mut ctx);
    }
    ctx.dedent();
    ctx.add_line("</div>");

    ctx.get_output()
}

pub(crate) fn render_stylesheet(nodes: &[Node], ctx: &mut Context) {
    if let Some(css) = responsive_stylesheet(nodes) {
        ctx.add_line("<style>");
        ctx.indent();
        ctx.add_block(&css);
        ctx.dedent();
        ctx.add_line("</style>");
    }
}

pub(crate) fn render_node(node: &Node, ctx: &mut Context) {
    match &node.node_type {
        NodeType::Section => render_box("section", node, ctx),
        NodeType::Container | NodeType::Grid | NodeType::Columns | NodeType::Column => {
            render_box("div", node, ctx)
        }
        NodeType::Heading => render_heading(node, ctx),
        NodeType::Text => render_text(node, ctx),
        NodeType::Button => render_button(node, ctx),
        NodeType::Image => render_image(node, ctx),
        NodeType::Spacer => {
            let attrs = styled_attributes(node, ctx, None);
            ctx.add_line(&format!("{}</div>", attrs.open_tag("div")));
        }
        NodeType::Divider => {
            let attrs = styled_attributes(node, ctx, None);
            ctx.add_line(&attrs.void_tag("hr"));
        }
        NodeType::Navbar => render_navbar(node, ctx),
        NodeType::Footer => render_footer(node, ctx),
        NodeType::Other(name) => {
            debug!("[Renderer] Unknown component type {:?} on node {}", name, node.id);
            let attrs = styled_attributes(node, ctx, None);
            ctx.add_line(&format!(
                "{}Unknown component: {}</div>",
                attrs.open_tag("div"),
                escape_html(name)
            ));
        }
    }
}

/// Identity and editor attributes shared by every node
fn node_attributes(node: &Node, ctx: &Context) -> Attributes {
    let options = ctx.options;
    let mut attrs = Attributes::new();

    if options.is_editable() {
        attrs.push("data-node-id", &node.id);
        attrs.push("data-editor-hooks", EDITOR_HOOKS);

        let selected = options.selected.as_deref() == Some(node.id.as_str());
        let hovered = options.hovered.as_deref() == Some(node.id.as_str());
        if selected {
            attrs.push("class", "node-selected");
        } else if hovered {
            attrs.push("class", "node-hovered");
        }
    } else if options.responsive {
        attrs.push("data-node-id", &node.id);
    }

    attrs
}

fn push_style(attrs: &mut Attributes, node: &Node, extra: Option<&str>) {
    let base = node.styles.get(Breakpoint::Base).and_then(inline_style);
    let style = match (base, extra) {
        (Some(base), Some(extra)) => Some(format!("{}; {}", base, extra)),
        (Some(base), None) => Some(base),
        (None, Some(extra)) => Some(extra.to_string()),
        (None, None) => None,
    };
    if let Some(style) = style {
        attrs.push_escaped("style", style);
    }
}

fn styled_attributes(node: &Node, ctx: &Context, extra: Option<&str>) -> Attributes {
    let mut attrs = node_attributes(node, ctx);
    push_style(&mut attrs, node, extra);
    attrs
}

fn placeholder_text(node_type: &NodeType) -> &'static str {
    match node_type {
        NodeType::Grid | NodeType::Columns => "Drop columns or components here",
        _ => "Drop components here",
    }
}

fn render_children(node: &Node, ctx: &mut Context) {
    for child in &node.children {
        render_node(child, ctx);
    }
}

fn render_box(tag: &str, node: &Node, ctx: &mut Context) {
    let attrs = styled_attributes(node, ctx, None);
    let open = attrs.open_tag(tag);

    if node.children.is_empty() {
        if ctx.options.is_editable() {
            ctx.add_line(&open);
            ctx.indent();
            ctx.add_line(&format!(
                "<div class=\"canvas-placeholder\">{}</div>",
                placeholder_text(&node.node_type)
            ));
            ctx.dedent();
            ctx.add_line(&format!("</{}>", tag));
        } else {
            ctx.add_line(&format!("{}</{}>", open, tag));
        }
        return;
    }

    ctx.add_line(&open);
    ctx.indent();
    render_children(node, ctx);
    ctx.dedent();
    ctx.add_line(&format!("</{}>", tag));
}

fn render_heading(node: &Node, ctx: &mut Context) {
    let level = node.heading_level().unwrap_or(2).clamp(1, 6);
    let tag = format!("h{}", level);
    let attrs = styled_attributes(node, ctx, None);
    ctx.add_line(&format!(
        "{}{}</{}>",
        attrs.open_tag(&tag),
        escape_html(node.text().unwrap_or_default()),
        tag
    ));
}

fn render_text(node: &Node, ctx: &mut Context) {
    let attrs = styled_attributes(node, ctx, None);
    let content = node
        .text()
        .unwrap_or_default()
        .split('\n')
        .map(escape_html)
        .collect::<Vec<_>>()
        .join("<br />");
    ctx.add_line(&format!("{}{}</p>", attrs.open_tag("p"), content));
}

fn render_button(node: &Node, ctx: &mut Context) {
    let text = escape_html(node.text().unwrap_or("Button"));

    if ctx.options.is_editable() {
        let attrs = styled_attributes(node, ctx, Some("cursor: pointer"));
        ctx.add_line(&format!("{}{}</span>", attrs.open_tag("span"), text));
    } else {
        let mut attrs = node_attributes(node, ctx);
        attrs.push("href", &sanitize_url(node.href().unwrap_or("#")));
        push_style(&mut attrs, node, None);
        ctx.add_line(&format!("{}{}</a>", attrs.open_tag("a"), text));
    }
}

fn render_image(node: &Node, ctx: &mut Context) {
    let mut attrs = node_attributes(node, ctx);
    attrs.push("src", &sanitize_url(node.src().unwrap_or_default()));
    attrs.push("alt", node.alt().unwrap_or_default());
    attrs.push("loading", "lazy");
    push_style(&mut attrs, node, None);
    ctx.add_line(&attrs.void_tag("img"));
}

/// Link row shared by navbar and footer
fn render_links(links: &[Link], row_style: &str, link_style: &str, published_style: &str, ctx: &mut Context) {
    ctx.add_line(&format!("<div style=\"{}\">", row_style));
    ctx.indent();
    for link in links {
        let label = escape_html(&link.label);
        if ctx.options.is_editable() {
            ctx.add_line(&format!("<span style=\"{}\">{}</span>", link_style, label));
        } else {
            ctx.add_line(&format!(
                "<a href=\"{}\" style=\"{}; {}\">{}</a>",
                escape_html(&sanitize_url(&link.href)),
                link_style,
                published_style,
                label
            ));
        }
    }
    ctx.dedent();
    ctx.add_line("</div>");
}

fn render_navbar(node: &Node, ctx: &mut Context) {
    let attrs = styled_attributes(node, ctx, None);
    ctx.add_line(&attrs.open_tag("nav"));
    ctx.indent();

    ctx.add_line(&format!(
        "<span style=\"font-weight: 700; font-size: 18px\">{}</span>",
        escape_html(node.logo_text().unwrap_or("Logo"))
    ));
    render_links(
        &node.nav_links(),
        "display: flex; gap: 24px",
        "font-size: 14px; color: #4b5563",
        "text-decoration: none",
        ctx,
    );
    render_children(node, ctx);

    ctx.dedent();
    ctx.add_line("</nav>");
}

fn render_footer(node: &Node, ctx: &mut Context) {
    let attrs = styled_attributes(node, ctx, None);
    ctx.add_line(&attrs.open_tag("footer"));
    ctx.indent();

    ctx.add_line(&format!(
        "<p style=\"margin-bottom: 8px; font-size: 14px\">{}</p>",
        escape_html(node.copyright_text().unwrap_or_default())
    ));
    render_links(
        &node.footer_links(),
        "display: flex; gap: 16px; justify-content: center",
        "font-size: 13px; opacity: 0.7",
        "color: inherit; text-decoration: none",
        ctx,
    );
    render_children(node, ctx);

    ctx.dedent();
    ctx.add_line("</footer>");
}
