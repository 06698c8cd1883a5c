//! Inline styles and the responsive overlay stylesheet

use crate::escape::{css_string, escape_html, is_valid_property, kebab_case};
use sitebuilder_schema::{Breakpoint, Node, StyleMap};

/// Media query for each overlay tier
fn media_query(breakpoint: Breakpoint) -> Option<&'static str> {
    match breakpoint {
        Breakpoint::Base => None,
        Breakpoint::Md => Some("@media (max-width: 768px)"),
        Breakpoint::Sm => Some("@media (max-width: 640px)"),
    }
}

/// Whether `value` ends the declaration or its block.
///
/// Only `;`, `{` and `}` outside quotes and parentheses count, so
/// `url("data:image/png;base64,...")` stays intact.
fn has_top_level_break(value: &str) -> bool {
    let mut quote: Option<char> = None;
    let mut depth = 0usize;
    let mut chars = value.chars();

    while let Some(c) = chars.next() {
        match (quote, c) {
            (Some(_), '\\') => {
                chars.next();
            }
            (Some(q), c) if c == q => quote = None,
            (Some(_), _) => {}
            (None, '"' | '\'') => quote = Some(c),
            (None, '(') => depth += 1,
            (None, ')') => depth = depth.saturating_sub(1),
            (None, ';' | '{' | '}') if depth == 0 => return true,
            _ => {}
        }
    }

    // An unterminated quote or paren would swallow what follows
    quote.is_some() || depth > 0
}

/// Values that could break out of a declaration block or the `<style>` element
fn is_safe_value(value: &str) -> bool {
    !value.contains('<') && !has_top_level_break(value)
}

fn declarations<'a>(styles: &'a StyleMap) -> impl Iterator<Item = (String, &'a str)> + 'a {
    styles
        .iter()
        .map(|(key, value)| (kebab_case(key), value.trim()))
        .filter(|(property, value)| is_valid_property(property) && !value.is_empty())
}

/// Serialize a style map as an escaped `style` attribute value.
///
/// Returns `None` when nothing survives filtering.
pub fn inline_style(styles: &StyleMap) -> Option<String> {
    let css = declarations(styles)
        .filter(|(_, value)| !has_top_level_break(value))
        .map(|(property, value)| format!("{}: {}", property, value))
        .collect::<Vec<_>>()
        .join("; ");

    if css.is_empty() {
        None
    } else {
        Some(escape_html(&css))
    }
}

/// Collect `md`/`sm` overlays of the whole tree into one stylesheet.
///
/// Rules target `[data-node-id="..."]` and use `!important` so they win over
/// the inline base styles. `None` when no node has an overlay.
pub fn responsive_stylesheet(nodes: &[Node]) -> Option<String> {
    let mut css = String::new();

    for breakpoint in [Breakpoint::Md, Breakpoint::Sm] {
        let mut rules = String::new();
        for root in nodes {
            root.walk(&mut |node| {
                let Some(styles) = node.styles.get(breakpoint) else {
                    return;
                };
                let body = declarations(styles)
                    .filter(|(_, value)| is_safe_value(value))
                    .map(|(property, value)| format!("{}: {} !important;", property, value))
                    .collect::<Vec<_>>()
                    .join(" ");
                if !body.is_empty() {
                    rules.push_str(&format!(
                        "  [data-node-id={}] {{ {} }}\n",
                        css_string(&node.id),
                        body
                    ));
                }
            });
        }

        if let (false, Some(query)) = (rules.is_empty(), media_query(breakpoint)) {
            css.push_str(query);
            css.push_str(" {\n");
            css.push_str(&rules);
            css.push_str("}\n");
        }
    }

    if css.is_empty() {
        None
    } else {
        Some(css)
    }
}
