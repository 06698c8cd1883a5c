use std::borrow::Cow;

/// Escape text for HTML content and attribute values
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Replace URLs with an executable scheme by `#`.
///
/// `javascript:` and `vbscript:` are always rejected, `data:` unless it is an
/// image. Browsers ignore whitespace and control characters inside a scheme,
/// so those are stripped before the check.
pub fn sanitize_url(url: &str) -> Cow<'_, str> {
    let normalized: String = url
        .chars()
        .filter(|c| !c.is_whitespace() && !c.is_control())
        .take(16)
        .collect::<String>()
        .to_ascii_lowercase();

    let unsafe_scheme = normalized.starts_with("javascript:")
        || normalized.starts_with("vbscript:")
        || (normalized.starts_with("data:") && !normalized.starts_with("data:image/"));

    if unsafe_scheme {
        Cow::Borrowed("#")
    } else {
        Cow::Borrowed(url)
    }
}

/// `backgroundColor` → `background-color`, `WebkitTransition` → `-webkit-transition`,
/// `msTransform` → `-ms-transform`. Custom properties (`--x`) pass through.
pub fn kebab_case(property: &str) -> String {
    if property.starts_with("--") {
        return property.to_string();
    }

    let mut out = String::with_capacity(property.len() + 4);
    if property.starts_with("ms") && property[2..].starts_with(|c: char| c.is_ascii_uppercase()) {
        out.push('-');
    }
    for c in property.chars() {
        if c.is_ascii_uppercase() {
            out.push('-');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// CSS property names are limited to letters, digits and hyphens
pub(crate) fn is_valid_property(property: &str) -> bool {
    !property.is_empty() && property.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}

/// Quote a value for a CSS attribute selector (`[data-node-id="..."]`)
pub(crate) fn css_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '<' => out.push_str("\\3c "),
            '\n' => out.push_str("\\a "),
            c if c.is_control() => {}
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
