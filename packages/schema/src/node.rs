//! # Page Nodes
//!
//! The recursive document entity: a typed node with open props, per-breakpoint
//! styles and ordered children.
//!
//! ```text
//! Node
//!  ├─ id        unique opaque string (UUID v4 when built by the factory)
//!  ├─ type      closed set of component kinds (+ Other for unknown strings)
//!  ├─ props     JSON object, meaning depends on type
//!  ├─ styles    { base?, md?, sm? } → ordered property/value maps
//!  └─ children  ordered child nodes (containers only, by convention)
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use std::fmt;

/// Component props, interpreted per node type
pub type Props = Map<String, Value>;

/// Flat style map (property name → CSS value), insertion ordered
pub type StyleMap = IndexMap<String, String>;

/// Component kinds known to the editor
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NodeType {
    Section,
    Container,
    Heading,
    Text,
    Button,
    Image,
    Spacer,
    Divider,
    Grid,
    Columns,
    Column,
    Navbar,
    Footer,
    /// A type string this build does not know. Kept verbatim so it survives load/save.
    Other(String),
}

impl NodeType {
    /// Every known component kind, in palette order
    pub const ALL: [NodeType; 13] = [
        NodeType::Section,
        NodeType::Container,
        NodeType::Heading,
        NodeType::Text,
        NodeType::Button,
        NodeType::Image,
        NodeType::Spacer,
        NodeType::Divider,
        NodeType::Grid,
        NodeType::Columns,
        NodeType::Column,
        NodeType::Navbar,
        NodeType::Footer,
    ];

    /// Parse a type string. Never fails: unknown strings become `Other`.
    pub fn parse(value: &str) -> Self {
        match value {
            "section" => NodeType::Section,
            "container" => NodeType::Container,
            "heading" => NodeType::Heading,
            "text" => NodeType::Text,
            "button" => NodeType::Button,
            "image" => NodeType::Image,
            "spacer" => NodeType::Spacer,
            "divider" => NodeType::Divider,
            "grid" => NodeType::Grid,
            "columns" => NodeType::Columns,
            "column" => NodeType::Column,
            "navbar" => NodeType::Navbar,
            "footer" => NodeType::Footer,
            other => NodeType::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            NodeType::Section => "section",
            NodeType::Container => "container",
            NodeType::Heading => "heading",
            NodeType::Text => "text",
            NodeType::Button => "button",
            NodeType::Image => "image",
            NodeType::Spacer => "spacer",
            NodeType::Divider => "divider",
            NodeType::Grid => "grid",
            NodeType::Columns => "columns",
            NodeType::Column => "column",
            NodeType::Navbar => "navbar",
            NodeType::Footer => "footer",
            NodeType::Other(name) => name,
        }
    }

    /// Whether mutation operations may attach children to this kind
    pub fn is_container(&self) -> bool {
        matches!(
            self,
            NodeType::Section
                | NodeType::Container
                | NodeType::Grid
                | NodeType::Columns
                | NodeType::Column
                | NodeType::Navbar
                | NodeType::Footer
        )
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, NodeType::Other(_))
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for NodeType {
    fn from(value: &str) -> Self {
        NodeType::parse(value)
    }
}

impl Serialize for NodeType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for NodeType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Ok(NodeType::parse(&value))
    }
}

/// Responsive tier a style set applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Breakpoint {
    /// Default / desktop
    #[default]
    Base,
    /// Tablet
    Md,
    /// Mobile
    Sm,
}

impl Breakpoint {
    pub const ALL: [Breakpoint; 3] = [Breakpoint::Base, Breakpoint::Md, Breakpoint::Sm];

    pub fn as_str(&self) -> &'static str {
        match self {
            Breakpoint::Base => "base",
            Breakpoint::Md => "md",
            Breakpoint::Sm => "sm",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "base" => Some(Breakpoint::Base),
            "md" => Some(Breakpoint::Md),
            "sm" => Some(Breakpoint::Sm),
            _ => None,
        }
    }

    /// Canvas width the editor uses to emulate this breakpoint
    pub fn viewport_width(&self) -> &'static str {
        match self {
            Breakpoint::Base => "100%",
            Breakpoint::Md => "768px",
            Breakpoint::Sm => "375px",
        }
    }
}

impl fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Style overrides per breakpoint. `md` and `sm` are overlays on `base`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResponsiveStyles {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base: Option<StyleMap>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub md: Option<StyleMap>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sm: Option<StyleMap>,
}

impl ResponsiveStyles {
    /// Styles with only a base map
    pub fn with_base(base: StyleMap) -> Self {
        Self {
            base: Some(base),
            md: None,
            sm: None,
        }
    }

    pub fn get(&self, breakpoint: Breakpoint) -> Option<&StyleMap> {
        self.slot(breakpoint).as_ref()
    }

    fn slot(&self, breakpoint: Breakpoint) -> &Option<StyleMap> {
        match breakpoint {
            Breakpoint::Base => &self.base,
            Breakpoint::Md => &self.md,
            Breakpoint::Sm => &self.sm,
        }
    }

    fn slot_mut(&mut self, breakpoint: Breakpoint) -> &mut Option<StyleMap> {
        match breakpoint {
            Breakpoint::Base => &mut self.base,
            Breakpoint::Md => &mut self.md,
            Breakpoint::Sm => &mut self.sm,
        }
    }

    /// Mutable style map for a breakpoint, created empty if absent
    pub fn entry(&mut self, breakpoint: Breakpoint) -> &mut StyleMap {
        self.slot_mut(breakpoint).get_or_insert_with(StyleMap::new)
    }

    /// Replace a breakpoint's whole map
    pub fn set(&mut self, breakpoint: Breakpoint, styles: StyleMap) {
        *self.slot_mut(breakpoint) = Some(styles);
    }

    /// Shallow-merge `partial` into the breakpoint's map (keys in `partial` win)
    pub fn merge(&mut self, breakpoint: Breakpoint, partial: StyleMap) {
        let target = self.entry(breakpoint);
        for (key, value) in partial {
            target.insert(key, value);
        }
    }

    /// Breakpoints that carry a map, in base/md/sm order
    pub fn iter(&self) -> impl Iterator<Item = (Breakpoint, &StyleMap)> {
        Breakpoint::ALL
            .into_iter()
            .filter_map(move |bp| self.get(bp).map(|styles| (bp, styles)))
    }
}

/// Hyperlink entry used by navbar and footer link lists
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub label: String,
    pub href: String,
}

impl Link {
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
        }
    }
}

/// A node in the page tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,

    #[serde(rename = "type")]
    pub node_type: NodeType,

    #[serde(default)]
    pub props: Props,

    #[serde(default)]
    pub styles: ResponsiveStyles,

    #[serde(default)]
    pub children: Vec<Node>,
}

impl Node {
    /// Bare node with no props, styles or children
    pub fn new(id: impl Into<String>, node_type: NodeType) -> Self {
        Self {
            id: id.into(),
            node_type,
            props: Props::new(),
            styles: ResponsiveStyles::default(),
            children: Vec::new(),
        }
    }

    pub fn is_container(&self) -> bool {
        self.node_type.is_container()
    }

    pub fn with_prop(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.props.insert(key.into(), value.into());
        self
    }

    pub fn with_style(
        mut self,
        breakpoint: Breakpoint,
        property: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.styles.entry(breakpoint).insert(property.into(), value.into());
        self
    }

    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    /// String prop, `None` when absent or not a string
    pub fn prop_str(&self, key: &str) -> Option<&str> {
        self.props.get(key).and_then(Value::as_str)
    }

    pub fn text(&self) -> Option<&str> {
        self.prop_str("text")
    }

    pub fn href(&self) -> Option<&str> {
        self.prop_str("href")
    }

    pub fn src(&self) -> Option<&str> {
        self.prop_str("src")
    }

    pub fn alt(&self) -> Option<&str> {
        self.prop_str("alt")
    }

    pub fn logo_text(&self) -> Option<&str> {
        self.prop_str("logoText")
    }

    pub fn copyright_text(&self) -> Option<&str> {
        self.prop_str("copyrightText")
    }

    /// Raw `level` prop. Range checking is left to callers.
    pub fn heading_level(&self) -> Option<i64> {
        let value = self.props.get("level")?;
        value
            .as_i64()
            .or_else(|| value.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64))
    }

    /// Raw `columns` prop for grid/columns nodes
    pub fn column_count(&self) -> Option<i64> {
        self.props.get("columns").and_then(Value::as_i64)
    }

    /// Link list stored under `key` (`navLinks`, `footerLinks`).
    ///
    /// Entries that are not `{label: string, href: string}` objects are skipped.
    pub fn links(&self, key: &str) -> Vec<Link> {
        let Some(Value::Array(items)) = self.props.get(key) else {
            return Vec::new();
        };

        items
            .iter()
            .filter_map(|item| {
                let label = item.get("label")?.as_str()?;
                let href = item.get("href")?.as_str()?;
                Some(Link::new(label, href))
            })
            .collect()
    }

    pub fn nav_links(&self) -> Vec<Link> {
        self.links("navLinks")
    }

    pub fn footer_links(&self) -> Vec<Link> {
        self.links("footerLinks")
    }

    /// Visit this node and every descendant, pre-order
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a Node)) {
        visit(self);
        for child in &self.children {
            child.walk(visit);
        }
    }
}
