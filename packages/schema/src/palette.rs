//! Component palette shown to users when adding nodes.
//!
//! `column` is deliberately absent: columns are created by their `columns` parent.

use crate::node::NodeType;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PaletteCategory {
    Layout,
    Content,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaletteEntry {
    #[serde(rename = "type")]
    pub node_type: NodeType,
    pub label: &'static str,
    pub category: PaletteCategory,
}

macro_rules! entry {
    ($node_type:expr, $label:expr, $category:expr) => {
        PaletteEntry {
            node_type: $node_type,
            label: $label,
            category: $category,
        }
    };
}

pub const COMPONENT_PALETTE: [PaletteEntry; 12] = [
    entry!(NodeType::Section, "Section", PaletteCategory::Layout),
    entry!(NodeType::Container, "Container", PaletteCategory::Layout),
    entry!(NodeType::Columns, "Columns", PaletteCategory::Layout),
    entry!(NodeType::Grid, "Grid", PaletteCategory::Layout),
    entry!(NodeType::Heading, "Heading", PaletteCategory::Content),
    entry!(NodeType::Text, "Text", PaletteCategory::Content),
    entry!(NodeType::Button, "Button", PaletteCategory::Content),
    entry!(NodeType::Image, "Image", PaletteCategory::Content),
    entry!(NodeType::Spacer, "Spacer", PaletteCategory::Content),
    entry!(NodeType::Divider, "Divider", PaletteCategory::Content),
    entry!(NodeType::Navbar, "Navbar", PaletteCategory::Layout),
    entry!(NodeType::Footer, "Footer", PaletteCategory::Layout),
];

/// Palette entries in one category, in palette order
pub fn palette_by_category(category: PaletteCategory) -> Vec<PaletteEntry> {
    COMPONENT_PALETTE
        .into_iter()
        .filter(|entry| entry.category == category)
        .collect()
}

/// Display label for a node type (the raw type string for types outside the palette)
pub fn label_for(node_type: &NodeType) -> String {
    COMPONENT_PALETTE
        .iter()
        .find(|entry| &entry.node_type == node_type)
        .map(|entry| entry.label.to_string())
        .unwrap_or_else(|| node_type.to_string())
}
