//! # Page Schema
//!
//! The persisted unit exchanged with the page store:
//!
//! ```json
//! { "rootNodes": [ ...Node ], "version": 1 }
//! ```

use crate::node::Node;
use serde::{Deserialize, Serialize};

/// Schema version written by this build
pub const CURRENT_VERSION: u32 = 1;

fn default_version() -> u32 {
    CURRENT_VERSION
}

/// Serializable page document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageSchema {
    #[serde(default)]
    pub root_nodes: Vec<Node>,

    /// Forward-compatibility hook. No migrations exist yet.
    #[serde(default = "default_version")]
    pub version: u32,
}

impl PageSchema {
    pub fn new(root_nodes: Vec<Node>) -> Self {
        Self {
            root_nodes,
            version: CURRENT_VERSION,
        }
    }

    /// `{ rootNodes: [], version: 1 }`
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    pub fn view(&self) -> PageSchemaRef<'_> {
        PageSchemaRef {
            root_nodes: &self.root_nodes,
            version: self.version,
        }
    }
}

impl Default for PageSchema {
    fn default() -> Self {
        Self::empty()
    }
}

/// Borrowed view of a page, serializes exactly like [`PageSchema`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageSchemaRef<'a> {
    pub root_nodes: &'a [Node],
    pub version: u32,
}

impl PageSchemaRef<'_> {
    pub fn to_schema(&self) -> PageSchema {
        PageSchema {
            root_nodes: self.root_nodes.to_vec(),
            version: self.version,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::NodeType;
    use serde_json::json;

    #[test]
    fn test_version_defaults_to_one() {
        let schema: PageSchema = serde_json::from_value(json!({"rootNodes": []})).unwrap();
        assert_eq!(schema.version, 1);
    }

    #[test]
    fn test_missing_root_nodes_loads_empty() {
        let schema: PageSchema = serde_json::from_value(json!({"version": 3})).unwrap();
        assert!(schema.root_nodes.is_empty());
        assert_eq!(schema.version, 3);
    }

    #[test]
    fn test_borrowed_view_serializes_like_owned() {
        let schema = PageSchema::new(vec![Node::new("a", NodeType::Divider)]);
        let owned = serde_json::to_value(&schema).unwrap();
        let borrowed = serde_json::to_value(schema.view()).unwrap();
        assert_eq!(owned, borrowed);
        assert_eq!(schema.view().to_schema(), schema);
    }
}
