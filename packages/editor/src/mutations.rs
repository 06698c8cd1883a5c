//! # Document Mutations
//!
//! Serializable form of every structural edit the store supports, so edits
//! can cross a process boundary (editor shell, scripting, replay logs).
//!
//! ## Mutation Semantics
//!
//! ### Add / AddFromData
//! - Inserted into the named container, or the root sequence when the parent is
//!   absent, missing or not a container
//! - The new node becomes the selection
//!
//! ### Move
//! - Index is read against the target after detaching, clamped
//! - Rejected when it would create a cycle or target a non-container
//!
//! ### Remove
//! - Removes node and all descendants
//!
//! ### UpdateProps / UpdateStyles
//! - Shallow merge, last write wins per key
//!
//! Mutations whose target does not exist are no-ops and leave history untouched.

use crate::errors::EditorError;
use crate::store::DocumentStore;
use serde::{Deserialize, Serialize};
use sitebuilder_schema::{validate_nodes, Breakpoint, Node, NodeType, Props, StyleMap, ValidationResult};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Mutation {
    /// Create a node from the type's defaults
    AddNode {
        node_type: NodeType,
        #[serde(default)]
        parent_id: Option<String>,
        #[serde(default)]
        index: Option<usize>,
    },

    /// Insert a prebuilt node (palette drag, paste)
    AddNodeFromData {
        node: Node,
        #[serde(default)]
        parent_id: Option<String>,
        #[serde(default)]
        index: Option<usize>,
    },

    /// Bulk append without changing selection
    InsertNodes {
        nodes: Vec<Node>,
        #[serde(default)]
        parent_id: Option<String>,
    },

    RemoveNode {
        node_id: String,
    },

    UpdateProps {
        node_id: String,
        props: Props,
    },

    UpdateStyles {
        node_id: String,
        breakpoint: Breakpoint,
        styles: StyleMap,
    },

    MoveNode {
        node_id: String,
        #[serde(default)]
        new_parent_id: Option<String>,
        index: usize,
    },

    DuplicateNode {
        node_id: String,
    },
}

/// What applying a mutation did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MutationOutcome {
    /// Target missing or move rejected; nothing recorded
    Unchanged,
    Changed,
    /// A node was created (add, duplicate); carries its id
    Created(String),
    /// Number of root-level nodes bulk-inserted
    Inserted(usize),
}

impl MutationOutcome {
    pub fn is_changed(&self) -> bool {
        !matches!(self, MutationOutcome::Unchanged | MutationOutcome::Inserted(0))
    }

    pub fn created_id(&self) -> Option<&str> {
        match self {
            MutationOutcome::Created(id) => Some(id),
            _ => None,
        }
    }
}

impl From<bool> for MutationOutcome {
    fn from(changed: bool) -> Self {
        if changed {
            MutationOutcome::Changed
        } else {
            MutationOutcome::Unchanged
        }
    }
}

impl Mutation {
    /// Decode a mutation from JSON, validating any node payload it carries
    pub fn from_json(source: &str) -> Result<Self, EditorError> {
        let mutation: Mutation = serde_json::from_str(source)?;
        mutation.validate()?;
        Ok(mutation)
    }

    /// Check node payloads (ids present and unique, prop shapes)
    pub fn validate(&self) -> ValidationResult<()> {
        match self {
            Mutation::AddNodeFromData { node, .. } => validate_nodes(std::slice::from_ref(node)),
            Mutation::InsertNodes { nodes, .. } => validate_nodes(nodes),
            _ => Ok(()),
        }
    }

    /// Short label used for history entries and logs
    pub fn describe(&self) -> &'static str {
        match self {
            Mutation::AddNode { .. } | Mutation::AddNodeFromData { .. } => "Add node",
            Mutation::InsertNodes { .. } => "Insert nodes",
            Mutation::RemoveNode { .. } => "Remove node",
            Mutation::UpdateProps { .. } => "Update props",
            Mutation::UpdateStyles { .. } => "Update styles",
            Mutation::MoveNode { .. } => "Move node",
            Mutation::DuplicateNode { .. } => "Duplicate node",
        }
    }

    /// Apply to a store through its public operations
    pub fn apply(self, store: &mut DocumentStore) -> MutationOutcome {
        match self {
            Mutation::AddNode {
                node_type,
                parent_id,
                index,
            } => MutationOutcome::Created(store.add_node(node_type, parent_id.as_deref(), index)),

            Mutation::AddNodeFromData {
                node,
                parent_id,
                index,
            } => MutationOutcome::Created(store.add_node_from_data(node, parent_id.as_deref(), index)),

            Mutation::InsertNodes { nodes, parent_id } => {
                MutationOutcome::Inserted(store.insert_nodes(nodes, parent_id.as_deref()))
            }

            Mutation::RemoveNode { node_id } => store.remove_node(&node_id).into(),

            Mutation::UpdateProps { node_id, props } => store.update_node_props(&node_id, props).into(),

            Mutation::UpdateStyles {
                node_id,
                breakpoint,
                styles,
            } => store.update_node_styles(&node_id, breakpoint, styles).into(),

            Mutation::MoveNode {
                node_id,
                new_parent_id,
                index,
            } => store.move_node(&node_id, new_parent_id.as_deref(), index).into(),

            Mutation::DuplicateNode { node_id } => match store.duplicate_node(&node_id) {
                Some(id) => MutationOutcome::Created(id),
                None => MutationOutcome::Unchanged,
            },
        }
    }
}
