//! # Undo/Redo Stack
//!
//! Snapshot history for the document tree.
//!
//! ## Design
//!
//! - Each recorded entry is a full copy of the root sequence taken *before* an edit
//! - Undo swaps the current tree with the newest entry and parks the current tree on the redo stack
//! - Redo is the mirror image
//! - Recording a new entry clears the redo stack
//! - Batches collapse several edits into one undo step (only the first snapshot is kept)
//!
//! ## Example
//!
//! ```rust
//! use sitebuilder_editor::{HistoryEntry, UndoStack};
//! use sitebuilder_schema::{Node, NodeType};
//!
//! let mut stack = UndoStack::new();
//! let mut tree = vec![Node::new("a", NodeType::Section)];
//!
//! stack.record(HistoryEntry::new(tree.clone()));
//! tree.clear();
//!
//! assert!(stack.undo(&mut tree));
//! assert_eq!(tree.len(), 1);
//! assert!(stack.redo(&mut tree));
//! assert!(tree.is_empty());
//! ```

use sitebuilder_schema::Node;
use std::collections::VecDeque;

/// Tree state captured before an edit
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    pub root_nodes: Vec<Node>,

    /// Optional label for the edit that followed this snapshot
    pub description: Option<String>,
}

impl HistoryEntry {
    pub fn new(root_nodes: Vec<Node>) -> Self {
        Self {
            root_nodes,
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

#[derive(Debug, Default)]
struct OpenBatch {
    entry: Option<HistoryEntry>,
    description: Option<String>,
}

/// Undo/redo stack for document editing
#[derive(Debug)]
pub struct UndoStack {
    /// Oldest first
    undo_stack: VecDeque<HistoryEntry>,

    /// Most recently undone last
    redo_stack: Vec<HistoryEntry>,

    /// Maximum number of undo levels (0 = unlimited)
    max_levels: usize,

    current_batch: Option<OpenBatch>,
}

impl UndoStack {
    /// Create a new undo stack with default max levels (100)
    pub fn new() -> Self {
        Self::with_max_levels(100)
    }

    pub fn with_max_levels(max_levels: usize) -> Self {
        Self {
            undo_stack: VecDeque::new(),
            redo_stack: Vec::new(),
            max_levels,
            current_batch: None,
        }
    }

    pub fn max_levels(&self) -> usize {
        self.max_levels
    }

    pub fn set_max_levels(&mut self, max_levels: usize) {
        self.max_levels = max_levels;
        self.trim();
    }

    /// Record the pre-edit snapshot of a change that already happened
    pub fn record(&mut self, entry: HistoryEntry) {
        self.redo_stack.clear();

        match &mut self.current_batch {
            Some(batch) => {
                if batch.entry.is_none() {
                    batch.entry = Some(entry);
                }
            }
            None => self.push(entry),
        }
    }

    /// Start a batch of edits that undo/redo together
    pub fn begin_batch(&mut self) {
        self.end_batch();
        self.current_batch = Some(OpenBatch::default());
    }

    /// End the current batch and push it to the undo stack
    pub fn end_batch(&mut self) {
        if let Some(batch) = self.current_batch.take() {
            if let Some(mut entry) = batch.entry {
                if batch.description.is_some() {
                    entry.description = batch.description;
                }
                self.push(entry);
            }
        }
    }

    pub fn set_batch_description(&mut self, description: impl Into<String>) {
        if let Some(batch) = &mut self.current_batch {
            batch.description = Some(description.into());
        }
    }

    pub fn is_batching(&self) -> bool {
        self.current_batch.is_some()
    }

    fn push(&mut self, entry: HistoryEntry) {
        self.undo_stack.push_back(entry);
        self.trim();
    }

    fn trim(&mut self) {
        if self.max_levels == 0 {
            return;
        }
        while self.undo_stack.len() > self.max_levels {
            self.undo_stack.pop_front();
        }
    }

    /// Restore the newest snapshot into `current`. Returns false when there is nothing to undo.
    pub fn undo(&mut self, current: &mut Vec<Node>) -> bool {
        self.end_batch();
        let Some(entry) = self.undo_stack.pop_back() else {
            return false;
        };

        let HistoryEntry {
            root_nodes,
            description,
        } = entry;
        let replaced = std::mem::replace(current, root_nodes);
        self.redo_stack.push(HistoryEntry {
            root_nodes: replaced,
            description,
        });
        true
    }

    /// Reapply the most recently undone state
    pub fn redo(&mut self, current: &mut Vec<Node>) -> bool {
        self.end_batch();
        let Some(entry) = self.redo_stack.pop() else {
            return false;
        };

        let HistoryEntry {
            root_nodes,
            description,
        } = entry;
        let replaced = std::mem::replace(current, root_nodes);
        self.push(HistoryEntry {
            root_nodes: replaced,
            description,
        });
        true
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty() || self.pending_batch()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Undo levels available, counting an open batch that already holds an edit
    pub fn undo_levels(&self) -> usize {
        self.undo_stack.len() + usize::from(self.pending_batch())
    }

    pub fn redo_levels(&self) -> usize {
        self.redo_stack.len()
    }

    fn pending_batch(&self) -> bool {
        self.current_batch
            .as_ref()
            .is_some_and(|batch| batch.entry.is_some())
    }

    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
        self.current_batch = None;
    }

    pub fn undo_description(&self) -> Option<&str> {
        self.undo_stack
            .back()
            .and_then(|entry| entry.description.as_deref())
    }

    pub fn redo_description(&self) -> Option<&str> {
        self.redo_stack
            .last()
            .and_then(|entry| entry.description.as_deref())
    }
}

impl Default for UndoStack {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sitebuilder_schema::NodeType;

    fn tree(ids: &[&str]) -> Vec<Node> {
        ids.iter().map(|id| Node::new(*id, NodeType::Spacer)).collect()
    }

    fn ids(nodes: &[Node]) -> Vec<&str> {
        nodes.iter().map(|n| n.id.as_str()).collect()
    }

    #[test]
    fn test_undo_stack_creation() {
        let stack = UndoStack::new();
        assert_eq!(stack.undo_levels(), 0);
        assert_eq!(stack.redo_levels(), 0);
        assert_eq!(stack.max_levels(), 100);
        assert!(!stack.can_undo());
        assert!(!stack.can_redo());
    }

    #[test]
    fn test_undo_and_redo_swap_states() {
        let mut stack = UndoStack::new();
        let mut current = tree(&["a"]);

        stack.record(HistoryEntry::new(current.clone()).with_description("Add b"));
        current.push(Node::new("b", NodeType::Spacer));

        assert!(stack.undo(&mut current));
        assert_eq!(ids(&current), vec!["a"]);
        assert_eq!(stack.redo_description(), Some("Add b"));

        assert!(stack.redo(&mut current));
        assert_eq!(ids(&current), vec!["a", "b"]);
        assert_eq!(stack.undo_description(), Some("Add b"));
    }

    #[test]
    fn test_empty_stacks_are_noops() {
        let mut stack = UndoStack::new();
        let mut current = tree(&["a"]);
        assert!(!stack.undo(&mut current));
        assert!(!stack.redo(&mut current));
        assert_eq!(ids(&current), vec!["a"]);
    }

    #[test]
    fn test_batch_keeps_first_snapshot() {
        let mut stack = UndoStack::new();
        let mut current = tree(&[]);

        stack.begin_batch();
        stack.set_batch_description("Paste");
        for id in ["a", "b", "c"] {
            stack.record(HistoryEntry::new(current.clone()));
            current.push(Node::new(id, NodeType::Spacer));
        }
        assert_eq!(stack.undo_levels(), 1);
        stack.end_batch();

        assert_eq!(stack.undo_levels(), 1);
        assert_eq!(stack.undo_description(), Some("Paste"));
        stack.undo(&mut current);
        assert!(current.is_empty());
    }

    #[test]
    fn test_empty_batch_records_nothing() {
        let mut stack = UndoStack::new();
        stack.begin_batch();
        stack.end_batch();
        assert!(!stack.can_undo());
    }

    #[test]
    fn test_record_clears_redo() {
        let mut stack = UndoStack::new();
        let mut current = tree(&["a"]);
        stack.record(HistoryEntry::new(current.clone()));
        current.clear();
        stack.undo(&mut current);
        assert_eq!(stack.redo_levels(), 1);

        stack.record(HistoryEntry::new(current.clone()));
        assert_eq!(stack.redo_levels(), 0);
    }

    #[test]
    fn test_max_levels_enforced() {
        let mut stack = UndoStack::with_max_levels(2);
        for i in 0..3 {
            stack.record(HistoryEntry::new(tree(&[])).with_description(format!("Edit {}", i)));
        }
        assert_eq!(stack.undo_levels(), 2);
        assert_eq!(stack.undo_description(), Some("Edit 2"));

        stack.set_max_levels(1);
        assert_eq!(stack.undo_levels(), 1);
    }

    #[test]
    fn test_zero_means_unlimited() {
        let mut stack = UndoStack::with_max_levels(0);
        for _ in 0..250 {
            stack.record(HistoryEntry::new(Vec::new()));
        }
        assert_eq!(stack.undo_levels(), 250);
    }
}
