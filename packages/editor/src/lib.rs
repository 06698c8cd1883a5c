//! # Sitebuilder Editor
//!
//! Document editing engine for the visual page builder.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ schema: Node tree, factory, tree algorithms │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: DocumentStore                       │
//! │  - Structural edits with snapshot history   │
//! │  - Selection / hover / breakpoint / preview │
//! │  - Keyboard commands and canvas events      │
//! │  - Save tickets, autosave, page stores      │
//! │  - Generated content boundary               │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ renderer: tree → editable canvas / site HTML│
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **The tree is the source of truth**: rendered HTML is always derived
//! 2. **Missing targets are no-ops**: no errors, no history entries
//! 3. **Every structural edit is undoable**: one snapshot per edit or batch
//! 4. **Untrusted input is validated at the boundary**: loads, mutations, generated nodes
//!
//! ## Usage
//!
//! ```rust
//! use sitebuilder_editor::DocumentStore;
//! use sitebuilder_schema::{NodeType, PageSchema};
//!
//! let mut store = DocumentStore::new();
//! store.initialize("site-1", "home", PageSchema::empty());
//!
//! let section = store.add_node(NodeType::Section, None, None);
//! store.add_node(NodeType::Heading, Some(&section), None);
//! assert_eq!(store.undo_levels(), 2);
//!
//! store.undo();
//! assert!(store.find_node(&section).unwrap().children.is_empty());
//! ```

pub mod autosave;
pub mod commands;
pub mod config;
mod errors;
pub mod generation;
mod mutations;
pub mod persistence;
mod store;
mod undo_stack;

pub use autosave::{Autosaver, SharedDocument};
pub use commands::{EditorCommand, FocusTarget, KeyPress};
pub use config::EditorConfig;
pub use errors::{EditorError, GenerationError, PersistenceError};
pub use generation::{generate_into, parse_generated_nodes, ContentGenerator, GenerationRequest};
pub use mutations::{Mutation, MutationOutcome};
pub use persistence::{FilePageStore, MemoryPageStore, PageStore};
pub use store::{CanvasEvent, DocumentStore, LeftPanel, SaveTicket, DEFAULT_COLUMN_COUNT, MAX_COLUMN_COUNT};
pub use undo_stack::{HistoryEntry, UndoStack};
