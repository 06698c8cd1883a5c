//! # Document Store
//!
//! Authoritative in-memory state for one page being edited: the node tree,
//! view state (selection, hover, breakpoint, preview, side panel), save
//! status and snapshot history.
//!
//! Every structural edit follows the same protocol:
//!
//! ```text
//! snapshot tree → apply edit → changed? ── no ──→ discard snapshot (no history, still clean)
//!                                  │
//!                                 yes → record snapshot, clear redo, mark dirty, bump generation
//! ```
//!
//! Targets that do not exist are silent no-ops. View-state changes never touch history.

use crate::commands::EditorCommand;
use crate::config::EditorConfig;
use crate::mutations::{Mutation, MutationOutcome};
use crate::undo_stack::{HistoryEntry, UndoStack};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sitebuilder_schema::{
    create_node, tree, Breakpoint, Node, NodeType, PageSchema, PageSchemaRef, Props, StyleMap,
    CURRENT_VERSION,
};
use tracing::{debug, info};

/// Column children created for a new `columns` node when its prop is unusable
pub const DEFAULT_COLUMN_COUNT: usize = 2;

/// Upper bound on auto-populated column children
pub const MAX_COLUMN_COUNT: usize = 12;

/// Which tab the editor's left side panel shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeftPanel {
    #[default]
    Components,
    Layers,
}

/// Pointer events reported by the editable canvas
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum CanvasEvent {
    /// Click on a node (the innermost node under the pointer)
    Click { node_id: String },
    PointerEnter { node_id: String },
    PointerLeave { node_id: String },
    /// Click on empty canvas space
    BackgroundClick,
}

/// Snapshot handed to a page store, tagged with the edit generation it reflects
#[derive(Debug, Clone, PartialEq)]
pub struct SaveTicket {
    pub page_id: Option<String>,
    pub generation: u64,
    pub schema: PageSchema,
}

/// Editing state for a single page
#[derive(Debug)]
pub struct DocumentStore {
    site_id: Option<String>,
    page_id: Option<String>,
    root_nodes: Vec<Node>,

    selected_node_id: Option<String>,
    hovered_node_id: Option<String>,
    breakpoint: Breakpoint,
    is_preview_mode: bool,
    left_panel: LeftPanel,

    is_dirty: bool,
    is_saving: bool,
    last_saved: Option<DateTime<Utc>>,

    history: UndoStack,

    /// Bumped on every tree change, including undo/redo
    edit_generation: u64,
}

impl DocumentStore {
    /// Empty, clean store with default history limit
    pub fn new() -> Self {
        Self::with_config(&EditorConfig::default())
    }

    pub fn with_config(config: &EditorConfig) -> Self {
        Self {
            site_id: None,
            page_id: None,
            root_nodes: Vec::new(),
            selected_node_id: None,
            hovered_node_id: None,
            breakpoint: Breakpoint::Base,
            is_preview_mode: false,
            left_panel: LeftPanel::Components,
            is_dirty: false,
            is_saving: false,
            last_saved: None,
            history: UndoStack::with_max_levels(config.history_limit),
            edit_generation: 0,
        }
    }

    /// Load a page. Clears history, selection and hover; the document starts clean.
    pub fn initialize(&mut self, site_id: impl Into<String>, page_id: impl Into<String>, schema: PageSchema) {
        let site_id = site_id.into();
        let page_id = page_id.into();
        info!(
            "[Store] Loaded page {} of site {} ({} nodes)",
            page_id,
            site_id,
            tree::count_nodes(&schema.root_nodes)
        );

        self.site_id = Some(site_id);
        self.page_id = Some(page_id);
        self.root_nodes = schema.root_nodes;
        self.selected_node_id = None;
        self.hovered_node_id = None;
        self.is_dirty = false;
        self.is_saving = false;
        self.history.clear();
        // Invalidates save tickets issued for the previous page
        self.edit_generation += 1;
    }

    // ------------------------------------------------------------------
    // Structural edits
    // ------------------------------------------------------------------

    /// Run `change` against the tree under the mutation protocol. Returns whether it changed anything.
    fn edit(&mut self, description: &str, change: impl FnOnce(&mut Vec<Node>) -> bool) -> bool {
        let snapshot = tree::deep_clone(&self.root_nodes);
        if !change(&mut self.root_nodes) {
            debug!("[Store] {} changed nothing", description);
            return false;
        }

        self.history
            .record(HistoryEntry::new(snapshot).with_description(description));
        self.touch();
        debug!(
            "[Store] {} (generation {}, {} undo levels)",
            description,
            self.edit_generation,
            self.history.undo_levels()
        );
        true
    }

    fn touch(&mut self) {
        self.is_dirty = true;
        self.edit_generation += 1;
    }

    /// Create a node of `node_type` and insert it. Returns the new node's id, which becomes selected.
    ///
    /// With a `parent_id` naming an existing container the node goes into its
    /// children at `index` (clamped, append when `None`). A parent that is
    /// missing or not a container sends the node to the end of the root
    /// sequence. Without a parent, `index` positions it among the roots.
    pub fn add_node(&mut self, node_type: NodeType, parent_id: Option<&str>, index: Option<usize>) -> String {
        let mut node = create_node(node_type);
        if node.node_type == NodeType::Columns {
            let count = column_count(&node);
            node.children = (0..count).map(|_| create_node(NodeType::Column)).collect();
        }
        self.insert_and_select("Add node", node, parent_id, index)
    }

    /// Insert a caller-built node. Ids colliding with the document (or repeated
    /// inside the node) are regenerated. Returns the inserted id, which becomes selected.
    pub fn add_node_from_data(&mut self, mut node: Node, parent_id: Option<&str>, index: Option<usize>) -> String {
        let replaced = tree::ensure_unique_ids(&self.root_nodes, std::slice::from_mut(&mut node));
        if replaced > 0 {
            debug!("[Store] Regenerated {} colliding ids", replaced);
        }
        self.insert_and_select("Add node", node, parent_id, index)
    }

    fn insert_and_select(&mut self, description: &str, node: Node, parent_id: Option<&str>, index: Option<usize>) -> String {
        let id = node.id.clone();
        self.edit(description, |roots| {
            insert_node(roots, node, parent_id, index);
            true
        });
        self.selected_node_id = Some(id.clone());
        id
    }

    /// Append `nodes` to a container (or the roots) as one undo step. Selection is left alone.
    ///
    /// Returns how many root-level nodes were inserted.
    pub fn insert_nodes(&mut self, mut nodes: Vec<Node>, parent_id: Option<&str>) -> usize {
        if nodes.is_empty() {
            return 0;
        }
        tree::ensure_unique_ids(&self.root_nodes, &mut nodes);

        let count = nodes.len();
        self.edit("Insert nodes", |roots| {
            match parent_id.filter(|id| is_container(roots, id)) {
                Some(id) => {
                    if let Some(parent) = tree::find_by_id_mut(roots, id) {
                        parent.children.extend(nodes);
                    }
                }
                None => roots.extend(nodes),
            }
            true
        });
        count
    }

    /// Delete a node and its subtree
    pub fn remove_node(&mut self, id: &str) -> bool {
        let mut removed = None;
        let changed = self.edit("Remove node", |roots| {
            removed = tree::remove(roots, id);
            removed.is_some()
        });

        if let Some(node) = removed {
            if self.selected_node_id.as_deref().is_some_and(|sel| tree::contains_id(&node, sel)) {
                self.selected_node_id = None;
            }
            if self.hovered_node_id.as_deref().is_some_and(|hov| tree::contains_id(&node, hov)) {
                self.hovered_node_id = None;
            }
        }
        changed
    }

    /// Shallow-merge `partial` into the node's props
    pub fn update_node_props(&mut self, id: &str, partial: Props) -> bool {
        self.edit("Update props", |roots| {
            let Some(node) = tree::find_by_id_mut(roots, id) else {
                return false;
            };
            for (key, value) in partial {
                node.props.insert(key, value);
            }
            true
        })
    }

    /// Shallow-merge `partial` into the node's styles for one breakpoint
    pub fn update_node_styles(&mut self, id: &str, breakpoint: Breakpoint, partial: StyleMap) -> bool {
        self.edit("Update styles", |roots| {
            let Some(node) = tree::find_by_id_mut(roots, id) else {
                return false;
            };
            node.styles.merge(breakpoint, partial);
            true
        })
    }

    /// Relocate a node. See [`tree::move_node`] for index and rejection rules.
    pub fn move_node(&mut self, id: &str, new_parent_id: Option<&str>, index: usize) -> bool {
        self.edit("Move node", |roots| tree::move_node(roots, id, new_parent_id, index))
    }

    /// Clone a subtree right after the original. Returns and selects the clone's id.
    pub fn duplicate_node(&mut self, id: &str) -> Option<String> {
        let mut clone_id = None;
        self.edit("Duplicate node", |roots| {
            clone_id = tree::duplicate(roots, id);
            clone_id.is_some()
        });

        if let Some(clone_id) = &clone_id {
            self.selected_node_id = Some(clone_id.clone());
        }
        clone_id
    }

    /// Group subsequent edits into a single undo step until [`end_batch`](Self::end_batch)
    pub fn begin_batch(&mut self, description: impl Into<String>) {
        self.history.begin_batch();
        self.history.set_batch_description(description);
    }

    pub fn end_batch(&mut self) {
        self.history.end_batch();
    }

    /// Dispatch a serializable mutation
    pub fn apply(&mut self, mutation: Mutation) -> MutationOutcome {
        debug!("[Store] Applying mutation: {}", mutation.describe());
        mutation.apply(self)
    }

    // ------------------------------------------------------------------
    // History
    // ------------------------------------------------------------------

    pub fn undo(&mut self) -> bool {
        if !self.history.undo(&mut self.root_nodes) {
            return false;
        }
        self.after_history_move("Undo");
        true
    }

    pub fn redo(&mut self) -> bool {
        if !self.history.redo(&mut self.root_nodes) {
            return false;
        }
        self.after_history_move("Redo");
        true
    }

    fn after_history_move(&mut self, label: &str) {
        self.touch();
        self.prune_view_state();
        debug!(
            "[Store] {} (undo {}, redo {})",
            label,
            self.history.undo_levels(),
            self.history.redo_levels()
        );
    }

    /// Drop selection/hover that point at nodes no longer in the tree
    fn prune_view_state(&mut self) {
        let roots = &self.root_nodes;
        if self.selected_node_id.as_deref().is_some_and(|id| tree::find_by_id(roots, id).is_none()) {
            self.selected_node_id = None;
        }
        if self.hovered_node_id.as_deref().is_some_and(|id| tree::find_by_id(roots, id).is_none()) {
            self.hovered_node_id = None;
        }
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn undo_levels(&self) -> usize {
        self.history.undo_levels()
    }

    pub fn redo_levels(&self) -> usize {
        self.history.redo_levels()
    }

    pub fn undo_description(&self) -> Option<&str> {
        self.history.undo_description()
    }

    pub fn set_history_limit(&mut self, limit: usize) {
        self.history.set_max_levels(limit);
    }

    // ------------------------------------------------------------------
    // View state (never recorded in history)
    // ------------------------------------------------------------------

    pub fn select_node(&mut self, id: Option<&str>) {
        self.selected_node_id = id.map(str::to_string);
    }

    pub fn hover_node(&mut self, id: Option<&str>) {
        self.hovered_node_id = id.map(str::to_string);
    }

    pub fn set_breakpoint(&mut self, breakpoint: Breakpoint) {
        self.breakpoint = breakpoint;
    }

    pub fn toggle_preview(&mut self) {
        self.is_preview_mode = !self.is_preview_mode;
        if self.is_preview_mode {
            self.hovered_node_id = None;
        }
    }

    pub fn set_left_panel(&mut self, panel: LeftPanel) {
        self.left_panel = panel;
    }

    /// Canvas pointer handling. Ignored in preview mode.
    pub fn handle_canvas_event(&mut self, event: CanvasEvent) {
        if self.is_preview_mode {
            return;
        }
        match event {
            CanvasEvent::Click { node_id } => self.selected_node_id = Some(node_id),
            CanvasEvent::PointerEnter { node_id } => self.hovered_node_id = Some(node_id),
            CanvasEvent::PointerLeave { node_id } => {
                if self.hovered_node_id.as_deref() == Some(node_id.as_str()) {
                    self.hovered_node_id = None;
                }
            }
            CanvasEvent::BackgroundClick => self.selected_node_id = None,
        }
    }

    /// Run a keyboard command. Returns whether anything changed.
    pub fn execute(&mut self, command: EditorCommand) -> bool {
        match command {
            EditorCommand::Undo => self.undo(),
            EditorCommand::Redo => self.redo(),
            EditorCommand::DeleteSelected => match self.selected_node_id.clone() {
                Some(id) => self.remove_node(&id),
                None => false,
            },
            EditorCommand::Deselect => self.selected_node_id.take().is_some(),
            EditorCommand::DuplicateSelected => match self.selected_node_id.clone() {
                Some(id) => self.duplicate_node(&id).is_some(),
                None => false,
            },
        }
    }

    // ------------------------------------------------------------------
    // Reads and save bookkeeping
    // ------------------------------------------------------------------

    /// Borrowed `{ rootNodes, version }` view, serializable as-is
    pub fn schema(&self) -> PageSchemaRef<'_> {
        PageSchemaRef {
            root_nodes: &self.root_nodes,
            version: CURRENT_VERSION,
        }
    }

    /// Owned copy of the page for hand-off to another task
    pub fn to_schema(&self) -> PageSchema {
        self.schema().to_schema()
    }

    pub fn mark_saving(&mut self, saving: bool) {
        self.is_saving = saving;
    }

    pub fn mark_saved(&mut self) {
        self.is_saving = false;
        self.is_dirty = false;
        self.last_saved = Some(Utc::now());
    }

    /// Start a save: flags the store as saving and captures the page at the current generation
    pub fn begin_save(&mut self) -> SaveTicket {
        self.is_saving = true;
        SaveTicket {
            page_id: self.page_id.clone(),
            generation: self.edit_generation,
            schema: self.to_schema(),
        }
    }

    /// Finish a successful save. The document only becomes clean when no edit
    /// happened after the ticket was issued; returns whether it did.
    pub fn complete_save(&mut self, ticket: &SaveTicket) -> bool {
        self.is_saving = false;
        self.last_saved = Some(Utc::now());
        if ticket.generation != self.edit_generation {
            debug!(
                "[Store] Save of generation {} is stale (now {}), staying dirty",
                ticket.generation, self.edit_generation
            );
            return false;
        }
        self.is_dirty = false;
        true
    }

    /// Abandon a save; the document stays dirty
    pub fn fail_save(&mut self) {
        self.is_saving = false;
    }

    pub fn site_id(&self) -> Option<&str> {
        self.site_id.as_deref()
    }

    pub fn page_id(&self) -> Option<&str> {
        self.page_id.as_deref()
    }

    pub fn root_nodes(&self) -> &[Node] {
        &self.root_nodes
    }

    pub fn find_node(&self, id: &str) -> Option<&Node> {
        tree::find_by_id(&self.root_nodes, id)
    }

    pub fn selected_node_id(&self) -> Option<&str> {
        self.selected_node_id.as_deref()
    }

    pub fn selected_node(&self) -> Option<&Node> {
        self.selected_node_id.as_deref().and_then(|id| self.find_node(id))
    }

    pub fn hovered_node_id(&self) -> Option<&str> {
        self.hovered_node_id.as_deref()
    }

    pub fn breakpoint(&self) -> Breakpoint {
        self.breakpoint
    }

    pub fn is_preview_mode(&self) -> bool {
        self.is_preview_mode
    }

    pub fn left_panel(&self) -> LeftPanel {
        self.left_panel
    }

    pub fn is_dirty(&self) -> bool {
        self.is_dirty
    }

    pub fn is_saving(&self) -> bool {
        self.is_saving
    }

    pub fn last_saved(&self) -> Option<DateTime<Utc>> {
        self.last_saved
    }

    pub fn edit_generation(&self) -> u64 {
        self.edit_generation
    }
}

impl Default for DocumentStore {
    fn default() -> Self {
        Self::new()
    }
}

fn is_container(roots: &[Node], id: &str) -> bool {
    tree::find_by_id(roots, id).is_some_and(Node::is_container)
}

fn insert_node(roots: &mut Vec<Node>, node: Node, parent_id: Option<&str>, index: Option<usize>) {
    if let Some(parent_id) = parent_id {
        if is_container(roots, parent_id) {
            if let Some(parent) = tree::find_by_id_mut(roots, parent_id) {
                let at = index.map_or(parent.children.len(), |i| i.min(parent.children.len()));
                parent.children.insert(at, node);
                return;
            }
        }
        debug!("[Store] Parent {} is missing or not a container, appending at root", parent_id);
        roots.push(node);
        return;
    }

    let at = index.map_or(roots.len(), |i| i.min(roots.len()));
    roots.insert(at, node);
}

fn column_count(node: &Node) -> usize {
    match node.column_count() {
        Some(n) if n > 0 => (n as usize).min(MAX_COLUMN_COUNT),
        _ => DEFAULT_COLUMN_COUNT,
    }
}
