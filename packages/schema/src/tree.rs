//! # Tree Operations
//!
//! Structural algorithms over a page's root sequence. All traversal is
//! depth-first, pre-order, children in order.
//!
//! Targeting an id that does not exist is never an error: lookups return
//! `None` and edits return `false`/`None` with the tree untouched.

use crate::id_generator::new_node_id;
use crate::node::Node;
use std::collections::HashSet;
use tracing::debug;

/// Index path from the root sequence to a node: `[root_index, child_index, ...]`
pub type NodePath = Vec<usize>;

/// The sequence holding a node, plus the node's position in it
#[derive(Debug)]
pub struct ParentContext<'a> {
    pub siblings: &'a mut Vec<Node>,
    pub index: usize,
}

impl ParentContext<'_> {
    pub fn node(&self) -> &Node {
        &self.siblings[self.index]
    }
}

/// Find a node by id
pub fn find_by_id<'a>(nodes: &'a [Node], id: &str) -> Option<&'a Node> {
    for node in nodes {
        if node.id == id {
            return Some(node);
        }
        if let Some(found) = find_by_id(&node.children, id) {
            return Some(found);
        }
    }
    None
}

/// Find a node by id for mutation
pub fn find_by_id_mut<'a>(nodes: &'a mut [Node], id: &str) -> Option<&'a mut Node> {
    let path = locate(nodes, id)?;
    node_at_mut(nodes, &path)
}

/// Index path of the node with `id`
pub fn locate(nodes: &[Node], id: &str) -> Option<NodePath> {
    for (index, node) in nodes.iter().enumerate() {
        if node.id == id {
            return Some(vec![index]);
        }
        if let Some(mut path) = locate(&node.children, id) {
            path.insert(0, index);
            return Some(path);
        }
    }
    None
}

/// Follow an index path to a node
pub fn node_at<'a>(nodes: &'a [Node], path: &[usize]) -> Option<&'a Node> {
    let (first, rest) = path.split_first()?;
    let mut current = nodes.get(*first)?;
    for index in rest {
        current = current.children.get(*index)?;
    }
    Some(current)
}

fn node_at_mut<'a>(nodes: &'a mut [Node], path: &[usize]) -> Option<&'a mut Node> {
    let (first, rest) = path.split_first()?;
    let mut current = nodes.get_mut(*first)?;
    for index in rest {
        current = current.children.get_mut(*index)?;
    }
    Some(current)
}

/// Children sequence of the node at `path` (the root sequence for an empty path)
fn sequence_at_mut<'a>(roots: &'a mut Vec<Node>, path: &[usize]) -> Option<&'a mut Vec<Node>> {
    let mut sequence = roots;
    for index in path {
        sequence = &mut sequence.get_mut(*index)?.children;
    }
    Some(sequence)
}

/// Locate the sequence (root or some node's children) holding `id`
pub fn find_parent_context<'a>(roots: &'a mut Vec<Node>, id: &str) -> Option<ParentContext<'a>> {
    let path = locate(roots, id)?;
    let (index, parent_path) = path.split_last()?;
    let siblings = sequence_at_mut(roots, parent_path)?;
    Some(ParentContext {
        siblings,
        index: *index,
    })
}

/// Splice the node out of whatever sequence holds it
pub fn remove(roots: &mut Vec<Node>, id: &str) -> Option<Node> {
    let context = find_parent_context(roots, id)?;
    Some(context.siblings.remove(context.index))
}

/// Whether `id` is `node` itself or one of its descendants
pub fn contains_id(node: &Node, id: &str) -> bool {
    node.id == id || find_by_id(&node.children, id).is_some()
}

/// Move a node to `index` in the target sequence (`None` = root sequence).
///
/// `index` is read against the target sequence after the node has been
/// detached and is clamped to its length. The move is rejected, leaving the
/// tree untouched, when the node or target parent is missing, the target is
/// not a container, or the target lies inside the moved subtree.
pub fn move_node(roots: &mut Vec<Node>, id: &str, new_parent_id: Option<&str>, index: usize) -> bool {
    let Some(node) = find_by_id(roots, id) else {
        return false;
    };

    if let Some(parent_id) = new_parent_id {
        if contains_id(node, parent_id) {
            return false;
        }
        match find_by_id(roots, parent_id) {
            Some(parent) if parent.is_container() => {}
            _ => return false,
        }
    }

    let Some(detached) = remove(roots, id) else {
        return false;
    };

    // Parent was checked above and cannot be inside the detached subtree.
    let parent_path = new_parent_id
        .and_then(|parent_id| locate(roots, parent_id))
        .unwrap_or_default();
    let Some(target) = sequence_at_mut(roots, &parent_path) else {
        roots.push(detached);
        return true;
    };

    let index = index.min(target.len());
    target.insert(index, detached);
    true
}

/// Give `node` and every descendant a fresh id
pub fn reassign_ids(node: &mut Node) {
    node.id = new_node_id();
    for child in &mut node.children {
        reassign_ids(child);
    }
}

/// Clone the subtree at `id`, re-key it, and insert it right after the original.
///
/// Returns the clone's id.
pub fn duplicate(roots: &mut Vec<Node>, id: &str) -> Option<String> {
    let context = find_parent_context(roots, id)?;
    let mut clone = context.node().clone();
    reassign_ids(&mut clone);
    let clone_id = clone.id.clone();
    context.siblings.insert(context.index + 1, clone);
    Some(clone_id)
}

/// Full structural copy with no shared state
pub fn deep_clone(roots: &[Node]) -> Vec<Node> {
    roots.to_vec()
}

/// Every id in the tree, pre-order
pub fn collect_ids(roots: &[Node]) -> Vec<String> {
    let mut ids = Vec::new();
    for root in roots {
        root.walk(&mut |node| ids.push(node.id.clone()));
    }
    ids
}

pub fn count_nodes(roots: &[Node]) -> usize {
    let mut count = 0;
    for root in roots {
        root.walk(&mut |_| count += 1);
    }
    count
}

/// Re-key nodes in `incoming` whose ids are empty, already used by `existing`,
/// or repeated within `incoming`. Returns how many ids were replaced.
pub fn ensure_unique_ids(existing: &[Node], incoming: &mut [Node]) -> usize {
    let mut seen: HashSet<String> = collect_ids(existing).into_iter().collect();
    let mut replaced = 0;
    for node in incoming.iter_mut() {
        replaced += dedupe_ids(node, &mut seen);
    }
    if replaced > 0 {
        debug!("[Tree] Regenerated {} colliding node ids", replaced);
    }
    replaced
}

fn dedupe_ids(node: &mut Node, seen: &mut HashSet<String>) -> usize {
    let mut replaced = 0;
    if node.id.is_empty() || seen.contains(&node.id) {
        node.id = new_node_id();
        replaced += 1;
    }
    seen.insert(node.id.clone());
    for child in &mut node.children {
        replaced += dedupe_ids(child, seen);
    }
    replaced
}
