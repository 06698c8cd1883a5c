//! # Content Generation
//!
//! Boundary to an external model that turns a natural-language prompt into
//! page nodes. The generator returns raw text; this module decides whether
//! that text is a usable node list. Rejected output never reaches the document.
//!
//! ```text
//! prompt ──→ ContentGenerator::generate ──→ raw text
//!                                              │ parse_generated_nodes
//!                                              ↓   (strip ``` fence, JSON, schema validation)
//!                                         Vec<Node> ──→ DocumentStore::insert_nodes
//! ```

use crate::errors::GenerationError;
use crate::store::DocumentStore;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sitebuilder_schema::{parse_node_list, Node};
use tracing::{info, warn};

pub const MAX_PROMPT_CHARS: usize = 2000;

/// A validated prompt plus optional document context
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub prompt: String,

    /// Serialized excerpt of the current tree, for edits to existing content
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

impl GenerationRequest {
    pub fn new(prompt: impl Into<String>) -> Result<Self, GenerationError> {
        let prompt = prompt.into();
        let length = prompt.chars().count();
        if prompt.trim().is_empty() {
            return Err(GenerationError::EmptyPrompt);
        }
        if length > MAX_PROMPT_CHARS {
            return Err(GenerationError::PromptTooLong {
                length,
                max: MAX_PROMPT_CHARS,
            });
        }
        Ok(Self {
            prompt,
            context: None,
        })
    }

    pub fn with_context(mut self, nodes: &[Node]) -> Self {
        self.context = serde_json::to_string(nodes).ok();
        self
    }
}

/// Produces raw node JSON for a prompt
#[async_trait]
pub trait ContentGenerator: Send + Sync {
    async fn generate(&self, request: &GenerationRequest) -> Result<String, GenerationError>;
}

/// Strip a surrounding markdown code fence (```json ... ```), if any
fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // Drop the info string (e.g. `json`) on the opening line
    let body = match rest.find('\n') {
        Some(newline) => &rest[newline + 1..],
        None => rest,
    };
    body.trim_end().strip_suffix("```").unwrap_or(body).trim()
}

/// Parse generator output into nodes. The whole payload is rejected on any problem.
pub fn parse_generated_nodes(raw: &str) -> Result<Vec<Node>, GenerationError> {
    let payload = strip_code_fence(raw);
    let value: Value =
        serde_json::from_str(payload).map_err(|e| GenerationError::InvalidJson(e.to_string()))?;
    let nodes = parse_node_list(value, "nodes")?;
    Ok(nodes)
}

/// Run the generator and parse its output
pub async fn generate_nodes(
    generator: &dyn ContentGenerator,
    request: &GenerationRequest,
) -> Result<Vec<Node>, GenerationError> {
    let raw = generator.generate(request).await?;
    parse_generated_nodes(&raw).map_err(|e| {
        warn!("[Generation] Rejected generated content: {}", e);
        e
    })
}

/// Generate nodes and append them to `parent_id` (or the roots) as one undo step.
///
/// Returns how many root-level nodes were inserted. On error the store is untouched.
pub async fn generate_into(
    store: &mut DocumentStore,
    generator: &dyn ContentGenerator,
    request: &GenerationRequest,
    parent_id: Option<&str>,
) -> Result<usize, GenerationError> {
    let nodes = generate_nodes(generator, request).await?;
    let inserted = store.insert_nodes(nodes, parent_id);
    info!("[Generation] Inserted {} generated nodes", inserted);
    Ok(inserted)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Canned(&'static str);

    #[async_trait]
    impl ContentGenerator for Canned {
        async fn generate(&self, _request: &GenerationRequest) -> Result<String, GenerationError> {
            Ok(self.0.to_string())
        }
    }

    #[test]
    fn test_prompt_bounds() {
        assert_eq!(GenerationRequest::new("  "), Err(GenerationError::EmptyPrompt));
        assert!(GenerationRequest::new("a".repeat(2000)).is_ok());
        assert!(matches!(
            GenerationRequest::new("a".repeat(2001)),
            Err(GenerationError::PromptTooLong { length: 2001, max: 2000 })
        ));
    }

    #[test]
    fn test_prompt_length_counts_chars() {
        assert!(GenerationRequest::new("é".repeat(2000)).is_ok());
    }

    #[test]
    fn test_context_is_serialized_tree() {
        let request = GenerationRequest::new("make it blue")
            .unwrap()
            .with_context(&[Node::new("a", sitebuilder_schema::NodeType::Section)]);
        assert!(request.context.unwrap().contains("\"type\":\"section\""));
    }

    #[test]
    fn test_strip_code_fence() {
        assert_eq!(strip_code_fence("```json\n[1]\n```"), "[1]");
        assert_eq!(strip_code_fence("```\n[]\n```\n"), "[]");
        assert_eq!(strip_code_fence("  [2] "), "[2]");
    }

    #[test]
    fn test_parse_generated_nodes() {
        let raw = "```json\n[{\"id\":\"g1\",\"type\":\"heading\",\"props\":{\"text\":\"Hi\",\"level\":1}}]\n```";
        let nodes = parse_generated_nodes(raw).unwrap();
        assert_eq!(nodes[0].text(), Some("Hi"));
    }

    #[test]
    fn test_rejects_non_array_and_invalid_nodes() {
        assert!(matches!(parse_generated_nodes("Sure! Here you go"), Err(GenerationError::InvalidJson(_))));
        assert!(matches!(
            parse_generated_nodes(r#"{"id":"a","type":"text"}"#),
            Err(GenerationError::Rejected(_))
        ));
        assert!(matches!(
            parse_generated_nodes(r#"[{"id":"a","type":"text"},{"type":"text"}]"#),
            Err(GenerationError::Rejected(_))
        ));
    }

    #[tokio::test]
    async fn test_generate_into_inserts_as_one_step() {
        let generator = Canned(r#"[{"id":"s","type":"section","children":[{"id":"t","type":"text"}]},{"id":"d","type":"divider"}]"#);
        let mut store = DocumentStore::new();
        let request = GenerationRequest::new("hero section").unwrap();

        let inserted = generate_into(&mut store, &generator, &request, None).await.unwrap();
        assert_eq!(inserted, 2);
        assert_eq!(store.root_nodes().len(), 2);
        assert_eq!(store.undo_levels(), 1);
        assert!(store.selected_node_id().is_none());
    }

    #[tokio::test]
    async fn test_generate_into_leaves_store_untouched_on_error() {
        let generator = Canned("not json");
        let mut store = DocumentStore::new();
        let request = GenerationRequest::new("anything").unwrap();

        assert!(generate_into(&mut store, &generator, &request, None).await.is_err());
        assert!(store.root_nodes().is_empty());
        assert!(!store.can_undo());
    }
}
