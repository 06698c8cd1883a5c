//! Integration tests for editor crate

use async_trait::async_trait;
use sitebuilder_editor::autosave::shared;
use sitebuilder_editor::commands::resolve;
use sitebuilder_editor::{
    generate_into, Autosaver, CanvasEvent, ContentGenerator, DocumentStore, EditorConfig, FilePageStore,
    FocusTarget, GenerationError, GenerationRequest, KeyPress, MemoryPageStore, PageStore, PersistenceError,
};
use sitebuilder_schema::{templates, Breakpoint, NodeType, PageSchema};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

#[test]
fn test_blank_page_scenario() {
    let mut store = DocumentStore::new();
    store.initialize("site-1", "home", PageSchema::empty());

    store.add_node(NodeType::Heading, None, None);

    let mut schema = serde_json::to_value(store.schema()).unwrap();
    assert_eq!(schema["version"], 1);
    let nodes = schema["rootNodes"].as_array_mut().unwrap();
    assert_eq!(nodes.len(), 1);

    let node = nodes[0].as_object_mut().unwrap();
    assert!(node.remove("id").is_some());
    assert_eq!(
        serde_json::Value::Object(node.clone()),
        serde_json::json!({
            "type": "heading",
            "props": { "text": "Heading", "level": 2 },
            "styles": {
                "base": { "fontSize": "32px", "fontWeight": "700", "marginBottom": "16px" }
            },
            "children": []
        })
    );
    assert!(store.is_dirty());
}

#[test]
fn test_keyboard_session() {
    let mut store = DocumentStore::new();
    store.initialize("site-1", "home", templates::template("landing").unwrap());
    let navbar = store.root_nodes()[0].id.clone();
    let roots_before = store.root_nodes().len();

    store.handle_canvas_event(CanvasEvent::Click { node_id: navbar.clone() });

    let press = |store: &mut DocumentStore, key: KeyPress, focus: FocusTarget| {
        let has_selection = store.selected_node_id().is_some();
        match resolve(&key, focus, has_selection) {
            Some(command) => store.execute(command),
            None => false,
        }
    };

    // Backspace inside the props panel must not delete the node
    assert!(!press(&mut store, KeyPress::new("Backspace"), FocusTarget::TextInput));
    assert_eq!(store.root_nodes().len(), roots_before);

    assert!(press(&mut store, KeyPress::new("d").with_ctrl(), FocusTarget::Canvas));
    assert_eq!(store.root_nodes().len(), roots_before + 1);

    assert!(press(&mut store, KeyPress::new("Delete"), FocusTarget::Canvas));
    assert!(press(&mut store, KeyPress::new("z").with_ctrl(), FocusTarget::Canvas));
    assert_eq!(store.root_nodes().len(), roots_before + 1);

    store.handle_canvas_event(CanvasEvent::Click { node_id: navbar });
    assert!(press(&mut store, KeyPress::new("Escape"), FocusTarget::Canvas));
    assert!(store.selected_node_id().is_none());
}

#[test]
fn test_breakpoint_edits_are_per_tier() {
    let mut store = DocumentStore::new();
    let heading = store.add_node(NodeType::Heading, None, None);
    store.set_breakpoint(Breakpoint::Md);

    let breakpoint = store.breakpoint();
    store.update_node_styles(&heading, breakpoint, sitebuilder_schema::style_map(&[("fontSize", "28px")]));

    let node = store.find_node(&heading).unwrap();
    assert_eq!(node.styles.get(Breakpoint::Base).unwrap()["fontSize"], "32px");
    assert_eq!(node.styles.get(Breakpoint::Md).unwrap()["fontSize"], "28px");
}

#[tokio::test]
async fn test_file_store_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let pages = FilePageStore::new(dir.path().join("pages"));

    assert!(pages.load("home").await.unwrap().is_none());

    let page = templates::template("portfolio").unwrap();
    pages.save("home", &page).await.unwrap();

    let loaded = pages.load("home").await.unwrap().unwrap();
    assert_eq!(loaded, page);
    assert!(dir.path().join("pages/home.json").exists());
    assert!(!dir.path().join("pages/home.json.tmp").exists());
}

#[tokio::test]
async fn test_file_store_reports_corrupt_pages() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("broken.json"),
        r#"{ "rootNodes": [{ "id": "a", "type": "heading", "props": { "level": 0 } }] }"#,
    )
    .unwrap();

    let pages = FilePageStore::new(dir.path());
    let err = pages.load("broken").await.unwrap_err();
    assert!(matches!(err, PersistenceError::Corrupt { ref page_id, .. } if page_id == "broken"));
}

/// Page store that fails a configurable number of times before succeeding
struct FlakyStore {
    failures_left: AtomicUsize,
    saves: AtomicUsize,
}

#[async_trait]
impl PageStore for FlakyStore {
    async fn load(&self, _page_id: &str) -> Result<Option<PageSchema>, PersistenceError> {
        Ok(None)
    }

    async fn save(&self, _page_id: &str, _schema: &PageSchema) -> Result<(), PersistenceError> {
        if self.failures_left.load(Ordering::SeqCst) > 0 {
            self.failures_left.fetch_sub(1, Ordering::SeqCst);
            return Err(PersistenceError::Backend("connection reset".into()));
        }
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

#[tokio::test(start_paused = true)]
async fn test_failed_autosave_keeps_document_dirty_and_retries() {
    let mut store = DocumentStore::new();
    store.initialize("site-1", "home", PageSchema::empty());
    let document = shared(store);

    let pages = Arc::new(FlakyStore {
        failures_left: AtomicUsize::new(1),
        saves: AtomicUsize::new(0),
    });
    let config = EditorConfig::default();
    let autosaver = Autosaver::spawn(document.clone(), pages.clone(), config.autosave_delay());

    document.lock().unwrap().add_node(NodeType::Section, None, None);
    autosaver.notify_edit();
    tokio::time::sleep(Duration::from_millis(2100)).await;

    {
        let doc = document.lock().unwrap();
        assert!(doc.is_dirty());
        assert!(!doc.is_saving());
    }
    assert_eq!(pages.saves.load(Ordering::SeqCst), 0);

    document.lock().unwrap().add_node(NodeType::Text, None, None);
    autosaver.notify_edit();
    tokio::time::sleep(Duration::from_millis(2100)).await;

    assert_eq!(pages.saves.load(Ordering::SeqCst), 1);
    assert!(!document.lock().unwrap().is_dirty());

    autosaver.shutdown(true).await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_failed_autosave_retries_without_further_edits() {
    let mut store = DocumentStore::new();
    store.initialize("site-1", "home", PageSchema::empty());
    let document = shared(store);

    let pages = Arc::new(FlakyStore {
        failures_left: AtomicUsize::new(1),
        saves: AtomicUsize::new(0),
    });
    let autosaver = Autosaver::spawn(document.clone(), pages.clone(), Duration::from_millis(2000));

    document.lock().unwrap().add_node(NodeType::Heading, None, None);
    autosaver.notify_edit();

    // First attempt at 2000ms fails, the retry at 4000ms goes through
    tokio::time::sleep(Duration::from_secs(10)).await;

    assert_eq!(pages.saves.load(Ordering::SeqCst), 1);
    assert_eq!(pages.failures_left.load(Ordering::SeqCst), 0);
    assert!(!document.lock().unwrap().is_dirty());

    autosaver.shutdown(false).await.unwrap();
}

#[tokio::test]
async fn test_shutdown_flushes_pending_edits() {
    let mut store = DocumentStore::new();
    store.initialize("site-1", "home", PageSchema::empty());
    let document = shared(store);
    let pages = Arc::new(MemoryPageStore::new());

    let autosaver = Autosaver::spawn(document.clone(), pages.clone(), Duration::from_secs(3600));
    document.lock().unwrap().add_node(NodeType::Footer, None, None);
    autosaver.notify_edit();

    assert!(autosaver.shutdown(true).await.unwrap());
    let saved = pages.load("home").await.unwrap().unwrap();
    assert_eq!(saved.root_nodes[0].node_type, NodeType::Footer);
}

struct EchoGenerator;

#[async_trait]
impl ContentGenerator for EchoGenerator {
    async fn generate(&self, request: &GenerationRequest) -> Result<String, GenerationError> {
        if request.prompt.contains("fail") {
            return Err(GenerationError::Backend("rate limited".into()));
        }
        Ok(format!(
            "```json\n[{{\"id\":\"gen-1\",\"type\":\"heading\",\"props\":{{\"text\":{:?},\"level\":2}}}}]\n```",
            request.prompt
        ))
    }
}

#[tokio::test]
async fn test_generation_into_container() {
    let mut store = DocumentStore::new();
    let section = store.add_node(NodeType::Section, None, None);

    let request = GenerationRequest::new("Our story").unwrap().with_context(store.root_nodes());
    let inserted = generate_into(&mut store, &EchoGenerator, &request, Some(&section)).await.unwrap();

    assert_eq!(inserted, 1);
    let children = &store.find_node(&section).unwrap().children;
    assert_eq!(children[0].text(), Some("Our story"));

    let request = GenerationRequest::new("please fail").unwrap();
    let err = generate_into(&mut store, &EchoGenerator, &request, None).await.unwrap_err();
    assert_eq!(err, GenerationError::Backend("rate limited".into()));
    assert_eq!(store.root_nodes().len(), 1);
}
