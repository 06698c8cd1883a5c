//! # Page Persistence
//!
//! Async boundary to wherever page documents live. The editor only ever
//! hands over whole [`PageSchema`] values; stores validate on load so a
//! corrupt file is reported rather than half-loaded.

use crate::errors::PersistenceError;
use async_trait::async_trait;
use sitebuilder_schema::{parse_page, PageSchema};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tokio::sync::RwLock;
use tracing::{debug, info};

#[async_trait]
pub trait PageStore: Send + Sync {
    /// `Ok(None)` when the page has never been saved
    async fn load(&self, page_id: &str) -> Result<Option<PageSchema>, PersistenceError>;

    async fn save(&self, page_id: &str, schema: &PageSchema) -> Result<(), PersistenceError>;
}

/// In-process page store
#[derive(Debug, Default)]
pub struct MemoryPageStore {
    pages: RwLock<HashMap<String, PageSchema>>,
}

impl MemoryPageStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.pages.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.pages.read().await.is_empty()
    }
}

#[async_trait]
impl PageStore for MemoryPageStore {
    async fn load(&self, page_id: &str) -> Result<Option<PageSchema>, PersistenceError> {
        Ok(self.pages.read().await.get(page_id).cloned())
    }

    async fn save(&self, page_id: &str, schema: &PageSchema) -> Result<(), PersistenceError> {
        self.pages
            .write()
            .await
            .insert(page_id.to_string(), schema.clone());
        debug!("[PageStore] Stored page {} in memory", page_id);
        Ok(())
    }
}

/// One `<page_id>.json` file per page under a directory
#[derive(Debug, Clone)]
pub struct FilePageStore {
    dir: PathBuf,
}

impl FilePageStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path for a page id. Ids that could escape the directory are rejected.
    pub fn path_for(&self, page_id: &str) -> Result<PathBuf, PersistenceError> {
        let valid = !page_id.is_empty()
            && page_id != "."
            && page_id != ".."
            && !page_id.contains(['/', '\\', '\0']);
        if !valid {
            return Err(PersistenceError::InvalidPageId(page_id.to_string()));
        }
        Ok(self.dir.join(format!("{}.json", page_id)))
    }
}

#[async_trait]
impl PageStore for FilePageStore {
    async fn load(&self, page_id: &str) -> Result<Option<PageSchema>, PersistenceError> {
        let path = self.path_for(page_id)?;
        let source = match tokio::fs::read_to_string(&path).await {
            Ok(source) => source,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let schema = parse_page(&source).map_err(|source| PersistenceError::Corrupt {
            page_id: page_id.to_string(),
            source,
        })?;
        info!("[PageStore] Loaded {}", path.display());
        Ok(Some(schema))
    }

    async fn save(&self, page_id: &str, schema: &PageSchema) -> Result<(), PersistenceError> {
        let path = self.path_for(page_id)?;
        let json = serde_json::to_string_pretty(schema)?;

        tokio::fs::create_dir_all(&self.dir).await?;
        // Write then rename so readers never see a truncated file
        let tmp = path.with_extension("json.tmp");
        tokio::fs::write(&tmp, json).await?;
        tokio::fs::rename(&tmp, &path).await?;

        info!("[PageStore] Saved {}", path.display());
        Ok(())
    }
}
