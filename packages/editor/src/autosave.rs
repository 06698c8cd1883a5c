//! # Autosave
//!
//! Debounced background saving for a shared [`DocumentStore`].
//!
//! ```text
//! notify_edit ─→ (re)arm timer ─→ quiet for `delay` ─→ begin_save ─→ PageStore::save
//!                        ▲                                              │
//!                        │               complete_save (clean if no newer edit) / fail_save (stay dirty)
//!                        └──────────── failed: re-arm ─────────────────┘
//! ```
//!
//! Dropping the [`Autosaver`] without [`Autosaver::shutdown`] abandons any
//! pending save and logs a warning.
//!
//! The document lock is taken only to issue and settle save tickets, never
//! across an `.await`.

use crate::errors::PersistenceError;
use crate::persistence::PageStore;
use crate::store::DocumentStore;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tokio::time::{sleep_until, Instant};
use tracing::{debug, info, warn};

/// Store handle shared between the editor and the autosave task
pub type SharedDocument = Arc<Mutex<DocumentStore>>;

pub fn shared(store: DocumentStore) -> SharedDocument {
    Arc::new(Mutex::new(store))
}

fn lock(document: &SharedDocument) -> MutexGuard<'_, DocumentStore> {
    document.lock().unwrap_or_else(PoisonError::into_inner)
}

type SaveReply = oneshot::Sender<Result<bool, PersistenceError>>;

enum Signal {
    Edit,
    Flush(SaveReply),
    Shutdown { flush: bool, reply: SaveReply },
}

/// Handle to a running autosave task
pub struct Autosaver {
    tx: mpsc::UnboundedSender<Signal>,
    handle: JoinHandle<()>,
}

impl Autosaver {
    /// Spawn the autosave task on the current tokio runtime
    pub fn spawn(document: SharedDocument, store: Arc<dyn PageStore>, delay: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let handle = tokio::spawn(run(document, store, delay, rx));
        Self { tx, handle }
    }

    /// Report an edit; (re)starts the debounce timer
    pub fn notify_edit(&self) {
        if self.tx.send(Signal::Edit).is_err() {
            debug!("[Autosave] Edit notification after shutdown ignored");
        }
    }

    /// Save now if dirty. Returns whether a save was written.
    pub async fn flush(&self) -> Result<bool, PersistenceError> {
        let (reply, response) = oneshot::channel();
        self.tx
            .send(Signal::Flush(reply))
            .map_err(|_| PersistenceError::Stopped)?;
        response.await.map_err(|_| PersistenceError::Stopped)?
    }

    /// Stop the task, optionally flushing pending edits first
    pub async fn shutdown(self, flush: bool) -> Result<bool, PersistenceError> {
        let (reply, response) = oneshot::channel();
        self.tx
            .send(Signal::Shutdown { flush, reply })
            .map_err(|_| PersistenceError::Stopped)?;
        let result = response.await.map_err(|_| PersistenceError::Stopped)?;
        if let Err(e) = self.handle.await {
            warn!("[Autosave] Task ended abnormally: {}", e);
        }
        result
    }
}

async fn run(
    document: SharedDocument,
    store: Arc<dyn PageStore>,
    delay: Duration,
    mut rx: mpsc::UnboundedReceiver<Signal>,
) {
    let mut deadline: Option<Instant> = None;

    loop {
        let signal = match deadline {
            Some(at) => tokio::select! {
                signal = rx.recv() => signal,
                _ = sleep_until(at) => {
                    deadline = match save_now(&document, store.as_ref()).await {
                        Ok(_) => None,
                        Err(PersistenceError::NoPage) => {
                            warn!("[Autosave] No page loaded, edits not saved");
                            None
                        }
                        Err(e) => {
                            warn!("[Autosave] Save failed, retrying in {:?}: {}", delay, e);
                            Some(Instant::now() + delay)
                        }
                    };
                    continue;
                }
            },
            None => rx.recv().await,
        };

        match signal {
            Some(Signal::Edit) => deadline = Some(Instant::now() + delay),
            Some(Signal::Flush(reply)) => {
                deadline = None;
                let _ = reply.send(save_now(&document, store.as_ref()).await);
            }
            Some(Signal::Shutdown { flush, reply }) => {
                let result = if flush {
                    save_now(&document, store.as_ref()).await
                } else {
                    Ok(false)
                };
                let _ = reply.send(result);
                break;
            }
            None => {
                if deadline.is_some() || lock(&document).is_dirty() {
                    warn!("[Autosave] Handle dropped with unsaved edits, pending save abandoned");
                }
                break;
            }
        }
    }

    debug!("[Autosave] Stopped");
}

/// One save cycle. `Ok(false)` when there was nothing to save.
async fn save_now(document: &SharedDocument, store: &dyn PageStore) -> Result<bool, PersistenceError> {
    let ticket = {
        let mut doc = lock(document);
        if !doc.is_dirty() {
            return Ok(false);
        }
        if doc.page_id().is_none() {
            return Err(PersistenceError::NoPage);
        }
        doc.begin_save()
    };
    let page_id = ticket.page_id.clone().unwrap_or_default();

    match store.save(&page_id, &ticket.schema).await {
        Ok(()) => {
            let clean = lock(document).complete_save(&ticket);
            info!(
                "[Autosave] Saved page {} (generation {}{})",
                page_id,
                ticket.generation,
                if clean { "" } else { ", newer edits pending" }
            );
            Ok(true)
        }
        Err(e) => {
            lock(document).fail_save();
            Err(e)
        }
    }
}
