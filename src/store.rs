// src/store.rs
//! The hero content store — a dependency-injected state container
//! orchestrating load/edit/save cycles.
//!
//! The store owns the in-memory canonical content, the cache of last-fetched
//! typed records (used to decide create-vs-update on the next save), and the
//! pending-edit slot. Edits apply optimistically and schedule a debounced
//! autosave through an explicit cancellable timer: a new edit within the
//! window replaces the previous pending autosave deterministically instead
//! of racing it. Save cycles are serialized through an async mutex, so an
//! edit arriving mid-save waits for the next cycle rather than interleaving.

use crate::api::{AdminWriter, ContentReader};
use crate::config::StoreConfig;
use crate::error::AppError;
use crate::fetch::fetch_hero_records;
use crate::model::{HeroContent, TypedContentRecord};
use crate::persist::DualWriter;
use crate::reconcile::records_to_content;
use crate::types::SectionId;
use std::sync::{Arc, Mutex as StdMutex};
use std::time::Duration;
use tokio::sync::{oneshot, Mutex, RwLock};

#[derive(Debug)]
struct StoreState {
    content: HeroContent,
    visible: bool,
    /// Last-fetched typed records; purely a cache for create-vs-update
    /// decisions on the next save.
    records: Vec<TypedContentRecord>,
    /// An edit not yet confirmed persisted to any backend.
    pending: Option<HeroContent>,
    dirty: bool,
    loading: bool,
    error: Option<String>,
}

impl Default for StoreState {
    fn default() -> Self {
        Self {
            content: HeroContent::fallback(),
            visible: true,
            records: Vec::new(),
            pending: None,
            dirty: false,
            loading: false,
            error: None,
        }
    }
}

/// State container for the hero section's content.
///
/// Cheap to clone — all fields are shared handles — so a clone can be moved
/// into the autosave task while the original keeps serving the UI.
#[derive(Clone)]
pub struct HeroStore {
    reader: Arc<dyn ContentReader>,
    writer: DualWriter,
    config: StoreConfig,
    state: Arc<RwLock<StoreState>>,
    /// Cancellation handle of the currently scheduled autosave, if any.
    /// Dropping it cancels a timer that is still sleeping; a save whose
    /// timer has already fired runs to completion.
    autosave: Arc<StdMutex<Option<oneshot::Sender<()>>>>,
    /// Serializes save cycles so overlapping saves cannot interleave.
    save_lock: Arc<Mutex<()>>,
}

impl HeroStore {
    pub fn new(
        reader: Arc<dyn ContentReader>,
        writer: Arc<dyn AdminWriter>,
        config: StoreConfig,
    ) -> Self {
        Self {
            reader,
            writer: DualWriter::new(writer),
            config,
            state: Arc::new(RwLock::new(StoreState::default())),
            autosave: Arc::new(StdMutex::new(None)),
            save_lock: Arc::new(Mutex::new(())),
        }
    }

    // -----------------------------------------------------------------------
    // Load
    // -----------------------------------------------------------------------

    /// Reloads canonical content from the backends.
    ///
    /// On success the canonical content, visibility flag, and record cache
    /// are replaced. When no tier produced records, whatever content is
    /// already in memory is retained and an error message is recorded.
    pub async fn load_content(&self) {
        {
            let mut state = self.state.write().await;
            state.loading = true;
        }

        let records = fetch_hero_records(self.reader.as_ref(), &self.config.section).await;

        let mut state = self.state.write().await;
        state.loading = false;
        if records.is_empty() {
            log::warn!("No hero records from any backend; keeping in-memory content");
            state.error = Some("Content could not be loaded from any backend".to_string());
            return;
        }

        state.content = records_to_content(&records);
        state.visible = records.iter().any(|r| r.is_published);
        state.records = records;
        state.error = None;
    }

    // -----------------------------------------------------------------------
    // Edit
    // -----------------------------------------------------------------------

    /// Applies an edit optimistically and schedules a debounced autosave.
    ///
    /// The store only owns the hero section; edits addressed to any other
    /// section are ignored with a warning.
    pub async fn update_section_content(&self, section: &SectionId, content: HeroContent) {
        if section != &self.config.section {
            log::warn!(
                "Ignoring edit for unmanaged section '{}' (store owns '{}')",
                section,
                self.config.section
            );
            return;
        }

        {
            let mut state = self.state.write().await;
            state.content = content.clone();
            state.pending = Some(content);
            state.dirty = true;
        }

        self.schedule_autosave(self.config.content_debounce);
    }

    /// Toggles the hero section's visibility and schedules a (shorter)
    /// debounced autosave. The publish flag rides along with the next save.
    pub async fn set_visibility(&self, visible: bool) {
        {
            let mut state = self.state.write().await;
            state.visible = visible;
            state.pending = Some(state.content.clone());
            state.dirty = true;
        }

        self.schedule_autosave(self.config.visibility_debounce);
    }

    /// Replaces the scheduled autosave with a fresh timer.
    ///
    /// Cancellation is only effective while the timer sleeps. Once the
    /// delay elapses the save cycle runs uncancellably, so a dual write
    /// already in flight always finishes both phases.
    fn schedule_autosave(&self, delay: Duration) {
        let (cancel, mut cancelled) = oneshot::channel::<()>();
        let store = self.clone();
        tokio::spawn(async move {
            tokio::select! {
                _ = tokio::time::sleep(delay) => {}
                _ = &mut cancelled => return,
            }
            if let Err(e) = store.save_changes().await {
                log::warn!("Autosave failed: {}", e);
            }
        });

        let mut slot = self.autosave.lock().expect("autosave slot lock poisoned");
        // Dropping the previous sender wakes its timer arm.
        slot.replace(cancel);
    }

    // -----------------------------------------------------------------------
    // Save
    // -----------------------------------------------------------------------

    /// Persists the pending edit through the dual writer, then reloads from
    /// the backend so server-assigned ids are available for the next edit.
    ///
    /// A no-op when there is nothing pending. Remote partial failures are
    /// logged and recorded in the write report, not raised; only a failure
    /// to drive the save cycle itself surfaces as an error.
    pub async fn save_changes(&self) -> Result<(), AppError> {
        let _guard = self.save_lock.lock().await;

        let (pending, cached, visible) = {
            let state = self.state.read().await;
            (
                state.pending.clone(),
                state.records.clone(),
                state.visible,
            )
        };
        let Some(content) = pending else {
            return Ok(());
        };

        // Identity follows the cached records when there are any; a cold
        // cache falls back to the configured defaults.
        let section = cached
            .first()
            .map(|r| r.section_identifier.clone())
            .unwrap_or_else(|| self.config.section.clone());
        let language = cached
            .first()
            .map(|r| r.language_code.clone())
            .unwrap_or_else(|| self.config.language.clone());

        let result = self
            .writer
            .save(&content, &cached, &section, &language, visible)
            .await;

        match result {
            Ok(report) => {
                for (field, failure) in report.failures() {
                    log::warn!("Save cycle: write for '{}' failed: {}", field, failure);
                }
                {
                    let mut state = self.state.write().await;
                    // An edit that arrived mid-save replaced the pending
                    // value; leave it for the next cycle.
                    if state.pending.as_ref() == Some(&content) {
                        state.pending = None;
                        state.dirty = false;
                    }
                    state.error = None;
                }
                self.load_content().await;
                Ok(())
            }
            Err(e) => {
                let mut state = self.state.write().await;
                state.error = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// Discards the pending edit and reloads from the backend.
    ///
    /// A still-sleeping autosave timer is cancelled; a save already in
    /// flight is left to finish.
    pub async fn reset_changes(&self) {
        {
            let mut slot = self.autosave.lock().expect("autosave slot lock poisoned");
            slot.take();
        }
        {
            let mut state = self.state.write().await;
            state.pending = None;
            state.dirty = false;
            state.error = None;
        }
        self.load_content().await;
    }

    // -----------------------------------------------------------------------
    // Observable state
    // -----------------------------------------------------------------------

    /// The canonical content currently held — always fully populated.
    pub async fn hero_content(&self) -> HeroContent {
        self.state.read().await.content.clone()
    }

    /// The pending edit, if one has not yet been confirmed persisted.
    pub async fn pending_hero_content(&self) -> Option<HeroContent> {
        self.state.read().await.pending.clone()
    }

    pub async fn is_dirty(&self) -> bool {
        self.state.read().await.dirty
    }

    pub async fn is_loading(&self) -> bool {
        self.state.read().await.loading
    }

    pub async fn is_visible(&self) -> bool {
        self.state.read().await.visible
    }

    pub async fn error(&self) -> Option<String> {
        self.state.read().await.error.clone()
    }
}
