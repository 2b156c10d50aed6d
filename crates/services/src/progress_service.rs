use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;
use tokio::sync::Mutex as AsyncMutex;

use pylearn_core::model::{LessonId, UserProgress};
use pylearn_core::{CompletionOutcome, ProgressStore};
use storage::repository::{ProgressRecord, SlotKey, SlotRepository};

/// Receives the new progress snapshot after every mutation.
#[async_trait]
pub trait ProgressObserver: Send + Sync {
    async fn progress_changed(&self, snapshot: &UserProgress);
}

/// Writes each snapshot to the progress slot.
///
/// Failures are logged and swallowed; in-memory progress is never rolled back.
pub struct SlotPersistence {
    slots: Arc<dyn SlotRepository>,
}

impl SlotPersistence {
    #[must_use]
    pub fn new(slots: Arc<dyn SlotRepository>) -> Self {
        Self { slots }
    }
}

#[async_trait]
impl ProgressObserver for SlotPersistence {
    async fn progress_changed(&self, snapshot: &UserProgress) {
        let json = match ProgressRecord::from_progress(snapshot).to_json() {
            Ok(json) => json,
            Err(err) => {
                tracing::warn!(error = %err, "failed to encode progress snapshot");
                return;
            }
        };
        if let Err(err) = self.slots.write_slot(SlotKey::Progress, &json).await {
            tracing::warn!(error = %err, "failed to persist progress snapshot");
        }
    }
}

/// Read the stored progress snapshot, falling back to the zero state.
pub async fn load_progress(slots: &dyn SlotRepository) -> UserProgress {
    let raw = match slots.read_slot(SlotKey::Progress).await {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            tracing::debug!("no stored progress; starting fresh");
            return UserProgress::default();
        }
        Err(err) => {
            tracing::warn!(error = %err, "failed to read progress slot; starting fresh");
            return UserProgress::default();
        }
    };

    match ProgressRecord::from_json(&raw) {
        Ok(record) => record.into_progress(),
        Err(err) => {
            tracing::warn!(error = %err, "stored progress is corrupt; starting fresh");
            UserProgress::default()
        }
    }
}

/// Async front for `ProgressStore`.
///
/// Mutations are serialized and observers see snapshots in mutation order.
/// The store is released before observers run, so an observer may read the
/// service; it must not record completions itself.
pub struct ProgressService {
    store: AsyncMutex<ProgressStore>,
    /// Held from a mutation until its observers have finished.
    sequence: AsyncMutex<()>,
    observers: Mutex<Vec<Arc<dyn ProgressObserver>>>,
}

impl ProgressService {
    /// A service with no observers attached.
    #[must_use]
    pub fn new(progress: UserProgress) -> Self {
        Self {
            store: AsyncMutex::new(ProgressStore::new(progress)),
            sequence: AsyncMutex::new(()),
            observers: Mutex::new(Vec::new()),
        }
    }

    /// Load progress from the slot and persist every later change back to it.
    pub async fn load(slots: Arc<dyn SlotRepository>) -> Self {
        let progress = load_progress(slots.as_ref()).await;
        tracing::info!(
            completed = progress.completed_count(),
            total_score = progress.total_score(),
            "loaded progress"
        );
        let service = Self::new(progress);
        service.subscribe(Arc::new(SlotPersistence::new(slots)));
        service
    }

    pub fn subscribe(&self, observer: Arc<dyn ProgressObserver>) {
        self.observers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(observer);
    }

    /// Record a completion; a missing score counts as 0.
    pub async fn record_completion(
        &self,
        lesson_id: LessonId,
        score: Option<u32>,
    ) -> CompletionOutcome {
        let _sequence = self.sequence.lock().await;
        let (outcome, snapshot) = {
            let mut store = self.store.lock().await;
            let outcome = store.record_completion(lesson_id, score.unwrap_or(0));
            (outcome, store.progress().clone())
        };
        log_outcome(&outcome);
        self.notify(&snapshot).await;
        outcome
    }

    /// Record a completion only if `lesson_id` is not already completed.
    ///
    /// The check and the update happen under one lock.
    pub async fn record_first_completion(
        &self,
        lesson_id: LessonId,
        score: u32,
    ) -> Option<CompletionOutcome> {
        let _sequence = self.sequence.lock().await;
        let (outcome, snapshot) = {
            let mut store = self.store.lock().await;
            if store.progress().is_completed(lesson_id) {
                tracing::debug!(lesson_id = %lesson_id, "lesson already completed; not recording");
                return None;
            }
            let outcome = store.record_completion(lesson_id, score);
            (outcome, store.progress().clone())
        };
        log_outcome(&outcome);
        self.notify(&snapshot).await;
        Some(outcome)
    }

    pub async fn snapshot(&self) -> UserProgress {
        self.store.lock().await.progress().clone()
    }

    pub async fn is_completed(&self, lesson_id: LessonId) -> bool {
        self.store.lock().await.progress().is_completed(lesson_id)
    }

    async fn notify(&self, snapshot: &UserProgress) {
        let observers = self
            .observers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        for observer in observers {
            observer.progress_changed(snapshot).await;
        }
    }
}

fn log_outcome(outcome: &CompletionOutcome) {
    tracing::info!(
        lesson_id = %outcome.lesson_id,
        newly_completed = outcome.newly_completed,
        score = outcome.score_added,
        "recorded completion"
    );
    for achievement in &outcome.unlocked {
        tracing::info!(achievement = %achievement, "achievement unlocked");
    }
}
