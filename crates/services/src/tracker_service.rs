use std::sync::Arc;

use storage::repository::KeyValueStore;
use tracker_core::model::{Checklist, TaskState};
use tracker_core::snapshot::{STORAGE_KEY, Snapshot};

use crate::error::TrackerServiceError;

/// Loads, saves and clears the persisted task state for one checklist.
///
/// Storage is best effort: the plain methods log failures and fall back to
/// in-memory behaviour, so a broken store never interrupts the tracker.
#[derive(Clone)]
pub struct TrackerService {
    checklist: Arc<Checklist>,
    store: Arc<dyn KeyValueStore>,
}

impl TrackerService {
    #[must_use]
    pub fn new(checklist: Arc<Checklist>, store: Arc<dyn KeyValueStore>) -> Self {
        Self { checklist, store }
    }

    #[must_use]
    pub fn checklist(&self) -> &Checklist {
        &self.checklist
    }

    /// Read the stored snapshot, if any.
    ///
    /// # Errors
    ///
    /// Returns `TrackerServiceError` if the store fails or the stored value
    /// is not a JSON object.
    pub async fn try_load_snapshot(&self) -> Result<Option<Snapshot>, TrackerServiceError> {
        let Some(raw) = self.store.get_item(STORAGE_KEY).await? else {
            return Ok(None);
        };
        let snapshot = Snapshot::from_json(&raw)?;
        if snapshot.skipped() > 0 {
            tracing::debug!(
                skipped = snapshot.skipped(),
                "ignored unusable entries in saved state"
            );
        }
        Ok(Some(snapshot))
    }

    /// Task state to start the session with: markup defaults overlaid with
    /// whatever was saved. Any load failure is logged and yields the defaults.
    pub async fn load_state(&self) -> TaskState {
        let mut state = self.checklist.default_state();
        match self.try_load_snapshot().await {
            Ok(Some(snapshot)) => {
                let applied = snapshot.apply_to(&mut state);
                tracing::debug!(applied, tasks = state.len(), "restored saved state");
            }
            Ok(None) => tracing::debug!("no saved state"),
            Err(err) => tracing::error!(error = %err, "failed to load state"),
        }
        state
    }

    /// # Errors
    ///
    /// Returns `TrackerServiceError` if the store rejects the write.
    pub async fn try_save_snapshot(&self, snapshot: &Snapshot) -> Result<(), TrackerServiceError> {
        self.store
            .set_item(STORAGE_KEY, &snapshot.to_json())
            .await?;
        Ok(())
    }

    pub async fn save_snapshot(&self, snapshot: &Snapshot) {
        if let Err(err) = self.try_save_snapshot(snapshot).await {
            tracing::error!(error = %err, "failed to save state");
        }
    }

    pub async fn save_state(&self, state: &TaskState) {
        self.save_snapshot(&Snapshot::from_state(state)).await;
    }

    /// # Errors
    ///
    /// Returns `TrackerServiceError` if the store rejects the delete.
    pub async fn try_clear_state(&self) -> Result<(), TrackerServiceError> {
        self.store.remove_item(STORAGE_KEY).await?;
        Ok(())
    }

    pub async fn clear_state(&self) {
        if let Err(err) = self.try_clear_state().await {
            tracing::error!(error = %err, "failed to clear state");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storage::repository::InMemoryStore;
    use tracker_core::model::{ChecklistDraft, SectionDraft, TaskDraft, TaskId};

    fn checklist() -> Arc<Checklist> {
        Arc::new(
            ChecklistDraft {
                title: "T".into(),
                subtitle: None,
                sections: vec![SectionDraft {
                    title: "S".into(),
                    tasks: vec![
                        TaskDraft::new("a"),
                        TaskDraft {
                            checked: true,
                            ..TaskDraft::new("b")
                        },
                        TaskDraft::new("c"),
                    ],
                }],
            }
            .validate()
            .unwrap(),
        )
    }

    #[tokio::test]
    async fn first_load_uses_markup_defaults() {
        let service = TrackerService::new(checklist(), Arc::new(InMemoryStore::new()));
        assert_eq!(service.load_state().await.as_slice(), &[false, true, false]);
    }

    #[tokio::test]
    async fn save_then_load_round_trips() {
        let store = InMemoryStore::new();
        let service = TrackerService::new(checklist(), Arc::new(store.clone()));
        let state = TaskState::from_checked(vec![true, false, true]);
        service.save_state(&state).await;

        let reloaded = TrackerService::new(checklist(), Arc::new(store));
        assert_eq!(reloaded.load_state().await, state);
    }

    #[tokio::test]
    async fn partial_snapshot_keeps_defaults_for_missing_tasks() {
        let store = InMemoryStore::new();
        store
            .set_item(STORAGE_KEY, r#"{"task-0": true}"#)
            .await
            .unwrap();
        let service = TrackerService::new(checklist(), Arc::new(store));
        let state = service.load_state().await;
        assert!(state.is_checked(TaskId::new(0)));
        assert!(state.is_checked(TaskId::new(1)));
        assert!(!state.is_checked(TaskId::new(2)));
    }

    #[tokio::test]
    async fn malformed_snapshot_falls_back_to_defaults() {
        let store = InMemoryStore::new();
        store.set_item(STORAGE_KEY, "{oops").await.unwrap();
        let service = TrackerService::new(checklist(), Arc::new(store));

        assert!(matches!(
            service.try_load_snapshot().await,
            Err(TrackerServiceError::Snapshot(_))
        ));
        assert_eq!(service.load_state().await.as_slice(), &[false, true, false]);
    }

    #[tokio::test]
    async fn clear_removes_the_key() {
        let store = InMemoryStore::new();
        let service = TrackerService::new(checklist(), Arc::new(store.clone()));
        service.save_state(&TaskState::unchecked(3)).await;
        assert_eq!(store.len().unwrap(), 1);

        service.clear_state().await;
        assert_eq!(store.get_item(STORAGE_KEY).await.unwrap(), None);
    }

    #[tokio::test]
    async fn quota_failure_is_swallowed() {
        let store = InMemoryStore::with_quota(4);
        let service = TrackerService::new(checklist(), Arc::new(store.clone()));

        assert!(service.try_save_snapshot(&Snapshot::default()).await.is_err());
        service.save_state(&TaskState::unchecked(3)).await;
        assert!(store.is_empty().unwrap());
    }
}
