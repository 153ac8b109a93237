use std::sync::Arc;

use storage::repository::Storage;
use tracker_core::model::Checklist;

use crate::error::AppServicesError;
use crate::tracker_service::TrackerService;

/// Assembles app-facing services for one checklist.
#[derive(Clone)]
pub struct AppServices {
    tracker: Arc<TrackerService>,
}

impl AppServices {
    /// Build services backed by `SQLite` storage.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization fails.
    pub async fn new_sqlite(db_url: &str, checklist: Checklist) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        Ok(Self::from_storage(&storage, checklist))
    }

    #[must_use]
    pub fn in_memory(checklist: Checklist) -> Self {
        Self::from_storage(&Storage::in_memory(), checklist)
    }

    #[must_use]
    pub fn from_storage(storage: &Storage, checklist: Checklist) -> Self {
        let tracker = Arc::new(TrackerService::new(
            Arc::new(checklist),
            Arc::clone(&storage.local),
        ));
        Self { tracker }
    }

    #[must_use]
    pub fn tracker(&self) -> Arc<TrackerService> {
        Arc::clone(&self.tracker)
    }
}
