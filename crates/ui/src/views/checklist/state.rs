use std::collections::{BTreeMap, BTreeSet};
use std::time::Duration;

use dioxus::prelude::*;
use tracker_core::model::{Checklist, SectionId, TaskId};
use tracker_core::progress::ProgressReport;

use crate::vm::{ProgressVm, map_progress};

/// How long a task row stays pressed after a toggle.
pub const PRESS_RESTORE: Duration = Duration::from_millis(150);
/// Gap between clearing and re-applying the header pulse.
pub const PULSE_RESTART: Duration = Duration::from_millis(10);
/// Time a notification banner stays fully visible.
pub const NOTIFICATION_VISIBLE: Duration = Duration::from_millis(3000);
/// Length of the banner's exit animation before it is removed.
pub const NOTIFICATION_EXIT: Duration = Duration::from_millis(300);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PulseState {
    /// Animation removed so the next one starts from the beginning.
    Cleared,
    Running,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub message: String,
    pub leaving: bool,
}

/// Everything the checklist page draws, as signals the renderer writes to.
#[derive(Clone, Copy, PartialEq)]
pub struct TrackerSignals {
    pub checked: Signal<Vec<bool>>,
    pub progress: Signal<ProgressVm>,
    pub pressed: Signal<BTreeSet<TaskId>>,
    pub pulses: Signal<BTreeMap<SectionId, PulseState>>,
    pub confirm: Signal<Option<String>>,
    pub notifications: Signal<Vec<Notification>>,
    pub next_notification_id: Signal<u64>,
}

/// Signals seeded with the checklist's markup defaults, so the first paint
/// is meaningful before saved state has been loaded.
pub fn use_tracker_signals(checklist: &Checklist) -> TrackerSignals {
    TrackerSignals {
        checked: use_signal(|| checklist.default_state().as_slice().to_vec()),
        progress: use_signal(|| {
            map_progress(&ProgressReport::compute(checklist, &checklist.default_state()))
        }),
        pressed: use_signal(BTreeSet::new),
        pulses: use_signal(BTreeMap::new),
        confirm: use_signal(|| None),
        notifications: use_signal(Vec::new),
        next_notification_id: use_signal(|| 0),
    }
}
