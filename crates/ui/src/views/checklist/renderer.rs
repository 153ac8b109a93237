use dioxus::document::eval;
use dioxus::prelude::*;
use services::Renderer;
use tracker_core::model::{SectionId, TaskId, TaskState};
use tracker_core::progress::ProgressReport;

use crate::vm::map_progress;

use super::state::{
    NOTIFICATION_EXIT, NOTIFICATION_VISIBLE, Notification, PRESS_RESTORE, PULSE_RESTART,
    PulseState, TrackerSignals,
};

/// `Renderer` that writes into the checklist page's signals.
///
/// Must be driven from inside the Dioxus runtime: timers are spawned as
/// tasks of the current scope and die with it.
pub struct SignalRenderer {
    signals: TrackerSignals,
}

impl SignalRenderer {
    #[must_use]
    pub fn new(signals: TrackerSignals) -> Self {
        Self { signals }
    }
}

impl Renderer for SignalRenderer {
    fn render(&mut self, state: &TaskState, report: &ProgressReport) {
        self.signals.checked.set(state.as_slice().to_vec());
        self.signals.progress.set(map_progress(report));
    }

    fn press_task(&mut self, task: TaskId) {
        let mut pressed = self.signals.pressed;
        pressed.write().insert(task);
        spawn(async move {
            tokio::time::sleep(PRESS_RESTORE).await;
            pressed.write().remove(&task);
        });
    }

    fn celebrate_section(&mut self, section: SectionId) {
        let mut pulses = self.signals.pulses;
        pulses.write().insert(section, PulseState::Cleared);
        spawn(async move {
            tokio::time::sleep(PULSE_RESTART).await;
            pulses.write().insert(section, PulseState::Running);
        });
    }

    fn confirm_reset(&mut self, message: &str) {
        self.signals.confirm.set(Some(message.to_owned()));
    }

    fn show_notification(&mut self, message: &str) {
        let id = *self.signals.next_notification_id.peek();
        self.signals.next_notification_id.set(id + 1);

        let mut notifications = self.signals.notifications;
        notifications.write().push(Notification {
            id,
            message: message.to_owned(),
            leaving: false,
        });
        spawn(async move {
            tokio::time::sleep(NOTIFICATION_VISIBLE).await;
            if let Some(item) = notifications.write().iter_mut().find(|item| item.id == id) {
                item.leaving = true;
            }
            tokio::time::sleep(NOTIFICATION_EXIT).await;
            notifications.write().retain(|item| item.id != id);
        });
    }

    fn print(&mut self) {
        let _ = eval("window.print();");
    }
}
