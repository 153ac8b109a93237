mod checklist;

#[cfg(test)]
mod checklist_flow;
#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use checklist::{
    ChecklistView, NOTIFICATION_EXIT, NOTIFICATION_VISIBLE, Notification, PRESS_RESTORE,
    PULSE_RESTART, PulseState, SignalRenderer, TrackerSignals, answer_reset, use_tracker_events,
    use_tracker_signals,
};
