mod components;
mod renderer;
mod state;
mod view;

pub use renderer::SignalRenderer;
pub use state::{
    NOTIFICATION_EXIT, NOTIFICATION_VISIBLE, Notification, PRESS_RESTORE, PULSE_RESTART,
    PulseState, TrackerSignals, use_tracker_signals,
};
pub use view::{ChecklistView, answer_reset, use_tracker_events};
