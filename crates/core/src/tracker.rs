//! Event dispatch for the tracker.
//!
//! `handle_event` is a pure function from (state, event) to a new state plus
//! the ordered side effects the caller must run. Keeping effects as data lets
//! the desktop UI and the tests drive the exact same transitions.

use crate::model::{Checklist, SectionId, TaskId, TaskState};
use crate::progress::{ProgressReport, is_section_complete};
use crate::snapshot::Snapshot;

pub const RESET_CONFIRMATION: &str =
    "Are you sure you want to reset all tasks? This action cannot be undone.";
pub const RESET_NOTIFICATION: &str = "All tasks have been reset";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackerEvent {
    Toggled { task: TaskId, checked: bool },
    ResetRequested,
    ResetConfirmed,
    ResetDeclined,
    PrintRequested,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Brief press feedback on a task row.
    Press(TaskId),
    Render(ProgressReport),
    Persist(Snapshot),
    ClearPersisted,
    Celebrate(SectionId),
    /// Ask the user a yes/no question; the answer comes back as
    /// `ResetConfirmed` or `ResetDeclined`.
    ConfirmReset(&'static str),
    Notify(String),
    Print,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: TaskState,
    pub effects: Vec<Effect>,
}

impl Transition {
    fn unchanged(state: &TaskState) -> Self {
        Self {
            state: state.clone(),
            effects: Vec::new(),
        }
    }
}

#[must_use]
pub fn handle_event(checklist: &Checklist, state: &TaskState, event: TrackerEvent) -> Transition {
    match event {
        TrackerEvent::Toggled { task, checked } => toggle(checklist, state, task, checked),
        TrackerEvent::ResetRequested => Transition {
            state: state.clone(),
            effects: vec![Effect::ConfirmReset(RESET_CONFIRMATION)],
        },
        TrackerEvent::ResetConfirmed => {
            let mut next = state.clone();
            next.clear_all();
            let report = ProgressReport::compute(checklist, &next);
            Transition {
                state: next,
                effects: vec![
                    Effect::Render(report),
                    Effect::ClearPersisted,
                    Effect::Notify(RESET_NOTIFICATION.to_owned()),
                ],
            }
        }
        TrackerEvent::ResetDeclined => Transition::unchanged(state),
        TrackerEvent::PrintRequested => Transition {
            state: state.clone(),
            effects: vec![Effect::Print],
        },
    }
}

fn toggle(checklist: &Checklist, state: &TaskState, task: TaskId, checked: bool) -> Transition {
    let Some(section) = checklist.section_of(task) else {
        return Transition::unchanged(state);
    };

    let mut next = state.clone();
    if !next.set(task, checked) {
        return Transition::unchanged(state);
    }

    let mut effects = vec![
        Effect::Press(task),
        Effect::Render(ProgressReport::compute(checklist, &next)),
        Effect::Persist(Snapshot::from_state(&next)),
    ];
    if is_section_complete(checklist, &next, section) {
        effects.push(Effect::Celebrate(section));
    }

    Transition {
        state: next,
        effects,
    }
}
