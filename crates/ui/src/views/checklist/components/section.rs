use dioxus::prelude::*;
use tracker_core::model::TaskId;

use crate::vm::{SectionProgressVm, SectionVm, TaskVm};

use super::super::state::PulseState;

fn pulse_style(pulse: Option<PulseState>) -> &'static str {
    match pulse {
        Some(PulseState::Cleared) => "animation: none;",
        Some(PulseState::Running) => "animation: pulse 0.5s ease;",
        None => "",
    }
}

#[component]
pub fn ChecklistSection(
    section: SectionVm,
    checked: Vec<bool>,
    pressed: Vec<bool>,
    progress: Option<SectionProgressVm>,
    pulse: Option<PulseState>,
    on_toggle: EventHandler<(TaskId, bool)>,
) -> Element {
    let header_style = pulse_style(pulse);
    let (label, complete) = progress.map_or_else(
        || (String::new(), false),
        |progress| (progress.label, progress.complete),
    );
    // `complete` is the styling hook for a finished section.
    let progress_class = if complete {
        "section-progress complete"
    } else {
        "section-progress"
    };

    rsx! {
        section { class: "checklist-section",
            div { class: "section-header", style: "{header_style}",
                h2 { class: "section-title", "{section.title}" }
                span { class: "{progress_class}", "{label}" }
            }
            ul { class: "task-list",
                for (idx, task) in section.tasks.iter().enumerate() {
                    TaskItem {
                        key: "{task.id}",
                        task: task.clone(),
                        checked: checked.get(idx).copied().unwrap_or(false),
                        pressed: pressed.get(idx).copied().unwrap_or(false),
                        on_toggle,
                    }
                }
            }
        }
    }
}

#[component]
fn TaskItem(
    task: TaskVm,
    checked: bool,
    pressed: bool,
    on_toggle: EventHandler<(TaskId, bool)>,
) -> Element {
    let id = task.id;
    let input_id = format!("task-{id}");
    let item_class = if checked { "task-item checked" } else { "task-item" };
    let item_style = if pressed {
        "transform: scale(0.98);"
    } else {
        "transform: scale(1);"
    };

    rsx! {
        li { class: "{item_class}", style: "{item_style}",
            label { class: "task-label", r#for: "{input_id}",
                input {
                    id: "{input_id}",
                    class: "task-checkbox",
                    r#type: "checkbox",
                    checked: checked,
                    onchange: move |evt| on_toggle.call((id, evt.checked())),
                }
                span { class: "task-text", "{task.label}" }
            }
            if let Some(detail) = task.detail.as_ref() {
                p { class: "task-detail", "{detail}" }
            }
        }
    }
}
