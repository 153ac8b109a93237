use std::sync::Arc;

use dioxus::prelude::*;
use futures::StreamExt;
use services::{TrackerController, TrackerService};
use tracker_core::model::TaskId;
use tracker_core::tracker::TrackerEvent;

use crate::context::AppContext;
use crate::vm::map_checklist;

use super::components::{ChecklistSection, NotificationStack, ProgressCards, ResetConfirmModal};
use super::renderer::SignalRenderer;
use super::state::{TrackerSignals, use_tracker_signals};

/// Start the page's controller. The coroutine owns it, so events are applied
/// strictly in the order they were sent.
pub fn use_tracker_events(
    tracker: Arc<TrackerService>,
    signals: TrackerSignals,
) -> Coroutine<TrackerEvent> {
    use_coroutine(move |mut rx: UnboundedReceiver<TrackerEvent>| {
        let service = TrackerService::clone(&tracker);
        let renderer = SignalRenderer::new(signals);
        async move {
            let mut controller = TrackerController::new(service, renderer);
            controller.initialize().await;
            while let Some(event) = rx.next().await {
                controller.dispatch(event).await;
            }
        }
    })
}

/// Close the reset prompt and send the user's answer.
pub fn answer_reset(signals: TrackerSignals, events: Coroutine<TrackerEvent>, accepted: bool) {
    let mut confirm = signals.confirm;
    confirm.set(None);
    events.send(if accepted {
        TrackerEvent::ResetConfirmed
    } else {
        TrackerEvent::ResetDeclined
    });
}

#[component]
pub fn ChecklistView() -> Element {
    let ctx = use_context::<AppContext>();
    let tracker = ctx.tracker();
    let vm = use_hook(|| map_checklist(tracker.checklist()));
    let signals = use_tracker_signals(tracker.checklist());
    let events = use_tracker_events(tracker, signals);

    let checked = signals.checked.read().clone();
    let pressed = signals.pressed.read().clone();
    let pulses = signals.pulses.read().clone();
    let progress = signals.progress.read().clone();
    let notifications = signals.notifications.read().clone();
    let confirm_message = signals.confirm.read().clone();

    rsx! {
        div { class: "tracker", id: "tracker-root",
            header { class: "tracker-header",
                h1 { "{vm.title}" }
                if let Some(subtitle) = vm.subtitle.as_ref() {
                    p { class: "tracker-subtitle", "{subtitle}" }
                }
            }

            ProgressCards { progress: progress.clone() }

            div { class: "tracker-actions",
                button {
                    id: "resetBtn",
                    class: "btn btn-reset",
                    r#type: "button",
                    onclick: move |_| events.send(TrackerEvent::ResetRequested),
                    "Reset All"
                }
                button {
                    id: "printBtn",
                    class: "btn btn-print",
                    r#type: "button",
                    onclick: move |_| events.send(TrackerEvent::PrintRequested),
                    "Print Checklist"
                }
            }

            for section in vm.sections.iter() {
                ChecklistSection {
                    key: "{section.id}",
                    section: section.clone(),
                    checked: section
                        .tasks
                        .iter()
                        .map(|task| checked.get(task.id.index()).copied().unwrap_or(false))
                        .collect::<Vec<_>>(),
                    pressed: section
                        .tasks
                        .iter()
                        .map(|task| pressed.contains(&task.id))
                        .collect::<Vec<_>>(),
                    progress: progress.section(section.id).cloned(),
                    pulse: pulses.get(&section.id).copied(),
                    on_toggle: move |(task, checked): (TaskId, bool)| {
                        events.send(TrackerEvent::Toggled { task, checked });
                    },
                }
            }

            ResetConfirmModal {
                message: confirm_message,
                on_cancel: move |()| answer_reset(signals, events, false),
                on_confirm: move |()| answer_reset(signals, events, true),
            }

            NotificationStack { notifications }
        }
    }
}
