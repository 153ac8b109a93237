use dioxus::prelude::*;

use crate::vm::ProgressVm;

#[component]
pub fn ProgressCards(progress: ProgressVm) -> Element {
    let fill_style = format!("width: {}%;", progress.percentage);

    rsx! {
        div { class: "progress-summary",
            div { class: "progress-card",
                span { class: "progress-value", id: "completedCount", "{progress.completed}" }
                span { class: "progress-caption", "Completed" }
            }
            div { class: "progress-card",
                span { class: "progress-value", id: "remainingCount", "{progress.remaining}" }
                span { class: "progress-caption", "Remaining" }
            }
            div { class: "progress-card",
                span { class: "progress-value", id: "progressPercent", "{progress.percent}" }
                span { class: "progress-caption", "Complete" }
            }
        }
        div { class: "progress-bar",
            div { class: "progress-bar-fill", style: "{fill_style}" }
        }
    }
}
