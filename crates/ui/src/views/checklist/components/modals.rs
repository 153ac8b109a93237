use dioxus::prelude::*;

#[component]
pub fn ResetConfirmModal(
    message: Option<String>,
    on_cancel: EventHandler<()>,
    on_confirm: EventHandler<()>,
) -> Element {
    let Some(message) = message else {
        return rsx! {};
    };

    rsx! {
        div {
            class: "tracker-modal-overlay",
            onclick: move |_| on_cancel.call(()),
            div {
                class: "tracker-modal",
                role: "alertdialog",
                onclick: move |evt| evt.stop_propagation(),
                h3 { class: "tracker-modal-title", "Reset all tasks?" }
                p { class: "tracker-modal-body", "{message}" }
                div { class: "tracker-modal-actions",
                    button {
                        class: "btn tracker-modal-cancel",
                        r#type: "button",
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                    button {
                        class: "btn tracker-modal-confirm",
                        r#type: "button",
                        onclick: move |_| on_confirm.call(()),
                        "Reset"
                    }
                }
            }
        }
    }
}
