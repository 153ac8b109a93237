use dioxus::prelude::*;

use super::super::state::Notification;

const BANNER_STYLE: &str = "position: fixed; top: 20px; left: 50%; \
    transform: translateX(-50%); background: #8B6F47; color: white; \
    padding: 1rem 2rem; border-radius: 0.5rem; \
    box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1); z-index: 1000;";

fn banner_style(leaving: bool) -> String {
    let animation = if leaving { "slideUp" } else { "slideDown" };
    format!("{BANNER_STYLE} animation: {animation} 0.3s ease;")
}

/// Transient banners. Several may be on screen at once; they are not merged.
#[component]
pub fn NotificationStack(notifications: Vec<Notification>) -> Element {
    rsx! {
        for notification in notifications.iter() {
            div {
                key: "{notification.id}",
                class: "notification",
                role: "status",
                style: banner_style(notification.leaving),
                "{notification.message}"
            }
        }
    }
}
