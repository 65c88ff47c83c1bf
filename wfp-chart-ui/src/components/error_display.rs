//! Error panel shown in place of the result cards.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
}

/// Warning icon and the message, nothing else. Details go to the log.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    rsx! {
        div {
            class: "error-message",
            role: "alert",
            style: "display: flex; align-items: center; gap: 8px; padding: 10px 14px; margin: 8px 0; background: #fdecea; color: #c0392b; border-left: 4px solid #c0392b; border-radius: 4px;",
            i { class: "ri-error-warning-line" }
            p {
                style: "margin: 0;",
                "{props.message}"
            }
        }
    }
}
