use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AlertKind {
    Success,
    Error,
    Warning,
    #[default]
    Info,
}

impl AlertKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertKind::Success => "success",
            AlertKind::Error => "error",
            AlertKind::Warning => "warning",
            AlertKind::Info => "info",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            AlertKind::Success => "✅",
            AlertKind::Error => "❌",
            AlertKind::Warning => "⚠️",
            AlertKind::Info => "ℹ️",
        }
    }
}

/// A notification a page holds in a signal until it is dismissed.
#[derive(Clone, Debug, PartialEq)]
pub struct Alert {
    pub kind: AlertKind,
    pub message: String,
}

impl Alert {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: AlertKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: AlertKind::Error,
            message: message.into(),
        }
    }
}

/// Typed notification banner. Renders nothing for an empty message; shows
/// a close button only when `onclose` is given.
#[component]
pub fn AlertBox(
    message: String,
    #[props(default)] kind: AlertKind,
    #[props(default)] title: Option<String>,
    #[props(default)] class: String,
    onclose: Option<EventHandler<()>>,
) -> Element {
    if message.is_empty() {
        return rsx! {};
    }

    rsx! {
        div {
            class: "alert alert-{kind.as_str()} {class}",
            div {
                class: "alert-content",
                div { class: "alert-icon", "{kind.icon()}" }
                div {
                    class: "alert-body",
                    if let Some(title) = title {
                        div { class: "alert-title", "{title}" }
                    }
                    div { class: "alert-message", "{message}" }
                }
                if let Some(onclose) = onclose {
                    button {
                        class: "alert-close",
                        aria_label: "Close alert",
                        onclick: move |_| onclose.call(()),
                        "×"
                    }
                }
            }
        }
    }
}
