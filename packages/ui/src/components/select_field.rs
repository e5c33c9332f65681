use dioxus::prelude::*;

/// One `<option>` of a [`SelectField`].
#[derive(Clone, Debug, PartialEq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Labelled select with an optional empty placeholder entry and an inline
/// error message.
#[component]
pub fn SelectField(
    name: String,
    value: String,
    options: Vec<SelectOption>,
    onchange: EventHandler<FormEvent>,
    #[props(default)] label: String,
    #[props(default)] placeholder: Option<String>,
    #[props(default)] error: Option<String>,
    #[props(default)] required: bool,
    #[props(default)] style: String,
) -> Element {
    let select_id = format!("select-{name}");
    let select_class = if error.is_some() {
        "form-select error"
    } else {
        "form-select"
    };

    rsx! {
        div {
            class: "form-group",
            if !label.is_empty() {
                label {
                    r#for: "{select_id}",
                    class: "form-label",
                    "{label}"
                    if required {
                        span { class: "required", "*" }
                    }
                }
            }
            select {
                id: "{select_id}",
                name: "{name}",
                class: select_class,
                style: "{style}",
                onchange: move |evt| onchange.call(evt),
                if let Some(placeholder) = placeholder {
                    option { value: "", selected: value.is_empty(), "{placeholder}" }
                }
                for opt in options {
                    option {
                        key: "{opt.value}",
                        value: "{opt.value}",
                        selected: opt.value == value,
                        "{opt.label}"
                    }
                }
            }
            if let Some(error) = error {
                div { class: "error-message", "{error}" }
            }
        }
    }
}
