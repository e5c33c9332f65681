use dioxus::prelude::*;

/// Labelled input with an inline error message.
///
/// The input id is `input-{name}` so the label points at it.
#[component]
pub fn InputField(
    name: String,
    value: String,
    oninput: EventHandler<FormEvent>,
    #[props(default)] label: String,
    #[props(default = "text".to_string())] r#type: String,
    #[props(default)] placeholder: String,
    #[props(default)] error: Option<String>,
    #[props(default)] required: bool,
    #[props(default)] disabled: bool,
    #[props(default)] class: String,
    #[props(default)] min: Option<String>,
    #[props(default)] max: Option<String>,
) -> Element {
    let input_id = format!("input-{name}");
    let input_class = if error.is_some() {
        "form-input error"
    } else {
        "form-input"
    };

    rsx! {
        div {
            class: "form-group {class}",
            if !label.is_empty() {
                label {
                    r#for: "{input_id}",
                    class: "form-label",
                    "{label}"
                    if required {
                        span { class: "required", "*" }
                    }
                }
            }
            input {
                id: "{input_id}",
                r#type: "{r#type}",
                name: "{name}",
                value: "{value}",
                placeholder: "{placeholder}",
                required,
                disabled,
                min,
                max,
                class: input_class,
                oninput: move |evt| oninput.call(evt),
            }
            if let Some(error) = error {
                div { class: "error-message", "{error}" }
            }
        }
    }
}
