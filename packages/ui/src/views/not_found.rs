use dioxus::prelude::*;

use crate::routes::AppPath;

#[component]
pub fn NotFoundView(path: String) -> Element {
    rsx! {
        div {
            class: "not-found-page container",
            h1 { "Page not found" }
            p { "Nothing lives at /{path}." }
            Link { to: AppPath::Home.as_str(), class: "btn btn-primary", "Back to Home" }
        }
    }
}
