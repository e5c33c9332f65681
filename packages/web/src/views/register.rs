use dioxus::prelude::*;
use store::Role;
use ui::views::RegisterView;
use ui::{AppPath, RouteGate};

#[component]
pub fn Register(role: String) -> Element {
    let preset = role.parse::<Role>().ok();

    rsx! {
        RouteGate {
            path: AppPath::Register,
            RegisterView { role: preset }
        }
    }
}
