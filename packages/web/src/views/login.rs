//! Login page.

use dioxus::prelude::*;
use store::Role;
use ui::views::LoginView;
use ui::{AppPath, RouteGate};

/// `/login?role=...`. The query only preselects the role select.
#[component]
pub fn Login(role: String) -> Element {
    let preset = role.parse::<Role>().ok();

    rsx! {
        RouteGate {
            path: AppPath::Login,
            LoginView { role: preset }
        }
    }
}
