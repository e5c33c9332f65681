use dioxus::prelude::*;
use ui::Navbar;

use crate::Route;

/// Navbar above the routed page.
#[component]
pub fn Shell() -> Element {
    let route = use_route::<Route>();

    rsx! {
        div {
            class: "App",
            Navbar { current: route.app_path() }
            main {
                class: "main-content",
                Outlet::<Route> {}
            }
        }
    }
}
