//! Pages open to every visitor.

use dioxus::prelude::*;
use store::Role;
use ui::views::{HomeView, NotFoundView, RequestBloodView, RoleAccessView};
use ui::{AppPath, RouteGate};

#[component]
pub fn Home() -> Element {
    rsx! {
        RouteGate { path: AppPath::Home, HomeView {} }
    }
}

#[component]
pub fn RequestBlood() -> Element {
    rsx! {
        RouteGate { path: AppPath::RequestBlood, RequestBloodView {} }
    }
}

/// `/access/:role`; an unknown role falls through to the not-found page.
#[component]
pub fn Access(role: String) -> Element {
    match role.parse::<Role>() {
        Ok(role) => rsx! {
            RoleAccessView { role }
        },
        Err(_) => rsx! {
            NotFoundView { path: format!("access/{role}") }
        },
    }
}

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    rsx! {
        NotFoundView { path: segments.join("/") }
    }
}
