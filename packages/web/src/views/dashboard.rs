//! Role-gated pages. Visitors without the matching role are redirected
//! before the page body mounts.

use dioxus::prelude::*;
use ui::views::{AdminPanelView, DonorDashboardView, RecipientDashboardView};
use ui::{AppPath, RouteGate};

#[component]
pub fn Dashboard() -> Element {
    rsx! {
        RouteGate { path: AppPath::Dashboard, DonorDashboardView {} }
    }
}

#[component]
pub fn RecipientDashboard() -> Element {
    rsx! {
        RouteGate { path: AppPath::RecipientDashboard, RecipientDashboardView {} }
    }
}

#[component]
pub fn Admin() -> Element {
    rsx! {
        RouteGate { path: AppPath::Admin, AdminPanelView {} }
    }
}
