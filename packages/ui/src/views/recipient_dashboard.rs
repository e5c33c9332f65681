//! Recipient dashboard: request stats, recent requests and notifications.

use api::RecipientDashboard;
use dioxus::prelude::*;
use store::{display_date, User};
use tracing::error;

use crate::components::{AlertBox, AlertKind};
use crate::session::use_current_user;
use crate::views::dashboard_parts::{DashboardCard, DashboardLoading, NoticeList, StatItem};

#[component]
pub fn RecipientDashboardView() -> Element {
    let user = use_current_user();
    let dashboard = use_resource(|| async {
        match api::backend().recipient_dashboard().await {
            Ok(data) => Some(data),
            Err(e) => {
                error!(error = %e, "failed to load recipient dashboard");
                None
            }
        }
    });

    let Some(user) = user else {
        return rsx! {};
    };
    let Some(loaded) = dashboard.cloned() else {
        return rsx! { DashboardLoading {} };
    };
    let Some(data) = loaded else {
        return rsx! {
            div {
                class: "container",
                AlertBox { kind: AlertKind::Error, message: "Could not load your dashboard." }
            }
        };
    };

    rsx! {
        RecipientDashboardBody { user, data }
    }
}

#[component]
fn RecipientDashboardBody(user: User, data: RecipientDashboard) -> Element {
    let recent = data.recent().to_vec();

    rsx! {
        div {
            class: "donor-dashboard",
            div {
                class: "container",
                div {
                    class: "dashboard-header",
                    h1 { "Welcome back, {user.name}!" }
                    p { "Manage your blood requests and track your status" }
                }

                div {
                    class: "dashboard-grid",
                    DashboardCard {
                        title: "Your Request Stats",
                        div {
                            class: "stats-grid",
                            StatItem { value: data.total_requests().to_string(), label: "Total Requests" }
                            StatItem { value: data.units_received().to_string(), label: "Units Received" }
                            StatItem { value: user.blood_group_label().to_string(), label: "Blood Group" }
                        }
                    }

                    if !data.upcoming.is_empty() {
                        DashboardCard {
                            title: "Scheduled Requests",
                            div {
                                class: "upcoming-donations",
                                for request in data.upcoming.clone() {
                                    div {
                                        key: "{request.id}",
                                        class: "donation-item",
                                        div {
                                            class: "donation-date",
                                            div { class: "date", "{display_date(request.date)}" }
                                            if let Some(time) = request.time {
                                                div { class: "time", "{time}" }
                                            }
                                        }
                                        div {
                                            class: "donation-details",
                                            h4 { "{request.blood_group} - {request.units} unit(s)" }
                                            p { "{request.hospital}" }
                                        }
                                        div {
                                            class: "donation-status {request.status.as_str()}",
                                            "{request.status.label()}"
                                        }
                                    }
                                }
                            }
                        }
                    }

                    DashboardCard {
                        title: "Recent Requests",
                        div {
                            class: "donation-history",
                            for request in recent {
                                div {
                                    key: "{request.id}",
                                    class: "donation-item",
                                    div {
                                        class: "donation-date",
                                        div { class: "date", "{display_date(request.date)}" }
                                    }
                                    div {
                                        class: "donation-details",
                                        h4 { "{request.blood_group} - {request.units} unit(s)" }
                                        p { "{request.hospital}" }
                                    }
                                    div {
                                        class: "donation-status {request.status.as_str()}",
                                        "{request.status.label()}"
                                    }
                                }
                            }
                        }
                    }

                    DashboardCard {
                        title: "Notifications",
                        NoticeList { notices: data.notices.clone() }
                    }
                }
            }
        }
    }
}
