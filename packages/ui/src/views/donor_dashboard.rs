//! Donor dashboard: eligibility, impact, upcoming and recent donations.

use api::eligibility::today;
use api::DonorDashboard;
use dioxus::prelude::*;
use store::{display_date, User};
use tracing::error;

use crate::components::{AlertBox, AlertKind};
use crate::session::use_current_user;
use crate::views::dashboard_parts::{DashboardCard, DashboardLoading, NoticeList, StatItem};

#[component]
pub fn DonorDashboardView() -> Element {
    let user = use_current_user();
    let dashboard = use_resource(|| async {
        match api::backend().donor_dashboard().await {
            Ok(data) => Some(data),
            Err(e) => {
                error!(error = %e, "failed to load donor dashboard");
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
        DonorDashboardBody { user, data }
    }
}

#[component]
fn DonorDashboardBody(user: User, data: DonorDashboard) -> Element {
    let eligibility = data.eligibility(today());
    let status_icon = if eligibility.is_eligible() { "✅" } else { "⏳" };
    let recent = data.recent().to_vec();

    rsx! {
        div {
            class: "donor-dashboard",
            div {
                class: "container",
                div {
                    class: "dashboard-header",
                    h1 { "Welcome back, {user.name}!" }
                    p { "Manage your blood donation activities and track your impact" }
                }

                div {
                    class: "dashboard-grid",
                    DashboardCard {
                        title: "Eligibility Status",
                        div {
                            class: "eligibility-status {eligibility.class()}",
                            div { class: "status-icon", "{status_icon}" }
                            div {
                                class: "status-content",
                                h4 { "{eligibility.headline()}" }
                                p { "{eligibility.message()}" }
                            }
                        }
                    }

                    DashboardCard {
                        title: "Your Impact",
                        div {
                            class: "stats-grid",
                            StatItem { value: data.total_donations().to_string(), label: "Total Donations" }
                            StatItem { value: data.lives_saved().to_string(), label: "Lives Saved" }
                            StatItem { value: user.blood_group_label().to_string(), label: "Blood Group" }
                        }
                    }

                    DashboardCard {
                        title: "Upcoming Donations",
                        div {
                            class: "upcoming-donations",
                            if data.upcoming.is_empty() {
                                p { class: "no-data", "No upcoming donations scheduled" }
                            }
                            for appointment in data.upcoming.clone() {
                                div {
                                    key: "{appointment.id}",
                                    class: "donation-item",
                                    div {
                                        class: "donation-date",
                                        div { class: "date", "{display_date(appointment.date)}" }
                                        div { class: "time", "{appointment.time}" }
                                    }
                                    div {
                                        class: "donation-details",
                                        h4 { "{appointment.kind}" }
                                        p { "{appointment.location}" }
                                    }
                                    button { class: "btn btn-primary btn-sm", "Reschedule" }
                                }
                            }
                        }
                    }

                    DashboardCard {
                        title: "Recent Donations",
                        div {
                            class: "donation-history",
                            for donation in recent {
                                div {
                                    key: "{donation.id}",
                                    class: "donation-item",
                                    div {
                                        class: "donation-date",
                                        div { class: "date", "{display_date(donation.date)}" }
                                    }
                                    div {
                                        class: "donation-details",
                                        h4 { "{donation.blood_group} - {donation.units} unit" }
                                        p { "{donation.location}" }
                                    }
                                    div {
                                        class: "donation-status {donation.status.as_str()}",
                                        "{donation.status.label()}"
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
