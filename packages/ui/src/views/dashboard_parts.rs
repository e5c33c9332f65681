use dioxus::prelude::*;
use store::{display_date, Notice, NoticeKind};

#[component]
pub fn DashboardLoading() -> Element {
    rsx! {
        div {
            class: "dashboard-loading",
            div { class: "spinner" }
            p { "Loading your dashboard..." }
        }
    }
}

#[component]
pub fn StatItem(value: String, label: String) -> Element {
    rsx! {
        div {
            class: "stat-item",
            div { class: "stat-number", "{value}" }
            div { class: "stat-label", "{label}" }
        }
    }
}

#[component]
pub fn DashboardCard(title: String, children: Element) -> Element {
    rsx! {
        div {
            class: "dashboard-card card",
            div {
                class: "card-header",
                h3 { "{title}" }
            }
            {children}
        }
    }
}

#[component]
pub fn NoticeList(notices: Vec<Notice>) -> Element {
    rsx! {
        div {
            class: "notifications",
            for notice in notices {
                div {
                    key: "{notice.id}",
                    class: "notification-item {notice_class(notice.kind)}",
                    div { class: "notification-icon", "{notice_icon(notice.kind)}" }
                    div {
                        class: "notification-content",
                        p { "{notice.message}" }
                        small { "{display_date(notice.date)}" }
                    }
                }
            }
        }
    }
}

fn notice_class(kind: NoticeKind) -> &'static str {
    match kind {
        NoticeKind::Info => "info",
        NoticeKind::Success => "success",
    }
}

fn notice_icon(kind: NoticeKind) -> &'static str {
    match kind {
        NoticeKind::Info => "ℹ️",
        NoticeKind::Success => "✅",
    }
}
