//! Admin panel: donor and recipient lists with block/unblock and remove.

use api::{AdminRoster, EntryKind};
use dioxus::prelude::*;
use store::{AdminEntry, EntryStatus};

use crate::session::use_current_user;

const TABS: [EntryKind; 2] = [EntryKind::Donor, EntryKind::Recipient];

#[component]
pub fn AdminPanelView() -> Element {
    let user = use_current_user();
    let mut roster = use_signal(AdminRoster::seed);
    let mut tab = use_signal(|| EntryKind::Donor);

    let admin_name = user.map(|u| u.name).unwrap_or_else(|| "Admin".to_string());
    let selected = tab();
    let entries = roster.read().entries(selected).to_vec();

    rsx! {
        div {
            class: "admin-dashboard",
            div {
                class: "admin-header",
                h1 { "Admin Dashboard" }
                p { "Welcome, {admin_name}! Manage donors and recipients below." }
            }
            div {
                class: "admin-tabs",
                for kind in TABS {
                    button {
                        key: "{kind.tab_label()}",
                        class: if kind == selected { "active" } else { "" },
                        onclick: move |_| tab.set(kind),
                        "{kind.tab_label()}"
                    }
                }
            }
            div {
                class: "admin-content",
                AdminTable {
                    kind: selected,
                    entries,
                    on_toggle: move |id: u32| {
                        roster.write().toggle_status(selected, id);
                    },
                    on_remove: move |id: u32| {
                        roster.write().remove(selected, id);
                    },
                }
            }
        }
    }
}

#[component]
fn AdminTable(
    kind: EntryKind,
    entries: Vec<AdminEntry>,
    on_toggle: EventHandler<u32>,
    on_remove: EventHandler<u32>,
) -> Element {
    rsx! {
        table {
            class: "admin-table",
            thead {
                tr {
                    th { "Name" }
                    th { "Email" }
                    th { "Blood Group" }
                    th { "{kind.count_label()}" }
                    th { "Status" }
                    th { "Actions" }
                }
            }
            tbody {
                for entry in entries {
                    tr {
                        key: "{entry.id}",
                        td { "{entry.name}" }
                        td { "{entry.email}" }
                        td { "{entry.blood_group}" }
                        td { "{entry.count}" }
                        td { class: "status-{entry.status.as_str()}", "{entry.status.as_str()}" }
                        td {
                            button {
                                onclick: move |_| on_toggle.call(entry.id),
                                "{toggle_label(entry.status)}"
                            }
                            button {
                                style: "margin-left: 8px",
                                onclick: move |_| on_remove.call(entry.id),
                                "Remove"
                            }
                        }
                    }
                }
            }
        }
    }
}

fn toggle_label(status: EntryStatus) -> &'static str {
    match status {
        EntryStatus::Active => "Block",
        EntryStatus::Blocked => "Unblock",
    }
}
