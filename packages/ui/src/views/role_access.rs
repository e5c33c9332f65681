//! "Login as / Register as" choice for one role.

use dioxus::prelude::*;
use store::Role;

use crate::routes::AppPath;

#[component]
pub fn RoleAccessView(role: Role) -> Element {
    let nav = use_navigator();
    let title = match role {
        Role::Donor => "Donor Access",
        Role::Recipient => "Recipient Access",
        Role::Admin => "Admin Access",
    };
    let noun = match role {
        Role::Donor => "Donor",
        Role::Recipient => "Recipient",
        Role::Admin => "Admin",
    };

    rsx! {
        div {
            class: "selection-page",
            h2 { "{title}" }
            div {
                class: "selection-buttons",
                button {
                    class: "btn btn-primary btn-large",
                    onclick: move |_| {
                        nav.push(AppPath::Login.with_role(role));
                    },
                    "Login as {noun}"
                }
                if role != Role::Admin {
                    button {
                        class: "btn btn-secondary btn-large",
                        onclick: move |_| {
                            nav.push(AppPath::Register.with_role(role));
                        },
                        "Register as {noun}"
                    }
                }
            }
        }
    }
}
