use dioxus::prelude::*;

use crate::routes::{nav_links, AppPath, NavLink};
use crate::session::{use_current_user, LogoutButton};

/// Top navigation bar with a collapsible mobile menu.
///
/// `current` marks the active link; pages outside [`AppPath`] pass `None`.
#[component]
pub fn Navbar(#[props(default)] current: Option<AppPath>) -> Element {
    let mut menu_open = use_signal(|| false);
    let user = use_current_user();
    let links = nav_links(user.as_ref().map(|u| u.role));
    let user_name = user.map(|u| u.name);

    let button_class = if menu_open() {
        "mobile-menu-button active"
    } else {
        "mobile-menu-button"
    };
    let menu_class = if menu_open() {
        "mobile-menu open"
    } else {
        "mobile-menu"
    };

    rsx! {
        nav {
            class: "navbar",
            div {
                class: "container navbar-container",
                Link {
                    to: AppPath::Home.as_str(),
                    class: "navbar-brand",
                    onclick: move |_| menu_open.set(false),
                    div {
                        class: "brand-logo",
                        span { class: "heart-icon", "❤️" }
                        span { class: "brand-text", "BloodDonate" }
                    }
                }

                div {
                    class: "navbar-menu desktop-menu",
                    NavItems {
                        links: links.clone(),
                        current,
                        user_name: user_name.clone(),
                        mobile: false,
                        on_navigate: move |_| {},
                    }
                }

                button {
                    class: button_class,
                    aria_label: "Toggle mobile menu",
                    onclick: move |_| menu_open.toggle(),
                    span {}
                    span {}
                    span {}
                }

                div {
                    class: menu_class,
                    NavItems {
                        links,
                        current,
                        user_name,
                        mobile: true,
                        on_navigate: move |_| menu_open.set(false),
                    }
                }
            }
        }
    }
}

/// Links plus the account area, rendered once for the desktop bar and once
/// for the mobile menu.
#[component]
fn NavItems(
    links: Vec<NavLink>,
    current: Option<AppPath>,
    user_name: Option<String>,
    mobile: bool,
    on_navigate: EventHandler<()>,
) -> Element {
    let link_class = if mobile { "mobile-nav-link" } else { "nav-link" };
    let items: Vec<(NavLink, String)> = links
        .into_iter()
        .map(|link| {
            let class = if current == Some(link.path) {
                format!("{link_class} active")
            } else {
                link_class.to_string()
            };
            (link, class)
        })
        .collect();
    let user_class = if mobile { "mobile-user-info" } else { "user-menu" };
    let auth_class = if mobile {
        "mobile-auth-buttons"
    } else {
        "auth-buttons"
    };

    rsx! {
        for (link, class) in items {
            Link {
                key: "{link.path.as_str()}",
                to: link.path.as_str(),
                class,
                onclick: move |_| on_navigate.call(()),
                "{link.label}"
            }
        }
        if let Some(name) = user_name {
            div {
                class: user_class,
                span { class: "user-name", "Welcome, {name}" }
                LogoutButton {
                    class: "btn btn-secondary btn-sm",
                    on_logout: move |_| on_navigate.call(()),
                }
            }
        } else {
            div {
                class: auth_class,
                Link {
                    to: AppPath::Login.as_str(),
                    class: "btn btn-secondary btn-sm",
                    onclick: move |_| on_navigate.call(()),
                    "Login"
                }
                Link {
                    to: AppPath::Register.as_str(),
                    class: "btn btn-primary btn-sm",
                    onclick: move |_| on_navigate.call(()),
                    "Register"
                }
            }
        }
    }
}
