use dioxus::prelude::*;
use tracing::debug;

use crate::routes::{resolve, Access, AppPath};
use crate::session::use_session;

/// Render `children` only when the signed-in role may see `path`; otherwise
/// replace the current history entry with the redirect target.
///
/// Reading the session here subscribes the gate to it, so signing in on the
/// login page or signing out on a dashboard re-runs the check.
#[component]
pub fn RouteGate(path: AppPath, children: Element) -> Element {
    let session = use_session();
    let nav = use_navigator();
    let role = session.read().current_user().map(|u| u.role);

    match resolve(path, role) {
        Access::Allow => rsx! {
            {children}
        },
        Access::Redirect(target) => {
            debug!(from = path.as_str(), to = target.as_str(), "redirecting");
            nav.replace(target.as_str());
            rsx! {}
        }
    }
}
