//! Session context and hooks for the UI.

use api::ApiError;
use dioxus::prelude::*;
use store::{SessionController, User};

/// Session storage for the current platform: `localStorage` in the browser,
/// an in-memory map everywhere else (tests, native previews).
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type PlatformStore = store::LocalStore;
#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub type PlatformStore = store::MemoryStore;

pub type Session = SessionController<PlatformStore>;

pub fn make_session_store() -> PlatformStore {
    PlatformStore::new()
}

/// Get the session signal.
/// Every view reading it re-renders when the user signs in or out.
pub fn use_session() -> Signal<Session> {
    use_context::<Signal<Session>>()
}

/// The signed-in user, if any.
pub fn use_current_user() -> Option<User> {
    use_session().read().current_user().cloned()
}

/// Adopt `user` as the signed-in user and persist it.
pub fn sign_in(mut session: Signal<Session>, user: User) -> Result<(), ApiError> {
    session.write().login(user)?;
    Ok(())
}

/// Provider component that owns the session.
/// A persisted record is restored before the first render, so gated pages
/// never see a signed-in user as anonymous.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let session = use_signal(|| Session::restore(make_session_store()));

    use_context_provider(|| session);

    rsx! {
        {children}
    }
}

/// Button to sign the current user out.
#[component]
pub fn LogoutButton(
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
    on_logout: Option<EventHandler<()>>,
) -> Element {
    let mut session = use_session();

    let onclick = move |_| {
        session.write().logout();
        if let Some(handler) = on_logout {
            handler.call(());
        }
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}
