//! Shared UI for BloodDonate: session context, route gating, navigation,
//! form components and one view per page.
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`components`] | `InputField`, `SelectField`, `AlertBox` |
//! | [`routes`] | Pure route policy: redirects per role, navbar links |
//! | [`views`] | Page bodies, mounted by the platform crate's router |

pub mod components;
pub mod routes;
pub mod views;

mod gate;
pub use gate::RouteGate;

mod navbar;
pub use navbar::Navbar;

mod session;
pub use session::{
    make_session_store, sign_in, use_current_user, use_session, LogoutButton, PlatformStore,
    Session, SessionProvider,
};

pub use routes::{Access, AppPath};
