//! # API crate — the calls and rules shared by every BloodDonate view
//!
//! There is no server behind BloodDonate. This crate plays its part: the
//! views call into [`MockBackend`] exactly as they would call a real client,
//! and the rules that a server would normally double-check (form validation,
//! donor eligibility) live here too so they can be tested without a browser.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`admin`] | Donor/recipient lists of the admin panel: block, unblock, remove |
//! | [`backend`] | [`MockBackend`]: sign-in, registration, blood requests, dashboard data |
//! | [`config`] | `blooddonate.toml`: simulated latency per call |
//! | [`dashboard`] | Dashboard data and derived figures |
//! | [`eligibility`] | 56-day donation cooldown |
//! | [`forms`] | Form value structs and their rules |
//! | [`validation`] | [`FieldErrors`] and the shared field rules |

pub mod admin;
pub mod backend;
pub mod config;
pub mod dashboard;
mod delay;
pub mod eligibility;
mod error;
pub mod forms;
pub mod validation;

pub use admin::{AdminRoster, EntryKind};
pub use backend::{backend, MockBackend};
pub use config::{config, ApiConfig, LatencyConfig};
pub use dashboard::{DonorDashboard, RecipientDashboard};
pub use eligibility::{Eligibility, DONATION_COOLDOWN_DAYS};
pub use error::ApiError;
pub use forms::{
    field, BloodRequest, BloodRequestForm, LoginForm, RegisterForm, Urgency, MAX_UNITS, MIN_UNITS,
};
pub use validation::{is_valid_email, FieldErrors};
