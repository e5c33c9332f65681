pub mod error;
pub mod models;
pub mod session;

mod memory;
pub use memory::MemoryStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalStore;

pub use error::StoreError;
pub use models::{
    display_date, AdminEntry, Appointment, BloodGroup, DonationRecord, EntryStatus, Notice,
    NoticeKind, ParseEnumError, RecordStatus, RequestRecord, Role, User,
};
pub use session::{SessionController, SessionStore, SESSION_KEY};
