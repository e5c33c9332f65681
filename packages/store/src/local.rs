//! # localStorage session store — browser-side persistence
//!
//! [`LocalStore`] is the [`SessionStore`] used on the **web platform**. It
//! reads and writes `window.localStorage` through [`web_sys::Storage`].
//!
//! ## Connection management
//!
//! `LocalStore` is a zero-size struct that looks the storage object up on
//! every call. `Storage` is not `Send`, and the lookup is a cheap property
//! read on `window`.
//!
//! ## Error handling
//!
//! Reads and removals swallow errors (a missing or blocked storage reads as
//! "no session"). Writes report [`StoreError`] so a failed sign-in can be
//! surfaced to the user instead of leaving memory and storage out of step.

use tracing::error;
use web_sys::Storage;

use crate::error::StoreError;
use crate::session::SessionStore;

/// `window.localStorage`-backed SessionStore for the web platform.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStore;

impl LocalStore {
    pub fn new() -> Self {
        Self
    }

    fn storage(&self) -> Option<Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl SessionStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let storage = self.storage().ok_or(StoreError::Unavailable)?;
        storage.set_item(key, value).map_err(|e| {
            error!(key, error = ?e, "localStorage.setItem failed");
            StoreError::Write {
                key: key.to_string(),
                reason: format!("{e:?}"),
            }
        })
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = self.storage() {
            let _ = storage.remove_item(key);
        }
    }
}
