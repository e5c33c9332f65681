//! # Session — the signed-in user and its persisted mirror
//!
//! [`SessionController`] is the single owner of "who is signed in". It keeps
//! the current [`User`] in memory and mirrors it into a [`SessionStore`] under
//! the constant key [`SESSION_KEY`], so a page reload restores the session.
//!
//! ## Consistency
//!
//! Being authenticated *is* holding a user: the controller stores an
//! `Option<User>` and [`SessionController::is_authenticated`] derives from it.
//! [`login`](SessionController::login) writes storage first and only then
//! adopts the user, so a failed write leaves both sides anonymous.
//!
//! ## Restore
//!
//! [`SessionController::restore`] trusts whatever record it finds. A record
//! that no longer parses is removed and the session starts anonymous.

use tracing::{debug, info, warn};

use crate::error::StoreError;
use crate::models::User;

/// Storage key holding the serialised [`User`].
pub const SESSION_KEY: &str = "user";

/// Synchronous string key/value storage, modelled on `window.localStorage`.
pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove(&self, key: &str);
}

/// Owns the current user and keeps it in sync with a [`SessionStore`].
#[derive(Clone, Debug)]
pub struct SessionController<S> {
    store: S,
    user: Option<User>,
}

impl<S: SessionStore> SessionController<S> {
    /// Create an anonymous session without looking at storage.
    pub fn new(store: S) -> Self {
        Self { store, user: None }
    }

    /// Create a session from whatever record the store holds.
    pub fn restore(store: S) -> Self {
        let user = match store.get(SESSION_KEY) {
            Some(raw) => match serde_json::from_str::<User>(&raw) {
                Ok(user) => {
                    debug!(user_id = user.id, role = %user.role, "restored session");
                    Some(user)
                }
                Err(e) => {
                    warn!(error = %e, "discarding unreadable session record");
                    store.remove(SESSION_KEY);
                    None
                }
            },
            None => None,
        };
        Self { store, user }
    }

    /// Sign `user` in and persist the record.
    pub fn login(&mut self, user: User) -> Result<(), StoreError> {
        let raw = serde_json::to_string(&user)?;
        self.store.set(SESSION_KEY, &raw)?;
        info!(user_id = user.id, role = %user.role, "signed in");
        self.user = Some(user);
        Ok(())
    }

    /// Sign out and drop the persisted record.
    pub fn logout(&mut self) {
        if let Some(user) = self.user.take() {
            info!(user_id = user.id, "signed out");
        }
        self.store.remove(SESSION_KEY);
    }

    pub fn current_user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStore;
    use crate::models::{BloodGroup, Role};

    fn donor() -> User {
        User {
            id: 1,
            name: "jane".to_string(),
            email: "jane@example.com".to_string(),
            role: Role::Donor,
            blood_group: Some(BloodGroup::OPos),
            phone: None,
        }
    }

    #[test]
    fn test_login_persists_user() {
        let store = MemoryStore::new();
        let mut session = SessionController::new(store.clone());
        assert!(!session.is_authenticated());

        session.login(donor()).unwrap();

        assert!(session.is_authenticated());
        assert_eq!(session.current_user(), Some(&donor()));
        let raw = store.get(SESSION_KEY).unwrap();
        let stored: User = serde_json::from_str(&raw).unwrap();
        assert_eq!(stored, donor());
    }

    #[test]
    fn test_logout_clears_both_sides() {
        let store = MemoryStore::new();
        let mut session = SessionController::new(store.clone());
        session.login(donor()).unwrap();

        session.logout();

        assert!(!session.is_authenticated());
        assert!(session.current_user().is_none());
        assert!(store.get(SESSION_KEY).is_none());
    }

    #[test]
    fn test_restore_trusts_stored_record() {
        let store = MemoryStore::new();
        SessionController::new(store.clone()).login(donor()).unwrap();

        let session = SessionController::restore(store);
        assert!(session.is_authenticated());
        assert_eq!(session.current_user().map(|u| u.role), Some(Role::Donor));
    }

    #[test]
    fn test_restore_reads_plain_json_record() {
        let store = MemoryStore::new();
        store
            .set(
                SESSION_KEY,
                r#"{"id":7,"name":"sam","email":"sam@example.com","role":"recipient","bloodGroup":"A+"}"#,
            )
            .unwrap();

        let session = SessionController::restore(store);
        let user = session.current_user().unwrap();
        assert_eq!(user.role, Role::Recipient);
        assert_eq!(user.blood_group, Some(BloodGroup::APos));
        assert!(user.phone.is_none());
    }

    #[test]
    fn test_restore_discards_garbage() {
        let store = MemoryStore::new();
        store.set(SESSION_KEY, "{not json").unwrap();

        let session = SessionController::restore(store.clone());
        assert!(!session.is_authenticated());
        assert!(store.get(SESSION_KEY).is_none());
    }

    #[test]
    fn test_restore_rejects_unknown_role() {
        let store = MemoryStore::new();
        store
            .set(
                SESSION_KEY,
                r#"{"id":7,"name":"x","email":"x@y.z","role":"superuser","bloodGroup":null}"#,
            )
            .unwrap();

        assert!(!SessionController::restore(store).is_authenticated());
    }

    #[test]
    fn test_failed_write_stays_anonymous() {
        let store = MemoryStore::read_only();
        let mut session = SessionController::new(store.clone());

        assert!(session.login(donor()).is_err());
        assert!(!session.is_authenticated());
        assert!(store.get(SESSION_KEY).is_none());
    }
}
