//! Field-level validation shared by the sign-in, registration and blood
//! request forms.
//!
//! Validation only runs on submit. Its result is a [`FieldErrors`] map from
//! field name to message; an empty map means the form may be submitted.

use std::collections::BTreeMap;

use lazy_static::lazy_static;
use regex::Regex;

/// Minimum password length accepted by the forms.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Validation messages keyed by field name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<&'static str, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    /// Drop the message for one field, leaving the others untouched.
    pub fn clear(&mut self, field: &str) {
        self.0.remove(field);
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.keys().copied()
    }
}

/// Loose `text@text.text` shape check.
pub fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"\S+@\S+\.\S+").unwrap();
    }
    EMAIL_RE.is_match(email)
}

/// Record `message` under `field` when `value` is blank after trimming.
pub(crate) fn require(errors: &mut FieldErrors, field: &'static str, value: &str, message: &str) {
    if value.trim().is_empty() {
        errors.insert(field, message);
    }
}

/// Required-then-shape check used by every email field.
pub(crate) fn require_email(
    errors: &mut FieldErrors,
    field: &'static str,
    value: &str,
    missing: &str,
    invalid: &str,
) {
    if value.is_empty() {
        errors.insert(field, missing);
    } else if !is_valid_email(value) {
        errors.insert(field, invalid);
    }
}

pub(crate) fn require_password(errors: &mut FieldErrors, field: &'static str, value: &str) {
    if value.is_empty() {
        errors.insert(field, "Password is required");
    } else if value.chars().count() < MIN_PASSWORD_LEN {
        errors.insert(field, "Password must be at least 6 characters");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_shape() {
        assert!(is_valid_email("a@b.c"));
        assert!(is_valid_email("jane.doe@example.co.uk"));
        assert!(!is_valid_email("jane@example"));
        assert!(!is_valid_email("janeexample.com"));
        assert!(!is_valid_email("   "));
        // the pattern is unanchored, so surrounding text is tolerated
        assert!(is_valid_email("mail me at a@b.c please"));
    }

    #[test]
    fn test_require_trims() {
        let mut errors = FieldErrors::new();
        require(&mut errors, "name", "   ", "Name is required");
        require(&mut errors, "phone", " 555 ", "Phone number is required");
        assert_eq!(errors.get("name"), Some("Name is required"));
        assert!(!errors.contains("phone"));
    }

    #[test]
    fn test_password_rules() {
        let mut errors = FieldErrors::new();
        require_password(&mut errors, "password", "");
        assert_eq!(errors.get("password"), Some("Password is required"));

        let mut errors = FieldErrors::new();
        require_password(&mut errors, "password", "12345");
        assert_eq!(
            errors.get("password"),
            Some("Password must be at least 6 characters")
        );

        let mut errors = FieldErrors::new();
        require_password(&mut errors, "password", "123456");
        assert!(errors.is_empty());
    }

    #[test]
    fn test_clear_only_touches_one_field() {
        let mut errors = FieldErrors::new();
        errors.insert("email", "Email is required");
        errors.insert("password", "Password is required");

        errors.clear("email");

        assert!(!errors.contains("email"));
        assert_eq!(errors.get("password"), Some("Password is required"));
        assert_eq!(errors.len(), 1);
    }
}
