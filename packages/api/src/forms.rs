//! # Form values for sign-in, registration and blood requests
//!
//! Each form is a plain value struct the views edit field by field. Calling
//! `validate()` runs every rule for that form at once and returns the
//! resulting [`FieldErrors`]. Field names are the constants in [`field`], so
//! the views and the rules agree on the keys.
//!
//! | Form | Rules |
//! |------|-------|
//! | [`LoginForm`] | email required + shape, password required + length |
//! | [`RegisterForm`] | name, email, phone, password, matching confirmation, blood group for donors and recipients |
//! | [`BloodRequestForm`] | patient, blood group, units in range, hospital, contact details, reason, required date |

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use store::{BloodGroup, ParseEnumError, Role};

use crate::validation::{require, require_email, require_password, FieldErrors};

/// Field names used as [`FieldErrors`] keys.
pub mod field {
    pub const NAME: &str = "name";
    pub const EMAIL: &str = "email";
    pub const PHONE: &str = "phone";
    pub const PASSWORD: &str = "password";
    pub const CONFIRM_PASSWORD: &str = "confirmPassword";
    pub const BLOOD_GROUP: &str = "bloodGroup";
    pub const PATIENT_NAME: &str = "patientName";
    pub const UNITS: &str = "units";
    pub const HOSPITAL: &str = "hospital";
    pub const CONTACT_NAME: &str = "contactName";
    pub const CONTACT_PHONE: &str = "contactPhone";
    pub const CONTACT_EMAIL: &str = "contactEmail";
    pub const REASON: &str = "reason";
    pub const REQUIRED_DATE: &str = "requiredDate";
}

/// Inclusive bounds of the "Units Required" input.
pub const MIN_UNITS: u32 = 1;
pub const MAX_UNITS: u32 = 10;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub role: Role,
}

impl LoginForm {
    pub fn with_role(role: Role) -> Self {
        Self {
            role,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        require_email(
            &mut errors,
            field::EMAIL,
            &self.email,
            "Email is required",
            "Email is invalid",
        );
        require_password(&mut errors, field::PASSWORD, &self.password);
        errors
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub role: Role,
    pub blood_group: Option<BloodGroup>,
    pub password: String,
    pub confirm_password: String,
}

impl RegisterForm {
    pub fn with_role(role: Role) -> Self {
        Self {
            role,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        require(&mut errors, field::NAME, &self.name, "Name is required");
        require_email(
            &mut errors,
            field::EMAIL,
            &self.email,
            "Email is required",
            "Email is invalid",
        );
        require_password(&mut errors, field::PASSWORD, &self.password);
        if self.password != self.confirm_password {
            errors.insert(field::CONFIRM_PASSWORD, "Passwords do not match");
        }
        require(&mut errors, field::PHONE, &self.phone, "Phone number is required");
        if self.role.requires_blood_group() && self.blood_group.is_none() {
            errors.insert(field::BLOOD_GROUP, "Blood group is required");
        }
        errors
    }
}

/// How soon the requested blood is needed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Emergency,
    Urgent,
    #[default]
    Normal,
}

impl Urgency {
    pub const ALL: [Urgency; 3] = [Urgency::Emergency, Urgency::Urgent, Urgency::Normal];

    pub fn as_str(&self) -> &'static str {
        match self {
            Urgency::Emergency => "emergency",
            Urgency::Urgent => "urgent",
            Urgency::Normal => "normal",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Urgency::Emergency => "Emergency (Within 2 hours)",
            Urgency::Urgent => "Urgent (Within 24 hours)",
            Urgency::Normal => "Normal (Within 3 days)",
        }
    }

    /// Border colour of the urgency select.
    pub fn color(&self) -> &'static str {
        match self {
            Urgency::Emergency => "red",
            Urgency::Urgent => "orange",
            Urgency::Normal => "green",
        }
    }
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Urgency {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Urgency::ALL
            .into_iter()
            .find(|u| u.as_str() == s)
            .ok_or_else(|| ParseEnumError {
                kind: "urgency",
                value: s.to_string(),
            })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct BloodRequestForm {
    pub patient_name: String,
    pub blood_group: Option<BloodGroup>,
    pub units: u32,
    pub urgency: Urgency,
    pub hospital: String,
    pub contact_name: String,
    pub contact_phone: String,
    pub contact_email: String,
    pub reason: String,
    /// Raw value of the date input, `YYYY-MM-DD` or empty.
    pub required_date: String,
}

impl Default for BloodRequestForm {
    fn default() -> Self {
        Self {
            patient_name: String::new(),
            blood_group: None,
            units: MIN_UNITS,
            urgency: Urgency::Normal,
            hospital: String::new(),
            contact_name: String::new(),
            contact_phone: String::new(),
            contact_email: String::new(),
            reason: String::new(),
            required_date: String::new(),
        }
    }
}

impl BloodRequestForm {
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        require(
            &mut errors,
            field::PATIENT_NAME,
            &self.patient_name,
            "Patient name is required",
        );
        if self.blood_group.is_none() {
            errors.insert(field::BLOOD_GROUP, "Blood group is required");
        }
        if !(MIN_UNITS..=MAX_UNITS).contains(&self.units) {
            errors.insert(field::UNITS, "Units must be between 1 and 10");
        }
        require(
            &mut errors,
            field::HOSPITAL,
            &self.hospital,
            "Hospital name is required",
        );
        require(
            &mut errors,
            field::CONTACT_NAME,
            &self.contact_name,
            "Contact name is required",
        );
        require(
            &mut errors,
            field::CONTACT_PHONE,
            &self.contact_phone,
            "Contact phone is required",
        );
        require_email(
            &mut errors,
            field::CONTACT_EMAIL,
            &self.contact_email,
            "Contact email is required",
            "Contact email is invalid",
        );
        require(
            &mut errors,
            field::REASON,
            &self.reason,
            "Reason for blood requirement is required",
        );
        if self.required_date.is_empty() {
            errors.insert(field::REQUIRED_DATE, "Required date is required");
        } else if self.parsed_required_date().is_none() {
            errors.insert(field::REQUIRED_DATE, "Required date is invalid");
        }
        errors
    }

    pub(crate) fn parsed_required_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.required_date, "%Y-%m-%d").ok()
    }
}

/// A submitted blood request.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BloodRequest {
    pub patient_name: String,
    pub blood_group: BloodGroup,
    pub units: u32,
    pub urgency: Urgency,
    pub hospital: String,
    pub contact_name: String,
    pub contact_phone: String,
    pub contact_email: String,
    pub reason: String,
    pub required_date: NaiveDate,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_register(role: Role) -> RegisterForm {
        RegisterForm {
            name: "Sam Carter".to_string(),
            email: "sam@example.com".to_string(),
            phone: "555-0100".to_string(),
            role,
            blood_group: Some(BloodGroup::APos),
            password: "secret1".to_string(),
            confirm_password: "secret1".to_string(),
        }
    }

    fn valid_request() -> BloodRequestForm {
        BloodRequestForm {
            patient_name: "Pat".to_string(),
            blood_group: Some(BloodGroup::ONeg),
            units: 2,
            urgency: Urgency::Urgent,
            hospital: "City Hospital".to_string(),
            contact_name: "Kim".to_string(),
            contact_phone: "555-0101".to_string(),
            contact_email: "kim@example.com".to_string(),
            reason: "Surgery".to_string(),
            required_date: "2024-03-01".to_string(),
        }
    }

    #[test]
    fn test_empty_login_reports_every_field() {
        let errors = LoginForm::default().validate();
        assert_eq!(errors.get(field::EMAIL), Some("Email is required"));
        assert_eq!(errors.get(field::PASSWORD), Some("Password is required"));
    }

    #[test]
    fn test_login_invalid_email_and_short_password() {
        let form = LoginForm {
            email: "not-an-email".to_string(),
            password: "abc".to_string(),
            role: Role::Donor,
        };
        let errors = form.validate();
        assert_eq!(errors.get(field::EMAIL), Some("Email is invalid"));
        assert_eq!(
            errors.get(field::PASSWORD),
            Some("Password must be at least 6 characters")
        );
    }

    #[test]
    fn test_valid_login() {
        let form = LoginForm {
            email: "jane@example.com".to_string(),
            password: "hunter22".to_string(),
            role: Role::Admin,
        };
        assert!(form.validate().is_empty());
    }

    #[test]
    fn test_empty_register_reports_every_required_field() {
        let errors = RegisterForm::default().validate();
        for f in [
            field::NAME,
            field::EMAIL,
            field::PASSWORD,
            field::PHONE,
            field::BLOOD_GROUP,
        ] {
            assert!(errors.contains(f), "missing error for {f}");
        }
        // both passwords are empty, so they match
        assert!(!errors.contains(field::CONFIRM_PASSWORD));
    }

    #[test]
    fn test_recipient_without_blood_group_only_flags_blood_group() {
        let mut form = valid_register(Role::Recipient);
        form.blood_group = None;

        let errors = form.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(field::BLOOD_GROUP), Some("Blood group is required"));
    }

    #[test]
    fn test_admin_registration_needs_no_blood_group() {
        let mut form = valid_register(Role::Admin);
        form.blood_group = None;
        assert!(form.validate().is_empty());
    }

    #[test]
    fn test_password_confirmation_mismatch() {
        let mut form = valid_register(Role::Donor);
        form.confirm_password = "secret2".to_string();
        let errors = form.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.get(field::CONFIRM_PASSWORD),
            Some("Passwords do not match")
        );
    }

    #[test]
    fn test_whitespace_name_is_missing() {
        let mut form = valid_register(Role::Donor);
        form.name = "   ".to_string();
        assert_eq!(form.validate().get(field::NAME), Some("Name is required"));
    }

    #[test]
    fn test_blood_request_defaults() {
        let form = BloodRequestForm::default();
        assert_eq!(form.units, 1);
        assert_eq!(form.urgency, Urgency::Normal);

        let errors = form.validate();
        assert!(!errors.contains(field::UNITS));
        for f in [
            field::PATIENT_NAME,
            field::BLOOD_GROUP,
            field::HOSPITAL,
            field::CONTACT_NAME,
            field::CONTACT_PHONE,
            field::CONTACT_EMAIL,
            field::REASON,
            field::REQUIRED_DATE,
        ] {
            assert!(errors.contains(f), "missing error for {f}");
        }
    }

    #[test]
    fn test_blood_request_valid() {
        assert!(valid_request().validate().is_empty());
    }

    #[test]
    fn test_blood_request_units_out_of_range() {
        let mut form = valid_request();
        form.units = 11;
        assert_eq!(
            form.validate().get(field::UNITS),
            Some("Units must be between 1 and 10")
        );
        form.units = 0;
        assert!(form.validate().contains(field::UNITS));
    }

    #[test]
    fn test_blood_request_contact_email_messages() {
        let mut form = valid_request();
        form.contact_email = "kim".to_string();
        assert_eq!(
            form.validate().get(field::CONTACT_EMAIL),
            Some("Contact email is invalid")
        );
    }

    #[test]
    fn test_blood_request_bad_date() {
        let mut form = valid_request();
        form.required_date = "03/01/2024".to_string();
        assert_eq!(
            form.validate().get(field::REQUIRED_DATE),
            Some("Required date is invalid")
        );
    }

    #[test]
    fn test_urgency_select_values() {
        assert_eq!("emergency".parse::<Urgency>(), Ok(Urgency::Emergency));
        assert_eq!(Urgency::Urgent.color(), "orange");
        assert!("asap".parse::<Urgency>().is_err());
    }
}
