//! # Domain models for donors, recipients and their records
//!
//! Every type here is `Serialize + Deserialize` so it can be mirrored into
//! browser storage (the session [`User`]) or handed from the mock backend to
//! the views.
//!
//! ## Types
//!
//! | Type | Represents |
//! |------|-----------|
//! | [`Role`] | Who the user is: donor, recipient or admin. Decides navigation and the home view. |
//! | [`BloodGroup`] | One of the eight ABO/Rh groups, serialised as `"A+"`, `"O-"`, ... |
//! | [`User`] | The signed-in user. The only record that is persisted. |
//! | [`DonationRecord`] / [`RequestRecord`] | Rows of a donor's or recipient's history. |
//! | [`Appointment`] | An upcoming donation slot. |
//! | [`Notice`] | A dashboard notification. |
//! | [`AdminEntry`] | A donor or recipient row in the admin panel. |

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Role of a signed-in user.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Donor,
    Recipient,
    Admin,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Donor, Role::Recipient, Role::Admin];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Donor => "donor",
            Role::Recipient => "recipient",
            Role::Admin => "admin",
        }
    }

    /// Label used in the "Login As" / "Register As" selects.
    pub fn label(&self) -> &'static str {
        match self {
            Role::Donor => "Blood Donor",
            Role::Recipient => "Blood Recipient",
            Role::Admin => "Admin",
        }
    }

    /// Whether a blood group must be supplied when registering with this role.
    pub fn requires_blood_group(&self) -> bool {
        match self {
            Role::Donor | Role::Recipient => true,
            Role::Admin => false,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not one of the known values of an enum.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind}: {value:?}")]
pub struct ParseEnumError {
    pub kind: &'static str,
    pub value: String,
}

impl FromStr for Role {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| ParseEnumError {
                kind: "role",
                value: s.to_string(),
            })
    }
}

/// ABO/Rh blood group.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BloodGroup {
    #[serde(rename = "A+")]
    APos,
    #[serde(rename = "A-")]
    ANeg,
    #[serde(rename = "B+")]
    BPos,
    #[serde(rename = "B-")]
    BNeg,
    #[serde(rename = "AB+")]
    AbPos,
    #[serde(rename = "AB-")]
    AbNeg,
    #[serde(rename = "O+")]
    OPos,
    #[serde(rename = "O-")]
    ONeg,
}

impl BloodGroup {
    /// All groups in the order the selects list them.
    pub const ALL: [BloodGroup; 8] = [
        BloodGroup::APos,
        BloodGroup::ANeg,
        BloodGroup::BPos,
        BloodGroup::BNeg,
        BloodGroup::AbPos,
        BloodGroup::AbNeg,
        BloodGroup::OPos,
        BloodGroup::ONeg,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BloodGroup::APos => "A+",
            BloodGroup::ANeg => "A-",
            BloodGroup::BPos => "B+",
            BloodGroup::BNeg => "B-",
            BloodGroup::AbPos => "AB+",
            BloodGroup::AbNeg => "AB-",
            BloodGroup::OPos => "O+",
            BloodGroup::ONeg => "O-",
        }
    }
}

impl fmt::Display for BloodGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BloodGroup {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BloodGroup::ALL
            .into_iter()
            .find(|group| group.as_str() == s)
            .ok_or_else(|| ParseEnumError {
                kind: "blood group",
                value: s.to_string(),
            })
    }
}

/// The signed-in user, mirrored into browser storage while the session lasts.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(default)]
    pub blood_group: Option<BloodGroup>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl User {
    /// Blood group for display, empty when none was given.
    pub fn blood_group_label(&self) -> &'static str {
        self.blood_group.as_ref().map(BloodGroup::as_str).unwrap_or("")
    }
}

/// Lifecycle status of a donation or a blood request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordStatus {
    Completed,
    Fulfilled,
    Pending,
}

impl RecordStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordStatus::Completed => "completed",
            RecordStatus::Fulfilled => "fulfilled",
            RecordStatus::Pending => "pending",
        }
    }

    /// Capitalised form shown in the history lists.
    pub fn label(&self) -> &'static str {
        match self {
            RecordStatus::Completed => "Completed",
            RecordStatus::Fulfilled => "Fulfilled",
            RecordStatus::Pending => "Pending",
        }
    }
}

/// A past blood donation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DonationRecord {
    pub id: u32,
    pub date: NaiveDate,
    pub blood_group: BloodGroup,
    pub units: u32,
    pub location: String,
    pub status: RecordStatus,
}

/// A blood request made by a recipient.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestRecord {
    pub id: u32,
    pub date: NaiveDate,
    /// Time of day for scheduled requests, e.g. `"09:00 AM"`.
    #[serde(default)]
    pub time: Option<String>,
    pub blood_group: BloodGroup,
    pub units: u32,
    pub hospital: String,
    pub status: RecordStatus,
}

/// An upcoming donation slot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: u32,
    pub date: NaiveDate,
    pub time: String,
    pub location: String,
    pub kind: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    Info,
    Success,
}

/// A dashboard notification.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Notice {
    pub id: u32,
    pub kind: NoticeKind,
    pub message: String,
    pub date: NaiveDate,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryStatus {
    Active,
    Blocked,
}

impl EntryStatus {
    pub fn toggled(self) -> Self {
        match self {
            EntryStatus::Active => EntryStatus::Blocked,
            EntryStatus::Blocked => EntryStatus::Active,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EntryStatus::Active => "active",
            EntryStatus::Blocked => "blocked",
        }
    }
}

/// A donor or recipient row in the admin panel.
///
/// `count` is the number of donations for donors and of requests for
/// recipients.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminEntry {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub blood_group: BloodGroup,
    pub count: u32,
    pub status: EntryStatus,
}

/// Format a date the way the dashboards show it: `1/15/2024`.
pub fn display_date(date: NaiveDate) -> String {
    date.format("%-m/%-d/%Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_json_shape() {
        let user = User {
            id: 1,
            name: "jane".to_string(),
            email: "jane@example.com".to_string(),
            role: Role::Donor,
            blood_group: Some(BloodGroup::OPos),
            phone: None,
        };
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["role"], "donor");
        assert_eq!(json["bloodGroup"], "O+");
        assert!(json.get("phone").is_none());
    }

    #[test]
    fn test_parse_enums() {
        assert_eq!("recipient".parse::<Role>(), Ok(Role::Recipient));
        assert!("Donor".parse::<Role>().is_err());
        assert_eq!("AB-".parse::<BloodGroup>(), Ok(BloodGroup::AbNeg));
        assert!("C+".parse::<BloodGroup>().is_err());
    }

    #[test]
    fn test_only_admin_skips_blood_group() {
        assert!(Role::Donor.requires_blood_group());
        assert!(Role::Recipient.requires_blood_group());
        assert!(!Role::Admin.requires_blood_group());
    }

    #[test]
    fn test_display_date() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        assert_eq!(display_date(date), "1/5/2024");
    }
}
