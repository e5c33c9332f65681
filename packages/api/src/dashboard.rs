//! Data behind the donor and recipient dashboards.
//!
//! The mock backend hands out fixed histories; the derived figures (totals,
//! lives saved, units received, eligibility) are computed here so the views
//! stay declarative.

use chrono::NaiveDate;
use store::{
    Appointment, BloodGroup, DonationRecord, Notice, NoticeKind, RecordStatus, RequestRecord,
};

use crate::eligibility::Eligibility;

/// How many history rows the "Recent" cards show.
pub const RECENT_LIMIT: usize = 3;

/// Lives saved per donation, as advertised on the dashboard.
pub const LIVES_PER_DONATION: usize = 3;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DonorDashboard {
    pub history: Vec<DonationRecord>,
    pub upcoming: Vec<Appointment>,
    pub notices: Vec<Notice>,
}

impl DonorDashboard {
    pub fn total_donations(&self) -> usize {
        self.history.len()
    }

    pub fn lives_saved(&self) -> usize {
        self.history.len() * LIVES_PER_DONATION
    }

    pub fn recent(&self) -> &[DonationRecord] {
        &self.history[..self.history.len().min(RECENT_LIMIT)]
    }

    pub fn last_donation(&self) -> Option<NaiveDate> {
        self.history.iter().map(|d| d.date).max()
    }

    pub fn eligibility(&self, today: NaiveDate) -> Eligibility {
        Eligibility::from_last_donation(self.last_donation(), today)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecipientDashboard {
    pub history: Vec<RequestRecord>,
    pub upcoming: Vec<RequestRecord>,
    pub notices: Vec<Notice>,
}

impl RecipientDashboard {
    pub fn total_requests(&self) -> usize {
        self.history.len()
    }

    pub fn units_received(&self) -> u32 {
        self.history.iter().map(|r| r.units).sum()
    }

    pub fn recent(&self) -> &[RequestRecord] {
        &self.history[..self.history.len().min(RECENT_LIMIT)]
    }
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn notice(id: u32, kind: NoticeKind, message: &str, on: NaiveDate) -> Notice {
    Notice {
        id,
        kind,
        message: message.to_string(),
        date: on,
    }
}

pub(crate) fn donor_fixture() -> DonorDashboard {
    let donation = |id, on, location: &str| DonationRecord {
        id,
        date: on,
        blood_group: BloodGroup::OPos,
        units: 1,
        location: location.to_string(),
        status: RecordStatus::Completed,
    };
    DonorDashboard {
        history: vec![
            donation(1, date(2024, 1, 15), "City Hospital"),
            donation(2, date(2023, 12, 20), "Red Cross Center"),
            donation(3, date(2023, 11, 10), "Community Blood Bank"),
        ],
        upcoming: vec![Appointment {
            id: 1,
            date: date(2024, 2, 20),
            time: "10:00 AM".to_string(),
            location: "City Hospital".to_string(),
            kind: "Regular Donation".to_string(),
        }],
        notices: vec![
            notice(
                1,
                NoticeKind::Info,
                "Your next donation is scheduled for February 20, 2024",
                date(2024, 1, 25),
            ),
            notice(
                2,
                NoticeKind::Success,
                "Thank you for your donation on January 15, 2024",
                date(2024, 1, 16),
            ),
        ],
    }
}

pub(crate) fn recipient_fixture() -> RecipientDashboard {
    let request = |id, on, units, hospital: &str, time: Option<&str>, status| RequestRecord {
        id,
        date: on,
        time: time.map(str::to_string),
        blood_group: BloodGroup::APos,
        units,
        hospital: hospital.to_string(),
        status,
    };
    RecipientDashboard {
        history: vec![
            request(1, date(2024, 1, 10), 2, "City Hospital", None, RecordStatus::Fulfilled),
            request(2, date(2023, 12, 5), 1, "Red Cross Center", None, RecordStatus::Fulfilled),
            request(3, date(2023, 11, 1), 3, "Community Blood Bank", None, RecordStatus::Fulfilled),
        ],
        upcoming: vec![request(
            1,
            date(2024, 2, 25),
            1,
            "City Hospital",
            Some("09:00 AM"),
            RecordStatus::Pending,
        )],
        notices: vec![
            notice(
                1,
                NoticeKind::Info,
                "Your next blood request is scheduled for February 25, 2024",
                date(2024, 1, 20),
            ),
            notice(
                2,
                NoticeKind::Success,
                "Your request on January 10, 2024 was fulfilled",
                date(2024, 1, 11),
            ),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_donor_figures() {
        let dashboard = donor_fixture();
        assert_eq!(dashboard.total_donations(), 3);
        assert_eq!(dashboard.lives_saved(), 9);
        assert_eq!(dashboard.recent().len(), 3);
        assert_eq!(dashboard.last_donation(), Some(date(2024, 1, 15)));
    }

    #[test]
    fn test_donor_eligibility_uses_latest_donation() {
        let dashboard = donor_fixture();
        assert_eq!(
            dashboard.eligibility(date(2024, 2, 1)),
            Eligibility::Ineligible { days_remaining: 39 }
        );
        assert!(dashboard.eligibility(date(2024, 3, 11)).is_eligible());
    }

    #[test]
    fn test_empty_donor_history_is_eligible() {
        let dashboard = DonorDashboard::default();
        assert!(dashboard.recent().is_empty());
        assert!(dashboard.eligibility(date(2024, 1, 1)).is_eligible());
    }

    #[test]
    fn test_recipient_figures() {
        let dashboard = recipient_fixture();
        assert_eq!(dashboard.total_requests(), 3);
        assert_eq!(dashboard.units_received(), 6);
        assert_eq!(dashboard.recent()[0].status.label(), "Fulfilled");
        assert_eq!(dashboard.upcoming[0].status, RecordStatus::Pending);
    }
}
