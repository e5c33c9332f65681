//! Donor eligibility: a donor may give blood again once
//! [`DONATION_COOLDOWN_DAYS`] whole days have passed since the last donation.

use chrono::NaiveDate;

pub const DONATION_COOLDOWN_DAYS: i64 = 56;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Eligibility {
    Eligible,
    Ineligible { days_remaining: i64 },
}

impl Eligibility {
    /// Compute eligibility from the most recent donation date, if any.
    pub fn from_last_donation(last: Option<NaiveDate>, today: NaiveDate) -> Self {
        let Some(last) = last else {
            return Eligibility::Eligible;
        };
        let elapsed = (today - last).num_days();
        if elapsed < DONATION_COOLDOWN_DAYS {
            Eligibility::Ineligible {
                days_remaining: DONATION_COOLDOWN_DAYS - elapsed,
            }
        } else {
            Eligibility::Eligible
        }
    }

    pub fn is_eligible(&self) -> bool {
        matches!(self, Eligibility::Eligible)
    }

    pub fn headline(&self) -> &'static str {
        match self {
            Eligibility::Eligible => "Eligible to Donate",
            Eligibility::Ineligible { .. } => "Not Yet Eligible",
        }
    }

    pub fn message(&self) -> String {
        match self {
            Eligibility::Eligible => "You are eligible to donate".to_string(),
            Eligibility::Ineligible { days_remaining } => {
                format!("You can donate again in {days_remaining} days")
            }
        }
    }

    /// CSS modifier for the status card.
    pub fn class(&self) -> &'static str {
        match self {
            Eligibility::Eligible => "eligible",
            Eligibility::Ineligible { .. } => "ineligible",
        }
    }
}

/// Today's date in the user's local timezone.
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
    }

    #[test]
    fn test_55_days_leaves_one_day() {
        let last = today() - Duration::days(55);
        let e = Eligibility::from_last_donation(Some(last), today());
        assert_eq!(e, Eligibility::Ineligible { days_remaining: 1 });
        assert_eq!(e.message(), "You can donate again in 1 days");
        assert!(!e.is_eligible());
    }

    #[test]
    fn test_56_days_is_eligible() {
        let last = today() - Duration::days(56);
        let e = Eligibility::from_last_donation(Some(last), today());
        assert_eq!(e, Eligibility::Eligible);
        assert_eq!(e.message(), "You are eligible to donate");
    }

    #[test]
    fn test_no_history_is_eligible() {
        assert!(Eligibility::from_last_donation(None, today()).is_eligible());
    }

    #[test]
    fn test_same_day_waits_full_cooldown() {
        let e = Eligibility::from_last_donation(Some(today()), today());
        assert_eq!(e, Eligibility::Ineligible { days_remaining: 56 });
        assert_eq!(e.headline(), "Not Yet Eligible");
        assert_eq!(e.class(), "ineligible");
    }
}
