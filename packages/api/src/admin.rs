//! In-memory donor and recipient lists behind the admin panel.
//!
//! Both lists are seeded when the panel mounts and only ever change in local
//! state: blocking/unblocking flips an entry's status, removing filters it
//! out. Nothing is confirmed and nothing can be undone.

use store::{AdminEntry, BloodGroup, EntryStatus};
use tracing::debug;

/// Which of the two lists an operation targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntryKind {
    Donor,
    Recipient,
}

impl EntryKind {
    pub fn tab_label(&self) -> &'static str {
        match self {
            EntryKind::Donor => "Donor Reports",
            EntryKind::Recipient => "Recipient Reports",
        }
    }

    /// Header of the count column.
    pub fn count_label(&self) -> &'static str {
        match self {
            EntryKind::Donor => "Donations",
            EntryKind::Recipient => "Requests",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct AdminRoster {
    donors: Vec<AdminEntry>,
    recipients: Vec<AdminEntry>,
}

impl AdminRoster {
    pub fn new(donors: Vec<AdminEntry>, recipients: Vec<AdminEntry>) -> Self {
        Self { donors, recipients }
    }

    /// The fixed lists the panel starts from.
    pub fn seed() -> Self {
        Self::new(
            vec![
                entry(1, "Alice", "alice@example.com", BloodGroup::OPos, 5, EntryStatus::Active),
                entry(2, "Bob", "bob@example.com", BloodGroup::ANeg, 2, EntryStatus::Blocked),
            ],
            vec![
                entry(1, "Charlie", "charlie@example.com", BloodGroup::BPos, 3, EntryStatus::Active),
                entry(2, "Diana", "diana@example.com", BloodGroup::AbNeg, 1, EntryStatus::Active),
            ],
        )
    }

    pub fn entries(&self, kind: EntryKind) -> &[AdminEntry] {
        match kind {
            EntryKind::Donor => &self.donors,
            EntryKind::Recipient => &self.recipients,
        }
    }

    fn entries_mut(&mut self, kind: EntryKind) -> &mut Vec<AdminEntry> {
        match kind {
            EntryKind::Donor => &mut self.donors,
            EntryKind::Recipient => &mut self.recipients,
        }
    }

    /// Flip an entry between active and blocked. Returns the new status, or
    /// `None` when no entry has that id.
    pub fn toggle_status(&mut self, kind: EntryKind, id: u32) -> Option<EntryStatus> {
        let entry = self.entries_mut(kind).iter_mut().find(|e| e.id == id)?;
        entry.status = entry.status.toggled();
        debug!(?kind, id, status = entry.status.as_str(), "toggled entry status");
        Some(entry.status)
    }

    /// Remove the entry with `id`, keeping the order of the rest.
    pub fn remove(&mut self, kind: EntryKind, id: u32) -> Option<AdminEntry> {
        let entries = self.entries_mut(kind);
        let index = entries.iter().position(|e| e.id == id)?;
        let removed = entries.remove(index);
        debug!(?kind, id, "removed entry");
        Some(removed)
    }
}

fn entry(
    id: u32,
    name: &str,
    email: &str,
    blood_group: BloodGroup,
    count: u32,
    status: EntryStatus,
) -> AdminEntry {
    AdminEntry {
        id,
        name: name.to_string(),
        email: email.to_string(),
        blood_group,
        count,
        status,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(roster: &AdminRoster, kind: EntryKind) -> Vec<u32> {
        roster.entries(kind).iter().map(|e| e.id).collect()
    }

    #[test]
    fn test_seed() {
        let roster = AdminRoster::seed();
        let donors = roster.entries(EntryKind::Donor);
        assert_eq!(donors.len(), 2);
        assert_eq!(donors[1].name, "Bob");
        assert_eq!(donors[1].status, EntryStatus::Blocked);
        assert_eq!(roster.entries(EntryKind::Recipient)[1].blood_group, BloodGroup::AbNeg);
    }

    #[test]
    fn test_toggle_twice_restores_status() {
        let mut roster = AdminRoster::seed();
        assert_eq!(
            roster.toggle_status(EntryKind::Donor, 1),
            Some(EntryStatus::Blocked)
        );
        assert_eq!(
            roster.toggle_status(EntryKind::Donor, 1),
            Some(EntryStatus::Active)
        );
        assert_eq!(roster, AdminRoster::seed());
    }

    #[test]
    fn test_toggle_only_touches_target_list() {
        let mut roster = AdminRoster::seed();
        roster.toggle_status(EntryKind::Recipient, 2);
        assert_eq!(roster.entries(EntryKind::Donor), AdminRoster::seed().entries(EntryKind::Donor));
        assert_eq!(
            roster.entries(EntryKind::Recipient)[1].status,
            EntryStatus::Blocked
        );
    }

    #[test]
    fn test_toggle_unknown_id() {
        let mut roster = AdminRoster::seed();
        assert_eq!(roster.toggle_status(EntryKind::Donor, 99), None);
        assert_eq!(roster, AdminRoster::seed());
    }

    #[test]
    fn test_remove_keeps_order_of_others() {
        let mut roster = AdminRoster::new(
            (1..=4)
                .map(|id| entry(id, "d", "d@example.com", BloodGroup::OPos, 0, EntryStatus::Active))
                .collect(),
            Vec::new(),
        );

        let removed = roster.remove(EntryKind::Donor, 2).unwrap();
        assert_eq!(removed.id, 2);
        assert_eq!(ids(&roster, EntryKind::Donor), vec![1, 3, 4]);
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let mut roster = AdminRoster::seed();
        assert!(roster.remove(EntryKind::Recipient, 7).is_none());
        assert_eq!(ids(&roster, EntryKind::Recipient), vec![1, 2]);
    }
}
