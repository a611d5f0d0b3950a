use chrono::NaiveDate;
use uuid::Uuid;

use super::record::ReminderRecord;

/// A record paired with the date it is displayed and sorted under.
#[derive(Debug, Clone, Copy)]
pub struct Upcoming<'a> {
    pub record: &'a ReminderRecord,
    pub date: NaiveDate,
}

impl Upcoming<'_> {
    /// Negative for custom dates already in the past.
    pub fn days_until(&self, today: NaiveDate) -> i64 {
        self.date.signed_duration_since(today).num_days()
    }
}

/// Display order: soonest first, ties keep canonical order.
pub fn upcoming(records: &[ReminderRecord], today: NaiveDate) -> Vec<Upcoming<'_>> {
    let mut entries: Vec<Upcoming> = records
        .iter()
        .map(|record| Upcoming {
            record,
            date: record.effective_date(today),
        })
        .collect();
    entries.sort_by_key(|e| e.date);
    entries
}

/// Ids that belong in the notification registry.
pub fn enabled_ids(records: &[ReminderRecord]) -> Vec<Uuid> {
    records
        .iter()
        .filter(|r| r.is_enabled)
        .map(|r| r.id())
        .collect()
}
