use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::recurrence::next_occurrence;

/// One recurring date the user wants to be reminded of.
///
/// Custom-date records use `user_date` as-is. The others recur yearly on the
/// month/day of `default_date`; its year is never meaningful.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReminderRecord {
    id: Uuid,
    pub title: String,
    pub icon: String,
    pub is_custom_date: bool,
    pub default_date: Option<NaiveDate>,
    pub user_date: NaiveDate,
    pub is_enabled: bool,
}

impl ReminderRecord {
    /// A record that recurs on the month/day of `anchor`.
    pub fn anchored(title: &str, icon: &str, anchor: NaiveDate, today: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.to_string(),
            icon: icon.to_string(),
            is_custom_date: false,
            default_date: Some(anchor),
            user_date: today,
            is_enabled: true,
        }
    }

    /// A record whose date the user picks. Starts out on `today`.
    pub fn custom(title: &str, icon: &str, today: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.to_string(),
            icon: icon.to_string(),
            is_custom_date: true,
            default_date: None,
            user_date: today,
            is_enabled: true,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// The date that drives sorting and the notification trigger.
    pub fn effective_date(&self, today: NaiveDate) -> NaiveDate {
        if self.is_custom_date {
            self.user_date
        } else {
            next_occurrence(self.trigger_date(), today)
        }
    }

    /// Date whose month/day the yearly notification fires on.
    pub fn trigger_date(&self) -> NaiveDate {
        if self.is_custom_date {
            self.user_date
        } else {
            self.default_date.unwrap_or(self.user_date)
        }
    }

    /// Only enabled custom-date records accept a new date.
    pub fn accepts_date_edit(&self) -> bool {
        self.is_enabled && self.is_custom_date
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn custom_record_uses_user_date_verbatim() {
        let mut record = ReminderRecord::custom("Our Anniversary", "heart.circle.fill", date(2025, 1, 1));
        record.user_date = date(2024, 6, 12);

        assert_eq!(record.effective_date(date(2025, 10, 10)), date(2024, 6, 12));
    }

    #[test]
    fn anchored_record_rolls_forward() {
        let record = ReminderRecord::anchored("Valentine's Day", "heart.fill", date(2026, 2, 14), date(2025, 1, 1));

        assert_eq!(record.effective_date(date(2026, 3, 1)), date(2027, 2, 14));
        assert_eq!(record.effective_date(date(2026, 2, 14)), date(2026, 2, 14));
    }

    #[test]
    fn missing_anchor_falls_back_to_user_date() {
        let mut record = ReminderRecord::anchored("Couples Day", "heart.circle", date(2025, 8, 18), date(2025, 5, 5));
        record.default_date = None;

        assert_eq!(record.effective_date(date(2025, 6, 1)), date(2026, 5, 5));
    }

    #[test]
    fn serializes_with_camel_case_fields() {
        let record = ReminderRecord::custom("Their Birthday", "gift.fill", date(2025, 8, 1));
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["isCustomDate"], true);
        assert_eq!(json["userDate"], "2025-08-01");
        assert!(json["defaultDate"].is_null());
        assert_eq!(json["isEnabled"], true);
        assert_eq!(json["id"], record.id().to_string());
    }

    #[test]
    fn date_edit_requires_enabled_custom_record() {
        let mut custom = ReminderRecord::custom("Their Birthday", "gift.fill", date(2025, 8, 1));
        let anchored = ReminderRecord::anchored("Valentine's Day", "heart.fill", date(2026, 2, 14), date(2025, 8, 1));

        assert!(custom.accepts_date_edit());
        assert!(!anchored.accepts_date_edit());
        custom.is_enabled = false;
        assert!(!custom.accepts_date_edit());
    }
}
