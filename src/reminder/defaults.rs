use chrono::NaiveDate;

use super::record::ReminderRecord;

const ANCHORED: [(&str, &str, u32, u32); 4] = [
    ("Valentine's Day", "heart.fill", 2, 14),
    ("National Boyfriend Day", "heart.fill", 10, 3),
    ("National Girlfriend Day", "heart.fill", 8, 1),
    ("National Couples Day", "heart.circle", 8, 18),
];

/// The six reminders a fresh install starts with, in canonical order.
pub fn default_reminders(today: NaiveDate) -> Vec<ReminderRecord> {
    let anchored = |index: usize| {
        let (title, icon, month, day) = ANCHORED[index];
        let anchor = NaiveDate::from_ymd_opt(2025, month, day).unwrap_or(today);
        ReminderRecord::anchored(title, icon, anchor, today)
    };

    vec![
        anchored(0),
        ReminderRecord::custom("Our Anniversary", "heart.circle.fill", today),
        ReminderRecord::custom("Their Birthday", "gift.fill", today),
        anchored(1),
        anchored(2),
        anchored(3),
    ]
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn six_enabled_defaults_in_order() {
        let today = NaiveDate::from_ymd_opt(2025, 8, 1).unwrap();
        let defaults = default_reminders(today);

        let titles: Vec<&str> = defaults.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(
            titles,
            [
                "Valentine's Day",
                "Our Anniversary",
                "Their Birthday",
                "National Boyfriend Day",
                "National Girlfriend Day",
                "National Couples Day",
            ]
        );
        assert!(defaults.iter().all(|r| r.is_enabled));

        let custom: Vec<bool> = defaults.iter().map(|r| r.is_custom_date).collect();
        assert_eq!(custom, [false, true, true, false, false, false]);
        assert!(defaults.iter().filter(|r| r.is_custom_date).all(|r| r.user_date == today));
    }

    #[test]
    fn ids_are_unique() {
        let today = NaiveDate::from_ymd_opt(2025, 8, 1).unwrap();
        let ids: HashSet<_> = default_reminders(today).iter().map(|r| r.id()).collect();
        assert_eq!(ids.len(), 6);
    }
}
