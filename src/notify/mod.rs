pub mod local;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::reminder::{recurrence, ReminderRecord};

pub use local::LocalNotifier;

pub const NOTIFICATION_TITLE: &str = "Romindr \u{1F497}";
pub const NOTIFICATION_SOUND: &str = "chime.wav";

/// Calendar trigger that repeats every year on `month`/`day`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearlyTrigger {
    pub month: u32,
    pub day: u32,
}

impl YearlyTrigger {
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            month: date.month(),
            day: date.day(),
        }
    }

    pub fn fires_on(&self, date: NaiveDate) -> bool {
        recurrence::fires_on(self.month, self.day, date)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationRequest {
    pub id: Uuid,
    pub title: String,
    pub body: String,
    pub trigger: YearlyTrigger,
    pub sound: String,
}

impl NotificationRequest {
    pub fn for_record(record: &ReminderRecord) -> Self {
        Self {
            id: record.id(),
            title: NOTIFICATION_TITLE.to_string(),
            body: format!("Today is {}!", record.title),
            trigger: YearlyTrigger::from_date(record.trigger_date()),
            sound: NOTIFICATION_SOUND.to_string(),
        }
    }
}

/// Boundary to whatever delivers notifications on the day.
///
/// Every call is best effort: backends log their failures and carry on.
pub trait Notifier {
    /// Asks for permission to deliver. Called once per launch.
    fn request_authorization(&mut self) -> bool;

    /// Registers `request`, replacing anything already registered under its id.
    fn register(&mut self, request: NotificationRequest);

    fn cancel(&mut self, id: Uuid);

    /// Cancels every registration whose id is not in `ids`.
    fn retain(&mut self, ids: &[Uuid]);

    /// Registered requests whose trigger fires on `date`.
    fn due_on(&self, date: NaiveDate) -> Vec<NotificationRequest>;
}

/// Registers an enabled record, cancels a disabled one.
pub fn schedule(notifier: &mut dyn Notifier, record: &ReminderRecord) {
    if record.is_enabled {
        notifier.register(NotificationRequest::for_record(record));
    } else {
        notifier.cancel(record.id());
    }
}

/// Brings the registry in line with `records`, dropping ids it no longer knows.
pub fn sync_all(notifier: &mut dyn Notifier, records: &[ReminderRecord]) {
    forget_others(notifier, records);
    for record in records {
        schedule(notifier, record);
    }
}

/// Drops registrations for ids that are not in `records`.
pub fn forget_others(notifier: &mut dyn Notifier, records: &[ReminderRecord]) {
    let ids: Vec<Uuid> = records.iter().map(|r| r.id()).collect();
    notifier.retain(&ids);
}
