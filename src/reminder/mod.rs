pub mod defaults;
pub mod record;
pub mod recurrence;
pub mod upcoming;

pub use defaults::default_reminders;
pub use record::ReminderRecord;
pub use upcoming::{enabled_ids, upcoming, Upcoming};
