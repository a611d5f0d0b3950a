pub mod date_form;
pub mod header;
pub mod help;
pub mod reminder_list;
pub mod status_bar;

pub use date_form::DateForm;
pub use header::Header;
pub use help::Help;
pub use reminder_list::ReminderList;
pub use status_bar::StatusBar;
