use std::time::Instant;

use chrono::{Local, NaiveDate};
use uuid::Uuid;

use crate::chime::Chime;
use crate::components::date_form::DateFormState;
use crate::config::Config;
use crate::effects::Effects;
use crate::notify::{self, LocalNotifier, Notifier};
use crate::reminder::{enabled_ids, upcoming, ReminderRecord, Upcoming};
use crate::storage::ReminderStore;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputMode {
    Normal,
    DateForm,
}

/// Everything the screen shows, plus the side-effect ports behind it.
///
/// `records` is the canonical list in default order. Rendering goes through
/// [`App::upcoming`], and `selected` indexes that sorted view.
pub struct App {
    pub running: bool,
    pub input_mode: InputMode,
    pub today: NaiveDate,
    pub selected: usize,
    pub show_help: bool,
    pub status_message: Option<String>,
    pub form_state: Option<DateFormState>,
    pub effects: Effects,
    records: Vec<ReminderRecord>,
    has_user_interacted: bool,
    store: ReminderStore,
    notifier: Box<dyn Notifier>,
    chime: Chime,
}

impl App {
    pub fn new(config: &Config) -> Self {
        let dir = config.data_dir();
        let store = ReminderStore::new(&dir);
        let notifier = LocalNotifier::new(&dir, config.notifications);
        log::debug!("{} notification(s) on file", notifier.len());
        Self::with_parts(
            store,
            Box::new(notifier),
            Chime::new(config.sound),
            Local::now().date_naive(),
        )
    }

    pub fn with_parts(
        store: ReminderStore,
        mut notifier: Box<dyn Notifier>,
        chime: Chime,
        today: NaiveDate,
    ) -> Self {
        let (records, restored) = store.load(today);
        log::info!(
            "{} of {} reminders enabled",
            enabled_ids(&records).len(),
            records.len()
        );
        notifier.request_authorization();
        // Seeded defaults get registered the first time the user touches them.
        if restored {
            notify::sync_all(notifier.as_mut(), &records);
        } else {
            notify::forget_others(notifier.as_mut(), &records);
        }

        let mut app = Self {
            running: true,
            input_mode: InputMode::Normal,
            today,
            selected: 0,
            show_help: false,
            status_message: None,
            form_state: None,
            effects: Effects::default(),
            records,
            has_user_interacted: false,
            store,
            notifier,
            chime,
        };
        app.deliver_due();
        app
    }

    /// Records in display order for the current day.
    pub fn upcoming(&self) -> Vec<Upcoming<'_>> {
        upcoming(&self.records, self.today)
    }

    pub fn selected_id(&self) -> Option<Uuid> {
        self.upcoming().get(self.selected).map(|u| u.record.id())
    }

    pub fn select_next(&mut self) {
        let last = self.records.len().saturating_sub(1);
        self.selected = (self.selected + 1).min(last);
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Advances the clock. A new day re-sorts and delivers what is due.
    pub fn tick(&mut self, today: NaiveDate, now: Instant) {
        self.effects.tick(now);
        if today != self.today {
            let id = self.selected_id();
            self.today = today;
            if let Some(id) = id {
                self.follow(id);
            }
            self.deliver_due();
        }
    }

    pub fn toggle_selected(&mut self, now: Instant) {
        if let Some(id) = self.selected_id() {
            self.toggle(id, now);
        }
    }

    /// Flips `is_enabled` on the record with `id`, then saves and reschedules.
    pub fn toggle(&mut self, id: Uuid, now: Instant) {
        let Some(record) = self.records.iter_mut().find(|r| r.id() == id) else {
            return;
        };
        record.is_enabled = !record.is_enabled;
        let enabled = record.is_enabled;

        // The first change after launch stays quiet.
        if self.has_user_interacted {
            self.chime.play();
        }
        self.has_user_interacted = true;

        self.effects.on_toggle(id, enabled, now);
        self.persist();
        self.reschedule(id);
    }

    /// Sets the date of an enabled custom-date record. Returns whether it took.
    pub fn set_user_date(&mut self, id: Uuid, date: NaiveDate) -> bool {
        let Some(record) = self.records.iter_mut().find(|r| r.id() == id) else {
            return false;
        };
        if !record.accepts_date_edit() {
            return false;
        }
        if record.user_date != date {
            record.user_date = date;
            self.persist();
            self.reschedule(id);
        }
        self.follow(id);
        true
    }

    pub fn open_date_form(&mut self) {
        let Some(id) = self.selected_id() else {
            return;
        };
        let Some(record) = self.records.iter().find(|r| r.id() == id) else {
            return;
        };
        if !record.accepts_date_edit() {
            self.status_message = Some(if record.is_custom_date {
                "Enable this reminder to pick a date".to_string()
            } else {
                format!("{} has a fixed date", record.title)
            });
            return;
        }
        self.form_state = Some(DateFormState::new(record));
        self.input_mode = InputMode::DateForm;
    }

    pub fn close_date_form(&mut self) {
        self.form_state = None;
        self.input_mode = InputMode::Normal;
    }

    pub fn submit_date_form(&mut self) {
        let Some(form) = self.form_state.as_ref() else {
            return;
        };
        let Some(date) = form.parsed_date() else {
            self.status_message = Some("Invalid date, use YYYY-MM-DD".to_string());
            return;
        };
        let (id, title) = (form.record_id, form.title.clone());
        self.close_date_form();
        if self.set_user_date(id, date) {
            self.status_message = Some(format!("{} set to {}", title, date.format("%B %-d, %Y")));
        }
    }

    pub fn form_input_char(&mut self, c: char) {
        if let Some(ref mut form) = self.form_state {
            form.push(c);
        }
    }

    pub fn form_backspace(&mut self) {
        if let Some(ref mut form) = self.form_state {
            form.pop();
        }
    }

    pub fn form_shift_days(&mut self, days: i64) {
        if let Some(ref mut form) = self.form_state {
            form.shift_days(days);
        }
    }

    pub fn form_shift_months(&mut self, months: i32) {
        if let Some(ref mut form) = self.form_state {
            form.shift_months(months);
        }
    }

    pub fn refresh_today(&mut self) {
        self.tick(Local::now().date_naive(), Instant::now());
        self.status_message = Some(format!("Today is {}", self.today.format("%B %-d, %Y")));
    }

    fn follow(&mut self, id: Uuid) {
        let pos = self.upcoming().iter().position(|u| u.record.id() == id);
        if let Some(pos) = pos {
            self.selected = pos;
        }
    }

    fn persist(&self) {
        if let Err(err) = self.store.save(&self.records) {
            log::warn!("failed to save reminders: {}", err);
        }
    }

    fn reschedule(&mut self, id: Uuid) {
        if let Some(record) = self.records.iter().find(|r| r.id() == id) {
            notify::schedule(self.notifier.as_mut(), record);
        }
    }

    fn deliver_due(&mut self) {
        let due = self.notifier.due_on(self.today);
        if due.is_empty() {
            return;
        }
        let bodies: Vec<String> = due.iter().map(|r| r.body.clone()).collect();
        log::info!("delivering {} notification(s)", due.len());
        self.status_message = Some(format!("{} {}", notify::NOTIFICATION_TITLE, bodies.join(" ")));
        self.chime.play();
    }
}
