pub mod error;
pub mod slot;

use std::path::PathBuf;

use chrono::NaiveDate;

use crate::reminder::{default_reminders, ReminderRecord};

pub use error::{StoreError, StoreResult};
pub use slot::SlotStore;

/// Slot holding the serialized reminder list.
pub const REMINDERS_SLOT: &str = "reminderOptionsData";

/// Saves and restores the whole reminder list as one JSON blob.
pub struct ReminderStore {
    slots: SlotStore,
}

impl ReminderStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            slots: SlotStore::new(dir),
        }
    }

    /// Overwrites the slot with the full list.
    pub fn save(&self, records: &[ReminderRecord]) -> StoreResult<()> {
        let bytes = serde_json::to_vec_pretty(records).map_err(StoreError::Encode)?;
        self.slots.write(REMINDERS_SLOT, &bytes)?;
        log::debug!("saved {} reminders", records.len());
        Ok(())
    }

    /// Restores the saved list, or the defaults when there is nothing usable.
    ///
    /// The flag is true only when the records came out of the slot.
    pub fn load(&self, today: NaiveDate) -> (Vec<ReminderRecord>, bool) {
        match self.try_load() {
            Ok(Some(records)) => {
                log::info!("restored {} reminders", records.len());
                (records, true)
            }
            Ok(None) => {
                log::info!("no saved reminders, seeding defaults");
                (default_reminders(today), false)
            }
            Err(err) => {
                log::warn!("discarding saved reminders: {}", err);
                (default_reminders(today), false)
            }
        }
    }

    fn try_load(&self) -> StoreResult<Option<Vec<ReminderRecord>>> {
        let Some(bytes) = self.slots.read(REMINDERS_SLOT)? else {
            return Ok(None);
        };
        if bytes.is_empty() {
            return Ok(None);
        }
        let records = serde_json::from_slice(&bytes).map_err(StoreError::Decode)?;
        Ok(Some(records))
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 10, 10).unwrap()
    }

    fn titles(records: &[ReminderRecord]) -> Vec<String> {
        records.iter().map(|r| r.title.clone()).collect()
    }

    #[test]
    fn round_trip_preserves_records() {
        let dir = tempfile::tempdir().unwrap();
        let store = ReminderStore::new(dir.path());

        let mut records = default_reminders(today());
        records[1].user_date = NaiveDate::from_ymd_opt(2019, 6, 12).unwrap();
        records[4].is_enabled = false;

        store.save(&records).unwrap();
        assert_eq!(store.load(today()), (records, true));
    }

    #[test]
    fn missing_slot_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = ReminderStore::new(dir.path().join("not-created-yet"));
        let (loaded, restored) = store.load(today());
        assert!(!restored);
        assert_eq!(titles(&loaded), titles(&default_reminders(today())));
    }

    #[test]
    fn empty_slot_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = ReminderStore::new(dir.path());
        store.slots.write(REMINDERS_SLOT, b"").unwrap();

        let (loaded, restored) = store.load(today());
        assert_eq!(loaded.len(), 6);
        assert!(!restored);
    }

    #[test]
    fn corrupt_slot_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = ReminderStore::new(dir.path());
        store.slots.write(REMINDERS_SLOT, b"{\"not\": \"a list\"").unwrap();

        let (loaded, restored) = store.load(today());
        assert!(!restored);
        assert_eq!(titles(&loaded), titles(&default_reminders(today())));
    }

    #[test]
    fn save_overwrites_previous_contents() {
        let dir = tempfile::tempdir().unwrap();
        let store = ReminderStore::new(dir.path());

        let records = default_reminders(today());
        store.save(&records).unwrap();
        store.save(&records[..2]).unwrap();

        assert_eq!(store.load(today()), (records[..2].to_vec(), true));
        let raw = fs::read_to_string(dir.path().join("reminderOptionsData.json")).unwrap();
        assert!(raw.contains("\"isCustomDate\""));
    }
}
