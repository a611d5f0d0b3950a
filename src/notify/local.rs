use std::collections::BTreeMap;
use std::path::PathBuf;

use chrono::NaiveDate;
use uuid::Uuid;

use super::{NotificationRequest, Notifier};
use crate::storage::{SlotStore, StoreError, StoreResult};

const REGISTRY_SLOT: &str = "notifications";

/// Notification registry kept in the data directory.
///
/// Requests are delivered by the app itself: on launch it asks for the ones
/// due today.
pub struct LocalNotifier {
    slots: SlotStore,
    allowed: bool,
    authorized: bool,
    registry: BTreeMap<Uuid, NotificationRequest>,
}

impl LocalNotifier {
    /// `allowed` is the user's standing answer to the authorization prompt.
    pub fn new(dir: impl Into<PathBuf>, allowed: bool) -> Self {
        let slots = SlotStore::new(dir);
        let registry = match read_registry(&slots) {
            Ok(registry) => registry,
            Err(err) => {
                log::warn!("notification registry unreadable, starting empty: {}", err);
                BTreeMap::new()
            }
        };
        Self {
            slots,
            allowed,
            authorized: false,
            registry,
        }
    }

    pub fn len(&self) -> usize {
        self.registry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    fn persist(&self) {
        let requests: Vec<&NotificationRequest> = self.registry.values().collect();
        let result = serde_json::to_vec_pretty(&requests)
            .map_err(StoreError::Encode)
            .and_then(|bytes| self.slots.write(REGISTRY_SLOT, &bytes));
        if let Err(err) = result {
            log::warn!("failed to write notification registry: {}", err);
        }
    }
}

fn read_registry(slots: &SlotStore) -> StoreResult<BTreeMap<Uuid, NotificationRequest>> {
    let Some(bytes) = slots.read(REGISTRY_SLOT)? else {
        return Ok(BTreeMap::new());
    };
    let requests: Vec<NotificationRequest> =
        serde_json::from_slice(&bytes).map_err(StoreError::Decode)?;
    Ok(requests.into_iter().map(|r| (r.id, r)).collect())
}

impl Notifier for LocalNotifier {
    fn request_authorization(&mut self) -> bool {
        self.authorized = self.allowed;
        if !self.authorized {
            log::info!("notifications not authorized, registrations will be ignored");
        }
        self.authorized
    }

    fn register(&mut self, request: NotificationRequest) {
        if !self.authorized {
            log::debug!("skipping registration for {}", request.id);
            return;
        }
        if self.registry.get(&request.id) == Some(&request) {
            return;
        }
        log::info!(
            "registering {} for {:02}-{:02}",
            request.id,
            request.trigger.month,
            request.trigger.day
        );
        self.registry.insert(request.id, request);
        self.persist();
    }

    fn cancel(&mut self, id: Uuid) {
        if self.registry.remove(&id).is_some() {
            log::info!("cancelled {}", id);
            self.persist();
        }
    }

    fn retain(&mut self, ids: &[Uuid]) {
        let before = self.registry.len();
        self.registry.retain(|id, _| ids.contains(id));
        let dropped = before - self.registry.len();
        if dropped > 0 {
            log::info!("dropped {} stale registration(s)", dropped);
            self.persist();
        }
    }

    fn due_on(&self, date: NaiveDate) -> Vec<NotificationRequest> {
        if !self.authorized {
            return Vec::new();
        }
        self.registry
            .values()
            .filter(|r| r.trigger.fires_on(date))
            .cloned()
            .collect()
    }
}
