use std::collections::HashMap;
use std::time::{Duration, Instant};

use uuid::Uuid;

pub const FLASH_DURATION: Duration = Duration::from_millis(300);
pub const CONFETTI_DURATION: Duration = Duration::from_millis(1500);

/// Short-lived visual flags set by toggles and cleared on later ticks.
#[derive(Debug, Default)]
pub struct Effects {
    bounce_until: Option<Instant>,
    flash: HashMap<Uuid, Instant>,
    confetti: HashMap<Uuid, Instant>,
}

impl Effects {
    pub fn on_toggle(&mut self, id: Uuid, enabled: bool, now: Instant) {
        self.bounce_until = Some(now + FLASH_DURATION);
        self.flash.insert(id, now + FLASH_DURATION);
        if enabled {
            self.confetti.insert(id, now + CONFETTI_DURATION);
        }
    }

    /// Drops every effect whose deadline has passed.
    pub fn tick(&mut self, now: Instant) {
        if self.bounce_until.is_some_and(|until| until <= now) {
            self.bounce_until = None;
        }
        self.flash.retain(|_, until| *until > now);
        self.confetti.retain(|_, until| *until > now);
    }

    pub fn is_bouncing(&self) -> bool {
        self.bounce_until.is_some()
    }

    pub fn is_flashing(&self, id: Uuid) -> bool {
        self.flash.contains_key(&id)
    }

    pub fn has_confetti(&self, id: Uuid) -> bool {
        self.confetti.contains_key(&id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flash_clears_after_300ms() {
        let mut effects = Effects::default();
        let id = Uuid::new_v4();
        let start = Instant::now();

        effects.on_toggle(id, false, start);
        effects.tick(start + Duration::from_millis(299));
        assert!(effects.is_flashing(id));
        assert!(effects.is_bouncing());

        effects.tick(start + FLASH_DURATION);
        assert!(!effects.is_flashing(id));
        assert!(!effects.is_bouncing());
    }

    #[test]
    fn confetti_only_when_enabling() {
        let mut effects = Effects::default();
        let (on, off) = (Uuid::new_v4(), Uuid::new_v4());
        let start = Instant::now();

        effects.on_toggle(on, true, start);
        effects.on_toggle(off, false, start);
        assert!(effects.has_confetti(on));
        assert!(!effects.has_confetti(off));

        effects.tick(start + Duration::from_millis(1000));
        assert!(effects.has_confetti(on));
        assert!(!effects.is_flashing(on));

        effects.tick(start + CONFETTI_DURATION);
        assert!(!effects.has_confetti(on));
    }

    #[test]
    fn retoggle_extends_deadline() {
        let mut effects = Effects::default();
        let id = Uuid::new_v4();
        let start = Instant::now();

        effects.on_toggle(id, true, start);
        effects.on_toggle(id, true, start + Duration::from_millis(1000));
        effects.tick(start + Duration::from_millis(2000));
        assert!(effects.has_confetti(id));
    }
}
