use std::io::{self, Write};

/// Short audible cue for toggles. Rings the terminal bell.
pub struct Chime {
    enabled: bool,
    played: u32,
}

impl Chime {
    pub fn new(enabled: bool) -> Self {
        Self { enabled, played: 0 }
    }

    pub fn play(&mut self) {
        self.played += 1;
        if !self.enabled {
            return;
        }
        log::debug!("chime #{}", self.played);
        let mut out = io::stdout();
        if let Err(err) = out.write_all(b"\x07").and_then(|_| out.flush()) {
            log::debug!("chime failed: {}", err);
        }
    }

    /// Times `play` was asked for, muted or not.
    #[cfg(test)]
    pub fn played(&self) -> u32 {
        self.played
    }
}
