use std::fs::{self, OpenOptions};
use std::path::Path;

use env_logger::{Builder, Env, Target};

pub const LOG_FILE: &str = "romindr.log";

/// Sends log output to a file in `dir`; the terminal belongs to the UI.
///
/// `RUST_LOG` wins over `default_level`. Without a writable file nothing is logged.
pub fn init(dir: &Path, default_level: &str) {
    let file = fs::create_dir_all(dir).and_then(|_| {
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(dir.join(LOG_FILE))
    });
    let Ok(file) = file else {
        return;
    };

    let _ = Builder::from_env(Env::default().default_filter_or(default_level))
        .target(Target::Pipe(Box::new(file)))
        .try_init();
}
