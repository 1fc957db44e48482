#![cfg(feature = "std")]

use std::env;
use log::{LevelFilter, Log, Metadata, Record};

/// Environment variable holding the log level (`off`, `error` .. `trace`).
pub const LOG_ENV: &str = "SEABATTLE_LOG";

struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        // module path without the crate name keeps lines short in the terminal
        let target = record
            .target()
            .strip_prefix("seabattle::")
            .unwrap_or(record.target());
        eprintln!("{:<5} [{}] {}", record.level(), target, record.args());
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

/// Install the stderr logger at the level named by `SEABATTLE_LOG`, `warn`
/// if unset or unparsable. Returns `false` if a logger was already set.
pub fn init_logging() -> bool {
    let level = env::var(LOG_ENV)
        .ok()
        .and_then(|lvl| lvl.trim().parse::<LevelFilter>().ok())
        .unwrap_or(LevelFilter::Warn);
    match log::set_logger(&LOGGER) {
        Ok(()) => {
            log::set_max_level(level);
            true
        }
        Err(_) => false,
    }
}
