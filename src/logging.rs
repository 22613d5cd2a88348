//! Minimal stderr backend for the `log` facade, used by the command line tool.
//!
//! The library itself only emits records; embedding applications install
//! whatever logger they like.

use log::{LevelFilter, Log, Metadata, Record};
use std::io::Write;
use std::str::FromStr;

/// Environment variable overriding the log level
pub const LOG_ENV_VAR: &str = "EMOJI_TRANSCODER_LOG";

#[derive(Debug, Clone, Copy)]
pub struct StderrLogger {
    level: LevelFilter,
}

impl StderrLogger {
    pub fn new(level: LevelFilter) -> Self {
        Self { level }
    }
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let mut stderr = std::io::stderr().lock();
        let _ = writeln!(
            stderr,
            "[{}] {}: {}",
            record.level(),
            record.module_path().unwrap_or_default(),
            record.args()
        );
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

/// Map `-v`/`-q` counts to a level. Warnings are shown by default.
pub fn level_from_verbosity(verbose: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::Off;
    }
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Level from [`LOG_ENV_VAR`], if set to a valid level name
pub fn level_from_env() -> Option<LevelFilter> {
    let value = std::env::var(LOG_ENV_VAR).ok()?;
    LevelFilter::from_str(value.trim()).ok()
}

/// Install the stderr logger. Only the first call has any effect.
pub fn init(level: LevelFilter) {
    static LOGGER: once_cell::sync::OnceCell<StderrLogger> = once_cell::sync::OnceCell::new();

    let logger = LOGGER.get_or_init(|| StderrLogger::new(level));
    if log::set_logger(logger).is_ok() {
        log::set_max_level(logger.level);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_from_verbosity() {
        assert_eq!(level_from_verbosity(0, false), LevelFilter::Warn);
        assert_eq!(level_from_verbosity(2, false), LevelFilter::Debug);
        assert_eq!(level_from_verbosity(9, false), LevelFilter::Trace);
        assert_eq!(level_from_verbosity(3, true), LevelFilter::Off);
    }

    #[test]
    fn test_logger_enabled() {
        let logger = StderrLogger::new(LevelFilter::Warn);
        let warn = Metadata::builder().level(log::Level::Warn).build();
        let debug = Metadata::builder().level(log::Level::Debug).build();
        assert!(logger.enabled(&warn));
        assert!(!logger.enabled(&debug));
    }
}
