//! Stderr logger for regression runs
//!
//! Prints `[elapsed LEVEL] message` to stderr. The level comes from the
//! `HISTTHRESH_LOG` environment variable (`error`, `warn`, `info`,
//! `debug`, `trace`, `off`), defaulting to `warn`.

use std::io::Write;
use std::sync::OnceLock;
use std::time::Instant;

use log::{LevelFilter, Log, Metadata, Record};

struct StderrLogger {
    level: LevelFilter,
    started: Instant,
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let elapsed = self.started.elapsed().as_secs_f64();
        let mut stderr = std::io::stderr();
        let _ = writeln!(
            stderr,
            "[{:7.3}s {:>5}] {}: {}",
            elapsed,
            record.level(),
            record.target(),
            record.args()
        );
    }

    fn flush(&self) {}
}

static LOGGER: OnceLock<StderrLogger> = OnceLock::new();

/// Install the stderr logger with the provided level filter
///
/// Calling this more than once is a no-op after the first successful
/// initialization.
pub fn init_logger(level: LevelFilter) -> Result<(), log::SetLoggerError> {
    if LOGGER.get().is_none() {
        let logger = LOGGER.get_or_init(|| StderrLogger {
            level,
            started: Instant::now(),
        });
        log::set_logger(logger)?;
        log::set_max_level(level);
    }
    Ok(())
}

/// Parse the level from `HISTTHRESH_LOG`
pub fn level_from_env() -> LevelFilter {
    std::env::var("HISTTHRESH_LOG")
        .ok()
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(LevelFilter::Warn)
}

/// Install the stderr logger at the `HISTTHRESH_LOG` level
pub fn init_logger_from_env() -> Result<(), log::SetLoggerError> {
    init_logger(level_from_env())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        assert!(init_logger(LevelFilter::Warn).is_ok());
        assert!(init_logger(LevelFilter::Debug).is_ok());
        log::warn!("logger installed");
    }
}
