#![cfg(feature = "std")]

use log::{LevelFilter, Metadata, Record};
use std::env;

/// Environment variable read by `init_logging`.
pub const LOG_ENV: &str = "BATTLESHIP_LOG";

struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{} [{}] {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

/// Parse a level name such as `debug`; unknown names yield `None`.
pub fn parse_level(name: &str) -> Option<LevelFilter> {
    name.trim().parse().ok()
}

/// Effective level: an explicit `level` wins over the `env` value, which
/// wins over the `info` default. Unparsable `env` values are ignored.
pub fn resolve_level(level: Option<LevelFilter>, env: Option<&str>) -> LevelFilter {
    level
        .or_else(|| env.and_then(parse_level))
        .unwrap_or(LevelFilter::Info)
}

/// Install the stderr logger at the level chosen by `resolve_level` from
/// `level` and `BATTLESHIP_LOG`. Repeated calls keep the first logger.
pub fn init_logging(level: Option<LevelFilter>) {
    let env = env::var(LOG_ENV).ok();
    let level = resolve_level(level, env.as_deref());
    let _ = log::set_logger(&LOGGER).map(|()| log::set_max_level(level));
}
