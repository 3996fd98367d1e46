// src/utils/logger.rs

use log::{Level, LevelFilter, Metadata, Record, SetLoggerError};
use std::io::Write;

static LOGGER: ConsoleLogger = ConsoleLogger;

struct ConsoleLogger;

/// Installs the stderr logger. Unknown level names fall back to `info`.
pub fn init(level: &str) -> Result<(), SetLoggerError> {
  let filter = parse_level(level);
  log::set_logger(&LOGGER).map(|()| log::set_max_level(filter))
}

pub fn parse_level(level: &str) -> LevelFilter {
  level.trim().parse().unwrap_or(LevelFilter::Info)
}

fn icon(level: Level) -> &'static str {
  match level {
    Level::Error => "🔴",
    Level::Warn => "🟠",
    Level::Info => "🔵",
    Level::Debug => "⚪",
    Level::Trace => "▫️",
  }
}

impl log::Log for ConsoleLogger {
  fn enabled(&self, metadata: &Metadata) -> bool {
    metadata.level() <= log::max_level()
  }

  fn log(&self, record: &Record) {
    if self.enabled(record.metadata()) {
      // Format: "🔴  File not found"
      let _ = writeln!(std::io::stderr().lock(), "{}  {}", icon(record.level()), record.args());
    }
  }

  fn flush(&self) {
    let _ = std::io::stderr().flush();
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_parse_level() {
    assert_eq!(parse_level("debug"), LevelFilter::Debug);
    assert_eq!(parse_level(" WARN "), LevelFilter::Warn);
    assert_eq!(parse_level("off"), LevelFilter::Off);
    assert_eq!(parse_level("loud"), LevelFilter::Info);
  }

  #[test]
  fn test_icons_distinct() {
    let icons = [Level::Error, Level::Warn, Level::Info, Level::Debug].map(icon);
    for (i, a) in icons.iter().enumerate() {
      for b in &icons[i + 1..] {
        assert_ne!(a, b);
      }
    }
  }
}
