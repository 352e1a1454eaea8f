//! Rolling Logger
//!
//! A `log` backend that keeps the most recent lines in a circular buffer
//! and forwards every line to the platform console (browser devtools on
//! wasm32, stderr elsewhere).

use std::collections::VecDeque;
use std::fmt;
use std::sync::{Mutex, OnceLock};

use chrono::{DateTime, Utc};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Default number of lines retained in memory
pub const DEFAULT_CAPACITY: usize = 500;

static LOGGER: OnceLock<RollingLogger> = OnceLock::new();

/// A single captured log line
#[derive(Debug, Clone, PartialEq)]
pub struct LogLine {
    pub timestamp: DateTime<Utc>,
    pub level: Level,
    pub target: String,
    pub message: String,
}

impl fmt::Display for LogLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {:<5} {}: {}",
            self.timestamp.format("%H:%M:%S%.3f"),
            self.level,
            self.target,
            self.message
        )
    }
}

/// Logger with a bounded in-memory history
pub struct RollingLogger {
    level: LevelFilter,
    capacity: usize,
    lines: Mutex<VecDeque<LogLine>>,
    echo: bool,
}

impl RollingLogger {
    pub fn new(level: LevelFilter, capacity: usize) -> Self {
        Self {
            level,
            capacity: capacity.max(1),
            lines: Mutex::new(VecDeque::with_capacity(capacity.max(1))),
            echo: true,
        }
    }

    /// Same logger without console output (used by tests)
    pub fn silent(level: LevelFilter, capacity: usize) -> Self {
        Self {
            echo: false,
            ..Self::new(level, capacity)
        }
    }

    /// Snapshot of the retained lines, oldest first
    pub fn recent(&self) -> Vec<LogLine> {
        match self.lines.lock() {
            Ok(lines) => lines.iter().cloned().collect(),
            Err(poisoned) => poisoned.into_inner().iter().cloned().collect(),
        }
    }

    /// The last `limit` retained lines, oldest first
    pub fn tail(&self, limit: usize) -> Vec<LogLine> {
        let lines = match self.lines.lock() {
            Ok(lines) => lines,
            Err(poisoned) => poisoned.into_inner(),
        };
        let skip = lines.len().saturating_sub(limit);
        lines.iter().skip(skip).cloned().collect()
    }

    fn push(&self, line: LogLine) {
        let mut lines = match self.lines.lock() {
            Ok(lines) => lines,
            Err(poisoned) => poisoned.into_inner(),
        };
        if lines.len() == self.capacity {
            lines.pop_front();
        }
        lines.push_back(line);
    }
}

impl Log for RollingLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = LogLine {
            timestamp: Utc::now(),
            level: record.level(),
            target: record.target().to_string(),
            message: record.args().to_string(),
        };
        if self.echo {
            emit(&line);
        }
        self.push(line);
    }

    fn flush(&self) {}
}

#[cfg(target_arch = "wasm32")]
fn emit(line: &LogLine) {
    let text = line.to_string().into();
    match line.level {
        Level::Error => web_sys::console::error_1(&text),
        Level::Warn => web_sys::console::warn_1(&text),
        Level::Info => web_sys::console::info_1(&text),
        Level::Debug | Level::Trace => web_sys::console::debug_1(&text),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(line: &LogLine) {
    eprintln!("{}", line);
}

/// Install the global logger. Call once at startup.
pub fn init(level: LevelFilter, capacity: usize) -> Result<(), SetLoggerError> {
    let logger = LOGGER.get_or_init(|| RollingLogger::new(level, capacity));
    log::set_logger(logger)?;
    log::set_max_level(level);
    Ok(())
}

/// The last `limit` lines kept by the installed logger; empty before `init`
pub fn recent_lines(limit: usize) -> Vec<LogLine> {
    LOGGER.get().map(|logger| logger.tail(limit)).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(logger: &RollingLogger, level: Level, message: &str) {
        logger.log(
            &Record::builder()
                .level(level)
                .target("test")
                .args(format_args!("{}", message))
                .build(),
        );
    }

    #[test]
    fn test_drops_oldest_past_capacity() {
        let logger = RollingLogger::silent(LevelFilter::Trace, 3);
        for i in 0..5 {
            record(&logger, Level::Info, &format!("line {}", i));
        }

        let lines = logger.recent();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].message, "line 2");
        assert_eq!(lines[2].message, "line 4");
    }

    #[test]
    fn test_filters_below_level() {
        let logger = RollingLogger::silent(LevelFilter::Warn, 10);
        record(&logger, Level::Debug, "hidden");
        record(&logger, Level::Error, "shown");

        let lines = logger.recent();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].level, Level::Error);
    }

    #[test]
    fn test_line_format_contains_level_and_target() {
        let logger = RollingLogger::silent(LevelFilter::Info, 10);
        record(&logger, Level::Warn, "[CACHE] quota exceeded");

        let text = logger.recent()[0].to_string();
        assert!(text.contains("WARN"));
        assert!(text.contains("test: [CACHE] quota exceeded"));
    }

    #[test]
    fn test_zero_capacity_keeps_one_line() {
        let logger = RollingLogger::silent(LevelFilter::Info, 0);
        record(&logger, Level::Info, "a");
        record(&logger, Level::Info, "b");
        assert_eq!(logger.recent().len(), 1);
    }

    #[test]
    fn test_tail_returns_newest_lines_in_order() {
        let logger = RollingLogger::silent(LevelFilter::Info, 10);
        for i in 0..4 {
            record(&logger, Level::Info, &format!("line {}", i));
        }

        let tail = logger.tail(2);
        assert_eq!(tail.len(), 2);
        assert_eq!(tail[0].message, "line 2");
        assert_eq!(tail[1].message, "line 3");
        assert_eq!(logger.tail(50).len(), 4);
    }

    #[test]
    fn test_recent_lines_reads_installed_logger() {
        init(LevelFilter::Info, 10).unwrap();
        log::info!(target: "test", "installed");

        let lines = recent_lines(1);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].message, "installed");
    }
}
