//! Rolling Logger
//!
//! A `log` backend that keeps the most recent formatted lines in a circular
//! buffer and forwards every line to the browser console (stderr when not
//! running on wasm32).

use std::collections::VecDeque;
use std::sync::{Mutex, OnceLock};

use chrono::{SecondsFormat, Utc};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Default number of lines kept in memory
pub const DEFAULT_CAPACITY: usize = 200;

static LOGGER: OnceLock<RollingLogger> = OnceLock::new();

/// Circular buffer of formatted log lines
pub struct RollingLogger {
    level: LevelFilter,
    capacity: usize,
    lines: Mutex<VecDeque<String>>,
}

impl RollingLogger {
    pub fn new(level: LevelFilter, capacity: usize) -> Self {
        Self {
            level,
            capacity: capacity.max(1),
            lines: Mutex::new(VecDeque::with_capacity(capacity.max(1))),
        }
    }

    /// Store a line, evicting the oldest when full
    pub fn push(&self, line: String) {
        if let Ok(mut lines) = self.lines.lock() {
            if lines.len() == self.capacity {
                lines.pop_front();
            }
            lines.push_back(line);
        }
    }

    /// Buffered lines, oldest first
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .map(|lines| lines.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Buffered lines as one block under a header, empty when nothing is buffered
    pub fn report(&self) -> String {
        render_report(&self.lines())
    }
}

fn render_report(lines: &[String]) -> String {
    if lines.is_empty() {
        return String::new();
    }
    let mut out = format!("--- last {} log lines ---", lines.len());
    for line in lines {
        out.push('\n');
        out.push_str(line);
    }
    out
}

fn format_line(record: &Record) -> String {
    format!(
        "{} {:<5} {}: {}",
        Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        record.level(),
        record.target(),
        record.args()
    )
}

#[cfg(target_arch = "wasm32")]
fn emit(level: Level, line: &str) {
    use web_sys::console;
    let value = wasm_bindgen::JsValue::from_str(line);
    match level {
        Level::Error => console::error_1(&value),
        Level::Warn => console::warn_1(&value),
        Level::Info => console::info_1(&value),
        Level::Debug | Level::Trace => console::debug_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: Level, line: &str) {
    eprintln!("{}", line);
}

impl Log for RollingLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_line(record);
        emit(record.level(), &line);
        self.push(line);
    }

    fn flush(&self) {}
}

/// Install the global logger
pub fn init(level: LevelFilter, capacity: usize) -> Result<(), SetLoggerError> {
    let logger = LOGGER.get_or_init(|| RollingLogger::new(level, capacity));
    log::set_logger(logger)?;
    log::set_max_level(level);
    Ok(())
}

/// Recent lines from the global logger as a report, for crash dumps
pub fn recent_report() -> String {
    LOGGER.get().map(RollingLogger::report).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_rolls_over() {
        let logger = RollingLogger::new(LevelFilter::Info, 3);
        for i in 0..5 {
            logger.push(format!("line {}", i));
        }
        assert_eq!(logger.lines(), vec!["line 2", "line 3", "line 4"]);
    }

    #[test]
    fn test_level_filter() {
        let logger = RollingLogger::new(LevelFilter::Warn, 10);
        logger.log(
            &Record::builder()
                .level(Level::Info)
                .target("test")
                .args(format_args!("hidden"))
                .build(),
        );
        logger.log(
            &Record::builder()
                .level(Level::Warn)
                .target("test")
                .args(format_args!("shown"))
                .build(),
        );
        let lines = logger.lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("WARN"));
        assert!(lines[0].ends_with("test: shown"));
    }

    #[test]
    fn test_report_lists_buffered_lines() {
        let logger = RollingLogger::new(LevelFilter::Info, 2);
        assert_eq!(logger.report(), "");

        for i in 0..3 {
            logger.push(format!("line {}", i));
        }
        assert_eq!(logger.report(), "--- last 2 log lines ---\nline 1\nline 2");
    }

    #[test]
    fn test_zero_capacity_keeps_one() {
        let logger = RollingLogger::new(LevelFilter::Info, 0);
        logger.push("a".to_string());
        logger.push("b".to_string());
        assert_eq!(logger.lines(), vec!["b"]);
    }
}
