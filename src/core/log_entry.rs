//! Log entry structure

use super::format::format_entry;
use super::log_level::LogLevel;
use chrono::{DateTime, Local};

/// One log call's worth of data: the severity, the raw message, and the
/// wall-clock time captured when the call was made.
///
/// Entries are ephemeral. They exist for the duration of a single `log`
/// call, long enough to be formatted and handed to the appender, and are
/// never persisted.
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
    pub timestamp: DateTime<Local>,
}

impl LogEntry {
    pub fn new(level: LogLevel, message: String) -> Self {
        Self {
            level,
            message,
            timestamp: Local::now(),
        }
    }

    /// Build an entry with an explicit timestamp. Used by tests and by
    /// callers that replay events recorded elsewhere.
    pub fn at(level: LogLevel, message: String, timestamp: DateTime<Local>) -> Self {
        Self {
            level,
            message,
            timestamp,
        }
    }

    /// Render the fixed-layout line for this entry.
    pub fn formatted(&self) -> String {
        format_entry(&self.message, &self.timestamp.naive_local())
    }
}
