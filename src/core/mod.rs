//! Core logger types and traits

pub mod appender;
pub mod config;
pub mod error;
pub mod filter;
pub mod format;
pub mod log_entry;
pub mod log_level;
pub mod logger;
pub mod sink;

pub use appender::{Appender, AppenderOptions, FnAppender, ELEMENT_ID};
pub use config::{AppenderKind, LoggerConfig};
pub use error::{AppendError, ConfigError, Result};
pub use filter::FilterMode;
pub use format::{format_date, format_entry, format_time, pad_left};
pub use log_entry::LogEntry;
pub use log_level::LogLevel;
pub use logger::{Logger, LoggerBuilder};
pub use sink::{
    BufferConsole, BufferElement, BufferHost, ConsoleSink, Element, ElementHost, NoHost,
    NullConsole, StdConsole,
};
