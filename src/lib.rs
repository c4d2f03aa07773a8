//! # Pagelog
//!
//! A minimal client-side logging utility: messages tagged with a severity
//! level are filtered, stamped with a fixed-layout timestamp, and handed to
//! a pluggable appender.
//!
//! ## Features
//!
//! - **Fixed-layout lines**: `MM/DD/YYYY HH:MM:SS.mm <message>`
//! - **Two filtering policies**: minimum-severity threshold or exact match
//! - **Pluggable appenders**: console, host UI element, or any closure
//! - **Never fails the caller**: missing sinks degrade to silent no-ops
//!
//! ## Example
//!
//! ```
//! use pagelog::prelude::*;
//!
//! let logger = Logger::builder().level(LogLevel::Info).build();
//! logger.info("ready").warn("low on coffee");
//! ```

pub mod appenders;
pub mod core;
pub mod macros;

pub mod prelude {
    pub use crate::appenders::{ConsoleAppender, ElementAppender};
    pub use crate::core::{
        AppendError, Appender, AppenderKind, AppenderOptions, ConfigError, ConsoleSink, Element,
        ElementHost, FilterMode, FnAppender, LogEntry, LogLevel, Logger, LoggerBuilder,
        LoggerConfig, Result, ELEMENT_ID,
    };
}

pub use appenders::{ConsoleAppender, ElementAppender};
pub use core::{
    AppendError, Appender, AppenderKind, AppenderOptions, BufferConsole, BufferElement,
    BufferHost, ConfigError, ConsoleSink, Element, ElementHost, FilterMode, FnAppender, LogEntry,
    LogLevel, Logger, LoggerBuilder, LoggerConfig, NoHost, NullConsole, Result, StdConsole,
    ELEMENT_ID,
};
