//! Main logger implementation

use super::{
    appender::{Appender, AppenderOptions},
    config::{AppenderKind, LoggerConfig},
    filter::FilterMode,
    log_entry::LogEntry,
    log_level::LogLevel,
    sink::{ConsoleSink, ElementHost, NoHost, StdConsole},
};
use crate::appenders::{ConsoleAppender, ElementAppender};
use parking_lot::Mutex;
use std::sync::Arc;

/// Filters, formats, and dispatches log messages to one appender.
///
/// Each call to [`log`](Logger::log) runs the whole pipeline synchronously:
/// level check, timestamp capture, formatting, appender dispatch. There is
/// no queue and no shared state between logger instances; the configuration
/// taken at construction (or at the last [`configure`](Logger::configure))
/// applies uniformly to every subsequent call.
///
/// Appender failures are swallowed. A headless host, a missing console, or
/// an unresolved target element downgrade logging to a no-op rather than
/// surfacing an error, so logging can never fail the caller.
pub struct Logger {
    level: LogLevel,
    filter_mode: FilterMode,
    appender: Mutex<Box<dyn Appender>>,
    options: AppenderOptions,
    console: Arc<dyn ConsoleSink>,
}

impl Logger {
    /// A threshold-mode logger at [`LogLevel::Info`] writing to the
    /// standard-output console.
    #[must_use]
    pub fn new() -> Self {
        Self::builder().build()
    }

    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    /// Build a logger from declarative configuration, resolving the canned
    /// appender by name against the default host sinks.
    #[must_use]
    pub fn from_config(config: &LoggerConfig) -> Self {
        Self::builder().config(config).build()
    }

    /// Replace the level, appender, and options in one step, init-style.
    /// Chainable.
    pub fn configure(
        &mut self,
        level: LogLevel,
        appender: Box<dyn Appender>,
        options: AppenderOptions,
    ) -> &mut Self {
        self.level = level;
        *self.appender.lock() = appender;
        self.options = options;
        self
    }

    pub fn level(&self) -> LogLevel {
        self.level
    }

    pub fn filter_mode(&self) -> FilterMode {
        self.filter_mode
    }

    /// Log `message` at `level`. Chainable.
    ///
    /// If the level fails the configured filter nothing happens at all;
    /// otherwise the current time is captured, the line is formatted, and
    /// the appender is invoked with the configured options. Delivery
    /// failures are silently ignored.
    pub fn log(&self, level: LogLevel, message: impl Into<String>) -> &Self {
        if !self.filter_mode.passes(self.level, level) {
            return self;
        }

        let entry = LogEntry::new(level, message.into());
        let line = entry.formatted();
        // Sink-level failure is a normal operating mode, never an error.
        let _ = self.appender.lock().append(&line, &self.options);
        self
    }

    pub fn debug(&self, message: impl Into<String>) -> &Self {
        self.log(LogLevel::Debug, message)
    }

    pub fn info(&self, message: impl Into<String>) -> &Self {
        self.log(LogLevel::Info, message)
    }

    pub fn warn(&self, message: impl Into<String>) -> &Self {
        self.log(LogLevel::Warn, message)
    }

    pub fn error(&self, message: impl Into<String>) -> &Self {
        self.log(LogLevel::Error, message)
    }

    /// Open a cosmetic console group. Chainable. No-op when the console
    /// sink does not support grouping.
    pub fn group(&self, name: &str) -> &Self {
        if self.console.supports_grouping() {
            self.console.group(name);
        }
        self
    }

    /// Close the innermost console group. No-op without grouping support.
    pub fn group_end(&self) {
        if self.console.supports_grouping() {
            self.console.group_end();
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

/// Constructor-style configuration for [`Logger`].
pub struct LoggerBuilder {
    level: LogLevel,
    filter_mode: FilterMode,
    options: AppenderOptions,
    appender: Option<Box<dyn Appender>>,
    appender_kind: AppenderKind,
    console: Option<Arc<dyn ConsoleSink>>,
    element_host: Option<Arc<dyn ElementHost>>,
}

impl LoggerBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            level: LogLevel::default(),
            filter_mode: FilterMode::default(),
            options: AppenderOptions::default(),
            appender: None,
            appender_kind: AppenderKind::default(),
            console: None,
            element_host: None,
        }
    }

    #[must_use]
    pub fn level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    #[must_use]
    pub fn filter_mode(mut self, mode: FilterMode) -> Self {
        self.filter_mode = mode;
        self
    }

    #[must_use]
    pub fn options(mut self, options: AppenderOptions) -> Self {
        self.options = options;
        self
    }

    /// Use a caller-supplied appender instead of a canned one.
    #[must_use]
    pub fn appender(mut self, appender: Box<dyn Appender>) -> Self {
        self.appender = Some(appender);
        self
    }

    /// Select a canned appender by kind. Ignored if a custom appender was
    /// supplied.
    #[must_use]
    pub fn appender_kind(mut self, kind: AppenderKind) -> Self {
        self.appender_kind = kind;
        self
    }

    /// Inject the console capability used by the console appender and by
    /// `group`/`group_end`.
    #[must_use]
    pub fn console_sink(mut self, sink: Arc<dyn ConsoleSink>) -> Self {
        self.console = Some(sink);
        self
    }

    /// Inject the element host the element appender resolves targets
    /// against.
    #[must_use]
    pub fn element_host(mut self, host: Arc<dyn ElementHost>) -> Self {
        self.element_host = Some(host);
        self
    }

    /// Apply level, filter mode, appender kind, and options from
    /// declarative configuration.
    #[must_use]
    pub fn config(mut self, config: &LoggerConfig) -> Self {
        self.level = config.level;
        self.filter_mode = config.filter_mode;
        self.appender_kind = config.appender;
        self.options = config.options.clone();
        self
    }

    #[must_use]
    pub fn build(self) -> Logger {
        let console: Arc<dyn ConsoleSink> = self
            .console
            .unwrap_or_else(|| Arc::new(StdConsole::new()));

        let appender: Box<dyn Appender> = match self.appender {
            Some(custom) => custom,
            None => match self.appender_kind {
                AppenderKind::Console => {
                    Box::new(ConsoleAppender::with_sink(Arc::clone(&console)))
                }
                AppenderKind::Element => {
                    let host = self.element_host.unwrap_or_else(|| Arc::new(NoHost));
                    Box::new(ElementAppender::with_host(host))
                }
            },
        };

        Logger {
            level: self.level,
            filter_mode: self.filter_mode,
            appender: Mutex::new(appender),
            options: self.options,
            console,
        }
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
