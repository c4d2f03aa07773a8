//! Error types for the logger

pub type Result<T> = std::result::Result<T, AppendError>;

/// Why an appender could not deliver a line.
///
/// These are internal to the dispatch pipeline: `Logger::log` swallows every
/// one of them, because a missing sink is a normal operating mode (headless
/// host, no target element) and logging must never fail the caller. The
/// variants exist so appenders stay honest and tests can observe exactly
/// which degradation happened.
#[derive(Debug, thiserror::Error)]
pub enum AppendError {
    /// The host has no usable sink for this appender.
    #[error("Sink unavailable for appender '{appender}'")]
    SinkUnavailable { appender: String },

    /// The element appender's target id did not resolve to an element.
    #[error("No element found for id '{id}'")]
    ElementNotFound { id: String },

    /// A required appender option was not supplied.
    #[error("Missing appender option '{key}'")]
    MissingOption { key: String },

    /// Writer error (generic)
    #[error("Writer error: {0}")]
    Writer(String),
}

impl AppendError {
    pub fn sink_unavailable(appender: impl Into<String>) -> Self {
        AppendError::SinkUnavailable {
            appender: appender.into(),
        }
    }

    pub fn element_not_found(id: impl Into<String>) -> Self {
        AppendError::ElementNotFound { id: id.into() }
    }

    pub fn missing_option(key: impl Into<String>) -> Self {
        AppendError::MissingOption { key: key.into() }
    }

    pub fn writer<S: Into<String>>(msg: S) -> Self {
        AppendError::Writer(msg.into())
    }
}

/// Errors raised while building a logger from declarative configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration named an appender this crate does not provide.
    #[error("Unknown appender '{name}' (expected 'console' or 'element')")]
    UnknownAppender { name: String },

    /// Configuration could not be parsed.
    #[error("Invalid logger configuration: {0}")]
    Parse(#[from] serde_json::Error),
}
