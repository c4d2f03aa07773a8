//! Appender trait for log output destinations

use super::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Option key the element appender reads its target id from.
pub const ELEMENT_ID: &str = "elementId";

/// Appender-specific options, a string-keyed map configured once alongside
/// the appender and passed to it on every append.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AppenderOptions {
    entries: HashMap<String, String>,
}

impl AppenderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Convenience for the one recognized key.
    pub fn element_id(&self) -> Option<&str> {
        self.get(ELEMENT_ID)
    }
}

/// A log output destination.
///
/// The single capability: accept a formatted line plus the configured
/// options and perform a side effect. Implementations report delivery
/// failures through `Result`, but the dispatcher treats every failure as a
/// silent no-op; returning an error must not be load-bearing for callers.
pub trait Appender: Send + Sync {
    fn append(&mut self, line: &str, options: &AppenderOptions) -> Result<()>;
    fn name(&self) -> &str;
}

/// Adapts any compatible closure into an [`Appender`], so callers can supply
/// arbitrary output logic without defining a type.
pub struct FnAppender<F>
where
    F: FnMut(&str, &AppenderOptions) + Send + Sync,
{
    func: F,
}

impl<F> FnAppender<F>
where
    F: FnMut(&str, &AppenderOptions) + Send + Sync,
{
    pub fn new(func: F) -> Self {
        Self { func }
    }
}

impl<F> Appender for FnAppender<F>
where
    F: FnMut(&str, &AppenderOptions) + Send + Sync,
{
    fn append(&mut self, line: &str, options: &AppenderOptions) -> Result<()> {
        (self.func)(line, options);
        Ok(())
    }

    fn name(&self) -> &str {
        "custom"
    }
}
