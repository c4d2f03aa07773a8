//! Element appender implementation

use crate::core::{AppendError, Appender, AppenderOptions, ElementHost, NoHost, Result};
use std::sync::Arc;

/// Appends each formatted line to a host UI element.
///
/// The target is looked up on every append from the `elementId` option via
/// the injected [`ElementHost`]. A missing option or an id that resolves to
/// nothing yields an error the dispatcher swallows: no write happens and
/// the caller never sees a failure.
pub struct ElementAppender {
    host: Arc<dyn ElementHost>,
}

impl ElementAppender {
    /// An appender with no host behind it; every append degrades to a no-op.
    pub fn new() -> Self {
        Self {
            host: Arc::new(NoHost),
        }
    }

    pub fn with_host(host: Arc<dyn ElementHost>) -> Self {
        Self { host }
    }
}

impl Default for ElementAppender {
    fn default() -> Self {
        Self::new()
    }
}

impl Appender for ElementAppender {
    fn append(&mut self, line: &str, options: &AppenderOptions) -> Result<()> {
        let id = options
            .element_id()
            .ok_or_else(|| AppendError::missing_option(crate::core::ELEMENT_ID))?;
        let element = self
            .host
            .resolve_element(id)
            .ok_or_else(|| AppendError::element_not_found(id))?;
        element.append_line(line);
        Ok(())
    }

    fn name(&self) -> &str {
        "element"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{BufferHost, ELEMENT_ID};

    #[test]
    fn test_append_targets_configured_element() {
        let host = Arc::new(BufferHost::new());
        let pane = host.insert("log-pane");
        let mut appender = ElementAppender::with_host(Arc::clone(&host) as Arc<dyn ElementHost>);

        let options = AppenderOptions::new().with(ELEMENT_ID, "log-pane");
        appender.append("line one", &options).expect("append");

        assert_eq!(pane.lines(), vec!["line one"]);
    }

    #[test]
    fn test_missing_option_is_reported_not_panicked() {
        let host = Arc::new(BufferHost::new());
        let mut appender = ElementAppender::with_host(host as Arc<dyn ElementHost>);

        let err = appender
            .append("line", &AppenderOptions::new())
            .expect_err("no elementId configured");
        assert!(matches!(err, AppendError::MissingOption { .. }));
    }

    #[test]
    fn test_unresolved_id_mutates_nothing() {
        let host = Arc::new(BufferHost::new());
        let pane = host.insert("log-pane");
        let mut appender = ElementAppender::with_host(Arc::clone(&host) as Arc<dyn ElementHost>);

        let options = AppenderOptions::new().with(ELEMENT_ID, "other-pane");
        let err = appender.append("line", &options).expect_err("unresolved id");
        assert!(matches!(err, AppendError::ElementNotFound { .. }));
        assert!(pane.lines().is_empty());
    }
}
