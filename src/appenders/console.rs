//! Console appender implementation

use crate::core::{Appender, AppenderOptions, ConsoleSink, Result, StdConsole};
use std::sync::Arc;

/// Writes each formatted line through a [`ConsoleSink`].
///
/// Built on the standard-output console by default; any other sink (an
/// in-memory buffer, a host bridge) can be injected instead. If the sink is
/// a [`NullConsole`](crate::core::NullConsole) every append is a silent
/// no-op, which is how a headless host is expected to behave.
pub struct ConsoleAppender {
    sink: Arc<dyn ConsoleSink>,
}

impl ConsoleAppender {
    pub fn new() -> Self {
        Self {
            sink: Arc::new(StdConsole::new()),
        }
    }

    pub fn with_sink(sink: Arc<dyn ConsoleSink>) -> Self {
        Self { sink }
    }

    /// The sink this appender writes through. The logger shares it so that
    /// `group`/`group_end` land on the same console as the log lines.
    pub fn sink(&self) -> Arc<dyn ConsoleSink> {
        Arc::clone(&self.sink)
    }
}

impl Default for ConsoleAppender {
    fn default() -> Self {
        Self::new()
    }
}

impl Appender for ConsoleAppender {
    fn append(&mut self, line: &str, _options: &AppenderOptions) -> Result<()> {
        self.sink.write(line);
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}
