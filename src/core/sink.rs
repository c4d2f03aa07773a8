//! Injected host capabilities
//!
//! The canned appenders never reach for a global console or document.
//! Instead the host environment is modeled as two capabilities supplied at
//! configuration time: a [`ConsoleSink`] the console appender writes
//! through, and an [`ElementHost`] the element appender resolves targets
//! against. Headless hosts plug in the no-op implementations and every log
//! call degrades silently, which is a normal operating mode rather than an
//! error.

use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;

/// A console-like output capability.
///
/// `group`/`group_end` are purely cosmetic. Hosts that cannot render groups
/// report `supports_grouping() == false` and the calls become no-ops.
pub trait ConsoleSink: Send + Sync {
    fn write(&self, line: &str);

    fn supports_grouping(&self) -> bool {
        false
    }

    fn group(&self, _name: &str) {}

    fn group_end(&self) {}
}

/// Standard-output console. Groups render as an indented block under a
/// header line, mirroring grouped console output.
pub struct StdConsole {
    depth: Mutex<usize>,
}

impl StdConsole {
    pub fn new() -> Self {
        Self {
            depth: Mutex::new(0),
        }
    }

    fn indent(&self) -> String {
        "  ".repeat(*self.depth.lock())
    }
}

impl Default for StdConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleSink for StdConsole {
    fn write(&self, line: &str) {
        println!("{}{}", self.indent(), line);
    }

    fn supports_grouping(&self) -> bool {
        true
    }

    fn group(&self, name: &str) {
        #[cfg(feature = "console")]
        let header = {
            use colored::Colorize;
            name.bold().to_string()
        };
        #[cfg(not(feature = "console"))]
        let header = name.to_string();

        println!("{}{}", self.indent(), header);
        *self.depth.lock() += 1;
    }

    fn group_end(&self) {
        let mut depth = self.depth.lock();
        *depth = depth.saturating_sub(1);
    }
}

/// A host with no console. Every call is a no-op.
pub struct NullConsole;

impl ConsoleSink for NullConsole {
    fn write(&self, _line: &str) {}
}

/// In-memory console that records everything written to it. Backs the test
/// suites and any caller that wants to inspect output programmatically.
#[derive(Default)]
pub struct BufferConsole {
    lines: Mutex<Vec<String>>,
    groups: Mutex<Vec<String>>,
}

impl BufferConsole {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }

    pub fn groups(&self) -> Vec<String> {
        self.groups.lock().clone()
    }
}

impl ConsoleSink for BufferConsole {
    fn write(&self, line: &str) {
        self.lines.lock().push(line.to_string());
    }

    fn supports_grouping(&self) -> bool {
        true
    }

    fn group(&self, name: &str) {
        self.groups.lock().push(name.to_string());
    }

    fn group_end(&self) {}
}

/// A UI element a formatted line can be appended to.
pub trait Element: Send + Sync {
    /// Append the line as a new row (the original appends a line break
    /// followed by a text node).
    fn append_line(&self, line: &str);
}

/// Resolves element ids to elements.
pub trait ElementHost: Send + Sync {
    fn resolve_element(&self, id: &str) -> Option<Arc<dyn Element>>;
}

/// A host with no elements; every id resolves to nothing.
pub struct NoHost;

impl ElementHost for NoHost {
    fn resolve_element(&self, _id: &str) -> Option<Arc<dyn Element>> {
        None
    }
}

/// In-memory element whose appended lines can be read back.
#[derive(Default)]
pub struct BufferElement {
    lines: Mutex<Vec<String>>,
}

impl BufferElement {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }
}

impl Element for BufferElement {
    fn append_line(&self, line: &str) {
        self.lines.lock().push(line.to_string());
    }
}

/// In-memory element host keyed by id. Backs tests and headless embedders.
#[derive(Default)]
pub struct BufferHost {
    elements: Mutex<HashMap<String, Arc<BufferElement>>>,
}

impl BufferHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an element under `id`, returning a handle the caller can
    /// keep to read appended lines back.
    pub fn insert(&self, id: impl Into<String>) -> Arc<BufferElement> {
        let element = Arc::new(BufferElement::new());
        self.elements
            .lock()
            .insert(id.into(), Arc::clone(&element));
        element
    }
}

impl ElementHost for BufferHost {
    fn resolve_element(&self, id: &str) -> Option<Arc<dyn Element>> {
        self.elements
            .lock()
            .get(id)
            .map(|e| Arc::clone(e) as Arc<dyn Element>)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_console_records_writes() {
        let console = BufferConsole::new();
        console.write("a");
        console.write("b");
        assert_eq!(console.lines(), vec!["a", "b"]);
    }

    #[test]
    fn test_null_console_is_silent() {
        let console = NullConsole;
        console.write("dropped");
        console.group("dropped");
        console.group_end();
        assert!(!console.supports_grouping());
    }

    #[test]
    fn test_std_console_group_depth_never_underflows() {
        let console = StdConsole::new();
        console.group_end();
        console.group_end();
        assert_eq!(console.indent(), "");
    }

    #[test]
    fn test_buffer_host_resolution() {
        let host = BufferHost::new();
        let pane = host.insert("log-pane");
        assert!(host.resolve_element("log-pane").is_some());
        assert!(host.resolve_element("missing").is_none());

        host.resolve_element("log-pane")
            .expect("registered element")
            .append_line("hello");
        assert_eq!(pane.lines(), vec!["hello"]);
    }
}
