//! Logging into a host element, with an in-memory host standing in for a
//! real UI.

use pagelog::prelude::*;
use pagelog::BufferHost;
use std::sync::Arc;

fn main() {
    let host = Arc::new(BufferHost::new());
    let pane = host.insert("log-pane");

    let logger = Logger::builder()
        .level(LogLevel::Debug)
        .appender_kind(AppenderKind::Element)
        .element_host(Arc::clone(&host) as Arc<dyn ElementHost>)
        .options(AppenderOptions::new().with(ELEMENT_ID, "log-pane"))
        .build();

    logger.debug("first line").info("second line");

    // A logger pointed at an id the host cannot resolve degrades silently.
    let lost = Logger::builder()
        .appender_kind(AppenderKind::Element)
        .element_host(Arc::clone(&host) as Arc<dyn ElementHost>)
        .options(AppenderOptions::new().with(ELEMENT_ID, "missing-pane"))
        .build();
    lost.error("nobody sees this");

    for line in pane.lines() {
        println!("pane: {}", line);
    }
}
