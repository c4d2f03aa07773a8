//! Basic usage of the console logger.

use pagelog::prelude::*;

fn main() {
    // Default logger: INFO threshold, console appender.
    let logger = Logger::new();

    logger.info("Application started");
    logger.debug("This is below the INFO threshold and is dropped");

    logger.group("startup");
    logger.info("Loading configuration");
    logger.warn("Falling back to defaults");
    logger.group_end();

    // Macros handle formatting.
    pagelog::info!(logger, "Processed {} records", 42);

    // Exact-match mode: only WARN messages pass.
    let warnings_only = Logger::builder()
        .level(LogLevel::Warn)
        .filter_mode(FilterMode::Exact)
        .build();

    warnings_only.info("dropped");
    warnings_only.warn("only warnings reach the console");
    warnings_only.error("dropped too");
}
