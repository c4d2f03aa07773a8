//! Appender implementations

pub mod console;
pub mod element;

pub use console::ConsoleAppender;
pub use element::ElementAppender;

// Re-export the trait alongside its implementations
pub use crate::core::Appender;
