//! Declarative logger configuration

use super::appender::AppenderOptions;
use super::error::ConfigError;
use super::filter::FilterMode;
use super::log_level::LogLevel;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The canned appenders, selectable by name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppenderKind {
    #[default]
    Console,
    Element,
}

impl FromStr for AppenderKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "console" => Ok(AppenderKind::Console),
            "element" => Ok(AppenderKind::Element),
            _ => Err(ConfigError::UnknownAppender {
                name: s.to_string(),
            }),
        }
    }
}

/// Everything a logger needs at configuration time, in serializable form:
/// the severity level, the filtering policy, which canned appender to use,
/// and the appender options.
///
/// Custom appenders and host sinks are live objects and are supplied through
/// [`LoggerBuilder`](super::logger::LoggerBuilder) instead.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LoggerConfig {
    pub level: LogLevel,
    pub filter_mode: FilterMode,
    pub appender: AppenderKind,
    pub options: AppenderOptions,
}

impl LoggerConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string(self)?)
    }
}
