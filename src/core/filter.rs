//! Severity filtering policies

use super::log_level::LogLevel;
use serde::{Deserialize, Serialize};

/// How a call's level is compared against the configured level.
///
/// The original utility shipped both behaviors across its revisions, so the
/// policy is an explicit configuration choice here rather than two logger
/// types. `Threshold` is the default; `Exact` makes a logger emit only the
/// one level it was configured with (useful for routing a single severity to
/// a dedicated sink).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterMode {
    /// Emit when the call level is at least as severe as the configured
    /// level (`call >= configured`).
    #[default]
    Threshold,
    /// Emit only when the call level matches the configured level exactly.
    Exact,
}

impl FilterMode {
    /// Decide whether a message at `call` passes the filter for a logger
    /// configured at `configured`.
    pub fn passes(&self, configured: LogLevel, call: LogLevel) -> bool {
        match self {
            FilterMode::Threshold => call >= configured,
            FilterMode::Exact => call == configured,
        }
    }
}
