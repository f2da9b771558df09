//! Error types for smartplan-core.
//!
//! Only scheduling preferences can be rejected; every other operation in the
//! crate is total over its input.

use thiserror::Error;

/// Invalid [`UserPreferences`](crate::preferences::UserPreferences).
///
/// Raised before any packing begins, so a failed build never yields a
/// partial schedule.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A wall-clock value is not a strict "HH:MM" time.
    #[error("invalid time for '{field}': {value:?} (expected HH:MM)")]
    InvalidTime { field: &'static str, value: String },

    /// The working window is empty or inverted.
    #[error("working hours end ({end}) must be after start ({start})")]
    EmptyWindow { start: String, end: String },

    /// A duration that must be strictly positive was zero.
    #[error("'{field}' must be a positive number of minutes")]
    NonPositive { field: &'static str },
}

pub type Result<T, E = ConfigError> = std::result::Result<T, E>;
