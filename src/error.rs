// src/error.rs
use thiserror::Error;

/// Why a chain configuration was rejected. Each variant renders the full
/// user-facing diagnostic, `[Snap]` tag included.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigValidationError {
    /// The record as a whole is malformed (not an object).
    #[error("[Snap] Chain configuration error: {0}")]
    MalformedConfig(String),

    /// A recognized field failed its format check. Carries the field's
    /// diagnostic template and the rendered offending value.
    #[error("{0} {1}")]
    InvalidField(&'static str, String),

    /// A violation on a field the message table does not cover.
    #[error("[Snap] Invalid chain configuration for {0}: {1}")]
    UnrecognizedField(String, String),

    /// A failure outside the structural check itself, re-wrapped so callers
    /// always see a tagged configuration error.
    #[error("[Snap] Chain configuration error: {0}")]
    Unexpected(String),
}
