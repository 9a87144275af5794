//! Common error infrastructure for battle-core.
//!
//! Domain-specific errors (e.g., `HeroError`, `ModifyStatError`) are defined
//! next to the operations they report on. Every one of them is recoverable in
//! the sense that the battle can continue: the operation is a no-op and the
//! caller branches on the `Result`.
//!
//! # Design Principles
//!
//! - **Type Safety**: Each operation family has its own error type
//! - **Reported, not thrown**: The message is also emitted through the text sink
//! - **Severity Classification**: Errors are categorized for logging priority

/// Severity level of an error, used for categorization and logging.
///
/// - **Rejected**: The operation was legal to attempt but the game rules refused it
/// - **Validation**: Invalid input that should not be retried unchanged
/// - **Fatal**: Malformed construction data; the hero cannot be built
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Rule rejection - a stat at its stage limit, a duplicate status.
    ///
    /// These are ordinary game outcomes (the move "fails").
    Rejected,

    /// Validation error - the request itself is invalid.
    ///
    /// Examples: modifying HP through stages, damaging a defeated hero
    Validation,

    /// Fatal error - construction input is malformed.
    ///
    /// Examples: a stat table missing a required key
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Rejected => "rejected",
            Self::Validation => "validation",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if the battle can simply carry on.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Rejected | Self::Validation)
    }
}

/// Common trait for all battle-core errors.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait BattleError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Useful for metrics and for matching in tests without comparing messages.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
