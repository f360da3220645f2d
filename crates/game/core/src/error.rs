//! Common error infrastructure for skirmish-core.
//!
//! Domain-specific errors (e.g., `PlaceError`, `TurnError`) are defined next to
//! the operations they guard. This module only hosts the classification shared
//! by all of them.
//!
//! # Design Principles
//!
//! - **Type Safety**: Each operation family has its own error type with specific variants
//! - **Severity Classification**: Errors are categorized for logging and recovery
//! - **No Fatal Class**: Every failure path leaves the game unchanged and usable

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: The game is fine; the same call may succeed later
///   (e.g., `register_action` before `start`)
/// - **Validation**: Invalid input that should be rejected without retry
/// - **Internal**: A broken invariant (e.g., a snapshot whose layer disagrees
///   with its player list). These indicate bugs or corrupted data.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    Recoverable,
    Validation,
    Internal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal)
    }
}

/// Common trait for all skirmish-core errors.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Useful for log fields and assertions in tests.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
