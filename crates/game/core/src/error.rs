//! Common error infrastructure for encounter-core.
//!
//! Nothing inside the turn loop fails: missing targets, spent one-shot
//! actions and empty inventories degrade to a narrative report. Errors only
//! exist at the boundary where callers assemble an encounter or a party
//! inventory.

use crate::config::EncounterConfig;
use crate::state::ActorId;

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: the caller may retry with a different input
/// - **Validation**: the input is invalid and should be fixed before retrying
/// - **Internal**: unexpected state inconsistency, indicates a bug
/// - **Fatal**: the encounter cannot proceed at all
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    Recoverable,
    Validation,
    Internal,
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all encounter-core errors.
///
/// All error enums implement this trait next to their `thiserror` derive.
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// Errors raised while assembling an encounter.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EncounterError {
    #[error("the party has no members")]
    EmptyParty,

    #[error("the opposing roster is empty")]
    EmptyRoster,

    #[error("actor id {0} appears more than once in the encounter")]
    DuplicateActor(ActorId),
}

impl GameError for EncounterError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::EmptyParty | Self::EmptyRoster => ErrorSeverity::Validation,
            Self::DuplicateActor(_) => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyParty => "ENCOUNTER_EMPTY_PARTY",
            Self::EmptyRoster => "ENCOUNTER_EMPTY_ROSTER",
            Self::DuplicateActor(_) => "ENCOUNTER_DUPLICATE_ACTOR",
        }
    }
}

/// Errors raised by the shared party inventory.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InventoryError {
    #[error("inventory is full ({} slots)", EncounterConfig::MAX_INVENTORY_SLOTS)]
    Full,

    #[error("no item in slot {0}")]
    EmptySlot(usize),
}

impl GameError for InventoryError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Full => ErrorSeverity::Recoverable,
            Self::EmptySlot(_) => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Full => "INVENTORY_FULL",
            Self::EmptySlot(_) => "INVENTORY_EMPTY_SLOT",
        }
    }
}
