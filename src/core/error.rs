//! Error types for data loading and store contract checks.

use thiserror::Error;

/// Errors that can occur when loading configuration or seed data.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File could not be found.
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// File could not be read.
    #[error("Failed to read file '{path}': {details}")]
    ReadError { path: String, details: String },

    /// RON parsing failed.
    #[error("Parse error in '{path}': {details}")]
    ParseError { path: String, details: String },

    /// A value is out of its allowed range.
    #[error("Invalid value for '{field}': {reason}")]
    Invalid { field: String, reason: String },
}

impl ConfigError {
    pub(crate) fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Invalid {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// A precondition a caller broke when talking to the store.
///
/// These never corrupt gameplay state: the store clamps the offending
/// value, logs a warning and keeps the violation for callers to inspect.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ContractViolation {
    /// A damage amount below zero. Treated as zero.
    #[error("{action} called with negative amount {amount}")]
    NegativeAmount { action: &'static str, amount: f32 },

    /// A damage amount that is NaN or infinite. Treated as zero.
    #[error("{action} called with a non-finite amount")]
    NonFiniteAmount { action: &'static str },

    /// `add_enemy` was given an id that is already active.
    #[error("Enemy id '{0}' is already in use")]
    DuplicateEnemyId(String),

    /// A hotbar slot that has no skill behind it.
    #[error("Skill slot {index} out of range (have {len})")]
    SkillSlotOutOfRange { index: usize, len: usize },

    /// An entity spec with values outside their domain.
    #[error("Invalid spec for '{id}': {reason}")]
    InvalidSpec { id: String, reason: String },
}
