//! Error types

use thiserror::Error;

/// Errors that may be returned while deriving recipe addresses or building
/// recipe instructions.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum RecipeError {
    /// Caller input is missing, malformed or inconsistent
    #[error("Invalid `{field}`: {reason}")]
    Validation {
        /// Name of the offending input field, e.g. `seeds[1].mint`
        field: String,
        /// What was expected and what was found
        reason: String,
    },
    /// No bump seed yields a valid program address
    #[error("No valid program address found for {seed_kind} within the bump search space")]
    Derivation {
        /// Which address was being derived
        seed_kind: &'static str,
    },
    /// Numeric value does not fit into its fixed-width field
    #[error("Value {value} does not fit in a {width}-bit unsigned field")]
    Encoding {
        /// Width of the target field in bits
        width: u32,
        /// The rejected value, rendered as text
        value: String,
    },
}

impl RecipeError {
    pub(crate) fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub(crate) fn missing(field: impl Into<String>) -> Self {
        Self::validation(field, "required field is missing")
    }

    pub(crate) fn no_seeds() -> Self {
        Self::validation("seeds", "expected at least one seed, found none")
    }
}
