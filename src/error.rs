//! Derivation error taxonomy.

use thiserror::Error;

/// Terminal failures surfaced to the caller.
///
/// Everything here is raised before any byte derivation, except
/// [`Error::RetryLimitExceeded`] which ends the validate-and-retry loop.
/// Running out of stream bytes mid-assembly is not an error; it is the
/// `exhausted` flag on [`crate::Assembly`] and feeds the retry decision.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// No site identifier was configured.
    #[error("missing site identifier (uri)")]
    MissingUri,

    /// Every character class is disabled; there is nothing to draw from.
    #[error("all character classes are disabled")]
    EmptyConstraintSet,

    /// A custom-alphabet character belongs to no recognized class.
    #[error("character {0:?} does not belong to any recognized class")]
    IllegalCharacter(char),

    /// A class was left with no characters to draw from while a positive
    /// minimum was configured for it.
    #[error("class {0} has an empty alphabet but a positive minimum")]
    EmptyClassAlphabet(&'static str),

    /// Class minimums add up to more than the requested phrase length.
    #[error("class minimums require {required} characters but length is {size}")]
    MinimaExceedLength { required: usize, size: usize },

    /// Every class is capped and the caps cannot fill the requested length.
    #[error("class caps allow only {available} characters but length is {size}")]
    CapsBelowLength { available: usize, size: usize },

    /// Validation kept failing past the configured retry budget.
    #[error("no valid phrase after {attempts} attempts")]
    RetryLimitExceeded { attempts: u32 },
}
