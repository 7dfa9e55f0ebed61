//! Error types for variables and their equivalences

use thiserror::Error;

/// Errors that can occur when querying or describing a variable
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum VariableError {
    /// Positional access past the end of the live equivalences
    #[error("Equivalent variable index {index} out of range (count is {count})")]
    IndexOutOfRange { index: usize, count: usize },

    /// Interface text that is not one of the four classifications
    #[error("Unknown interface type '{0}'")]
    UnknownInterfaceType(String),
}
