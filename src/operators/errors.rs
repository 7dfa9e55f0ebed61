//! Error types for expression tree construction

use thiserror::Error;

/// Errors raised while building an expression tree from textual kinds
///
/// Once a node exists its operator or function is a typed value, so
/// rendering itself never fails. These errors surface only at the
/// boundary where a translator maps names onto node kinds.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OperatorError {
    /// The function name is not part of the recognized set
    #[error("Unknown function '{name}'")]
    UnknownFunction { name: String },

    /// The operator symbol or name is not a recognized binary operator
    #[error("Unknown binary operator '{symbol}'")]
    UnknownOperator { symbol: String },

    /// A constant that has no literal form in generated source
    #[error("Constant {value} is not finite")]
    NonFiniteConstant { value: String },
}

impl OperatorError {
    /// Create an unknown function error
    pub fn unknown_function(name: impl Into<String>) -> Self {
        Self::UnknownFunction { name: name.into() }
    }

    /// Create an unknown operator error
    pub fn unknown_operator(symbol: impl Into<String>) -> Self {
        Self::UnknownOperator {
            symbol: symbol.into(),
        }
    }
}
