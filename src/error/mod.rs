use thiserror::Error;

use crate::operators::OperatorError;
use crate::variable::VariableError;

#[derive(Error, Debug)]
pub enum CellmlError {
    #[error(transparent)]
    Operator(#[from] OperatorError),

    #[error(transparent)]
    Variable(#[from] VariableError),

    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),
}
