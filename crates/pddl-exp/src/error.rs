//! Error types for expression construction and evaluation

use thiserror::Error;

/// Numeric failures raised while reducing an arithmetic function
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ArithmeticError {
    #[error("division by zero in {expression}")]
    DivisionByZero { expression: String },

    #[error("non-finite result in {expression}")]
    NonFinite { expression: String },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExpError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("{0}: is not evaluable")]
    NotEvaluable(String),

    #[error("Arithmetic error: {0}")]
    Arithmetic(#[from] ArithmeticError),
}

pub type Result<T> = std::result::Result<T, ExpError>;
