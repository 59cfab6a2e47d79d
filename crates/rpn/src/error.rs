//! Error types for expression evaluation.

use thiserror::Error;

/// Errors raised by the stack evaluator.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum CalcError {
    /// Tried to pop from an empty stack.
    #[error("stack is empty, cannot pop")]
    EmptyStack,

    #[error(transparent)]
    InvalidOperator(#[from] OperatorError),

    #[error("division by zero")]
    DivisionByZero,

    /// Square root of the contained negative operand.
    #[error("cannot take the square root of a negative number ({0})")]
    NegativeSqrt(f64),

    /// An expression finished with other than exactly one value on the stack.
    #[error("malformed expression: {remaining} values left on the stack (expected exactly one)")]
    MalformedExpression { remaining: usize },

    #[error("fibonacci index cannot be negative ({0})")]
    NegativeIndex(i64),

    /// Token looked numeric but could not be converted.
    #[error("invalid number literal '{0}'")]
    InvalidNumber(String),
}

/// Reasons an operator token is rejected.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum OperatorError {
    #[error("multi-character operators are not supported: '{0}'")]
    MultiCharacter(String),

    #[error("unsupported operator '{0}'")]
    Unknown(char),
}

pub type Result<T> = std::result::Result<T, CalcError>;
