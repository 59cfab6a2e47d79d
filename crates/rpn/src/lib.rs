//! RPN: a stack evaluator for Reverse Polish Notation.
//!
//! Expressions are whitespace-separated numbers and single-character
//! operators. Numbers are pushed onto a data stack; operators pop their
//! operands and push the result.
//!
//! # Operators
//!
//! | op  | effect                                   |
//! |-----|------------------------------------------|
//! | `+` | a + b                                    |
//! | `-` | a - b                                    |
//! | `*` | a * b                                    |
//! | `/` | a / b (fails when b is zero)             |
//! | `^` | a raised to the power b                  |
//! | `s` | pushes a back, then the square root of b |
//!
//! # Example
//!
//! ```
//! use rpn::{CalcError, StackEvaluator};
//!
//! let mut calc = StackEvaluator::new();
//! assert_eq!(calc.process_expression("3 4 +"), Ok(7.0));
//!
//! assert_eq!(calc.process_expression("4 0 /"), Err(CalcError::DivisionByZero));
//! assert!(calc.stack().is_empty());
//! ```

pub mod error;
pub mod evaluator;
pub mod format;
pub mod operator;
pub mod stack;
pub mod token;

pub use error::{CalcError, OperatorError, Result};
pub use evaluator::{StackEvaluator, StackSnapshot};
pub use format::format_real;
pub use operator::Operator;
pub use stack::Stack;
pub use token::Token;
