//! The stack evaluator.
//!
//! [`StackEvaluator`] owns the data stack and applies RPN expressions to it.
//! The stack persists between expressions so a result can be chained into
//! the next one, except that any failed expression clears it completely.
//!
//! # Example
//!
//! ```
//! use rpn::StackEvaluator;
//!
//! let mut calc = StackEvaluator::new();
//! assert_eq!(calc.process_expression("5 1 2 + 4 * + 3 -"), Ok(14.0));
//!
//! // The result stays on the stack for the next expression.
//! assert_eq!(calc.process_expression("2 *"), Ok(28.0));
//! ```

use std::fmt;

use crate::error::{CalcError, OperatorError, Result};
use crate::format::format_real;
use crate::operator::{Operator, single_symbol};
use crate::stack::Stack;
use crate::token::{Token, parse_number, tokenize};

/// Stack-based RPN evaluator.
#[derive(Clone, Debug, Default)]
pub struct StackEvaluator {
    stack: Stack,
    /// Message of the most recent failure, cleared by the next success.
    last_error: Option<String>,
}

impl StackEvaluator {
    /// Create an evaluator with an empty stack.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read-only access to the data stack.
    pub fn stack(&self) -> &Stack {
        &self.stack
    }

    /// Number of values currently on the stack.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Push a value onto the stack.
    pub fn push(&mut self, value: f64) {
        self.stack.push(value);
        self.last_error = None;
    }

    /// Pop the top value.
    pub fn pop(&mut self) -> Result<f64> {
        let popped = self.stack.pop();
        self.record(popped)
    }

    /// Apply a single operator token to the top two stack values.
    ///
    /// Operands are popped right (`b`) then left (`a`). If the operator then
    /// fails, both stay consumed; restoring the stack is up to the caller.
    pub fn apply_operator(&mut self, token: &str) -> Result<()> {
        let outcome = self.apply_operator_inner(token);
        self.record(outcome)
    }

    fn apply_operator_inner(&mut self, token: &str) -> Result<()> {
        let symbol = single_symbol(token)?;
        let b = self.pop()?;
        let a = self.pop()?;
        let op = Operator::from_symbol(symbol).ok_or(OperatorError::Unknown(symbol))?;

        let result = match op {
            Operator::Add => a + b,
            Operator::Sub => a - b,
            Operator::Mul => a * b,
            Operator::Div => {
                if b == 0.0 {
                    return Err(CalcError::DivisionByZero);
                }
                a / b
            }
            Operator::Pow => a.powf(b),
            Operator::Sqrt => {
                if b < 0.0 {
                    return Err(CalcError::NegativeSqrt(b));
                }
                // Only the right operand is used; the left one goes back.
                self.stack.push(a);
                b.sqrt()
            }
        };

        log::trace!("{} {} {} = {}", a, op, b, result);
        self.stack.push(result);
        Ok(())
    }

    /// Evaluate a whitespace-separated RPN expression.
    ///
    /// Exactly one value must remain on the stack afterwards; it is returned
    /// and left in place. Any failure empties the stack before returning.
    pub fn process_expression(&mut self, expression: &str) -> Result<f64> {
        self.last_error = None;
        log::debug!("evaluating {:?} on depth {}", expression, self.stack.len());

        let outcome = self.evaluate_tokens(expression);
        if let Err(e) = &outcome {
            log::debug!("evaluation of {:?} failed: {}", expression, e);
            self.stack.clear();
        }
        self.record(outcome)
    }

    fn evaluate_tokens(&mut self, expression: &str) -> Result<f64> {
        for token in tokenize(expression) {
            log::trace!("token {:?}", token.text());
            match token {
                Token::Number(text) => {
                    let value = parse_number(text)?;
                    self.push(value);
                }
                Token::Operator(text) => self.apply_operator(text)?,
            }
        }

        match self.stack.len() {
            1 => self.stack.top(),
            remaining => Err(CalcError::MalformedExpression { remaining }),
        }
    }

    /// Empty the stack.
    pub fn clear_stack(&mut self) {
        self.stack.clear();
        self.last_error = None;
    }

    /// A bottom-to-top view of the stack for display.
    pub fn snapshot_stack(&self) -> StackSnapshot<'_> {
        StackSnapshot {
            values: self.stack.as_slice(),
        }
    }

    /// The most recent error message, or `""` after a success.
    pub fn last_error_message(&self) -> &str {
        self.last_error.as_deref().unwrap_or("")
    }

    /// Replace the top value `n` with the `n`th Fibonacci number.
    ///
    /// `n` is truncated toward zero. A negative index is an error and is not
    /// pushed back.
    pub fn fibonacci(&mut self) -> Result<f64> {
        let outcome = self.fibonacci_inner();
        self.record(outcome)
    }

    fn fibonacci_inner(&mut self) -> Result<f64> {
        let n = self.pop()? as i64;
        if n < 0 {
            return Err(CalcError::NegativeIndex(n));
        }

        let value = fibonacci_number(n as u64);
        log::debug!("fib({}) = {}", n, value);
        self.push(value);
        Ok(value)
    }

    /// Mirror an operation's outcome into `last_error`.
    fn record<T>(&mut self, outcome: Result<T>) -> Result<T> {
        match &outcome {
            Ok(_) => self.last_error = None,
            Err(e) => self.last_error = Some(e.to_string()),
        }
        outcome
    }
}

/// Iteratively compute F(n) with F(0) = 0 and F(1) = F(2) = 1.
fn fibonacci_number(n: u64) -> f64 {
    let (mut prev, mut curr) = (0.0_f64, 1.0_f64);
    if n == 0 {
        return prev;
    }
    for _ in 1..n {
        let next = prev + curr;
        prev = curr;
        curr = next;
        // F(n) stays infinite once it overflows.
        if curr.is_infinite() {
            break;
        }
    }
    curr
}

/// Borrowed view of the stack, bottom to top.
///
/// Displays as space-separated values, or `empty` when there are none.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StackSnapshot<'a> {
    values: &'a [f64],
}

impl<'a> StackSnapshot<'a> {
    pub fn values(&self) -> &'a [f64] {
        self.values
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl fmt::Display for StackSnapshot<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.values.is_empty() {
            return write!(f, "empty");
        }
        let rendered: Vec<String> = self.values.iter().map(|v| format_real(*v)).collect();
        write!(f, "{}", rendered.join(" "))
    }
}
