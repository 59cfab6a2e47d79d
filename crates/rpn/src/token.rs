//! Token classification for RPN input.
//!
//! Input is split on whitespace. Each piece is either a numeric literal
//! (optional leading minus, ASCII digits, at most one decimal point) or an
//! operator token. Anything that is not a numeric literal is handed to
//! operator dispatch, which decides whether it is valid.

use crate::error::{CalcError, Result};

/// A classified input token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Token<'a> {
    /// Text that looks like a number. Conversion may still fail (`.`).
    Number(&'a str),
    /// Anything else.
    Operator(&'a str),
}

impl<'a> Token<'a> {
    /// Classify a single whitespace-free token.
    pub fn classify(text: &'a str) -> Self {
        if is_numeric_literal(text) {
            Token::Number(text)
        } else {
            Token::Operator(text)
        }
    }

    /// The original text of the token.
    pub fn text(self) -> &'a str {
        match self {
            Token::Number(s) | Token::Operator(s) => s,
        }
    }
}

/// Split an expression into classified tokens.
pub fn tokenize(expression: &str) -> impl Iterator<Item = Token<'_>> {
    expression.split_whitespace().map(Token::classify)
}

/// Check whether `text` has the shape of a numeric literal.
///
/// A leading `-` only counts as a sign when something follows it, so a bare
/// `-` is an operator.
pub fn is_numeric_literal(text: &str) -> bool {
    let digits = match text.strip_prefix('-') {
        Some(rest) if !rest.is_empty() => rest,
        _ => text,
    };

    let mut seen_dot = false;
    for c in digits.chars() {
        match c {
            '.' if !seen_dot => seen_dot = true,
            c if c.is_ascii_digit() => {}
            _ => return false,
        }
    }
    true
}

/// Convert a numeric literal to a real.
pub fn parse_number(text: &str) -> Result<f64> {
    match text.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(CalcError::InvalidNumber(text.to_string())),
    }
}
