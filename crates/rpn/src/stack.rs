//! Calculator data stack.
//!
//! Holds real numbers with LIFO access at the top. Items are stored
//! bottom to top.

use crate::error::{CalcError, Result};

/// The calculator data stack.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Stack {
    items: Vec<f64>,
}

impl Stack {
    /// Create a new empty stack.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Get the number of items on the stack.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the stack is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Push a value onto the stack.
    pub fn push(&mut self, value: f64) {
        self.items.push(value);
    }

    /// Pop a value from the stack.
    pub fn pop(&mut self) -> Result<f64> {
        self.items.pop().ok_or(CalcError::EmptyStack)
    }

    /// Peek at the top of stack without removing it.
    pub fn top(&self) -> Result<f64> {
        self.items.last().copied().ok_or(CalcError::EmptyStack)
    }

    /// Clear the stack.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Get a slice of all items (bottom to top).
    pub fn as_slice(&self) -> &[f64] {
        &self.items
    }
}
