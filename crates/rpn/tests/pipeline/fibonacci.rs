//! Tests for the Fibonacci command.

use rpn::{CalcError, StackEvaluator};

fn fib(n: f64) -> Result<f64, CalcError> {
    let mut calc = StackEvaluator::new();
    calc.push(n);
    calc.fibonacci()
}

#[test]
fn small_indices() {
    assert_eq!(fib(0.0), Ok(0.0));
    assert_eq!(fib(1.0), Ok(1.0));
    assert_eq!(fib(2.0), Ok(1.0));
    assert_eq!(fib(3.0), Ok(2.0));
}

#[test]
fn tenth() {
    assert_eq!(fib(10.0), Ok(55.0));
}

#[test]
fn fiftieth() {
    assert_eq!(fib(50.0), Ok(12_586_269_025.0));
}

#[test]
fn replaces_top_value() {
    let mut calc = StackEvaluator::new();
    calc.push(7.0);
    calc.push(10.0);
    assert_eq!(calc.fibonacci(), Ok(55.0));
    assert_eq!(calc.stack().as_slice(), &[7.0, 55.0]);
}

#[test]
fn negative_index_consumes_value() {
    let mut calc = StackEvaluator::new();
    calc.push(-1.0);
    assert_eq!(calc.fibonacci(), Err(CalcError::NegativeIndex(-1)));
    assert!(calc.stack().is_empty());
    assert_eq!(
        calc.last_error_message(),
        "fibonacci index cannot be negative (-1)"
    );
}

#[test]
fn negative_fraction_truncates_to_zero() {
    assert_eq!(fib(-0.5), Ok(0.0));
}

#[test]
fn empty_stack() {
    let mut calc = StackEvaluator::new();
    assert_eq!(calc.fibonacci(), Err(CalcError::EmptyStack));
}

#[test]
fn after_expression() {
    let mut calc = StackEvaluator::new();
    calc.process_expression("2 3 +").unwrap();
    assert_eq!(calc.fibonacci(), Ok(5.0));
}

#[test]
fn infinite_index_saturates() {
    assert_eq!(fib(f64::INFINITY), Ok(f64::INFINITY));
}

#[test]
fn huge_index_saturates() {
    assert_eq!(fib(1e12), Ok(f64::INFINITY));
}

#[test]
fn overflowed_power_as_index() {
    let mut calc = StackEvaluator::new();
    calc.process_expression("10 400 ^").unwrap();
    assert_eq!(calc.fibonacci(), Ok(f64::INFINITY));
    assert_eq!(calc.stack().as_slice(), &[f64::INFINITY]);
}
