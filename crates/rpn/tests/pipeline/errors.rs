//! Error reporting and stack recovery tests.

use rpn::{CalcError, OperatorError, StackEvaluator};

use super::assert_error;

#[test]
fn division_by_zero() {
    assert_error("4 0 /", CalcError::DivisionByZero);
}

#[test]
fn two_values_without_operator() {
    assert_error("1 2", CalcError::MalformedExpression { remaining: 2 });
}

#[test]
fn empty_expression_is_malformed() {
    assert_error("", CalcError::MalformedExpression { remaining: 0 });
}

#[test]
fn bare_operator_underflows() {
    assert_error("+", CalcError::EmptyStack);
}

#[test]
fn single_operand_underflows() {
    assert_error("3 +", CalcError::EmptyStack);
}

#[test]
fn unknown_operator() {
    assert_error(
        "1 2 %",
        CalcError::InvalidOperator(OperatorError::Unknown('%')),
    );
}

#[test]
fn unknown_operator_without_operands_underflows_first() {
    assert_error("x", CalcError::EmptyStack);
}

#[test]
fn multi_character_operator() {
    assert_error(
        "1 2 add",
        CalcError::InvalidOperator(OperatorError::MultiCharacter("add".to_string())),
    );
}

#[test]
fn double_minus_is_not_a_number() {
    assert_error(
        "--5",
        CalcError::InvalidOperator(OperatorError::MultiCharacter("--5".to_string())),
    );
}

#[test]
fn exponent_notation_is_rejected() {
    assert_error(
        "1e5",
        CalcError::InvalidOperator(OperatorError::MultiCharacter("1e5".to_string())),
    );
}

#[test]
fn lone_dot_is_invalid_number() {
    assert_error("1 . +", CalcError::InvalidNumber(".".to_string()));
}

#[test]
fn negative_sqrt() {
    assert_error("4 -9 s", CalcError::NegativeSqrt(-9.0));
}

#[test]
fn error_discards_previous_stack() {
    let mut calc = StackEvaluator::new();
    calc.push(1.0);
    calc.push(2.0);
    calc.push(3.0);
    assert!(calc.process_expression("0 /").is_err());
    assert!(calc.stack().is_empty());
}

#[test]
fn recovery_after_error() {
    let mut calc = StackEvaluator::new();
    assert!(calc.process_expression("4 0 /").is_err());
    assert_eq!(calc.last_error_message(), "division by zero");

    assert_eq!(calc.process_expression("3 4 +"), Ok(7.0));
    assert_eq!(calc.last_error_message(), "");
}

#[test]
fn malformed_message_reports_count() {
    let mut calc = StackEvaluator::new();
    let err = calc.process_expression("1 2 3").unwrap_err();
    assert_eq!(
        err.to_string(),
        "malformed expression: 3 values left on the stack (expected exactly one)"
    );
}
