use opcalc_core::{lookup, ArithmeticOp, CalcError, Invocation, OPERATOR_TABLE};
use rstest::rstest;

fn assert_eval_result(left: &str, op: &str, right: &str, expected: i32) {
    let invocation = Invocation::parse(left, op, right);
    match invocation.evaluate() {
        Ok(result) => assert_eq!(result, expected, "evaluating '{}'", invocation),
        Err(err) => panic!("expected '{}' to evaluate but got {:?}", invocation, err),
    }
}

fn assert_eval_error(left: &str, op: &str, right: &str, expected: CalcError) {
    let invocation = Invocation::parse(left, op, right);
    match invocation.evaluate() {
        Ok(result) => panic!(
            "expected '{}' to error but it returned {}",
            invocation, result
        ),
        Err(err) => assert_eq!(err, expected, "evaluating '{}'", invocation),
    }
}

#[rstest]
#[case("10", "+", "5", 15)]
#[case("10", "-", "5", 5)]
#[case("10", "*", "5", 50)]
#[case("10", "/", "5", 2)]
#[case("-4", "+", "9", 5)]
#[case("3", "-", "10", -7)]
#[case("-6", "*", "-7", 42)]
#[case("-9", "/", "2", -4)]
fn evaluates_supported_operators(
    #[case] left: &str,
    #[case] op: &str,
    #[case] right: &str,
    #[case] expected: i32,
) {
    assert_eval_result(left, op, right, expected);
}

#[test]
fn double_slash_divides() {
    assert_eval_result("20", "//", "4", 5);
}

#[test]
fn malformed_operands_are_zero() {
    assert_eval_result("abc", "+", "5", 5);
    assert_eval_result("7", "*", "xyz", 0);
}

#[rstest]
#[case("%")]
#[case("^")]
#[case("x")]
#[case("%%")]
fn unsupported_operators_are_named(#[case] op: &str) {
    let symbol = op.chars().next().map(String::from).unwrap_or_default();
    assert_eval_error("10", op, "5", CalcError::UnsupportedOperator(symbol));
}

#[test]
fn empty_operator_is_unsupported() {
    assert_eval_error("10", "", "5", CalcError::UnsupportedOperator(String::new()));
}

#[test]
fn unsupported_operator_message() {
    let err = Invocation::parse("10", "%", "5").evaluate().unwrap_err();
    assert_eq!(err.to_string(), "Operator % not available");
}

#[test]
fn division_by_zero_is_reported() {
    assert_eval_error("10", "/", "0", CalcError::DivisionByZero);
    assert_eval_error("10", "/", "nope", CalcError::DivisionByZero);
}

#[test]
fn every_table_entry_round_trips_through_lookup() {
    assert_eq!(OPERATOR_TABLE.len(), 4);
    for op in [
        ArithmeticOp::Add,
        ArithmeticOp::Subtract,
        ArithmeticOp::Multiply,
        ArithmeticOp::Divide,
    ] {
        assert_eq!(lookup(op.symbol()), Some(op));
    }
}
