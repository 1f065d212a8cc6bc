use rpcalc_core::{Calculation, MathError, Op};

fn evaluate(calculation: Calculation) -> Result<String, MathError> {
    calculation.check()?;
    let outcome = calculation.evaluate()?;
    Ok(outcome.to_string())
}

#[test]
fn binary_operations_format_their_results() {
    assert_eq!(
        evaluate(Calculation::binary(2, 3, Op::Add)),
        Ok("2 + 3 = 5".to_string())
    );
    assert_eq!(
        evaluate(Calculation::binary(2, -3, Op::Subtract)),
        Ok("2 - -3 = 5".to_string())
    );
    assert_eq!(
        evaluate(Calculation::binary(6, 7, Op::Multiply)),
        Ok("6 x 7 = 42".to_string())
    );
    assert_eq!(
        evaluate(Calculation::binary(7, 2, Op::Divide)),
        Ok("7 / 2 = 3".to_string())
    );
}

#[test]
fn power_and_factorial_use_their_own_templates() {
    assert_eq!(
        evaluate(Calculation::binary(2, 8, Op::Power)),
        Ok("2^8 = 256".to_string())
    );
    assert_eq!(
        evaluate(Calculation::unary(5, Op::Factorial)),
        Ok("fact(5) = 120".to_string())
    );
    assert_eq!(
        evaluate(Calculation::unary(0, Op::Factorial)),
        Ok("fact(0) = 1".to_string())
    );
}

#[test]
fn check_rejects_bad_operands_before_evaluation() {
    assert_eq!(
        Calculation::binary(5, 0, Op::Divide).check(),
        Err(MathError::DivisionByZero)
    );
    assert_eq!(
        Calculation::binary(2, -1, Op::Power).check(),
        Err(MathError::NegativeExponent)
    );
    assert_eq!(
        Calculation::unary(-3, Op::Factorial).check(),
        Err(MathError::NegativeFactorial)
    );
    assert_eq!(Calculation::binary(5, -1, Op::Divide).check(), Ok(()));
}

#[test]
fn evaluation_reports_overflow() {
    assert_eq!(
        evaluate(Calculation::binary(i32::MAX, 1, Op::Add)),
        Err(MathError::Overflow)
    );
    assert_eq!(
        evaluate(Calculation::binary(i32::MIN, -1, Op::Divide)),
        Err(MathError::Overflow)
    );
    assert_eq!(
        evaluate(Calculation::unary(13, Op::Factorial)),
        Err(MathError::Overflow)
    );
}

#[test]
fn operators_map_to_and_from_their_characters() {
    for (char, op) in [
        ('+', Op::Add),
        ('-', Op::Subtract),
        ('x', Op::Multiply),
        ('/', Op::Divide),
        ('^', Op::Power),
        ('!', Op::Factorial),
    ] {
        assert_eq!(Op::from_char(char), Some(op));
        assert_eq!(op.symbol(), char);
    }
    assert_eq!(Op::from_char('*'), None);
    assert_eq!(Op::from_char('%'), None);
}
