//! Checked arithmetic over `i32`. Every function returns an error
//! instead of wrapping, saturating, or panicking.

use crate::error::MathError;

type MathResult = Result<i32, MathError>;

pub fn add(a: i32, b: i32) -> MathResult {
    a.checked_add(b).ok_or(MathError::Overflow)
}

pub fn sub(a: i32, b: i32) -> MathResult {
    a.checked_sub(b).ok_or(MathError::Overflow)
}

pub fn mul(a: i32, b: i32) -> MathResult {
    a.checked_mul(b).ok_or(MathError::Overflow)
}

/// Checked division. A zero divisor is reported as such; the one
/// remaining failure `checked_div` can hit is `i32::MIN / -1`, which
/// overflows.
pub fn div(a: i32, b: i32) -> MathResult {
    if b == 0 {
        return Err(MathError::DivisionByZero);
    }
    a.checked_div(b).ok_or(MathError::Overflow)
}

/// Iterative exponentiation by repeated checked multiplication.
///
/// A zero exponent yields one for any base, including `pow(0, 0)`.
/// Negative exponents have no `i32` result and are rejected.
pub fn pow(base: i32, exp: i32) -> MathResult {
    if exp < 0 {
        return Err(MathError::NegativeExponent);
    }
    let mut result: i32 = 1;
    for _ in 0..exp {
        result = result.checked_mul(base).ok_or(MathError::Overflow)?;
    }
    Ok(result)
}

/// Iterative factorial. `fact(0)` is 1; negative input is rejected
/// before the loop.
pub fn fact(n: i32) -> MathResult {
    if n < 0 {
        return Err(MathError::NegativeFactorial);
    }
    let mut result: i32 = 1;
    for i in 1..=n {
        result = result.checked_mul(i).ok_or(MathError::Overflow)?;
    }
    Ok(result)
}
