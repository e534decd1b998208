//! Safe arithmetic with an explicit edge-case policy.
//!
//! Unlike the raw operators, these functions reject NaN operands and report
//! a finite computation that leaves the representable range as
//! [`MathError::Overflow`] instead of silently producing an infinity.

use crate::MathError;
use num_bigint::{BigInt, BigUint};
use num_traits::{One, Signed, Zero};

/// Largest finite `f64`.
pub const FLOAT_MAX: f64 = f64::MAX;
/// Smallest positive normal `f64`.
pub const FLOAT_MIN: f64 = f64::MIN_POSITIVE;
/// Difference between 1.0 and the next representable `f64`.
pub const EPSILON: f64 = f64::EPSILON;

fn reject_nan(op: &str, a: f64, b: f64) -> Result<(), MathError> {
  if a.is_nan() || b.is_nan() {
    return Err(MathError::InvalidInput(format!(
      "Cannot {op} NaN values"
    )));
  }
  Ok(())
}

/// Infinite result from finite operands means the true value left the
/// `f64` range.
fn check_overflow(
  result: f64,
  a: f64,
  b: f64,
  symbol: &str,
  label: &str,
) -> Result<f64, MathError> {
  if result.is_infinite() && a.is_finite() && b.is_finite() {
    return Err(MathError::Overflow(format!(
      "{label} overflow: {a} {symbol} {b}"
    )));
  }
  Ok(result)
}

/// `a + b`, failing on NaN operands and on overflow.
pub fn safe_add(a: f64, b: f64) -> Result<f64, MathError> {
  reject_nan("add", a, b)?;
  check_overflow(a + b, a, b, "+", "Addition")
}

/// `a - b`, failing on NaN operands and on overflow.
pub fn safe_subtract(a: f64, b: f64) -> Result<f64, MathError> {
  reject_nan("subtract", a, b)?;
  check_overflow(a - b, a, b, "-", "Subtraction")
}

/// `a * b`, failing on NaN operands and on overflow.
pub fn safe_multiply(a: f64, b: f64) -> Result<f64, MathError> {
  reject_nan("multiply", a, b)?;
  check_overflow(a * b, a, b, "*", "Multiplication")
}

/// `a / b`. A zero divisor (either sign) is an error rather than an
/// infinity; infinite operands otherwise follow IEEE-754.
pub fn safe_divide(a: f64, b: f64) -> Result<f64, MathError> {
  reject_nan("divide", a, b)?;
  if b == 0.0 {
    return Err(MathError::DivisionByZero("Division by zero".into()));
  }
  check_overflow(a / b, a, b, "/", "Division")
}

/// `base ^ exponent`.
///
/// Zero raised to a negative power is a division by zero; a negative base
/// with a fractional exponent has no real result and is rejected.
pub fn safe_power(base: f64, exponent: f64) -> Result<f64, MathError> {
  if base.is_nan() || exponent.is_nan() {
    return Err(MathError::InvalidInput(
      "Cannot compute power with NaN values".into(),
    ));
  }
  if base == 0.0 && exponent < 0.0 {
    return Err(MathError::DivisionByZero(format!(
      "Zero cannot be raised to a negative power: {base}^{exponent}"
    )));
  }
  let result = base.powf(exponent);
  if result.is_nan() {
    return Err(MathError::InvalidInput(format!(
      "Invalid power operation: {base}^{exponent}"
    )));
  }
  if result.is_infinite() && base.is_finite() && exponent.is_finite() {
    return Err(MathError::Overflow(format!(
      "Power overflow: {base}^{exponent}"
    )));
  }
  Ok(result)
}

/// Square root with a domain check. `-0.0` is not negative and maps to
/// `-0.0`; `+inf` maps to `+inf`.
pub fn safe_sqrt(value: f64) -> Result<f64, MathError> {
  if value.is_nan() {
    return Err(MathError::InvalidInput(
      "Cannot compute square root of NaN".into(),
    ));
  }
  if value < 0.0 {
    return Err(MathError::InvalidInput(format!(
      "Cannot compute square root of negative number: {value}"
    )));
  }
  Ok(value.sqrt())
}

/// Floored modulo: the remainder carries the sign of the divisor
/// (`-7 mod 3 == 2`, `7 mod -3 == -2`).
pub fn safe_mod(a: f64, b: f64) -> Result<f64, MathError> {
  reject_nan("compute modulo with", a, b)?;
  if b == 0.0 {
    return Err(MathError::DivisionByZero("Modulo by zero".into()));
  }
  let mut r = a % b;
  if r != 0.0 && (r < 0.0) != (b < 0.0) {
    r += b;
  }
  Ok(r)
}

/// `n!` in arbitrary precision.
pub fn factorial(n: i64) -> Result<BigUint, MathError> {
  if n < 0 {
    return Err(MathError::InvalidInput(
      "Factorial undefined for negative numbers".into(),
    ));
  }
  let mut result = BigUint::one();
  for i in 2..=n as u64 {
    result *= i;
  }
  Ok(result)
}

/// Greatest common divisor by the Euclidean algorithm. Always
/// non-negative; `gcd(0, 0) == 0`.
pub fn gcd(a: &BigInt, b: &BigInt) -> BigInt {
  let (mut a, mut b) = (a.abs(), b.abs());
  while !b.is_zero() {
    let t = &a % &b;
    a = b;
    b = t;
  }
  a
}

/// Least common multiple, `|a*b| / gcd(a, b)`. Zero if either argument is
/// zero.
pub fn lcm(a: &BigInt, b: &BigInt) -> BigInt {
  if a.is_zero() || b.is_zero() {
    return BigInt::zero();
  }
  // divide first to keep the intermediate small
  (a.abs() / gcd(a, b)) * b.abs()
}

/// Clamp `value` into `[min_val, max_val]`.
pub fn clamp(value: f64, min_val: f64, max_val: f64) -> Result<f64, MathError> {
  if min_val.is_nan() || max_val.is_nan() {
    return Err(MathError::InvalidInput("Clamp bounds cannot be NaN".into()));
  }
  if min_val > max_val {
    return Err(MathError::InvalidInput(format!(
      "min_val ({min_val}) cannot be greater than max_val ({max_val})"
    )));
  }
  if value.is_nan() {
    return Ok(value);
  }
  Ok(value.max(min_val).min(max_val))
}

/// -1, 0 or 1. Both signed zeros give 0.
pub fn sign(value: f64) -> Result<i32, MathError> {
  if value.is_nan() {
    return Err(MathError::InvalidInput("Sign of NaN is undefined".into()));
  }
  Ok(if value > 0.0 {
    1
  } else if value < 0.0 {
    -1
  } else {
    0
  })
}

/// Absolute value; `-0.0` becomes `+0.0`, NaN stays NaN.
pub fn abs_value(value: f64) -> f64 {
  value.abs()
}

/// Convert a float that must hold an exact integer.
///
/// Used wherever a caller hands a float to an integer-only operation
/// (factorial, number theory): NaN, infinities, fractional parts and values
/// outside the `i64` range are all rejected.
pub fn as_integer(value: f64) -> Result<i64, MathError> {
  if !value.is_finite() {
    return Err(MathError::InvalidInput(format!(
      "Expected an integer, got {value}"
    )));
  }
  if value.fract() != 0.0 {
    return Err(MathError::InvalidInput(format!(
      "Expected an integer, got non-integer value {value}"
    )));
  }
  // 2^63 itself is not representable as i64
  if value < -9_223_372_036_854_775_808.0 || value >= 9_223_372_036_854_775_808.0
  {
    return Err(MathError::InvalidInput(format!(
      "Integer out of range: {value}"
    )));
  }
  Ok(value as i64)
}
