//! Exponential and logarithms with explicit domain checks.

use crate::MathError;

fn require_positive(value: f64, what: &str) -> Result<(), MathError> {
  // NaN passes through and propagates
  if value <= 0.0 {
    return Err(MathError::InvalidInput(format!(
      "{what} undefined for non-positive values: {value}"
    )));
  }
  Ok(())
}

/// `e^value`. `exp(-inf) == 0`, `exp(+inf) == +inf`.
pub fn exp(value: f64) -> Result<f64, MathError> {
  let result = value.exp();
  if result.is_infinite() && value.is_finite() {
    return Err(MathError::Overflow(format!(
      "Exponential overflow: exp({value})"
    )));
  }
  Ok(result)
}

/// Natural logarithm.
pub fn ln(value: f64) -> Result<f64, MathError> {
  require_positive(value, "Natural logarithm")?;
  Ok(value.ln())
}

/// Base-2 logarithm, exact at powers of two.
pub fn log2(value: f64) -> Result<f64, MathError> {
  require_positive(value, "Base-2 logarithm")?;
  Ok(value.log2())
}

/// Base-10 logarithm, exact at powers of ten.
pub fn log10(value: f64) -> Result<f64, MathError> {
  require_positive(value, "Base-10 logarithm")?;
  Ok(value.log10())
}

/// Logarithm of `value` in an arbitrary `base` via `ln(value) / ln(base)`.
///
/// Bases 2, 10 and e use the dedicated functions.
pub fn log(value: f64, base: f64) -> Result<f64, MathError> {
  if base <= 0.0 || base == 1.0 {
    return Err(MathError::InvalidInput(format!(
      "Logarithm base must be positive and not 1, got {base}"
    )));
  }
  require_positive(value, "Logarithm")?;
  if base == 2.0 {
    return Ok(value.log2());
  }
  if base == 10.0 {
    return Ok(value.log10());
  }
  if base == std::f64::consts::E {
    return Ok(value.ln());
  }
  Ok(value.ln() / base.ln())
}
