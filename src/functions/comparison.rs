//! Tolerance-based floating-point comparison.
//!
//! Direct equality fails for values like `0.1 + 0.2` and `0.3`; these
//! functions combine a relative tolerance (for large magnitudes) with an
//! absolute one (for values near zero).

use crate::MathError;
use std::cmp::Ordering;

/// Default relative and absolute tolerance.
pub const DEFAULT_TOLERANCE: f64 = 1e-9;

/// A validated `(relative, absolute)` tolerance pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance {
  relative: f64,
  absolute: f64,
}

impl Default for Tolerance {
  fn default() -> Self {
    Self {
      relative: DEFAULT_TOLERANCE,
      absolute: DEFAULT_TOLERANCE,
    }
  }
}

fn check_bound(name: &str, value: f64) -> Result<f64, MathError> {
  if value.is_nan() || value < 0.0 {
    return Err(MathError::InvalidInput(format!(
      "{name} must be a non-negative number, got {value}"
    )));
  }
  Ok(value)
}

impl Tolerance {
  pub fn new(relative: f64, absolute: f64) -> Result<Self, MathError> {
    Ok(Self {
      relative: check_bound("rel_tol", relative)?,
      absolute: check_bound("abs_tol", absolute)?,
    })
  }

  /// Same value for both bounds, as used by [`compare`].
  pub fn uniform(tolerance: f64) -> Result<Self, MathError> {
    Self::new(tolerance, tolerance)
  }

  pub fn relative(&self) -> f64 {
    self.relative
  }

  pub fn absolute(&self) -> f64 {
    self.absolute
  }

  /// NaN is never close to anything; an infinity is only close to itself.
  pub fn is_close(&self, a: f64, b: f64) -> bool {
    if a.is_nan() || b.is_nan() {
      return false;
    }
    if a.is_infinite() || b.is_infinite() {
      return a == b;
    }
    let diff = (a - b).abs();
    diff <= (self.relative * a.abs().max(b.abs())).max(self.absolute)
  }

  /// Uses the absolute bound only.
  pub fn is_zero(&self, value: f64) -> bool {
    !value.is_nan() && value.abs() <= self.absolute
  }

  /// Three-way comparison treating close values as equal.
  pub fn compare(&self, a: f64, b: f64) -> Result<Ordering, MathError> {
    if a.is_nan() || b.is_nan() {
      return Err(MathError::InvalidInput(
        "Cannot order NaN values".into(),
      ));
    }
    if self.is_close(a, b) {
      return Ok(Ordering::Equal);
    }
    Ok(if a < b { Ordering::Less } else { Ordering::Greater })
  }
}

/// `|a-b| <= max(rel_tol * max(|a|,|b|), abs_tol)`.
pub fn is_close(
  a: f64,
  b: f64,
  rel_tol: f64,
  abs_tol: f64,
) -> Result<bool, MathError> {
  Ok(Tolerance::new(rel_tol, abs_tol)?.is_close(a, b))
}

/// `|value| <= tolerance`.
pub fn is_zero(value: f64, tolerance: f64) -> Result<bool, MathError> {
  Ok(Tolerance::new(0.0, tolerance)?.is_zero(value))
}

/// -1, 0 or 1; 0 whenever `a` and `b` are close under `tolerance` used as
/// both the relative and the absolute bound.
pub fn compare(a: f64, b: f64, tolerance: f64) -> Result<i32, MathError> {
  let ordering = Tolerance::uniform(tolerance)?.compare(a, b)?;
  Ok(ordering as i32)
}
