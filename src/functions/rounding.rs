//! Directional rounding and the two tie-breaking strategies.
//!
//! Every strategy can work at a decimal granularity: `decimals = 2` rounds
//! to hundredths, `decimals = -1` to tens.

use crate::MathError;
use std::fmt;
use std::str::FromStr;

/// Default decimal places for the rounding functions.
pub const DEFAULT_DECIMALS: i32 = 0;

/// Rounding strategy selected per call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoundingMethod {
  /// Ties to the nearest even digit (banker's rounding).
  #[default]
  HalfEven,
  /// Ties away from zero.
  HalfUp,
  Floor,
  Ceil,
  Trunc,
}

impl RoundingMethod {
  pub const ALL: [RoundingMethod; 5] = [
    RoundingMethod::HalfEven,
    RoundingMethod::HalfUp,
    RoundingMethod::Floor,
    RoundingMethod::Ceil,
    RoundingMethod::Trunc,
  ];

  pub fn as_str(self) -> &'static str {
    match self {
      RoundingMethod::HalfEven => "half_even",
      RoundingMethod::HalfUp => "half_up",
      RoundingMethod::Floor => "floor",
      RoundingMethod::Ceil => "ceil",
      RoundingMethod::Trunc => "trunc",
    }
  }
}

impl fmt::Display for RoundingMethod {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for RoundingMethod {
  type Err = MathError;

  /// Case-insensitive; `half-up` is accepted for `half_up`.
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
    RoundingMethod::ALL
      .into_iter()
      .find(|m| m.as_str() == normalized)
      .ok_or_else(|| {
        MathError::InvalidInput(format!(
          "Unknown rounding method: '{s}'. Valid methods: 'half_even', \
           'half_up', 'floor', 'ceil', 'trunc'"
        ))
      })
  }
}

/// Round toward negative infinity. NaN and infinities are returned as is.
pub fn floor(value: f64) -> f64 {
  value.floor()
}

/// Round toward positive infinity. NaN and infinities are returned as is.
pub fn ceil(value: f64) -> f64 {
  value.ceil()
}

/// Round toward zero. NaN and infinities are returned as is.
pub fn trunc(value: f64) -> f64 {
  value.trunc()
}

/// Apply `round` to `value` scaled by `10^decimals` and scale back.
///
/// Negative `decimals` divide by the exact power of ten instead of
/// multiplying by an inexact `0.1^k`. If scaling overflows, the value is
/// already coarser than the requested precision and is returned unchanged.
fn at_decimals(value: f64, decimals: i32, round: impl Fn(f64) -> f64) -> f64 {
  if !value.is_finite() {
    return value;
  }
  if decimals == 0 {
    return round(value);
  }
  let factor = 10f64.powi(decimals.saturating_abs());
  if !factor.is_finite() {
    return if decimals > 0 { value } else { round(value / factor) };
  }
  if decimals > 0 {
    let scaled = value * factor;
    if !scaled.is_finite() {
      return value;
    }
    round(scaled) / factor
  } else {
    round(value / factor) * factor
  }
}

fn half_up(scaled: f64) -> f64 {
  if scaled >= 0.0 {
    let low = scaled.floor();
    if scaled - low >= 0.5 {
      low + 1.0
    } else {
      low
    }
  } else {
    let high = scaled.ceil();
    if high - scaled >= 0.5 {
      high - 1.0
    } else {
      high
    }
  }
}

/// Round half away from zero: `2.5 -> 3`, `-2.5 -> -3`.
pub fn round_half_up(value: f64, decimals: i32) -> f64 {
  at_decimals(value, decimals, half_up)
}

/// Round half to even: `2.5 -> 2`, `3.5 -> 4`.
pub fn round_half_even(value: f64, decimals: i32) -> f64 {
  at_decimals(value, decimals, f64::round_ties_even)
}

/// Typed form of [`round_to_digits`].
pub fn round_with(value: f64, decimals: i32, method: RoundingMethod) -> f64 {
  match method {
    RoundingMethod::HalfEven => round_half_even(value, decimals),
    RoundingMethod::HalfUp => round_half_up(value, decimals),
    RoundingMethod::Floor => at_decimals(value, decimals, floor),
    RoundingMethod::Ceil => at_decimals(value, decimals, ceil),
    RoundingMethod::Trunc => at_decimals(value, decimals, trunc),
  }
}

/// Round with the strategy named by `method` (`half_even`, `half_up`,
/// `floor`, `ceil`, `trunc`).
pub fn round_to_digits(
  value: f64,
  decimals: i32,
  method: &str,
) -> Result<f64, MathError> {
  let method = method.parse::<RoundingMethod>()?;
  Ok(round_with(value, decimals, method))
}
