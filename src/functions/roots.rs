//! Real roots: general nth root, cube root, and a Newton–Raphson square
//! root solver that exposes its iteration.

use super::arithmetic::abs_value;
use crate::MathError;

pub const DEFAULT_MAX_ITERATIONS: u32 = 50;
pub const DEFAULT_NEWTON_TOLERANCE: f64 = 1e-10;

/// Stopping rule for [`sqrt_newton_report`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewtonOptions {
  /// Hard cap on iterations; the solver always terminates.
  pub max_iterations: u32,
  /// Stop once two successive iterates differ by less than this.
  pub tolerance: f64,
}

impl Default for NewtonOptions {
  fn default() -> Self {
    Self {
      max_iterations: DEFAULT_MAX_ITERATIONS,
      tolerance: DEFAULT_NEWTON_TOLERANCE,
    }
  }
}

impl NewtonOptions {
  fn validate(&self) -> Result<(), MathError> {
    if self.max_iterations == 0 {
      return Err(MathError::InvalidInput(
        "max_iterations must be at least 1".into(),
      ));
    }
    if !(self.tolerance > 0.0) {
      return Err(MathError::InvalidInput(format!(
        "tolerance must be positive, got {}",
        self.tolerance
      )));
    }
    Ok(())
  }
}

/// Outcome of a Newton square-root run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewtonReport {
  pub root: f64,
  /// Number of Newton updates performed.
  pub iterations: u32,
  /// False when the iteration cap was hit before the stopping rule fired.
  pub converged: bool,
}

/// Real `n`th root of `value`.
///
/// Odd roots of negative numbers are negative; even roots of negative
/// numbers do not exist and are rejected. NaN propagates.
pub fn nth_root(value: f64, n: u32) -> Result<f64, MathError> {
  if n == 0 {
    return Err(MathError::InvalidInput("Root degree must be positive".into()));
  }
  if value.is_nan() {
    return Ok(value);
  }
  if n % 2 == 0 && value < 0.0 {
    return Err(MathError::InvalidInput(format!(
      "Even root of negative number has no real value: {value}"
    )));
  }
  match n {
    1 => return Ok(value),
    2 => return Ok(value.sqrt()),
    3 => return Ok(cbrt(value)),
    _ => {}
  }

  let magnitude = abs_value(value);
  let mut root = magnitude.powf(1.0 / f64::from(n));

  // one Newton step on r^n = magnitude absorbs the error of the inexact 1/n;
  // degrees beyond i32 skip it: powf alone is accurate that close to 1.0
  if let Ok(exp) = i32::try_from(n) {
    if root.is_finite() && root > 0.0 {
      let below = root.powi(exp - 1);
      let power = below * root;
      if power.is_finite() && below.is_normal() {
        let polished = root - (power - magnitude) / (f64::from(n) * below);
        if polished.is_finite() && polished > 0.0 {
          root = polished;
        }
      }
    }
  }

  Ok(root.copysign(value))
}

/// Cube root, defined for every real and sign preserving.
pub fn cbrt(value: f64) -> f64 {
  value.cbrt()
}

/// Initial guess: a power of two at or above `sqrt(value)`, so the iterates
/// decrease monotonically toward the root.
fn initial_guess(value: f64) -> f64 {
  let half_exponent = (value.log2() / 2.0).ceil();
  let guess = 2f64.powi(half_exponent as i32);
  if guess.is_finite() && guess > 0.0 {
    guess
  } else if value >= 1.0 {
    value / 2.0
  } else {
    1.0
  }
}

/// Pick whichever of `x` and its two neighbours has the smallest residual
/// `c*c - value`, computed with a single rounding.
fn nearest_root(x: f64, value: f64) -> f64 {
  if !x.is_normal() || x < 0.0 {
    return x;
  }
  let bits = x.to_bits();
  let residual = |c: f64| c.mul_add(c, -value).abs();
  [f64::from_bits(bits - 1), f64::from_bits(bits + 1)]
    .into_iter()
    .filter(|c| c.is_finite())
    .fold(x, |best, c| if residual(c) < residual(best) { c } else { best })
}

/// Newton–Raphson square root, returning the iteration details.
///
/// The converged iterate is moved by at most one ulp to the neighbour whose
/// square is nearest to `value`, which removes the final rounding error of
/// the update.
pub fn sqrt_newton_report(
  value: f64,
  options: &NewtonOptions,
) -> Result<NewtonReport, MathError> {
  options.validate()?;
  if value < 0.0 {
    return Err(MathError::InvalidInput(format!(
      "Cannot compute square root of negative number: {value}"
    )));
  }
  if value == 0.0 || value.is_nan() || value.is_infinite() {
    return Ok(NewtonReport {
      root: value,
      iterations: 0,
      converged: true,
    });
  }

  let mut x = initial_guess(value);
  for iteration in 1..=options.max_iterations {
    let next = 0.5 * (x + value / x);
    let step = (next - x).abs();
    // the second test catches iterates stuck one ulp apart
    if step < options.tolerance || step <= f64::EPSILON * next {
      return Ok(NewtonReport {
        root: nearest_root(next, value),
        iterations: iteration,
        converged: true,
      });
    }
    x = next;
  }

  Ok(NewtonReport {
    root: x,
    iterations: options.max_iterations,
    converged: false,
  })
}

/// Newton–Raphson square root with an explicit iteration cap and tolerance.
pub fn sqrt_newton(
  value: f64,
  max_iterations: u32,
  tolerance: f64,
) -> Result<f64, MathError> {
  let options = NewtonOptions {
    max_iterations,
    tolerance,
  };
  sqrt_newton_report(value, &options).map(|r| r.root)
}

/// Exact `floor(sqrt(n))`, correcting the float estimate where `f64`
/// cannot represent `n`.
pub fn integer_sqrt(n: u64) -> u64 {
  if n < 2 {
    return n;
  }
  let mut r = (n as f64).sqrt() as u64;
  while r.checked_mul(r).map_or(true, |sq| sq > n) {
    r -= 1;
  }
  while (r + 1).checked_mul(r + 1).is_some_and(|sq| sq <= n) {
    r += 1;
  }
  r
}
