//! Fused multiply-add, overflow-safe norms, sign transfer and linear
//! interpolation.

use crate::MathError;

/// `a * b + c` with a single rounding.
///
/// `f64::mul_add` is fused on every target: it lowers to the hardware
/// instruction where one exists and to a correctly rounded software
/// routine otherwise.
pub fn fma(a: f64, b: f64, c: f64) -> f64 {
  a.mul_add(b, c)
}

/// Euclidean norm `sqrt(Σ vᵢ²)` of any number of components.
///
/// Components are divided by the largest magnitude before squaring, so
/// `hypot(&[1e200, 1e200])` stays finite. An infinite component makes the
/// result `+inf` even if another is NaN.
pub fn hypot(values: &[f64]) -> Result<f64, MathError> {
  if values.is_empty() {
    return Err(MathError::InvalidInput(
      "hypot requires at least one value".into(),
    ));
  }
  if values.iter().any(|v| v.is_infinite()) {
    return Ok(f64::INFINITY);
  }
  if values.iter().any(|v| v.is_nan()) {
    return Ok(f64::NAN);
  }

  let max = values.iter().fold(0.0_f64, |m, v| m.max(v.abs()));
  if max == 0.0 {
    return Ok(0.0);
  }

  let sum: f64 = values
    .iter()
    .map(|v| {
      let scaled = v / max;
      scaled * scaled
    })
    .sum();
  let result = max * sum.sqrt();
  if result.is_infinite() {
    return Err(MathError::Overflow(format!(
      "Norm exceeds the representable range: hypot({values:?})"
    )));
  }
  Ok(result)
}

/// `|magnitude|` carrying the sign bit of `sign`. Signed zeros are
/// distinguished and a NaN magnitude keeps its payload.
pub fn copysign(magnitude: f64, sign: f64) -> f64 {
  magnitude.copysign(sign)
}

/// Linear interpolation between `a` and `b`, exact at both endpoints.
///
/// For `t < 0.5` this evaluates `a + t*(b - a)`; for `t >= 0.5` it evaluates
/// `b - (1 - t)*(b - a)`, so results there can differ by an ulp from the
/// textbook `a + t*(b - a)`. `t` outside `[0, 1]` extrapolates.
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
  if t == 0.0 {
    return a;
  }
  if t == 1.0 {
    return b;
  }
  let span = b - a;
  if span.is_infinite() && a.is_finite() && b.is_finite() {
    return a * (1.0 - t) + b * t;
  }
  // anchor on the nearer endpoint
  if t < 0.5 {
    a + t * span
  } else {
    b - (1.0 - t) * span
  }
}
