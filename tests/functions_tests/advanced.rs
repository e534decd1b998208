use super::*;
use approx::assert_relative_eq;

mod fused_multiply_add {
  use super::*;

  #[test]
  fn value() {
    assert_eq!(fma(2.0, 3.0, 4.0), 10.0);
    assert_eq!(fma(-2.0, 3.0, 6.0), 0.0);
  }

  #[test]
  fn single_rounding() {
    // 0.1 * 10.0 rounds to exactly 1.0 when done in two steps
    assert_eq!(0.1 * 10.0 - 1.0, 0.0);
    assert_eq!(fma(0.1, 10.0, -1.0), 5.551115123125783e-17);
  }
}

mod euclidean_norm {
  use super::*;

  #[test]
  fn pythagorean() {
    assert_eq!(hypot(&[3.0, 4.0]).unwrap(), 5.0);
    assert_eq!(hypot(&[-5.0]).unwrap(), 5.0);
    assert_relative_eq!(hypot(&[2.0, 3.0, 6.0]).unwrap(), 7.0, max_relative = 1e-14);
  }

  #[test]
  fn no_intermediate_overflow() {
    let result = hypot(&[1e200, 1e200]).unwrap();
    assert!(result.is_finite());
    assert_relative_eq!(result, 1e200 * std::f64::consts::SQRT_2, max_relative = 1e-15);
  }

  #[test]
  fn no_intermediate_underflow() {
    let result = hypot(&[1e-200, 1e-200]).unwrap();
    assert!(result > 0.0);
    assert_relative_eq!(result, 1e-200 * std::f64::consts::SQRT_2, max_relative = 1e-15);
  }

  #[test]
  fn result_out_of_range() {
    assert_eq!(kind_of(hypot(&[1e308, 1e308])), ErrorKind::Overflow);
  }

  #[test]
  fn special_values() {
    assert_eq!(hypot(&[0.0, 0.0]).unwrap(), 0.0);
    assert_eq!(hypot(&[f64::NAN, f64::INFINITY]).unwrap(), f64::INFINITY);
    assert!(hypot(&[f64::NAN, 1.0]).unwrap().is_nan());
  }

  #[test]
  fn no_components() {
    assert_eq!(kind_of(hypot(&[])), ErrorKind::InvalidInput);
  }
}

mod sign_transfer {
  use super::*;

  #[test]
  fn signed_zeros() {
    assert_eq!(copysign(3.0, -0.0), -3.0);
    assert_eq!(copysign(-3.0, 0.0), 3.0);
    assert!(copysign(0.0, -1.0).is_sign_negative());
  }

  #[test]
  fn nan_payload_kept() {
    let nan = f64::from_bits(0x7ff8_0000_0000_1234);
    assert_eq!(copysign(nan, -1.0).to_bits(), 0xfff8_0000_0000_1234);
  }
}

mod interpolation {
  use super::*;

  #[test]
  fn interior_points() {
    assert_eq!(lerp(0.0, 10.0, 0.5), 5.0);
    assert_eq!(lerp(0.0, 10.0, 0.25), 2.5);
    assert_eq!(lerp(10.0, 20.0, 0.75), 17.5);
  }

  #[test]
  fn extrapolation() {
    assert_eq!(lerp(0.0, 10.0, 2.0), 20.0);
    assert_eq!(lerp(0.0, 10.0, -1.0), -10.0);
  }

  #[test]
  fn exact_endpoints() {
    let cases = [(0.1, 0.7), (-1e300, 1e300), (3.3, -7.9), (1e-310, 2.5)];
    for (a, b) in cases {
      assert_eq!(lerp(a, b, 0.0).to_bits(), f64::to_bits(a));
      assert_eq!(lerp(a, b, 1.0).to_bits(), f64::to_bits(b));
    }
  }

  #[test]
  fn upper_half_anchors_on_b() {
    let (a, b, t) = (0.1, 0.7, 0.9);
    assert_eq!(lerp(a, b, t), b - (1.0 - t) * (b - a));
    assert_eq!(lerp(a, b, 0.3), a + 0.3 * (b - a));
  }

  #[test]
  fn span_beyond_range() {
    assert_eq!(lerp(-f64::MAX, f64::MAX, 0.5), 0.0);
  }
}
