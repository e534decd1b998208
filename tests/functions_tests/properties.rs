use super::*;
use proptest::prelude::*;

proptest! {
  #[test]
  fn half_up_is_symmetric(k in -1_000_000i64..1_000_000) {
    let x = k as f64 + 0.5;
    prop_assert_eq!(round_half_up(-x, 0), -round_half_up(x, 0));
  }

  #[test]
  fn half_even_lands_on_even(k in -1_000_000i64..1_000_000) {
    let rounded = round_half_even(k as f64 + 0.5, 0);
    prop_assert_eq!(rounded % 2.0, 0.0);
  }

  #[test]
  fn nth_root_inverts_power(x in 1e-6f64..1e6, n in 1u32..=10) {
    let r = nth_root(x, n).unwrap();
    let back = r.powi(n as i32);
    prop_assert!((back - x).abs() <= 1e-9 * x, "{}^{} = {}", r, n, back);
  }

  #[test]
  fn odd_root_keeps_sign(x in 1e-3f64..1e6, n in (0u32..5).prop_map(|k| 2 * k + 1)) {
    prop_assert_eq!(nth_root(-x, n).unwrap(), -nth_root(x, n).unwrap());
  }

  #[test]
  fn newton_within_tolerance(v in 1e-6f64..1e12) {
    let root = sqrt_newton(v, DEFAULT_MAX_ITERATIONS, DEFAULT_NEWTON_TOLERANCE).unwrap();
    prop_assert!((root - v.sqrt()).abs() <= DEFAULT_NEWTON_TOLERANCE);
  }

  #[test]
  fn prime_factors_multiply_back(n in 1i64..1_000_000) {
    let factors = prime_factors(n).unwrap();
    prop_assert_eq!(factors.iter().product::<i64>(), n);
    for f in factors {
      prop_assert!(is_prime(f).unwrap());
    }
  }

  #[test]
  fn totient_is_multiplicative(a in 1i64..5000, b in 1i64..5000) {
    prop_assume!(are_coprime(a, b));
    prop_assert_eq!(totient(a * b).unwrap(), totient(a).unwrap() * totient(b).unwrap());
  }

  #[test]
  fn lerp_endpoints_exact(a in -1e300f64..1e300, b in -1e300f64..1e300) {
    prop_assert_eq!(lerp(a, b, 0.0).to_bits(), a.to_bits());
    prop_assert_eq!(lerp(a, b, 1.0).to_bits(), b.to_bits());
  }

  #[test]
  fn is_close_is_symmetric(a in -1e6f64..1e6, b in -1e6f64..1e6) {
    let tol = Tolerance::default();
    prop_assert_eq!(tol.is_close(a, b), tol.is_close(b, a));
  }

  #[test]
  fn compare_is_antisymmetric(a in -1e6f64..1e6, b in -1e6f64..1e6) {
    prop_assert_eq!(
      compare(a, b, DEFAULT_TOLERANCE).unwrap(),
      -compare(b, a, DEFAULT_TOLERANCE).unwrap()
    );
  }
}
