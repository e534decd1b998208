use super::*;
use std::cmp::Ordering;

mod closeness {
  use super::*;

  #[test]
  fn float_sum() {
    assert!(is_close(0.1 + 0.2, 0.3, DEFAULT_TOLERANCE, DEFAULT_TOLERANCE).unwrap());
    assert!(is_close(1.0, 1.0000000001, DEFAULT_TOLERANCE, DEFAULT_TOLERANCE).unwrap());
    assert!(!is_close(1.0, 2.0, DEFAULT_TOLERANCE, DEFAULT_TOLERANCE).unwrap());
  }

  #[test]
  fn relative_bound_scales() {
    assert!(is_close(1e12, 1e12 + 1.0, 1e-9, 0.0).unwrap());
    assert!(!is_close(1e-12, 2e-12, 1e-9, 0.0).unwrap());
    assert!(is_close(1.0, 1.01, 0.02, 0.0).unwrap());
  }

  #[test]
  fn absolute_bound_near_zero() {
    assert!(is_close(0.0, 1e-10, 0.0, 1e-9).unwrap());
    assert!(!is_close(0.0, 1e-8, 0.0, 1e-9).unwrap());
  }

  #[test]
  fn special_values() {
    let tol = Tolerance::default();
    assert!(!tol.is_close(f64::NAN, f64::NAN));
    assert!(tol.is_close(f64::INFINITY, f64::INFINITY));
    assert!(!tol.is_close(f64::INFINITY, f64::NEG_INFINITY));
    assert!(!tol.is_close(f64::INFINITY, f64::MAX));
  }

  #[test]
  fn negative_tolerance() {
    assert_eq!(kind_of(is_close(1.0, 1.0, -1.0, 0.0)), ErrorKind::InvalidInput);
    assert_eq!(kind_of(is_close(1.0, 1.0, 0.0, f64::NAN)), ErrorKind::InvalidInput);
  }
}

mod zero_check {
  use super::*;

  #[test]
  fn values() {
    assert!(is_zero(0.0, DEFAULT_TOLERANCE).unwrap());
    assert!(is_zero(-0.0, DEFAULT_TOLERANCE).unwrap());
    assert!(is_zero(1e-15, DEFAULT_TOLERANCE).unwrap());
    assert!(!is_zero(0.001, DEFAULT_TOLERANCE).unwrap());
    assert!(is_zero(0.01, 0.1).unwrap());
  }

  #[test]
  fn nan_is_not_zero() {
    assert!(!is_zero(f64::NAN, DEFAULT_TOLERANCE).unwrap());
  }

  #[test]
  fn negative_tolerance() {
    assert_eq!(kind_of(is_zero(0.0, -1e-9)), ErrorKind::InvalidInput);
  }
}

mod three_way {
  use super::*;

  #[test]
  fn ordering() {
    assert_eq!(compare(5.0, 3.0, DEFAULT_TOLERANCE).unwrap(), 1);
    assert_eq!(compare(3.0, 5.0, DEFAULT_TOLERANCE).unwrap(), -1);
    assert_eq!(compare(3.0, 3.0, DEFAULT_TOLERANCE).unwrap(), 0);
  }

  #[test]
  fn close_values_are_equal() {
    assert_eq!(compare(3.0, 3.0000000001, DEFAULT_TOLERANCE).unwrap(), 0);
    assert_eq!(compare(1.0, 2.0, 2.0).unwrap(), 0);
  }

  #[test]
  fn nan_cannot_be_ordered() {
    assert_eq!(kind_of(compare(f64::NAN, 1.0, DEFAULT_TOLERANCE)), ErrorKind::InvalidInput);
  }

  #[test]
  fn tolerance_struct() {
    let tol = Tolerance::uniform(0.5).unwrap();
    assert_eq!(tol.relative(), 0.5);
    assert_eq!(tol.absolute(), 0.5);
    assert_eq!(tol.compare(1.0, 1.2).unwrap(), Ordering::Equal);
    assert_eq!(tol.compare(-10.0, 10.0).unwrap(), Ordering::Less);
    assert!(Tolerance::new(-0.1, 0.0).is_err());
  }
}
