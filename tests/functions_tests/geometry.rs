use super::*;
use approx::assert_relative_eq;
use std::f64::consts::{PI, SQRT_2};

mod circle {
  use super::*;

  #[test]
  fn measurements() {
    let c = Circle::new(5.0).unwrap();
    assert_relative_eq!(c.area(), 78.53981633974483);
    assert_relative_eq!(c.circumference(), 10.0 * PI);
    assert_eq!(c.diameter(), 10.0);
    assert_eq!(c.radius(), 5.0);
  }

  #[test]
  fn invalid_radius() {
    assert_eq!(kind_of(Circle::new(-1.0)), ErrorKind::InvalidInput);
    assert_eq!(kind_of(Circle::new(f64::NAN)), ErrorKind::InvalidInput);
  }
}

mod rectangle {
  use super::*;

  #[test]
  fn measurements() {
    let r = Rectangle::new(4.0, 3.0).unwrap();
    assert_eq!(r.area(), 12.0);
    assert_eq!(r.perimeter(), 14.0);
    assert_eq!(r.diagonal().unwrap(), 5.0);
    assert!(!r.is_square());
  }

  #[test]
  fn square_rectangle() {
    assert!(Rectangle::new(2.0, 2.0).unwrap().is_square());
  }

  #[test]
  fn invalid_sides() {
    assert_eq!(kind_of(Rectangle::new(-1.0, 2.0)), ErrorKind::InvalidInput);
  }
}

mod square {
  use super::*;

  #[test]
  fn measurements() {
    let s = Square::new(2.0).unwrap();
    assert_eq!(s.area(), 4.0);
    assert_eq!(s.perimeter(), 8.0);
    assert_relative_eq!(s.diagonal(), 2.0 * SQRT_2);
  }
}

mod triangle {
  use super::*;

  #[test]
  fn right_triangle() {
    let t = Triangle::new(3.0, 4.0, 5.0).unwrap();
    assert_relative_eq!(t.area(), 6.0);
    assert_eq!(t.perimeter(), 12.0);
    assert!(t.is_right_triangle());
    assert_eq!(t.triangle_type(), TriangleKind::Scalene);
  }

  #[test]
  fn side_order_does_not_matter() {
    assert!(Triangle::new(5.0, 3.0, 4.0).unwrap().is_right_triangle());
  }

  #[test]
  fn classification() {
    let equilateral = Triangle::new(2.0, 2.0, 2.0).unwrap();
    assert!(equilateral.is_equilateral());
    assert_eq!(equilateral.triangle_type(), TriangleKind::Equilateral);
    assert_eq!(
      Triangle::new(2.0, 2.0, 3.0).unwrap().triangle_type().to_string(),
      "isosceles"
    );
  }

  #[test]
  fn degenerate_sides() {
    assert_eq!(kind_of(Triangle::new(1.0, 2.0, 3.0)), ErrorKind::InvalidInput);
    assert_eq!(kind_of(Triangle::new(0.0, 1.0, 1.0)), ErrorKind::InvalidInput);
    assert_eq!(kind_of(Triangle::new(1.0, 1.0, 10.0)), ErrorKind::InvalidInput);
  }
}
