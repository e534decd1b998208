//! 2D shapes: circle, rectangle, square and triangle.
//!
//! Constructors validate their lengths; predicates compare with the
//! default [`Tolerance`].

use super::advanced::hypot;
use super::comparison::Tolerance;
use crate::MathError;
use std::f64::consts::PI;
use std::fmt;

fn non_negative(name: &str, value: f64) -> Result<f64, MathError> {
  if value.is_nan() || value < 0.0 {
    return Err(MathError::InvalidInput(format!(
      "{name} must be non-negative, got {value}"
    )));
  }
  Ok(value)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
  radius: f64,
}

impl Circle {
  pub fn new(radius: f64) -> Result<Self, MathError> {
    Ok(Self {
      radius: non_negative("Radius", radius)?,
    })
  }

  pub fn radius(&self) -> f64 {
    self.radius
  }

  /// πr²
  pub fn area(&self) -> f64 {
    PI * self.radius * self.radius
  }

  /// 2πr
  pub fn circumference(&self) -> f64 {
    2.0 * PI * self.radius
  }

  pub fn diameter(&self) -> f64 {
    2.0 * self.radius
  }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
  width: f64,
  height: f64,
}

impl Rectangle {
  pub fn new(width: f64, height: f64) -> Result<Self, MathError> {
    Ok(Self {
      width: non_negative("Width", width)?,
      height: non_negative("Height", height)?,
    })
  }

  pub fn width(&self) -> f64 {
    self.width
  }

  pub fn height(&self) -> f64 {
    self.height
  }

  pub fn area(&self) -> f64 {
    self.width * self.height
  }

  pub fn perimeter(&self) -> f64 {
    2.0 * (self.width + self.height)
  }

  pub fn diagonal(&self) -> Result<f64, MathError> {
    hypot(&[self.width, self.height])
  }

  pub fn is_square(&self) -> bool {
    Tolerance::default().is_close(self.width, self.height)
  }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Square {
  side: f64,
}

impl Square {
  pub fn new(side: f64) -> Result<Self, MathError> {
    Ok(Self {
      side: non_negative("Side", side)?,
    })
  }

  pub fn side(&self) -> f64 {
    self.side
  }

  pub fn area(&self) -> f64 {
    self.side * self.side
  }

  pub fn perimeter(&self) -> f64 {
    4.0 * self.side
  }

  pub fn diagonal(&self) -> f64 {
    self.side * std::f64::consts::SQRT_2
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriangleKind {
  Equilateral,
  Isosceles,
  Scalene,
}

impl fmt::Display for TriangleKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(match self {
      TriangleKind::Equilateral => "equilateral",
      TriangleKind::Isosceles => "isosceles",
      TriangleKind::Scalene => "scalene",
    })
  }
}

/// Triangle given by its three side lengths.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
  a: f64,
  b: f64,
  c: f64,
}

impl Triangle {
  /// Sides must be positive and satisfy the strict triangle inequality.
  pub fn new(a: f64, b: f64, c: f64) -> Result<Self, MathError> {
    if !(a > 0.0 && b > 0.0 && c > 0.0) {
      return Err(MathError::InvalidInput(
        "All sides must be positive".into(),
      ));
    }
    if !(a + b > c && b + c > a && a + c > b) {
      return Err(MathError::InvalidInput(format!(
        "Sides do not satisfy triangle inequality: {a}, {b}, {c}"
      )));
    }
    Ok(Self { a, b, c })
  }

  pub fn sides(&self) -> [f64; 3] {
    [self.a, self.b, self.c]
  }

  pub fn perimeter(&self) -> f64 {
    self.a + self.b + self.c
  }

  /// Heron's formula.
  pub fn area(&self) -> f64 {
    let s = self.perimeter() / 2.0;
    (s * (s - self.a) * (s - self.b) * (s - self.c)).sqrt()
  }

  pub fn is_right_triangle(&self) -> bool {
    let mut sides = self.sides();
    sides.sort_by(f64::total_cmp);
    let [x, y, z] = sides;
    Tolerance::default().is_close(x * x + y * y, z * z)
  }

  pub fn is_equilateral(&self) -> bool {
    let tol = Tolerance::default();
    tol.is_close(self.a, self.b) && tol.is_close(self.b, self.c)
  }

  pub fn is_isosceles(&self) -> bool {
    let tol = Tolerance::default();
    tol.is_close(self.a, self.b)
      || tol.is_close(self.b, self.c)
      || tol.is_close(self.a, self.c)
  }

  pub fn triangle_type(&self) -> TriangleKind {
    if self.is_equilateral() {
      TriangleKind::Equilateral
    } else if self.is_isosceles() {
      TriangleKind::Isosceles
    } else {
      TriangleKind::Scalene
    }
  }
}
