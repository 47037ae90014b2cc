//! Deterministic point sets for demonstrations and benchmarks.
//!
//! Every generator places its points in `[0, WINDOW_SIZE]²`. Coordinates are
//! computed in floating point and truncated toward zero.
use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

use crate::data::Point;

/// Side length of the square window the shapes are drawn in.
pub const WINDOW_SIZE: i32 = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Shape {
  /// Two concentric circles around the window centre.
  Circles,
  /// The outline of an axis-aligned square.
  Square,
  /// The outline of a square rotated by 45 degrees.
  Diamond,
  Heart,
}

impl Shape {
  pub const ALL: [Shape; 4] = [Shape::Circles, Shape::Square, Shape::Diamond, Shape::Heart];

  pub fn generate(self, n: usize) -> Vec<Point<i32>> {
    match self {
      Shape::Circles => circles(n),
      Shape::Square => square(n),
      Shape::Diamond => diamond(n),
      Shape::Heart => heart(n),
    }
  }

  pub fn name(self) -> &'static str {
    match self {
      Shape::Circles => "circles",
      Shape::Square => "square",
      Shape::Diamond => "diamond",
      Shape::Heart => "heart",
    }
  }
}

impl fmt::Display for Shape {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownShape(pub String);

impl fmt::Display for UnknownShape {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "unknown shape '{}', expected one of: ", self.0)?;
    let names: Vec<&str> = Shape::ALL.iter().map(|shape| shape.name()).collect();
    f.write_str(&names.join(", "))
  }
}

impl std::error::Error for UnknownShape {}

impl FromStr for Shape {
  type Err = UnknownShape;
  fn from_str(s: &str) -> Result<Shape, UnknownShape> {
    Shape::ALL
      .into_iter()
      .find(|shape| shape.name().eq_ignore_ascii_case(s))
      .ok_or_else(|| UnknownShape(s.to_string()))
  }
}

// Saturates on values outside of i32, which none of the shapes produce.
fn truncate(value: f64) -> i32 {
  value as i32
}

fn point(x: f64, y: f64) -> Point<i32> {
  Point::new([truncate(x), truncate(y)])
}

/// `n/2` points on a circle of radius 100 and `n/2` points on a circle of
/// radius 50, both centred in the window.
pub fn circles(n: usize) -> Vec<Point<i32>> {
  let per_circle = n / 2;
  let mut pts = Vec::with_capacity(2 * per_circle);
  let center = f64::from(WINDOW_SIZE / 2);
  let step = 2.0 * PI / per_circle as f64;
  for radius in [100.0, 50.0] {
    for i in 0..per_circle {
      let angle = i as f64 * step;
      pts.push(point(
        center + radius * angle.cos(),
        center + radius * angle.sin(),
      ));
    }
  }
  pts
}

/// `n/4` points on each side of the square from `(125, 125)` to `(375, 375)`.
/// The remaining `n % 4` points go on the diagonal.
pub fn square(n: usize) -> Vec<Point<i32>> {
  let width = WINDOW_SIZE / 2;
  let start = WINDOW_SIZE / 4;
  let (lo, hi) = (f64::from(start), f64::from(start + width));
  let offset = 4.0 / n as f64 * f64::from(width);
  let mut pts = Vec::with_capacity(n);
  for i in 0..n / 4 {
    let dist = offset * i as f64;
    pts.push(point(lo + dist, lo));
    pts.push(point(lo + dist + offset, hi));
    pts.push(point(lo, lo + dist + offset));
    pts.push(point(hi, lo + dist));
  }
  for i in 0..n % 4 {
    let along = start + (i as i32 + 1) * (width / 4);
    pts.push(Point::new([along, along]));
  }
  pts
}

/// `n/4` points on each side of a square rotated by 45 degrees, with corners
/// 125 units from the window centre. The remaining `n % 4` points go on the
/// horizontal line through the centre.
pub fn diamond(n: usize) -> Vec<Point<i32>> {
  let width = WINDOW_SIZE / 2;
  let center = f64::from(WINDOW_SIZE / 2);
  let half = f64::from(width) / 2.0;
  let mut pts = Vec::with_capacity(n);
  for i in 0..n / 4 {
    let offset = 2.0 / n as f64 * f64::from(width) * i as f64;
    pts.push(point(center - half + offset, center + offset));
    pts.push(point(center + half - offset, center - offset));
    pts.push(point(center - offset, center - half + offset));
    pts.push(point(center + offset, center + half - offset));
  }
  for i in 0..n % 4 {
    let x = center - half + f64::from((i as i32 + 1) * (width / 4));
    pts.push(point(x, center));
  }
  pts
}

/// `n` points on the heart curve `x = 16 sin³a`,
/// `y = 13 cos a - 5 cos 2a - 2 cos 3a - cos 4a`, scaled by 5 and moved to
/// the window centre.
pub fn heart(n: usize) -> Vec<Point<i32>> {
  let scale = WINDOW_SIZE / 100;
  let center = WINDOW_SIZE / 2;
  let step = 2.0 * PI / n as f64;
  (0..n)
    .map(|i| {
      let a = i as f64 * step;
      let x = 16.0 * a.sin().powi(3);
      let y = 13.0 * a.cos() - 5.0 * (2.0 * a).cos() - 2.0 * (3.0 * a).cos() - (4.0 * a).cos();
      Point::new([
        truncate(x) * scale + center,
        truncate(y) * scale + center,
      ])
    })
    .collect()
}
