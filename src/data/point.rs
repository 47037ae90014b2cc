use std::fmt;
use std::ops::Deref;
use std::ops::Index;

use crate::{HullScalar, Orientation};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)] // Required for correctness!
pub struct Point<T> {
  pub array: [T; 2],
}

impl<T> Point<T> {
  pub const fn new(array: [T; 2]) -> Point<T> {
    Point { array }
  }

  pub fn x_coord(&self) -> &T {
    &self.array[0]
  }

  pub fn y_coord(&self) -> &T {
    &self.array[1]
  }

  pub fn cast<U, F>(&self, f: F) -> Point<U>
  where
    T: Clone,
    F: Fn(T) -> U,
  {
    let [x, y] = self.array.clone();
    Point { array: [f(x), f(y)] }
  }

  /// Turn taken when walking from `self` to `q` to `r`.
  pub fn orientation(&self, q: &Point<T>, r: &Point<T>) -> Orientation
  where
    T: HullScalar,
  {
    Orientation::new(&self.array, &q.array, &r.array)
  }
}

impl<T> Index<usize> for Point<T> {
  type Output = T;
  fn index(&self, key: usize) -> &T {
    self.array.index(key)
  }
}

impl<T> Deref for Point<T> {
  type Target = [T; 2];
  fn deref(&self) -> &[T; 2] {
    &self.array
  }
}

impl<T> From<(T, T)> for Point<T> {
  fn from(point: (T, T)) -> Point<T> {
    Point {
      array: [point.0, point.1],
    }
  }
}

impl<T> From<[T; 2]> for Point<T> {
  fn from(array: [T; 2]) -> Point<T> {
    Point { array }
  }
}

impl From<Point<i32>> for Point<num_bigint::BigInt> {
  fn from(point: Point<i32>) -> Point<num_bigint::BigInt> {
    point.cast(num_bigint::BigInt::from)
  }
}

impl From<Point<i64>> for Point<num_bigint::BigInt> {
  fn from(point: Point<i64>) -> Point<num_bigint::BigInt> {
    point.cast(num_bigint::BigInt::from)
  }
}

impl<T: fmt::Display> fmt::Display for Point<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "({}, {})", self.array[0], self.array[1])
  }
}
