use std::cmp::Ordering;

use num_traits::Zero;

use crate::HullScalar;

#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Copy, Clone, Hash)]
pub enum Orientation {
  CounterClockWise,
  ClockWise,
  CoLinear,
}

impl Orientation {
  /// Determine the direction you have to turn if you walk from `p1`
  /// to `p2` to `p3`.
  ///
  /// For fixed-precision types (i8,i16,i32), this function is
  /// guaranteed to work for any input and never cause any arithmetic overflows.
  ///
  /// # Examples
  ///
  /// ```rust
  /// # use hull2d::data::Point;
  /// # use hull2d::Orientation;
  /// let p1 = Point::new([ 0, 0 ]);
  /// let p2 = Point::new([ 0, 1 ]); // One unit above p1.
  /// // (0,0) -> (0,1) -> (0,2) == Orientation::CoLinear
  /// assert!(Orientation::new(&p1, &p2, &Point::new([ 0, 2 ])).is_colinear());
  /// // (0,0) -> (0,1) -> (-1,2) == Orientation::CounterClockWise
  /// assert!(Orientation::new(&p1, &p2, &Point::new([ -1, 2 ])).is_ccw());
  /// // (0,0) -> (0,1) -> (1,2) == Orientation::ClockWise
  /// assert!(Orientation::new(&p1, &p2, &Point::new([ 1, 2 ])).is_cw());
  /// ```
  pub fn new<T>(p1: &[T; 2], p2: &[T; 2], p3: &[T; 2]) -> Orientation
  where
    T: HullScalar,
  {
    match T::signed_area(p1, p2, p3).partial_cmp(&T::Area::zero()) {
      Some(Ordering::Greater) => Orientation::CounterClockWise,
      Some(Ordering::Less) => Orientation::ClockWise,
      // NaN coordinates never make a turn.
      Some(Ordering::Equal) | None => Orientation::CoLinear,
    }
  }

  pub fn is_colinear(self) -> bool {
    matches!(self, Orientation::CoLinear)
  }

  pub fn is_ccw(self) -> bool {
    matches!(self, Orientation::CounterClockWise)
  }

  pub fn is_cw(self) -> bool {
    matches!(self, Orientation::ClockWise)
  }

  #[must_use]
  pub fn reverse(self) -> Orientation {
    match self {
      Orientation::CounterClockWise => Orientation::ClockWise,
      Orientation::ClockWise => Orientation::CounterClockWise,
      Orientation::CoLinear => Orientation::CoLinear,
    }
  }
}

/// Twice the signed area of the triangle `abc`.
///
/// Positive if `c` is to the left of the directed line `a -> b`, negative if
/// it is to the right and zero if the three points are colinear.
pub fn signed_area_2d<T: HullScalar>(a: &[T; 2], b: &[T; 2], c: &[T; 2]) -> T::Area {
  T::signed_area(a, b, c)
}

/// True iff `p`, `q` and `r` lie on a common line. Coincident points are colinear.
pub fn collinear<T: HullScalar>(p: &[T; 2], q: &[T; 2], r: &[T; 2]) -> bool {
  Orientation::new(p, q, r).is_colinear()
}

/// True iff `c` is strictly to the left of `a -> b`.
pub fn left_strictly<T: HullScalar>(a: &[T; 2], b: &[T; 2], c: &[T; 2]) -> bool {
  Orientation::new(a, b, c).is_ccw()
}

/// True iff `c` is to the left of `a -> b` or on the line through them.
pub fn left_on<T: HullScalar>(a: &[T; 2], b: &[T; 2], c: &[T; 2]) -> bool {
  !Orientation::new(a, b, c).is_cw()
}

#[cfg(test)]
#[cfg(not(tarpaulin_include))]
mod tests {
  use super::*;

  use crate::data::Point;
  use num_bigint::BigInt;
  use proptest::prelude::*;
  use test_strategy::proptest;

  #[test]
  fn orientation_limit_1() {
    assert!(Orientation::new(
      &[i8::MAX, i8::MAX],
      &[i8::MIN, i8::MIN],
      &[i8::MIN, i8::MIN],
    )
    .is_colinear());
  }

  #[test]
  fn orientation_limit_2() {
    let options = [i8::MIN, i8::MAX, 0, -10, 10];
    for &a in &options {
      for &b in &options {
        for &c in &options {
          for &d in &options {
            let expected = (i32::from(c) - i32::from(a)) * (i32::from(d) - i32::from(b));
            assert_eq!(signed_area_2d(&[a, b], &[c, b], &[c, d]), expected);
          }
        }
      }
    }
  }

  #[test]
  fn orientation_limit_i32() {
    let p = [i32::MIN, i32::MIN];
    let q = [i32::MAX, i32::MIN + 1];
    let r = [i32::MAX, i32::MIN];
    assert!(left_strictly(&p, &r, &q));
    assert!(!left_on(&p, &q, &r));
  }

  #[test]
  fn unit_turns() {
    assert_eq!(
      Orientation::new(&[0, 0], &[1, 1], &[2, 2]),
      Orientation::CoLinear
    );
    assert_eq!(
      Orientation::new(&[0, 0], &[0, 1], &[2, 2]),
      Orientation::ClockWise
    );
    assert_eq!(
      Orientation::new(&[0, 0], &[0, 1], &[-2, 2]),
      Orientation::CounterClockWise
    );
    assert_eq!(
      Orientation::new(&[0.0, 0.0], &[1.0, 1.0], &[2.0, 2.0]),
      Orientation::CoLinear
    );
  }

  #[test]
  fn coincident_points_are_colinear() {
    let p = Point::new([3, 4]);
    assert!(collinear(&p, &p, &p));
    assert!(collinear(&p, &p, &Point::new([7, -1])));
    assert!(!left_strictly(&p, &p, &Point::new([7, -1])));
    assert!(left_on(&p, &p, &Point::new([7, -1])));
  }

  #[test]
  fn nan_is_colinear() {
    assert!(collinear(&[f64::NAN, 0.0], &[1.0, 0.0], &[0.0, 1.0]));
  }

  #[test]
  fn left_predicates() {
    let a = [0, 0];
    let b = [4, 0];
    assert!(left_strictly(&a, &b, &[2, 1]));
    assert!(left_on(&a, &b, &[2, 1]));
    assert!(!left_strictly(&a, &b, &[9, 0]));
    assert!(left_on(&a, &b, &[9, 0]));
    assert!(!left_strictly(&a, &b, &[2, -1]));
    assert!(!left_on(&a, &b, &[2, -1]));
  }

  #[proptest]
  fn orientation_reverse(pt1: Point<i32>, pt2: Point<i32>, pt3: Point<i32>) {
    let abc = Orientation::new(&pt1, &pt2, &pt3);
    let cba = Orientation::new(&pt3, &pt2, &pt1);
    prop_assert_eq!(abc, cba.reverse())
  }

  #[proptest]
  fn orientation_cyclic(pt1: Point<i16>, pt2: Point<i16>, pt3: Point<i16>) {
    prop_assert_eq!(
      Orientation::new(&pt1, &pt2, &pt3),
      Orientation::new(&pt2, &pt3, &pt1)
    )
  }

  #[proptest]
  fn orientation_matches_bigint(pt1: Point<i32>, pt2: Point<i32>, pt3: Point<i32>) {
    let big = |pt: &Point<i32>| pt.cast(BigInt::from);
    prop_assert_eq!(
      Orientation::new(&pt1, &pt2, &pt3),
      Orientation::new(&big(&pt1), &big(&pt2), &big(&pt3))
    )
  }

  #[proptest]
  fn bigint_colinear(pt1: Point<i32>, pt2: Point<i32>) {
    let pt1 = pt1.cast(BigInt::from);
    let pt2 = pt2.cast(BigInt::from);
    let pt3 = Point::new([
      &pt2[0] + (&pt2[0] - &pt1[0]),
      &pt2[1] + (&pt2[1] - &pt1[1]),
    ]);
    prop_assert!(collinear(&pt1, &pt2, &pt3))
  }
}
