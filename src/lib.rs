// #![deny(warnings)]
#![deny(clippy::cast_lossless)]
#![doc(test(no_crate_inject))]
//! Convex hulls of planar point sets by Graham scan.
//!
//! ```rust
//! # use hull2d::algorithms::convex_hull;
//! # use hull2d::data::Point;
//! let hull = convex_hull(vec![
//!   Point::new([0, 0]),
//!   Point::new([4, 0]),
//!   Point::new([4, 4]),
//!   Point::new([0, 4]),
//!   Point::new([2, 2]),
//! ]);
//! assert_eq!(
//!   hull.to_vec(),
//!   vec![
//!     Point::new([4, 0]),
//!     Point::new([4, 4]),
//!     Point::new([0, 4]),
//!     Point::new([0, 0]),
//!   ]
//! );
//! ```
use num_traits::*;
use std::cmp::Ordering;

pub mod algorithms;
pub mod data;
mod orientation;
pub mod shapes;

pub use orientation::{collinear, left_on, left_strictly, signed_area_2d, Orientation};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
  DuplicatePoints,
  /// Three consecutive vertices are either colinear or oriented clockwise.
  ConvexViolation,
  /// The boundary winds around its first vertex more than once.
  SelfIntersections,
}

impl std::fmt::Display for Error {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
    match self {
      Error::DuplicatePoints => write!(f, "Duplicate points"),
      Error::ConvexViolation => write!(f, "Convex violation"),
      Error::SelfIntersections => write!(f, "Self intersections"),
    }
  }
}

impl std::error::Error for Error {}

pub trait TotalOrd {
  fn total_cmp(&self, other: &Self) -> Ordering;

  fn total_min(self, other: Self) -> Self
  where
    Self: Sized,
  {
    std::cmp::min_by(self, other, TotalOrd::total_cmp)
  }

  fn total_max(self, other: Self) -> Self
  where
    Self: Sized,
  {
    std::cmp::max_by(self, other, TotalOrd::total_cmp)
  }
}

impl<A: TotalOrd> TotalOrd for &A {
  fn total_cmp(&self, other: &Self) -> Ordering {
    (*self).total_cmp(*other)
  }
}

/// Coordinate types the hull algorithms accept.
///
/// Implementations must classify the sign of [`HullScalar::signed_area`]
/// exactly. Fixed-width integers accumulate in a type twice as wide as their
/// coordinate differences, so no input can overflow.
pub trait HullScalar: std::fmt::Debug + Clone + PartialEq + TotalOrd {
  /// Accumulator for twice the signed area of a triangle.
  type Area: std::fmt::Debug + Clone + PartialOrd + Zero;

  /// `(q.x-p.x)*(r.y-p.y) - (q.y-p.y)*(r.x-p.x)`.
  fn signed_area(p: &[Self; 2], q: &[Self; 2], r: &[Self; 2]) -> Self::Area;

  /// Compare `|origin - a|` with `|origin - b|`.
  fn cmp_distance(origin: &Self, a: &Self, b: &Self) -> Ordering;
}

macro_rules! fixed_precision {
  ( $ty:ty, $long:ty ) => {
    impl TotalOrd for $ty {
      fn total_cmp(&self, other: &Self) -> Ordering {
        self.cmp(other)
      }
    }

    impl HullScalar for $ty {
      type Area = $long;

      fn signed_area(p: &[Self; 2], q: &[Self; 2], r: &[Self; 2]) -> $long {
        fn extend(pt: &[$ty; 2]) -> [$long; 2] {
          [<$long as From<$ty>>::from(pt[0]), <$long as From<$ty>>::from(pt[1])]
        }
        let [px, py] = extend(p);
        let [qx, qy] = extend(q);
        let [rx, ry] = extend(r);
        (qx - px) * (ry - py) - (qy - py) * (rx - px)
      }

      fn cmp_distance(origin: &Self, a: &Self, b: &Self) -> Ordering {
        origin.abs_diff(*a).cmp(&origin.abs_diff(*b))
      }
    }
  };
}

macro_rules! arbitrary_precision {
  ( $( $ty:ty ),* ) => {
    $(
      impl TotalOrd for $ty {
        fn total_cmp(&self, other: &Self) -> Ordering {
          self.cmp(other)
        }
      }

      impl HullScalar for $ty {
        type Area = $ty;

        fn signed_area(p: &[Self; 2], q: &[Self; 2], r: &[Self; 2]) -> $ty {
          (&q[0] - &p[0]) * (&r[1] - &p[1]) - (&q[1] - &p[1]) * (&r[0] - &p[0])
        }

        fn cmp_distance(origin: &Self, a: &Self, b: &Self) -> Ordering {
          (origin - a).abs().cmp(&(origin - b).abs())
        }
      }
    )*
  };
}

// geometry_predicates::orient2d is exact in sign, which is all the hull
// predicates look at.
macro_rules! floating_precision {
  ( $( $ty:ty ),* ) => {
    $(
      impl TotalOrd for $ty {
        fn total_cmp(&self, other: &Self) -> Ordering {
          <$ty>::total_cmp(self, other)
        }
      }

      impl HullScalar for $ty {
        type Area = f64;

        fn signed_area(p: &[Self; 2], q: &[Self; 2], r: &[Self; 2]) -> f64 {
          geometry_predicates::predicates::orient2d(
            [<f64 as From<_>>::from(p[0]), <f64 as From<_>>::from(p[1])],
            [<f64 as From<_>>::from(q[0]), <f64 as From<_>>::from(q[1])],
            [<f64 as From<_>>::from(r[0]), <f64 as From<_>>::from(r[1])],
          )
        }

        fn cmp_distance(origin: &Self, a: &Self, b: &Self) -> Ordering {
          cmp_float_distance(<f64 as From<_>>::from(*origin), <f64 as From<_>>::from(*a), <f64 as From<_>>::from(*b))
        }
      }
    )*
  };
}

// Exact comparison of |origin - a| and |origin - b|. Subtracting in f64 rounds
// away small gaps next to a large origin, so points on the same side are
// compared directly and the rest go through rationals. NaN and infinities have
// no rational value and fall back to rounded arithmetic.
fn cmp_float_distance(origin: f64, a: f64, b: f64) -> Ordering {
  if a >= origin && b >= origin {
    return a.partial_cmp(&b).unwrap_or(Ordering::Equal);
  }
  if a <= origin && b <= origin {
    return b.partial_cmp(&a).unwrap_or(Ordering::Equal);
  }
  match (
    num_rational::BigRational::from_float(origin),
    num_rational::BigRational::from_float(a),
    num_rational::BigRational::from_float(b),
  ) {
    (Some(o), Some(ra), Some(rb)) => (&o - ra).abs().cmp(&(o - rb).abs()),
    _ => (origin - a).abs().total_cmp(&(origin - b).abs()),
  }
}

macro_rules! wrapped_floating_precision {
  ( $( $ty:ty ),* ) => {
    $(
      impl TotalOrd for $ty {
        fn total_cmp(&self, other: &Self) -> Ordering {
          self.cmp(other)
        }
      }

      impl HullScalar for $ty {
        type Area = f64;

        fn signed_area(p: &[Self; 2], q: &[Self; 2], r: &[Self; 2]) -> f64 {
          geometry_predicates::predicates::orient2d(
            [<f64 as From<_>>::from(p[0].into_inner()), <f64 as From<_>>::from(p[1].into_inner())],
            [<f64 as From<_>>::from(q[0].into_inner()), <f64 as From<_>>::from(q[1].into_inner())],
            [<f64 as From<_>>::from(r[0].into_inner()), <f64 as From<_>>::from(r[1].into_inner())],
          )
        }

        fn cmp_distance(origin: &Self, a: &Self, b: &Self) -> Ordering {
          cmp_float_distance(
            <f64 as From<_>>::from(origin.into_inner()),
            <f64 as From<_>>::from(a.into_inner()),
            <f64 as From<_>>::from(b.into_inner()),
          )
        }
      }
    )*
  };
}

fixed_precision!(i8, i32);
fixed_precision!(i16, i64);
fixed_precision!(i32, i128);
arbitrary_precision!(num_bigint::BigInt, num_rational::BigRational);
floating_precision!(f32, f64);
wrapped_floating_precision!(ordered_float::OrderedFloat<f32>);
wrapped_floating_precision!(ordered_float::OrderedFloat<f64>);
wrapped_floating_precision!(ordered_float::NotNan<f32>);
wrapped_floating_precision!(ordered_float::NotNan<f64>);

#[cfg(test)]
pub mod testing;
