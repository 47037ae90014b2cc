// Strategies for generating points in property tests.
// A Strategy is a way to generate a shrinkable value.
use crate::data::Point;

use num_bigint::BigInt;
use num_traits::Float;
use ordered_float::NotNan;
use proptest::arbitrary::*;
use proptest::prelude::*;
use proptest::strategy::*;

type Mapped<I, O> = Map<StrategyFor<I>, fn(_: I) -> O>;

///////////////////////////////////////////////////////////////////////////////
// Arbitrary point

impl<T: Arbitrary> Arbitrary for Point<T>
where
  T::Parameters: Clone,
{
  type Strategy = Map<(T::Strategy, T::Strategy), fn(_: (T, T)) -> Point<T>>;
  type Parameters = T::Parameters;
  fn arbitrary_with(params: Self::Parameters) -> Self::Strategy {
    (any_with::<T>(params.clone()), any_with::<T>(params)).prop_map(|(x, y)| Point::new([x, y]))
  }
}

///////////////////////////////////////////////////////////////////////////////
// Convenience functions

// Points on a small grid. Random points almost never line up, so this is the
// way to get colinear points and duplicates.
pub fn any_small() -> impl Strategy<Value = Point<i32>> {
  (-8..=8, -8..=8).prop_map(|(x, y)| Point::new([x, y]))
}

// Arbitrary isn't defined for BigInt.
pub fn any_r() -> impl Strategy<Value = Point<BigInt>> {
  any::<Point<i64>>().prop_map(|pt| pt.cast(BigInt::from))
}

pub fn any_small_r() -> Mapped<Point<i8>, Point<BigInt>> {
  any::<Point<i8>>().prop_map(|pt| pt.cast(BigInt::from))
}

// Arbitrary isn't defined for NotNan.
pub fn any_nn() -> impl Strategy<Value = Point<NotNan<f64>>> {
  any::<Point<f64>>().prop_filter_map("Check for NaN", |pt| {
    let [x, y] = pt.array;
    Some(Point::new([
      NotNan::new(rem_float(x)).ok()?,
      NotNan::new(rem_float(y)).ok()?,
    ]))
  })
}

// Float representation: mantissa * 2^exponent * sign
// This function changes the exponent modulo 250. This rules out extreme
// numbers (very large, very small, very close to zero). Distances between
// such numbers overflow to infinity.
fn rem_float(f: f64) -> f64 {
  let (mantissa, exponent, sign) = f.integer_decode();
  ((mantissa as f64) * 2f64.powi(i32::from(exponent) % 250)).copysign(f64::from(sign))
}
