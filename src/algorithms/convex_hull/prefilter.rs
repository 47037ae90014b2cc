use std::cmp::Ordering;

use crate::data::Point;
use crate::{left_on, HullScalar, TotalOrd};

/// Indices of the points with maximum x, maximum y, minimum x and minimum y,
/// in that order.
///
/// An index is only replaced on strict improvement, so ties keep the earliest
/// point. Read in this order the four points form a (possibly degenerate)
/// counter-clockwise quadrilateral.
pub fn extreme_indices<T>(pts: &[Point<T>]) -> Option<[usize; 4]>
where
  T: HullScalar,
{
  let first = pts.first()?;
  let mut extremes = [0; 4];
  let mut values = [
    first.x_coord(),
    first.y_coord(),
    first.x_coord(),
    first.y_coord(),
  ];
  for (index, pt) in pts.iter().enumerate().skip(1) {
    let candidates = [
      (pt.x_coord(), Ordering::Greater),
      (pt.y_coord(), Ordering::Greater),
      (pt.x_coord(), Ordering::Less),
      (pt.y_coord(), Ordering::Less),
    ];
    for (slot, (value, better)) in candidates.into_iter().enumerate() {
      if value.total_cmp(values[slot]) == better {
        values[slot] = value;
        extremes[slot] = index;
      }
    }
  }
  Some(extremes)
}

// Points inside the quadrilateral spanned by the extreme points cannot be on
// the hull. Boundary points are dropped as well: they are either one of the
// corners, which are always kept, or lie between two of them.
/// $O(n)$ Remove points that cannot be hull vertices.
///
/// Keeps every point that lies strictly outside at least one edge of the
/// quadrilateral `[xmax, ymax, xmin, ymin]`, plus the four extreme points
/// themselves. The relative order of the kept points is preserved. The
/// convex hull of the remaining points equals the convex hull of the input.
pub fn discard_interior<T>(pts: &mut Vec<Point<T>>)
where
  T: HullScalar,
{
  let Some(extremes) = extreme_indices(pts) else {
    return;
  };
  let quad = extremes.map(|index| pts[index].clone());
  let mut index = 0;
  pts.retain(|pt| {
    let keep = extremes.contains(&index)
      || (0..4).any(|edge| !left_on(&quad[edge], &quad[(edge + 1) % 4], pt));
    index += 1;
    keep
  });
}
