use std::cmp::Ordering;

use crate::data::Point;
use crate::{HullScalar, TotalOrd};

// O(n)
/// Index of the point with the smallest y coordinate.
///
/// Ties are won by the point with the strictly greater x coordinate, so among
/// equal points the first occurrence is returned. This point is always a
/// vertex of the convex hull. Returns `None` for an empty slice.
///
/// ```rust
/// # use hull2d::algorithms::convex_hull::pivot::bottom_point_index;
/// # use hull2d::data::Point;
/// let pts = vec![Point::new([0, 0]), Point::new([4, 0]), Point::new([2, 2])];
/// assert_eq!(bottom_point_index(&pts), Some(1));
/// ```
pub fn bottom_point_index<T>(pts: &[Point<T>]) -> Option<usize>
where
  T: HullScalar,
{
  let mut best = 0;
  let mut p0 = pts.first()?;
  for (index, pt) in pts.iter().enumerate().skip(1) {
    let lower = match pt.y_coord().total_cmp(p0.y_coord()) {
      Ordering::Less => true,
      Ordering::Equal => pt.x_coord().total_cmp(p0.x_coord()) == Ordering::Greater,
      Ordering::Greater => false,
    };
    if lower {
      best = index;
      p0 = pt;
    }
  }
  Some(best)
}
