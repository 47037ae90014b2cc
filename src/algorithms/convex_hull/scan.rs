use crate::data::Point;
use crate::{left_strictly, HullScalar};

/// $O(n)$ Walk radially sorted points and keep the hull vertices.
///
/// `sorted[0]` must be the pivot and `sorted[1..]` must be in the order given
/// by [`radial_cmp`](super::radial_sort::radial_cmp). The result starts at the
/// pivot and runs counter-clockwise. Every vertex that would make a clockwise
/// or straight turn is removed, including turns that involve the closing edge
/// back to the pivot.
///
/// Inputs with at most two points are returned unchanged, except that two
/// coincident points collapse into one.
pub fn build_hull<T>(sorted: &[Point<T>]) -> Vec<Point<T>>
where
  T: HullScalar,
{
  let mut hull: Vec<Point<T>> = Vec::with_capacity(sorted.len());
  let mut rest = sorted.iter();
  hull.extend(rest.by_ref().take(2).cloned());
  for pt in rest {
    while let [.., second, top] = hull.as_slice() {
      if left_strictly(second, top, pt) {
        break;
      }
      hull.pop();
    }
    hull.push(pt.clone());
  }
  while hull.len() > 2 {
    let n = hull.len();
    if left_strictly(&hull[n - 2], &hull[n - 1], &hull[0]) {
      break;
    }
    hull.pop();
  }
  if let [first, second] = hull.as_slice() {
    if first == second {
      hull.pop();
    }
  }
  hull
}
