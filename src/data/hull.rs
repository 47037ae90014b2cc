use claims::debug_assert_ok;
use std::ops::Deref;

use crate::data::{Point, PointLocation};
use crate::{Error, HullScalar, Orientation, TotalOrd};

/// Boundary of a convex hull in counter-clockwise order.
///
/// Hulls of point sets that span a polygon have at least three vertices and
/// every consecutive triple of vertices turns strictly to the left. Smaller
/// inputs give degenerate hulls: no vertices, a single vertex, or the two
/// endpoints of a segment.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Hull<T>(Vec<Point<T>>);

impl<T> Hull<T>
where
  T: HullScalar,
{
  /// $O(1)$ Assume that the points already form a valid hull.
  ///
  /// # Safety
  /// The points have to be strictly convex and counter-clockwise, ie. no
  /// vertices are allowed to be concave, colinear or repeated.
  pub fn new_unchecked(points: Vec<Point<T>>) -> Hull<T> {
    let hull = Hull(points);
    debug_assert_ok!(hull.validate());
    hull
  }

  /// True if the hull encloses a region with positive area.
  pub fn is_polygon(&self) -> bool {
    self.0.len() >= 3
  }

  /// $O(n)$
  pub fn validate(&self) -> Result<(), Error> {
    match self.0.as_slice() {
      [] | [_] => Ok(()),
      [a, b] if a == b => Err(Error::DuplicatePoints),
      [_, _] => Ok(()),
      vertices => {
        let n = vertices.len();
        for i in 0..n {
          let turn = Orientation::new(&vertices[i], &vertices[(i + 1) % n], &vertices[(i + 2) % n]);
          if !turn.is_ccw() {
            return Err(Error::ConvexViolation);
          }
        }
        // Left turns everywhere still allow a boundary that winds more than once.
        let origin = &vertices[0];
        for pair in vertices[1..].windows(2) {
          if !Orientation::new(origin, &pair[0], &pair[1]).is_ccw() {
            return Err(Error::SelfIntersections);
          }
        }
        Ok(())
      }
    }
  }

  /// $O(\log n)$ Locate a point relative to the hull.
  pub fn locate(&self, pt: &Point<T>) -> PointLocation {
    match self.0.as_slice() {
      [] => PointLocation::Outside,
      [vertex] if vertex == pt => PointLocation::OnBoundary,
      [_] => PointLocation::Outside,
      [a, b] => {
        if a.orientation(b, pt).is_colinear() && within(a, b, pt) {
          PointLocation::OnBoundary
        } else {
          PointLocation::Outside
        }
      }
      vertices => {
        let last = vertices.len() - 1;
        let p0 = &vertices[0];
        let mut lower = 1;
        let mut upper = last;
        while lower + 1 < upper {
          let middle = (lower + upper) / 2;
          if p0.orientation(&vertices[middle], pt).is_ccw() {
            lower = middle;
          } else {
            upper = middle;
          }
        }
        let p1 = &vertices[lower];
        let p2 = &vertices[upper];
        let first = p0.orientation(p1, pt);
        let rim = p1.orientation(p2, pt);
        let closing = p2.orientation(p0, pt);
        if first.is_cw() || rim.is_cw() || closing.is_cw() {
          PointLocation::Outside
        } else if rim.is_colinear()
          || (first.is_colinear() && lower == 1)
          || (closing.is_colinear() && upper == last)
        {
          // Only edges of the fan that are also hull edges count as boundary.
          PointLocation::OnBoundary
        } else {
          PointLocation::Inside
        }
      }
    }
  }
}

impl<T> Hull<T> {
  pub fn into_points(self) -> Vec<Point<T>> {
    self.0
  }
}

// Is `pt` inside the bounding box of `a` and `b`?
fn within<T: TotalOrd>(a: &Point<T>, b: &Point<T>, pt: &Point<T>) -> bool {
  (0..2).all(|axis| {
    let lo = TotalOrd::total_min(&a[axis], &b[axis]);
    let hi = TotalOrd::total_max(&a[axis], &b[axis]);
    lo.total_cmp(&pt[axis]).is_le() && pt[axis].total_cmp(hi).is_le()
  })
}

impl<T> Deref for Hull<T> {
  type Target = [Point<T>];
  fn deref(&self) -> &[Point<T>] {
    &self.0
  }
}

impl<T> From<Hull<T>> for Vec<Point<T>> {
  fn from(hull: Hull<T>) -> Vec<Point<T>> {
    hull.0
  }
}

impl<T> IntoIterator for Hull<T> {
  type Item = Point<T>;
  type IntoIter = std::vec::IntoIter<Point<T>>;
  fn into_iter(self) -> Self::IntoIter {
    self.0.into_iter()
  }
}

impl<'a, T> IntoIterator for &'a Hull<T> {
  type Item = &'a Point<T>;
  type IntoIter = std::slice::Iter<'a, Point<T>>;
  fn into_iter(self) -> Self::IntoIter {
    self.0.iter()
  }
}
