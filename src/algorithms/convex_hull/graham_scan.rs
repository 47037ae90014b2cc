use super::pivot::bottom_point_index;
use super::prefilter::discard_interior;
use super::radial_sort::sort_radially;
use super::scan::build_hull;
use crate::data::{Hull, Point};
use crate::HullScalar;

// https://en.wikipedia.org/wiki/Graham_scan

/// Settings for the Graham scan.
///
/// ```rust
/// # use hull2d::algorithms::GrahamScan;
/// # use hull2d::data::Point;
/// let scan = GrahamScan::new().with_prefilter(false);
/// assert!(!scan.prefilter());
/// let hull = scan.run(vec![Point::new([0, 0]), Point::new([1, 0]), Point::new([2, 0])]);
/// assert_eq!(hull.to_vec(), vec![Point::new([2, 0]), Point::new([0, 0])]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GrahamScan {
  prefilter: bool,
}

impl Default for GrahamScan {
  fn default() -> Self {
    GrahamScan { prefilter: true }
  }
}

impl GrahamScan {
  pub fn new() -> Self {
    Self::default()
  }

  /// Drop points inside the quadrilateral of extreme points before sorting.
  /// The hull is the same either way.
  #[must_use]
  pub fn with_prefilter(self, prefilter: bool) -> Self {
    GrahamScan { prefilter }
  }

  pub fn prefilter(&self) -> bool {
    self.prefilter
  }

  /// $O(n \log n)$ Convex hull of a set of points.
  ///
  /// See [`graham_scan`].
  pub fn run<T>(&self, mut pts: Vec<Point<T>>) -> Hull<T>
  where
    T: HullScalar,
  {
    if self.prefilter {
      discard_interior(&mut pts);
    }
    let Some(p0) = bottom_point_index(&pts) else {
      return Hull::new_unchecked(pts);
    };
    pts.swap(0, p0);
    sort_radially(&mut pts);
    Hull::new_unchecked(build_hull(&pts))
  }
}

// Properties:
//    No panics.
//    No overflows.
//    No points are outside the resulting hull.
/// $O(n \log n)$ Convex hull of a set of points.
///
/// [Graham scan][wiki] algorithm for finding the smallest convex polygon which
/// contains all the given points.
///
/// # Properties
/// * No points from the input set will be outside the returned hull.
/// * All vertices of the hull are from the input set.
/// * The hull starts at the lowest point (rightmost among the lowest) and
///   runs counter-clockwise without colinear or repeated vertices.
/// * Fewer than three distinct points, or points on a single line, give a
///   degenerate hull: empty, a single point, or the two endpoints of the line.
///
/// # Examples
///
/// ```rust
/// # use hull2d::algorithms::convex_hull;
/// # use hull2d::data::Point;
/// let empty_set: Vec<Point<i32>> = vec![];
/// assert!(convex_hull(empty_set).is_empty());
/// ```
///
/// ```rust
/// # use hull2d::algorithms::convex_hull;
/// # use hull2d::data::Point;
/// let dups = vec![Point::new([0, 0])].repeat(3);
/// assert_eq!(convex_hull(dups).to_vec(), vec![Point::new([0, 0])]);
/// ```
///
/// [wiki]: https://en.wikipedia.org/wiki/Graham_scan
pub fn graham_scan<T>(pts: Vec<Point<T>>) -> Hull<T>
where
  T: HullScalar,
{
  GrahamScan::new().run(pts)
}

/// Alias of [`graham_scan`].
pub fn convex_hull<T>(pts: Vec<Point<T>>) -> Hull<T>
where
  T: HullScalar,
{
  graham_scan(pts)
}
