use std::cmp::Ordering;

use crate::data::Point;
use crate::{collinear, left_strictly, HullScalar};

/// Counter-clockwise order of `a` and `b` around `pivot`.
///
/// `a` comes first if it is strictly to the right of `pivot -> b`. Points that
/// are colinear with the pivot are ordered by their distance from it, nearest
/// first, comparing the horizontal distance before the vertical one. Points at
/// the same distance compare equal.
///
/// The order is consistent as long as no point lies below the pivot, or level
/// with it and to its right, which holds when the pivot is the lowest,
/// rightmost point of the set.
pub fn radial_cmp<T>(pivot: &Point<T>, a: &Point<T>, b: &Point<T>) -> Ordering
where
  T: HullScalar,
{
  if left_strictly(pivot, a, b) {
    Ordering::Less
  } else if collinear(pivot, a, b) {
    T::cmp_distance(pivot.x_coord(), a.x_coord(), b.x_coord())
      .then_with(|| T::cmp_distance(pivot.y_coord(), a.y_coord(), b.y_coord()))
  } else {
    Ordering::Greater
  }
}

/// $O(n \log n)$ Sort `pts[1..]` radially around the pivot `pts[0]`.
///
/// The pivot itself is never moved. See [`radial_cmp`] for the order.
pub fn sort_radially<T>(pts: &mut [Point<T>])
where
  T: HullScalar,
{
  if let Some((pivot, rest)) = pts.split_first_mut() {
    let pivot = &*pivot;
    merge_sort_by(rest, |a, b| radial_cmp(pivot, a, b));
  }
}

// Bottom-up merge sort: runs of width 1, 2, 4, ... are merged pairwise
// through a single buffer. Stable, no recursion.
fn merge_sort_by<T, F>(items: &mut [T], mut cmp: F)
where
  T: Clone,
  F: FnMut(&T, &T) -> Ordering,
{
  let len = items.len();
  if len < 2 {
    return;
  }
  let mut buffer: Vec<T> = Vec::with_capacity(len);
  let mut width = 1;
  while width < len {
    let mut start = 0;
    while start + width < len {
      let end = len.min(start + 2 * width);
      merge(&mut items[start..end], width, &mut buffer, &mut cmp);
      start = end;
    }
    width *= 2;
  }
}

// Merge the sorted runs run[..mid] and run[mid..].
fn merge<T, F>(run: &mut [T], mid: usize, buffer: &mut Vec<T>, cmp: &mut F)
where
  T: Clone,
  F: FnMut(&T, &T) -> Ordering,
{
  buffer.clear();
  let (left, right) = run.split_at(mid);
  let (mut i, mut j) = (0, 0);
  while i < left.len() && j < right.len() {
    // Ties go to the left run.
    if cmp(&left[i], &right[j]) != Ordering::Greater {
      buffer.push(left[i].clone());
      i += 1;
    } else {
      buffer.push(right[j].clone());
      j += 1;
    }
  }
  buffer.extend_from_slice(&left[i..]);
  buffer.extend_from_slice(&right[j..]);
  run.clone_from_slice(buffer);
}
