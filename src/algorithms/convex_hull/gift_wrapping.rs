use std::cmp::Ordering;

use crate::data::Point;
use crate::{Error, HullScalar, Orientation, TotalOrd};

// https://en.wikipedia.org/wiki/Gift_wrapping_algorithm

// Properties:
//    No panics.
//    Every vertex is strictly convex.
//    No points are outside the resulting polygon.
/// Convex hull of a set of points, as a list of vertices.
///
/// [Gift Wrapping][wiki] algorithm. Slow but simple; the crate uses it to
/// check [`HullBuilder`](crate::algorithms::HullBuilder) and as a benchmark
/// baseline.
///
/// The vertices come in clockwise order starting with the lexicographically
/// smallest point, the same order as
/// [`LinkedHull::hull_points`](crate::data::LinkedHull::hull_points). Two
/// distinct points give a two-vertex hull and a set of coincident points gives
/// a single vertex.
///
/// # Errors
/// Will return an error iff the input set contains less than two points.
///
/// # Time complexity
/// $O(nh)$ where h is the number of vertices on the hull.
///
/// # Examples
///
/// ```rust
/// # use dchull::algorithms::convex_hull::gift_wrapping::convex_hull;
/// # use dchull::data::Point;
/// # use dchull::Error;
/// let hull = convex_hull(vec![
///   Point::new([0, 0]),
///   Point::new([2, 0]),
///   Point::new([1, 0]),
///   Point::new([1, 3]),
/// ])?;
/// assert_eq!(hull, vec![Point::new([0, 0]), Point::new([1, 3]), Point::new([2, 0])]);
///
/// let empty_set: Vec<Point<i32>> = vec![];
/// assert_eq!(convex_hull(empty_set).err(), Some(Error::InsufficientVertices));
/// # Ok::<(), Error>(())
/// ```
///
/// [wiki]: https://en.wikipedia.org/wiki/Gift_wrapping_algorithm
pub fn convex_hull<T>(mut pts: Vec<Point<T>>) -> Result<Vec<Point<T>>, Error>
where
  T: HullScalar,
{
  if pts.len() < 2 {
    return Err(Error::InsufficientVertices);
  }
  if !pts.iter().all(Point::is_finite) {
    return Err(Error::InvalidCoordinate);
  }
  pts.sort_by(TotalOrd::total_cmp);
  pts.dedup_by(|a, b| a.total_cmp(b).is_eq());
  let n = pts.len();
  if n < 3 {
    return Ok(pts);
  }

  // After sorting, the first point is the leftmost (lowest on ties), which is
  // always a hull vertex.
  let start = 0;
  let mut hull: Vec<Point<T>> = Vec::new();
  let mut p = start;

  loop {
    hull.push(pts[p].clone());
    let mut q = (p + 1) % n;

    for i in 0..n {
      let orientation = Point::orient(&pts[p], &pts[q], &pts[i]);
      // Anything left of p->q lies outside a clockwise hull. On ties take the
      // farthest point so colinear points never become vertices.
      if orientation == Orientation::CounterClockWise
        || (orientation == Orientation::CoLinear
          && pts[p].cmp_distance_to(&pts[i], &pts[q]) == Ordering::Greater)
      {
        q = i;
      }
    }

    p = q;
    if p == start {
      break;
    }
  }

  Ok(hull)
}

#[cfg(test)]
#[cfg(not(tarpaulin_include))]
mod tests {
  use super::*;
  use crate::testing::*;

  use num_bigint::BigInt;

  use proptest::prelude::*;
  use test_strategy::proptest;

  #[test]
  fn convex_hull_colinear() {
    let points = vec![
      Point::new([0, 0]),
      Point::new([1, 0]),
      Point::new([2, 0]),
      Point::new([3, 0]),
      Point::new([4, 0]),
      Point::new([1, 1]),
    ];
    assert_eq!(
      convex_hull(points).unwrap(),
      vec![Point::new([0, 0]), Point::new([1, 1]), Point::new([4, 0])]
    );
  }

  #[test]
  fn convex_hull_all_colinear() {
    let points = vec![
      Point::new([0, 9]),
      Point::new([0, 8]),
      Point::new([0, 7]),
      Point::new([0, 6]),
    ];
    assert_eq!(
      convex_hull(points).unwrap(),
      vec![Point::new([0, 6]), Point::new([0, 9])]
    );
  }

  #[test]
  fn convex_hull_dups() {
    let points = vec![
      Point::new([0, 0]),
      Point::new([1, 0]),
      Point::new([0, 0]),
      Point::new([1, 0]),
      Point::new([2, 2]),
      Point::new([2, 2]),
      Point::new([5, 1]),
      Point::new([5, 1]),
    ];
    assert_eq!(
      convex_hull(points).unwrap(),
      vec![
        Point::new([0, 0]),
        Point::new([2, 2]),
        Point::new([5, 1]),
        Point::new([1, 0])
      ]
    );
  }

  #[test]
  fn convex_hull_single_location() {
    let points = vec![Point::new([3, 3]); 4];
    assert_eq!(convex_hull(points).unwrap(), vec![Point::new([3, 3])]);
  }

  #[test]
  fn convex_hull_insufficient() {
    assert_eq!(
      convex_hull(vec![Point::new([1, 1])]).err(),
      Some(Error::InsufficientVertices)
    );
    assert_eq!(
      convex_hull(vec![Point::new([1.0, 1.0]), Point::new([f64::INFINITY, 0.0])]).err(),
      Some(Error::InvalidCoordinate)
    );
  }

  #[test]
  fn unit_1() {
    let points: Vec<Point<BigInt>> = vec![
      Point::new([0, 0]),
      Point::new([-1, 1]),
      Point::new([0, 1]),
      Point::new([-717193444810564826, 1]),
    ]
    .into_iter()
    .map(|pt: Point<i64>| pt.cast(BigInt::from))
    .collect();
    let hull = convex_hull(points).unwrap();
    assert_eq!(hull.len(), 3);
  }

  fn is_strictly_convex<T: HullScalar>(hull: &[Point<T>]) -> bool {
    let n = hull.len();
    n < 3
      || (0..n).all(|i| {
        Point::orient(&hull[i], &hull[(i + 1) % n], &hull[(i + 2) % n]) == Orientation::ClockWise
      })
  }

  #[proptest]
  fn convex_hull_prop_small(#[strategy(point_set(any_small(), 2, 40))] pts: Vec<Point<i8>>) {
    let hull = convex_hull(pts.clone()).unwrap();
    prop_assert!(is_strictly_convex(&hull));
    for pt in hull.iter() {
      prop_assert!(pts.contains(pt));
    }
    // No input point lies strictly outside any edge.
    let n = hull.len();
    if n >= 3 {
      for pt in pts.iter() {
        for i in 0..n {
          prop_assert_ne!(
            Point::orient(&hull[i], &hull[(i + 1) % n], pt),
            Orientation::CounterClockWise
          );
        }
      }
    }
  }

  #[proptest]
  fn convex_hull_prop_r(#[strategy(point_set(any_r(), 2, 50))] pts: Vec<Point<BigInt>>) {
    let hull = convex_hull(pts.clone()).unwrap();
    prop_assert!(is_strictly_convex(&hull));
    for pt in hull.iter() {
      prop_assert!(pts.contains(pt));
    }
  }
}
