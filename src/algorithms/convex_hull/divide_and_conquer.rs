use log::{debug, trace};
use std::cmp::Ordering;

use crate::data::{LinkedHull, Point, PointId};
use crate::observer::{HullObserver, NoopObserver, Step};
use crate::{turn, Error, HullScalar, Orientation};

// https://en.wikipedia.org/wiki/Convex_hull_algorithms#Divide_and_conquer

// Properties:
//    No panics.
//    On success the on-hull points form one clockwise cycle of strictly
//    convex vertices.
//    Every point off the hull has no links.
/// $O(n \log n)$ Convex hull of a set of points.
///
/// Sorts the points, builds the hull with [`HullBuilder`] and returns the
/// linked arena. Walk the hull with [`LinkedHull::hull`] or
/// [`LinkedHull::iter_cw`].
///
/// # Errors
/// * [`Error::InsufficientVertices`] if fewer than two points are given.
/// * [`Error::InvalidCoordinate`] if a coordinate is NaN or infinite.
///
/// # Examples
///
/// ```rust
/// # use dchull::algorithms::convex_hull;
/// # use dchull::data::Point;
/// # use dchull::Error;
/// let hull = convex_hull(vec![
///   Point::new([0, 0]),
///   Point::new([1, 0]),
///   Point::new([0, 1]),
/// ])?;
/// let cw: Vec<&Point<i32>> = hull.hull_points();
/// assert_eq!(cw, vec![&Point::new([0, 0]), &Point::new([0, 1]), &Point::new([1, 0])]);
///
/// let empty_set: Vec<Point<i32>> = vec![];
/// assert_eq!(convex_hull(empty_set).err(), Some(Error::InsufficientVertices));
/// # Ok::<(), Error>(())
/// ```
pub fn convex_hull<T>(pts: Vec<Point<T>>) -> Result<LinkedHull<T>, Error>
where
  T: HullScalar,
{
  let mut hull = LinkedHull::new(pts)?;
  HullBuilder::new().build(&mut hull)?;
  Ok(hull)
}

/// Divide-and-conquer hull construction over a [`LinkedHull`].
///
/// The builder owns an observer that is told about every base case and
/// every merge. Use [`HullBuilder::new`] for a silent build and
/// [`HullBuilder::with_observer`] to watch it.
///
/// ```rust
/// # use dchull::algorithms::HullBuilder;
/// # use dchull::data::{LinkedHull, Point};
/// # use dchull::observer::Step;
/// let mut hull = LinkedHull::new(vec![
///   Point::new([0, 0]),
///   Point::new([0, 1]),
///   Point::new([3, 0]),
///   Point::new([3, 1]),
/// ])?;
/// let mut steps = Vec::new();
/// HullBuilder::with_observer(|_: &LinkedHull<i32>, step: Step| steps.push(step)).build(&mut hull)?;
/// assert_eq!(steps, vec![Step::BaseCase, Step::BaseCase, Step::Merging, Step::Merged]);
/// assert_eq!(hull.hull().len(), 4);
/// # Ok::<(), dchull::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct HullBuilder<O = NoopObserver> {
  observer: O,
}

impl HullBuilder<NoopObserver> {
  pub fn new() -> HullBuilder<NoopObserver> {
    HullBuilder {
      observer: NoopObserver,
    }
  }
}

impl<O> HullBuilder<O> {
  pub fn with_observer(observer: O) -> HullBuilder<O> {
    HullBuilder { observer }
  }

  pub fn into_observer(self) -> O {
    self.observer
  }

  /// Compute the convex hull of every point in `hull`.
  ///
  /// Any links left over from an earlier build are dropped first. Coincident
  /// points are represented by the first of them; the others stay off the
  /// hull. If all points coincide the hull is that one point, linked to
  /// itself.
  pub fn build<T>(&mut self, hull: &mut LinkedHull<T>) -> Result<(), Error>
  where
    T: HullScalar,
    O: HullObserver<T>,
  {
    for id in hull.ids().collect::<Vec<_>>() {
      hull.evict(id);
      hull.set_highlight(id, false);
    }
    let ids = hull.distinct_ids();
    match ids.as_slice() {
      [] => Err(Error::InsufficientVertices),
      &[only] => {
        hull.link(only, only);
        hull.set_on_hull(only, true);
        trace!("single distinct point {:?}", only);
        self.observer.on_step(hull, Step::BaseCase);
        Ok(())
      }
      _ => self.build_hull(hull, &ids),
    }
  }

  /// Build the hull of `ids`.
  ///
  /// `ids` must be sorted, refer to distinct points and hold at least two
  /// entries; none of them may be on a hull yet. Two and three points are
  /// linked directly. Larger sets are split in half, both halves are built
  /// and then joined with [`merge_hulls`](Self::merge_hulls).
  pub fn build_hull<T>(&mut self, hull: &mut LinkedHull<T>, ids: &[PointId]) -> Result<(), Error>
  where
    T: HullScalar,
    O: HullObserver<T>,
  {
    match *ids {
      [] | [_] => return Err(Error::InsufficientVertices),
      [a, b] => {
        hull.link(a, b);
        hull.link(b, a);
        hull.set_on_hull(a, true);
        hull.set_on_hull(b, true);
      }
      [a, b, c] => match turn(hull.point(a), hull.point(b), hull.point(c)) {
        Orientation::ClockWise => link_cycle(hull, &[a, b, c]),
        Orientation::CounterClockWise => link_cycle(hull, &[a, c, b]),
        // Sorted and distinct, so `b` lies strictly between the other two.
        Orientation::CoLinear => {
          link_cycle(hull, &[a, c]);
          hull.evict(b);
        }
      },
      _ => {
        let (left, right) = ids.split_at(ids.len() / 2);
        self.build_hull(hull, left)?;
        self.build_hull(hull, right)?;
        for &id in ids {
          hull.set_highlight(id, true);
        }
        self.observer.on_step(hull, Step::Merging);
        self.merge_hulls(hull, left, right)?;
        for &id in ids {
          hull.set_highlight(id, false);
        }
        return Ok(());
      }
    }
    trace!("base case {:?}", ids);
    self.observer.on_step(hull, Step::BaseCase);
    Ok(())
  }

  /// Join the hulls of `left` and `right` into a single hull.
  ///
  /// Both sides must already be complete hulls and every point of `left`
  /// must sort before every point of `right`. The two hulls are connected
  /// along their upper and lower tangents, and the points that end up
  /// between the tangents are evicted.
  ///
  /// # Errors
  /// * [`Error::BrokenLink`] if either side is not a well formed hull.
  /// * [`Error::TangentNotFound`] if a tangent search does not settle.
  pub fn merge_hulls<T>(
    &mut self,
    hull: &mut LinkedHull<T>,
    left: &[PointId],
    right: &[PointId],
  ) -> Result<(), Error>
  where
    T: HullScalar,
    O: HullObserver<T>,
  {
    let l0 = left
      .iter()
      .rev()
      .copied()
      .find(|&id| hull.is_on_hull(id))
      .ok_or(Error::BrokenLink)?;
    let r0 = right
      .iter()
      .copied()
      .find(|&id| hull.is_on_hull(id))
      .ok_or(Error::BrokenLink)?;
    let budget = left.len() + right.len();

    let (upper_left, upper_right) = Tangent::Upper.find(hull, l0, r0, budget)?;
    let (lower_left, lower_right) = Tangent::Lower.find(hull, l0, r0, budget)?;

    hull.set_cw(upper_left, upper_right);
    hull.set_ccw(upper_right, upper_left);
    hull.set_ccw(lower_left, lower_right);
    hull.set_cw(lower_right, lower_left);

    for &id in left.iter().chain(right) {
      hull.set_on_hull(id, false);
    }
    let mut current = upper_left;
    let mut visited = 0;
    loop {
      if visited == budget {
        return Err(Error::BrokenLink);
      }
      hull.set_on_hull(current, true);
      visited += 1;
      current = hull.cw_link(current)?;
      if current == upper_left {
        break;
      }
    }
    for &id in left.iter().chain(right) {
      if !hull.is_on_hull(id) {
        hull.evict(id);
      }
    }

    debug!(
      "merged {} + {} points: upper tangent {:?}-{:?}, lower tangent {:?}-{:?}, {} on hull",
      left.len(),
      right.len(),
      upper_left,
      upper_right,
      lower_left,
      lower_right,
      visited
    );
    self.observer.on_step(hull, Step::Merged);
    Ok(())
  }
}

// Link `cycle` in the given (clockwise) order and mark it on hull.
fn link_cycle<T>(hull: &mut LinkedHull<T>, cycle: &[PointId]) {
  for (i, &id) in cycle.iter().enumerate() {
    hull.link(id, cycle[(i + 1) % cycle.len()]);
    hull.set_on_hull(id, true);
  }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Tangent {
  Upper,
  Lower,
}

impl Tangent {
  // Walk the left endpoint away from the right hull and the right endpoint
  // away from the left hull until the line through them supports both.
  // Starts from the facing extremes of the two hulls.
  fn find<T>(
    self,
    hull: &LinkedHull<T>,
    mut left: PointId,
    mut right: PointId,
    budget: usize,
  ) -> Result<(PointId, PointId), Error>
  where
    T: HullScalar,
  {
    // Every step moves one endpoint, and neither endpoint can pass its whole
    // hull, so `budget` steps are enough.
    for _ in 0..=budget {
      let next_right = match self {
        Tangent::Upper => hull.cw_link(right)?,
        Tangent::Lower => hull.ccw_link(right)?,
      };
      if is_beyond(hull, left, right, next_right, self.beyond()) {
        right = next_right;
        continue;
      }
      let next_left = match self {
        Tangent::Upper => hull.ccw_link(left)?,
        Tangent::Lower => hull.cw_link(left)?,
      };
      if is_beyond(hull, right, left, next_left, self.beyond().reverse()) {
        left = next_left;
        continue;
      }
      return Ok((left, right));
    }
    Err(Error::TangentNotFound)
  }

  // Orientation of a point beyond the tangent, seen from the left endpoint
  // towards the right one.
  fn beyond(self) -> Orientation {
    match self {
      Tangent::Upper => Orientation::CounterClockWise,
      Tangent::Lower => Orientation::ClockWise,
    }
  }
}

// Is `next` beyond the line `pivot`-`current`? Colinear points count when
// they are farther from `pivot`, which keeps colinear points off the hull.
fn is_beyond<T>(
  hull: &LinkedHull<T>,
  pivot: PointId,
  current: PointId,
  next: PointId,
  beyond: Orientation,
) -> bool
where
  T: HullScalar,
{
  let orientation = turn(hull.point(pivot), hull.point(current), hull.point(next));
  orientation == beyond
    || (orientation.is_colinear()
      && hull.point(pivot).cmp_distance_to(hull.point(next), hull.point(current))
        == Ordering::Greater)
}
