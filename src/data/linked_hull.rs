use std::fmt;

use crate::data::Point;
use crate::{Error, HullScalar, Orientation, TotalOrd};

/// Handle of a point inside a [`LinkedHull`].
///
/// Ids follow the sorted order of the points: `PointId(0)` is the leftmost
/// (lowest on ties) point.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PointId(usize);

impl fmt::Debug for PointId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
    write!(f, "PointId({})", self.0)
  }
}

impl PointId {
  const INVALID: PointId = PointId(usize::MAX);

  pub fn usize(self) -> usize {
    self.0
  }

  fn valid(self) -> Option<PointId> {
    if self == PointId::INVALID {
      None
    } else {
      Some(self)
    }
  }
}

#[derive(Copy, Clone, Debug)]
struct Links {
  cw: PointId,
  ccw: PointId,
  on_hull: bool,
  highlighted: bool,
}

impl Links {
  const DETACHED: Links = Links {
    cw: PointId::INVALID,
    ccw: PointId::INVALID,
    on_hull: false,
    highlighted: false,
  };
}

/// Arena of points with clockwise / counter-clockwise hull links.
///
/// Coordinates never change after construction. The links describe the hull
/// each point currently belongs to: a hull of `n >= 2` vertices is a single
/// cycle where following `cw` visits the vertices clockwise and `ccw` visits
/// them in reverse. Points that are not on a hull have no links.
#[derive(Clone, Debug)]
pub struct LinkedHull<T> {
  points: Vec<Point<T>>,
  links: Vec<Links>,
}

impl<T> LinkedHull<T>
where
  T: HullScalar,
{
  /// Sort `points` by x, then y, and store them without any links.
  ///
  /// # Errors
  /// * [`Error::InsufficientVertices`] if fewer than two points are given.
  /// * [`Error::InvalidCoordinate`] if any coordinate is NaN or infinite.
  pub fn new(mut points: Vec<Point<T>>) -> Result<LinkedHull<T>, Error> {
    if points.len() < 2 {
      return Err(Error::InsufficientVertices);
    }
    if !points.iter().all(Point::is_finite) {
      return Err(Error::InvalidCoordinate);
    }
    points.sort_by(TotalOrd::total_cmp);
    let links = vec![Links::DETACHED; points.len()];
    Ok(LinkedHull { points, links })
  }

  /// Ids of the first point of every run of coincident points, in sorted order.
  pub fn distinct_ids(&self) -> Vec<PointId> {
    let mut ids: Vec<PointId> = Vec::with_capacity(self.len());
    for id in self.ids() {
      match ids.last() {
        Some(&prev) if self.point(prev).total_cmp(self.point(id)).is_eq() => {}
        _ => ids.push(id),
      }
    }
    ids
  }

  /// Find a point with the given coordinates, preferring one that is on the hull.
  pub fn find(&self, pt: &Point<T>) -> Option<PointId> {
    let start = self.points.partition_point(|other| other.total_cmp(pt).is_lt());
    let end = start
      + self.points[start..]
        .iter()
        .take_while(|&other| other.total_cmp(pt).is_eq())
        .count();
    (start..end)
      .map(PointId)
      .find(|&id| self.is_on_hull(id))
      .or_else(|| (start < end).then_some(PointId(start)))
  }

  /// Check the link invariants.
  ///
  /// * Every on-hull point has both links, and `a.cw.ccw == a`.
  /// * All on-hull points form a single cycle.
  /// * Points off the hull have no links.
  /// * Hulls of three or more vertices turn clockwise at every vertex.
  pub fn validate(&self) -> Result<(), Error> {
    for id in self.ids() {
      let links = &self.links[id.0];
      if !links.on_hull {
        if links.cw.valid().is_some() || links.ccw.valid().is_some() {
          return Err(Error::BrokenLink);
        }
        continue;
      }
      let cw = links.cw.valid().ok_or(Error::BrokenLink)?;
      let ccw = links.ccw.valid().ok_or(Error::BrokenLink)?;
      if !self.links[cw.0].on_hull || self.links[cw.0].ccw != id {
        return Err(Error::BrokenLink);
      }
      if !self.links[ccw.0].on_hull || self.links[ccw.0].cw != id {
        return Err(Error::BrokenLink);
      }
    }

    let hull = self.hull();
    let on_hull = self.ids().filter(|&id| self.is_on_hull(id)).count();
    if hull.is_empty() || hull.len() != on_hull {
      return Err(Error::BrokenLink);
    }
    if hull.len() == 2 && self.point(hull[0]).total_cmp(self.point(hull[1])).is_eq() {
      return Err(Error::ConvexViolation);
    }
    if hull.len() >= 3 {
      for (i, &id) in hull.iter().enumerate() {
        let prev = hull[(i + hull.len() - 1) % hull.len()];
        let next = hull[(i + 1) % hull.len()];
        match Point::orient(self.point(prev), self.point(id), self.point(next)) {
          Orientation::ClockWise => {}
          Orientation::CoLinear => return Err(Error::ConvexViolation),
          Orientation::CounterClockWise => return Err(Error::ClockWiseViolation),
        }
      }
    }
    Ok(())
  }
}

impl<T> LinkedHull<T> {
  pub fn len(&self) -> usize {
    self.points.len()
  }

  pub fn is_empty(&self) -> bool {
    self.points.is_empty()
  }

  pub fn ids(&self) -> impl Iterator<Item = PointId> {
    (0..self.points.len()).map(PointId)
  }

  pub fn point(&self, id: PointId) -> &Point<T> {
    &self.points[id.0]
  }

  pub fn points(&self) -> &[Point<T>] {
    &self.points
  }

  pub fn cw(&self, id: PointId) -> Option<PointId> {
    self.links[id.0].cw.valid()
  }

  pub fn ccw(&self, id: PointId) -> Option<PointId> {
    self.links[id.0].ccw.valid()
  }

  pub fn is_on_hull(&self, id: PointId) -> bool {
    self.links[id.0].on_hull
  }

  pub fn is_highlighted(&self, id: PointId) -> bool {
    self.links[id.0].highlighted
  }

  /// Presentation only, never read by the hull algorithms.
  pub fn set_highlight(&mut self, id: PointId, highlighted: bool) {
    self.links[id.0].highlighted = highlighted;
  }

  /// The lexicographically smallest point on the hull.
  pub fn hull_start(&self) -> Option<PointId> {
    self.ids().find(|&id| self.is_on_hull(id))
  }

  /// Hull vertices in clockwise order, starting at [`hull_start`](Self::hull_start).
  pub fn hull(&self) -> Vec<PointId> {
    match self.hull_start() {
      Some(start) => self.iter_cw(start).collect(),
      None => Vec::new(),
    }
  }

  /// Every hull cycle currently in the arena, each starting at its smallest
  /// point. Halfway through a build there is one cycle per finished sub-hull.
  pub fn cycles(&self) -> Vec<Vec<PointId>> {
    let mut seen = vec![false; self.len()];
    let mut cycles = Vec::new();
    for id in self.ids() {
      if self.is_on_hull(id) && !seen[id.0] {
        let cycle: Vec<PointId> = self.iter_cw(id).collect();
        for &member in &cycle {
          seen[member.0] = true;
        }
        cycles.push(cycle);
      }
    }
    cycles
  }

  pub fn hull_points(&self) -> Vec<&Point<T>> {
    self.hull().into_iter().map(|id| self.point(id)).collect()
  }

  /// Walk the hull clockwise from `start`. Yields nothing if `start` is not on a hull.
  pub fn iter_cw(&self, start: PointId) -> HullIter<'_, T> {
    HullIter::new(self, start, Direction::Cw)
  }

  /// Walk the hull counter-clockwise from `start`.
  pub fn iter_ccw(&self, start: PointId) -> HullIter<'_, T> {
    HullIter::new(self, start, Direction::Ccw)
  }

  pub(crate) fn link(&mut self, from: PointId, to: PointId) {
    self.links[from.0].cw = to;
    self.links[to.0].ccw = from;
  }

  pub(crate) fn set_cw(&mut self, id: PointId, cw: PointId) {
    self.links[id.0].cw = cw;
  }

  pub(crate) fn set_ccw(&mut self, id: PointId, ccw: PointId) {
    self.links[id.0].ccw = ccw;
  }

  pub(crate) fn set_on_hull(&mut self, id: PointId, on_hull: bool) {
    self.links[id.0].on_hull = on_hull;
  }

  /// Drop `id` from whatever hull it was on.
  pub(crate) fn evict(&mut self, id: PointId) {
    let highlighted = self.links[id.0].highlighted;
    self.links[id.0] = Links {
      highlighted,
      ..Links::DETACHED
    };
  }

  pub(crate) fn cw_link(&self, id: PointId) -> Result<PointId, Error> {
    self.cw(id).ok_or(Error::BrokenLink)
  }

  pub(crate) fn ccw_link(&self, id: PointId) -> Result<PointId, Error> {
    self.ccw(id).ok_or(Error::BrokenLink)
  }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Direction {
  Cw,
  Ccw,
}

/// Iterator over the vertices of a hull, see [`LinkedHull::iter_cw`].
///
/// Stops when it gets back to the first vertex, on a missing link, or after
/// visiting as many vertices as the arena holds.
pub struct HullIter<'a, T> {
  hull: &'a LinkedHull<T>,
  start: PointId,
  next: Option<PointId>,
  direction: Direction,
  remaining: usize,
}

impl<'a, T> HullIter<'a, T> {
  fn new(hull: &'a LinkedHull<T>, start: PointId, direction: Direction) -> HullIter<'a, T> {
    let next = if hull.is_on_hull(start) {
      Some(start)
    } else {
      None
    };
    HullIter {
      hull,
      start,
      next,
      direction,
      remaining: hull.len(),
    }
  }
}

impl<'a, T> Iterator for HullIter<'a, T> {
  type Item = PointId;
  fn next(&mut self) -> Option<PointId> {
    let current = self.next?;
    if self.remaining == 0 {
      self.next = None;
      return None;
    }
    self.remaining -= 1;
    let following = match self.direction {
      Direction::Cw => self.hull.cw(current),
      Direction::Ccw => self.hull.ccw(current),
    };
    self.next = following.filter(|&id| id != self.start);
    Some(current)
  }
}
