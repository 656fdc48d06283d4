use array_init::array_init;
use rand::distributions::{Distribution, Standard};
use rand::Rng;
use std::cmp::Ordering;
use std::fmt;
use std::ops::Deref;
use std::ops::Index;

use crate::{HullScalar, Orientation, TotalOrd};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Point<T, const N: usize = 2> {
  pub array: [T; N],
}

// Random sampling.
impl<T, const N: usize> Distribution<Point<T, N>> for Standard
where
  Standard: Distribution<T>,
{
  fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Point<T, N> {
    Point {
      array: array_init(|_| rng.gen()),
    }
  }
}

// Methods on N-dimensional points.
impl<T, const N: usize> Point<T, N> {
  pub const fn new(array: [T; N]) -> Point<T, N> {
    Point { array }
  }

  pub fn cast<U, F>(&self, f: F) -> Point<U, N>
  where
    T: Clone,
    F: Fn(T) -> U,
  {
    Point {
      array: array_init(|i| f(self.array[i].clone())),
    }
  }
}

// Methods on two-dimensional points.
impl<T> Point<T, 2> {
  pub fn x_coord(&self) -> &T {
    &self.array[0]
  }

  pub fn y_coord(&self) -> &T {
    &self.array[1]
  }

  /// Direction of the turn `p -> q -> r`. See [`Orientation::new`].
  pub fn orient(p: &Point<T, 2>, q: &Point<T, 2>, r: &Point<T, 2>) -> Orientation
  where
    T: HullScalar,
  {
    Orientation::new(&p.array, &q.array, &r.array)
  }

  /// Compare the distance from `self` to `p` with the distance from `self` to `q`.
  pub fn cmp_distance_to(&self, p: &Point<T, 2>, q: &Point<T, 2>) -> Ordering
  where
    T: HullScalar,
  {
    T::cmp_dist(&self.array, &p.array, &q.array)
  }

  pub fn is_finite(&self) -> bool
  where
    T: HullScalar,
  {
    self.array.iter().all(HullScalar::is_finite)
  }
}

// Lexicographic: by x, then by y.
impl<T: TotalOrd, const N: usize> TotalOrd for Point<T, N> {
  fn total_cmp(&self, other: &Self) -> Ordering {
    self
      .array
      .iter()
      .zip(other.array.iter())
      .map(|(a, b)| a.total_cmp(b))
      .find(|ord| ord.is_ne())
      .unwrap_or(Ordering::Equal)
  }
}

impl<T, const N: usize> Index<usize> for Point<T, N> {
  type Output = T;
  fn index(&self, key: usize) -> &T {
    self.array.index(key)
  }
}

impl<T> From<(T, T)> for Point<T, 2> {
  fn from(point: (T, T)) -> Point<T, 2> {
    Point {
      array: [point.0, point.1],
    }
  }
}

impl<T, const N: usize> Deref for Point<T, N> {
  type Target = [T; N];
  fn deref(&self) -> &[T; N] {
    &self.array
  }
}

/// Space separated coordinates, the same format [`parse_points`](crate::parse::parse_points) reads.
impl<T: fmt::Display> fmt::Display for Point<T, 2> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{} {}", self.array[0], self.array[1])
  }
}
