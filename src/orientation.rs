use std::cmp::Ordering;

use crate::HullScalar;

#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Copy, Clone)]
pub enum Orientation {
  /// Left turn.
  CounterClockWise,
  /// Right turn.
  ClockWise,
  CoLinear,
}

impl Orientation {
  /// Determine the direction you have to turn if you walk from `p1`
  /// to `p2` to `p3`.
  ///
  /// For fixed-precision types (i8,i16,i32,i64,etc), this function is
  /// guaranteed to work for any input and never cause any arithmetic overflows.
  /// Floating point inputs are classified exactly.
  ///
  /// # Examples
  ///
  /// ```rust
  /// # use dchull::data::Point;
  /// # use dchull::Orientation;
  /// let p1 = Point::new([ 0, 0 ]);
  /// let p2 = Point::new([ 0, 1 ]); // One unit above p1.
  /// // (0,0) -> (0,1) -> (0,2) == Orientation::CoLinear
  /// assert!(Orientation::new(&p1, &p2, &Point::new([ 0, 2 ])).is_colinear());
  /// // (0,0) -> (0,1) -> (-1,2) == Orientation::CounterClockWise
  /// assert!(Orientation::new(&p1, &p2, &Point::new([ -1, 2 ])).is_ccw());
  /// // (0,0) -> (0,1) -> (1,2) == Orientation::ClockWise
  /// assert!(Orientation::new(&p1, &p2, &Point::new([ 1, 2 ])).is_cw());
  /// ```
  pub fn new<T>(p1: &[T; 2], p2: &[T; 2], p3: &[T; 2]) -> Orientation
  where
    T: HullScalar,
  {
    match T::cmp_slope(p1, p2, p3) {
      Ordering::Less => Orientation::ClockWise,
      Ordering::Equal => Orientation::CoLinear,
      Ordering::Greater => Orientation::CounterClockWise,
    }
  }

  pub fn is_colinear(self) -> bool {
    matches!(self, Orientation::CoLinear)
  }

  pub fn is_ccw(self) -> bool {
    matches!(self, Orientation::CounterClockWise)
  }

  pub fn is_cw(self) -> bool {
    matches!(self, Orientation::ClockWise)
  }

  #[must_use]
  pub fn reverse(self) -> Orientation {
    match self {
      Orientation::CounterClockWise => Orientation::ClockWise,
      Orientation::ClockWise => Orientation::CounterClockWise,
      Orientation::CoLinear => Orientation::CoLinear,
    }
  }
}

/// Classify the turn made by the triple `a`, `b`, `c`.
///
/// This is the sign of `(a - c) × (b - c)`: positive is a left turn
/// ([`Orientation::CounterClockWise`]), negative a right turn
/// ([`Orientation::ClockWise`]) and zero [`Orientation::CoLinear`]. The
/// determinant is invariant under cyclic rotation, so this agrees with
/// [`Orientation::new`]`(a, b, c)`.
///
/// ```rust
/// # use dchull::data::Point;
/// # use dchull::{turn, Orientation};
/// let a = Point::new([0, 0]);
/// let b = Point::new([1, 0]);
/// assert_eq!(turn(&a, &b, &Point::new([1, 1])), Orientation::CounterClockWise);
/// assert_eq!(turn(&a, &b, &Point::new([1, -1])), Orientation::ClockWise);
/// assert_eq!(turn(&a, &b, &Point::new([2, 0])), Orientation::CoLinear);
/// ```
pub fn turn<T>(a: &[T; 2], b: &[T; 2], c: &[T; 2]) -> Orientation
where
  T: HullScalar,
{
  Orientation::new(c, a, b)
}
