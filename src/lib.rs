#![deny(clippy::cast_lossless)]
#![doc(test(no_crate_inject))]
//! Divide-and-conquer convex hulls.
//!
//! Points live in a [`LinkedHull`](data::LinkedHull) arena where every point
//! knows its clockwise and counter-clockwise neighbor on whichever hull
//! currently contains it. [`HullBuilder`](algorithms::HullBuilder) splits the
//! sorted points in half, builds both halves and stitches them back together
//! along their upper and lower tangents.
//!
//! ```rust
//! # use dchull::algorithms::convex_hull;
//! # use dchull::data::Point;
//! let hull = convex_hull(vec![
//!   Point::new([0, 0]),
//!   Point::new([2, 0]),
//!   Point::new([1, 1]),
//!   Point::new([0, 2]),
//!   Point::new([2, 2]),
//! ])?;
//! assert_eq!(hull.hull().len(), 4);
//! assert!(!hull.is_on_hull(hull.find(&Point::new([1, 1])).unwrap()));
//! # Ok::<(), dchull::Error>(())
//! ```
use num_traits::Zero;
use std::cmp::Ordering;

pub mod algorithms;
pub mod data;
pub mod observer;
mod orientation;
pub mod parse;

pub use orientation::{turn, Orientation};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
  /// Fewer than two points were given.
  InsufficientVertices,
  /// A coordinate is NaN or infinite.
  InvalidCoordinate,
  /// A line of point input could not be read as an `x y` pair (1-based line number).
  MalformedInput { line: usize },
  /// A hull link is missing or does not point back.
  BrokenLink,
  /// A tangent search walked further than the size of its hull.
  TangentNotFound,
  /// Three consecutive hull vertices are colinear.
  ConvexViolation,
  ClockWiseViolation,
}

impl std::fmt::Display for Error {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
    match self {
      Error::InsufficientVertices => write!(f, "Insufficient vertices"),
      Error::InvalidCoordinate => write!(f, "Coordinates must be finite"),
      Error::MalformedInput { line } => write!(f, "Malformed point on line {}", line),
      Error::BrokenLink => write!(f, "Broken hull link"),
      Error::TangentNotFound => write!(f, "Tangent search did not converge"),
      Error::ConvexViolation => write!(f, "Convex violation"),
      Error::ClockWiseViolation => write!(f, "Clockwise violation"),
    }
  }
}

impl std::error::Error for Error {}

pub trait TotalOrd {
  fn total_cmp(&self, other: &Self) -> Ordering;

  fn total_min(self, other: Self) -> Self
  where
    Self: Sized,
  {
    std::cmp::min_by(self, other, TotalOrd::total_cmp)
  }

  fn total_max(self, other: Self) -> Self
  where
    Self: Sized,
  {
    std::cmp::max_by(self, other, TotalOrd::total_cmp)
  }
}

impl<A: TotalOrd> TotalOrd for &A {
  fn total_cmp(&self, other: &Self) -> Ordering {
    (*self).total_cmp(*other)
  }
}

impl<A: TotalOrd, B: TotalOrd> TotalOrd for (A, B) {
  fn total_cmp(&self, other: &Self) -> Ordering {
    self
      .0
      .total_cmp(&other.0)
      .then_with(|| self.1.total_cmp(&other.1))
  }
}

/// Coordinate types the hull can be built over.
///
/// Both predicates are exact: fixed-precision integers are widened so they
/// never overflow, floats go through adaptive exact arithmetic.
pub trait HullScalar: std::fmt::Debug + Clone + PartialEq + TotalOrd {
  /// Compare `(q - p) × (r - p)` against zero. `Greater` means `p`, `q`, `r`
  /// turn counter-clockwise.
  fn cmp_slope(p: &[Self; 2], q: &[Self; 2], r: &[Self; 2]) -> Ordering;
  /// Compare the distance from `p` to `q` with the distance from `p` to `r`.
  fn cmp_dist(p: &[Self; 2], q: &[Self; 2], r: &[Self; 2]) -> Ordering;

  fn is_finite(&self) -> bool {
    true
  }
}

macro_rules! fixed_precision {
  ( $ty:ty, $uty:ty, $ulong:ty ) => {
    impl TotalOrd for $ty {
      fn total_cmp(&self, other: &Self) -> Ordering {
        self.cmp(other)
      }
    }

    impl HullScalar for $ty {
      fn cmp_slope(p: &[Self; 2], q: &[Self; 2], r: &[Self; 2]) -> Ordering {
        // |a - b| in the unsigned type of twice the width, plus whether a < b.
        fn diff(a: $ty, b: $ty) -> ($ulong, bool) {
          if b > a {
            (b.wrapping_sub(a) as $uty as $ulong, true)
          } else {
            (a.wrapping_sub(b) as $uty as $ulong, false)
          }
        }
        let (qx, qx_neg) = diff(q[0], p[0]);
        let (ry, ry_neg) = diff(r[1], p[1]);
        let (qy, qy_neg) = diff(q[1], p[1]);
        let (rx, rx_neg) = diff(r[0], p[0]);
        let lhs_neg = (qx_neg ^ ry_neg) && qx != 0 && ry != 0;
        let rhs_neg = (qy_neg ^ rx_neg) && qy != 0 && rx != 0;
        match (lhs_neg, rhs_neg) {
          (true, false) => Ordering::Less,
          (false, true) => Ordering::Greater,
          (false, false) => (qx * ry).cmp(&(qy * rx)),
          (true, true) => (qy * rx).cmp(&(qx * ry)),
        }
      }

      fn cmp_dist(p: &[Self; 2], q: &[Self; 2], r: &[Self; 2]) -> Ordering {
        fn diff(a: $ty, b: $ty) -> $ulong {
          if b > a {
            b.wrapping_sub(a) as $uty as $ulong
          } else {
            a.wrapping_sub(b) as $uty as $ulong
          }
        }
        let pq_x = diff(p[0], q[0]);
        let pq_y = diff(p[1], q[1]);
        let (pq, pq_overflow) = (pq_x * pq_x).overflowing_add(pq_y * pq_y);
        let pr_x = diff(p[0], r[0]);
        let pr_y = diff(p[1], r[1]);
        let (pr, pr_overflow) = (pr_x * pr_x).overflowing_add(pr_y * pr_y);
        // An overflowed sum lies in [2^bits, 2^(bits+1)), so the wrapped
        // values still compare correctly when both overflow.
        match (pq_overflow, pr_overflow) {
          (true, false) => Ordering::Greater,
          (false, true) => Ordering::Less,
          _ => pq.cmp(&pr),
        }
      }
    }
  };
}

macro_rules! arbitrary_precision {
  ( $( $ty:ty ),* ) => {
    $(
      impl TotalOrd for $ty {
        fn total_cmp(&self, other: &Self) -> Ordering {
          self.cmp(other)
        }
      }

      impl HullScalar for $ty {
        fn cmp_slope(p: &[Self; 2], q: &[Self; 2], r: &[Self; 2]) -> Ordering {
          let lhs = (&q[0] - &p[0]) * (&r[1] - &p[1]);
          let rhs = (&q[1] - &p[1]) * (&r[0] - &p[0]);
          lhs.cmp(&rhs)
        }

        fn cmp_dist(p: &[Self; 2], q: &[Self; 2], r: &[Self; 2]) -> Ordering {
          let pq_x = &p[0] - &q[0];
          let pq_y = &p[1] - &q[1];
          let pq: Self = &pq_x * &pq_x + &pq_y * &pq_y;
          let pr_x = &p[0] - &r[0];
          let pr_y = &p[1] - &r[1];
          let pr: Self = &pr_x * &pr_x + &pr_y * &pr_y;
          pq.cmp(&pr)
        }
      }
    )*
  };
}

macro_rules! floating_precision {
  ( $( $ty:ty => $inner:expr ),* ) => {
    $(
      impl HullScalar for $ty {
        // Shewchuk's adaptive predicate: exact sign, close to the speed of the
        // naive determinant when the answer is clear.
        fn cmp_slope(p: &[Self; 2], q: &[Self; 2], r: &[Self; 2]) -> Ordering {
          let to_f64 = $inner;
          let orient = geometry_predicates::predicates::orient2d(
            [to_f64(&p[0]), to_f64(&p[1])],
            [to_f64(&q[0]), to_f64(&q[1])],
            [to_f64(&r[0]), to_f64(&r[1])],
          );
          if orient > 0.0 {
            Ordering::Greater
          } else if orient < 0.0 {
            Ordering::Less
          } else {
            Ordering::Equal
          }
        }

        fn cmp_dist(p: &[Self; 2], q: &[Self; 2], r: &[Self; 2]) -> Ordering {
          let to_f64 = $inner;
          let exact = |pt: &[Self; 2]| [float_to_rational(to_f64(&pt[0])), float_to_rational(to_f64(&pt[1]))];
          HullScalar::cmp_dist(&exact(p), &exact(q), &exact(r))
        }

        fn is_finite(&self) -> bool {
          let to_f64 = $inner;
          to_f64(self).is_finite()
        }
      }
    )*
  };
}

macro_rules! float_total_ord {
  ( $( $ty:ty ),* ) => {
    $(
      impl TotalOrd for $ty {
        // Signed zeros compare equal. NaN is rejected before anything is
        // sorted, the fallback only keeps the order total.
        fn total_cmp(&self, other: &Self) -> Ordering {
          self
            .partial_cmp(other)
            .unwrap_or_else(|| <$ty>::total_cmp(self, other))
        }
      }
    )*
  };
}

fixed_precision!(i8, u8, u16);
fixed_precision!(i16, u16, u32);
fixed_precision!(i32, u32, u64);
fixed_precision!(i64, u64, u128);
fixed_precision!(isize, usize, u128);
arbitrary_precision!(num_bigint::BigInt, num_rational::BigRational);
float_total_ord!(f32, f64);
floating_precision!(
  f32 => |v: &f32| f64::from(*v),
  f64 => |v: &f64| *v,
  ordered_float::OrderedFloat<f64> => |v: &ordered_float::OrderedFloat<f64>| v.into_inner(),
  ordered_float::NotNan<f64> => |v: &ordered_float::NotNan<f64>| v.into_inner()
);

impl TotalOrd for ordered_float::OrderedFloat<f64> {
  fn total_cmp(&self, other: &Self) -> Ordering {
    TotalOrd::total_cmp(&self.into_inner(), &other.into_inner())
  }
}

impl TotalOrd for ordered_float::NotNan<f64> {
  fn total_cmp(&self, other: &Self) -> Ordering {
    TotalOrd::total_cmp(&self.into_inner(), &other.into_inner())
  }
}

fn float_to_rational(f: f64) -> num::BigRational {
  // Finite by construction: non-finite coordinates are rejected before any
  // predicate runs. Fall back to zero rather than panic.
  num::BigRational::from_float(f).unwrap_or_else(num::BigRational::zero)
}

#[cfg(test)]
pub mod testing;
