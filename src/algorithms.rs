pub mod convex_hull;

#[doc(inline)]
pub use convex_hull::divide_and_conquer::{convex_hull, HullBuilder};
