mod linked_hull;
pub(crate) mod point;

pub use linked_hull::{HullIter, LinkedHull, PointId};
pub use point::Point;
