pub mod winding;

pub use winding::{centroid, fence_polygon, ring_polygon, sort_clockwise};
