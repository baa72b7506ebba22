//! Pure math for pointer geometry in Tactile
//!
//! This crate contains the point type and the distance/angle helpers used by
//! the touch-sample reducer in `tactile-foundation`.

mod geometry;

pub use geometry::*;

pub mod prelude {
    pub use crate::geometry::{point_distance, screen_angle, Point};
}
