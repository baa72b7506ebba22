//! Geometric primitives: Point, distance, screen angle

use std::f64::consts::PI;
use std::ops::Sub;

/// A pointer position in screen coordinates (Y grows downwards).
///
/// Coordinates are `f64` so that derived values match double-precision
/// arithmetic exactly.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    /// Euclidean distance from `self` to `other`.
    pub fn distance_to(&self, other: Point) -> f64 {
        point_distance(self.x, other.x, self.y, other.y)
    }

    /// Clockwise angle in degrees from `self` towards `other`, in `(0, 360]`.
    pub fn angle_to(&self, other: Point) -> f64 {
        screen_angle(self.x, self.y, other.x, other.y)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Self) -> Self::Output {
        Point {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

/// Distance between `(x0, y0)` and `(x1, y1)`.
///
/// Written out as `sqrt(dx*dx + dy*dy)` rather than `hypot` so the rounding
/// matches the reference arithmetic.
pub fn point_distance(x0: f64, x1: f64, y0: f64, y1: f64) -> f64 {
    ((x1 - x0) * (x1 - x0) + (y1 - y0) * (y1 - y0)).sqrt()
}

/// Angle in degrees from the origin point to the projection point.
///
/// `atan2` yields a counter-clockwise angle in `(-180, 180]`; the result is
/// folded into `[0, 360)` and then mirrored, giving a clockwise angle in
/// `(0, 360]`. A pure rightward move maps to `360`, not `0`.
pub fn screen_angle(origin_x: f64, origin_y: f64, projection_x: f64, projection_y: f64) -> f64 {
    let angle = (projection_y - origin_y).atan2(projection_x - origin_x) * (180.0 / PI);
    360.0 - if angle < 0.0 { 360.0 + angle } else { angle }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn distance_is_euclidean() {
        assert_eq!(point_distance(0.0, 3.0, 0.0, 4.0), 5.0);
        assert_eq!(Point::new(1.0, 1.0).distance_to(Point::new(1.0, 1.0)), 0.0);
        assert_close(
            Point::ZERO.distance_to(Point::new(42.0, 33.0)),
            53.41348144429457,
        );
    }

    #[test]
    fn angle_is_clockwise_from_positive_x() {
        assert_close(Point::ZERO.angle_to(Point::new(42.0, 33.0)), 321.84277341263095);
        // Pure rightward move.
        assert_eq!(screen_angle(0.0, 0.0, 10.0, 0.0), 360.0);
        // atan2 of a positive dy is a positive angle; mirrored to 270.
        assert_close(screen_angle(0.0, 0.0, 0.0, 10.0), 270.0);
        assert_close(screen_angle(0.0, 0.0, 0.0, -10.0), 90.0);
        assert_close(screen_angle(0.0, 0.0, -10.0, 0.0), 180.0);
    }

    #[test]
    fn coincident_points_have_full_turn_angle() {
        assert_eq!(screen_angle(5.0, 5.0, 5.0, 5.0), 360.0);
    }

    #[test]
    fn angle_stays_in_half_open_range() {
        for (dx, dy) in [(1.0, 1.0), (-1.0, 1.0), (-1.0, -1.0), (1.0, -1.0), (3.0, -0.001)] {
            let angle = screen_angle(0.0, 0.0, dx, dy);
            assert!(angle > 0.0 && angle <= 360.0, "angle {angle} out of range");
        }
    }

    #[test]
    fn subtraction_gives_offset() {
        let offset = Point::new(42.0, 33.0) - Point::new(2.0, 3.0);
        assert_eq!(offset, Point::new(40.0, 30.0));
        assert!(offset.is_finite());
        assert!(!Point::new(f64::NAN, 0.0).is_finite());
    }
}
