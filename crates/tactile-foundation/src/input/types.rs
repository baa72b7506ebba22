use std::fmt;
use tactile_ui_graphics::Point;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    Cancel,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => f.write_str("x"),
            Axis::Y => f.write_str("y"),
        }
    }
}

/// Rejected pointer input.
///
/// The reducer itself never fails; these are raised only by the checked
/// constructors so that NaN or infinite values never reach it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SampleError {
    NonFiniteCoordinate { axis: Axis, value: f64 },
    NonFiniteTimeStamp { value: f64 },
}

impl fmt::Display for SampleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SampleError::NonFiniteCoordinate { axis, value } => {
                write!(f, "pointer {axis} coordinate is not finite: {value}")
            }
            SampleError::NonFiniteTimeStamp { value } => {
                write!(f, "event timestamp is not finite: {value}")
            }
        }
    }
}

impl std::error::Error for SampleError {}

/// A single pointer observation in screen coordinates.
///
/// The timestamp travels separately in [`EventMeta`] alongside the event
/// that produced the sample.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct RawSample {
    pub x: f64,
    pub y: f64,
}

impl RawSample {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Creates a sample, rejecting NaN and infinite coordinates.
    pub fn try_new(x: f64, y: f64) -> Result<Self, SampleError> {
        if !x.is_finite() {
            return Err(SampleError::NonFiniteCoordinate {
                axis: Axis::X,
                value: x,
            });
        }
        if !y.is_finite() {
            return Err(SampleError::NonFiniteCoordinate {
                axis: Axis::Y,
                value: y,
            });
        }
        Ok(Self { x, y })
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

impl From<Point> for RawSample {
    fn from(point: Point) -> Self {
        Self::new(point.x, point.y)
    }
}

/// Metadata of the event a sample came from.
///
/// `original_event` is an opaque handle owned by the caller; the reducer
/// only stores it on the state it returns.
#[derive(Clone, Debug, PartialEq)]
pub struct EventMeta<E> {
    pub time_stamp: f64,
    pub original_event: E,
}

impl<E> EventMeta<E> {
    pub fn new(time_stamp: f64, original_event: E) -> Self {
        Self {
            time_stamp,
            original_event,
        }
    }

    /// Creates event metadata, rejecting NaN and infinite timestamps.
    pub fn try_new(time_stamp: f64, original_event: E) -> Result<Self, SampleError> {
        if !time_stamp.is_finite() {
            return Err(SampleError::NonFiniteTimeStamp { value: time_stamp });
        }
        Ok(Self::new(time_stamp, original_event))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checked_sample_accepts_finite_values() {
        let sample = RawSample::try_new(-4.5, 12.0).expect("finite sample");
        assert_eq!(sample, RawSample::new(-4.5, 12.0));
        assert_eq!(sample.position(), Point::new(-4.5, 12.0));
    }

    #[test]
    fn checked_sample_rejects_nan_and_infinity() {
        assert!(matches!(
            RawSample::try_new(f64::NAN, 0.0),
            Err(SampleError::NonFiniteCoordinate { axis: Axis::X, .. })
        ));
        assert_eq!(
            RawSample::try_new(0.0, f64::INFINITY),
            Err(SampleError::NonFiniteCoordinate {
                axis: Axis::Y,
                value: f64::INFINITY,
            })
        );
    }

    #[test]
    fn checked_meta_rejects_non_finite_timestamp() {
        assert_eq!(
            EventMeta::try_new(f64::NEG_INFINITY, ()),
            Err(SampleError::NonFiniteTimeStamp {
                value: f64::NEG_INFINITY
            })
        );
        assert_eq!(EventMeta::try_new(16.0, "evt").map(|m| m.time_stamp), Ok(16.0));
    }

    #[test]
    fn error_messages_name_the_offending_value() {
        let err = SampleError::NonFiniteCoordinate {
            axis: Axis::Y,
            value: f64::INFINITY,
        };
        assert_eq!(err.to_string(), "pointer y coordinate is not finite: inf");
        let err = SampleError::NonFiniteTimeStamp { value: f64::NAN };
        assert_eq!(err.to_string(), "event timestamp is not finite: NaN");
    }
}
