//! Touch-sample reduction.
//!
//! A gesture starts with [`initialize`] on pointer down and is advanced with
//! [`step`] for every following sample. Both are pure: each call returns a
//! new [`GestureState`] and leaves its inputs untouched, so the caller owns
//! the state between samples and decides when to drop it.

use super::direction::{direction, Direction};
use crate::gesture_constants::VELOCITY_RESAMPLE_INTERVAL_MS;
use crate::input::types::{EventMeta, RawSample};
use tactile_ui_graphics::{point_distance, screen_angle};

/// Tunables for [`step_with_config`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TouchDataConfig {
    /// Instantaneous velocity is only recomputed once strictly more than this
    /// many milliseconds have passed since the last resample.
    pub velocity_resample_interval_ms: f64,
}

impl Default for TouchDataConfig {
    fn default() -> Self {
        Self {
            velocity_resample_interval_ms: VELOCITY_RESAMPLE_INTERVAL_MS,
        }
    }
}

impl TouchDataConfig {
    pub fn with_velocity_resample_interval(mut self, interval_ms: f64) -> Self {
        self.velocity_resample_interval_ms = interval_ms;
        self
    }
}

/// Where and when the gesture started.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InitialSample {
    pub x: f64,
    pub y: f64,
    pub time_stamp: f64,
}

/// Values derived from the latest sample.
///
/// `delta_x`/`delta_y` are relative to the previous sample; every other
/// distance is relative to [`InitialSample`]. Velocities are in pixels per
/// millisecond.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct CurrentSample {
    pub x: f64,
    pub y: f64,
    pub delta_x: f64,
    pub delta_y: f64,
    pub distance: f64,
    pub distance_x: f64,
    pub distance_y: f64,
    pub angle: f64,
    pub velocity_x: f64,
    pub velocity_y: f64,
    pub velocity: f64,
    pub overall_velocity_x: f64,
    pub overall_velocity_y: f64,
    pub overall_velocity: f64,
}

/// Distance from the origin at the time velocity was last resampled.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VelocitySample {
    pub distance_x: f64,
    pub distance_y: f64,
    pub time_stamp: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureCache {
    pub velocity: VelocitySample,
}

/// Accumulated state of one gesture.
///
/// `pan_started` and `pan_denied` belong to the recognizer driving this
/// state: they start out `false` and are otherwise copied through untouched.
#[derive(Clone, Debug, PartialEq)]
pub struct GestureState<E> {
    pub initial: InitialSample,
    /// `None` until the first [`step`].
    pub current: Option<CurrentSample>,
    pub cache: GestureCache,
    pub time_stamp: f64,
    pub original_event: E,
    pub pan_started: bool,
    pub pan_denied: bool,
}

impl<E> GestureState<E> {
    /// Direction of the latest sample relative to the origin, if any sample
    /// has been folded in yet.
    pub fn direction(&self) -> Option<Direction> {
        self.current
            .as_ref()
            .map(|current| direction(current.distance_x, current.distance_y))
    }

    pub fn is_horizontal(&self) -> bool {
        is_horizontal(self)
    }

    pub fn is_vertical(&self) -> bool {
        is_vertical(self)
    }

    /// Time since the gesture started, as of the latest sample.
    pub fn elapsed(&self) -> f64 {
        self.time_stamp - self.initial.time_stamp
    }
}

/// Starts a gesture from its first sample.
pub fn initialize<E>(sample: RawSample, meta: EventMeta<E>) -> GestureState<E> {
    GestureState {
        initial: InitialSample {
            x: sample.x,
            y: sample.y,
            time_stamp: meta.time_stamp,
        },
        current: None,
        cache: GestureCache {
            velocity: VelocitySample {
                distance_x: 0.0,
                distance_y: 0.0,
                time_stamp: meta.time_stamp,
            },
        },
        time_stamp: meta.time_stamp,
        original_event: meta.original_event,
        pan_started: false,
        pan_denied: false,
    }
}

/// Folds `sample` into `previous` using the default [`TouchDataConfig`].
pub fn step<E>(
    previous: &GestureState<E>,
    sample: RawSample,
    meta: EventMeta<E>,
) -> GestureState<E> {
    step_with_config(previous, sample, meta, &TouchDataConfig::default())
}

/// Folds `sample` into `previous`, returning the next state.
pub fn step_with_config<E>(
    previous: &GestureState<E>,
    sample: RawSample,
    meta: EventMeta<E>,
    config: &TouchDataConfig,
) -> GestureState<E> {
    let initial = previous.initial;
    let time_stamp = meta.time_stamp;

    let (delta_x, delta_y) = match &previous.current {
        Some(current) => (sample.x - current.x, sample.y - current.y),
        None => (sample.x - initial.x, sample.y - initial.y),
    };

    let distance = point_distance(initial.x, sample.x, initial.y, sample.y);
    let distance_x = sample.x - initial.x;
    let distance_y = sample.y - initial.y;
    let angle = screen_angle(initial.x, initial.y, sample.x, sample.y);

    let overall_delta_time = time_stamp - initial.time_stamp;
    let overall_velocity_x = finite_or_zero(distance_x / overall_delta_time);
    let overall_velocity_y = finite_or_zero(distance_y / overall_delta_time);

    // Stale velocity survives a skipped resample.
    let mut velocity_x = previous.current.map_or(0.0, |c| c.velocity_x);
    let mut velocity_y = previous.current.map_or(0.0, |c| c.velocity_y);
    let mut velocity = previous.current.map_or(0.0, |c| c.velocity);
    let mut cache = previous.cache;

    let delta_time = time_stamp - cache.velocity.time_stamp;
    let resampled = delta_time > config.velocity_resample_interval_ms;
    if resampled {
        velocity_x = finite_or_zero((distance_x - cache.velocity.distance_x) / delta_time);
        velocity_y = finite_or_zero((distance_y - cache.velocity.distance_y) / delta_time);
        velocity = dominant(velocity_x, velocity_y);
        cache.velocity = VelocitySample {
            distance_x,
            distance_y,
            time_stamp,
        };
    }

    log::trace!(
        "touch step: distance={distance:.3} angle={angle:.3} dt={delta_time:.2}ms resampled={resampled}"
    );

    GestureState {
        initial,
        current: Some(CurrentSample {
            x: sample.x,
            y: sample.y,
            delta_x,
            delta_y,
            distance,
            distance_x,
            distance_y,
            angle,
            velocity_x,
            velocity_y,
            velocity,
            overall_velocity_x,
            overall_velocity_y,
            overall_velocity: dominant(overall_velocity_x, overall_velocity_y),
        }),
        cache,
        time_stamp,
        original_event: meta.original_event,
        pan_started: previous.pan_started,
        pan_denied: previous.pan_denied,
    }
}

/// True when the latest movement is mostly left or right.
///
/// A state that has not been stepped yet has no movement and is neither
/// horizontal nor vertical.
pub fn is_horizontal<E>(state: &GestureState<E>) -> bool {
    match state.direction() {
        Some(direction) => direction.is_horizontal(),
        None => {
            log::debug!("is_horizontal called before the first touch step");
            false
        }
    }
}

/// True when the latest movement is mostly up or down.
pub fn is_vertical<E>(state: &GestureState<E>) -> bool {
    match state.direction() {
        Some(direction) => direction.is_vertical(),
        None => {
            log::debug!("is_vertical called before the first touch step");
            false
        }
    }
}

// Division by a zero time delta yields NaN or infinity.
#[inline]
fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

#[inline]
fn dominant(x: f64, y: f64) -> f64 {
    if x.abs() >= y.abs() {
        x
    } else {
        y
    }
}
