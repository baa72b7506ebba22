//! Touch-sample reducer and gesture state for Tactile
//!
//! Folds raw pointer samples into a [`GestureState`] carrying distance,
//! angle, velocity and axis data for gesture recognizers to consume.

pub mod gesture_constants;
pub mod input;

pub use gesture_constants::*;
pub use input::gestures::{
    direction, initialize, is_horizontal, is_vertical, step, step_with_config, CurrentSample,
    Direction, GestureCache, GestureState, InitialSample, TouchDataConfig, TouchTracker,
    TouchUpdate, VelocitySample,
};
pub use input::types::{Axis, EventMeta, PointerEventKind, RawSample, SampleError};

pub mod prelude {
    pub use crate::input::gestures::{
        initialize, is_horizontal, is_vertical, step, Direction, GestureState, TouchTracker,
    };
    pub use crate::input::types::{EventMeta, PointerEventKind, RawSample};
}
