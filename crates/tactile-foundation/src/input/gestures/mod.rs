pub mod direction;
pub mod touch;
pub mod touch_data;

pub use direction::{direction, Direction};
pub use touch::{TouchTracker, TouchUpdate};
pub use touch_data::{
    initialize, is_horizontal, is_vertical, step, step_with_config, CurrentSample, GestureCache,
    GestureState, InitialSample, TouchDataConfig, VelocitySample,
};
