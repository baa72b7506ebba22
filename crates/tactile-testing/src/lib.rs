//! Testing utilities for Tactile touch handling

pub mod touch_assertions;
pub mod touch_events;

pub use touch_assertions::*;
pub use touch_events::*;

pub mod prelude {
    pub use crate::touch_assertions::*;
    pub use crate::touch_events::*;
}
