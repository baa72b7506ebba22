pub mod gestures;
pub mod types;

pub use types::{Axis, EventMeta, PointerEventKind, RawSample, SampleError};
