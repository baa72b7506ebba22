//! Synthetic touch events for tests.

use std::sync::atomic::{AtomicU64, Ordering};
use tactile_foundation::{EventMeta, PointerEventKind, RawSample};

/// Timestamp every synthetic event is offset from.
pub const BASE_TIME_STAMP: f64 = 1_000.0;

static NEXT_EVENT_ID: AtomicU64 = AtomicU64::new(1);

/// Stand-in for a platform touch event.
///
/// Each handle gets a unique `id`, so two events built from the same
/// arguments still compare unequal, like distinct platform event objects.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TouchEventHandle {
    pub id: u64,
    pub kind: PointerEventKind,
    pub time_stamp: f64,
}

/// A touch event split into the pieces the reducer consumes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TouchEvent {
    pub handle: TouchEventHandle,
    pub sample: RawSample,
}

impl TouchEvent {
    pub fn kind(&self) -> PointerEventKind {
        self.handle.kind
    }

    pub fn time_stamp(&self) -> f64 {
        self.handle.time_stamp
    }

    pub fn meta(&self) -> EventMeta<TouchEventHandle> {
        EventMeta::new(self.handle.time_stamp, self.handle)
    }
}

/// Builds a touch event at `(x, y)`, `time_offset` ms after [`BASE_TIME_STAMP`].
pub fn create_touch_event(
    kind: PointerEventKind,
    x: f64,
    y: f64,
    time_offset: f64,
) -> TouchEvent {
    TouchEvent {
        handle: TouchEventHandle {
            id: NEXT_EVENT_ID.fetch_add(1, Ordering::Relaxed),
            kind,
            time_stamp: BASE_TIME_STAMP + time_offset,
        },
        sample: RawSample::new(x, y),
    }
}

/// Builds a `Down` followed by `Move` events through `points`, given as
/// `(x, y, time_offset)`.
pub fn create_touch_path(start: (f64, f64), points: &[(f64, f64, f64)]) -> Vec<TouchEvent> {
    let mut events = Vec::with_capacity(points.len() + 1);
    events.push(create_touch_event(PointerEventKind::Down, start.0, start.1, 0.0));
    events.extend(
        points
            .iter()
            .map(|&(x, y, offset)| create_touch_event(PointerEventKind::Move, x, y, offset)),
    );
    events
}
