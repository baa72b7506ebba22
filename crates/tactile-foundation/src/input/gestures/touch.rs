//! Single-pointer gesture lifecycle.
//!
//! Holds the [`GestureState`] of one pointer between samples: a down event
//! starts a gesture, moves advance it, and up or cancel end it. Which
//! pointer to follow and when a pan counts as started is left to the caller.

use super::touch_data::{initialize, step_with_config, GestureState, TouchDataConfig};
use crate::input::types::{EventMeta, PointerEventKind, RawSample};

/// Outcome of feeding one event to a [`TouchTracker`].
#[derive(Debug, PartialEq)]
pub enum TouchUpdate<'a, E> {
    Started(&'a GestureState<E>),
    Moved(&'a GestureState<E>),
    /// The gesture ended on pointer up; carries the state after the final sample.
    Ended(GestureState<E>),
    /// The gesture was cancelled; carries the last state before cancellation.
    Cancelled(GestureState<E>),
    /// Move, up or cancel arrived while no gesture was active.
    Ignored,
}

#[derive(Debug, Clone)]
pub struct TouchTracker<E> {
    state: Option<GestureState<E>>,
    config: TouchDataConfig,
}

impl<E> Default for TouchTracker<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> TouchTracker<E> {
    pub fn new() -> Self {
        Self::with_config(TouchDataConfig::default())
    }

    pub fn with_config(config: TouchDataConfig) -> Self {
        Self {
            state: None,
            config,
        }
    }

    pub fn config(&self) -> &TouchDataConfig {
        &self.config
    }

    pub fn state(&self) -> Option<&GestureState<E>> {
        self.state.as_ref()
    }

    /// Mutable access for the recognizer, e.g. to flip `pan_started`.
    pub fn state_mut(&mut self) -> Option<&mut GestureState<E>> {
        self.state.as_mut()
    }

    pub fn is_active(&self) -> bool {
        self.state.is_some()
    }

    pub fn set_pan_started(&mut self, started: bool) {
        if let Some(state) = self.state.as_mut() {
            state.pan_started = started;
        }
    }

    pub fn set_pan_denied(&mut self, denied: bool) {
        if let Some(state) = self.state.as_mut() {
            state.pan_denied = denied;
        }
    }

    /// Drops the active gesture, if any.
    pub fn reset(&mut self) {
        self.state = None;
    }

    pub fn on_event(
        &mut self,
        kind: PointerEventKind,
        sample: RawSample,
        meta: EventMeta<E>,
    ) -> TouchUpdate<'_, E> {
        match kind {
            PointerEventKind::Down => {
                if self.state.is_some() {
                    log::debug!("touch down while a gesture was active; restarting");
                }
                log::debug!("touch gesture started at ({}, {})", sample.x, sample.y);
                TouchUpdate::Started(self.state.insert(initialize(sample, meta)))
            }
            PointerEventKind::Move => match self.state.as_mut() {
                Some(state) => {
                    *state = step_with_config(state, sample, meta, &self.config);
                    TouchUpdate::Moved(state)
                }
                None => {
                    log::trace!("touch move without an active gesture");
                    TouchUpdate::Ignored
                }
            },
            PointerEventKind::Up => match self.state.take() {
                Some(state) => {
                    let state = step_with_config(&state, sample, meta, &self.config);
                    log::debug!(
                        "touch gesture ended after {:.1}ms, direction {:?}",
                        state.elapsed(),
                        state.direction()
                    );
                    TouchUpdate::Ended(state)
                }
                None => TouchUpdate::Ignored,
            },
            PointerEventKind::Cancel => match self.state.take() {
                Some(state) => {
                    log::debug!("touch gesture cancelled");
                    TouchUpdate::Cancelled(state)
                }
                None => TouchUpdate::Ignored,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meta(t: f64) -> EventMeta<&'static str> {
        EventMeta::new(t, "evt")
    }

    #[test]
    fn move_before_down_is_ignored() {
        let mut tracker = TouchTracker::new();
        let update = tracker.on_event(PointerEventKind::Move, RawSample::new(1.0, 1.0), meta(0.0));
        assert_eq!(update, TouchUpdate::Ignored);
        assert!(!tracker.is_active());
    }

    #[test]
    fn down_move_up_runs_a_gesture() {
        let mut tracker = TouchTracker::new();
        match tracker.on_event(PointerEventKind::Down, RawSample::new(0.0, 0.0), meta(0.0)) {
            TouchUpdate::Started(state) => assert!(state.current.is_none()),
            other => panic!("expected Started, got {other:?}"),
        }
        match tracker.on_event(PointerEventKind::Move, RawSample::new(0.0, 30.0), meta(50.0)) {
            TouchUpdate::Moved(state) => assert!(state.is_vertical()),
            other => panic!("expected Moved, got {other:?}"),
        }
        tracker.set_pan_started(true);

        match tracker.on_event(PointerEventKind::Up, RawSample::new(0.0, 40.0), meta(60.0)) {
            TouchUpdate::Ended(state) => {
                let current = state.current.expect("stepped");
                assert_eq!(current.delta_y, 10.0);
                assert_eq!(current.distance_y, 40.0);
                assert!(state.pan_started);
            }
            other => panic!("expected Ended, got {other:?}"),
        }
        assert!(!tracker.is_active());
    }

    #[test]
    fn cancel_returns_last_state_without_stepping() {
        let mut tracker = TouchTracker::new();
        tracker.on_event(PointerEventKind::Down, RawSample::new(0.0, 0.0), meta(0.0));
        tracker.on_event(PointerEventKind::Move, RawSample::new(5.0, 0.0), meta(40.0));
        tracker.set_pan_denied(true);

        match tracker.on_event(PointerEventKind::Cancel, RawSample::new(99.0, 99.0), meta(80.0)) {
            TouchUpdate::Cancelled(state) => {
                assert_eq!(state.current.expect("stepped").x, 5.0);
                assert!(state.pan_denied);
            }
            other => panic!("expected Cancelled, got {other:?}"),
        }
        assert_eq!(tracker.state(), None);
    }

    #[test]
    fn second_down_restarts_the_gesture() {
        let mut tracker = TouchTracker::new();
        tracker.on_event(PointerEventKind::Down, RawSample::new(0.0, 0.0), meta(0.0));
        tracker.on_event(PointerEventKind::Move, RawSample::new(5.0, 0.0), meta(40.0));
        tracker.on_event(PointerEventKind::Down, RawSample::new(7.0, 8.0), meta(90.0));

        let state = tracker.state().expect("active");
        assert_eq!((state.initial.x, state.initial.y), (7.0, 8.0));
        assert!(state.current.is_none());
    }

    #[test]
    fn uses_configured_resample_interval() {
        let config = TouchDataConfig::default().with_velocity_resample_interval(100.0);
        let mut tracker = TouchTracker::with_config(config);
        tracker.on_event(PointerEventKind::Down, RawSample::new(0.0, 0.0), meta(0.0));
        tracker.on_event(PointerEventKind::Move, RawSample::new(50.0, 0.0), meta(50.0));

        let state = tracker.state().expect("active");
        assert_eq!(state.cache.velocity.time_stamp, 0.0);
        assert_eq!(state.current.expect("stepped").velocity, 0.0);
        assert_eq!(tracker.config().velocity_resample_interval_ms, 100.0);
    }

    #[test]
    fn reset_drops_the_gesture() {
        let mut tracker = TouchTracker::new();
        tracker.on_event(PointerEventKind::Down, RawSample::new(0.0, 0.0), meta(0.0));
        if let Some(state) = tracker.state_mut() {
            state.pan_started = true;
        }
        tracker.reset();
        assert!(!tracker.is_active());
        assert_eq!(
            tracker.on_event(PointerEventKind::Up, RawSample::new(0.0, 0.0), meta(10.0)),
            TouchUpdate::Ignored
        );
    }
}
