//! Shared gesture constants for touch-sample reduction.
//!
//! Times are in milliseconds, in whatever clock domain the caller's event
//! timestamps use. Only differences between timestamps are ever taken.

/// Minimum elapsed time before instantaneous velocity is resampled.
///
/// Roughly one frame at 30 Hz. Samples arriving faster than this reuse the
/// previously computed velocity instead of dividing tiny distances by tiny
/// time deltas, which makes the reading jittery.
pub const VELOCITY_RESAMPLE_INTERVAL_MS: f64 = 33.34;
