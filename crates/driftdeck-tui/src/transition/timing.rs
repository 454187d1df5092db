//! Time calculation utilities for transitions
//!
//! Pure functions over explicit instants so tests never sleep.

use std::time::{Duration, Instant};

/// Calculate animation progress (0.0 to 1.0) at `now` for an animation
/// that started at `start`
///
/// # Returns
/// Progress value clamped to [0.0, 1.0]; a zero duration is complete
#[inline]
pub fn progress(start: Instant, duration: Duration, now: Instant) -> f64 {
    if duration.is_zero() {
        return 1.0;
    }
    let elapsed = now.saturating_duration_since(start);
    let ratio = elapsed.as_secs_f64() / duration.as_secs_f64();
    ratio.clamp(0.0, 1.0)
}

/// Check if an animation that started at `start` is complete at `now`
#[inline]
pub fn is_complete(start: Instant, duration: Duration, now: Instant) -> bool {
    now.saturating_duration_since(start) >= duration
}

/// Linear interpolation between two values
#[inline]
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}
