//! Pure easing functions for slide transitions
//!
//! Maps input [0, 1] to output [0, 1] with various acceleration curves.

// Re-export EasingKind from core
pub use driftdeck_core::EasingKind;

/// Extension trait for EasingKind with calculation methods
pub trait EasingKindExt {
    /// Apply the easing function to a progress value
    ///
    /// # Arguments
    /// * `t` - Progress value in range [0, 1]
    ///
    /// # Returns
    /// Eased value in range [0, 1]
    fn apply(&self, t: f64) -> f64;
}

impl EasingKindExt for EasingKind {
    #[inline]
    fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            EasingKind::Linear => t,
            EasingKind::Power2Out => power2_out(t),
            EasingKind::CubicOut => cubic_out(t),
            EasingKind::QuintOut => quint_out(t),
            EasingKind::SlowInOut => slow_in_out(t),
        }
    }
}

/// Quadratic ease-out: f(t) = 1 - (1-t)²
#[inline]
fn power2_out(t: f64) -> f64 {
    let inv = 1.0 - t;
    1.0 - inv * inv
}

/// Cubic ease-out: f(t) = 1 - (1-t)³
#[inline]
fn cubic_out(t: f64) -> f64 {
    let inv = 1.0 - t;
    1.0 - inv * inv * inv
}

/// Quintic ease-out: f(t) = 1 - (1-t)⁵
#[inline]
fn quint_out(t: f64) -> f64 {
    let inv = 1.0 - t;
    1.0 - inv * inv * inv * inv * inv
}

/// Fast start and finish with a long plateau in the middle:
/// f(t) = (1 + sign(u)·|u|³) / 2 where u = 2t - 1
#[inline]
fn slow_in_out(t: f64) -> f64 {
    let u = 2.0 * t - 1.0;
    (1.0 + u.signum() * u.abs().powi(3)) / 2.0
}
