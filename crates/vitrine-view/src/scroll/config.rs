//! Atomic: spring configuration helpers
//!
//! Re-exports configuration from vitrine-core and derives the quantities the
//! spring integrator needs.

use std::time::Duration;

pub use vitrine_core::MotionConfig;

/// Extension trait for MotionConfig with derived spring quantities
pub trait MotionConfigExt {
    /// Duration of one animation frame
    fn frame_duration(&self) -> Duration;

    /// Damping ratio ζ = c / (2·√(k·m)); 1.0 is critical damping
    fn damping_ratio(&self) -> f64;

    /// Undamped natural frequency ω₀ = √(k/m), in radians per second
    fn natural_frequency(&self) -> f64;
}

impl MotionConfigExt for MotionConfig {
    #[inline]
    fn frame_duration(&self) -> Duration {
        if self.frame_rate == 0 {
            Duration::from_millis(16) // ~60fps fallback
        } else {
            Duration::from_secs_f64(1.0 / self.frame_rate as f64)
        }
    }

    #[inline]
    fn damping_ratio(&self) -> f64 {
        let denom = 2.0 * (self.stiffness * self.mass).sqrt();
        if denom <= 0.0 {
            return 0.0;
        }
        self.damping / denom
    }

    #[inline]
    fn natural_frequency(&self) -> f64 {
        if self.mass <= 0.0 {
            return 0.0;
        }
        (self.stiffness / self.mass).sqrt()
    }
}
