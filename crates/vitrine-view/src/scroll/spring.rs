//! Molecular: damped-spring smoothing of the raw scroll fraction

use std::time::Duration;

use tracing::debug;

use super::config::{MotionConfig, MotionConfigExt};

/// Largest integration step, in seconds
const MAX_SUBSTEP: f64 = 0.001;
/// Frame gaps longer than this (e.g. a backgrounded tab) are shortened to it
const MAX_FRAME_GAP: Duration = Duration::from_millis(250);

/// Smoothed scroll tracker
///
/// Chases the raw scroll fraction with a mass-spring-damper. Call
/// [`update`](Self::update) once per animation frame; the output keeps
/// converging even when the raw value stops changing, and snaps exactly onto
/// the target once it is within `rest_delta` and moving slower than
/// `rest_speed`.
#[derive(Debug, Clone)]
pub struct SmoothedScroll {
    config: MotionConfig,
    value: f64,
    velocity: f64,
    target: f64,
    /// The first sample seeds the spring instead of animating from zero
    seeded: bool,
}

impl Default for SmoothedScroll {
    fn default() -> Self {
        Self::new(MotionConfig::default())
    }
}

impl SmoothedScroll {
    /// Create a new tracker with configuration
    pub fn new(config: MotionConfig) -> Self {
        debug!(
            "Scroll spring: damping ratio {:.2}, natural frequency {:.2} rad/s",
            config.damping_ratio(),
            config.natural_frequency()
        );
        Self {
            config,
            value: 0.0,
            velocity: 0.0,
            target: 0.0,
            seeded: false,
        }
    }

    /// Create with default configuration
    pub fn with_defaults() -> Self {
        Self::default()
    }

    pub fn config(&self) -> &MotionConfig {
        &self.config
    }

    /// Current smoothed value
    #[inline]
    pub fn value(&self) -> f64 {
        self.value
    }

    #[inline]
    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    /// Latest raw sample
    #[inline]
    pub fn target(&self) -> f64 {
        self.target
    }

    /// Check if the output sits exactly on the target with no velocity
    #[inline]
    pub fn is_at_rest(&self) -> bool {
        self.velocity == 0.0 && self.value == self.target
    }

    /// Advance one configured frame towards `raw` and return the smoothed value
    pub fn update(&mut self, raw: f64) -> f64 {
        let dt = self.config.frame_duration();
        self.update_with_dt(raw, dt)
    }

    /// Advance by `dt` towards `raw` and return the smoothed value
    pub fn update_with_dt(&mut self, raw: f64, dt: Duration) -> f64 {
        if raw.is_finite() {
            self.target = raw.clamp(0.0, 1.0);
        }

        if !self.seeded {
            self.seeded = true;
            self.value = self.target;
            self.velocity = 0.0;
            return self.value;
        }

        if self.is_at_rest() {
            return self.value;
        }

        let mut remaining = dt.min(MAX_FRAME_GAP).as_secs_f64();
        while remaining > 0.0 {
            let h = remaining.min(MAX_SUBSTEP);
            self.step(h);
            remaining -= h;
        }

        if self.settled() {
            self.value = self.target;
            self.velocity = 0.0;
        }

        self.value
    }

    /// Semi-implicit Euler step of m·x'' = -k·(x - target) - c·x'
    fn step(&mut self, h: f64) {
        let MotionConfig {
            stiffness,
            damping,
            mass,
            ..
        } = self.config;

        let displacement = self.value - self.target;
        let acceleration = (-stiffness * displacement - damping * self.velocity) / mass;
        self.velocity += acceleration * h;
        self.value += self.velocity * h;
    }

    fn settled(&self) -> bool {
        (self.target - self.value).abs() <= self.config.rest_delta
            && self.velocity.abs() <= self.config.rest_speed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_until_rest(tracker: &mut SmoothedScroll, raw: f64, max_frames: usize) -> usize {
        for frame in 1..=max_frames {
            tracker.update(raw);
            if tracker.is_at_rest() {
                return frame;
            }
        }
        panic!("spring did not settle within {} frames", max_frames);
    }

    #[test]
    fn test_first_sample_seeds_value() {
        let mut tracker = SmoothedScroll::with_defaults();
        assert_eq!(tracker.update(0.4), 0.4);
        assert!(tracker.is_at_rest());
    }

    #[test]
    fn test_converges_and_snaps_to_target() {
        let mut tracker = SmoothedScroll::with_defaults();
        tracker.update(0.0);

        let first = tracker.update(1.0);
        assert!(first > 0.0 && first < 1.0);

        let frames = run_until_rest(&mut tracker, 1.0, 600);
        assert!(frames > 5);
        assert_eq!(tracker.value(), 1.0);
        assert_eq!(tracker.velocity(), 0.0);
    }

    #[test]
    fn test_keeps_moving_with_constant_input() {
        let mut tracker = SmoothedScroll::with_defaults();
        tracker.update(0.0);
        let a = tracker.update(0.5);
        let b = tracker.update(0.5);
        let c = tracker.update(0.5);
        assert!(a < b && b < c);
    }

    #[test]
    fn test_overdamped_default_does_not_overshoot() {
        let mut tracker = SmoothedScroll::with_defaults();
        assert!(tracker.config().damping_ratio() > 1.0);
        tracker.update(0.0);
        for _ in 0..600 {
            let v = tracker.update(1.0);
            assert!(v <= 1.0);
        }
    }

    #[test]
    fn test_underdamped_spring_overshoots_then_settles() {
        let mut tracker = SmoothedScroll::new(MotionConfig {
            damping: 4.0,
            ..MotionConfig::default()
        });
        assert!(tracker.config().damping_ratio() < 1.0);
        tracker.update(0.0);

        let mut peak: f64 = 0.0;
        for _ in 0..60 {
            peak = peak.max(tracker.update(1.0));
        }
        assert!(peak > 1.0);

        run_until_rest(&mut tracker, 1.0, 2000);
        assert_eq!(tracker.value(), 1.0);
    }

    #[test]
    fn test_raw_input_is_clamped() {
        let mut tracker = SmoothedScroll::with_defaults();
        tracker.update(0.0);
        tracker.update(3.0);
        assert_eq!(tracker.target(), 1.0);
        tracker.update(f64::NAN);
        assert_eq!(tracker.target(), 1.0);
    }

    #[test]
    fn test_zero_dt_does_not_move() {
        let mut tracker = SmoothedScroll::with_defaults();
        tracker.update(0.0);
        tracker.update(1.0);
        let before = tracker.value();
        assert_eq!(tracker.update_with_dt(1.0, Duration::ZERO), before);
    }
}
