//! Atomic: time calculation utilities for animations
//!
//! Pure functions over elapsed time, so callers can drive them from a real
//! clock or from a simulated one.

use std::time::Duration;

/// Animation progress (0.0 to 1.0) after `elapsed`, once `delay` has passed
///
/// # Arguments
/// * `elapsed` - Time since the animation was triggered
/// * `delay` - Time to wait before the animation starts moving
/// * `duration` - Total animation duration after the delay
///
/// # Returns
/// Progress value clamped to [0.0, 1.0]
#[inline]
pub fn progress(elapsed: Duration, delay: Duration, duration: Duration) -> f64 {
    let Some(active) = elapsed.checked_sub(delay) else {
        return 0.0;
    };
    if duration.is_zero() {
        return 1.0;
    }
    let ratio = active.as_secs_f64() / duration.as_secs_f64();
    ratio.clamp(0.0, 1.0)
}

/// Check if an animation is complete
#[inline]
pub fn is_complete(elapsed: Duration, delay: Duration, duration: Duration) -> bool {
    elapsed >= delay.saturating_add(duration)
}

/// Linear interpolation between two values
///
/// # Arguments
/// * `from` - Start value
/// * `to` - End value
/// * `t` - Interpolation factor [0.0, 1.0]
///
/// # Returns
/// Interpolated value
#[inline]
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp() {
        assert!((lerp(0.0, 100.0, 0.0) - 0.0).abs() < 0.001);
        assert!((lerp(0.0, 100.0, 0.5) - 50.0).abs() < 0.001);
        assert!((lerp(1.0, 0.0, 1.0) - 0.0).abs() < 0.001);
    }

    #[test]
    fn test_progress_waits_for_delay() {
        let delay = Duration::from_millis(200);
        let duration = Duration::from_millis(400);
        assert_eq!(progress(Duration::from_millis(100), delay, duration), 0.0);
        assert!((progress(Duration::from_millis(400), delay, duration) - 0.5).abs() < 1e-9);
        assert_eq!(progress(Duration::from_secs(5), delay, duration), 1.0);
    }

    #[test]
    fn test_progress_zero_duration() {
        assert_eq!(progress(Duration::ZERO, Duration::ZERO, Duration::ZERO), 1.0);
    }

    #[test]
    fn test_is_complete() {
        let delay = Duration::from_millis(100);
        let duration = Duration::from_millis(100);
        assert!(!is_complete(Duration::from_millis(150), delay, duration));
        assert!(is_complete(Duration::from_millis(200), delay, duration));
    }

    #[test]
    fn test_is_complete_with_unbounded_delay() {
        let hour = Duration::from_secs(3600);
        assert!(!is_complete(hour, Duration::MAX, Duration::from_millis(1)));
        assert!(is_complete(Duration::MAX, Duration::MAX, Duration::MAX));
    }
}
