//! Atomic: pure easing functions for entrance animations
//!
//! Maps progress [0, 1] to eased progress [0, 1].

// Re-export EasingType from core
pub use vitrine_core::EasingType;

/// Curve evaluation for [`EasingType`]
pub trait EasingTypeExt {
    /// Eased fraction for linear progress `t`; input outside [0, 1] is
    /// clamped and NaN reads as 0
    fn apply(&self, t: f64) -> f64;
}

impl EasingTypeExt for EasingType {
    fn apply(&self, t: f64) -> f64 {
        if t.is_nan() || t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }
        match self {
            EasingType::None => 1.0,
            EasingType::Linear => t,
            EasingType::Cubic => power_out(t, 3),
            EasingType::Quintic => power_out(t, 5),
            EasingType::EaseOut => expo_out(t),
        }
    }
}

/// 1 - (1 - t)^n: starts fast, decelerates into rest
fn power_out(t: f64, n: i32) -> f64 {
    1.0 - (1.0 - t).powi(n)
}

/// Base-2 exponential ease-out, rescaled so it lands exactly on 1
fn expo_out(t: f64) -> f64 {
    const FLOOR: f64 = 1.0 / 1024.0; // 2^-10
    (1.0 - (-10.0 * t).exp2()) / (1.0 - FLOOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [EasingType; 5] = [
        EasingType::None,
        EasingType::Linear,
        EasingType::Cubic,
        EasingType::Quintic,
        EasingType::EaseOut,
    ];

    #[test]
    fn test_easing_boundaries() {
        for easing in ALL {
            assert!((easing.apply(0.0) - 0.0).abs() < 0.001, "{:?} at t=0", easing);
            assert!((easing.apply(1.0) - 1.0).abs() < 0.001, "{:?} at t=1", easing);
        }
    }

    #[test]
    fn test_out_of_range_progress() {
        for easing in ALL {
            assert_eq!(easing.apply(f64::NAN), 0.0);
            assert_eq!(easing.apply(-0.5), 0.0);
            assert_eq!(easing.apply(2.0), 1.0);
        }
    }

    #[test]
    fn test_ease_out_leads_linear() {
        for easing in [EasingType::Cubic, EasingType::Quintic, EasingType::EaseOut] {
            assert!(easing.apply(0.25) > 0.25, "{:?}", easing);
        }
        assert!(EasingType::Quintic.apply(0.25) > EasingType::Cubic.apply(0.25));
    }

    #[test]
    fn test_none_jumps_immediately() {
        assert_eq!(EasingType::None.apply(0.01), 1.0);
    }

    #[test]
    fn test_easing_monotonic() {
        for easing in ALL {
            let mut prev = 0.0;
            for i in 0..=10 {
                let t = i as f64 / 10.0;
                let v = easing.apply(t);
                assert!(v >= prev, "{:?} not monotonic at t={}", easing, t);
                prev = v;
            }
        }
    }
}
