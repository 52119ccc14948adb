use std::time::Duration;

use crate::scroll::easing::{EasingType, EasingTypeExt};
use crate::scroll::timing::{self, lerp};

/// Animated properties of an element
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisualState {
    pub opacity: f64,
    /// Horizontal offset in px
    pub x: f64,
    /// Vertical offset in px
    pub y: f64,
    pub scale: f64,
}

impl VisualState {
    /// Fully visible, in place
    pub const REST: Self = Self {
        opacity: 1.0,
        x: 0.0,
        y: 0.0,
        scale: 1.0,
    };

    /// Invisible, in place
    pub const HIDDEN: Self = Self {
        opacity: 0.0,
        ..Self::REST
    };

    pub fn lerp(from: &Self, to: &Self, t: f64) -> Self {
        Self {
            opacity: lerp(from.opacity, to.opacity, t),
            x: lerp(from.x, to.x, t),
            y: lerp(from.y, to.y, t),
            scale: lerp(from.scale, to.scale, t),
        }
    }
}

/// Entrance animation: from an initial offset state to rest
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationVariant {
    pub initial: VisualState,
    pub target: VisualState,
    pub duration: Duration,
    pub delay: Duration,
}

impl AnimationVariant {
    /// Animate from `initial` to rest over `duration`
    pub fn new(initial: VisualState, duration: Duration) -> Self {
        Self {
            initial,
            target: VisualState::REST,
            duration,
            delay: Duration::ZERO,
        }
    }

    /// Opacity 0→1 while rising 50px
    pub fn fade_in_up(duration: Duration) -> Self {
        Self::new(
            VisualState {
                y: 50.0,
                ..VisualState::HIDDEN
            },
            duration,
        )
    }

    /// Opacity 0→1 while rising 30px
    pub fn rise(duration: Duration) -> Self {
        Self::new(
            VisualState {
                y: 30.0,
                ..VisualState::HIDDEN
            },
            duration,
        )
    }

    pub fn fade_in(duration: Duration) -> Self {
        Self::new(VisualState::HIDDEN, duration)
    }

    /// Opacity 0→1 while sliding in from 50px to the left
    pub fn slide_in_left(duration: Duration) -> Self {
        Self::new(
            VisualState {
                x: -50.0,
                ..VisualState::HIDDEN
            },
            duration,
        )
    }

    /// Opacity 0→1 while sliding in from 50px to the right
    pub fn slide_in_right(duration: Duration) -> Self {
        Self::new(
            VisualState {
                x: 50.0,
                ..VisualState::HIDDEN
            },
            duration,
        )
    }

    /// Short 20px slide from the left, used for timeline rows
    pub fn nudge_left(duration: Duration) -> Self {
        Self::new(
            VisualState {
                x: -20.0,
                ..VisualState::HIDDEN
            },
            duration,
        )
    }

    /// Opacity 0→1 while growing from half size
    pub fn scale_in(duration: Duration) -> Self {
        Self::new(
            VisualState {
                scale: 0.5,
                ..VisualState::HIDDEN
            },
            duration,
        )
    }

    /// Set the delay before the animation starts
    pub fn delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Set the duration of the animation
    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }
}

/// A fired entrance animation, sampled against time since the reveal
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealTransition {
    pub variant: AnimationVariant,
    pub easing: EasingType,
}

impl RevealTransition {
    pub fn new(variant: AnimationVariant, easing: EasingType) -> Self {
        Self { variant, easing }
    }

    /// Visual state `elapsed` after the reveal fired
    pub fn sample(&self, elapsed: Duration) -> VisualState {
        let t = timing::progress(elapsed, self.variant.delay, self.variant.duration);
        VisualState::lerp(
            &self.variant.initial,
            &self.variant.target,
            self.easing.apply(t),
        )
    }

    pub fn is_complete(&self, elapsed: Duration) -> bool {
        timing::is_complete(elapsed, self.variant.delay, self.variant.duration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS_600: Duration = Duration::from_millis(600);

    #[test]
    fn test_presets_end_at_rest() {
        for variant in [
            AnimationVariant::fade_in_up(MS_600),
            AnimationVariant::fade_in(MS_600),
            AnimationVariant::slide_in_left(MS_600),
            AnimationVariant::slide_in_right(MS_600),
            AnimationVariant::rise(MS_600),
            AnimationVariant::nudge_left(MS_600),
            AnimationVariant::scale_in(MS_600),
        ] {
            assert_eq!(variant.initial.opacity, 0.0);
            assert_eq!(variant.target, VisualState::REST);
        }
    }

    #[test]
    fn test_transition_holds_initial_during_delay() {
        let variant = AnimationVariant::fade_in_up(MS_600).delay(Duration::from_millis(200));
        let transition = RevealTransition::new(variant, EasingType::Linear);

        assert_eq!(transition.sample(Duration::from_millis(100)), variant.initial);

        let mid = transition.sample(Duration::from_millis(500));
        assert!((mid.opacity - 0.5).abs() < 1e-9);
        assert!((mid.y - 25.0).abs() < 1e-9);

        assert!(!transition.is_complete(Duration::from_millis(700)));
        assert!(transition.is_complete(Duration::from_millis(800)));
        assert_eq!(transition.sample(Duration::from_secs(2)), VisualState::REST);
    }

    #[test]
    fn test_eased_transition_leads_linear() {
        let variant = AnimationVariant::slide_in_left(MS_600);
        let linear = RevealTransition::new(variant, EasingType::Linear);
        let eased = RevealTransition::new(variant, EasingType::Cubic);

        let at = Duration::from_millis(150);
        assert!(eased.sample(at).opacity > linear.sample(at).opacity);
    }
}
