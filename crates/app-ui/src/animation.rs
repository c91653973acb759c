//! Frame-driven property animation
//!
//! An [`AnimationController`] owns a set of [`AnimatedValue`]s and advances
//! them together, one frame delta at a time. The host drives time by calling
//! [`AnimationController::tick`]. Nothing here schedules work on its own, so
//! dropping the controller is all the teardown an owner needs.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Duration;

/// Timing curve applied to a tween's normalized progress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Easing {
    /// Constant speed
    Linear,
    /// Accelerating from rest
    EaseIn,
    /// Decelerating to rest
    #[default]
    EaseOut,
    /// Accelerate then decelerate
    EaseInOut,
}

impl Easing {
    /// Map linear progress `t` in [0, 1] onto the curve
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t * t,
            Easing::EaseOut => 1.0 - (1.0 - t).powi(3),
            Easing::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
struct Tween {
    from: f32,
    to: f32,
    duration: Duration,
    elapsed: Duration,
    easing: Easing,
}

impl Tween {
    fn progress(&self) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (self.elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    fn sample(&self) -> f32 {
        self.from + (self.to - self.from) * self.easing.apply(self.progress())
    }
}

/// A single animatable scalar
#[derive(Debug, Clone, PartialEq)]
pub struct AnimatedValue {
    value: f32,
    tween: Option<Tween>,
}

impl AnimatedValue {
    /// Create a value at rest
    pub fn new(initial: f32) -> Self {
        Self {
            value: initial,
            tween: None,
        }
    }

    /// Current interpolated value
    pub fn value(&self) -> f32 {
        self.value
    }

    /// Target of the in-flight tween, if any
    pub fn target(&self) -> Option<f32> {
        self.tween.as_ref().map(|t| t.to)
    }

    /// Whether a tween is in flight
    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    /// Start a tween from the current value, replacing any tween in flight
    pub fn animate_to(&mut self, target: f32, duration: Duration, easing: Easing) {
        if duration.is_zero() {
            self.set(target);
            return;
        }
        self.tween = Some(Tween {
            from: self.value,
            to: target,
            duration,
            elapsed: Duration::ZERO,
            easing,
        });
    }

    /// Jump to a value, cancelling any tween
    pub fn set(&mut self, value: f32) {
        self.value = value;
        self.tween = None;
    }

    /// Cancel the tween and hold the current interpolated value
    pub fn stop(&mut self) {
        self.tween = None;
    }

    /// Advance by one frame; returns true while still animating
    pub fn advance(&mut self, delta: Duration) -> bool {
        let Some(tween) = self.tween.as_mut() else {
            return false;
        };
        tween.elapsed = tween.elapsed.saturating_add(delta);
        if tween.elapsed >= tween.duration {
            self.value = tween.to;
            self.tween = None;
            return false;
        }
        self.value = tween.sample();
        true
    }
}

/// Properties an overlay animates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AnimatedProperty {
    /// Surface and backdrop opacity
    Opacity,
    /// Uniform surface scale
    Scale,
    /// Vertical offset in points
    TranslateY,
}

/// Owns a group of animated properties that always advance together
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnimationController {
    values: BTreeMap<AnimatedProperty, AnimatedValue>,
}

impl AnimationController {
    /// Create an empty controller
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a property at a rest value, replacing any previous registration
    pub fn register(&mut self, property: AnimatedProperty, initial: f32) {
        self.values.insert(property, AnimatedValue::new(initial));
    }

    /// Current value of a property, if registered
    pub fn get(&self, property: AnimatedProperty) -> Option<f32> {
        self.values.get(&property).map(AnimatedValue::value)
    }

    /// Start every listed tween concurrently.
    ///
    /// Tweens already running on these properties are cancelled and the new
    /// ones start from the current interpolated values. Unregistered
    /// properties are ignored.
    pub fn start(&mut self, targets: &[(AnimatedProperty, f32)], duration: Duration, easing: Easing) {
        for (property, target) in targets {
            if let Some(value) = self.values.get_mut(property) {
                value.animate_to(*target, duration, easing);
            }
        }
        tracing::trace!(
            properties = targets.len(),
            duration_ms = duration.as_millis() as u64,
            "animation started"
        );
    }

    /// Advance every property by the same frame delta; returns true while any is animating
    pub fn tick(&mut self, delta: Duration) -> bool {
        let mut active = false;
        for value in self.values.values_mut() {
            active |= value.advance(delta);
        }
        active
    }

    /// Whether no property is animating
    pub fn is_idle(&self) -> bool {
        self.values.values().all(|v| !v.is_animating())
    }

    /// Cancel all in-flight tweens, holding current values
    pub fn cancel_all(&mut self) {
        if !self.is_idle() {
            tracing::trace!("animation cancelled");
        }
        for value in self.values.values_mut() {
            value.stop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn test_easing_endpoints() {
        for easing in [Easing::Linear, Easing::EaseIn, Easing::EaseOut, Easing::EaseInOut] {
            assert_eq!(easing.apply(0.0), 0.0);
            assert!((easing.apply(1.0) - 1.0).abs() < f32::EPSILON);
        }
        assert_eq!(Easing::Linear.apply(0.25), 0.25);
        assert!(Easing::EaseOut.apply(0.5) > 0.5);
        assert!(Easing::EaseIn.apply(0.5) < 0.5);
    }

    #[test]
    fn test_animated_value_reaches_target() {
        let mut value = AnimatedValue::new(0.0);
        value.animate_to(1.0, ms(100), Easing::Linear);

        assert!(value.advance(ms(50)));
        assert!((value.value() - 0.5).abs() < 1e-4);

        assert!(!value.advance(ms(60)));
        assert_eq!(value.value(), 1.0);
        assert!(!value.is_animating());
    }

    #[test]
    fn test_zero_duration_snaps() {
        let mut value = AnimatedValue::new(0.0);
        value.animate_to(300.0, Duration::ZERO, Easing::EaseOut);
        assert_eq!(value.value(), 300.0);
        assert!(!value.is_animating());
    }

    #[test]
    fn test_retarget_starts_from_current_value() {
        let mut value = AnimatedValue::new(0.0);
        value.animate_to(1.0, ms(100), Easing::Linear);
        value.advance(ms(40));
        let midway = value.value();

        value.animate_to(0.0, ms(100), Easing::Linear);
        assert_eq!(value.value(), midway);

        value.advance(ms(10));
        assert!(value.value() < midway);
        assert!(value.value() > 0.0);
    }

    #[test]
    fn test_controller_advances_together() {
        let mut controller = AnimationController::new();
        controller.register(AnimatedProperty::Opacity, 0.0);
        controller.register(AnimatedProperty::Scale, 0.8);

        controller.start(
            &[(AnimatedProperty::Opacity, 1.0), (AnimatedProperty::Scale, 1.0)],
            ms(100),
            Easing::Linear,
        );
        assert!(controller.tick(ms(50)));
        assert!((controller.get(AnimatedProperty::Opacity).unwrap() - 0.5).abs() < 1e-4);
        assert!((controller.get(AnimatedProperty::Scale).unwrap() - 0.9).abs() < 1e-4);

        assert!(!controller.tick(ms(50)));
        assert!(controller.is_idle());
    }

    #[test]
    fn test_controller_ignores_unregistered() {
        let mut controller = AnimationController::new();
        controller.register(AnimatedProperty::Opacity, 0.0);
        controller.start(&[(AnimatedProperty::TranslateY, 0.0)], ms(100), Easing::Linear);
        assert!(controller.is_idle());
        assert_eq!(controller.get(AnimatedProperty::TranslateY), None);
    }

    #[test]
    fn test_cancel_all_holds_value() {
        let mut controller = AnimationController::new();
        controller.register(AnimatedProperty::Opacity, 0.0);
        controller.start(&[(AnimatedProperty::Opacity, 1.0)], ms(100), Easing::Linear);
        controller.tick(ms(25));
        let held = controller.get(AnimatedProperty::Opacity).unwrap();

        controller.cancel_all();
        assert!(controller.is_idle());
        assert!(!controller.tick(ms(100)));
        assert_eq!(controller.get(AnimatedProperty::Opacity), Some(held));
    }
}
