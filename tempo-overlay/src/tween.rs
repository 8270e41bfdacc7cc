//! Animation command model and the frame-driven tween runner.
//!
//! Handlers never block on an animation: they issue [`TweenSpec`] commands
//! against a [`MotionScheduler`] and return. The app's scheduler is
//! [`TweenRunner`], advanced once per frame with the frame's wall-clock
//! time; widgets then read interpolated values and apply them to shader
//! instances and layout.
//!
//! Issuing a new tween for a (target, property) pair that already has one in
//! flight supersedes the old tween, starting from whatever interpolated
//! value it had reached. Last write wins.

use std::collections::HashMap;

use crate::easing::Easing;

/// Animatable region of the settings overlay.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TweenTarget {
    /// The dimming scrim behind the panel.
    Background,
    /// The scrollable list of settings sections.
    SectionList,
    /// The panel's content region (slides horizontally).
    ContentRegion,
    /// The back-navigation affordance.
    BackButton,
    /// The back button's chevron row (spacing micro-animation).
    GlyphRow,
    /// The back button's glyph/label group (press squish).
    GlyphGroup,
}

/// Property of a target being animated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TweenProperty {
    Opacity,
    OffsetX,
    Spacing,
    Scale,
}

impl TweenProperty {
    /// Value a property holds before anything has animated it.
    pub fn rest_value(self) -> f64 {
        match self {
            TweenProperty::Opacity => 1.0,
            TweenProperty::OffsetX => 0.0,
            TweenProperty::Spacing => 0.0,
            TweenProperty::Scale => 1.0,
        }
    }
}

/// A single fire-and-forget animation command.
///
/// Durations and delays are in seconds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TweenSpec {
    pub target: TweenTarget,
    pub property: TweenProperty,
    pub to: f64,
    pub duration: f64,
    pub delay: f64,
    pub easing: Easing,
}

/// Injected animation capability.
///
/// The transition logic only ever talks to this trait, so it can run against
/// the real [`TweenRunner`] or a recording fake in tests.
pub trait MotionScheduler {
    fn animate(&mut self, spec: TweenSpec);
}

struct ActiveTween {
    spec: TweenSpec,
    from: f64,
    /// Stamped with the first frame time after issue. Frames only arrive
    /// while something is in flight, so stamping at issue time would
    /// back-date a tween by however long the runner sat idle.
    started_at: Option<f64>,
}

/// Elapsed-time tween interpolator.
///
/// `advance` is called once per frame with the frame time; `value` reads the
/// current interpolated value for a (target, property) pair, falling back to
/// the property's rest value if nothing ever animated it.
pub struct TweenRunner {
    values: HashMap<(TweenTarget, TweenProperty), f64>,
    active: Vec<ActiveTween>,
}

impl TweenRunner {
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
            active: Vec::new(),
        }
    }

    /// Seed a value without animating, e.g. the back button starting at
    /// zero opacity.
    pub fn set_value(&mut self, target: TweenTarget, property: TweenProperty, value: f64) {
        self.active
            .retain(|t| (t.spec.target, t.spec.property) != (target, property));
        self.values.insert((target, property), value);
    }

    /// Current value for a (target, property) pair.
    pub fn value(&self, target: TweenTarget, property: TweenProperty) -> f64 {
        self.values
            .get(&(target, property))
            .copied()
            .unwrap_or_else(|| property.rest_value())
    }

    pub fn is_idle(&self) -> bool {
        self.active.is_empty()
    }

    /// Advance all tweens to the given frame time.
    ///
    /// Returns `true` while any tween is still in flight (including ones
    /// still inside their start delay), so callers know to request another
    /// frame.
    pub fn advance(&mut self, now: f64) -> bool {
        let values = &mut self.values;
        self.active.retain_mut(|tween| {
            let key = (tween.spec.target, tween.spec.property);
            let started_at = *tween.started_at.get_or_insert(now);
            let elapsed = now - started_at - tween.spec.delay;

            if elapsed < 0.0 {
                // Still in the start delay; hold the departure value.
                values.insert(key, tween.from);
                return true;
            }

            if tween.spec.duration <= 0.0 || elapsed >= tween.spec.duration {
                values.insert(key, tween.spec.to);
                return false;
            }

            let t = elapsed / tween.spec.duration;
            let eased = tween.spec.easing.apply(t);
            values.insert(key, tween.from + (tween.spec.to - tween.from) * eased);
            true
        });

        !self.active.is_empty()
    }
}

impl Default for TweenRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl MotionScheduler for TweenRunner {
    fn animate(&mut self, spec: TweenSpec) {
        let key = (spec.target, spec.property);
        let from = self.value(spec.target, spec.property);

        // Last write wins: drop any in-flight tween on the same property.
        self.active
            .retain(|t| (t.spec.target, t.spec.property) != key);

        self.active.push(ActiveTween {
            spec,
            from,
            started_at: None,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(to: f64, duration: f64, delay: f64, easing: Easing) -> TweenSpec {
        TweenSpec {
            target: TweenTarget::Background,
            property: TweenProperty::Opacity,
            to,
            duration,
            delay,
            easing,
        }
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_rest_values() {
        let runner = TweenRunner::new();
        assert_eq!(runner.value(TweenTarget::Background, TweenProperty::Opacity), 1.0);
        assert_eq!(runner.value(TweenTarget::GlyphGroup, TweenProperty::Scale), 1.0);
        assert_eq!(runner.value(TweenTarget::GlyphRow, TweenProperty::Spacing), 0.0);
        assert_eq!(runner.value(TweenTarget::ContentRegion, TweenProperty::OffsetX), 0.0);
    }

    #[test]
    fn test_linear_interpolation() {
        let mut runner = TweenRunner::new();
        runner.set_value(TweenTarget::Background, TweenProperty::Opacity, 0.0);
        runner.animate(spec(1.0, 1.0, 0.0, Easing::Linear));

        // The first frame stamps the tween's start.
        assert!(runner.advance(0.0));
        assert!(approx(runner.value(TweenTarget::Background, TweenProperty::Opacity), 0.0));

        assert!(runner.advance(0.5));
        assert!(approx(runner.value(TweenTarget::Background, TweenProperty::Opacity), 0.5));

        assert!(!runner.advance(1.0));
        assert!(approx(runner.value(TweenTarget::Background, TweenProperty::Opacity), 1.0));
        assert!(runner.is_idle());
    }

    #[test]
    fn test_delay_holds_departure_value() {
        let mut runner = TweenRunner::new();
        runner.set_value(TweenTarget::Background, TweenProperty::Opacity, 0.25);
        runner.animate(spec(1.0, 0.1, 0.1, Easing::Linear));
        runner.advance(0.0);

        // Inside the delay the value must not move, but the tween is alive.
        assert!(runner.advance(0.05));
        assert!(approx(runner.value(TweenTarget::Background, TweenProperty::Opacity), 0.25));

        assert!(!runner.advance(0.3));
        assert!(approx(runner.value(TweenTarget::Background, TweenProperty::Opacity), 1.0));
    }

    #[test]
    fn test_last_write_wins_supersedes_in_flight() {
        let mut runner = TweenRunner::new();
        runner.set_value(TweenTarget::Background, TweenProperty::Opacity, 0.0);
        runner.animate(spec(1.0, 1.0, 0.0, Easing::Linear));
        runner.advance(0.0);
        runner.advance(0.5);

        // Redirect mid-flight: the new tween departs from 0.5, and only one
        // tween remains on the property.
        runner.animate(spec(0.0, 1.0, 0.0, Easing::Linear));
        assert_eq!(runner.active.len(), 1);
        runner.advance(0.5);

        runner.advance(1.0);
        assert!(approx(runner.value(TweenTarget::Background, TweenProperty::Opacity), 0.25));

        assert!(!runner.advance(1.6));
        assert!(approx(runner.value(TweenTarget::Background, TweenProperty::Opacity), 0.0));
    }

    #[test]
    fn test_zero_duration_jumps() {
        let mut runner = TweenRunner::new();
        runner.animate(spec(0.0, 0.0, 0.0, Easing::Linear));
        assert!(!runner.advance(0.0));
        assert!(approx(runner.value(TweenTarget::Background, TweenProperty::Opacity), 0.0));
    }

    #[test]
    fn test_independent_properties() {
        let mut runner = TweenRunner::new();
        runner.set_value(TweenTarget::ContentRegion, TweenProperty::OffsetX, 0.0);
        runner.animate(TweenSpec {
            target: TweenTarget::ContentRegion,
            property: TweenProperty::OffsetX,
            to: -280.0,
            duration: 0.5,
            delay: 0.0,
            easing: Easing::OutQuint,
        });
        runner.animate(spec(0.9, 0.5, 0.0, Easing::OutQuint));
        runner.advance(0.0);

        runner.advance(0.5);
        assert!(approx(runner.value(TweenTarget::ContentRegion, TweenProperty::OffsetX), -280.0));
        assert!(approx(runner.value(TweenTarget::Background, TweenProperty::Opacity), 0.9));
    }

    #[test]
    fn test_tween_issued_after_idle_gap_runs_full_duration() {
        let mut runner = TweenRunner::new();
        runner.set_value(TweenTarget::GlyphRow, TweenProperty::Spacing, 0.0);
        runner.advance(1.0);
        assert!(runner.is_idle());

        // Issued long after the last frame: the first frame after issue must
        // sit near the start of the curve, not at its end.
        runner.animate(TweenSpec {
            target: TweenTarget::GlyphRow,
            property: TweenProperty::Spacing,
            to: 5.0,
            duration: 0.5,
            delay: 0.0,
            easing: Easing::OutQuint,
        });
        assert!(runner.advance(11.0));
        assert!(runner.value(TweenTarget::GlyphRow, TweenProperty::Spacing) < 1.0);

        assert!(runner.advance(11.25));
        let midway = runner.value(TweenTarget::GlyphRow, TweenProperty::Spacing);
        assert!(midway > 0.0 && midway < 5.0);

        assert!(!runner.advance(11.6));
        assert!(approx(runner.value(TweenTarget::GlyphRow, TweenProperty::Spacing), 5.0));
    }
}
