//! Scalar values changing over time.
//!
//! A [`Tween`] maps a local time in `[0, duration]` to a value. Tweens are chained with a
//! [`TweenSequence`] which is what a [`Timeline`](crate::timeline::Timeline) stores per tag.

/// Easing curves warping normalized time before interpolating.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Easing {
    /// `f(x) = x`
    #[default]
    Linear,

    /// `f(x) = x²`, starts slow
    EaseInQuad,

    /// `f(x) = 1 - (1 - x)²`, ends slow
    EaseOutQuad,

    /// Quadratic ease in for the first half, ease out for the second one
    EaseInOutQuad,
}

impl Easing {
    /// Apply the easing function to a progress value between `0` and `1`.
    pub fn apply(&self, x: f64) -> f64 {
        match self {
            Easing::Linear => x,
            Easing::EaseInQuad => x * x,
            Easing::EaseOutQuad => 1.0 - (1.0 - x) * (1.0 - x),
            Easing::EaseInOutQuad => {
                if x < 0.5 {
                    2.0 * x * x
                } else {
                    1.0 - (-2.0 * x + 2.0).powi(2) / 2.0
                }
            }
        }
    }
}

/// Linearly interpolate between two scalars.
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    (1.0 - t) * a + t * b
}

/// A value over time.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tween {
    /// Holds `value` for `duration`
    Constant {
        /// The value
        value: f64,
        /// How long the value is held
        duration: f64,
    },

    /// Moves from `start` to `stop` at constant speed
    Linear {
        /// Value at time `0`
        start: f64,
        /// Value at time `duration`
        stop: f64,
        /// Length of the transition
        duration: f64,
    },

    /// Moves from `start` to `stop` along an easing curve
    Eased {
        /// Value at time `0`
        start: f64,
        /// Value at time `duration`
        stop: f64,
        /// Length of the transition
        duration: f64,
        /// The curve
        easing: Easing,
    },

    /// Several tweens one after another
    Sequence(TweenSequence),
}

impl Tween {
    /// Hold a value.
    pub fn constant(value: f64, duration: f64) -> Self {
        Tween::Constant { value, duration }
    }

    /// Linear transition.
    pub fn linear(start: f64, stop: f64, duration: f64) -> Self {
        Tween::Linear {
            start,
            stop,
            duration,
        }
    }

    /// Eased transition.
    pub fn eased(start: f64, stop: f64, duration: f64, easing: Easing) -> Self {
        Tween::Eased {
            start,
            stop,
            duration,
            easing,
        }
    }

    /// Quadratic ease in from `start` to `stop`.
    pub fn ease_in_quad(start: f64, stop: f64, duration: f64) -> Self {
        Tween::eased(start, stop, duration, Easing::EaseInQuad)
    }

    /// Quadratic ease out from `start` to `stop`.
    pub fn ease_out_quad(start: f64, stop: f64, duration: f64) -> Self {
        Tween::eased(start, stop, duration, Easing::EaseOutQuad)
    }

    /// How long the tween lasts.
    pub fn duration(&self) -> f64 {
        match self {
            Tween::Constant { duration, .. }
            | Tween::Linear { duration, .. }
            | Tween::Eased { duration, .. } => *duration,
            Tween::Sequence(sequence) => sequence.duration(),
        }
    }

    /// Get the value at local time `t`.
    ///
    /// Times outside of `[0, duration]` are clamped to it.
    pub fn evaluate(&self, t: f64) -> f64 {
        match self {
            Tween::Constant { value, .. } => *value,
            Tween::Linear {
                start,
                stop,
                duration,
            } => lerp(*start, *stop, progress(t, *duration)),
            Tween::Eased {
                start,
                stop,
                duration,
                easing,
            } => lerp(*start, *stop, easing.apply(progress(t, *duration))),
            Tween::Sequence(sequence) => sequence.evaluate(t),
        }
    }
}

/// Normalized time, a zero length transition is always finished.
fn progress(t: f64, duration: f64) -> f64 {
    if duration <= 0.0 {
        return 1.0;
    }
    num::clamp(t / duration, 0.0, 1.0)
}

impl From<TweenSequence> for Tween {
    fn from(sequence: TweenSequence) -> Self {
        Tween::Sequence(sequence)
    }
}

/// Tweens played one after another.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TweenSequence(Vec<Tween>);

impl TweenSequence {
    /// Chain `tweens` in order.
    pub fn new<I: IntoIterator<Item = Tween>>(tweens: I) -> Self {
        TweenSequence(tweens.into_iter().collect())
    }

    /// Append a tween at the end.
    pub fn then(mut self, tween: Tween) -> Self {
        self.0.push(tween);
        self
    }

    /// The chained tweens.
    pub fn tweens(&self) -> &[Tween] {
        &self.0
    }

    /// Sum of all tweens' durations.
    pub fn duration(&self) -> f64 {
        self.0.iter().map(Tween::duration).sum()
    }

    /// Find the tween playing at `t` and the time it started.
    ///
    /// That is the first tween whose interval `[start, start + duration)` contains `t`.
    /// Returns the last tween if `t` is past the end.
    fn find(&self, t: f64) -> Option<(&Tween, f64)> {
        let mut start = 0.0;
        for tween in &self.0 {
            let end = start + tween.duration();
            if t < end {
                return Some((tween, start));
            }
            start = end;
        }
        self.0.last().map(|tween| (tween, start - tween.duration()))
    }

    /// Get the value at time `t`.
    ///
    /// `t` is clamped to `[0, duration]`: before the start the first tween is evaluated at `0`,
    /// past the end the last tween is evaluated at its own duration.
    /// An empty sequence is `0` all the time, one with a negative total duration behaves like
    /// one of zero length.
    pub fn evaluate(&self, t: f64) -> f64 {
        let t = num::clamp(t, 0.0, self.duration().max(0.0));
        match self.find(t) {
            Some((tween, start)) => tween.evaluate(t - start),
            None => 0.0,
        }
    }
}

impl FromIterator<Tween> for TweenSequence {
    fn from_iter<I: IntoIterator<Item = Tween>>(iter: I) -> Self {
        TweenSequence::new(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easing_endpoints() {
        for easing in [
            Easing::Linear,
            Easing::EaseInQuad,
            Easing::EaseOutQuad,
            Easing::EaseInOutQuad,
        ] {
            assert_eq!(easing.apply(0.0), 0.0);
            assert_eq!(easing.apply(1.0), 1.0);
        }
        assert_eq!(Easing::EaseInQuad.apply(0.5), 0.25);
        assert_eq!(Easing::EaseOutQuad.apply(0.5), 0.75);
        assert_eq!(Easing::EaseInOutQuad.apply(0.5), 0.5);
    }

    #[test]
    fn primitives() {
        assert_eq!(Tween::constant(3.0, 1.0).evaluate(0.7), 3.0);
        assert_eq!(Tween::linear(0.0, 10.0, 2.0).evaluate(0.5), 2.5);
        assert_eq!(Tween::ease_in_quad(0.0, 10.0, 2.0).evaluate(1.0), 2.5);
        assert_eq!(Tween::ease_out_quad(0.0, 10.0, 2.0).evaluate(1.0), 7.5);
        assert_eq!(Tween::linear(0.0, 10.0, 0.0).evaluate(0.0), 10.0);
    }

    #[test]
    fn duration_is_additive() {
        let sequence = TweenSequence::new([Tween::constant(0.0, 1.0), Tween::linear(0.0, 1.0, 2.0)]);
        assert_eq!(sequence.duration(), 3.0);

        let nested = TweenSequence::new([sequence.clone().into(), Tween::constant(1.0, 0.5)]);
        assert_eq!(nested.duration(), 3.5);
        assert_eq!(nested.evaluate(2.0), 0.5);
    }

    #[test]
    fn continuous_at_boundaries() {
        let sequence = TweenSequence::new([Tween::linear(0.0, 1.0, 1.0), Tween::linear(1.0, 2.0, 1.0)]);
        let eps = 1e-9;
        assert!((sequence.evaluate(1.0 - eps) - 1.0).abs() < 1e-6);
        assert!((sequence.evaluate(1.0 + eps) - 1.0).abs() < 1e-6);
        assert_eq!(sequence.evaluate(1.0), 1.0);
        assert_eq!(sequence.evaluate(1.5), 1.5);
    }

    #[test]
    fn selects_first_matching_tween() {
        let sequence = TweenSequence::new([
            Tween::constant(-1.0, 1.0),
            Tween::constant(0.0, 0.0),
            Tween::constant(1.0, 1.0),
        ]);
        assert_eq!(sequence.evaluate(0.0), -1.0);
        assert_eq!(sequence.evaluate(0.999), -1.0);
        // The zero length tween's interval is empty
        assert_eq!(sequence.evaluate(1.0), 1.0);
    }

    #[test]
    fn clamps_out_of_range() {
        let sequence = TweenSequence::new([
            Tween::ease_in_quad(-100.0, 0.0, 1.0),
            Tween::ease_out_quad(0.0, 100.0, 1.0),
        ]);
        assert_eq!(sequence.evaluate(-5.0), -100.0);
        assert_eq!(sequence.evaluate(2.0), 100.0);
        assert_eq!(sequence.evaluate(50.0), 100.0);
        assert_eq!(TweenSequence::default().evaluate(1.0), 0.0);
    }

    #[test]
    fn negative_duration() {
        let sequence = TweenSequence::new([Tween::linear(0.0, 1.0, -2.0)]);
        assert_eq!(sequence.duration(), -2.0);
        assert_eq!(sequence.evaluate(-1.0), 1.0);
        assert_eq!(sequence.evaluate(1.0), 1.0);

        let nan = TweenSequence::new([Tween::constant(3.0, f64::NAN)]);
        assert_eq!(nan.evaluate(1.0), 3.0);
    }
}
