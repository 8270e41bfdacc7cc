//! Timing curves for overlay animations.
//!
//! Curves map normalized progress `t` in `[0, 1]` to an eased value.
//! Out-elastic intentionally exceeds `1.0` near the end of the curve, which
//! is what gives the back button its overshoot-and-settle release.

/// Easing curve applied to a tween's normalized progress.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Easing {
    /// Constant rate of change. The default for plain fades.
    Linear,
    /// Quintic ease-out: fast start, long settle.
    OutQuint,
    /// Elastic ease-out: overshoots the target and springs back.
    OutElastic,
}

impl Easing {
    /// Evaluate the curve at progress `t`, clamped to `[0, 1]`.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::OutQuint => 1.0 - (1.0 - t).powi(5),
            Easing::OutElastic => {
                if t == 0.0 {
                    0.0
                } else if t == 1.0 {
                    1.0
                } else {
                    let c = std::f64::consts::TAU / 3.0;
                    (2.0f64).powf(-10.0 * t) * ((t * 10.0 - 0.75) * c).sin() + 1.0
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints() {
        for easing in [Easing::Linear, Easing::OutQuint, Easing::OutElastic] {
            assert_eq!(easing.apply(0.0), 0.0);
            assert_eq!(easing.apply(1.0), 1.0);
        }
    }

    #[test]
    fn test_clamps_out_of_range_progress() {
        assert_eq!(Easing::OutQuint.apply(-0.5), 0.0);
        assert_eq!(Easing::OutQuint.apply(1.5), 1.0);
    }

    #[test]
    fn test_out_quint_midpoint() {
        let v = Easing::OutQuint.apply(0.5);
        assert!((v - 0.96875).abs() < 1e-12);
    }

    #[test]
    fn test_out_quint_decelerates() {
        // Covers most of the distance in the first quarter.
        assert!(Easing::OutQuint.apply(0.25) > 0.7);
    }

    #[test]
    fn test_out_elastic_overshoots() {
        // Near t = 0.45 the spring swings past the target.
        assert!(Easing::OutElastic.apply(0.45) > 1.0);
    }
}
