//! Named easing presets, applied identically regardless of target.

/// Standard overshoot for [`Easing::BackOut`] when nothing stronger is asked
/// for.
pub const BACK_OVERSHOOT: f64 = 1.70158;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    Linear,
    QuadIn,
    QuadOut,
    QuadInOut,
    SineInOut,
    /// Eases out past the end value and settles back; the payload controls
    /// how far past.
    BackOut(f64),
}

impl Easing {
    pub fn back_out() -> Self {
        Self::BackOut(BACK_OVERSHOOT)
    }

    /// Eased fraction for timeline progress `t`, with `t` clamped to
    /// `[0, 1]` first. `BackOut` may return values above 1 inside the
    /// interval; every curve hits exactly 0 at the start and 1 at the end.
    pub fn value_at(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::QuadIn => t * t,
            Self::QuadOut => 1.0 - (1.0 - t) * (1.0 - t),
            Self::QuadInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            Self::SineInOut => -((std::f64::consts::PI * t).cos() - 1.0) / 2.0,
            Self::BackOut(s) => {
                let u = t - 1.0;
                1.0 + (s + 1.0) * u.powi(3) + s * u * u
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CURVES: &[Easing] = &[
        Easing::Linear,
        Easing::QuadIn,
        Easing::QuadOut,
        Easing::QuadInOut,
        Easing::SineInOut,
        Easing::BackOut(BACK_OVERSHOOT),
    ];

    #[test]
    fn all_curves_pin_endpoints() {
        for curve in CURVES {
            assert!(curve.value_at(0.0).abs() < 1e-9, "{curve:?} at 0");
            assert!((curve.value_at(1.0) - 1.0).abs() < 1e-9, "{curve:?} at 1");
        }
    }

    #[test]
    fn input_is_clamped() {
        for curve in CURVES {
            assert_eq!(curve.value_at(-3.0), curve.value_at(0.0));
            assert_eq!(curve.value_at(7.0), curve.value_at(1.0));
        }
    }

    #[test]
    fn quad_out_decelerates() {
        let first_half = Easing::QuadOut.value_at(0.5);
        assert!(first_half > 0.5, "quad-out front-loads progress");
    }

    #[test]
    fn back_out_overshoots_then_settles() {
        let peak = (1..100)
            .map(|i| Easing::back_out().value_at(i as f64 / 100.0))
            .fold(f64::MIN, f64::max);
        assert!(peak > 1.0, "back-out should pass the end value, got {peak}");
        assert!((Easing::back_out().value_at(1.0) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn sine_in_out_is_symmetric() {
        let a = Easing::SineInOut.value_at(0.25);
        let b = Easing::SineInOut.value_at(0.75);
        assert!((a + b - 1.0).abs() < 1e-9);
    }
}
