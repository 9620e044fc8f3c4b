//! Conversion of the continuous single-pole response into a per-step
//! smoothing coefficient.
//!
//! Based on <https://en.wikipedia.org/wiki/Low-pass_filter#Discrete-time_realization>.
//! The first-order form is what sensor code calibrated against the older
//! firmware expects, so it stays the default.

use libm::expm1f;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Discretization {
    /// `alpha = w·dt / (1 + w·dt)`
    #[default]
    FirstOrder,
    /// `alpha = 1 - e^(-w·dt)`
    Exponential,
}

impl Discretization {
    /// Weight of the new sample for a step of `dt` seconds with cutoff `w`
    /// in radians per second.
    ///
    /// For `w > 0` and `dt >= 0` the result lies within `[0, 1]`, being zero
    /// only when `dt` is zero. It reaches exactly 1 only when a step is so
    /// long compared to the time constant that the previous output no
    /// longer registers in f32.
    pub fn smoothing_coefficient(self, w: f32, dt: f32) -> f32 {
        let wdt = w * dt;
        match self {
            Self::FirstOrder => wdt / (1.0 + wdt),
            // NOTE: expm1 keeps the coefficient non-zero for tiny steps,
            // where 1 - exp(-x) would round to zero.
            Self::Exponential => -expm1f(-wdt),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use core::f32::consts::TAU;

    const DISCRETIZATIONS: [Discretization; 2] =
        [Discretization::FirstOrder, Discretization::Exponential];

    #[test]
    fn zero_step_gives_zero_coefficient() {
        for discretization in DISCRETIZATIONS {
            assert_eq!(discretization.smoothing_coefficient(TAU, 0.0), 0.0);
        }
    }

    #[test]
    fn coefficient_stays_within_unit_interval() {
        for discretization in DISCRETIZATIONS {
            for w in [0.1, 1.0, TAU, 20.0] {
                for dt in [1e-6, 1e-3, 0.01, 0.1, 0.5] {
                    let alpha = discretization.smoothing_coefficient(w, dt);
                    assert!(alpha > 0.0, "alpha={alpha} for w={w} dt={dt}");
                    assert!(alpha < 1.0, "alpha={alpha} for w={w} dt={dt}");
                }
            }
        }
    }

    #[test]
    fn long_steps_saturate_at_one() {
        for discretization in DISCRETIZATIONS {
            let mut previous = 0.0;
            for dt in [1.0, 3.0, 10.0, 1_000.0, 1e9] {
                let alpha = discretization.smoothing_coefficient(TAU, dt);
                assert!(alpha >= previous && alpha <= 1.0, "alpha={alpha} dt={dt}");
                previous = alpha;
            }
        }
        assert_eq!(Discretization::Exponential.smoothing_coefficient(1.0, 20.0), 1.0);
        assert!(Discretization::Exponential.smoothing_coefficient(1.0, 10.0) < 1.0);
    }

    #[test]
    fn coefficient_grows_with_step_length() {
        for discretization in DISCRETIZATIONS {
            let mut previous = 0.0;
            for dt in [0.001, 0.002, 0.005, 0.01, 0.1] {
                let alpha = discretization.smoothing_coefficient(TAU, dt);
                assert!(alpha > previous);
                previous = alpha;
            }
        }
    }

    #[test]
    fn first_order_matches_known_value() {
        let alpha = Discretization::FirstOrder.smoothing_coefficient(TAU, 0.01);
        assert!((alpha - 0.059_117).abs() < 1e-5);
    }

    #[test]
    fn exponential_matches_known_value() {
        let alpha = Discretization::Exponential.smoothing_coefficient(TAU, 0.01);
        assert!((alpha - 0.060_898).abs() < 1e-5);
    }

    #[test]
    fn first_order_smooths_more_than_exponential() {
        let first_order = Discretization::FirstOrder.smoothing_coefficient(TAU, 0.05);
        let exponential = Discretization::Exponential.smoothing_coefficient(TAU, 0.05);
        assert!(first_order < exponential);
    }
}
