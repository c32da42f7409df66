// Overture Animation Core - Easing Curves
//
// Maps tween progress in [0, 1] to an eased value. The back curves overshoot
// their endpoints using the standard overshoot constant, which is what gives
// the pop-in animations their bounce.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Standard back-easing overshoot constant.
const BACK_OVERSHOOT: f32 = 1.70158;

/// Named interpolation shape controlling animation velocity over time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Easing {
    /// Constant velocity
    Linear,
    /// Decelerates into the target, overshooting past it once
    OutBack,
    /// Pulls back below the start, accelerates through, overshoots the end
    InOutBack,
}

impl Easing {
    /// Apply the curve to a progress value.
    ///
    /// `t` is clamped to [0, 1] before evaluation. Endpoints are exact:
    /// `apply(0.0) == 0.0` and `apply(1.0) == 1.0` for every curve. Back
    /// curves return values outside [0, 1] for interior `t`.
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::OutBack => {
                let c1 = BACK_OVERSHOOT;
                let c3 = c1 + 1.0;
                let u = t - 1.0;
                1.0 + c3 * u * u * u + c1 * u * u
            }
            Easing::InOutBack => {
                let c2 = BACK_OVERSHOOT * 1.525;
                if t < 0.5 {
                    let u = 2.0 * t;
                    (u * u * ((c2 + 1.0) * u - c2)) / 2.0
                } else {
                    let u = 2.0 * t - 2.0;
                    (u * u * ((c2 + 1.0) * u + c2) + 2.0) / 2.0
                }
            }
        }
    }

    /// Parse from a configuration string
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "linear" => Some(Easing::Linear),
            "out-back" | "outback" => Some(Easing::OutBack),
            "in-out-back" | "inoutback" => Some(Easing::InOutBack),
            _ => None,
        }
    }
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Easing::Linear => write!(f, "linear"),
            Easing::OutBack => write!(f, "out-back"),
            Easing::InOutBack => write!(f, "in-out-back"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    #[test]
    fn test_endpoints_exact() {
        for easing in [Easing::Linear, Easing::OutBack, Easing::InOutBack] {
            assert!(easing.apply(0.0).abs() < EPSILON, "{} at 0", easing);
            assert!((easing.apply(1.0) - 1.0).abs() < EPSILON, "{} at 1", easing);
        }
    }

    #[test]
    fn test_linear_is_identity() {
        assert_eq!(Easing::Linear.apply(0.25), 0.25);
        assert_eq!(Easing::Linear.apply(0.75), 0.75);
    }

    #[test]
    fn test_out_back_overshoots() {
        // OutBack passes its target before settling on it
        let peak = (1..100)
            .map(|i| Easing::OutBack.apply(i as f32 / 100.0))
            .fold(f32::MIN, f32::max);
        assert!(peak > 1.0);
    }

    #[test]
    fn test_in_out_back_pulls_back_then_overshoots() {
        // Early: below zero (anticipation)
        assert!(Easing::InOutBack.apply(0.1) < 0.0);
        // Late: above one (overshoot)
        assert!(Easing::InOutBack.apply(0.9) > 1.0);
        // Midpoint is exactly halfway
        assert!((Easing::InOutBack.apply(0.5) - 0.5).abs() < EPSILON);
    }

    #[test]
    fn test_clamps_out_of_range_progress() {
        assert_eq!(Easing::OutBack.apply(-0.5), Easing::OutBack.apply(0.0));
        assert_eq!(Easing::OutBack.apply(1.5), Easing::OutBack.apply(1.0));
    }

    #[test]
    fn test_from_str() {
        assert_eq!(Easing::from_str("linear"), Some(Easing::Linear));
        assert_eq!(Easing::from_str("OUT-BACK"), Some(Easing::OutBack));
        assert_eq!(Easing::from_str("inoutback"), Some(Easing::InOutBack));
        assert_eq!(Easing::from_str("bounce"), None);
    }

    #[test]
    fn test_display_round_trips() {
        for easing in [Easing::Linear, Easing::OutBack, Easing::InOutBack] {
            assert_eq!(Easing::from_str(&easing.to_string()), Some(easing));
        }
    }
}
