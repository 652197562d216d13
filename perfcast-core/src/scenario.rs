//! Mapping from named scenarios to model coefficients.

use crate::Calibration;

/// A named qualitative condition that perturbs the model's coefficients.
///
/// Each variant carries its own override policy: an override supplied
/// with the request takes precedence over the calibrated default for
/// that variant, and is meaningless for the others.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scenario {
    /// Baseline dynamics, no perturbation.
    Standard,

    /// Training ("formation"): a direct positive monthly impact.
    Formation { impact: Option<f64> },

    /// Increased workload ("augmentation_charge"): amplified decay plus
    /// a small direct negative impact.
    AugmentationCharge { stress: Option<f64> },
}

/// The immutable coefficient set consumed by the differential model.
///
/// Derived once per simulation run from a [`Scenario`] and a
/// [`Calibration`]; never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coefficients {
    pub base_growth: f64,
    pub base_decay: f64,
    pub scenario_impact: f64,
    pub stress_multiplier: f64,
}

impl Scenario {
    /// Resolves a scenario tag and optional overrides into a `Scenario`.
    ///
    /// An unrecognized tag maps to [`Scenario::Standard`]. Whether such
    /// tags should instead be rejected upstream is an open calibration
    /// question; callers that want to warn on the fallback can compare
    /// the tag against [`Scenario::is_known_tag`] first.
    #[must_use]
    pub fn from_tag(tag: &str, stress: Option<f64>, training: Option<f64>) -> Self {
        match tag {
            "formation" => Self::Formation { impact: training },
            "augmentation_charge" => Self::AugmentationCharge { stress },
            _ => Self::Standard,
        }
    }

    /// Returns whether the tag names one of the defined scenarios.
    #[must_use]
    pub fn is_known_tag(tag: &str) -> bool {
        matches!(tag, "standard" | "formation" | "augmentation_charge")
    }

    /// Derives the coefficient set for this scenario.
    #[must_use]
    pub fn coefficients(&self, calibration: &Calibration) -> Coefficients {
        let (scenario_impact, stress_multiplier) = match *self {
            Self::Standard => (0.0, 0.0),
            Self::Formation { impact } => (impact.unwrap_or(calibration.formation_boost), 0.0),
            Self::AugmentationCharge { stress } => (
                calibration.charge_impact,
                stress.unwrap_or(calibration.charge_stress),
            ),
        };

        Coefficients {
            base_growth: calibration.base_growth,
            base_decay: calibration.base_decay,
            scenario_impact,
            stress_multiplier,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn standard_leaves_base_rates_untouched() {
        let coefficients = Scenario::Standard.coefficients(&Calibration::default());

        assert_relative_eq!(coefficients.base_growth, 0.2);
        assert_relative_eq!(coefficients.base_decay, 0.1);
        assert_relative_eq!(coefficients.scenario_impact, 0.0);
        assert_relative_eq!(coefficients.stress_multiplier, 0.0);
    }

    #[test]
    fn formation_defaults_to_calibrated_boost() {
        let coefficients =
            Scenario::Formation { impact: None }.coefficients(&Calibration::default());

        assert_relative_eq!(coefficients.scenario_impact, 2.0);
        assert_relative_eq!(coefficients.stress_multiplier, 0.0);
    }

    #[test]
    fn formation_override_wins_over_default() {
        let coefficients =
            Scenario::Formation { impact: Some(3.5) }.coefficients(&Calibration::default());

        assert_relative_eq!(coefficients.scenario_impact, 3.5);
    }

    #[test]
    fn augmentation_charge_defaults_to_calibrated_stress() {
        let coefficients =
            Scenario::AugmentationCharge { stress: None }.coefficients(&Calibration::default());

        assert_relative_eq!(coefficients.scenario_impact, -1.0);
        assert_relative_eq!(coefficients.stress_multiplier, 0.5);
    }

    #[test]
    fn augmentation_charge_override_wins_over_default() {
        let coefficients = Scenario::AugmentationCharge { stress: Some(1.2) }
            .coefficients(&Calibration::default());

        assert_relative_eq!(coefficients.stress_multiplier, 1.2);
    }

    #[test]
    fn unknown_tag_falls_back_to_standard() {
        let scenario = Scenario::from_tag("bogus", Some(1.0), Some(2.0));
        assert_eq!(scenario, Scenario::Standard);
        assert!(!Scenario::is_known_tag("bogus"));
    }

    #[test]
    fn tags_map_to_their_variants() {
        assert_eq!(
            Scenario::from_tag("formation", None, Some(2.5)),
            Scenario::Formation { impact: Some(2.5) }
        );
        assert_eq!(
            Scenario::from_tag("augmentation_charge", Some(0.8), None),
            Scenario::AugmentationCharge { stress: Some(0.8) }
        );
        assert_eq!(Scenario::from_tag("standard", None, None), Scenario::Standard);
    }

    #[test]
    fn overrides_are_ignored_by_unrelated_scenarios() {
        // A stress override must not leak into the training scenario.
        let coefficients = Scenario::from_tag("formation", Some(9.0), None)
            .coefficients(&Calibration::default());

        assert_relative_eq!(coefficients.stress_multiplier, 0.0);
        assert_relative_eq!(coefficients.scenario_impact, 2.0);
    }
}
