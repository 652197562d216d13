//! The differential model of performance dynamics.

use crate::{Coefficients, score};

/// Computes the instantaneous rate of change of a performance score.
///
/// The model combines a growth term that weakens as the score approaches
/// the ceiling, a decay term that strengthens with the score and with
/// stress, and a direct scenario impact:
///
/// ```text
/// dP/dt = base_growth * (100 - P) / 50
///       - base_decay * (1 + stress_multiplier) * P / 50
///       + scenario_impact
/// ```
///
/// The model is time-invariant and deterministic: the rate depends only
/// on the coefficients and the current score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerformanceModel {
    coefficients: Coefficients,
}

impl PerformanceModel {
    /// Creates a model from a derived coefficient set.
    #[must_use]
    pub fn new(coefficients: Coefficients) -> Self {
        Self { coefficients }
    }

    /// Returns the coefficient set the model was built with.
    #[must_use]
    pub fn coefficients(&self) -> Coefficients {
        self.coefficients
    }

    /// Evaluates `dP/dt` at time `t` for the given performance value.
    ///
    /// The time argument is unused because the model is time-invariant,
    /// but it is part of the signature because the solver evaluates the
    /// right-hand side at arbitrary times. The performance value is
    /// saturated into `[0, 100]` for this evaluation only; the solver's
    /// state vector is left untouched. At the bounds the rate is forced
    /// to zero so the model never prescribes growth past the ceiling or
    /// decline below the floor.
    #[must_use]
    pub fn rate(&self, _t: f64, performance: f64) -> f64 {
        let Coefficients {
            base_growth,
            base_decay,
            scenario_impact,
            stress_multiplier,
        } = self.coefficients;

        let p = score::saturate(performance);

        // The factor 50 scales both terms to the monthly time unit.
        let growth_term = base_growth * (score::Score::MAX - p) / 50.0;
        let decay_term = base_decay * (1.0 + stress_multiplier) * p / 50.0;
        let rate = growth_term - decay_term + scenario_impact;

        if p >= score::Score::MAX && rate > 0.0 {
            return 0.0;
        }
        if p <= score::Score::MIN && rate < 0.0 {
            return 0.0;
        }

        rate
    }
}
