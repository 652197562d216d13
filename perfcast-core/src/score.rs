//! The bounded performance score and its shared saturation policy.

use std::fmt;

use thiserror::Error;

/// A performance score constrained to the closed interval `[0, 100]`.
///
/// Externally-sourced values (evaluation records, overrides) are brought
/// into range through [`Score::clamping`] before they enter the model, so
/// downstream code can rely on the bound without re-checking it.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Score(f64);

/// Error returned when constructing a [`Score`] from an invalid value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ScoreError {
    #[error("score is not a number")]
    NotANumber,
    #[error("score is below {}", Score::MIN)]
    BelowMinimum,
    #[error("score is above {}", Score::MAX)]
    AboveMaximum,
}

impl Score {
    /// Lower bound of the performance scale.
    pub const MIN: f64 = 0.0;

    /// Upper bound of the performance scale.
    pub const MAX: f64 = 100.0;

    /// Constructs a `Score`, rejecting values outside `[0, 100]`.
    ///
    /// # Errors
    ///
    /// Returns [`ScoreError::NotANumber`] for NaN,
    /// [`ScoreError::BelowMinimum`] below zero, and
    /// [`ScoreError::AboveMaximum`] above one hundred.
    pub fn new(value: f64) -> Result<Self, ScoreError> {
        if value.is_nan() {
            return Err(ScoreError::NotANumber);
        }
        if value < Self::MIN {
            return Err(ScoreError::BelowMinimum);
        }
        if value > Self::MAX {
            return Err(ScoreError::AboveMaximum);
        }
        Ok(Self(value))
    }

    /// Constructs a `Score` by saturating the value into `[0, 100]`.
    ///
    /// NaN maps to the lower bound so a corrupt upstream value cannot
    /// propagate through the integration.
    #[must_use]
    pub fn clamping(value: f64) -> Self {
        Self(saturate(value))
    }

    /// Returns the inner value.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}

impl From<Score> for f64 {
    fn from(score: Score) -> Self {
        score.value()
    }
}

/// Saturates a raw value into the performance interval `[0, 100]`.
///
/// This is the one saturation policy shared by the differential model,
/// the initial-state resolver, and the trajectory normalizer, so the
/// bound is enforced identically everywhere regardless of how the solver
/// chooses its internal steps.
#[must_use]
pub fn saturate(value: f64) -> f64 {
    if value.is_nan() {
        return Score::MIN;
    }
    value.clamp(Score::MIN, Score::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn accepts_values_in_range() {
        assert_relative_eq!(Score::new(0.0).unwrap().value(), 0.0);
        assert_relative_eq!(Score::new(70.0).unwrap().value(), 70.0);
        assert_relative_eq!(Score::new(100.0).unwrap().value(), 100.0);
    }

    #[test]
    fn rejects_values_out_of_range() {
        assert_eq!(Score::new(-0.1), Err(ScoreError::BelowMinimum));
        assert_eq!(Score::new(100.1), Err(ScoreError::AboveMaximum));
        assert_eq!(Score::new(f64::NAN), Err(ScoreError::NotANumber));
    }

    #[test]
    fn clamping_saturates_into_range() {
        assert_relative_eq!(Score::clamping(-12.0).value(), 0.0);
        assert_relative_eq!(Score::clamping(42.0).value(), 42.0);
        assert_relative_eq!(Score::clamping(250.0).value(), 100.0);
    }

    #[test]
    fn clamping_maps_nan_to_lower_bound() {
        assert_relative_eq!(Score::clamping(f64::NAN).value(), 0.0);
    }

    #[test]
    fn saturate_is_identity_inside_the_interval() {
        assert_relative_eq!(saturate(0.0), 0.0);
        assert_relative_eq!(saturate(55.5), 55.5);
        assert_relative_eq!(saturate(100.0), 100.0);
    }
}
