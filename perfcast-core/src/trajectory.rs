//! The normalized output trajectory of a simulation run.

use crate::score;

/// One sampled point of a trajectory.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrajectoryPoint {
    /// Months elapsed since the start of the projection.
    pub month: u32,
    /// Predicted performance score, saturated and rounded.
    pub score: f64,
}

/// An ordered sequence of monthly performance samples.
///
/// A trajectory over a horizon of `H` months holds exactly `H + 1`
/// points at months `0, 1, ..., H`. Every score lies in `[0, 100]` and
/// is rounded to one decimal place for presentation. The whole sequence
/// is a pure function of the initial score, the model coefficients, and
/// the horizon.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    points: Vec<TrajectoryPoint>,
}

impl Trajectory {
    /// Normalizes raw solver samples into a trajectory.
    ///
    /// The samples are assumed to be ordered by time with one sample per
    /// month starting at month zero; months are assigned by position so
    /// the output grid is exact integers regardless of floating-point
    /// jitter in the solver's sample times. Each value is saturated into
    /// `[0, 100]` and rounded to one decimal place.
    #[must_use]
    pub fn normalized(raw_scores: &[f64]) -> Self {
        let points = raw_scores
            .iter()
            .enumerate()
            .map(|(index, &value)| TrajectoryPoint {
                month: index as u32,
                score: round_to_tenth(score::saturate(value)),
            })
            .collect();

        Self { points }
    }

    /// Returns the sampled points in month order.
    #[must_use]
    pub fn points(&self) -> &[TrajectoryPoint] {
        &self.points
    }

    /// Returns the month offsets as a parallel sequence.
    #[must_use]
    pub fn months(&self) -> Vec<u32> {
        self.points.iter().map(|point| point.month).collect()
    }

    /// Returns the scores as a parallel sequence.
    #[must_use]
    pub fn scores(&self) -> Vec<f64> {
        self.points.iter().map(|point| point.score).collect()
    }

    /// Returns the number of sampled points (horizon + 1).
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns whether the trajectory holds no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the score at the final sampled month, if any.
    #[must_use]
    pub fn final_score(&self) -> Option<f64> {
        self.points.last().map(|point| point.score)
    }
}

/// Rounds to one decimal place for presentation.
fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
