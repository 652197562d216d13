/// One dense-output sample of the solution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// The independent variable (months, in this domain).
    pub x: f64,
    /// The solution value at `x`.
    pub y: f64,
}

/// The result of a successful initial value problem solve.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// Dense-output samples, ordered by `x`, one per output step from
    /// zero through the end of the interval.
    pub samples: Vec<Sample>,
    /// Number of right-hand-side evaluations performed.
    pub evals: u32,
    /// Internal steps accepted by the adaptive controller.
    pub accepted_steps: u32,
    /// Internal steps rejected by the adaptive controller.
    pub rejected_steps: u32,
}

impl Solution {
    /// Returns the sample positions as a parallel sequence.
    #[must_use]
    pub fn times(&self) -> Vec<f64> {
        self.samples.iter().map(|sample| sample.x).collect()
    }

    /// Returns the sample values as a parallel sequence.
    #[must_use]
    pub fn values(&self) -> Vec<f64> {
        self.samples.iter().map(|sample| sample.y).collect()
    }
}
