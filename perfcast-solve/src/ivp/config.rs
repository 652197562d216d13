/// Configuration for the initial value problem solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    /// Absolute local error tolerance for adaptive step control.
    pub abs_tol: f64,
    /// Relative local error tolerance for adaptive step control.
    pub rel_tol: f64,
    /// Spacing of the dense-output sampling grid.
    pub output_step: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            abs_tol: 1e-6,
            rel_tol: 1e-3,
            output_step: 1.0,
        }
    }
}

impl Config {
    /// Validates that tolerances and the output step are usable.
    ///
    /// # Errors
    ///
    /// Returns a reason if any value is non-finite or not strictly
    /// positive.
    pub fn validate(&self) -> Result<(), &'static str> {
        if !self.abs_tol.is_finite() || self.abs_tol <= 0.0 {
            return Err("abs_tol must be finite and positive");
        }
        if !self.rel_tol.is_finite() || self.rel_tol <= 0.0 {
            return Err("rel_tol must be finite and positive");
        }
        if !self.output_step.is_finite() || self.output_step <= 0.0 {
            return Err("output_step must be finite and positive");
        }
        Ok(())
    }
}
