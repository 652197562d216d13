//! Scalar initial value problems with adaptive Runge-Kutta 5(4).

mod config;
mod error;
mod solution;

pub use config::Config;
pub use error::Error;
pub use solution::{Sample, Solution};

use ode_solvers::{SVector, System};
use perfcast_core::PerformanceModel;

/// The right-hand side of a scalar ordinary differential equation.
///
/// Implementations must be pure: the returned rate may depend only on
/// `x` and `y`, never on hidden state, so a solve is deterministic for
/// a given model and configuration.
pub trait Rate {
    /// Evaluates `dy/dx` at the given point.
    fn rate(&self, x: f64, y: f64) -> f64;
}

impl Rate for PerformanceModel {
    fn rate(&self, x: f64, y: f64) -> f64 {
        self.rate(x, y)
    }
}

type State = SVector<f64, 1>;

/// Solves `dy/dx = model.rate(x, y)` over `[0, x_end]`.
///
/// The solver is the adaptive Dormand-Prince 5(4) embedded method. Its
/// internal steps are chosen by local error control within the
/// configured tolerances; the returned samples come from dense-output
/// interpolation at every `output_step`, including both endpoints, so
/// the sampling grid never depends on where the internal steps landed.
///
/// # Errors
///
/// Returns an [`Error`] if the configuration or interval is invalid,
/// if the initial state is non-finite, or if the stepper cannot
/// converge within its tolerance and step budget.
pub fn solve(model: &impl Rate, y0: f64, x_end: f64, config: &Config) -> Result<Solution, Error> {
    config
        .validate()
        .map_err(|reason| Error::InvalidConfig { reason })?;

    if !x_end.is_finite() || x_end <= 0.0 {
        return Err(Error::InvalidInterval { x_end });
    }
    if !y0.is_finite() {
        return Err(Error::NonFiniteInitialState { y: y0 });
    }

    let system = ScalarSystem { model };
    let mut stepper = ode_solvers::Dopri5::new(
        system,
        0.0,
        x_end,
        config.output_step,
        State::from([y0]),
        config.rel_tol,
        config.abs_tol,
    );

    let stats = stepper.integrate()?;

    let samples: Vec<Sample> = stepper
        .x_out()
        .iter()
        .zip(stepper.y_out())
        .map(|(&x, y)| Sample { x, y: y[0] })
        .collect();

    for sample in &samples {
        if !sample.y.is_finite() {
            return Err(Error::NonFiniteSample {
                x: sample.x,
                y: sample.y,
            });
        }
    }

    let expected = expected_samples(x_end, config.output_step);
    if samples.len() < expected {
        return Err(Error::IncompleteOutput {
            expected,
            actual: samples.len(),
        });
    }

    Ok(Solution {
        samples,
        evals: stats.num_eval,
        accepted_steps: stats.accepted_steps,
        rejected_steps: stats.rejected_steps,
    })
}

/// Number of dense-output samples for a complete solve, both endpoints
/// included.
fn expected_samples(x_end: f64, output_step: f64) -> usize {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let whole_steps = ((x_end / output_step) + 1e-9).floor() as usize;
    whole_steps + 1
}

/// Adapts a [`Rate`] model to the stepper's system interface.
struct ScalarSystem<'a, R: Rate> {
    model: &'a R,
}

impl<R: Rate> System<f64, State> for ScalarSystem<'_, R> {
    fn system(&self, x: f64, y: &State, dy: &mut State) {
        dy[0] = self.model.rate(x, y[0]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use perfcast_core::{Calibration, Scenario};

    /// dy/dx = slope, so y(x) = y0 + slope * x.
    struct Linear {
        slope: f64,
    }

    impl Rate for Linear {
        fn rate(&self, _x: f64, _y: f64) -> f64 {
            self.slope
        }
    }

    /// dy/dx = -y, so y(x) = y0 * exp(-x).
    struct Decay;

    impl Rate for Decay {
        fn rate(&self, _x: f64, y: f64) -> f64 {
            -y
        }
    }

    #[test]
    fn samples_land_exactly_on_the_output_grid() {
        let solution = solve(&Linear { slope: 2.0 }, 4.0, 6.0, &Config::default()).unwrap();

        assert_eq!(solution.samples.len(), 7);
        for (index, sample) in solution.samples.iter().enumerate() {
            assert_relative_eq!(sample.x, index as f64, epsilon = 1e-9);
            assert_relative_eq!(sample.y, 4.0 + 2.0 * sample.x, epsilon = 1e-6);
        }
    }

    #[test]
    fn matches_the_exponential_solution() {
        let solution = solve(&Decay, 1.0, 5.0, &Config::default()).unwrap();

        for sample in &solution.samples {
            assert_relative_eq!(sample.y, (-sample.x).exp(), epsilon = 1e-3);
        }
    }

    #[test]
    fn performance_model_stays_finite_over_the_horizon() {
        let model = PerformanceModel::new(Scenario::Standard.coefficients(&Calibration::default()));

        let solution = solve(&model, 70.0, 6.0, &Config::default()).unwrap();

        assert_eq!(solution.samples.len(), 7);
        assert_relative_eq!(solution.samples[0].y, 70.0, epsilon = 1e-9);
        assert!(solution.samples.iter().all(|sample| sample.y.is_finite()));
    }

    #[test]
    fn identical_inputs_produce_identical_solutions() {
        let model = PerformanceModel::new(
            Scenario::Formation { impact: None }.coefficients(&Calibration::default()),
        );

        let first = solve(&model, 70.0, 6.0, &Config::default()).unwrap();
        let second = solve(&model, 70.0, 6.0, &Config::default()).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn errors_on_invalid_config() {
        let config = Config {
            abs_tol: -1.0,
            ..Config::default()
        };

        let result = solve(&Decay, 1.0, 5.0, &config);
        assert!(matches!(result, Err(Error::InvalidConfig { .. })));
    }

    #[test]
    fn errors_on_empty_interval() {
        let result = solve(&Decay, 1.0, 0.0, &Config::default());
        assert!(matches!(result, Err(Error::InvalidInterval { .. })));

        let result = solve(&Decay, 1.0, -3.0, &Config::default());
        assert!(matches!(result, Err(Error::InvalidInterval { .. })));
    }

    #[test]
    fn errors_on_non_finite_initial_state() {
        let result = solve(&Decay, f64::NAN, 5.0, &Config::default());
        assert!(matches!(result, Err(Error::NonFiniteInitialState { .. })));
    }

    #[test]
    fn expected_samples_counts_both_endpoints() {
        assert_eq!(expected_samples(6.0, 1.0), 7);
        assert_eq!(expected_samples(1.0, 1.0), 2);
        assert_eq!(expected_samples(2.5, 1.0), 3);
    }
}
