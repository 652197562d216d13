//! Core performance dynamics for Perfcast.
//!
//! This crate holds everything that is a pure function of its inputs:
//! the bounded performance score, the calibration constants, the mapping
//! from named scenarios to model coefficients, the differential model
//! itself, and the normalized output trajectory.
//!
//! Numerical integration lives in `perfcast-solve`; collaborator access
//! and orchestration live in `perfcast-engine`.

mod calibration;
mod model;
mod scenario;
pub mod score;
mod trajectory;

pub use calibration::Calibration;
pub use model::PerformanceModel;
pub use scenario::{Coefficients, Scenario};
pub use score::{Score, ScoreError};
pub use trajectory::{Trajectory, TrajectoryPoint};
