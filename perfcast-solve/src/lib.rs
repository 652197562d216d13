//! Numerical integration for Perfcast.
//!
//! The [`ivp`] module solves scalar initial value problems with an
//! adaptive embedded Runge-Kutta 5(4) method and dense output, so the
//! solution is sampled exactly at the requested grid regardless of the
//! internal step sizes the solver chooses.

pub mod ivp;
