//! TransientModel trait for pluggable dynamic systems.

use crate::error::SimResult;

/// Trait for transient (dynamic) system models.
///
/// A TransientModel must implement:
/// - State type (Clone, for snapshots)
/// - Initial state
/// - RHS (right-hand side) computation: x_dot = f(t, x)
/// - Scalar field arithmetic for integration: add states, scale by scalar
/// - A scaled error norm for adaptive step control
pub trait TransientModel {
    /// State type (must be Clone).
    type State: Clone;

    /// Return the initial state at t=0.
    fn initial_state(&self) -> Self::State;

    /// Compute state derivative dxdt = f(t, x).
    ///
    /// The time argument exists for integrator compatibility; autonomous
    /// systems are free to ignore it.
    ///
    /// Note: Takes &mut self to allow models to cache previous solutions.
    fn rhs(&mut self, t: f64, x: &Self::State) -> SimResult<Self::State>;

    /// Add two states element-wise: result = a + b.
    fn add(&self, a: &Self::State, b: &Self::State) -> Self::State;

    /// Scale a state by a scalar: result = scale * a.
    fn scale(&self, a: &Self::State, scale: f64) -> Self::State;

    /// Scaled RMS norm of an error state against a step's endpoints.
    ///
    /// Each component i is weighted by abs_tol + rel_tol * max(|y_i|, |y_new_i|);
    /// the embedded pair accepts a step when this norm is <= 1.
    fn error_norm(
        &self,
        err: &Self::State,
        y: &Self::State,
        y_new: &Self::State,
        rel_tol: f64,
        abs_tol: f64,
    ) -> f64;
}
