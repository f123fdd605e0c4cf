//! Simulation runner with sample-time reporting.

use crate::error::{SimError, SimResult};
use crate::integrator::{Dopri45, Integrator, Rk4};
use crate::model::TransientModel;

/// Integrator selection for simulation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum IntegratorType {
    /// Adaptive Dormand-Prince 5(4) (default).
    #[default]
    Dopri45,
    /// Fixed-step 4th-order Runge-Kutta.
    Rk4,
}

/// Options for simulation runs.
#[derive(Clone, Debug)]
pub struct SimOptions {
    /// Final simulation time (seconds)
    pub t_end: f64,
    /// Initial step for the adaptive integrator; fixed step for RK4 (seconds)
    pub dt: f64,
    /// Relative error tolerance per step
    pub rel_tol: f64,
    /// Absolute error tolerance per step
    pub abs_tol: f64,
    /// Smallest step the adaptive controller may take before giving up
    pub h_min: f64,
    /// Maximum number of steps, accepted or rejected (safety limit)
    pub max_steps: usize,
    /// Integrator type (default: Dopri45)
    pub integrator: IntegratorType,
}

impl Default for SimOptions {
    fn default() -> Self {
        Self {
            t_end: 1.0,
            dt: 1e-3,
            rel_tol: 1e-3,
            abs_tol: 1e-6,
            h_min: 1e-12,
            max_steps: 100_000,
            integrator: IntegratorType::default(),
        }
    }
}

/// Record of simulation results at the requested sample times.
#[derive(Clone, Debug)]
pub struct SimRecord<S> {
    /// Time points (seconds)
    pub t: Vec<f64>,
    /// State snapshots
    pub x: Vec<S>,
}

fn validate(opts: &SimOptions, sample_times: &[f64]) -> SimResult<()> {
    if opts.dt <= 0.0 {
        return Err(SimError::InvalidArg {
            what: "dt must be positive",
        });
    }
    if opts.t_end < 0.0 {
        return Err(SimError::InvalidArg {
            what: "t_end must be non-negative",
        });
    }
    if opts.max_steps == 0 {
        return Err(SimError::InvalidArg {
            what: "max_steps must be positive",
        });
    }
    if opts.rel_tol <= 0.0 || opts.abs_tol <= 0.0 {
        return Err(SimError::InvalidArg {
            what: "tolerances must be positive",
        });
    }
    if sample_times.is_empty() {
        return Err(SimError::InvalidArg {
            what: "sample_times must be non-empty",
        });
    }
    if sample_times.windows(2).any(|w| w[1] < w[0]) {
        return Err(SimError::InvalidArg {
            what: "sample_times must be non-decreasing",
        });
    }
    if sample_times[0] < 0.0 || *sample_times.last().unwrap() > opts.t_end {
        return Err(SimError::InvalidArg {
            what: "sample_times must lie within [0, t_end]",
        });
    }
    Ok(())
}

/// Run a transient simulation, reporting the state at each sample time.
///
/// The integrator advances adaptively between sample times; steps are clamped
/// so the state lands exactly on each requested time. A step rejected below
/// `h_min`, or a run exceeding `max_steps`, is a convergence failure and is
/// returned as such with no partial record.
pub fn run_sim<M: TransientModel>(
    model: &mut M,
    opts: &SimOptions,
    sample_times: &[f64],
) -> SimResult<SimRecord<M::State>> {
    validate(opts, sample_times)?;

    let mut t = 0.0;
    let mut x = model.initial_state();
    let mut h = opts.dt;
    let mut steps = 0usize;

    let mut t_record = Vec::with_capacity(sample_times.len());
    let mut x_record = Vec::with_capacity(sample_times.len());

    for &target in sample_times {
        while t < target {
            if steps >= opts.max_steps {
                return Err(SimError::ConvergenceFailed {
                    what: "max step count exceeded",
                });
            }
            steps += 1;

            let clamped = h >= target - t;
            let h_try = if clamped { target - t } else { h };

            match opts.integrator {
                IntegratorType::Rk4 => {
                    x = Rk4.step(model, t, &x, h_try)?;
                    t = if clamped { target } else { t + h_try };
                }
                IntegratorType::Dopri45 => {
                    let (y5, err) = Dopri45.try_step(model, t, &x, h_try)?;
                    let err_norm = model.error_norm(&err, &x, &y5, opts.rel_tol, opts.abs_tol);

                    if err_norm <= 1.0 {
                        t = if clamped { target } else { t + h_try };
                        x = y5;
                        let factor = if err_norm > 0.0 {
                            (0.9 * err_norm.powf(-0.2)).clamp(0.2, 5.0)
                        } else {
                            5.0
                        };
                        h = (h_try * factor).max(opts.h_min);
                    } else {
                        let factor = (0.9 * err_norm.powf(-0.2)).clamp(0.2, 5.0);
                        h = h_try * factor;
                        tracing::debug!(t, h, err_norm, "step rejected");
                        if h < opts.h_min {
                            return Err(SimError::ConvergenceFailed {
                                what: "step size underflow",
                            });
                        }
                    }
                }
            }
        }

        t_record.push(target);
        x_record.push(x.clone());
    }

    tracing::debug!(steps, samples = sample_times.len(), "transient run complete");

    Ok(SimRecord {
        t: t_record,
        x: x_record,
    })
}
