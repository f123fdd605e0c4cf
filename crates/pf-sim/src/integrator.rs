//! Time integrators: fixed-step RK4 and the embedded Dormand-Prince 5(4) pair.

use crate::error::SimResult;
use crate::model::TransientModel;

/// Trait for fixed-step time integrators.
pub trait Integrator {
    /// Advance state by one time step using the transient model.
    fn step<M: TransientModel>(
        &self,
        model: &mut M,
        t: f64,
        x: &M::State,
        dt: f64,
    ) -> SimResult<M::State>;
}

/// Classical RK4 (Runge-Kutta 4th order) integrator.
#[derive(Clone, Debug)]
pub struct Rk4;

impl Integrator for Rk4 {
    fn step<M: TransientModel>(
        &self,
        model: &mut M,
        t: f64,
        x: &M::State,
        dt: f64,
    ) -> SimResult<M::State> {
        let k1 = model.rhs(t, x)?;

        let x2 = model.add(x, &model.scale(&k1, 0.5 * dt));
        let k2 = model.rhs(t + 0.5 * dt, &x2)?;

        let x3 = model.add(x, &model.scale(&k2, 0.5 * dt));
        let k3 = model.rhs(t + 0.5 * dt, &x3)?;

        let x4 = model.add(x, &model.scale(&k3, dt));
        let k4 = model.rhs(t + dt, &x4)?;

        // Combine: x_new = x + (dt/6) * (k1 + 2*k2 + 2*k3 + k4)
        let k_sum = model.add(
            &model.add(&k1, &model.scale(&k2, 2.0)),
            &model.add(&model.scale(&k3, 2.0), &k4),
        );

        Ok(model.add(x, &model.scale(&k_sum, dt / 6.0)))
    }
}

// Dormand-Prince 5(4) Butcher tableau.
const C: [f64; 7] = [0.0, 1.0 / 5.0, 3.0 / 10.0, 4.0 / 5.0, 8.0 / 9.0, 1.0, 1.0];

const A2: [f64; 1] = [1.0 / 5.0];
const A3: [f64; 2] = [3.0 / 40.0, 9.0 / 40.0];
const A4: [f64; 3] = [44.0 / 45.0, -56.0 / 15.0, 32.0 / 9.0];
const A5: [f64; 4] = [
    19372.0 / 6561.0,
    -25360.0 / 2187.0,
    64448.0 / 6561.0,
    -212.0 / 729.0,
];
const A6: [f64; 5] = [
    9017.0 / 3168.0,
    -355.0 / 33.0,
    46732.0 / 5247.0,
    49.0 / 176.0,
    -5103.0 / 18656.0,
];
const A7: [f64; 6] = [
    35.0 / 384.0,
    0.0,
    500.0 / 1113.0,
    125.0 / 192.0,
    -2187.0 / 6784.0,
    11.0 / 84.0,
];

/// 5th-order solution weights (identical to the last A row).
const B5: [f64; 7] = [
    35.0 / 384.0,
    0.0,
    500.0 / 1113.0,
    125.0 / 192.0,
    -2187.0 / 6784.0,
    11.0 / 84.0,
    0.0,
];

/// Embedded 4th-order weights used for the error estimate.
const B4: [f64; 7] = [
    5179.0 / 57600.0,
    0.0,
    7571.0 / 16695.0,
    393.0 / 640.0,
    -92097.0 / 339200.0,
    187.0 / 2100.0,
    1.0 / 40.0,
];

/// Dormand-Prince 5(4) embedded pair for adaptive stepping.
///
/// A single trial step produces the 5th-order solution together with the
/// difference against the embedded 4th-order solution; the driver decides
/// acceptance and step-size from that difference.
#[derive(Clone, Debug)]
pub struct Dopri45;

impl Dopri45 {
    /// Attempt one step of size h; returns (y5, y5 - y4).
    pub fn try_step<M: TransientModel>(
        &self,
        model: &mut M,
        t: f64,
        x: &M::State,
        h: f64,
    ) -> SimResult<(M::State, M::State)> {
        let mut k: Vec<M::State> = Vec::with_capacity(7);

        k.push(model.rhs(t, x)?);
        for (i, row) in [
            &A2[..], &A3[..], &A4[..], &A5[..], &A6[..], &A7[..],
        ]
        .iter()
        .enumerate()
        {
            let mut xi = x.clone();
            for (j, &a) in row.iter().enumerate() {
                if a != 0.0 {
                    xi = model.add(&xi, &model.scale(&k[j], h * a));
                }
            }
            k.push(model.rhs(t + C[i + 1] * h, &xi)?);
        }

        let mut y5 = x.clone();
        for (i, &b) in B5.iter().enumerate() {
            if b != 0.0 {
                y5 = model.add(&y5, &model.scale(&k[i], h * b));
            }
        }

        let mut y4 = x.clone();
        for (i, &b) in B4.iter().enumerate() {
            if b != 0.0 {
                y4 = model.add(&y4, &model.scale(&k[i], h * b));
            }
        }

        let err = model.add(&y5, &model.scale(&y4, -1.0));
        Ok((y5, err))
    }
}
