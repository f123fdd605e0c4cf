//! Spool-valve-driven hydraulic piston model.

use crate::error::{SimError, SimResult};
use crate::model::TransientModel;
use crate::sim::{SimOptions, SimRecord, run_sim};
use pf_core::numeric::{ensure_finite, linspace};

/// Default simulation window; the piston dynamics settle within 20 ms.
pub const DEFAULT_T_END: f64 = 0.02;

/// Default number of reported sample times.
pub const DEFAULT_SAMPLES: usize = 200;

/// Physical constants for one spool-valve/piston run, SI units throughout.
///
/// Values are taken at face value: a zero mass or chamber volume surfaces as
/// a non-finite derivative error during integration rather than being
/// rejected up front.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SpoolValveParams {
    /// Piston face area (m²)
    pub area: f64,
    /// Discharge coefficient. Carried with the parameter set but not used by
    /// the derivative computation.
    pub cd: f64,
    /// Supply pressure (Pa)
    pub p_supply: f64,
    /// Ambient/return pressure (Pa)
    pub p_ambient: f64,
    /// Chamber volume (m³)
    pub volume: f64,
    /// Fluid bulk modulus (Pa)
    pub bulk_modulus: f64,
    /// Fluid density (kg/m³)
    pub density: f64,
    /// Valve flow-gain coefficient
    pub k_valve: f64,
    /// Piston mass (kg)
    pub mass: f64,
    /// Valve command / opening fraction, sensibly in [0, 1]
    pub command: f64,
}

impl Default for SpoolValveParams {
    fn default() -> Self {
        Self {
            area: 4.909e-4,
            cd: 0.6,
            p_supply: 1.4e7,
            p_ambient: 1.0e5,
            volume: 1.473e-4,
            bulk_modulus: 2.0e9,
            density: 850.0,
            k_valve: 2.0e-5,
            mass: 30.0,
            command: 0.002,
        }
    }
}

/// Piston state: position, velocity and the two chamber pressures.
#[derive(Clone, Debug, PartialEq)]
pub struct PistonState {
    /// Piston position (m)
    pub position: f64,
    /// Piston velocity (m/s)
    pub velocity: f64,
    /// Pressure on the head side (right face) (Pa)
    pub p_head: f64,
    /// Pressure on the rod side (left face) (Pa)
    pub p_rod: f64,
}

/// Transient model of a hydraulic piston metered by a spool valve.
#[derive(Clone, Debug)]
pub struct SpoolValveModel {
    pub params: SpoolValveParams,
}

impl SpoolValveModel {
    pub fn new(params: SpoolValveParams) -> Self {
        Self { params }
    }
}

fn check_finite(value: f64, what: &'static str) -> SimResult<f64> {
    ensure_finite(value, what).map_err(|_| SimError::NonPhysical { what })
}

impl TransientModel for SpoolValveModel {
    type State = PistonState;

    fn initial_state(&self) -> PistonState {
        PistonState {
            position: 0.0,
            velocity: 0.0,
            p_head: self.params.p_ambient,
            p_rod: self.params.p_ambient,
        }
    }

    fn rhs(&mut self, _t: f64, x: &PistonState) -> SimResult<PistonState> {
        let p = &self.params;

        let accel = (x.p_head - x.p_rod) * p.area / p.mass;
        let mut dp_head = (p.command * p.k_valve * (p.p_supply - x.p_head)
            - p.density * p.area * x.velocity)
            * (p.bulk_modulus / (p.volume * p.density));
        let mut dp_rod = (-p.command * p.k_valve * (x.p_rod - p.p_ambient)
            + p.density * p.area * x.velocity)
            * (p.bulk_modulus / (p.density * p.volume));

        // Chamber pressure cannot fall below vacuum: a pressure at or below
        // zero has its derivative zeroed for this evaluation only. The
        // acceleration still sees the raw state; the guard keeps the
        // integrator from driving an exhausted chamber further negative.
        if x.p_head <= 0.0 {
            dp_head = 0.0;
        }
        if x.p_rod <= 0.0 {
            dp_rod = 0.0;
        }

        check_finite(accel, "piston acceleration")?;
        check_finite(dp_head, "head-side pressure derivative")?;
        check_finite(dp_rod, "rod-side pressure derivative")?;

        Ok(PistonState {
            position: x.velocity,
            velocity: accel,
            p_head: dp_head,
            p_rod: dp_rod,
        })
    }

    fn add(&self, a: &PistonState, b: &PistonState) -> PistonState {
        PistonState {
            position: a.position + b.position,
            velocity: a.velocity + b.velocity,
            p_head: a.p_head + b.p_head,
            p_rod: a.p_rod + b.p_rod,
        }
    }

    fn scale(&self, a: &PistonState, scale: f64) -> PistonState {
        PistonState {
            position: a.position * scale,
            velocity: a.velocity * scale,
            p_head: a.p_head * scale,
            p_rod: a.p_rod * scale,
        }
    }

    fn error_norm(
        &self,
        err: &PistonState,
        y: &PistonState,
        y_new: &PistonState,
        rel_tol: f64,
        abs_tol: f64,
    ) -> f64 {
        let components = [
            (err.position, y.position, y_new.position),
            (err.velocity, y.velocity, y_new.velocity),
            (err.p_head, y.p_head, y_new.p_head),
            (err.p_rod, y.p_rod, y_new.p_rod),
        ];
        let sum: f64 = components
            .iter()
            .map(|&(e, a, b)| {
                let scale = abs_tol + rel_tol * a.abs().max(b.abs());
                (e / scale).powi(2)
            })
            .sum();
        (sum / components.len() as f64).sqrt()
    }
}

/// Sampled piston trajectory: four parallel series aligned to `t`.
#[derive(Clone, Debug)]
pub struct PistonTrajectory {
    pub t: Vec<f64>,
    pub position: Vec<f64>,
    pub velocity: Vec<f64>,
    pub p_head: Vec<f64>,
    pub p_rod: Vec<f64>,
}

impl PistonTrajectory {
    fn from_record(record: SimRecord<PistonState>) -> Self {
        let n = record.t.len();
        let mut out = Self {
            t: record.t,
            position: Vec::with_capacity(n),
            velocity: Vec::with_capacity(n),
            p_head: Vec::with_capacity(n),
            p_rod: Vec::with_capacity(n),
        };
        for s in record.x {
            out.position.push(s.position);
            out.velocity.push(s.velocity);
            out.p_head.push(s.p_head);
            out.p_rod.push(s.p_rod);
        }
        out
    }

    pub fn len(&self) -> usize {
        self.t.len()
    }

    pub fn is_empty(&self) -> bool {
        self.t.is_empty()
    }
}

/// Integrate the piston model over [0, opts.t_end], reporting `samples`
/// evenly spaced times.
pub fn simulate(
    params: SpoolValveParams,
    opts: &SimOptions,
    samples: usize,
) -> SimResult<PistonTrajectory> {
    let sample_times = linspace(0.0, opts.t_end, samples);
    let mut model = SpoolValveModel::new(params);
    let record = run_sim(&mut model, opts, &sample_times)?;
    Ok(PistonTrajectory::from_record(record))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(position: f64, velocity: f64, p_head: f64, p_rod: f64) -> PistonState {
        PistonState {
            position,
            velocity,
            p_head,
            p_rod,
        }
    }

    #[test]
    fn symmetric_pressures_give_zero_acceleration() {
        let mut model = SpoolValveModel::new(SpoolValveParams::default());
        let pa = model.params.p_ambient;
        let dx = model.rhs(0.0, &state(0.0, 0.0, pa, pa)).unwrap();
        assert_eq!(dx.velocity, 0.0);
    }

    #[test]
    fn negative_head_pressure_clamps_its_derivative() {
        let mut model = SpoolValveModel::new(SpoolValveParams::default());
        let dx = model.rhs(0.0, &state(0.0, 3.0, -500.0, 2.0e5)).unwrap();
        assert_eq!(dx.p_head, 0.0);
        // Rod side is unaffected by the head-side clamp
        assert_ne!(dx.p_rod, 0.0);
    }

    #[test]
    fn negative_rod_pressure_clamps_its_derivative() {
        let mut model = SpoolValveModel::new(SpoolValveParams::default());
        let dx = model.rhs(0.0, &state(0.0, -1.0, 2.0e5, -1.0)).unwrap();
        assert_eq!(dx.p_rod, 0.0);
        assert_ne!(dx.p_head, 0.0);
    }

    #[test]
    fn all_zero_state_clamps_both_pressure_derivatives() {
        // The unclamped formulas would give nonzero derivatives from the
        // command*k_valve terms; the guard zeroes both at the vacuum boundary.
        let mut model = SpoolValveModel::new(SpoolValveParams::default());
        let dx = model.rhs(0.0, &state(0.0, 0.0, 0.0, 0.0)).unwrap();
        assert_eq!(dx.p_head, 0.0);
        assert_eq!(dx.p_rod, 0.0);
        assert_eq!(dx.position, 0.0);
        assert_eq!(dx.velocity, 0.0);
    }

    #[test]
    fn acceleration_sees_raw_negative_pressure() {
        // The clamp zeroes a pressure derivative, not the force balance.
        let mut model = SpoolValveModel::new(SpoolValveParams::default());
        let p = model.params.clone();
        let dx = model.rhs(0.0, &state(0.0, 0.0, -1000.0, 0.0)).unwrap();
        assert_eq!(dx.velocity, -1000.0 * p.area / p.mass);
    }

    #[test]
    fn rhs_is_pure() {
        let mut model = SpoolValveModel::new(SpoolValveParams::default());
        let x = state(1e-3, 0.4, 8.0e6, 3.0e6);
        let a = model.rhs(0.0, &x).unwrap();
        let b = model.rhs(0.0, &x).unwrap();
        assert_eq!(a.position.to_bits(), b.position.to_bits());
        assert_eq!(a.velocity.to_bits(), b.velocity.to_bits());
        assert_eq!(a.p_head.to_bits(), b.p_head.to_bits());
        assert_eq!(a.p_rod.to_bits(), b.p_rod.to_bits());
    }

    #[test]
    fn time_argument_is_ignored() {
        let mut model = SpoolValveModel::new(SpoolValveParams::default());
        let x = state(1e-3, 0.4, 8.0e6, 3.0e6);
        let a = model.rhs(0.0, &x).unwrap();
        let b = model.rhs(17.3, &x).unwrap();
        assert_eq!(a.p_head.to_bits(), b.p_head.to_bits());
    }

    #[test]
    fn zero_mass_is_nonphysical() {
        let params = SpoolValveParams {
            mass: 0.0,
            ..Default::default()
        };
        let mut model = SpoolValveModel::new(params);
        let err = model.rhs(0.0, &state(0.0, 0.0, 2.0e5, 1.0e5)).unwrap_err();
        assert!(matches!(err, SimError::NonPhysical { .. }));
    }

    #[test]
    fn initial_state_at_ambient() {
        let model = SpoolValveModel::new(SpoolValveParams::default());
        let x0 = model.initial_state();
        assert_eq!(x0.position, 0.0);
        assert_eq!(x0.velocity, 0.0);
        assert_eq!(x0.p_head, model.params.p_ambient);
        assert_eq!(x0.p_rod, model.params.p_ambient);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn clamp_holds_for_any_negative_pressure(
            p_neg in -1.0e8_f64..0.0,
            velocity in -10.0_f64..10.0,
            p_other in 0.0_f64..2.0e7,
        ) {
            let mut model = SpoolValveModel::new(SpoolValveParams::default());
            let x = PistonState {
                position: 0.0,
                velocity,
                p_head: p_neg,
                p_rod: p_other,
            };
            let dx = model.rhs(0.0, &x).unwrap();
            prop_assert_eq!(dx.p_head, 0.0);
        }
    }
}
