//! Moody-diagram curve families.

use crate::error::FrictionResult;
use crate::factor::{RE_LAMINAR_MAX, RE_TURBULENT_MIN, laminar, swamee_jain};
use pf_core::numeric::logspace;

/// Relative roughness values traced on the diagram, smooth to very rough.
pub const RR_VALUES: [f64; 20] = [
    0.0, 1e-6, 5e-6, 1e-5, 5e-5, 1e-4, 2e-4, 4e-4, 6e-4, 8e-4, 1e-3, 2e-3, 4e-3, 6e-3, 8e-3,
    1.5e-2, 2e-2, 3e-2, 4e-2, 5e-2,
];

/// Reynolds-number extent of the rendered diagram.
pub const RE_MIN: f64 = 600.0;
pub const RE_MAX: f64 = 1e8;

/// Friction-factor extent of the rendered diagram.
pub const F_MIN: f64 = 0.008;
pub const F_MAX: f64 = 0.10;

const N_LAMINAR: usize = 20;
const N_TRANSITION: usize = 20;
const N_TURBULENT: usize = 100;

/// One (Re, f) polyline.
pub type Curve = Vec<[f64; 2]>;

/// A turbulent curve tagged with its relative roughness.
#[derive(Debug, Clone)]
pub struct RoughnessCurve {
    pub rel_roughness: f64,
    pub points: Curve,
}

/// The full set of Moody-diagram curves.
///
/// The laminar branch runs from Re = 600 to 2000; its extension across the
/// transition band (2000..4000) is conventionally drawn dashed. The turbulent
/// family covers 4000..1e8 for each roughness in [`RR_VALUES`].
#[derive(Debug, Clone)]
pub struct MoodyDiagram {
    pub laminar: Curve,
    pub transition: Curve,
    pub turbulent: Vec<RoughnessCurve>,
}

impl MoodyDiagram {
    /// Compute all curve families.
    pub fn build() -> FrictionResult<Self> {
        let re_laminar = logspace(RE_MIN.log10(), RE_LAMINAR_MAX.log10(), N_LAMINAR);
        let re_transition = logspace(RE_LAMINAR_MAX.log10(), RE_TURBULENT_MIN.log10(), N_TRANSITION);
        let re_turbulent = logspace(RE_TURBULENT_MIN.log10(), RE_MAX.log10(), N_TURBULENT);

        let laminar_curve = re_laminar
            .iter()
            .map(|&re| Ok([re, laminar(re)?]))
            .collect::<FrictionResult<Curve>>()?;

        let transition_curve = re_transition
            .iter()
            .map(|&re| Ok([re, laminar(re)?]))
            .collect::<FrictionResult<Curve>>()?;

        let mut turbulent = Vec::with_capacity(RR_VALUES.len());
        for &rr in &RR_VALUES {
            let points = re_turbulent
                .iter()
                .map(|&re| Ok([re, swamee_jain(re, rr)?]))
                .collect::<FrictionResult<Curve>>()?;
            turbulent.push(RoughnessCurve {
                rel_roughness: rr,
                points,
            });
        }

        Ok(Self {
            laminar: laminar_curve,
            transition: transition_curve,
            turbulent,
        })
    }
}
