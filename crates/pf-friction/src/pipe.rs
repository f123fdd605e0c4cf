//! Operating conditions for flow through a circular pipe.

use crate::error::{FrictionError, FrictionResult};
use pf_core::units::{KinVisc, Length, VolumeRate, constants};

/// Ensure a value is finite, returning FrictionError if not.
fn check_finite(value: f64, what: &'static str) -> FrictionResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(FrictionError::NonPhysical { what })
    }
}

/// Flow of a single fluid through a circular pipe.
///
/// Holds the geometry and volumetric flow and derives the dimensionless
/// quantities the friction correlations need.
#[derive(Debug, Clone)]
pub struct PipeFlow {
    /// Pipe inner diameter
    pub diameter: Length,
    /// Surface roughness (absolute)
    pub roughness: Length,
    /// Volumetric flow rate
    pub flow: VolumeRate,
    /// Kinematic viscosity of the working fluid
    pub nu: KinVisc,
}

impl PipeFlow {
    /// Create a new pipe flow.
    pub fn new(diameter: Length, roughness: Length, flow: VolumeRate, nu: KinVisc) -> Self {
        Self {
            diameter,
            roughness,
            flow,
            nu,
        }
    }

    /// Flow cross-section area (m²).
    pub fn area(&self) -> f64 {
        std::f64::consts::PI * self.diameter.value.powi(2) / 4.0
    }

    /// Mean velocity (m/s).
    pub fn velocity(&self) -> FrictionResult<f64> {
        let area = self.area();
        let v = self.flow.value / area;
        check_finite(v, "velocity")?;
        Ok(v)
    }

    /// Reynolds number, Re = V·D/ν.
    pub fn reynolds(&self) -> FrictionResult<f64> {
        let re = self.velocity()? * self.diameter.value / self.nu.value;
        check_finite(re, "Reynolds number")?;
        Ok(re)
    }

    /// Relative roughness, ε/D.
    pub fn rel_roughness(&self) -> FrictionResult<f64> {
        let rr = self.roughness.value / self.diameter.value;
        check_finite(rr, "relative roughness")?;
        Ok(rr)
    }

    /// Head loss per unit pipe length via Darcy-Weisbach, hf/L = f·V²/(2·g·D).
    ///
    /// Dimensionless (m/m), so the value reads the same in ft/ft.
    pub fn head_loss_per_length(&self, friction: f64) -> FrictionResult<f64> {
        let v = self.velocity()?;
        let hf = friction * v.powi(2) / (2.0 * constants::G0_MPS2 * self.diameter.value);
        check_finite(hf, "head loss per length")?;
        Ok(hf)
    }
}
