//! Darcy friction-factor correlations.

use crate::error::{FrictionError, FrictionResult};

/// Upper Reynolds number of the laminar regime.
pub const RE_LAMINAR_MAX: f64 = 2000.0;

/// Lower Reynolds number of the fully turbulent regime.
pub const RE_TURBULENT_MIN: f64 = 4000.0;

/// Flow regime by Reynolds number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowRegime {
    Laminar,
    Transitional,
    Turbulent,
}

impl FlowRegime {
    /// Classify a Reynolds number.
    pub fn classify(reynolds: f64) -> Self {
        if reynolds <= RE_LAMINAR_MAX {
            FlowRegime::Laminar
        } else if reynolds >= RE_TURBULENT_MIN {
            FlowRegime::Turbulent
        } else {
            FlowRegime::Transitional
        }
    }
}

fn check_reynolds(reynolds: f64) -> FrictionResult<()> {
    if !reynolds.is_finite() || reynolds <= 0.0 {
        return Err(FrictionError::NonPhysical {
            what: "Reynolds number",
        });
    }
    Ok(())
}

/// Laminar friction factor, f = 64/Re.
pub fn laminar(reynolds: f64) -> FrictionResult<f64> {
    check_reynolds(reynolds)?;
    Ok(64.0 / reynolds)
}

/// Turbulent friction factor using the Swamee-Jain approximation to the
/// Colebrook-White equation.
///
/// `rel_roughness` is ε/D; sensible inputs lie between 0 and 0.05.
pub fn swamee_jain(reynolds: f64, rel_roughness: f64) -> FrictionResult<f64> {
    check_reynolds(reynolds)?;
    if !rel_roughness.is_finite() || rel_roughness < 0.0 {
        return Err(FrictionError::NonPhysical {
            what: "relative roughness",
        });
    }

    let a = rel_roughness / 3.7;
    let b = 5.74 / reynolds.powf(0.9);
    let f = 0.25 / (a + b).log10().powi(2);
    Ok(f.max(0.0001)) // Clamp to avoid issues
}
