//! pf-friction: pipe-flow friction factors.
//!
//! Provides:
//! - Darcy friction-factor correlations (laminar 64/Re, Swamee-Jain
//!   approximation to Colebrook-White)
//! - Moody-diagram curve families
//! - Single-point estimation with a stochastic transitional band
//! - Pipe operating-condition helpers (Reynolds number, head loss)
//!
//! # Example
//!
//! ```
//! use pf_friction::{PipeFlow, estimate};
//! use pf_core::units::{constants::nu_water_60f, gpm, inch, microinch};
//!
//! let pipe = PipeFlow::new(inch(2.0), microinch(100.0), gpm(60.0), nu_water_60f());
//! let re = pipe.reynolds().unwrap();
//! let rr = pipe.rel_roughness().unwrap();
//!
//! let mut rng = rand::rng();
//! let point = estimate(re, rr, &mut rng).unwrap();
//! println!("f = {:.4}", point.friction);
//! ```

pub mod error;
pub mod factor;
pub mod moody;
pub mod pipe;
pub mod point;

// Re-exports
pub use error::{FrictionError, FrictionResult};
pub use factor::{FlowRegime, RE_LAMINAR_MAX, RE_TURBULENT_MIN, laminar, swamee_jain};
pub use moody::{MoodyDiagram, RR_VALUES, RoughnessCurve};
pub use pipe::PipeFlow;
pub use point::{PointEstimate, estimate};
