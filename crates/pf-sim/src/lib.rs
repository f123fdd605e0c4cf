//! Transient simulation framework for hydraulic systems.
//!
//! Provides:
//! - TransientModel trait for pluggable dynamic systems
//! - Fixed-step RK4 and adaptive Dormand-Prince 5(4) integrators
//! - Simulation driver with exact sample-time reporting
//! - Spool-valve hydraulic piston model

pub mod error;
pub mod integrator;
pub mod model;
pub mod sim;
pub mod valve;

// Re-exports for public API
pub use error::{SimError, SimResult};
pub use integrator::{Dopri45, Integrator, Rk4};
pub use model::TransientModel;
pub use sim::{IntegratorType, SimOptions, SimRecord, run_sim};
pub use valve::{
    DEFAULT_SAMPLES, DEFAULT_T_END, PistonState, PistonTrajectory, SpoolValveModel,
    SpoolValveParams, simulate,
};
