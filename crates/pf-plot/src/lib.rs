//! pf-plot: chart windows for friction and simulation results.
//!
//! Each entry point is a stateless "render these series" call that opens one
//! blocking window and returns when the user closes it. No drawing state
//! outlives the call.

pub mod error;
pub mod moody_view;
pub mod trajectory_view;

// Re-exports
pub use error::{PlotError, PlotResult};
pub use moody_view::{MarkedPoint, MoodyView, show_moody};
pub use trajectory_view::{TrajectoryView, show_trajectory};
