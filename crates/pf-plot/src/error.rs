//! Error types for chart display.

use thiserror::Error;

/// Errors raised while opening or running a chart window.
#[derive(Error, Debug)]
pub enum PlotError {
    #[error("Window backend error: {0}")]
    Backend(String),
}

pub type PlotResult<T> = Result<T, PlotError>;

impl From<eframe::Error> for PlotError {
    fn from(e: eframe::Error) -> Self {
        PlotError::Backend(e.to_string())
    }
}
