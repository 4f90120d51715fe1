use thiserror::Error;

/// Reasons a set of launch parameters has no usable closed-form trajectory.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum TheoryError {
    #[error("gravity must be positive, got {0} m/s^2")]
    NonPositiveGravity(f64),
    #[error("speed must be positive, got {0} m/s")]
    NonPositiveSpeed(f64),
    #[error("flight time must be a positive finite number, got {0} s")]
    DegenerateFlightTime(f64),
}

#[derive(Debug, Error)]
pub enum PlotError {
    #[error("nothing to plot: prediction and trail are both empty")]
    EmptyPath,
    #[error("failed to render chart: {0}")]
    Render(String),
}
