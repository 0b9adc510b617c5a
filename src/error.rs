use std::{error::Error, fmt::Display};

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, SplineError>;

/// Errors reported by spline construction and evaluation.
///
/// Construction errors (everything except [SplineError::OutOfDomain]) are caught before any
/// query can run, so a built spline never divides by a zero-width interval.
#[derive(Debug, Clone, PartialEq)]
pub enum SplineError {
    /// Fewer than 2 knots were supplied.
    TooFewKnots { len: usize },
    /// Input arrays differ in length. `ms` is `None` when no tangents were involved.
    LengthMismatch { xs: usize, ys: usize, ms: Option<usize> },
    /// `xs[index] < xs[index + 1]` does not hold (equal, decreasing or NaN abscissae).
    NotStrictlyIncreasing { index: usize },
    /// Input value, interval width or secant slope at `index` is infinite or NaN.
    /// `name` is one of `xs`, `ys`, `ms`, `interval width`, `secant`.
    NonFinite { name: &'static str, index: usize },
    /// Estimator configuration value is unusable.
    InvalidParameter { name: &'static str, value: f64 },
    /// Query lies outside `[min, max]`.
    OutOfDomain { x: f64, min: f64, max: f64 },
}

impl SplineError {
    /// `true` for errors caused by malformed construction input.
    pub fn is_invalid_input(&self) -> bool {
        !self.is_out_of_domain()
    }

    /// `true` when a query fell outside the knot range.
    pub fn is_out_of_domain(&self) -> bool {
        matches!(self, SplineError::OutOfDomain { .. })
    }
}

impl Display for SplineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SplineError::TooFewKnots { len } => {
                write!(f, "Error in Spline: at least 2 knots are required (got {})", len)
            }
            SplineError::LengthMismatch { xs, ys, ms: Some(ms) } => write!(
                f,
                "Error in Spline: xs, ys and ms must have equal lengths (got {}, {}, {})",
                xs, ys, ms
            ),
            SplineError::LengthMismatch { xs, ys, ms: None } => write!(
                f,
                "Error in Spline: xs and ys must have equal lengths (got {}, {})",
                xs, ys
            ),
            SplineError::NotStrictlyIncreasing { index } => write!(
                f,
                "Error in Spline: xs must be strictly increasing (violated between index {} and {})",
                index,
                index + 1
            ),
            SplineError::NonFinite { name, index } => {
                write!(f, "Error in Spline: {} at index {} is not finite", name, index)
            }
            SplineError::InvalidParameter { name, value } => {
                write!(f, "Error in Spline: invalid value of {} (got {})", name, value)
            }
            SplineError::OutOfDomain { x, min, max } => {
                write!(f, "Error in Spline: x = {} is out of range [{}, {}]", x, min, max)
            }
        }
    }
}

impl Error for SplineError {}
