//! Shape-preserving piecewise cubic Hermite interpolation of one-dimensional sample tables.
//! The curve passes through every sample and does not overshoot between samples whose values
//! are monotonically ordered, which makes it suitable for calibration curves, tone curves and
//! resampling of lookup tables.
//!
//! # Example
//! ```
//! use monotone_cubic::HermiteSpline;
//! use assert_approx_eq::assert_approx_eq;
//!
//! let xs: Vec<f64> = (0..=10).map(|i| i as f64 / 10.0).collect();
//! let ys: Vec<f64> = xs.iter().map(|x| x.sin()).collect();
//! let spline = HermiteSpline::monotone(&xs, &ys).unwrap();
//!
//! assert_eq!(0.0, spline.interpolate(0.0).unwrap());
//! assert_eq!(1.0_f64.sin(), spline.interpolate(1.0).unwrap());
//! assert_approx_eq!(0.05_f64.sin(), spline.interpolate(0.05).unwrap(), 1e-3);
//! assert!(spline.interpolate(1.5).is_err());
//! ```

mod basis;
mod error;
mod knot;
mod monotone;
mod spline;

pub use error::{Result, SplineError};
pub use knot::KnotTable;
pub use monotone::{monotone_tangents, Limiter, MonotoneOptions, DEFAULT_FLAT_EPSILON};
pub use spline::HermiteSpline;
