use nalgebra::DVector;
use tracing::trace;

use crate::{
    error::{Result, SplineError},
    knot::check_samples,
};

/// Secant slopes with magnitude below this value mark a segment as flat.
pub const DEFAULT_FLAT_EPSILON: f64 = 1e-10;

/// Post-processing applied to averaged tangents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Limiter {
    /// Averaged interior tangents, one-sided boundary tangents and flat-segment zeroing only.
    None,
    /// Additionally zeroes tangents at local extrema and rescales tangent pairs into the
    /// Fritsch-Carlson circle `a² + b² <= 9`, which rules out overshoot on monotone data.
    #[default]
    FritschCarlson,
}

/// Configuration of the monotone tangent estimator.
/// # Example
/// ```
/// use monotone_cubic::{Limiter, MonotoneOptions};
///
/// let options = MonotoneOptions::default()
///     .with_flat_epsilon(1e-30)
///     .with_limiter(Limiter::None);
/// assert_eq!(1e-30, options.flat_epsilon);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonotoneOptions {
    pub flat_epsilon: f64,
    pub limiter: Limiter,
}

impl Default for MonotoneOptions {
    fn default() -> Self {
        MonotoneOptions { flat_epsilon: DEFAULT_FLAT_EPSILON, limiter: Limiter::default() }
    }
}

impl MonotoneOptions {
    pub fn with_flat_epsilon(mut self, flat_epsilon: f64) -> Self {
        self.flat_epsilon = flat_epsilon;
        self
    }

    pub fn with_limiter(mut self, limiter: Limiter) -> Self {
        self.limiter = limiter;
        self
    }

    fn validate(&self) -> Result<()> {
        if !self.flat_epsilon.is_finite() || self.flat_epsilon < 0.0 {
            return Err(SplineError::InvalidParameter { name: "flat_epsilon", value: self.flat_epsilon });
        }
        Ok(())
    }
}

/// Computes knot tangents for a shape-preserving cubic Hermite curve through `(xs, ys)`.
///
/// Interior tangents are the mean of the adjacent secants, boundary tangents equal the
/// adjacent secant and both ends of every flat segment get a zero tangent. See [Limiter]
/// for the optional monotonicity limiter.
/// # Example
/// ```
/// use monotone_cubic::{monotone_tangents, MonotoneOptions};
///
/// let tangents = monotone_tangents(&[0.0, 1.0, 2.0, 3.0], &[0.0, 1.0, 1.0, 3.0], &MonotoneOptions::default()).unwrap();
/// assert_eq!(vec![1.0, 0.0, 0.0, 2.0], tangents);
/// ```
/// # Errors
/// Same input contract as [crate::KnotTable::new], plus a finite, non-negative `flat_epsilon`.
pub fn monotone_tangents(xs: &[f64], ys: &[f64], options: &MonotoneOptions) -> Result<Vec<f64>> {
    check_samples(xs, ys)?;
    options.validate()?;

    let size = xs.len();
    let secants = DVector::from_fn(size - 1, |i, _| (ys[i + 1] - ys[i]) / (xs[i + 1] - xs[i]));

    let mut tangents = vec![0.0; size];
    for i in 1..size - 1 {
        tangents[i] = (secants[i - 1] + secants[i]) / 2.0;
    }
    tangents[0] = secants[0];
    tangents[size - 1] = secants[size - 2];

    let is_flat = |i: usize| secants[i].abs() < options.flat_epsilon;
    for i in 0..size - 1 {
        if is_flat(i) {
            trace!(segment = i, secant = secants[i], "flat segment, zeroing tangents");
            tangents[i] = 0.0;
            tangents[i + 1] = 0.0;
        }
    }

    if options.limiter == Limiter::FritschCarlson {
        for i in 1..size - 1 {
            if secants[i - 1] * secants[i] < 0.0 {
                trace!(knot = i, "local extremum, zeroing tangent");
                tangents[i] = 0.0;
            }
        }

        for i in 0..size - 1 {
            if is_flat(i) {
                continue;
            }
            let alpha = tangents[i] / secants[i];
            let beta = tangents[i + 1] / secants[i];
            let radius_squared = alpha * alpha + beta * beta;
            if radius_squared > 9.0 {
                let tau = 3.0 / radius_squared.sqrt();
                trace!(segment = i, alpha, beta, tau, "rescaling tangents");
                tangents[i] = tau * alpha * secants[i];
                tangents[i + 1] = tau * beta * secants[i];
            }
        }
    }

    Ok(tangents)
}
