use tracing::debug;

use crate::{
    basis::HermiteBasis,
    error::{Result, SplineError},
    knot::KnotTable,
    monotone::{monotone_tangents, MonotoneOptions},
};

/// Piecewise cubic Hermite curve over a [KnotTable].
///
/// Queries never mutate the spline, so a built spline can be shared between threads freely.
#[derive(Debug, Clone, PartialEq)]
pub struct HermiteSpline {
    table: KnotTable,
}

impl HermiteSpline {
    /// Builds a spline from knots with caller-supplied tangents `ms`.
    /// # Errors
    /// See [KnotTable::new].
    pub fn new(xs: &[f64], ys: &[f64], ms: &[f64]) -> Result<Self> {
        let table = KnotTable::new(xs, ys, ms)?;
        debug!(knots = table.len(), domain = ?table.domain(), "built hermite spline");
        Ok(HermiteSpline { table })
    }

    /// Builds a shape-preserving spline through `(xs, ys)` using [MonotoneOptions::default].
    ///
    /// The default [crate::Limiter::FritschCarlson] adjusts tangents at local extrema and on steep
    /// segments. Pass [crate::Limiter::None] to [HermiteSpline::monotone_with] for the plain estimator:
    /// averaged interior secants, one-sided boundary secants and flat-segment zeroing.
    /// # Example
    /// ```
    /// use monotone_cubic::HermiteSpline;
    ///
    /// let spline = HermiteSpline::monotone(&[0.0, 1.0, 2.0, 3.0], &[5.0, 5.0, 5.0, 5.0]).unwrap();
    /// assert_eq!(5.0, spline.interpolate(1.7).unwrap());
    /// ```
    pub fn monotone(xs: &[f64], ys: &[f64]) -> Result<Self> {
        Self::monotone_with(xs, ys, &MonotoneOptions::default())
    }

    pub fn monotone_with(xs: &[f64], ys: &[f64], options: &MonotoneOptions) -> Result<Self> {
        let tangents = monotone_tangents(xs, ys, options)?;
        let table = KnotTable::new(xs, ys, &tangents)?;
        debug!(
            knots = table.len(),
            domain = ?table.domain(),
            limiter = ?options.limiter,
            flat_epsilon = options.flat_epsilon,
            "built monotone cubic spline"
        );
        Ok(HermiteSpline { table })
    }

    pub fn knots(&self) -> &KnotTable {
        &self.table
    }

    pub fn domain(&self) -> (f64, f64) {
        self.table.domain()
    }

    /// Value of the curve at `x`.
    /// # Example
    /// ```
    /// use monotone_cubic::HermiteSpline;
    ///
    /// let spline = HermiteSpline::new(&[0.0, 2.0], &[-4.0, 6.0], &[3.0, 1.0]).unwrap();
    /// assert_eq!(-4.0, spline.interpolate(0.0).unwrap());
    /// assert_eq!(6.0, spline.interpolate(2.0).unwrap());
    /// assert!(spline.interpolate(2.5).is_err());
    /// ```
    /// # Errors
    /// [SplineError::OutOfDomain] when `x` is outside the knot range or NaN.
    pub fn interpolate(&self, x: f64) -> Result<f64> {
        self.table.check_in_range(x)?;
        let index = self.table.find_interval_index(x);
        Ok(self.evaluate(index, x))
    }

    /// Value of the curve at `x` clamped to the knot range. NaN gives NaN.
    pub fn interpolate_clamped(&self, x: f64) -> f64 {
        if x.is_nan() {
            return f64::NAN;
        }
        let (min_x, max_x) = self.domain();
        let x = x.clamp(min_x, max_x);
        let index = self.table.find_interval_index(x);
        self.evaluate(index, x)
    }

    /// Values of the curve at every element of `x_vector`. Sorted input is located in amortized
    /// constant time per query.
    /// # Errors
    /// Whole batch is rejected when any element is out of range.
    pub fn batch_interpolate(&self, x_vector: &[f64]) -> Result<Vec<f64>> {
        if let Some(x) = x_vector.iter().find(|x| !self.table.is_in_range(**x)) {
            let (min, max) = self.domain();
            return Err(SplineError::OutOfDomain { x: *x, min, max });
        }

        let mut results = Vec::with_capacity(x_vector.len());
        let mut index = 0;
        for x in x_vector {
            index = self.table.find_interval_index_with_hint(index, *x);
            results.push(self.evaluate(index, *x));
        }
        Ok(results)
    }

    /// First derivative of the curve at `x`. At the last knot this is its tangent.
    /// # Errors
    /// [SplineError::OutOfDomain] when `x` is outside the knot range or NaN.
    pub fn derivative(&self, x: f64) -> Result<f64> {
        self.table.check_in_range(x)?;
        let index = self.table.find_interval_index(x);
        let ms = self.table.tangents();
        if index == ms.len() - 1 {
            return Ok(ms[index]);
        }

        let (xs, ys) = (self.table.xs(), self.table.ys());
        let h = xs[index + 1] - xs[index];
        let t = (x - xs[index]) / h;
        let slope = HermiteBasis::derivative_at(t).slope(ys[index], ys[index + 1], ms[index], ms[index + 1], h);
        Ok(slope / h)
    }

    fn evaluate(&self, index: usize, x: f64) -> f64 {
        let (xs, ys, ms) = (self.table.xs(), self.table.ys(), self.table.tangents());
        if index == xs.len() - 1 {
            return ys[index];
        }

        let h = xs[index + 1] - xs[index];
        let t = (x - xs[index]) / h;
        HermiteBasis::at(t).value(ys[index], ys[index + 1], ms[index], ms[index + 1], h)
    }
}
