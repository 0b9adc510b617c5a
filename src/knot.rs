use nalgebra::DVector;

use crate::error::{Result, SplineError};

/// Immutable table of knots: strictly increasing `xs`, sample values `ys` and tangents `ms`.
///
/// The table owns copies of the input data, so caller buffers may be reused or dropped
/// right after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct KnotTable {
    xs: DVector<f64>,
    ys: DVector<f64>,
    ms: DVector<f64>,
}

impl KnotTable {
    /// Validates and copies `xs`, `ys` and `ms` into a new table.
    /// # Example
    /// ```
    /// use monotone_cubic::KnotTable;
    ///
    /// let table = KnotTable::new(&[0.0, 1.0, 3.0], &[1.0, 2.0, 0.0], &[0.0, 0.0, 0.0]).unwrap();
    /// assert_eq!(3, table.len());
    /// assert_eq!((0.0, 3.0), table.domain());
    /// ```
    /// # Errors
    /// Error is returned when fewer than 2 knots are given, lengths differ, `xs` is not
    /// strictly increasing, or any value, interval width or secant slope is not finite.
    /// ```
    /// use monotone_cubic::KnotTable;
    ///
    /// let table = KnotTable::new(&[0.0, 1.0, 0.5], &[1.0, 2.0, 0.0], &[0.0, 0.0, 0.0]);
    /// assert!(table.is_err());
    /// ```
    pub fn new(xs: &[f64], ys: &[f64], ms: &[f64]) -> Result<Self> {
        if xs.len() != ys.len() || xs.len() != ms.len() {
            return Err(SplineError::LengthMismatch { xs: xs.len(), ys: ys.len(), ms: Some(ms.len()) });
        }
        check_samples(xs, ys)?;
        if let Some(index) = ms.iter().position(|m| !m.is_finite()) {
            return Err(SplineError::NonFinite { name: "ms", index });
        }

        Ok(KnotTable {
            xs: DVector::from_column_slice(xs),
            ys: DVector::from_column_slice(ys),
            ms: DVector::from_column_slice(ms),
        })
    }

    pub fn len(&self) -> usize {
        self.xs.len()
    }

    /// Always `false`, a table holds at least 2 knots.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn xs(&self) -> &[f64] {
        self.xs.as_slice()
    }

    pub fn ys(&self) -> &[f64] {
        self.ys.as_slice()
    }

    pub fn tangents(&self) -> &[f64] {
        self.ms.as_slice()
    }

    /// Closed range `(xs[0], xs[N-1])` on which the table can be queried.
    pub fn domain(&self) -> (f64, f64) {
        (self.xs[0], self.xs[self.len() - 1])
    }

    pub fn is_in_range(&self, x: f64) -> bool {
        let (min_x, max_x) = self.domain();
        min_x <= x && x <= max_x
    }

    /// Index `i` with `xs[i] <= x < xs[i+1]`, or `N-1` when `x` equals the last knot.
    /// # Example
    /// ```
    /// use monotone_cubic::KnotTable;
    ///
    /// let table = KnotTable::new(&[0.0, 1.0, 3.0], &[1.0, 2.0, 0.0], &[0.0, 0.0, 0.0]).unwrap();
    /// assert_eq!(0, table.interval_index(0.5).unwrap());
    /// assert_eq!(1, table.interval_index(1.0).unwrap());
    /// assert_eq!(2, table.interval_index(3.0).unwrap());
    /// assert!(table.interval_index(3.5).is_err());
    /// ```
    pub fn interval_index(&self, x: f64) -> Result<usize> {
        self.check_in_range(x)?;
        Ok(self.find_interval_index(x))
    }

    pub(crate) fn check_in_range(&self, x: f64) -> Result<()> {
        if self.is_in_range(x) {
            Ok(())
        } else {
            let (min, max) = self.domain();
            Err(SplineError::OutOfDomain { x, min, max })
        }
    }

    /// Bisection over `xs`. Caller guarantees `x` is in range.
    pub(crate) fn find_interval_index(&self, x: f64) -> usize {
        let size = self.len();
        if x == self.xs[size - 1] {
            return size - 1;
        }

        let mut min = 0;
        let mut max = size - 1;
        while max - min > 1 {
            let mid = (min + max) / 2;
            if x < self.xs[mid] {
                max = mid;
            } else {
                min = mid;
            }
        }
        min
    }

    /// Like [KnotTable::find_interval_index] but first tries `index_hint` and its right neighbour.
    pub(crate) fn find_interval_index_with_hint(&self, index_hint: usize, x: f64) -> usize {
        if self.is_in_interval_range(index_hint, x) {
            return index_hint;
        }
        if self.is_in_interval_range(index_hint + 1, x) {
            return index_hint + 1;
        }
        self.find_interval_index(x)
    }

    fn is_in_interval_range(&self, interval_index: usize, x: f64) -> bool {
        interval_index + 1 < self.len()
            && self.xs[interval_index] <= x
            && x < self.xs[interval_index + 1]
    }
}

/// Checks the `(xs, ys)` sample contract shared by every constructor: at least 2 samples,
/// equal lengths, finite values, strictly increasing `xs`, and finite interval widths and
/// secant slopes.
pub(crate) fn check_samples(xs: &[f64], ys: &[f64]) -> Result<()> {
    if xs.len() != ys.len() {
        return Err(SplineError::LengthMismatch { xs: xs.len(), ys: ys.len(), ms: None });
    }
    if xs.len() < 2 {
        return Err(SplineError::TooFewKnots { len: xs.len() });
    }
    if let Some(index) = xs.iter().position(|x| !x.is_finite()) {
        return Err(SplineError::NonFinite { name: "xs", index });
    }
    if let Some(index) = ys.iter().position(|y| !y.is_finite()) {
        return Err(SplineError::NonFinite { name: "ys", index });
    }

    for i in 0..xs.len() - 1 {
        let width = xs[i + 1] - xs[i];
        if !(width > 0.0) {
            return Err(SplineError::NotStrictlyIncreasing { index: i });
        }
        if !width.is_finite() {
            return Err(SplineError::NonFinite { name: "interval width", index: i });
        }
        if !((ys[i + 1] - ys[i]) / width).is_finite() {
            return Err(SplineError::NonFinite { name: "secant", index: i });
        }
    }
    Ok(())
}
