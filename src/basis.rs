/// Cubic Hermite basis weights at normalized position `t` in `[0, 1]`.
///
/// The left value weight is not stored: it is `1 - h01` for values and `-h01` for
/// derivatives, so both are blended in difference form. This returns `y0` unchanged
/// whenever `y1 == y0` and both tangents vanish.
/// - `h10` - weight of the left tangent (before scaling by interval width),
/// - `h01` - weight of the right value,
/// - `h11` - weight of the right tangent (before scaling by interval width).
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct HermiteBasis {
    pub h10: f64,
    pub h01: f64,
    pub h11: f64,
}

impl HermiteBasis {
    pub fn at(t: f64) -> Self {
        let t2 = t * t;
        let t3 = t2 * t;
        HermiteBasis {
            h10: t3 - 2.0 * t2 + t,
            h01: -2.0 * t3 + 3.0 * t2,
            h11: t3 - t2,
        }
    }

    /// Derivatives of the basis polynomials with respect to `t`.
    pub fn derivative_at(t: f64) -> Self {
        let t2 = t * t;
        HermiteBasis {
            h10: 3.0 * t2 - 4.0 * t + 1.0,
            h01: -6.0 * t2 + 6.0 * t,
            h11: 3.0 * t2 - 2.0 * t,
        }
    }

    /// Curve value from weights built by [HermiteBasis::at], over an interval of width `h`.
    pub fn value(&self, y0: f64, y1: f64, m0: f64, m1: f64, h: f64) -> f64 {
        y0 + self.rise(y0, y1, m0, m1, h)
    }

    /// Derivative with respect to `t` from weights built by [HermiteBasis::derivative_at].
    /// Divide by `h` for the derivative with respect to `x`.
    pub fn slope(&self, y0: f64, y1: f64, m0: f64, m1: f64, h: f64) -> f64 {
        self.rise(y0, y1, m0, m1, h)
    }

    fn rise(&self, y0: f64, y1: f64, m0: f64, m1: f64, h: f64) -> f64 {
        self.h01 * (y1 - y0) + h * (self.h10 * m0 + self.h11 * m1)
    }
}
