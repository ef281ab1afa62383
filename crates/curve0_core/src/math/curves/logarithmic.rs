//! Logarithmic curve family `y = a * ln(b*x + 1)`.

use super::OriginCurve;
use crate::math::lambert::conjugate_root;
use crate::types::CurveParams;
use num_traits::Float;

/// Logarithmic curve anchored at the origin.
///
/// Models `y = a * ln(b*x + 1)`, which satisfies `y(0) = 0` for any
/// parameters. The curve is only real-valued on `b*x + 1 > 0`; evaluation
/// does not check the domain, so an out-of-domain `x` yields NaN from the
/// underlying logarithm, propagated untouched.
///
/// # Type Parameters
///
/// * `T` - Floating-point type (e.g., `f64`, `f32`)
///
/// # Example
///
/// ```
/// use curve0_core::math::curves::{LogarithmicCurve, OriginCurve};
///
/// let curve = LogarithmicCurve::fit(1.0_f64, 1.0, 0.5);
/// assert_eq!(curve.value(0.0), 0.0);
/// assert!((curve.value(1.0) - 1.0).abs() < 1e-9);
/// assert!((curve.derivative(1.0) - 0.5).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogarithmicCurve<T: Float> {
    params: CurveParams<T>,
}

impl<T: Float> LogarithmicCurve<T> {
    /// Fit the curve through `(x0, y0)` with slope `slope` at that point.
    ///
    /// Solves `y(x0) = y0` and `y'(x0) = slope` simultaneously. The
    /// derivation is the dual of the exponential one: with
    /// `w = ln(b*x0 + 1)` and the reciprocal ratio `p = y0 / (slope*x0)`,
    /// the constraints reduce to `(1 - e^(-w)) / w = 1/p`, whose non-trivial
    /// solution is `w = p + W(-p * e^(-p))` on the Lambert-W branch away
    /// from the trivial root (see
    /// [`conjugate_root`](crate::math::lambert::conjugate_root)). Then
    /// `a = y0 / w` and `b = (e^w - 1) / x0`.
    ///
    /// # Degenerate inputs
    ///
    /// No validation is performed. `x0 == 0`, `y0 == 0`, `slope == 0`, a
    /// slope whose sign disagrees with the chord, or a slope equal to the
    /// chord slope (the straight-line limit) degrade through floating-point
    /// arithmetic to non-finite parameters, which evaluation then
    /// propagates.
    pub fn fit(x0: T, y0: T, slope: T) -> Self {
        let p = y0 / (slope * x0);
        // w = ln(b * x0 + 1)
        let w = p + conjugate_root(p);
        let a = y0 / w;
        let b = w.exp_m1() / x0;
        Self {
            params: CurveParams::new(a, b),
        }
    }

    /// Re-attach previously fitted parameters to an evaluator.
    ///
    /// The parameters must come from a logarithmic fit of the same
    /// precision; this is a caller contract, not a checked one.
    #[inline]
    pub fn from_params(params: CurveParams<T>) -> Self {
        Self { params }
    }

    /// Return the fitted parameter pair.
    #[inline]
    pub fn params(&self) -> CurveParams<T> {
        self.params
    }
}

impl<T: Float> OriginCurve<T> for LogarithmicCurve<T> {
    #[inline]
    fn value(&self, x: T) -> T {
        self.params.a() * (self.params.b() * x).ln_1p()
    }

    #[inline]
    fn derivative(&self, x: T) -> T {
        let b = self.params.b();
        self.params.a() * b / (b * x + T::one())
    }
}
