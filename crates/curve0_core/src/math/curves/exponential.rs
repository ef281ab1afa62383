//! Exponential curve family `y = a * (e^(b*x) - 1)`.

use super::OriginCurve;
use crate::math::lambert::conjugate_root;
use crate::types::CurveParams;
use num_traits::Float;

/// Exponential curve anchored at the origin.
///
/// Models `y = a * (e^(b*x) - 1)`, which satisfies `y(0) = 0` for any
/// parameters. [`fit`](ExponentialCurve::fit) chooses `(a, b)` so the curve
/// also passes through a given point with a given slope there.
///
/// # Type Parameters
///
/// * `T` - Floating-point type (e.g., `f64`, `f32`)
///
/// # Example
///
/// ```
/// use curve0_core::math::curves::{ExponentialCurve, OriginCurve};
///
/// let curve = ExponentialCurve::fit(1.0_f64, 1.0, 2.0);
/// assert_eq!(curve.value(0.0), 0.0);
/// assert!((curve.value(1.0) - 1.0).abs() < 1e-9);
/// assert!((curve.derivative(1.0) - 2.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExponentialCurve<T: Float> {
    params: CurveParams<T>,
}

impl<T: Float> ExponentialCurve<T> {
    /// Fit the curve through `(x0, y0)` with slope `slope` at that point.
    ///
    /// Solves `y(x0) = y0` and `y'(x0) = slope` simultaneously. With
    /// `u = b*x0` and the ratio `r = slope*x0 / y0`, the constraints reduce
    /// to `u * e^u / (e^u - 1) = r`, whose non-trivial solution is
    /// `u = r + W(-r * e^(-r))` on the Lambert-W branch away from the
    /// trivial root (see
    /// [`conjugate_root`](crate::math::lambert::conjugate_root)). Then
    /// `b = u / x0` and `a = y0 / (e^u - 1)`.
    ///
    /// `r > 1` puts `u` above zero (the curve steepens past the anchor);
    /// `r < 1` puts it below (the saturating shape).
    ///
    /// # Degenerate inputs
    ///
    /// No validation is performed. `x0 == 0`, `y0 == 0`, a slope whose sign
    /// disagrees with the chord (`r <= 0`), or a slope equal to the chord
    /// slope (`r == 1`, the straight-line limit) degrade through
    /// floating-point arithmetic to non-finite parameters, which evaluation
    /// then propagates.
    pub fn fit(x0: T, y0: T, slope: T) -> Self {
        let r = slope * x0 / y0;
        // u = b * x0
        let u = r + conjugate_root(r);
        let b = u / x0;
        let a = y0 / u.exp_m1();
        Self {
            params: CurveParams::new(a, b),
        }
    }

    /// Re-attach previously fitted parameters to an evaluator.
    ///
    /// The parameters must come from an exponential fit of the same
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

impl<T: Float> OriginCurve<T> for ExponentialCurve<T> {
    #[inline]
    fn value(&self, x: T) -> T {
        self.params.a() * (self.params.b() * x).exp_m1()
    }

    #[inline]
    fn derivative(&self, x: T) -> T {
        self.params.a() * self.params.b() * (self.params.b() * x).exp()
    }
}
