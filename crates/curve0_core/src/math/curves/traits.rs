//! Origin-anchored curve trait definition.

use num_traits::Float;

/// Common surface of the origin-anchored curve families.
///
/// Implementations model a two-parameter curve that passes through the
/// coordinate origin for every finite parameter choice, so a fitted curve is
/// fully described by its parameter pair.
///
/// # Contract
///
/// - `value(0) == 0` exactly for finite parameters (the origin intersection
///   is a property of the formulas, not re-checked at evaluation time)
/// - `derivative` is the exact analytic slope, not a numerical estimate
/// - Neither method validates its input: out-of-domain arguments and
///   non-finite parameters follow IEEE-754 semantics through to the result
///
/// # Example
///
/// ```
/// use curve0_core::math::curves::{ExponentialCurve, OriginCurve};
///
/// fn chord_slope<T: num_traits::Float>(curve: &impl OriginCurve<T>, x: T) -> T {
///     curve.value(x) / x
/// }
///
/// let curve = ExponentialCurve::fit(1.0_f64, 1.0, 2.0);
/// assert!((chord_slope(&curve, 1.0) - 1.0).abs() < 1e-9);
/// ```
pub trait OriginCurve<T: Float> {
    /// Curve value at `x`.
    fn value(&self, x: T) -> T;

    /// Analytic slope `dy/dx` at `x`.
    fn derivative(&self, x: T) -> T;
}
