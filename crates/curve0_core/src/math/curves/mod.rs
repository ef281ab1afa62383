//! Origin-anchored curve families.
//!
//! This module provides:
//! - [`OriginCurve`]: common trait over the two families (`value` and
//!   analytic `derivative`)
//! - [`ExponentialCurve`]: the family `y = a * (e^(b*x) - 1)`
//! - [`LogarithmicCurve`]: the family `y = a * ln(b*x + 1)`
//!
//! Both families pass through the coordinate origin for every finite
//! parameter choice, by construction of the formulas. Fitting a family to a
//! point `(x0, y0)` and a slope at that point is closed-form; the two
//! derivations are duals of each other and share the same Lambert-W core
//! ([`conjugate_root`](crate::math::lambert::conjugate_root)).
//!
//! Fixed-precision aliases are provided for callers that want to name a
//! precision rather than instantiate the generics themselves.

mod exponential;
mod logarithmic;
mod traits;

pub use exponential::ExponentialCurve;
pub use logarithmic::LogarithmicCurve;
pub use traits::OriginCurve;

/// Single-precision exponential curve.
pub type ExponentialCurve32 = ExponentialCurve<f32>;

/// Double-precision exponential curve.
pub type ExponentialCurve64 = ExponentialCurve<f64>;

/// Single-precision logarithmic curve.
pub type LogarithmicCurve32 = LogarithmicCurve<f32>;

/// Double-precision logarithmic curve.
pub type LogarithmicCurve64 = LogarithmicCurve<f64>;
