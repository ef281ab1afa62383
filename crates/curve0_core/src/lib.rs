//! # curve0_core: Origin-Anchored Curve Fitting
//!
//! A small numeric library for a one-parameter family of exponential and
//! logarithmic curves that intersect the coordinate origin. Given a point
//! `(x0, y0)` and a desired slope at that point, the fit operations compute
//! the two parameters `(a, b)` of a curve that passes through the origin,
//! passes through `(x0, y0)`, and has the requested derivative there:
//!
//! - Exponential family: `y = a * (e^(b*x) - 1)` (`math::curves::ExponentialCurve`)
//! - Logarithmic family: `y = a * ln(b*x + 1)` (`math::curves::LogarithmicCurve`)
//!
//! Both families intersect the origin by construction for any finite
//! parameters. Fitting reduces to the secondary real branch of the Lambert W
//! function (`math::lambert`).
//!
//! ## No-Validation Contract
//!
//! No operation in this crate validates its inputs, returns an error, or
//! panics. Degenerate constraints (anchor on the y-axis, zero ordinate,
//! slope inconsistent with the family) flow through IEEE-754 arithmetic to
//! non-finite parameters, and evaluation propagates non-finite values
//! untouched. Callers that need to detect a degenerate fit can inspect
//! [`types::CurveParams::is_finite`].
//!
//! ## Precision
//!
//! All algorithms are written once, generic over `T: num_traits::Float`, so
//! the same code serves `f32` and `f64` (and any other `Float` type). Named
//! fixed-precision aliases (`ExponentialCurve32`, `CurveParams64`, ...) are
//! provided, and [`types::Scalar`] selects the build-time default precision:
//! `f64` unless the `single-precision` feature is enabled.
//!
//! ## Usage
//!
//! ```rust
//! use curve0_core::math::curves::{ExponentialCurve, LogarithmicCurve, OriginCurve};
//!
//! // Pass through (1, 1) with slope 2 at that point.
//! let curve = ExponentialCurve::fit(1.0_f64, 1.0, 2.0);
//! assert_eq!(curve.value(0.0), 0.0);
//! assert!((curve.value(1.0) - 1.0).abs() < 1e-9);
//! assert!((curve.derivative(1.0) - 2.0).abs() < 1e-9);
//!
//! // The logarithmic dual: through (1, 1) with slope 1/2.
//! let curve = LogarithmicCurve::fit(1.0_f64, 1.0, 0.5);
//! assert!((curve.value(1.0) - 1.0).abs() < 1e-9);
//! assert!((curve.derivative(1.0) - 0.5).abs() < 1e-9);
//! ```
//!
//! ## Feature Flags
//!
//! - `single-precision`: select `f32` as the [`types::Scalar`] default
//!   precision (default is `f64`)

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod types;

#[cfg(test)]
mod tests {
    #[test]
    fn version_is_wired() {
        let v = crate::types::version::version();
        assert_eq!((v.major, v.minor, v.build), (0, 1, 0));
    }
}
