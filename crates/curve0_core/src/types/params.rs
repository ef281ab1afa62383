//! Fitted curve parameter pair.

use num_traits::Float;
use serde::{Deserialize, Serialize};

/// Parameter pair `(a, b)` of a fitted origin-anchored curve.
///
/// A plain value type: produced once by a fit operation, copied freely,
/// never mutated, and consumed any number of times by evaluation. It carries
/// no identity beyond its two components.
///
/// A `CurveParams` value is only meaningful for the curve family and
/// precision that produced it. Re-attaching exponential parameters to the
/// logarithmic evaluator (or vice versa) is a caller contract violation, not
/// a checked error.
///
/// # Type Parameters
///
/// * `T` - Floating-point type (e.g., `f64`, `f32`)
///
/// # Example
///
/// ```
/// use curve0_core::types::CurveParams;
///
/// let params = CurveParams::new(0.25_f64, 1.5);
/// assert_eq!(params.a(), 0.25);
/// assert_eq!(params.b(), 1.5);
/// assert!(params.is_finite());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurveParams<T: Float> {
    /// Scale parameter
    a: T,
    /// Rate parameter
    b: T,
}

impl<T: Float> CurveParams<T> {
    /// Construct a parameter pair from its two components.
    #[inline]
    pub fn new(a: T, b: T) -> Self {
        Self { a, b }
    }

    /// Return the scale parameter `a`.
    #[inline]
    pub fn a(&self) -> T {
        self.a
    }

    /// Return the rate parameter `b`.
    #[inline]
    pub fn b(&self) -> T {
        self.b
    }

    /// Return `true` if both components are finite.
    ///
    /// Degenerate fit inputs produce non-finite components rather than an
    /// error; this is the hook for callers that want to detect them.
    ///
    /// # Example
    ///
    /// ```
    /// use curve0_core::types::CurveParams;
    ///
    /// assert!(CurveParams::new(1.0_f64, 2.0).is_finite());
    /// assert!(!CurveParams::new(f64::NAN, 2.0).is_finite());
    /// assert!(!CurveParams::new(1.0, f64::INFINITY).is_finite());
    /// ```
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.a.is_finite() && self.b.is_finite()
    }
}

/// Single-precision parameter pair.
pub type CurveParams32 = CurveParams<f32>;

/// Double-precision parameter pair.
pub type CurveParams64 = CurveParams<f64>;
