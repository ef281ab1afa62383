//! Build-time default precision selection.
//!
//! The generic fit and eval operations accept any `T: num_traits::Float`;
//! [`Scalar`] names the precision a build treats as its default, so code can
//! stay precision-agnostic without spelling `f32`/`f64` at every call site.

/// Default floating-point type for this build: `f64`.
///
/// Enable the `single-precision` feature to switch the default to `f32`.
/// The alias only routes to one of the fixed-precision instantiations; it
/// carries no semantics of its own.
///
/// # Example
///
/// ```
/// use curve0_core::types::Scalar;
///
/// let x: Scalar = 1.0;
/// assert_eq!(x + x, 2.0);
/// ```
#[cfg(not(feature = "single-precision"))]
pub type Scalar = f64;

/// Default floating-point type for this build: `f32` (the `single-precision`
/// feature is enabled).
#[cfg(feature = "single-precision")]
pub type Scalar = f32;
