//! Numerical core: origin-anchored curve families and Lambert-W support.
//!
//! This module provides:
//! - `curves`: the exponential and logarithmic curve families with their
//!   fit and evaluation operations
//! - `lambert`: real branches of the Lambert W function, which both fits
//!   reduce to

pub mod curves;
pub mod lambert;
