//! Real branches of the Lambert W function.
//!
//! `W(z)` solves `w * e^w = z`. For `z` in `(-1/e, 0)` there are two real
//! solutions: the principal branch `W0` (with `w >= -1`) and the secondary
//! branch `W-1` (with `w <= -1`). The curve fits in
//! [`curves`](crate::math::curves) reduce to finding the non-trivial root of
//! `v * e^v = -q * e^(-q)`, which lives on one of these branches depending on
//! the sign of `q - 1`; [`conjugate_root`] encapsulates that branch rule.
//!
//! Both branches follow the crate-wide no-validation contract: arguments
//! outside a branch domain flow through the underlying logarithms and square
//! roots to NaN rather than an error, and evaluation stays bounded (the
//! refinement loop has a fixed iteration cap).

use num_traits::Float;

/// Iteration cap for the Halley refinement. The closed-form starting points
/// below are accurate to a few percent on the domains the fits use, so
/// convergence to machine precision takes three or four steps; the cap
/// bounds the loop for non-finite inputs.
const MAX_HALLEY_STEPS: usize = 8;

/// Refine a starting point for `w * e^w = z` with Halley's method.
///
/// `w_{n+1} = w_n - f / (e^w * (w + 1) - (w + 2) * f / (2w + 2))` with
/// `f = w * e^w - z`. Cubic convergence on smooth starting points; a
/// non-finite start or target simply rides the cap and returns non-finite.
fn halley<T: Float>(z: T, start: T) -> T {
    let one = T::one();
    let two = T::from(2.0).unwrap();
    let mut w = start;
    for _ in 0..MAX_HALLEY_STEPS {
        let ew = w.exp();
        let residual = w * ew - z;
        if residual == T::zero() {
            break;
        }
        let wp1 = w + one;
        let step = residual / (ew * wp1 - (w + two) * residual / (two * wp1));
        w = w - step;
        if step.abs() <= T::epsilon() * w.abs() {
            break;
        }
    }
    w
}

/// Series expansion about the branch point `z = -1/e`, where both real
/// branches meet at `w = -1`. `sign` is `+1` for `W0`, `-1` for `W-1`.
fn branch_point_series<T: Float>(z: T, sign: T) -> T {
    let one = T::one();
    let two = T::from(2.0).unwrap();
    let three = T::from(3.0).unwrap();
    let c3 = T::from(11.0 / 72.0).unwrap();
    let e = T::from(core::f64::consts::E).unwrap();
    // p^2 = 2 * (1 + e*z); p < 0 selects the secondary branch
    let p = (two * (one + e * z)).sqrt() * sign;
    -one + p - p * p / three + c3 * p * p * p
}

/// Principal branch `W0`, defined for `z >= -1/e`.
///
/// Returns the real `w >= -1` with `w * e^w = z`. Arguments below `-1/e`
/// produce NaN through the branch-point square root.
///
/// # Example
///
/// ```
/// use curve0_core::math::lambert::lambert_w0;
///
/// // The omega constant: w * e^w = 1.
/// let w = lambert_w0(1.0_f64);
/// assert!((w * w.exp() - 1.0).abs() < 1e-12);
/// assert!((w - 0.5671432904097838).abs() < 1e-12);
/// ```
pub fn lambert_w0<T: Float>(z: T) -> T {
    let half = T::from(0.5).unwrap();
    let start = if z < T::from(-0.3).unwrap() {
        branch_point_series(z, T::one())
    } else if z <= half {
        // Taylor-flavoured start, exact at z = 0
        z * (T::one() - z)
    } else {
        // ln(1 + z) tracks W0 well enough for the refinement to take over
        z.ln_1p()
    };
    halley(z, start)
}

/// Secondary branch `W-1`, defined for `z` in `[-1/e, 0)`.
///
/// Returns the real `w <= -1` with `w * e^w = z`. Non-negative arguments
/// produce NaN through `ln(-z)`.
///
/// # Example
///
/// ```
/// use curve0_core::math::lambert::lambert_wm1;
///
/// let w = lambert_wm1(-0.1_f64);
/// assert!(w < -1.0);
/// assert!((w * w.exp() + 0.1).abs() < 1e-12);
/// ```
pub fn lambert_wm1<T: Float>(z: T) -> T {
    let start = if z < T::from(-0.25).unwrap() {
        branch_point_series(z, -T::one())
    } else {
        // Asymptotic form for z -> 0-: W-1(z) ~ L1 - L2 + L2/L1
        let l1 = (-z).ln();
        let l2 = (-l1).ln();
        l1 - l2 + l2 / l1
    };
    halley(z, start)
}

/// Non-trivial root of `v * e^v = -q * e^(-q)`.
///
/// `v = -q` always solves the equation; this returns the other real root,
/// selecting the Lambert-W branch that avoids the trivial one: `W0` when
/// `q > 1` (the trivial root lies on `W-1`) and `W-1` otherwise. At `q = 1`
/// the two roots coincide at `-1`, and for `q <= 0` no second real root
/// exists; both cases degrade to non-finite results through the branch
/// evaluations rather than being rejected.
///
/// # Example
///
/// ```
/// use curve0_core::math::lambert::conjugate_root;
///
/// let target = -2.0 * (-2.0_f64).exp();
/// let v = conjugate_root(2.0_f64);
/// assert!((v * v.exp() - target).abs() < 1e-12);
/// // ...and it is not the trivial root v = -2.
/// assert!((v + 2.0).abs() > 1.0);
/// ```
pub fn conjugate_root<T: Float>(q: T) -> T {
    let z = -q * (-q).exp();
    if q > T::one() {
        lambert_w0(z)
    } else {
        lambert_wm1(z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    // ========================================
    // Principal branch
    // ========================================

    #[test]
    fn test_w0_at_zero() {
        assert_eq!(lambert_w0(0.0_f64), 0.0);
    }

    #[test]
    fn test_w0_omega_constant() {
        let w = lambert_w0(1.0_f64);
        assert_relative_eq!(w, 0.5671432904097838, max_relative = 1e-13);
    }

    #[test]
    fn test_w0_at_e() {
        let w = lambert_w0(core::f64::consts::E);
        assert_relative_eq!(w, 1.0, max_relative = 1e-13);
    }

    #[test]
    fn test_w0_defining_property() {
        for z in [-0.35, -0.2, -0.05, 0.5, 2.0, 10.0_f64] {
            let w = lambert_w0(z);
            assert_relative_eq!(w * w.exp(), z, max_relative = 1e-12);
            assert!(w >= -1.0, "W0({}) = {} left the principal branch", z, w);
        }
    }

    #[test]
    fn test_w0_below_branch_point_is_nan() {
        assert!(lambert_w0(-1.0_f64).is_nan());
        assert!(lambert_w0(-0.5_f64).is_nan());
    }

    // ========================================
    // Secondary branch
    // ========================================

    #[test]
    fn test_wm1_defining_property() {
        for z in [-0.3678, -0.35, -0.2, -0.05, -1e-3_f64] {
            let w = lambert_wm1(z);
            assert_relative_eq!(w * w.exp(), z, max_relative = 1e-12);
            assert!(w <= -1.0, "W-1({}) = {} left the secondary branch", z, w);
        }
    }

    #[test]
    fn test_wm1_known_value() {
        // w * e^w = -0.1 on the secondary branch
        let w = lambert_wm1(-0.1_f64);
        assert_relative_eq!(w, -3.577152063957297, max_relative = 1e-8);
    }

    #[test]
    fn test_wm1_non_negative_arg_is_nan() {
        assert!(lambert_wm1(0.0_f64).is_nan());
        assert!(lambert_wm1(0.1_f64).is_nan());
    }

    // ========================================
    // Conjugate root
    // ========================================

    #[test]
    fn test_conjugate_root_above_one() {
        let q = 2.0_f64;
        let v = conjugate_root(q);
        assert_relative_eq!(v * v.exp(), -q * (-q).exp(), max_relative = 1e-12);
        assert!(v > -1.0 && v < 0.0);
        assert!((v + q).abs() > 0.5);
    }

    #[test]
    fn test_conjugate_root_below_one() {
        let q = 0.5_f64;
        let v = conjugate_root(q);
        assert_relative_eq!(v * v.exp(), -q * (-q).exp(), max_relative = 1e-12);
        assert!(v < -1.0);
        assert_relative_eq!(v, -1.7564312, max_relative = 1e-6);
    }

    #[test]
    fn test_conjugate_root_pairs_are_symmetric() {
        // If v is the conjugate of q, then q is (up to sign bookkeeping)
        // the conjugate of -v: both satisfy the same defining equation.
        for q in [1.5, 3.0, 0.25_f64] {
            let v = conjugate_root(q);
            let back = conjugate_root(-v);
            assert_relative_eq!(back, -q, max_relative = 1e-9);
        }
    }

    #[test]
    fn test_conjugate_root_non_positive_is_non_finite() {
        assert!(!conjugate_root(0.0_f64).is_finite());
        assert!(!conjugate_root(-1.0_f64).is_finite());
    }

    #[test]
    fn test_with_f32() {
        let w = lambert_w0(0.5_f32);
        assert_relative_eq!(w * w.exp(), 0.5_f32, max_relative = 1e-5);

        let w = lambert_wm1(-0.2_f32);
        assert_relative_eq!(w * w.exp(), -0.2_f32, max_relative = 1e-5);
    }
}
