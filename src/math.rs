//! Shared numerical primitives anchored on `num-complex`.

use std::f64::consts::PI;

use num_complex::Complex;

/// Primary scalar type used across the crate.
pub type Scalar = f64;
/// Primary complex scalar type used for permittivities.
pub type CScalar = Complex<Scalar>;

/// Imaginary unit `j`.
pub const J: CScalar = Complex::new(0.0, 1.0);

/// Lifts a real value onto the real axis.
#[inline]
#[must_use]
pub const fn real(value: Scalar) -> CScalar {
    Complex::new(value, 0.0)
}

/// Raises `z` to the real power `p` on the principal branch.
///
/// The power is taken in polar form, `|z|^p · e^(j p arg z)` with
/// `arg z ∈ (−π, π]`, so results do not depend on how a particular complex
/// library picks its logarithm branch. Integer exponents 0 and 1 are returned
/// exactly, and `0^p = 0` for every `p > 0`.
#[must_use]
pub fn principal_powf(z: CScalar, p: Scalar) -> CScalar {
    if p == 1.0 {
        return z;
    }
    if p == 0.0 {
        return real(1.0);
    }
    let (magnitude, mut angle) = z.to_polar();
    // atan2 yields −π for a negative real axis carrying −0.0.
    if angle == -PI {
        angle = PI;
    }
    if magnitude == 0.0 {
        return if p > 0.0 {
            real(0.0)
        } else {
            real(Scalar::INFINITY)
        };
    }
    Complex::from_polar(magnitude.powf(p), angle * p)
}

/// Returns `true` when `z` is exactly zero in both components.
#[inline]
#[must_use]
pub(crate) fn is_zero(z: CScalar) -> bool {
    z.re == 0.0 && z.im == 0.0
}
