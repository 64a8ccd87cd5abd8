//! Baseline physical constants and frequency conversions.
//!
//! ## Accuracy
//!
//! The speed of light is exact by SI definition (2019 revision). The vacuum
//! permittivity ε₀ and permeability μ₀ are measured constants and are given with
//! 11-12 significant figures, which is well below the uncertainty of any
//! dispersion model parameter fitted to experimental data.
//!
//! ## References
//!
//! - NIST Reference on Constants, Units, and Uncertainty: <https://physics.nist.gov/cuu/Constants/>
//! - CODATA 2018 values published May 20, 2019 (following 2019 SI redefinition)

use std::f64::consts::PI;

use crate::math::Scalar;

/// Vacuum permittivity ε₀ in farads per meter (F/m).
/// Approximate value: 8.8541878128 × 10⁻¹² F/m (11 significant figures).
///
/// Every conductivity term in this crate divides by this single constant.
pub const VACUUM_PERMITTIVITY: Scalar = 8.854_187_812_8e-12;
/// Vacuum permeability μ₀ in henries per meter (H/m).
/// Approximate value: 1.25663706212 × 10⁻⁶ H/m (12 significant figures).
pub const VACUUM_PERMEABILITY: Scalar = 1.256_637_062_12e-6;
/// Speed of light in vacuum _c_ in meters per second (m/s).
/// Exact value by SI definition (2019): 299,792,458 m/s.
pub const SPEED_OF_LIGHT: Scalar = 299_792_458.0;

/// Returns the angular frequency corresponding to a linear frequency `hz`.
#[inline]
#[must_use]
pub fn angular_frequency(hz: Scalar) -> Scalar {
    2.0 * PI * hz
}

/// Returns the linear frequency in hertz for an angular frequency `omega` (rad/s).
#[inline]
#[must_use]
pub fn linear_frequency(omega: Scalar) -> Scalar {
    omega / (2.0 * PI)
}

/// Returns the angular frequency of light with free-space wavelength `meters`.
#[inline]
#[must_use]
pub fn angular_frequency_from_wavelength(meters: Scalar) -> Scalar {
    2.0 * PI * SPEED_OF_LIGHT / meters
}
