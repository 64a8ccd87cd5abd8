//! Error types shared between model families.
//!
//! Bad parameters are reported when a model is built ([`ConstructionError`]);
//! bad query points are reported when a model is evaluated ([`DomainError`]).

use thiserror::Error;

use crate::math::Scalar;

/// Raised when a model is created from invalid parameters.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConstructionError {
    /// A parameter is NaN or infinite.
    #[error("parameter `{parameter}` must be finite, got {value}")]
    NonFinite {
        /// Parameter name.
        parameter: &'static str,
        /// Offending value.
        value: Scalar,
    },
    /// A parameter that must be non-negative is negative.
    #[error("parameter `{parameter}` must be non-negative, got {value}")]
    Negative {
        /// Parameter name.
        parameter: &'static str,
        /// Offending value.
        value: Scalar,
    },
    /// An empirical exponent lies outside its physical range.
    #[error("parameter `{parameter}` = {value} is outside {expected}")]
    OutOfRange {
        /// Parameter name.
        parameter: &'static str,
        /// Offending value.
        value: Scalar,
        /// Human-readable accepted interval.
        expected: &'static str,
    },
    /// Frequency and permittivity sample sequences differ in length.
    #[error("table has {frequencies} frequencies but {values} permittivity values")]
    LengthMismatch {
        /// Number of frequency samples.
        frequencies: usize,
        /// Number of permittivity samples.
        values: usize,
    },
    /// Per-pole parameter lists of a composite model differ in length.
    #[error("pole parameter `{parameter}` has {found} entries, expected {expected}")]
    PoleCountMismatch {
        /// Parameter name.
        parameter: &'static str,
        /// Number of poles implied by the first parameter list.
        expected: usize,
        /// Number of entries in the offending list.
        found: usize,
    },
    /// Not enough samples to interpolate.
    #[error("table needs at least {required} samples, got {found}")]
    TooFewSamples {
        /// Number of samples supplied.
        found: usize,
        /// Minimum number of samples.
        required: usize,
    },
    /// Table frequencies are duplicated or out of order.
    #[error("table frequencies must be strictly increasing: omega[{index}] = {current} follows {previous}")]
    NonIncreasingFrequency {
        /// Index of the offending sample.
        index: usize,
        /// Frequency of the preceding sample.
        previous: Scalar,
        /// Frequency of the offending sample.
        current: Scalar,
    },
}

/// Raised when a model is evaluated at a frequency where it is undefined.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    /// The model has a pole at the requested frequency (division by zero).
    #[error("{model} has a pole at omega = {omega} rad/s")]
    Pole {
        /// Name of the model family.
        model: &'static str,
        /// Requested angular frequency.
        omega: Scalar,
    },
    /// The requested frequency lies outside a non-extrapolating table.
    #[error("omega = {omega} rad/s is outside the tabulated range [{min}, {max}] rad/s")]
    OutOfRange {
        /// Requested angular frequency.
        omega: Scalar,
        /// Lowest tabulated frequency.
        min: Scalar,
        /// Highest tabulated frequency.
        max: Scalar,
    },
    /// The requested frequency is NaN or infinite.
    #[error("angular frequency must be finite, got {omega}")]
    NonFiniteFrequency {
        /// Requested angular frequency.
        omega: Scalar,
    },
}

/// Top-level error type for the crate.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PermittivityError {
    /// Wraps parameter validation failures.
    #[error(transparent)]
    Construction(#[from] ConstructionError),
    /// Wraps evaluation failures.
    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Fails unless `value` is finite.
pub(crate) fn require_finite(parameter: &'static str, value: Scalar) -> Result<Scalar, ConstructionError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ConstructionError::NonFinite { parameter, value })
    }
}

/// Fails unless `value` is finite and non-negative.
pub(crate) fn require_non_negative(
    parameter: &'static str,
    value: Scalar,
) -> Result<Scalar, ConstructionError> {
    require_finite(parameter, value)?;
    if value < 0.0 {
        Err(ConstructionError::Negative { parameter, value })
    } else {
        Ok(value)
    }
}

/// Fails unless `omega` is a usable query frequency.
pub(crate) fn check_frequency(omega: Scalar) -> Result<Scalar, DomainError> {
    if omega.is_finite() {
        Ok(omega)
    } else {
        Err(DomainError::NonFiniteFrequency { omega })
    }
}
