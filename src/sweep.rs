//! Frequency sweep utilities and post-processing helpers.

use num_complex::Complex;

use crate::constants::angular_frequency;
use crate::errors::DomainError;
use crate::math::{CScalar, Scalar};
use crate::models::Permittivity;

/// Generates `n` linearly spaced samples in [start, stop].
#[must_use]
pub fn linspace(start: Scalar, stop: Scalar, n: usize) -> Vec<Scalar> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n as Scalar - 1.0);
            (0..n).map(|i| start + step * i as Scalar).collect()
        }
    }
}

/// Generates `n` logarithmically spaced samples between `start` and `stop` (Hz).
///
/// # Panics
/// Requires start > 0 and stop > 0.
#[must_use]
pub fn logspace_hz(start_hz: Scalar, stop_hz: Scalar, n: usize) -> Vec<Scalar> {
    assert!(start_hz > 0.0 && stop_hz > 0.0);
    match n {
        0 => Vec::new(),
        1 => vec![start_hz],
        _ => {
            let log_start = start_hz.log10();
            let log_stop = stop_hz.log10();
            let step = (log_stop - log_start) / (n as Scalar - 1.0);
            (0..n)
                .map(|i| 10f64.powf(log_start + step * i as Scalar))
                .collect()
        }
    }
}

/// Angular frequency sweep with linear spacing between f_start and f_stop (Hz).
#[must_use]
pub fn angular_freq_linspace(f_start_hz: Scalar, f_stop_hz: Scalar, n: usize) -> Vec<Scalar> {
    linspace(f_start_hz, f_stop_hz, n)
        .into_iter()
        .map(angular_frequency)
        .collect()
}

/// Angular frequency sweep with logarithmic spacing between f_start and f_stop (Hz).
#[must_use]
pub fn angular_freq_logspace(f_start_hz: Scalar, f_stop_hz: Scalar, n: usize) -> Vec<Scalar> {
    logspace_hz(f_start_hz, f_stop_hz, n)
        .into_iter()
        .map(angular_frequency)
        .collect()
}

/// Result of evaluating a model at a single angular frequency.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepPoint {
    /// Angular frequency ω in rad/s.
    pub omega: Scalar,
    /// Complex relative permittivity at `omega`.
    pub permittivity: CScalar,
}

/// Evaluates `model` at each angular frequency, keeping input order.
///
/// Fails with the domain error of the first frequency the model rejects.
pub fn permittivity_sweep<M, I>(model: &M, omegas: I) -> Result<Vec<SweepPoint>, DomainError>
where
    M: Permittivity + ?Sized,
    I: IntoIterator<Item = Scalar>,
{
    omegas
        .into_iter()
        .map(|omega| {
            model
                .permittivity(omega)
                .map(|permittivity| SweepPoint { omega, permittivity })
                .inspect_err(|err| tracing::trace!(%err, "sweep aborted"))
        })
        .collect()
}

/// Parallel [`permittivity_sweep`] over a slice of angular frequencies.
///
/// The output and the reported error are identical to the sequential sweep:
/// when several frequencies fail, the one with the lowest index wins.
#[cfg(feature = "rayon")]
pub fn par_permittivity_sweep<M>(model: &M, omegas: &[Scalar]) -> Result<Vec<SweepPoint>, DomainError>
where
    M: Permittivity + Sync + ?Sized,
{
    use rayon::prelude::*;

    let evaluated: Vec<Result<CScalar, DomainError>> =
        omegas.par_iter().map(|&omega| model.permittivity(omega)).collect();
    omegas
        .iter()
        .zip(evaluated)
        .map(|(&omega, result)| result.map(|permittivity| SweepPoint { omega, permittivity }))
        .collect()
}

/// Real parts ε′ of a complex sequence.
#[must_use]
pub fn real_parts(values: impl IntoIterator<Item = Complex<Scalar>>) -> Vec<Scalar> {
    values.into_iter().map(|v| v.re).collect()
}

/// Imaginary parts of a complex sequence.
#[must_use]
pub fn imag_parts(values: impl IntoIterator<Item = Complex<Scalar>>) -> Vec<Scalar> {
    values.into_iter().map(|v| v.im).collect()
}

/// Magnitude of complex sequence.
#[must_use]
pub fn mag(values: impl IntoIterator<Item = Complex<Scalar>>) -> Vec<Scalar> {
    values.into_iter().map(|v| v.norm()).collect()
}

/// Phase in radians of complex sequence.
#[must_use]
pub fn phase_rad(values: impl IntoIterator<Item = Complex<Scalar>>) -> Vec<Scalar> {
    values.into_iter().map(|v| v.arg()).collect()
}

/// Phase in degrees of complex sequence.
#[must_use]
pub fn phase_deg(values: impl IntoIterator<Item = Complex<Scalar>>) -> Vec<Scalar> {
    phase_rad(values).into_iter().map(|r| r.to_degrees()).collect()
}
